use log::Level;

pub const OWNER_FIRST_NAME: &str = "Michael";
pub const OWNER_LAST_NAME: &str = "Kariuki";
pub const OWNER_INITIALS: &str = "MK";
pub const OWNER_ROLE: &str = "Web Developer";

// Placeholder, replace with the real number before going live.
pub const WHATSAPP_NUMBER: &str = "254700000000";

pub const HEADER_SHADOW_THRESHOLD: f64 = 50.0;
pub const SIMULATED_SUBMIT_MS: u32 = 1_500;
pub const NOTIFICATION_TTL_MS: u32 = 5_000;
pub const NOTIFICATION_EXIT_MS: u32 = 300;

/// Scroll events are sampled at most once per animation frame.
pub const SCROLL_THROTTLE_MS: u32 = 16;
pub const RESIZE_DEBOUNCE_MS: u32 = 150;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

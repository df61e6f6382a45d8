use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};
use yew::prelude::*;

use crate::config;
use crate::parallax::scroll_progress;
use crate::timing::{Debounce, Throttle};

/// A window event listener that is removed again when dropped.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn add(event: &'static str, handler: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        if let Err(e) = window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            warn!("failed to listen for {}: {:?}", event, e);
            return None;
        }
        Some(Self { window, event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

pub fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn header_has_shadow(scroll_y: f64) -> bool {
    scroll_y > config::HEADER_SHADOW_THRESHOLD
}

/// Whether the page is scrolled far enough for the header to float.
#[hook]
pub fn use_header_shadow() -> bool {
    let shadow = use_state_eq(|| header_has_shadow(current_scroll_y()));

    {
        let shadow = shadow.clone();
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::add("scroll", move || {
                    shadow.set(header_has_shadow(current_scroll_y()));
                });
                move || drop(listener)
            },
            (),
        );
    }

    *shadow
}

/// Scroll progress (0..=1) of the referenced section leaving the top of the
/// viewport. Scroll updates are throttled with a trailing settle so the last
/// position is never lost; resizes are debounced.
/// Rate limits for re-measuring a section: scroll is throttled with a trailing
/// debounce so the last position is always measured, resize is debounced.
struct MeasureLimits {
    throttle: Throttle,
    settle: Debounce,
    resize: Debounce,
}

impl MeasureLimits {
    fn new(measure: Rc<dyn Fn()>) -> Self {
        let throttle = {
            let measure = measure.clone();
            Throttle::new(config::SCROLL_THROTTLE_MS, move || measure())
        };
        let settle = {
            let measure = measure.clone();
            Debounce::new(config::SCROLL_THROTTLE_MS, move || measure())
        };
        let resize = Debounce::new(config::RESIZE_DEBOUNCE_MS, move || measure());
        Self { throttle, settle, resize }
    }

    fn scrolled(&self) {
        if !self.throttle.call() {
            self.settle.call();
        }
    }

    fn resized(&self) {
        self.resize.call();
    }

    fn cancel(&self) {
        self.throttle.cancel();
        self.settle.cancel();
        self.resize.cancel();
    }
}

#[hook]
pub fn use_section_progress(section: NodeRef) -> f64 {
    let progress = use_state_eq(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |section: &NodeRef| {
                let section = section.clone();
                let measure: Rc<dyn Fn()> = Rc::new(move || {
                    if let Some(el) = section.cast::<Element>() {
                        let rect = el.get_bounding_client_rect();
                        progress.set(scroll_progress(rect.top(), rect.height()));
                    }
                });
                measure();

                let limits = Rc::new(MeasureLimits::new(measure));
                let on_scroll = {
                    let limits = limits.clone();
                    WindowListener::add("scroll", move || limits.scrolled())
                };
                let on_resize = {
                    let limits = limits.clone();
                    WindowListener::add("resize", move || limits.resized())
                };

                move || {
                    drop(on_scroll);
                    drop(on_resize);
                    limits.cancel();
                }
            },
            section,
        );
    }

    *progress
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::Cell;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn counting_limits() -> (Rc<Cell<u32>>, MeasureLimits) {
        let count = Rc::new(Cell::new(0));
        let measure: Rc<dyn Fn()> = {
            let count = count.clone();
            Rc::new(move || count.set(count.get() + 1))
        };
        (count, MeasureLimits::new(measure))
    }

    #[wasm_bindgen_test]
    async fn scroll_burst_measures_leading_and_trailing() {
        let (count, limits) = counting_limits();
        limits.scrolled();
        limits.scrolled();
        limits.scrolled();
        assert_eq!(count.get(), 1);
        TimeoutFuture::new(config::SCROLL_THROTTLE_MS * 4).await;
        assert_eq!(count.get(), 2);
    }

    #[wasm_bindgen_test]
    async fn teardown_cancels_pending_measurements() {
        let (count, limits) = counting_limits();
        limits.scrolled();
        limits.scrolled();
        limits.resized();
        limits.cancel();
        TimeoutFuture::new(config::RESIZE_DEBOUNCE_MS * 2).await;
        assert_eq!(count.get(), 1);
    }
}

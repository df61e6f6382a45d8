//! Timer-backed rate limiting for noisy browser events.
//!
//! Both helpers own their pending [`Timeout`]. Dropping the helper drops the
//! timeout, which clears it, so nothing fires after the owning component is
//! gone.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Runs the action once `wait_ms` has passed without another call.
pub struct Debounce {
    wait_ms: u32,
    action: Rc<dyn Fn()>,
    pending: RefCell<Option<Timeout>>,
}

impl Debounce {
    pub fn new(wait_ms: u32, action: impl Fn() + 'static) -> Self {
        Self {
            wait_ms,
            action: Rc::new(action),
            pending: RefCell::new(None),
        }
    }

    pub fn call(&self) {
        let action = self.action.clone();
        let timeout = Timeout::new(self.wait_ms, move || action());
        // Replacing the previous timeout drops it, which cancels it.
        self.pending.replace(Some(timeout));
    }

    pub fn cancel(&self) {
        if let Some(timeout) = self.pending.take() {
            timeout.cancel();
        }
    }
}

/// Runs the action immediately, then ignores calls until `limit_ms` has passed.
pub struct Throttle {
    limit_ms: u32,
    action: Rc<dyn Fn()>,
    open: Rc<Cell<bool>>,
    reopen: RefCell<Option<Timeout>>,
}

impl Throttle {
    pub fn new(limit_ms: u32, action: impl Fn() + 'static) -> Self {
        Self {
            limit_ms,
            action: Rc::new(action),
            open: Rc::new(Cell::new(true)),
            reopen: RefCell::new(None),
        }
    }

    /// Returns whether the action ran.
    pub fn call(&self) -> bool {
        if !self.open.get() {
            return false;
        }
        self.open.set(false);
        (self.action)();

        let open = self.open.clone();
        let timeout = Timeout::new(self.limit_ms, move || open.set(true));
        self.reopen.replace(Some(timeout));
        true
    }

    /// Drops the pending reopen and lets the next call through.
    pub fn cancel(&self) {
        if let Some(timeout) = self.reopen.take() {
            timeout.cancel();
        }
        self.open.set(true);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn counter() -> (Rc<Cell<u32>>, impl Fn() + 'static) {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        (count, move || c.set(c.get() + 1))
    }

    #[wasm_bindgen_test]
    async fn debounce_collapses_bursts() {
        let (count, bump) = counter();
        let debounce = Debounce::new(20, bump);
        debounce.call();
        debounce.call();
        debounce.call();
        assert_eq!(count.get(), 0);
        TimeoutFuture::new(50).await;
        assert_eq!(count.get(), 1);
    }

    #[wasm_bindgen_test]
    async fn debounce_cancel_and_drop_stop_pending_calls() {
        let (count, bump) = counter();
        let debounce = Debounce::new(20, bump);
        debounce.call();
        debounce.cancel();
        TimeoutFuture::new(50).await;
        assert_eq!(count.get(), 0);

        debounce.call();
        drop(debounce);
        TimeoutFuture::new(50).await;
        assert_eq!(count.get(), 0);
    }

    #[wasm_bindgen_test]
    async fn throttle_runs_leading_call_then_reopens() {
        let (count, bump) = counter();
        let throttle = Throttle::new(20, bump);
        assert!(throttle.call());
        assert!(!throttle.call());
        assert_eq!(count.get(), 1);
        TimeoutFuture::new(50).await;
        assert!(throttle.call());
        assert_eq!(count.get(), 2);
    }

    #[wasm_bindgen_test]
    fn throttle_cancel_reopens_immediately() {
        let (count, bump) = counter();
        let throttle = Throttle::new(1_000, bump);
        assert!(throttle.call());
        throttle.cancel();
        assert!(throttle.call());
        assert_eq!(count.get(), 2);
    }
}

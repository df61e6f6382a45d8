use std::cell::Cell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl RevealOptions {
    /// Sections further down the page: 10% visible, bottom edge pulled in by 50px.
    pub const SCROLL: RevealOptions = RevealOptions { threshold: 0.1, root_margin: "0px 0px -50px 0px" };
    /// Hero blocks: any pixel visible inside a viewport shrunk by 100px.
    pub const HERO: RevealOptions = RevealOptions { threshold: 0.0, root_margin: "-100px" };
}

/// One-shot reveal: once revealed, an element stays revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Waiting,
    Revealed,
}

impl RevealState {
    pub fn on_entry(self, is_intersecting: bool) -> Self {
        match self {
            RevealState::Waiting if is_intersecting => RevealState::Revealed,
            state => state,
        }
    }
}

type EntryCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_once(
    node: &NodeRef,
    options: RevealOptions,
    on_reveal: impl Fn() + 'static,
) -> Option<(IntersectionObserver, EntryCallback)> {
    let element = node.cast::<Element>()?;
    let state = Rc::new(Cell::new(RevealState::Waiting));
    // Shared with the fallback below.
    let on_reveal: Rc<dyn Fn()> = Rc::new(on_reveal);

    let callback = {
        let on_reveal = on_reveal.clone();
        Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let before = state.get();
                let after = before.on_entry(entry.is_intersecting());
                if before != after {
                    state.set(after);
                    observer.unobserve(&entry.target());
                    on_reveal();
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>)
    };

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(&element);
            Some((observer, callback))
        }
        Err(e) => {
            // Without an observer nothing would ever show, so reveal right away.
            warn!("IntersectionObserver unavailable: {:?}", e);
            on_reveal();
            None
        }
    }
}

/// Returns `true` from the first time the referenced element enters the
/// viewport. The observer is dropped on unmount.
#[hook]
pub fn use_reveal(node: NodeRef, options: RevealOptions) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observed = observe_once(node, options, move || {
                    debug!("revealing element");
                    revealed.set(true);
                });
                move || {
                    if let Some((observer, _callback)) = observed {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *revealed
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use web_sys::Node;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mounted_ref() -> (Element, NodeRef) {
        let document = web_sys::window().and_then(|w| w.document()).unwrap();
        let element = document.create_element("div").unwrap();
        element.set_attribute("style", "height: 20px;").unwrap();
        document.body().unwrap().prepend_with_node_1(&element).unwrap();
        let node = NodeRef::default();
        node.set(Some(element.clone().unchecked_into::<Node>()));
        (element, node)
    }

    fn counter() -> (Rc<Cell<u32>>, impl Fn() + 'static) {
        let count = Rc::new(Cell::new(0));
        let bump = {
            let count = count.clone();
            move || count.set(count.get() + 1)
        };
        (count, bump)
    }

    #[wasm_bindgen_test]
    fn unmounted_ref_is_not_observed() {
        let (count, bump) = counter();
        assert!(observe_once(&NodeRef::default(), RevealOptions::SCROLL, bump).is_none());
        assert_eq!(count.get(), 0);
    }

    #[wasm_bindgen_test]
    fn rejected_observer_reveals_immediately() {
        let (element, node) = mounted_ref();
        let (count, bump) = counter();
        let bad = RevealOptions { threshold: 0.1, root_margin: "not a margin" };
        assert!(observe_once(&node, bad, bump).is_none());
        assert_eq!(count.get(), 1);
        element.remove();
    }

    #[wasm_bindgen_test]
    async fn visible_element_reveals_once() {
        let (element, node) = mounted_ref();
        let (count, bump) = counter();
        let observed = observe_once(&node, RevealOptions::SCROLL, bump);
        assert!(observed.is_some());
        TimeoutFuture::new(200).await;
        assert_eq!(count.get(), 1);
        if let Some((observer, _callback)) = observed {
            observer.disconnect();
        }
        element.remove();
    }
}

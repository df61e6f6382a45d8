use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;

/// Selector for a same-page link, or `None` for a bare `#` and other hrefs.
pub fn fragment_selector(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(rest) if !rest.is_empty() => Some(href),
        _ => None,
    }
}

/// Where to scroll so the target sits just below the fixed header.
pub fn scroll_destination(target_top: f64, header_height: f64) -> f64 {
    target_top - header_height
}

fn header_height(document: &web_sys::Document) -> f64 {
    document
        .query_selector(".header")
        .ok()
        .flatten()
        .and_then(|h| h.dyn_into::<HtmlElement>().ok())
        .map_or(0.0, |h| h.offset_height() as f64)
}

fn handle_click(e: &MouseEvent) {
    let Some(anchor) = e
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest("a[href^=\"#\"]").ok().flatten())
    else {
        return;
    };
    let Some(href) = anchor.get_attribute("href") else { return };
    let Some(selector) = fragment_selector(&href) else { return };
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };

    // An invalid selector or a missing element leaves the click alone.
    let Some(target) = document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|t| t.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    e.prevent_default();
    let top = scroll_destination(target.offset_top() as f64, header_height(&document));
    debug!("smooth scrolling to {} at {}", selector, top);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Smoothly scrolls to in-page anchors anywhere in the document.
#[hook]
pub fn use_smooth_anchor_scroll() {
    use_event_with_window("click", move |e: MouseEvent| handle_click(&e));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hash_is_ignored() {
        assert_eq!(fragment_selector("#"), None);
        assert_eq!(fragment_selector(""), None);
        assert_eq!(fragment_selector("/projects"), None);
        assert_eq!(fragment_selector("#featured-projects"), Some("#featured-projects"));
    }

    #[test]
    fn destination_subtracts_header() {
        assert_eq!(scroll_destination(1200.0, 80.0), 1120.0);
        assert_eq!(scroll_destination(40.0, 80.0), -40.0);
        assert_eq!(scroll_destination(500.0, 0.0), 500.0);
    }
}

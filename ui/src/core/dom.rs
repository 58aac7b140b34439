//! Browser glue for scroll tracking and anchor navigation.
//!
//! Everything here is a thin shim over `web-sys` so the rest of the crate
//! stays platform-neutral. Native builds (unit tests, tooling) get inert
//! stubs with the same signatures.

use super::nav::NAV_SCROLL_MARGIN_PX;
use super::sections::{SectionId, SectionOffset};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

/// Current vertical scroll offset of the window.
#[cfg(target_arch = "wasm32")]
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_y() -> f64 {
    0.0
}

/// Positions of every known page section, in document order.
///
/// `section[id]` elements whose id is not in the registry are skipped.
/// Before the sections mount this is simply empty, and the scroll handler
/// falls back to Home.
#[cfg(target_arch = "wasm32")]
pub fn section_offsets() -> Vec<SectionOffset> {
    let Some(document) = web_sys::window().and_then(|win| win.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };

    let mut offsets = Vec::new();
    for index in 0..nodes.length() {
        let Some(node) = nodes.get(index) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<web_sys::HtmlElement>() else {
            continue;
        };
        if let Some(id) = SectionId::from_slug(&element.id()) {
            offsets.push(SectionOffset {
                id,
                top: f64::from(element.offset_top()),
            });
        }
    }
    offsets
}

#[cfg(not(target_arch = "wasm32"))]
pub fn section_offsets() -> Vec<SectionOffset> {
    Vec::new()
}

/// `offsetTop` of a single section, when it exists in the document.
#[cfg(target_arch = "wasm32")]
pub fn section_top(id: SectionId) -> Option<f64> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(id.slug())?;
    let element = element.dyn_into::<web_sys::HtmlElement>().ok()?;
    Some(f64::from(element.offset_top()))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn section_top(_id: SectionId) -> Option<f64> {
    None
}

/// Smooth-scroll the viewport to an absolute offset. The animation itself
/// belongs to the browser; nothing tracks or awaits it.
#[cfg(target_arch = "wasm32")]
pub fn smooth_scroll_to(top: f64) {
    if let Some(win) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn smooth_scroll_to(_top: f64) {}

/// Smooth-scroll to a section, keeping the fixed header clear of it.
///
/// In-page calls to action use this directly; the navbar routes through its
/// engine instead so the mobile menu closes on the way.
pub fn smooth_scroll_to_section(id: SectionId) {
    if let Some(top) = section_top(id) {
        smooth_scroll_to(top - NAV_SCROLL_MARGIN_PX);
    }
}

/// Scoped subscription to the window scroll event.
///
/// The listener registers on construction and is removed again on `Drop`,
/// so a component holding one cannot leak handlers across repeated mount
/// cycles.
#[cfg(target_arch = "wasm32")]
pub struct ScrollSubscription {
    callback: Closure<dyn FnMut()>,
}

#[cfg(target_arch = "wasm32")]
impl ScrollSubscription {
    pub fn subscribe(mut on_scroll: impl FnMut() + 'static) -> Self {
        let callback = Closure::<dyn FnMut()>::new(move || on_scroll());
        if let Some(win) = web_sys::window() {
            let _ = win
                .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
        }
        Self { callback }
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(win) = web_sys::window() {
            let _ = win.remove_event_listener_with_callback(
                "scroll",
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub struct ScrollSubscription;

#[cfg(not(target_arch = "wasm32"))]
impl ScrollSubscription {
    pub fn subscribe(_on_scroll: impl FnMut() + 'static) -> Self {
        Self
    }
}

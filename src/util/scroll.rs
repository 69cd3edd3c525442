//! Smooth in-page scrolling with fixed-header clearance.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Vertical clearance for the fixed navbar, in CSS pixels.
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// Absolute scroll destination for an element whose bounding box starts at
/// `element_top` relative to the viewport.
pub fn scroll_target(scroll_y: f64, element_top: f64) -> f64 {
    scroll_y + element_top - HEADER_OFFSET_PX
}

/// Smooth-scroll the window so the section with the given id sits just
/// below the fixed header. A missing section is a silent no-op.
pub fn scroll_to_section(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(element) = window.document().and_then(|d| d.get_element_by_id(id)) else {
            return;
        };
        let element_top = element.get_bounding_client_rect().top();
        let scroll_y = window.scroll_y().unwrap_or_default();
        smooth_scroll_to(&window, scroll_target(scroll_y, element_top));
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
    }
}

/// Smooth-scroll back to the top of the page.
pub fn scroll_to_top() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            smooth_scroll_to(&window, 0.0);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn smooth_scroll_to(window: &web_sys::Window, top: f64) {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

//! Scroll-To-Top Signal
//!
//! Pure threshold check recomputed on every scroll event, plus the window
//! helpers the floating button uses.

/// Vertical offset past which the back-to-top button appears.
pub const SCROLL_TOP_THRESHOLD: f64 = 400.0;

/// Whether the back-to-top button should be shown at the given offset.
/// No hysteresis: strictly above the threshold shows it, at or below hides.
pub fn show_back_to_top(offset: f64) -> bool {
    offset > SCROLL_TOP_THRESHOLD
}

/// Current vertical scroll offset of the window.
pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Smooth-scroll the window back to the top.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

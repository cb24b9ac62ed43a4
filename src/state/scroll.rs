// In-page anchor scrolling helpers

/// Returns the selector an in-page link points at, e.g. `"#menu"` for `href="#menu"`.
/// A bare `#` has no target.
pub fn anchor_selector(href: &str) -> Option<&str> {
    if href.starts_with('#') && href.len() > 1 {
        Some(href)
    } else {
        None
    }
}

/// Document-space scroll position that puts an element just below a fixed header.
pub fn scroll_target(element_top: f64, page_y_offset: f64, header_height: f64) -> f64 {
    element_top + page_y_offset - header_height
}

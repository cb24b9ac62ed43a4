//! Drag-pan state for an oversized image inside a fixed viewport.
//!
//! Offsets are kept in pixels while a drag is running and converted to
//! percentages of the content's own size when written back to the style.

/// Content offset in pixels relative to the viewport's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset {
    pub left: f64,
    pub top: f64,
}

/// Viewport size and the scale the content is rendered at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanGeometry {
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub content_scale: f64,
}

impl PanGeometry {
    pub fn new(viewport_width: f64, viewport_height: f64, content_scale: f64) -> Self {
        Self {
            viewport_width: viewport_width.max(0.0),
            viewport_height: viewport_height.max(0.0),
            content_scale,
        }
    }

    pub fn content_width(&self) -> f64 {
        self.viewport_width * self.content_scale
    }

    pub fn content_height(&self) -> f64 {
        self.viewport_height * self.content_scale
    }

    pub fn clamp(&self, offset: Offset) -> Offset {
        Offset {
            left: clamp_offset(offset.left, self.viewport_width, self.content_width()),
            top: clamp_offset(offset.top, self.viewport_height, self.content_height()),
        }
    }

    pub fn to_percent(&self, offset: Offset) -> Offset {
        Offset {
            left: px_to_percent(offset.left, self.content_width()),
            top: px_to_percent(offset.top, self.content_height()),
        }
    }

    pub fn to_px(&self, percent: Offset) -> Offset {
        Offset {
            left: percent_to_px(percent.left, self.content_width()),
            top: percent_to_px(percent.top, self.content_height()),
        }
    }
}

/// Clamp one axis so the content always covers the viewport: `[-(content - viewport), 0]`.
pub fn clamp_offset(px: f64, viewport: f64, content: f64) -> f64 {
    let min = -(content - viewport).max(0.0);
    px.clamp(min, 0.0)
}

pub fn px_to_percent(px: f64, content: f64) -> f64 {
    if content <= 0.0 {
        return 0.0;
    }
    px / content * 100.0
}

pub fn percent_to_px(percent: f64, content: f64) -> f64 {
    percent / 100.0 * content
}

/// Reads the leading number of a style value such as `"-31.5%"` or `"12px"`.
///
/// Returns `None` for empty, malformed or non-finite input.
pub fn parse_percent(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    // optional exponent, only consumed when it has digits
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub last_x: f64,
    pub last_y: f64,
    /// Current content offset in pixels.
    pub offset: Offset,
    pub geometry: PanGeometry,
}

/// Pan state owned by one viewport. A drag is active while `session` is `Some`.
#[derive(Debug, Clone)]
pub struct PanState {
    pub content_scale: f64,
    pub default_offset_percent: f64,
    pub session: Option<DragSession>,
}

impl Default for PanState {
    fn default() -> Self {
        Self {
            content_scale: 1.5,
            default_offset_percent: -25.0,
            session: None,
        }
    }
}

impl PanState {
    pub fn new(content_scale: f64, default_offset_percent: f64) -> Self {
        Self {
            content_scale,
            default_offset_percent,
            session: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Starts a session at pointer `(x, y)`. `left`/`top` are the content's current
    /// inline style values; unparsable values fall back to the default offset and
    /// out-of-range values are clamped.
    pub fn begin(
        &mut self,
        x: f64,
        y: f64,
        viewport_width: f64,
        viewport_height: f64,
        left: &str,
        top: &str,
    ) -> DragSession {
        let geometry = PanGeometry::new(viewport_width, viewport_height, self.content_scale);
        let percent = Offset {
            left: parse_percent(left).unwrap_or(self.default_offset_percent),
            top: parse_percent(top).unwrap_or(self.default_offset_percent),
        };
        let session = DragSession {
            last_x: x,
            last_y: y,
            offset: geometry.clamp(geometry.to_px(percent)),
            geometry,
        };
        self.session = Some(session);
        session
    }

    /// Moves the content by the pointer delta since the last event.
    ///
    /// Returns the new offset as percentages to apply, or `None` without a session.
    pub fn drag_to(&mut self, x: f64, y: f64) -> Option<Offset> {
        let session = self.session.as_mut()?;
        let moved = Offset {
            left: session.offset.left + (x - session.last_x),
            top: session.offset.top + (y - session.last_y),
        };
        session.offset = session.geometry.clamp(moved);
        session.last_x = x;
        session.last_y = y;
        Some(session.geometry.to_percent(session.offset))
    }

    /// Ends the session. Returns whether one was active.
    pub fn end(&mut self) -> bool {
        self.session.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_default_offset_when_unset() {
        let mut state = PanState::default();
        let session = state.begin(0.0, 0.0, 100.0, 100.0, "", "");
        let percent = session.geometry.to_percent(session.offset);
        assert!(approx_eq(percent.left, -25.0));
        assert!(approx_eq(percent.top, -25.0));
        assert!(approx_eq(session.offset.left, -37.5));
    }

    #[test]
    fn test_drag_left_example() {
        let mut state = PanState::default();
        state.begin(50.0, 50.0, 100.0, 100.0, "", "");
        let percent = state.drag_to(40.0, 50.0).unwrap();
        assert!((percent.left - (-47.5 / 150.0 * 100.0)).abs() < 1e-9);
        assert!((percent.left - -31.6667).abs() < 1e-3);
        assert!(approx_eq(percent.top, -25.0));
    }

    #[test]
    fn test_offset_stays_in_bounds() {
        let deltas = [-500.0, -60.0, -13.0, -0.5, 0.0, 0.5, 7.0, 49.0, 300.0];
        for &dx in &deltas {
            for &dy in &deltas {
                let mut state = PanState::default();
                state.begin(0.0, 0.0, 200.0, 80.0, "", "");
                state.drag_to(dx, dy).unwrap();
                let session = state.session.unwrap();
                assert!(session.offset.left >= -100.0 && session.offset.left <= 0.0);
                assert!(session.offset.top >= -40.0 && session.offset.top <= 0.0);
            }
        }
    }

    #[test]
    fn test_deltas_accumulate_from_last_position() {
        let mut state = PanState::default();
        state.begin(0.0, 0.0, 100.0, 100.0, "-25%", "-25%");
        state.drag_to(5.0, 0.0);
        state.drag_to(10.0, 0.0);
        let session = state.session.unwrap();
        assert!(approx_eq(session.offset.left, -27.5));
        assert!(approx_eq(session.last_x, 10.0));
    }

    #[test]
    fn test_clamps_at_both_edges() {
        let mut state = PanState::default();
        state.begin(0.0, 0.0, 100.0, 100.0, "", "");
        let p = state.drag_to(1000.0, -1000.0).unwrap();
        assert!(approx_eq(p.left, 0.0));
        assert!(approx_eq(p.top, -50.0 / 150.0 * 100.0));
    }

    #[test]
    fn test_end_is_idempotent() {
        let mut state = PanState::default();
        state.begin(0.0, 0.0, 100.0, 100.0, "", "");
        state.drag_to(-10.0, 3.0);
        assert!(state.end());
        assert!(!state.end());
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_move_after_leave_is_noop() {
        let mut state = PanState::default();
        state.begin(0.0, 0.0, 100.0, 100.0, "", "");
        state.end();
        assert_eq!(state.drag_to(20.0, 20.0), None);
        assert!(state.session.is_none());
    }

    #[test]
    fn test_existing_style_is_resumed() {
        let mut state = PanState::default();
        let session = state.begin(0.0, 0.0, 100.0, 100.0, "-10%", "0%");
        assert!(approx_eq(session.offset.left, -15.0));
        assert!(approx_eq(session.offset.top, 0.0));
    }

    #[test]
    fn test_out_of_range_style_is_clamped_at_start() {
        let mut state = PanState::default();
        let session = state.begin(0.0, 0.0, 100.0, 100.0, "-80%", "10%");
        assert!(approx_eq(session.offset.left, -50.0));
        assert!(approx_eq(session.offset.top, 0.0));
        assert!(session.offset.left >= -50.0 && session.offset.left <= 0.0);
        assert!(session.offset.top >= -50.0 && session.offset.top <= 0.0);
    }

    #[test]
    fn test_zero_sized_viewport() {
        let mut state = PanState::default();
        state.begin(0.0, 0.0, 0.0, 0.0, "", "");
        let p = state.drag_to(-10.0, -10.0).unwrap();
        assert_eq!(p, Offset { left: 0.0, top: 0.0 });
    }

    #[test]
    fn test_parse_percent() {
        assert_eq!(parse_percent("-25%"), Some(-25.0));
        assert_eq!(parse_percent("  -31.5%"), Some(-31.5));
        assert_eq!(parse_percent("12px"), Some(12.0));
        assert_eq!(parse_percent(".5%"), Some(0.5));
        assert_eq!(parse_percent("1e2%"), Some(100.0));
        assert_eq!(parse_percent("3e%"), Some(3.0));
        assert_eq!(parse_percent(""), None);
        assert_eq!(parse_percent("auto"), None);
        assert_eq!(parse_percent("-%"), None);
        assert_eq!(parse_percent("."), None);
    }
}

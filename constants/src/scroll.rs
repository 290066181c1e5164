/// Scroll offset (px) past which the header switches to its solid style.
pub const SCROLLED_THRESHOLD_PX: f32 = 50.0;

/// Viewport-relative y (px) of the probe line used to pick the active section.
pub const ACTIVE_PROBE_PX: f32 = 100.0;

/// Fraction of a section that must be visible before it reveals.
pub const REVEAL_VISIBILITY_THRESHOLD: f32 = 0.1;

/// Pixels per wheel "line" when the platform reports line units.
pub const WHEEL_LINE_HEIGHT_PX: f32 = 40.0;

/// Arrow key step in pixels.
pub const KEY_SCROLL_STEP_PX: f32 = 80.0;

/// Fraction of the viewport height moved by PageUp / PageDown.
pub const PAGE_SCROLL_FRACTION: f32 = 0.9;

/// Landing parallax: hero content moves up by `LANDING_PARALLAX_SHIFT_PX` over
/// the first `LANDING_PARALLAX_RANGE_PX` of scroll and fades out over the first
/// `LANDING_FADE_RANGE_PX`.
pub const LANDING_PARALLAX_RANGE_PX: f32 = 1000.0;
pub const LANDING_PARALLAX_SHIFT_PX: f32 = 200.0;
pub const LANDING_FADE_RANGE_PX: f32 = 400.0;

/// Fixed header height in px.
pub const HEADER_HEIGHT_PX: f32 = 80.0;

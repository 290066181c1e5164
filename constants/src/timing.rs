/// Simulated loading delay before the page mounts.
pub const LOADING_DELAY_MS: u64 = 2000;

/// Duration of a section's reveal transition.
pub const REVEAL_DURATION_SECS: f32 = 1.0;

/// Vertical distance a section slides while revealing.
pub const REVEAL_SLIDE_PX: f32 = 100.0;

/// Duration of a programmatic smooth scroll.
pub const SMOOTH_SCROLL_SECS: f32 = 0.6;

/// Period of the loading spinner pulse.
pub const SPINNER_PERIOD_SECS: f32 = 1.0;

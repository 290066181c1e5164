//! Tuning constants shared by the portfolio site.
//!
//! Grouped by concern so the engine, UI and tests agree on the same numbers.

/// Particle cloud and floating polyhedra parameters.
pub mod background;

/// Colours used across the page and the 3D scene.
pub mod palette;

/// Camera and clear-colour settings for the background scene.
pub mod render_settings;

/// Scroll thresholds, probe line and input step sizes.
pub mod scroll;

/// Loading gate and transition durations.
pub mod timing;

use std::time::Duration;

use bevy::prelude::*;
use constants::{background, scroll, timing};

/// Runtime configuration for the portfolio site.
///
/// Defaults come from the `constants` crate; tests and embedders build their
/// own value and hand it to [`create_app`](super::app_setup::create_app).
#[derive(Resource, Debug, Clone)]
pub struct SiteConfig {
    /// How long the loading screen stays up before the page mounts.
    pub loading_delay: Duration,
    pub scrolled_threshold: f32,
    pub active_probe: f32,
    /// Visible fraction a section needs before it reveals.
    pub reveal_threshold: f32,
    pub reveal_secs: f32,
    pub smooth_scroll_secs: f32,
    pub particle_count: usize,
    pub shape_count: usize,
    /// Fixed seed for the background layout; `None` seeds from the clock.
    pub background_seed: Option<u64>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            loading_delay: Duration::from_millis(timing::LOADING_DELAY_MS),
            scrolled_threshold: scroll::SCROLLED_THRESHOLD_PX,
            active_probe: scroll::ACTIVE_PROBE_PX,
            reveal_threshold: scroll::REVEAL_VISIBILITY_THRESHOLD,
            reveal_secs: timing::REVEAL_DURATION_SECS,
            smooth_scroll_secs: timing::SMOOTH_SCROLL_SECS,
            particle_count: background::PARTICLE_COUNT,
            shape_count: background::SHAPE_COUNT,
            background_seed: None,
        }
    }
}

impl SiteConfig {
    /// Seed for the background generator, falling back to wall-clock nanoseconds.
    pub fn resolve_seed(&self) -> u64 {
        self.background_seed.unwrap_or_else(|| {
            let now = chrono::Utc::now();
            now.timestamp_nanos_opt()
                .map(|nanos| nanos as u64)
                .unwrap_or_else(|| now.timestamp_millis() as u64)
        })
    }
}

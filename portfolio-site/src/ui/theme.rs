//! Page sizing, typography and gradient lookup.
//!
//! Colours come from `constants::palette`; this module adds the values only
//! the UI needs.

use bevy::color::Color;
use constants::palette::{
    BLUE_600, CYAN_600, INDIGO_600, ORANGE_600, PINK_600, PURPLE_600, RED_600, TEAL_600,
};

// ── Layout ──────────────────────────────────────────────────────────────────

/// Vertical padding (px) inside every section below the landing hero.
pub const SECTION_PADDING_Y: f32 = 96.0;
pub const SECTION_PADDING_X: f32 = 24.0;

/// Max width (px) of a section's content column.
pub const CONTENT_MAX_WIDTH: f32 = 1152.0;
pub const NARROW_MAX_WIDTH: f32 = 896.0;

pub const CARD_RADIUS: f32 = 16.0;
pub const CHIP_RADIUS: f32 = 8.0;
pub const BUTTON_RADIUS: f32 = 12.0;

/// Side (px) of the portrait placeholder in the about section.
pub const PORTRAIT_SIZE: f32 = 320.0;

/// Diameter (px) of the loading spinner ring.
pub const SPINNER_SIZE: f32 = 32.0;

// ── Typography ──────────────────────────────────────────────────────────────

pub const FONT_HERO: f32 = 96.0;
pub const FONT_SECTION_TITLE: f32 = 60.0;
pub const FONT_HERO_TITLE: f32 = 36.0;
pub const FONT_PROJECT_TITLE: f32 = 44.0;
pub const FONT_CARD_TITLE: f32 = 24.0;
pub const FONT_LEAD: f32 = 20.0;
pub const FONT_BODY: f32 = 17.0;
pub const FONT_SMALL: f32 = 14.0;
pub const FONT_TAG: f32 = 12.0;
pub const FONT_LOGO: f32 = 24.0;
pub const FONT_STAT_VALUE: f32 = 30.0;

// ── Gradients ───────────────────────────────────────────────────────────────

/// Accent pair used for buttons and for unknown gradient ids.
pub const DEFAULT_GRADIENT: (Color, Color) = (PURPLE_600, BLUE_600);

/// Resolve a project gradient id like `"cyan-teal"` to its two stops.
pub fn gradient_colors(id: &str) -> (Color, Color) {
    match id {
        "purple-blue" => (PURPLE_600, BLUE_600),
        "cyan-teal" => (CYAN_600, TEAL_600),
        "orange-red" => (ORANGE_600, RED_600),
        "indigo-purple" => (INDIGO_600, PURPLE_600),
        "purple-pink" => (PURPLE_600, PINK_600),
        _ => DEFAULT_GRADIENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_gradients() {
        assert_eq!(gradient_colors("cyan-teal"), (CYAN_600, TEAL_600));
        assert_eq!(gradient_colors("orange-red"), (ORANGE_600, RED_600));
    }

    #[test]
    fn test_unknown_gradient_falls_back() {
        assert_eq!(gradient_colors("sunset"), DEFAULT_GRADIENT);
        assert_eq!(gradient_colors(""), DEFAULT_GRADIENT);
    }
}

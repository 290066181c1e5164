//! Page and scene colours.
//!
//! Values follow the 600/400 shades of the Tailwind palette the page design uses.

use bevy::color::Color;

// ── Backgrounds ─────────────────────────────────────────────────────────────

pub const PAGE_BLACK: Color = Color::srgb(0.0, 0.0, 0.0);
pub const PAGE_GRAY_900: Color = Color::srgb(0.067, 0.094, 0.153);
pub const PAGE_GRAY_800: Color = Color::srgb(0.122, 0.161, 0.216);

/// Card surfaces (gray-800 at half opacity).
pub const CARD_SURFACE: Color = Color::srgba(0.122, 0.161, 0.216, 0.5);
pub const CARD_BORDER: Color = Color::srgba(0.216, 0.255, 0.318, 0.5);

/// Header background once the page has scrolled.
pub const HEADER_SCROLLED: Color = Color::srgba(0.0, 0.0, 0.0, 0.8);
pub const HEADER_BORDER: Color = Color::srgba(1.0, 1.0, 1.0, 0.1);

// ── Text ────────────────────────────────────────────────────────────────────

pub const TEXT_WHITE: Color = Color::srgb(1.0, 1.0, 1.0);
pub const TEXT_GRAY_300: Color = Color::srgb(0.820, 0.835, 0.859);
pub const TEXT_GRAY_400: Color = Color::srgb(0.612, 0.639, 0.686);
pub const TEXT_GRAY_500: Color = Color::srgb(0.420, 0.447, 0.502);

// ── Accents ─────────────────────────────────────────────────────────────────

pub const PURPLE_400: Color = Color::srgb(0.753, 0.518, 0.988);
pub const PURPLE_600: Color = Color::srgb(0.576, 0.200, 0.918);
pub const BLUE_600: Color = Color::srgb(0.145, 0.388, 0.922);
pub const CYAN_600: Color = Color::srgb(0.031, 0.569, 0.698);
pub const TEAL_600: Color = Color::srgb(0.051, 0.580, 0.533);
pub const ORANGE_600: Color = Color::srgb(0.918, 0.345, 0.047);
pub const RED_600: Color = Color::srgb(0.863, 0.149, 0.149);
pub const INDIGO_600: Color = Color::srgb(0.310, 0.275, 0.898);
pub const PINK_600: Color = Color::srgb(0.859, 0.153, 0.467);

/// Tag chips in the experience timeline.
pub const TAG_PURPLE_BG: Color = Color::srgba(0.345, 0.110, 0.529, 0.3);
pub const TAG_PURPLE_TEXT: Color = Color::srgb(0.847, 0.706, 0.996);

/// Landing grid lines, violet at 10% inside a 20% overlay.
pub const GRID_LINE: Color = Color::srgba(0.545, 0.361, 0.965, 0.02);

/// Nav item backgrounds.
pub const NAV_ACTIVE_BG: Color = Color::srgba(1.0, 1.0, 1.0, 0.1);
pub const NAV_HOVER_BG: Color = Color::srgba(1.0, 1.0, 1.0, 0.05);

// ── Scene ───────────────────────────────────────────────────────────────────

/// Particle colour (#4f46e5) before opacity is applied.
pub const PARTICLE_RGB: [f32; 3] = [0.310, 0.275, 0.898];

/// Clear colour behind the 3D background.
pub const SCENE_CLEAR: Color = Color::srgb(0.0, 0.0, 0.0);

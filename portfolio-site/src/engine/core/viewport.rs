use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};
use constants::render_settings::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};

/// Logical size of the primary window.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT)
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width over height, or `None` while the surface has no area.
    pub fn aspect_ratio(&self) -> Option<f32> {
        (self.width > 0.0 && self.height > 0.0).then(|| self.width / self.height)
    }
}

pub fn init_viewport_from_window(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut viewport: ResMut<Viewport>,
) {
    if let Ok(window) = windows.single() {
        viewport.set_if_neq(Viewport::new(window.width(), window.height()));
    }
}

/// Mirror primary window resizes into [`Viewport`]. Repeated sizes leave it untouched.
pub fn track_viewport_size(
    mut resized: EventReader<WindowResized>,
    primary: Query<Entity, With<PrimaryWindow>>,
    mut viewport: ResMut<Viewport>,
) {
    let primary = primary.single().ok();

    for event in resized.read() {
        if primary.is_some_and(|window| window != event.window) {
            continue;
        }
        viewport.set_if_neq(Viewport::new(event.width, event.height));
    }
}

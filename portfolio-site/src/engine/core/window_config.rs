use bevy::prelude::*;
use bevy::window::PresentMode;

pub fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            title: "Portfolio".into(),
            canvas: Some("#bevy".into()),
            fit_canvas_to_parent: true,
            prevent_default_event_handling: false,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use constants::render_settings::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};

        Window {
            title: "Portfolio".into(),
            resolution: (DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}

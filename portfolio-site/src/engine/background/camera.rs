use bevy::prelude::*;
use constants::palette::SCENE_CLEAR;
use constants::render_settings::{
    CAMERA_DISTANCE, CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, DEFAULT_ASPECT_RATIO,
};

use crate::engine::core::viewport::Viewport;

#[derive(Component)]
pub struct BackgroundCamera;

pub fn background_projection(aspect_ratio: f32) -> PerspectiveProjection {
    PerspectiveProjection {
        fov: CAMERA_FOV_DEGREES.to_radians(),
        aspect_ratio,
        near: CAMERA_NEAR,
        far: CAMERA_FAR,
    }
}

/// Camera bundle on the +Z axis looking at the origin. The page UI renders on
/// top of it once the loading camera is gone.
pub fn background_camera(viewport: &Viewport) -> impl Bundle {
    let aspect_ratio = viewport.aspect_ratio().unwrap_or(DEFAULT_ASPECT_RATIO);
    (
        BackgroundCamera,
        Camera3d::default(),
        Camera {
            clear_color: ClearColorConfig::Custom(SCENE_CLEAR),
            ..default()
        },
        Projection::Perspective(background_projection(aspect_ratio)),
        Transform::from_xyz(0.0, 0.0, CAMERA_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
    )
}

/// Push a new viewport aspect ratio into the camera. Returns `false` for a
/// degenerate viewport or a non-perspective projection.
pub fn apply_aspect_ratio(projection: &mut Projection, viewport: &Viewport) -> bool {
    let (Some(aspect_ratio), Projection::Perspective(perspective)) =
        (viewport.aspect_ratio(), projection)
    else {
        return false;
    };
    perspective.aspect_ratio = aspect_ratio;
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_parameters() {
        let projection = background_projection(2.0);
        assert!((projection.fov - 75.0_f32.to_radians()).abs() < 1e-6);
        assert_eq!(projection.near, 0.1);
        assert_eq!(projection.far, 1000.0);
        assert_eq!(projection.aspect_ratio, 2.0);
    }

    #[test]
    fn test_zero_height_viewport_keeps_aspect() {
        let mut projection = Projection::Perspective(background_projection(1.5));
        assert!(!apply_aspect_ratio(&mut projection, &Viewport::new(800.0, 0.0)));
        assert!(apply_aspect_ratio(&mut projection, &Viewport::new(800.0, 400.0)));

        match projection {
            Projection::Perspective(p) => assert_eq!(p.aspect_ratio, 2.0),
            _ => panic!("projection changed kind"),
        }
    }
}

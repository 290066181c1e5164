/// Vertical field of view of the background camera, in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 75.0;

pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

/// Distance of the camera from the origin along +Z.
pub const CAMERA_DISTANCE: f32 = 5.0;

/// Aspect ratio used before the first resize event arrives.
pub const DEFAULT_ASPECT_RATIO: f32 = 16.0 / 9.0;

/// Native window size in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

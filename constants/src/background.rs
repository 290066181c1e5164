/// Number of points in the particle cloud.
pub const PARTICLE_COUNT: usize = 1000;

/// Edge length of the cube the particles are scattered in, centred on the origin.
pub const PARTICLE_SPREAD: f32 = 20.0;

pub const PARTICLE_OPACITY: f32 = 0.8;

/// Per-frame Euler increments (radians) applied to the whole cloud.
pub const PARTICLE_SPIN_X: f32 = 0.0005;
pub const PARTICLE_SPIN_Y: f32 = 0.001;

/// Number of floating wireframe polyhedra.
pub const SHAPE_COUNT: usize = 8;

/// Extents of the box the polyhedra are placed in (x, y, z).
pub const SHAPE_SPREAD: [f32; 3] = [10.0, 10.0, 5.0];

/// Circumradius of each polyhedron kind.
pub const OCTAHEDRON_RADIUS: f32 = 0.5;
pub const TETRAHEDRON_RADIUS: f32 = 0.6;
pub const ICOSAHEDRON_RADIUS: f32 = 0.4;

/// Per-frame spin of shape `i` is `SHAPE_SPIN_BASE + i * SHAPE_SPIN_STEP` on both X and Y.
pub const SHAPE_SPIN_BASE: f32 = 0.01;
pub const SHAPE_SPIN_STEP: f32 = 0.001;

/// Vertical bob: `y = sin(t * SHAPE_BOB_FREQUENCY + i) * SHAPE_BOB_AMPLITUDE`, `t` in seconds.
pub const SHAPE_BOB_AMPLITUDE: f32 = 0.5;
pub const SHAPE_BOB_FREQUENCY: f32 = 1.0;

/// Shape colour in HSL; hue in turns is `SHAPE_HUE_BASE + i * SHAPE_HUE_STEP`, wrapped to [0, 1).
pub const SHAPE_HUE_BASE: f32 = 0.6;
pub const SHAPE_HUE_STEP: f32 = 0.1;
pub const SHAPE_SATURATION: f32 = 0.7;
pub const SHAPE_LIGHTNESS: f32 = 0.6;
pub const SHAPE_OPACITY: f32 = 0.3;

/// Landing grid overlay: square cell size and the extent covered by lines in each axis.
pub const GRID_CELL_PX: f32 = 50.0;
pub const GRID_SPAN_PX: f32 = 3200.0;

//! Decorative 3D background: a slowly turning particle cloud and floating
//! wireframe polyhedra behind the landing section.
//!
//! ## Lifecycle
//!
//! ```text
//! OnEnter(Running) ──> spawn_background ──> RenderLoop::start
//!        │
//!  Update (every frame while RenderLoop is running)
//!        ├─ advance_particles
//!        ├─ advance_shapes
//!        └─ present_frame
//!        │
//! BackgroundTeardown / AppExit ──> teardown_background ──> RenderLoop::cancel
//! ```
//!
//! Cancellation happens once; after it the update systems stop running and
//! the meshes and materials are released from their asset stores.

/// Perspective camera for the background scene.
pub mod camera;

/// Particle cloud generation and per-frame spin.
pub mod particles;

/// Wireframe polyhedra geometry, colours and motion.
pub mod polyhedra;

/// Cancellable handle for the per-frame update task.
pub mod render_loop;

/// Bevy plugin and systems wiring the background into the app.
pub mod systems;

pub use render_loop::RenderLoop;
pub use systems::{BackgroundPlugin, BackgroundTeardown};

use bevy::prelude::*;
use bevy::render::view::NoFrustumCulling;
use constants::background::{PARTICLE_SPIN_X, PARTICLE_SPIN_Y, PARTICLE_SPREAD};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::camera::{BackgroundCamera, apply_aspect_ratio, background_camera};
use super::particles::{
    ParticleCloud, Spin, build_particle_mesh, particle_material, scatter_particles,
};
use super::polyhedra::{
    FloatingShape, PolyhedronKind, bob_height, random_shape_position, shape_material,
    shape_spin_step,
};
use super::render_loop::{RenderLoop, render_loop_running};
use crate::engine::core::app_state::AppState;
use crate::engine::core::config::SiteConfig;
use crate::engine::core::viewport::Viewport;

/// Request to stop the background loop and release its scene.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct BackgroundTeardown;

/// Marks every entity owned by the background scene.
#[derive(Component)]
pub struct BackgroundEntity;

/// Asset handles created for the background, released on teardown.
#[derive(Resource, Debug, Default)]
pub struct BackgroundAssets {
    pub meshes: Vec<Handle<Mesh>>,
    pub materials: Vec<Handle<StandardMaterial>>,
}

pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RenderLoop>()
            .init_resource::<Viewport>()
            .add_event::<BackgroundTeardown>()
            .add_systems(OnEnter(AppState::Running), spawn_background)
            .add_systems(
                Update,
                (
                    (advance_particles, advance_shapes, present_frame).chain(),
                    apply_viewport_to_camera.run_if(resource_changed::<Viewport>),
                )
                    .run_if(render_loop_running),
            )
            .add_systems(OnExit(AppState::Running), request_teardown)
            .add_systems(Last, teardown_background);
    }
}

pub fn spawn_background(
    mut commands: Commands,
    config: Res<SiteConfig>,
    viewport: Res<Viewport>,
    mut render_loop: ResMut<RenderLoop>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !render_loop.start() {
        warn!("Background render loop already running, skipping spawn");
        return;
    }

    let seed = config.resolve_seed();
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut assets = BackgroundAssets::default();

    commands.spawn((background_camera(&viewport), BackgroundEntity));

    let cloud_mesh = meshes.add(build_particle_mesh(scatter_particles(
        &mut rng,
        config.particle_count,
        PARTICLE_SPREAD,
    )));
    let cloud_material = materials.add(particle_material());
    assets.meshes.push(cloud_mesh.clone());
    assets.materials.push(cloud_material.clone());

    commands.spawn((
        ParticleCloud,
        Spin::default(),
        Mesh3d(cloud_mesh),
        MeshMaterial3d(cloud_material),
        Transform::default(),
        NoFrustumCulling,
        BackgroundEntity,
    ));

    // One wireframe mesh per kind, shared by every shape of that kind.
    let kind_meshes: Vec<Handle<Mesh>> = PolyhedronKind::ALL
        .iter()
        .map(|kind| meshes.add(kind.wireframe_mesh()))
        .collect();
    assets.meshes.extend(kind_meshes.iter().cloned());

    for index in 0..config.shape_count {
        let kind = PolyhedronKind::random(&mut rng);
        let position = random_shape_position(&mut rng);
        let material = materials.add(shape_material(index));
        assets.materials.push(material.clone());

        commands.spawn((
            FloatingShape { index, kind },
            Spin::default(),
            Mesh3d(kind_meshes[kind.index()].clone()),
            MeshMaterial3d(material),
            Transform::from_translation(position),
            BackgroundEntity,
        ));
    }

    info!(
        "Background scene spawned: {} particles, {} shapes (seed {})",
        config.particle_count, config.shape_count, seed
    );
    commands.insert_resource(assets);
}

pub fn advance_particles(mut clouds: Query<(&mut Spin, &mut Transform), With<ParticleCloud>>) {
    for (mut spin, mut transform) in &mut clouds {
        spin.advance(PARTICLE_SPIN_X, PARTICLE_SPIN_Y);
        transform.rotation = spin.rotation();
    }
}

pub fn advance_shapes(
    time: Res<Time<Real>>,
    mut shapes: Query<(&FloatingShape, &mut Spin, &mut Transform)>,
) {
    let seconds = time.elapsed_secs();

    for (shape, mut spin, mut transform) in &mut shapes {
        let step = shape_spin_step(shape.index);
        spin.advance(step, step);
        transform.rotation = spin.rotation();
        transform.translation.y = bob_height(seconds, shape.index);
    }
}

pub fn present_frame(mut render_loop: ResMut<RenderLoop>) {
    render_loop.present_frame();
}

pub fn apply_viewport_to_camera(
    viewport: Res<Viewport>,
    mut cameras: Query<&mut Projection, With<BackgroundCamera>>,
) {
    for mut projection in &mut cameras {
        if !apply_aspect_ratio(&mut projection, &viewport) {
            debug!("Ignoring degenerate viewport {:?}", *viewport);
        }
    }
}

pub fn request_teardown(mut teardown: EventWriter<BackgroundTeardown>) {
    teardown.write(BackgroundTeardown);
}

/// Cancel the loop and release the scene on the first teardown request or
/// app exit. Later requests find the loop already cancelled and do nothing.
pub fn teardown_background(
    mut requests: EventReader<BackgroundTeardown>,
    mut exits: EventReader<AppExit>,
    mut render_loop: ResMut<RenderLoop>,
    entities: Query<Entity, With<BackgroundEntity>>,
    assets: Option<Res<BackgroundAssets>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut commands: Commands,
) {
    let requested = requests.read().count() + exits.read().count();
    if requested == 0 {
        return;
    }

    if !render_loop.cancel() {
        debug!("Background teardown requested with no running loop");
        return;
    }

    for entity in &entities {
        commands.entity(entity).despawn();
    }

    if let Some(assets) = assets {
        for mesh in &assets.meshes {
            meshes.remove(mesh);
        }
        for material in &assets.materials {
            materials.remove(material);
        }
        commands.remove_resource::<BackgroundAssets>();
    }

    info!(
        "Background render loop cancelled after {} frames",
        render_loop.frames_presented()
    );
}

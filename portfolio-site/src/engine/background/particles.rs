use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use constants::background::PARTICLE_OPACITY;
use constants::palette::PARTICLE_RGB;
use rand::Rng;

#[derive(Component)]
pub struct ParticleCloud;

/// Accumulated Euler angles (radians) of a spinning background object.
///
/// Angles are applied in XYZ order, matching the per-axis increments the
/// update systems add each frame.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct Spin {
    pub x: f32,
    pub y: f32,
}

impl Spin {
    pub fn advance(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.x, self.y, 0.0)
    }
}

/// Scatter `count` points uniformly in a cube of edge `spread` centred on the origin.
pub fn scatter_particles(rng: &mut impl Rng, count: usize, spread: f32) -> Vec<[f32; 3]> {
    (0..count)
        .map(|_| {
            [
                rng.gen_range(-0.5..0.5) * spread,
                rng.gen_range(-0.5..0.5) * spread,
                rng.gen_range(-0.5..0.5) * spread,
            ]
        })
        .collect()
}

pub fn build_particle_mesh(positions: Vec<[f32; 3]>) -> Mesh {
    let mut mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh
}

pub fn particle_material() -> StandardMaterial {
    let [r, g, b] = PARTICLE_RGB;
    StandardMaterial {
        base_color: Color::srgba(r, g, b, PARTICLE_OPACITY),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_particles_stay_inside_spread() {
        let mut rng = SmallRng::seed_from_u64(11);
        let points = scatter_particles(&mut rng, 1000, 20.0);

        assert_eq!(points.len(), 1000);
        for point in &points {
            for coord in point {
                assert!((-10.0..10.0).contains(coord), "{coord} outside cube");
            }
        }
    }

    #[test]
    fn test_same_seed_same_cloud() {
        let a = scatter_particles(&mut SmallRng::seed_from_u64(3), 16, 20.0);
        let b = scatter_particles(&mut SmallRng::seed_from_u64(3), 16, 20.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_particle_mesh_is_point_list() {
        let mesh = build_particle_mesh(vec![[0.0, 0.0, 0.0]; 5]);
        assert_eq!(mesh.primitive_topology(), PrimitiveTopology::PointList);
        assert_eq!(mesh.count_vertices(), 5);
    }

    #[test]
    fn test_spin_accumulates() {
        let mut spin = Spin::default();
        for _ in 0..10 {
            spin.advance(0.0005, 0.001);
        }
        assert!((spin.x - 0.005).abs() < 1e-6);
        assert!((spin.y - 0.01).abs() < 1e-6);

        let expected = Quat::from_euler(EulerRot::XYZ, spin.x, spin.y, 0.0);
        assert!(spin.rotation().abs_diff_eq(expected, 1e-6));
    }
}

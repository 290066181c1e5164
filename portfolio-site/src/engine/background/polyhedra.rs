use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use constants::background::{
    ICOSAHEDRON_RADIUS, OCTAHEDRON_RADIUS, SHAPE_BOB_AMPLITUDE, SHAPE_BOB_FREQUENCY,
    SHAPE_HUE_BASE, SHAPE_HUE_STEP, SHAPE_LIGHTNESS, SHAPE_OPACITY, SHAPE_SATURATION,
    SHAPE_SPIN_BASE, SHAPE_SPIN_STEP, SHAPE_SPREAD, TETRAHEDRON_RADIUS,
};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolyhedronKind {
    Octahedron,
    Tetrahedron,
    Icosahedron,
}

impl PolyhedronKind {
    pub const ALL: [PolyhedronKind; 3] = [
        PolyhedronKind::Octahedron,
        PolyhedronKind::Tetrahedron,
        PolyhedronKind::Icosahedron,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Circumradius in world units.
    pub fn radius(self) -> f32 {
        match self {
            PolyhedronKind::Octahedron => OCTAHEDRON_RADIUS,
            PolyhedronKind::Tetrahedron => TETRAHEDRON_RADIUS,
            PolyhedronKind::Icosahedron => ICOSAHEDRON_RADIUS,
        }
    }

    /// Vertices on the unit sphere.
    pub fn unit_vertices(self) -> Vec<Vec3> {
        let raw: Vec<Vec3> = match self {
            PolyhedronKind::Octahedron => vec![
                Vec3::X,
                Vec3::NEG_X,
                Vec3::Y,
                Vec3::NEG_Y,
                Vec3::Z,
                Vec3::NEG_Z,
            ],
            PolyhedronKind::Tetrahedron => vec![
                Vec3::new(1.0, 1.0, 1.0),
                Vec3::new(-1.0, -1.0, 1.0),
                Vec3::new(-1.0, 1.0, -1.0),
                Vec3::new(1.0, -1.0, -1.0),
            ],
            PolyhedronKind::Icosahedron => {
                let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
                vec![
                    Vec3::new(-1.0, t, 0.0),
                    Vec3::new(1.0, t, 0.0),
                    Vec3::new(-1.0, -t, 0.0),
                    Vec3::new(1.0, -t, 0.0),
                    Vec3::new(0.0, -1.0, t),
                    Vec3::new(0.0, 1.0, t),
                    Vec3::new(0.0, -1.0, -t),
                    Vec3::new(0.0, 1.0, -t),
                    Vec3::new(t, 0.0, -1.0),
                    Vec3::new(t, 0.0, 1.0),
                    Vec3::new(-t, 0.0, -1.0),
                    Vec3::new(-t, 0.0, 1.0),
                ]
            }
        };
        raw.into_iter().map(Vec3::normalize).collect()
    }

    /// Edges as vertex index pairs.
    ///
    /// For a regular polyhedron the edges are exactly the vertex pairs at the
    /// minimum pairwise distance.
    pub fn edges(self) -> Vec<(u32, u32)> {
        let vertices = self.unit_vertices();
        let mut pairs = Vec::new();
        let mut shortest = f32::INFINITY;

        for i in 0..vertices.len() {
            for j in (i + 1)..vertices.len() {
                let distance = vertices[i].distance(vertices[j]);
                shortest = shortest.min(distance);
                pairs.push((i as u32, j as u32, distance));
            }
        }

        let tolerance = shortest * 1e-3;
        pairs
            .into_iter()
            .filter(|&(_, _, distance)| distance - shortest <= tolerance)
            .map(|(i, j, _)| (i, j))
            .collect()
    }

    /// Edge wireframe as a line list scaled to [`radius`](Self::radius).
    pub fn wireframe_mesh(self) -> Mesh {
        let radius = self.radius();
        let positions: Vec<[f32; 3]> = self
            .unit_vertices()
            .into_iter()
            .map(|v| (v * radius).to_array())
            .collect();
        let indices: Vec<u32> = self
            .edges()
            .into_iter()
            .flat_map(|(a, b)| [a, b])
            .collect();

        let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::RENDER_WORLD);
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
        mesh.insert_indices(Indices::U32(indices));
        mesh
    }
}

/// One of the floating polyhedra; `index` drives its colour, spin rate and bob phase.
#[derive(Component, Debug, Clone, Copy)]
pub struct FloatingShape {
    pub index: usize,
    pub kind: PolyhedronKind,
}

/// Hue in degrees: `SHAPE_HUE_BASE + index * SHAPE_HUE_STEP` turns, wrapped into one turn.
pub fn shape_hue_degrees(index: usize) -> f32 {
    let turns = SHAPE_HUE_BASE + index as f32 * SHAPE_HUE_STEP;
    turns.rem_euclid(1.0) * 360.0
}

pub fn shape_material(index: usize) -> StandardMaterial {
    StandardMaterial {
        base_color: Color::hsla(
            shape_hue_degrees(index),
            SHAPE_SATURATION,
            SHAPE_LIGHTNESS,
            SHAPE_OPACITY,
        ),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    }
}

/// Per-frame rotation increment on both X and Y.
pub fn shape_spin_step(index: usize) -> f32 {
    SHAPE_SPIN_BASE + index as f32 * SHAPE_SPIN_STEP
}

/// Vertical position at wall-clock time `seconds`, phase-shifted by index.
pub fn bob_height(seconds: f32, index: usize) -> f32 {
    (seconds * SHAPE_BOB_FREQUENCY + index as f32).sin() * SHAPE_BOB_AMPLITUDE
}

pub fn random_shape_position(rng: &mut impl Rng) -> Vec3 {
    let [sx, sy, sz] = SHAPE_SPREAD;
    Vec3::new(
        rng.gen_range(-0.5..0.5) * sx,
        rng.gen_range(-0.5..0.5) * sy,
        rng.gen_range(-0.5..0.5) * sz,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_edge_counts() {
        assert_eq!(PolyhedronKind::Tetrahedron.edges().len(), 6);
        assert_eq!(PolyhedronKind::Octahedron.edges().len(), 12);
        assert_eq!(PolyhedronKind::Icosahedron.edges().len(), 30);
    }

    #[test]
    fn test_every_vertex_has_uniform_degree() {
        for (kind, degree) in [
            (PolyhedronKind::Tetrahedron, 3),
            (PolyhedronKind::Octahedron, 4),
            (PolyhedronKind::Icosahedron, 5),
        ] {
            let vertex_count = kind.unit_vertices().len();
            let mut degrees = vec![0; vertex_count];
            for (a, b) in kind.edges() {
                degrees[a as usize] += 1;
                degrees[b as usize] += 1;
            }
            assert!(degrees.iter().all(|&d| d == degree), "{kind:?}: {degrees:?}");
        }
    }

    #[test]
    fn test_wireframe_vertices_sit_on_radius() {
        for kind in PolyhedronKind::ALL {
            let mesh = kind.wireframe_mesh();
            assert_eq!(mesh.primitive_topology(), PrimitiveTopology::LineList);
            let positions = mesh
                .attribute(Mesh::ATTRIBUTE_POSITION)
                .and_then(|attr| attr.as_float3())
                .expect("positions");
            for p in positions {
                let length = Vec3::from_array(*p).length();
                assert!((length - kind.radius()).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_hue_wraps_past_one_turn() {
        assert!((shape_hue_degrees(0) - 216.0).abs() < 1e-3);
        assert!((shape_hue_degrees(3) - 324.0).abs() < 1e-3);
        assert!((shape_hue_degrees(5) - 36.0).abs() < 1e-3);
        for index in 0..8 {
            let hue = shape_hue_degrees(index);
            assert!((0.0..=360.0).contains(&hue));
        }
    }

    #[test]
    fn test_spin_step_grows_with_index() {
        assert!((shape_spin_step(0) - 0.01).abs() < 1e-7);
        assert!((shape_spin_step(7) - 0.017).abs() < 1e-6);
    }

    #[test]
    fn test_bob_is_bounded_and_phase_shifted() {
        assert!((bob_height(0.0, 0)).abs() < 1e-6);
        assert!((bob_height(0.0, 1) - 1.0_f32.sin() * 0.5).abs() < 1e-6);
        for step in 0..100 {
            let h = bob_height(step as f32 * 0.37, step % 8);
            assert!(h.abs() <= 0.5 + 1e-6);
        }
    }

    #[test]
    fn test_positions_stay_in_box() {
        let mut rng = SmallRng::seed_from_u64(5);
        for _ in 0..64 {
            let p = random_shape_position(&mut rng);
            assert!(p.x.abs() <= 5.0 && p.y.abs() <= 5.0 && p.z.abs() <= 2.5);
        }
    }
}

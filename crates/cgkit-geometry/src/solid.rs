use glam::Vec3;

use crate::normal::{average_normal, face_normal};

/// How normals are attached to a generated solid.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Shading {
    /// One normal per face, repeated on each of the face's own vertices.
    #[default]
    Flat,
    /// One normal per shared corner: the renormalized sum of the incident face normals.
    Smooth,
}

/// Procedurally generated solid, centred on the origin.
///
/// Sizes are expected to be positive; the generator itself never fails.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Solid {
    /// Axis-aligned cube with side `2 * half_extent`.
    Cube { half_extent: f32 },
    /// Square pyramid: base of side `2 * half_extent` at `y = -height / 2`,
    /// apex at `(0, height / 2, 0)`.
    Pyramid { half_extent: f32, height: f32 },
}

/// A vertex as submitted for drawing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
}

/// One polygon of a solid (quad or triangle).
///
/// `vertices` are wound counter-clockwise when seen from outside the solid.
/// `normal` is the outward geometric normal regardless of shading mode.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub normal: Vec3,
    pub vertices: Vec<Vertex>,
}

/// Unordered pair of corner indices (see [`Solid::corners`]), stored with `.0 < .1`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Edge(pub usize, pub usize);

impl Edge {
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b { Self(a, b) } else { Self(b, a) }
    }
}

// Corner order for the cube:
//   0 (-,-,+)  1 (+,-,+)  2 (+,+,+)  3 (-,+,+)
//   4 (-,-,-)  5 (-,+,-)  6 (+,+,-)  7 (+,-,-)
const CUBE_FACES: [&[usize]; 6] = [
    &[0, 1, 2, 3], // +Z
    &[4, 5, 6, 7], // -Z
    &[3, 2, 6, 5], // +Y
    &[4, 7, 1, 0], // -Y
    &[1, 7, 6, 2], // +X
    &[4, 0, 3, 5], // -X
];

// Pyramid corners 0..3 are the base (counter-clockwise from above), 4 is the apex.
const PYRAMID_FACES: [&[usize]; 5] = [
    &[0, 1, 2, 3], // base, faces -Y
    &[1, 0, 4],
    &[2, 1, 4],
    &[3, 2, 4],
    &[0, 3, 4],
];

impl Solid {
    #[inline]
    pub fn cube(half_extent: f32) -> Self {
        debug_assert!(half_extent > 0.0, "cube half extent must be positive");
        Solid::Cube { half_extent }
    }

    #[inline]
    pub fn pyramid(half_extent: f32, height: f32) -> Self {
        debug_assert!(half_extent > 0.0 && height > 0.0, "pyramid sizes must be positive");
        Solid::Pyramid { half_extent, height }
    }

    /// Unique corner positions. Edge indices refer to this list.
    pub fn corners(&self) -> Vec<Vec3> {
        match *self {
            Solid::Cube { half_extent: s } => vec![
                Vec3::new(-s, -s, s),
                Vec3::new(s, -s, s),
                Vec3::new(s, s, s),
                Vec3::new(-s, s, s),
                Vec3::new(-s, -s, -s),
                Vec3::new(-s, s, -s),
                Vec3::new(s, s, -s),
                Vec3::new(s, -s, -s),
            ],
            Solid::Pyramid { half_extent: s, height } => {
                let h2 = height * 0.5;
                vec![
                    Vec3::new(-s, -h2, -s),
                    Vec3::new(s, -h2, -s),
                    Vec3::new(s, -h2, s),
                    Vec3::new(-s, -h2, s),
                    Vec3::new(0.0, h2, 0.0),
                ]
            }
        }
    }

    /// Mean of the corners; always strictly inside the (convex) solid.
    pub fn centroid(&self) -> Vec3 {
        let corners = self.corners();
        corners.iter().copied().sum::<Vec3>() / corners.len() as f32
    }

    fn face_loops(&self) -> &'static [&'static [usize]] {
        match self {
            Solid::Cube { .. } => &CUBE_FACES,
            Solid::Pyramid { .. } => &PYRAMID_FACES,
        }
    }

    /// Faces ready for drawing under `shading`.
    ///
    /// Cube: 6 quads. Pyramid: the base quad followed by 4 lateral triangles.
    pub fn generate_faces(&self, shading: Shading) -> Vec<Face> {
        let corners = self.corners();
        let loops = self.face_loops();
        let face_normals: Vec<Vec3> = loops
            .iter()
            .map(|l| face_normal(corners[l[0]], corners[l[1]], corners[l[2]]))
            .collect();

        let corner_normals = match shading {
            Shading::Flat => None,
            Shading::Smooth => Some(corner_normals(corners.len(), loops, &face_normals)),
        };

        loops
            .iter()
            .zip(&face_normals)
            .map(|(l, &normal)| Face {
                normal,
                vertices: l
                    .iter()
                    .map(|&i| Vertex {
                        position: corners[i],
                        normal: corner_normals.as_ref().map_or(normal, |cn| cn[i]),
                    })
                    .collect(),
            })
            .collect()
    }

    /// Outline edges: cube 12, pyramid 8 (4 base + 4 lateral). Sorted, no duplicates.
    pub fn generate_edges(&self) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self
            .face_loops()
            .iter()
            .flat_map(|l| (0..l.len()).map(move |k| Edge::new(l[k], l[(k + 1) % l.len()])))
            .collect();
        edges.sort_unstable();
        edges.dedup();
        edges
    }
}

/// Per-corner normal: renormalized sum of the normals of every face touching the corner.
fn corner_normals(corner_count: usize, loops: &[&[usize]], face_normals: &[Vec3]) -> Vec<Vec3> {
    (0..corner_count)
        .map(|corner| {
            average_normal(
                loops
                    .iter()
                    .zip(face_normals)
                    .filter(|(l, _)| l.contains(&corner))
                    .map(|(_, &n)| n),
            )
        })
        .collect()
}

impl Face {
    /// Mean of the face's vertex positions.
    pub fn centroid(&self) -> Vec3 {
        if self.vertices.is_empty() {
            return Vec3::ZERO;
        }
        self.vertices.iter().map(|v| v.position).sum::<Vec3>() / self.vertices.len() as f32
    }

    /// Fan triangulation, preserving winding.
    pub fn triangles(&self) -> impl Iterator<Item = [Vertex; 3]> + '_ {
        let v = &self.vertices;
        (1..v.len().saturating_sub(1)).map(move |k| [v[0], v[k], v[k + 1]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn solids() -> [Solid; 4] {
        [
            Solid::cube(0.5),
            Solid::cube(0.35),
            Solid::pyramid(0.5, 0.7),
            Solid::pyramid(0.4, 1.2),
        ]
    }

    // ── face counts ───────────────────────────────────────────────────────

    #[test]
    fn cube_has_six_quads() {
        for shading in [Shading::Flat, Shading::Smooth] {
            let faces = Solid::cube(0.5).generate_faces(shading);
            assert_eq!(faces.len(), 6);
            assert!(faces.iter().all(|f| f.vertices.len() == 4));
        }
    }

    #[test]
    fn pyramid_has_base_quad_and_four_triangles() {
        let faces = Solid::pyramid(0.5, 0.7).generate_faces(Shading::Flat);
        assert_eq!(faces.len(), 5);
        assert_eq!(faces[0].vertices.len(), 4);
        assert!(faces[1..].iter().all(|f| f.vertices.len() == 3));
    }

    // ── flat normals ──────────────────────────────────────────────────────

    #[test]
    fn flat_normals_are_unit_and_outward() {
        for solid in solids() {
            let centre = solid.centroid();
            for face in solid.generate_faces(Shading::Flat) {
                assert!((face.normal.length() - 1.0).abs() < EPS, "{solid:?}");
                assert!(face.normal.dot(face.centroid() - centre) > 0.0, "{solid:?}");
            }
        }
    }

    #[test]
    fn flat_vertices_share_the_face_normal() {
        for solid in solids() {
            for face in solid.generate_faces(Shading::Flat) {
                assert!(face.vertices.iter().all(|v| v.normal == face.normal));
            }
        }
    }

    #[test]
    fn winding_matches_stored_normal() {
        for solid in solids() {
            for face in solid.generate_faces(Shading::Smooth) {
                let [a, b, c] = [0, 1, 2].map(|i| face.vertices[i].position);
                let wound = face_normal(a, b, c);
                assert!((wound - face.normal).length() < EPS);
            }
        }
    }

    #[test]
    fn pyramid_base_faces_down() {
        let faces = Solid::pyramid(0.5, 0.7).generate_faces(Shading::Flat);
        assert!((faces[0].normal - Vec3::NEG_Y).length() < EPS);
    }

    // ── smooth normals ────────────────────────────────────────────────────

    #[test]
    fn smooth_cube_normals_are_octant_diagonals() {
        let k = 1.0 / 3f32.sqrt();
        for face in Solid::cube(0.5).generate_faces(Shading::Smooth) {
            for v in &face.vertices {
                let expected = v.position.signum() * k;
                assert!((v.normal - expected).length() < EPS, "{v:?}");
            }
        }
    }

    #[test]
    fn smooth_normals_are_unit() {
        for solid in solids() {
            for face in solid.generate_faces(Shading::Smooth) {
                for v in &face.vertices {
                    assert!((v.normal.length() - 1.0).abs() < EPS);
                }
            }
        }
    }

    #[test]
    fn smooth_pyramid_apex_points_up() {
        let faces = Solid::pyramid(0.5, 0.7).generate_faces(Shading::Smooth);
        let apex = faces[1].vertices[2];
        assert!(apex.normal.y > 0.0);
        assert!((apex.normal - Vec3::Y).length() < EPS);
    }

    #[test]
    fn smooth_pyramid_base_corner_is_base_plus_adjacent_laterals() {
        let solid = Solid::pyramid(0.4, 0.6);
        let flat = solid.generate_faces(Shading::Flat);
        let smooth = solid.generate_faces(Shading::Smooth);
        // Corner 0 touches the base, lateral [1,0,4] and lateral [0,3,4].
        let expected = (flat[0].normal + flat[1].normal + flat[4].normal).normalize();
        assert!((smooth[0].vertices[0].normal - expected).length() < EPS);
    }

    #[test]
    fn steep_smooth_pyramid_base_corners_point_down() {
        let solid = Solid::pyramid(0.4, 1.2);
        let smooth = solid.generate_faces(Shading::Smooth);
        for v in &smooth[0].vertices {
            assert!(v.normal.y < 0.0, "{v:?}");
        }
    }

    #[test]
    fn same_corner_gets_same_normal_on_every_face() {
        let faces = Solid::pyramid(0.5, 0.9).generate_faces(Shading::Smooth);
        let apex: Vec<Vec3> = faces[1..].iter().map(|f| f.vertices[2].normal).collect();
        assert!(apex.windows(2).all(|w| w[0] == w[1]));
    }

    // ── edges ─────────────────────────────────────────────────────────────

    #[test]
    fn cube_has_twelve_distinct_edges_of_equal_length() {
        let solid = Solid::cube(0.5);
        let corners = solid.corners();
        let edges = solid.generate_edges();
        assert_eq!(edges.len(), 12);
        for e in &edges {
            assert!(e.0 < e.1);
            assert!(((corners[e.0] - corners[e.1]).length() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn pyramid_has_four_base_and_four_lateral_edges() {
        let edges = Solid::pyramid(0.5, 0.7).generate_edges();
        assert_eq!(edges.len(), 8);
        assert_eq!(edges.iter().filter(|e| e.1 == 4).count(), 4);
        let mut unique = edges.clone();
        unique.dedup();
        assert_eq!(unique.len(), 8);
    }

    #[test]
    fn edge_new_orders_indices() {
        assert_eq!(Edge::new(5, 2), Edge(2, 5));
        assert_eq!(Edge::new(2, 5), Edge(2, 5));
    }

    // ── triangles ─────────────────────────────────────────────────────────

    #[test]
    fn quads_fan_into_two_triangles() {
        let faces = Solid::pyramid(0.5, 0.7).generate_faces(Shading::Flat);
        assert_eq!(faces[0].triangles().count(), 2);
        assert_eq!(faces[1].triangles().count(), 1);
    }
}

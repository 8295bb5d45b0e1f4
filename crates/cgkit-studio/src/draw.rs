//! Immediate-mode 3D emission.
//!
//! Solids are transformed to clip space and shaded on the CPU, then pushed
//! into the frame's `MeshList` for one viewport region.

use cgkit_engine::coords::Rect;
use cgkit_engine::paint::Color;
use cgkit_engine::scene::{MeshList, MeshVertex};
use cgkit_geometry::lighting::shade;
use cgkit_geometry::normal::unit_or_zero;
use cgkit_geometry::transform::normal_matrix;
use cgkit_geometry::{Face, Material, PointLight, Shading, Solid, Vertex};
use glam::{Mat4, Vec3, Vec4};

/// Pulls wireframe lines towards the viewer so they win the depth test
/// against the faces they outline.
const EDGE_DEPTH_BIAS: f32 = 0.0005;

/// Headlight term for unlit solids: faces turned away from the viewer are
/// darkened down to this factor.
const UNLIT_MIN_BRIGHTNESS: f32 = 0.55;

/// Model, view and projection for one object in one viewport.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transforms {
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
}

impl Transforms {
    pub fn new(model: Mat4, view: Mat4, projection: Mat4) -> Self {
        Self { model, view, projection }
    }

    fn clip(&self, p: Vec3) -> Vec4 {
        self.projection * self.view * self.model * p.extend(1.0)
    }

    fn world_point(&self, p: Vec3) -> Vec3 {
        self.model.transform_point3(p)
    }

    fn world_normal(&self, n: Vec3) -> Vec3 {
        unit_or_zero(normal_matrix(self.model) * n)
    }

    fn eye_normal(&self, n: Vec3) -> Vec3 {
        unit_or_zero(normal_matrix(self.view * self.model) * n)
    }
}

/// How a solid's faces get their colors.
#[derive(Debug, Copy, Clone)]
pub enum Surface<'a> {
    /// One color, dimmed by a light at the viewer so faces stay apart.
    Unlit(Color),
    /// Point-light shading, sampled per face or per vertex.
    Lit {
        light: &'a PointLight,
        material: &'a Material,
        eye: Vec3,
        shading: Shading,
    },
}

/// Pushes the faces of `solid` as triangles.
pub fn push_solid(meshes: &mut MeshList, region: Rect, t: &Transforms, solid: &Solid, surface: Surface<'_>) {
    let shading = match surface {
        Surface::Lit { shading, .. } => shading,
        Surface::Unlit(_) => Shading::Flat,
    };
    for face in solid.generate_faces(shading) {
        push_face(meshes, region, t, &face, surface);
    }
}

fn push_face(meshes: &mut MeshList, region: Rect, t: &Transforms, face: &Face, surface: Surface<'_>) {
    // Flat faces take one color for the whole polygon.
    let face_color = match surface {
        Surface::Unlit(color) => Some(unlit_color(color, t.eye_normal(face.normal))),
        Surface::Lit { light, material, eye, shading: Shading::Flat } => Some(lit_color(
            shade(t.world_point(face.centroid()), t.world_normal(face.normal), eye, light, material),
        )),
        Surface::Lit { shading: Shading::Smooth, .. } => None,
    };

    for tri in face.triangles() {
        let vertex = |v: &Vertex| {
            let color = face_color.unwrap_or_else(|| match surface {
                Surface::Lit { light, material, eye, .. } => lit_color(shade(
                    t.world_point(v.position),
                    t.world_normal(v.normal),
                    eye,
                    light,
                    material,
                )),
                Surface::Unlit(color) => color,
            });
            MeshVertex::new(t.clip(v.position).to_array(), color)
        };
        meshes.push_triangle(region, [vertex(&tri[0]), vertex(&tri[1]), vertex(&tri[2])]);
    }
}

fn unlit_color(color: Color, eye_normal: Vec3) -> Color {
    let facing = eye_normal.z.clamp(0.0, 1.0);
    color.scaled(UNLIT_MIN_BRIGHTNESS + (1.0 - UNLIT_MIN_BRIGHTNESS) * facing)
}

fn lit_color(rgb: Vec3) -> Color {
    Color::from_rgb_array(rgb.to_array())
}

/// Pushes the wireframe of `solid`.
pub fn push_edges(meshes: &mut MeshList, region: Rect, t: &Transforms, solid: &Solid, color: Color) {
    let corners = solid.corners();
    for edge in solid.generate_edges() {
        push_line(meshes, region, t, corners[edge.0], corners[edge.1], color);
    }
}

/// X red, Y green, Z blue, from the origin out to `size`.
pub fn push_axes(meshes: &mut MeshList, region: Rect, t: &Transforms, size: f32) {
    let axes = [
        (Vec3::X, Color::rgb(1.0, 0.0, 0.0)),
        (Vec3::Y, Color::rgb(0.0, 1.0, 0.0)),
        (Vec3::Z, Color::rgb(0.0, 0.0, 1.0)),
    ];
    for (dir, color) in axes {
        push_line(meshes, region, t, Vec3::ZERO, dir * size, color);
    }
}

fn push_line(meshes: &mut MeshList, region: Rect, t: &Transforms, a: Vec3, b: Vec3, color: Color) {
    let biased = |p: Vec3| {
        let mut c = t.clip(p);
        c.z -= EDGE_DEPTH_BIAS * c.w;
        MeshVertex::new(c.to_array(), color)
    };
    meshes.push_line(region, biased(a), biased(b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgkit_engine::scene::Primitive;

    fn region() -> Rect {
        Rect::from_origin_size(0.0, 0.0, 100.0, 100.0)
    }

    fn ortho() -> Transforms {
        Transforms::new(
            Mat4::IDENTITY,
            Mat4::IDENTITY,
            Mat4::orthographic_rh(-2.0, 2.0, -2.0, 2.0, -5.0, 5.0),
        )
    }

    // ── faces ─────────────────────────────────────────────────────────────

    #[test]
    fn cube_becomes_twelve_triangles() {
        let mut ml = MeshList::new();
        push_solid(&mut ml, region(), &ortho(), &Solid::cube(0.5), Surface::Unlit(Color::WHITE));
        assert_eq!(ml.vertices().len(), 36);
        assert_eq!(ml.batches().len(), 1);
        assert_eq!(ml.batches()[0].primitive, Primitive::Triangles);
    }

    #[test]
    fn unlit_faces_facing_viewer_are_brightest() {
        let mut ml = MeshList::new();
        push_solid(&mut ml, region(), &ortho(), &Solid::cube(0.5), Surface::Unlit(Color::WHITE));
        // The +Z face is generated first and looks straight at the viewer.
        assert_eq!(ml.vertices()[0].color, Color::WHITE.to_array());
        let darkest = ml
            .vertices()
            .iter()
            .map(|v| v.color[0])
            .fold(f32::INFINITY, f32::min);
        assert!((darkest - UNLIT_MIN_BRIGHTNESS).abs() < 1e-5);
    }

    #[test]
    fn flat_lit_face_has_one_color_smooth_varies() {
        let light = PointLight::default();
        let material = Material::new(Vec3::new(0.8, 0.4, 0.2), Vec3::splat(0.5), 50.0);
        let eye = Vec3::new(2.0, 1.5, 4.0);
        let solid = Solid::pyramid(0.45, 0.9);

        let lit = |shading| {
            let mut ml = MeshList::new();
            let surface = Surface::Lit { light: &light, material: &material, eye, shading };
            push_solid(&mut ml, region(), &ortho(), &solid, surface);
            ml
        };

        let flat = lit(Shading::Flat);
        for tri in flat.vertices().chunks(3) {
            assert!(tri.iter().all(|v| v.color == tri[0].color));
        }

        let smooth = lit(Shading::Smooth);
        let varies = smooth
            .vertices()
            .chunks(3)
            .any(|tri| tri.iter().any(|v| v.color != tri[0].color));
        assert!(varies);
    }

    // ── lines ─────────────────────────────────────────────────────────────

    #[test]
    fn edges_are_biased_towards_viewer() {
        let t = ortho();
        let mut ml = MeshList::new();
        push_edges(&mut ml, region(), &t, &Solid::cube(0.5), Color::BLACK);
        assert_eq!(ml.vertices().len(), 24);
        assert_eq!(ml.batches()[0].primitive, Primitive::Lines);

        let corners = Solid::cube(0.5).corners();
        let unbiased = t.clip(corners[Solid::cube(0.5).generate_edges()[0].0]);
        assert!(ml.vertices()[0].clip[2] < unbiased.z);
    }

    #[test]
    fn axes_are_three_colored_lines() {
        let mut ml = MeshList::new();
        push_axes(&mut ml, region(), &ortho(), 1.0);
        let v = ml.vertices();
        assert_eq!(v.len(), 6);
        assert_eq!(v[0].color, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(v[2].color, [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(v[4].color, [0.0, 0.0, 1.0, 1.0]);
    }
}

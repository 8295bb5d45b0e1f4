//! Fixed-function style lighting (ambient + diffuse + Blinn-Phong specular).
//!
//! Evaluated on the CPU in world space. Flat and smooth shading differ only in
//! where this is sampled: once per face, or once per vertex.

use glam::Vec3;

use crate::normal::unit_or_zero;

/// Positional light with separate ambient / diffuse / specular intensities.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Vec3::new(2.0, 3.0, 4.0),
            ambient: Vec3::splat(0.3),
            diffuse: Vec3::splat(0.9),
            specular: Vec3::splat(0.6),
        }
    }
}

/// Surface material. `color` drives both ambient and diffuse response.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Material {
    pub color: Vec3,
    pub specular: Vec3,
    pub shininess: f32,
}

impl Material {
    #[inline]
    pub const fn new(color: Vec3, specular: Vec3, shininess: f32) -> Self {
        Self { color, specular, shininess }
    }
}

/// Lit color at `point` with surface `normal`, seen from `eye`. Channels in `[0, 1]`.
pub fn shade(point: Vec3, normal: Vec3, eye: Vec3, light: &PointLight, material: &Material) -> Vec3 {
    let ambient = light.ambient * material.color;

    let n = unit_or_zero(normal);
    if n == Vec3::ZERO {
        return ambient.clamp(Vec3::ZERO, Vec3::ONE);
    }

    let l = unit_or_zero(light.position - point);
    let n_dot_l = n.dot(l).max(0.0);
    let diffuse = light.diffuse * material.color * n_dot_l;

    let specular = if n_dot_l > 0.0 {
        let h = unit_or_zero(l + unit_or_zero(eye - point));
        light.specular * material.specular * n.dot(h).max(0.0).powf(material.shininess)
    } else {
        Vec3::ZERO
    };

    (ambient + diffuse + specular).clamp(Vec3::ZERO, Vec3::ONE)
}

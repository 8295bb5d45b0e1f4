//! Model transforms demonstrated by the Transformations scene.

use glam::{Mat3, Mat4, Vec3, Vec4};

/// Shear matrix: `x += shx * y`, `y += shy * x`, `z += shz * x`.
pub fn shear(shx: f32, shy: f32, shz: f32) -> Mat4 {
    Mat4::from_cols(
        Vec4::new(1.0, shy, shz, 0.0),
        Vec4::new(shx, 1.0, 0.0, 0.0),
        Vec4::Z,
        Vec4::W,
    )
}

/// Mirror across the YZ plane.
#[inline]
pub fn reflect_x() -> Mat4 {
    Mat4::from_scale(Vec3::new(-1.0, 1.0, 1.0))
}

/// Matrix that carries object-space normals into world space for `model`.
///
/// Inverse-transpose of the upper 3x3; falls back to the plain 3x3 when the
/// model matrix is singular.
pub fn normal_matrix(model: Mat4) -> Mat3 {
    let m = Mat3::from_mat4(model);
    if m.determinant().abs() <= f32::EPSILON {
        m
    } else {
        m.inverse().transpose()
    }
}

/// The five elementary transforms shown side by side.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Elementary {
    Translate,
    Scale,
    Rotate,
    Reflect,
    Shear,
}

impl Elementary {
    pub const ALL: [Elementary; 5] = [
        Elementary::Translate,
        Elementary::Scale,
        Elementary::Rotate,
        Elementary::Reflect,
        Elementary::Shear,
    ];

    /// Model matrix for this transform. `angle_deg` only affects `Rotate`.
    pub fn matrix(self, angle_deg: f32) -> Mat4 {
        match self {
            Elementary::Translate => Mat4::from_translation(Vec3::new(0.4, 0.2, 0.0)),
            Elementary::Scale => Mat4::from_scale(Vec3::splat(1.4)),
            Elementary::Rotate => Mat4::from_rotation_y(angle_deg.to_radians()),
            Elementary::Reflect => reflect_x(),
            Elementary::Shear => shear(0.5, 0.2, 0.0),
        }
    }
}

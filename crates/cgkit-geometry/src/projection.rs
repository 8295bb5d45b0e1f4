//! Projection matrices. Clip-space depth is wgpu's `[0, 1]`.

use glam::{Mat4, Vec4};

pub const NEAR: f32 = 0.1;
pub const FAR: f32 = 100.0;

/// Orthographic half-extent on the shorter axis at `zoom = 1`.
pub const ORTHO_HALF_EXTENT: f32 = 4.0;

/// Perspective near-plane half height at `zoom = 1` (`top = NEAR * 0.5`).
const FRUSTUM_TOP_RATIO: f32 = 0.5;

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Projection {
    #[default]
    Perspective,
    Orthographic,
}

impl Projection {
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Projection::Perspective => Projection::Orthographic,
            Projection::Orthographic => Projection::Perspective,
        }
    }

    /// Projection for a viewport of the given aspect ratio.
    ///
    /// `zoom > 1` narrows the view volume (objects appear larger).
    pub fn matrix(self, aspect: f32, zoom: f32) -> Mat4 {
        let zoom = if zoom > 0.0 { zoom } else { 1.0 };
        match self {
            Projection::Perspective => {
                let top = NEAR * FRUSTUM_TOP_RATIO / zoom;
                let right = top * aspect;
                frustum(-right, right, -top, top, NEAR, FAR)
            }
            Projection::Orthographic => ortho_fit(ORTHO_HALF_EXTENT / zoom, aspect, NEAR, FAR),
        }
    }
}

/// Width over height; `1.0` for a zero-height viewport.
#[inline]
pub fn aspect_ratio(width: f32, height: f32) -> f32 {
    if height > 0.0 { width / height } else { 1.0 }
}

/// Right-handed off-axis perspective frustum (camera looks down -Z).
pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let rl = right - left;
    let tb = top - bottom;
    let nf = near - far;
    Mat4::from_cols(
        Vec4::new(2.0 * near / rl, 0.0, 0.0, 0.0),
        Vec4::new(0.0, 2.0 * near / tb, 0.0, 0.0),
        Vec4::new((right + left) / rl, (top + bottom) / tb, far / nf, -1.0),
        Vec4::new(0.0, 0.0, near * far / nf, 0.0),
    )
}

/// Orthographic box with half-extent `half` on the shorter axis.
pub fn ortho_fit(half: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let (hx, hy) = if aspect >= 1.0 {
        (half * aspect, half)
    } else {
        (half, half / aspect)
    };
    Mat4::orthographic_rh(-hx, hx, -hy, hy, near, far)
}

use glam::{Mat4, Vec3};

/// Look-at camera moved in world space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub center: Vec3,
    pub up: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(3.0, 2.0, 4.0), Vec3::ZERO, Vec3::Y)
    }
}

impl Camera {
    #[inline]
    pub const fn new(eye: Vec3, center: Vec3, up: Vec3) -> Self {
        Self { eye, center, up }
    }

    #[inline]
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.center, self.up)
    }

    /// Moves eye and center along the viewing direction by `step / 2` of its length.
    pub fn dolly(&mut self, step: f32) {
        self.translate((self.center - self.eye) * (step * 0.5));
    }

    /// Moves sideways in the XZ plane; positive `step` goes to the camera's right.
    pub fn strafe(&mut self, step: f32) {
        let d = self.center - self.eye;
        let len_xz = (d.x * d.x + d.z * d.z).sqrt();
        let len_xz = if len_xz > f32::EPSILON { len_xz } else { 1.0 };
        self.translate(Vec3::new(-d.z / len_xz, 0.0, d.x / len_xz) * step);
    }

    /// Moves eye and center along world +Y.
    pub fn lift(&mut self, step: f32) {
        self.translate(Vec3::Y * step);
    }

    #[inline]
    fn translate(&mut self, offset: Vec3) {
        self.eye += offset;
        self.center += offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn dolly_keeps_view_direction() {
        let mut cam = Camera::default();
        let before = cam.center - cam.eye;
        cam.dolly(0.4);
        assert!(close(cam.center - cam.eye, before));
        assert!(close(cam.eye, Vec3::new(3.0, 2.0, 4.0) + before * 0.2));
    }

    #[test]
    fn strafe_moves_right_in_xz() {
        let mut cam = Camera::new(Vec3::new(0.0, 0.0, 4.0), Vec3::ZERO, Vec3::Y);
        cam.strafe(1.0);
        assert!(close(cam.eye, Vec3::new(1.0, 0.0, 4.0)));
        assert!(close(cam.center, Vec3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn strafe_looking_straight_down_does_not_produce_nan() {
        let mut cam = Camera::new(Vec3::new(0.0, 4.0, 0.0), Vec3::ZERO, Vec3::NEG_Z);
        cam.strafe(1.0);
        assert!(cam.eye.is_finite());
    }

    #[test]
    fn lift_moves_both_points_up() {
        let mut cam = Camera::default();
        cam.lift(-0.4);
        assert!(close(cam.eye, Vec3::new(3.0, 1.6, 4.0)));
        assert!(close(cam.center, Vec3::new(0.0, -0.4, 0.0)));
    }

    #[test]
    fn view_puts_center_on_negative_z_axis() {
        let cam = Camera::default();
        let p = cam.view().transform_point3(cam.center);
        assert!(p.x.abs() < 1e-5 && p.y.abs() < 1e-5 && p.z < 0.0);
    }
}

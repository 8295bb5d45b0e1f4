use glam::Vec3;

/// Normalizes `v`, or returns the zero vector when `v` is (near) zero length.
///
/// Callers must tolerate a zero normal; no division by zero ever happens here.
#[inline]
pub fn unit_or_zero(v: Vec3) -> Vec3 {
    let len = v.length();
    if len <= f32::EPSILON || !len.is_finite() {
        Vec3::ZERO
    } else {
        v / len
    }
}

/// Unit normal of the polygon `a, b, c, ...` wound counter-clockwise when seen
/// from the side the normal should point to.
///
/// Uses the first three corners only; the generated faces are planar.
#[inline]
pub fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    unit_or_zero((b - a).cross(c - a))
}

/// Averages already-unit normals and renormalizes the sum.
pub fn average_normal<I>(normals: I) -> Vec3
where
    I: IntoIterator<Item = Vec3>,
{
    unit_or_zero(normals.into_iter().fold(Vec3::ZERO, |acc, n| acc + n))
}

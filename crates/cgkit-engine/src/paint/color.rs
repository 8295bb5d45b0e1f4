/// Premultiplied RGBA color.
///
/// Invariant: `r`, `g`, `b` are already multiplied by `a`. Opaque colors are
/// identical in both representations, which is the common case here.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Opaque color from `[0, 1]` components.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Opaque gray.
    #[inline]
    pub const fn gray(v: f32) -> Self {
        Self::rgb(v, v, v)
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    /// Opaque color from a `[0, 1]` RGB triple, e.g. a lighting result.
    #[inline]
    pub fn from_rgb_array(c: [f32; 3]) -> Self {
        Self::from_straight(c[0], c[1], c[2], 1.0)
    }

    /// Scales the color channels by `k`, keeping alpha.
    #[inline]
    pub fn scaled(self, k: f32) -> Self {
        Self {
            r: (self.r * k).clamp(0.0, self.a),
            g: (self.g * k).clamp(0.0, self.a),
            b: (self.b * k).clamp(0.0, self.a),
            a: self.a,
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Converts to the clear-color type of the GPU layer.
    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}

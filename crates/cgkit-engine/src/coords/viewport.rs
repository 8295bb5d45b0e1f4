use super::{Rect, Vec2};

/// Window size in logical pixels.
///
/// Overlay geometry is expressed against this size; renderers upload it to
/// convert logical pixels to NDC.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// The whole window as an overlay rectangle.
    #[inline]
    pub fn bounds(self) -> Rect {
        Rect::new(Vec2::ZERO, Vec2::new(self.width, self.height))
    }
}

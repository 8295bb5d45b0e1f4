//! Pointer hit-testing against the last frame's layout.

use cgkit_engine::coords::{Vec2, Viewport};

use crate::layout::UiRect;

/// Pointer position in input space: logical pixels from the top-left
/// corner, +Y down.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Same point in rendering space (bottom-left origin, +Y up).
    #[inline]
    pub fn to_render_space(self, window_height: f32) -> Vec2 {
        Vec2::new(self.x, window_height - self.y)
    }

    /// Inverse of [`to_render_space`](Self::to_render_space).
    #[inline]
    pub fn from_render_space(p: Vec2, window_height: f32) -> Self {
        Self::new(p.x, window_height - p.y)
    }
}

/// Id of the first rectangle, in slice order, containing `pointer`.
///
/// Overlapping rectangles resolve to the earlier one; there is no z-order.
pub fn hit_test<'r>(pointer: PointerSample, viewport: Viewport, rects: &'r [UiRect]) -> Option<&'r str> {
    let p = pointer.to_render_space(viewport.height);
    rects.iter().find(|r| r.contains(p)).map(|r| r.id.as_str())
}

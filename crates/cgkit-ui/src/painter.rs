use cgkit_engine::coords::{Rect, Vec2, Viewport};
use cgkit_engine::paint::Color;
use cgkit_engine::scene::DrawList;

use crate::hit::PointerSample;
use crate::layout::UiRect;

/// Drawing surface for overlays.
///
/// Wraps the engine's `DrawList` and carries this frame's pointer so widgets
/// can pick hover visuals while painting, without retained state.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    viewport: Viewport,
    /// Pointer in rendering space, if it is over the window.
    pointer: Option<Vec2>,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, viewport: Viewport, pointer: Option<PointerSample>) -> Self {
        Self {
            draw_list,
            viewport,
            pointer: pointer.map(|p| p.to_render_space(viewport.height)),
        }
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    // ── input queries ─────────────────────────────────────────────────────

    /// Returns `true` if the pointer is inside `rect`.
    #[inline]
    pub fn is_hovered(&self, rect: &UiRect) -> bool {
        self.pointer.is_some_and(|p| rect.contains(p))
    }

    // ── drawing ───────────────────────────────────────────────────────────

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.draw_list.push_solid_rect(rect, color);
    }

    /// Outline of `rect`, `thickness` px wide, drawn inside its bounds.
    pub fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Color) {
        let r = rect.normalized();
        let t = thickness.min(r.width() / 2.0).min(r.height() / 2.0);
        if t <= 0.0 {
            return;
        }

        let (x1, y1, x2, y2) = (r.min.x, r.min.y, r.max.x, r.max.y);
        self.fill_rect(Rect::new(Vec2::new(x1, y1), Vec2::new(x2, y1 + t)), color);
        self.fill_rect(Rect::new(Vec2::new(x1, y2 - t), Vec2::new(x2, y2)), color);
        self.fill_rect(Rect::new(Vec2::new(x1, y1 + t), Vec2::new(x1 + t, y2 - t)), color);
        self.fill_rect(Rect::new(Vec2::new(x2 - t, y1 + t), Vec2::new(x2, y2 - t)), color);
    }
}

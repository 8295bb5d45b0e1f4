use crate::coords::Rect;
use crate::paint::Color;

/// Solid rectangle draw payload.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub color: Color,
}

/// Overlay draw stream for a frame.
///
/// Later pushes paint over earlier ones. `clear()` keeps the allocation so a
/// list can be reused every frame.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<RectCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Items in paint order.
    #[inline]
    pub fn items(&self) -> &[RectCmd] {
        &self.items
    }

    /// Records a solid rectangle. Empty or non-finite rectangles are dropped.
    #[inline]
    pub fn push_solid_rect(&mut self, rect: Rect, color: Color) {
        let rect = rect.normalized();
        if rect.is_empty() || !color.is_finite() {
            return;
        }
        self.items.push(RectCmd { rect, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let mut dl = DrawList::new();
        dl.push_solid_rect(Rect::from_origin_size(0.0, 0.0, 1.0, 1.0), Color::WHITE);
        dl.push_solid_rect(Rect::from_origin_size(5.0, 5.0, 1.0, 1.0), Color::BLACK);
        assert_eq!(dl.items()[0].color, Color::WHITE);
        assert_eq!(dl.items()[1].color, Color::BLACK);
    }

    #[test]
    fn skips_empty_rects() {
        let mut dl = DrawList::new();
        dl.push_solid_rect(Rect::from_origin_size(0.0, 0.0, 0.0, 4.0), Color::WHITE);
        assert!(dl.is_empty());
    }

    #[test]
    fn inverted_rects_are_normalized() {
        let mut dl = DrawList::new();
        dl.push_solid_rect(Rect::from_origin_size(10.0, 10.0, -4.0, -2.0), Color::WHITE);
        assert_eq!(dl.items()[0].rect, Rect::from_origin_size(6.0, 8.0, 4.0, 2.0));
    }

    #[test]
    fn clear_empties_list() {
        let mut dl = DrawList::new();
        dl.push_solid_rect(Rect::from_origin_size(0.0, 0.0, 1.0, 1.0), Color::WHITE);
        dl.clear();
        assert_eq!(dl.len(), 0);
    }
}

use super::Vec2;

/// Axis-aligned rectangle in overlay space (logical pixels, bottom-left origin).
///
/// `min` is the bottom-left corner and `max` the top-right one. Constructors
/// do not reorder corners; call [`Rect::normalized`] when the input order is
/// unknown.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Rectangle from its bottom-left corner and size.
    #[inline]
    pub fn from_origin_size(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::new(Vec2::new(x, y), Vec2::new(x + w, y + h))
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// True for zero-area or non-finite rectangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.min.is_finite() && self.max.is_finite())
            || self.width() <= 0.0
            || self.height() <= 0.0
    }

    /// Returns the rectangle with `min <= max` on both axes.
    #[inline]
    pub fn normalized(self) -> Self {
        Self::new(self.min.min(self.max), self.min.max(self.max))
    }

    /// Inclusive containment: points on any edge are inside.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive_on_edges() {
        let r = Rect::from_origin_size(10.0, 20.0, 100.0, 50.0);
        assert!(r.contains(Vec2::new(10.0, 20.0)));
        assert!(r.contains(Vec2::new(110.0, 70.0)));
        assert!(r.contains(Vec2::new(60.0, 45.0)));
        assert!(!r.contains(Vec2::new(9.9, 45.0)));
        assert!(!r.contains(Vec2::new(60.0, 70.1)));
    }

    #[test]
    fn normalized_swaps_inverted_corners() {
        let r = Rect::new(Vec2::new(5.0, 8.0), Vec2::new(1.0, 2.0)).normalized();
        assert_eq!(r.min, Vec2::new(1.0, 2.0));
        assert_eq!(r.max, Vec2::new(5.0, 8.0));
        assert!(!r.is_empty());
    }

    #[test]
    fn degenerate_rects_are_empty() {
        assert!(Rect::from_origin_size(0.0, 0.0, 0.0, 10.0).is_empty());
        assert!(Rect::new(Vec2::new(f32::NAN, 0.0), Vec2::new(1.0, 1.0)).is_empty());
    }
}

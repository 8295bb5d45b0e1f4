//! Pixel-space layout for tabs, buttons and menus.
//!
//! Layouts are recomputed every frame from the window size, so a resize only
//! takes effect on the next frame's rectangles.

use cgkit_engine::coords::{Rect, Vec2, Viewport};

/// Distance from the top of the window to the top edge of a tab row.
pub const TAB_TOP_MARGIN: f32 = 20.0;

pub const BACK_BUTTON_WIDTH: f32 = 200.0;
pub const BACK_BUTTON_HEIGHT: f32 = 44.0;
pub const BACK_BUTTON_MARGIN: f32 = 20.0;
pub const BACK_BUTTON_ID: &str = "back";

/// Named box in rendering space (bottom-left origin, +Y up).
#[derive(Debug, Clone, PartialEq)]
pub struct UiRect {
    pub id: String,
    pub min: Vec2,
    pub max: Vec2,
}

impl UiRect {
    pub fn new(id: impl Into<String>, x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            id: id.into(),
            min: Vec2::new(x1, y1),
            max: Vec2::new(x2, y2),
        }
    }

    /// Inclusive on all four edges.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        self.rect().contains(p)
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.min, self.max)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

pub fn tab_id(index: usize) -> String {
    format!("tab:{index}")
}

/// Index encoded in a tab id, e.g. `"tab:2"` → `Some(2)`.
pub fn tab_index(id: &str) -> Option<usize> {
    id.strip_prefix("tab:")?.parse().ok()
}

pub fn item_id(index: usize) -> String {
    format!("item:{index}")
}

/// Index encoded in a column item id, e.g. `"item:0"` → `Some(0)`.
pub fn item_index(id: &str) -> Option<usize> {
    id.strip_prefix("item:")?.parse().ok()
}

/// Row of `item_count` equal tabs centred horizontally, [`TAB_TOP_MARGIN`]
/// below the top edge.
///
/// The group is centred even when it is wider than the window, so the outer
/// tabs may start at a negative x.
pub fn layout_tabs(
    viewport: Viewport,
    item_count: usize,
    tab_width: f32,
    tab_height: f32,
    gap: f32,
) -> Vec<UiRect> {
    if item_count == 0 {
        return Vec::new();
    }

    let total = item_count as f32 * tab_width + (item_count - 1) as f32 * gap;
    let x0 = (viewport.width - total) / 2.0;
    let y2 = viewport.height - TAB_TOP_MARGIN;
    let y1 = y2 - tab_height;

    (0..item_count)
        .map(|i| {
            let x1 = x0 + i as f32 * (tab_width + gap);
            UiRect::new(tab_id(i), x1, y1, x1 + tab_width, y2)
        })
        .collect()
}

/// Fixed-size back button in the bottom-left corner, `margin` px in on both axes.
pub fn layout_back_button(margin: f32) -> UiRect {
    UiRect::new(
        BACK_BUTTON_ID,
        margin,
        margin,
        margin + BACK_BUTTON_WIDTH,
        margin + BACK_BUTTON_HEIGHT,
    )
}

/// Column of `item_count` equal buttons centred on both axes, first item on top.
pub fn layout_column(
    viewport: Viewport,
    item_count: usize,
    width: f32,
    height: f32,
    gap: f32,
) -> Vec<UiRect> {
    if item_count == 0 {
        return Vec::new();
    }

    let total = item_count as f32 * height + (item_count - 1) as f32 * gap;
    let top = (viewport.height + total) / 2.0;
    let x1 = (viewport.width - width) / 2.0;

    (0..item_count)
        .map(|i| {
            let y2 = top - i as f32 * (height + gap);
            UiRect::new(item_id(i), x1, y2 - height, x1 + width, y2)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    // ── tabs ──────────────────────────────────────────────────────────────

    #[test]
    fn three_tabs_in_800_by_600() {
        let tabs = layout_tabs(Viewport::new(800.0, 600.0), 3, 260.0, 44.0, 16.0);
        assert_eq!(tabs.len(), 3);

        for t in &tabs {
            assert!((t.width() - 260.0).abs() < EPS);
            assert_eq!(t.min.y, tabs[0].min.y);
            assert_eq!(t.max.y, tabs[0].max.y);
        }
        for pair in tabs.windows(2) {
            assert!((pair[1].min.x - pair[0].max.x - 16.0).abs() < EPS);
        }

        // Group is 812 px wide, so it overhangs 6 px on each side.
        assert!((tabs[0].min.x + 6.0).abs() < EPS);
        assert!((tabs[0].min.x + tabs[2].max.x - 800.0).abs() < EPS);
        assert!((tabs[0].max.y - 580.0).abs() < EPS);
        assert!((tabs[0].min.y - 536.0).abs() < EPS);
    }

    #[test]
    fn tab_ids_round_trip() {
        let tabs = layout_tabs(Viewport::new(800.0, 600.0), 2, 100.0, 30.0, 10.0);
        assert_eq!(tabs[1].id, "tab:1");
        assert_eq!(tab_index(&tabs[1].id), Some(1));
        assert_eq!(tab_index("back"), None);
        assert_eq!(tab_index("tab:x"), None);
    }

    #[test]
    fn zero_tabs_is_empty() {
        assert!(layout_tabs(Viewport::new(800.0, 600.0), 0, 100.0, 30.0, 10.0).is_empty());
    }

    #[test]
    fn tabs_follow_window_height() {
        let a = layout_tabs(Viewport::new(800.0, 600.0), 1, 100.0, 30.0, 0.0);
        let b = layout_tabs(Viewport::new(800.0, 900.0), 1, 100.0, 30.0, 0.0);
        assert!((b[0].max.y - a[0].max.y - 300.0).abs() < EPS);
    }

    // ── back button ───────────────────────────────────────────────────────

    #[test]
    fn back_button_sits_at_margin() {
        let b = layout_back_button(BACK_BUTTON_MARGIN);
        assert_eq!(b.id, BACK_BUTTON_ID);
        assert_eq!(b.min, Vec2::new(20.0, 20.0));
        assert_eq!(b.max, Vec2::new(220.0, 64.0));
    }

    // ── column ────────────────────────────────────────────────────────────

    #[test]
    fn column_is_centred_top_down() {
        let items = layout_column(Viewport::new(800.0, 600.0), 5, 400.0, 50.0, 10.0);
        assert_eq!(items.len(), 5);

        // 5 × 50 + 4 × 10 = 290 tall, centred in 600.
        assert!((items[0].max.y - 445.0).abs() < EPS);
        assert!((items[4].min.y - 155.0).abs() < EPS);
        assert!((items[0].min.x - 200.0).abs() < EPS);
        assert!(items.windows(2).all(|p| p[0].min.y > p[1].max.y));
        assert_eq!(item_index(&items[3].id), Some(3));
    }

    #[test]
    fn contains_is_inclusive() {
        let r = UiRect::new("r", 0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Vec2::new(0.0, 10.0)));
        assert!(!r.contains(Vec2::new(10.5, 5.0)));
    }
}

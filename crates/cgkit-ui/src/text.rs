//! Bitmap text drawing and measurement.
//!
//! A string is laid out on a single line. `origin` is the bottom-left corner
//! of the top glyph row: cell (`col`, `row`) of a character covers
//! `[x + col·s, x + (col+1)·s] × [y − row·s, y − row·s + s]`, so glyphs hang
//! below the origin by six cells and rise above it by one.

use cgkit_engine::coords::{Rect, Vec2};
use cgkit_engine::paint::Color;

use crate::font::{self, ADVANCE_CELLS, GLYPH_COLS, GLYPH_ROWS};
use crate::painter::Painter;

/// Horizontal step from one character to the next.
#[inline]
fn char_advance(scale: f32) -> f32 {
    ADVANCE_CELLS * scale
}

/// Width `text` occupies at `scale`: six cells per character.
pub fn measure_text(text: &str, scale: f32) -> f32 {
    text.chars().count() as f32 * char_advance(scale)
}

/// Origin that vertically centres a line of text on `center_y`.
pub fn centered_baseline(center_y: f32, scale: f32) -> f32 {
    // Glyph block spans [y - 6s, y + s]; its middle is y - 2.5s.
    center_y + 2.5 * scale
}

/// Lit cells of a single character drawn at `origin`.
fn char_cells(origin: Vec2, c: char, scale: f32) -> impl Iterator<Item = Rect> {
    let g = font::glyph(c);
    (0..GLYPH_ROWS).flat_map(move |row| {
        (0..GLYPH_COLS)
            .filter(move |&col| font::is_lit(g, col, row))
            .map(move |col| {
                Rect::from_origin_size(
                    origin.x + col as f32 * scale,
                    origin.y - row as f32 * scale,
                    scale,
                    scale,
                )
            })
    })
}

/// Lit cells of `text` as rectangles, in drawing order.
pub fn glyph_cells(origin: Vec2, text: &str, scale: f32) -> impl Iterator<Item = Rect> + '_ {
    let advance = char_advance(scale);
    text.chars().enumerate().flat_map(move |(i, c)| {
        char_cells(Vec2::new(origin.x + i as f32 * advance, origin.y), c, scale)
    })
}

/// Draws `text` and returns the horizontal advance consumed. Empty text
/// draws nothing.
pub fn render_text(painter: &mut Painter<'_>, origin: Vec2, text: &str, scale: f32, color: Color) -> f32 {
    let advance = char_advance(scale);
    let mut x = origin.x;
    for c in text.chars() {
        for cell in char_cells(Vec2::new(x, origin.y), c, scale) {
            painter.fill_rect(cell, color);
        }
        x += advance;
    }
    x - origin.x
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgkit_engine::coords::Viewport;
    use cgkit_engine::scene::DrawList;

    fn lit_count(c: char) -> usize {
        font::glyph(c).iter().map(|row| row.count_ones() as usize).sum()
    }

    // ── measurement ───────────────────────────────────────────────────────

    #[test]
    fn measure_is_six_cells_per_char() {
        assert_eq!(measure_text("", 2.0), 0.0);
        assert_eq!(measure_text("ABC", 2.0), 36.0);
        assert_eq!(measure_text("Iluminação", 3.0), 180.0);
    }

    #[test]
    fn last_glyph_ends_at_measured_width() {
        let text = "Iluminação";
        let scale = 2.0;
        let origin = Vec2::new(10.0, 100.0);

        // Drawing order puts the final character's cells last.
        let cells: Vec<_> = glyph_cells(origin, text, scale).collect();
        let last = cells.len() - lit_count('o');
        let last_x = cells[last..].iter().map(|c| c.min.x).fold(f32::MAX, f32::min);
        assert_eq!(last_x, 10.0 + 9.0 * 12.0);

        let width = last_x + 12.0 - origin.x;
        assert_eq!(width, measure_text(text, scale));

        let mut dl = DrawList::new();
        let mut p = Painter::new(&mut dl, Viewport::new(800.0, 600.0), None);
        assert_eq!(render_text(&mut p, origin, text, scale, Color::WHITE), width);
    }

    // ── cells ─────────────────────────────────────────────────────────────

    #[test]
    fn empty_text_draws_nothing() {
        let mut dl = DrawList::new();
        let mut p = Painter::new(&mut dl, Viewport::new(800.0, 600.0), None);
        render_text(&mut p, Vec2::new(0.0, 0.0), "", 2.0, Color::WHITE);
        assert!(dl.is_empty());
    }

    #[test]
    fn one_quad_per_lit_cell() {
        let cells: Vec<_> = glyph_cells(Vec2::ZERO, "HI", 2.0).collect();
        assert_eq!(cells.len(), lit_count('H') + lit_count('I'));
    }

    #[test]
    fn cells_hang_below_origin() {
        let scale = 3.0;
        let origin = Vec2::new(10.0, 50.0);
        let cells: Vec<_> = glyph_cells(origin, "L", scale).collect();

        // 'L' lights column 0 on every row: the first cell sits at the origin.
        assert_eq!(cells[0], Rect::from_origin_size(10.0, 50.0, 3.0, 3.0));
        let lowest = cells.iter().map(|c| c.min.y).fold(f32::MAX, f32::min);
        assert_eq!(lowest, 50.0 - 6.0 * scale);
    }

    #[test]
    fn second_char_starts_one_advance_later() {
        let cells: Vec<_> = glyph_cells(Vec2::ZERO, "LL", 2.0).collect();
        let half = cells.len() / 2;
        assert_eq!(cells[half].min.x - cells[0].min.x, 12.0);
    }

    #[test]
    fn unknown_chars_render_placeholder() {
        let a: Vec<_> = glyph_cells(Vec2::ZERO, "#", 1.0).collect();
        let b: Vec<_> = glyph_cells(Vec2::ZERO, "?", 1.0).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn centred_baseline_balances_block() {
        let s = 2.0;
        let y = centered_baseline(100.0, s);
        let top = y + s;
        let bottom = y - 6.0 * s;
        assert!(((top + bottom) / 2.0 - 100.0).abs() < 1e-5);
        assert_eq!(top - bottom, GLYPH_ROWS as f32 * s);
    }
}

//! Stateless widgets.
//!
//! Every widget is a function: the caller passes the rectangles it laid out
//! and whatever is "active" this frame; hover comes from the [`Painter`].

use cgkit_engine::coords::{Rect, Vec2};
use cgkit_engine::paint::Color;

use crate::layout::UiRect;
use crate::painter::Painter;
use crate::text::{centered_baseline, measure_text, render_text};

/// Default text scale: 2 px cells, 12 px advance.
pub const TEXT_SCALE: f32 = 2.0;

pub const HUD_LINE_HEIGHT: f32 = 18.0;
pub const HUD_MARGIN_X: f32 = 10.0;
pub const HUD_COLOR: Color = Color::gray(0.9);

pub const BACK_BUTTON_LABEL: &str = "Voltar ao menu";

/// Colors for a button in each visual state.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonStyle {
    pub background: Color,
    pub hover_background: Color,
    pub active_background: Color,
    pub border: Color,
    pub text: Color,
    pub border_width: f32,
    pub text_scale: f32,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            background: Color::rgb(0.22, 0.24, 0.30),
            hover_background: Color::rgb(0.30, 0.33, 0.41),
            active_background: Color::rgb(0.26, 0.42, 0.68),
            border: Color::rgb(0.45, 0.48, 0.55),
            text: Color::rgb(0.95, 0.96, 1.0),
            border_width: 1.0,
            text_scale: TEXT_SCALE,
        }
    }
}

impl ButtonStyle {
    fn background_for(&self, active: bool, hovered: bool) -> Color {
        if active {
            self.active_background
        } else if hovered {
            self.hover_background
        } else {
            self.background
        }
    }
}

/// Draws `text` centred inside `rect`.
pub fn draw_centered_text(painter: &mut Painter<'_>, rect: Rect, text: &str, scale: f32, color: Color) {
    let c = rect.center();
    let x = c.x - measure_text(text, scale) / 2.0;
    render_text(painter, Vec2::new(x, centered_baseline(c.y, scale)), text, scale, color);
}

/// Filled, outlined button with a centred label.
pub fn draw_button(painter: &mut Painter<'_>, rect: &UiRect, label: &str, active: bool, style: &ButtonStyle) {
    let hovered = painter.is_hovered(rect);
    let r = rect.rect();

    painter.fill_rect(r, style.background_for(active, hovered));
    painter.stroke_rect(r, style.border_width, style.border);
    draw_centered_text(painter, r, label, style.text_scale, style.text);
}

/// Tab row; `labels[i]` goes on `rects[i]` and `active` is highlighted.
///
/// Extra rectangles or labels are ignored.
pub fn draw_tabs(
    painter: &mut Painter<'_>,
    rects: &[UiRect],
    labels: &[&str],
    active: usize,
    style: &ButtonStyle,
) {
    for (i, (rect, label)) in rects.iter().zip(labels).enumerate() {
        draw_button(painter, rect, label, i == active, style);
    }
}

/// The "back to menu" button.
pub fn draw_back_button(painter: &mut Painter<'_>, rect: &UiRect) {
    draw_button(painter, rect, BACK_BUTTON_LABEL, false, &ButtonStyle::default());
}

/// Help text anchored to the top-left corner, one line every
/// [`HUD_LINE_HEIGHT`] px. Empty lines leave a gap.
pub fn draw_hud(painter: &mut Painter<'_>, lines: &[&str]) {
    let mut y = painter.viewport().height - HUD_LINE_HEIGHT;
    for line in lines {
        if !line.is_empty() {
            render_text(painter, Vec2::new(HUD_MARGIN_X, y), line, TEXT_SCALE, HUD_COLOR);
        }
        y -= HUD_LINE_HEIGHT;
    }
}

/// One-pixel frame around a 3D viewport region.
pub fn draw_viewport_border(painter: &mut Painter<'_>, rect: Rect, color: Color) {
    painter.stroke_rect(rect, 1.0, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgkit_engine::coords::Viewport;
    use cgkit_engine::scene::DrawList;

    use crate::hit::PointerSample;
    use crate::layout::{layout_back_button, layout_tabs, BACK_BUTTON_MARGIN};

    const VP: Viewport = Viewport::new(800.0, 600.0);

    fn pointer_at(p: Vec2) -> Option<PointerSample> {
        Some(PointerSample::from_render_space(p, VP.height))
    }

    // ── buttons ───────────────────────────────────────────────────────────

    #[test]
    fn button_background_tracks_hover_and_active() {
        let style = ButtonStyle::default();
        let rect = UiRect::new("b", 100.0, 100.0, 300.0, 144.0);

        let mut idle = DrawList::new();
        draw_button(&mut Painter::new(&mut idle, VP, None), &rect, "OK", false, &style);
        assert_eq!(idle.items()[0].color, style.background);

        let mut hover = DrawList::new();
        let over = pointer_at(Vec2::new(150.0, 120.0));
        draw_button(&mut Painter::new(&mut hover, VP, over), &rect, "OK", false, &style);
        assert_eq!(hover.items()[0].color, style.hover_background);

        let mut active = DrawList::new();
        draw_button(&mut Painter::new(&mut active, VP, over), &rect, "OK", true, &style);
        assert_eq!(active.items()[0].color, style.active_background);
    }

    #[test]
    fn label_stays_inside_button() {
        let style = ButtonStyle::default();
        let rect = layout_back_button(BACK_BUTTON_MARGIN);

        let mut dl = DrawList::new();
        draw_back_button(&mut Painter::new(&mut dl, VP, None), &rect);

        let text_cells = dl.items().iter().filter(|c| c.color == style.text);
        for cell in text_cells {
            assert!(rect.contains(cell.rect.min) && rect.contains(cell.rect.max));
        }
    }

    // ── tabs ──────────────────────────────────────────────────────────────

    #[test]
    fn only_active_tab_is_highlighted() {
        let style = ButtonStyle::default();
        let rects = layout_tabs(VP, 3, 200.0, 44.0, 16.0);

        let mut dl = DrawList::new();
        draw_tabs(&mut Painter::new(&mut dl, VP, None), &rects, &["A", "B", "C"], 1, &style);

        let highlighted: Vec<_> = dl
            .items()
            .iter()
            .filter(|c| c.color == style.active_background)
            .collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].rect, rects[1].rect());
    }

    // ── hud ───────────────────────────────────────────────────────────────

    #[test]
    fn hud_lines_step_down_from_top() {
        let mut dl = DrawList::new();
        draw_hud(&mut Painter::new(&mut dl, VP, None), &["L", "", "L"]);

        // 'L' lights its column 0 on row 0, so the first cell of each line is
        // at the line origin.
        let firsts: Vec<f32> = dl
            .items()
            .iter()
            .filter(|c| c.rect.min.x == HUD_MARGIN_X)
            .map(|c| c.rect.min.y)
            .collect();
        assert!(firsts.contains(&(600.0 - 18.0)));
        assert!(firsts.contains(&(600.0 - 3.0 * 18.0)));
        assert!(!firsts.contains(&(600.0 - 2.0 * 18.0)));
    }

    #[test]
    fn empty_hud_draws_nothing() {
        let mut dl = DrawList::new();
        draw_hud(&mut Painter::new(&mut dl, VP, None), &["", ""]);
        assert!(dl.is_empty());
    }
}

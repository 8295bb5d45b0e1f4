use cgkit_engine::coords::{Vec2, Viewport};
use cgkit_engine::input::Key;
use cgkit_engine::paint::Color;
use cgkit_ui::layout::{item_index, layout_column};
use cgkit_ui::text::measure_text;
use cgkit_ui::widgets::{draw_button, ButtonStyle};
use cgkit_ui::{render_text, UiRect};

use super::{Layout, Scene, SceneEvent, SceneFrame, SceneId, Transition};

const ENTRIES: [(&str, Option<SceneId>); 5] = [
    ("1 - Transformações Geométricas", Some(SceneId::Transformations)),
    ("2 - Projeção", Some(SceneId::Projection)),
    ("3 - ViewPort", Some(SceneId::Viewport)),
    ("4 - Iluminação", Some(SceneId::Lighting)),
    ("5 - Sair", None),
];

const HEADING: &str = "Projeto Prático - Computação Gráfica";
const HEADING_SCALE: f32 = 3.0;

const ITEM_WIDTH: f32 = 440.0;
const ITEM_HEIGHT: f32 = 48.0;
const ITEM_GAP: f32 = 14.0;

/// Start screen: one button per scene plus "Sair".
#[derive(Debug, Default)]
pub struct Menu;

impl Menu {
    fn choose(index: usize) -> Transition {
        match ENTRIES.get(index) {
            Some((_, Some(id))) => Transition::Enter(*id),
            Some((_, None)) => Transition::Quit,
            None => Transition::Stay,
        }
    }
}

impl Scene for Menu {
    fn id(&self) -> SceneId {
        SceneId::Menu
    }

    fn clear_color(&self) -> Color {
        Color::rgb(0.1, 0.1, 0.14)
    }

    fn handle(&mut self, event: &SceneEvent, layout: &Layout) -> Transition {
        match *event {
            SceneEvent::Key { key: Key::Escape, repeat: false } => Transition::Quit,
            SceneEvent::Key { key, repeat: false } => match key.digit() {
                Some(d @ 1..=5) => Self::choose(d as usize - 1),
                _ => Transition::Stay,
            },
            SceneEvent::Click(p) => match layout.hit(p).and_then(item_index) {
                Some(i) => Self::choose(i),
                None => Transition::Stay,
            },
            _ => Transition::Stay,
        }
    }

    fn layout(&self, viewport: Viewport) -> Vec<UiRect> {
        layout_column(viewport, ENTRIES.len(), ITEM_WIDTH, ITEM_HEIGHT, ITEM_GAP)
    }

    fn draw(&self, frame: &mut SceneFrame<'_>) {
        let style = ButtonStyle::default();
        let rects = &frame.layout.rects;

        if let Some(first) = rects.first() {
            let vp = frame.viewport();
            let x = (vp.width - measure_text(HEADING, HEADING_SCALE)) / 2.0;
            let y = first.max.y + 40.0;
            render_text(&mut frame.painter, Vec2::new(x, y), HEADING, HEADING_SCALE, Color::WHITE);
        }

        for (rect, (label, _)) in rects.iter().zip(ENTRIES) {
            draw_button(&mut frame.painter, rect, label, false, &style);
        }
    }
}

//! Scenes and the menu.
//!
//! A scene is an explicit state struct built from `Default` when it is
//! entered. Input reaches it only through [`Scene::handle`], which returns a
//! [`Transition`] for the app to act on; nothing is shared between scenes.

mod lighting;
mod menu;
mod projection;
mod transformations;
mod viewports;

use cgkit_engine::coords::Viewport;
use cgkit_engine::input::{InputEvent, InputFrame, Key, KeyState, MouseButton, MouseButtonState};
use cgkit_engine::paint::Color;
use cgkit_engine::scene::MeshList;
use cgkit_ui::layout::{layout_back_button, layout_tabs, tab_index, BACK_BUTTON_ID, BACK_BUTTON_MARGIN};
use cgkit_ui::widgets::{draw_back_button, draw_hud, draw_tabs, ButtonStyle};
use cgkit_ui::{hit_test, Painter, PointerSample, UiRect};

pub use lighting::Lighting;
pub use menu::Menu;
pub use projection::ProjectionScene;
pub use transformations::Transformations;
pub use viewports::Viewports;

/// Every screen the studio can show.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum SceneId {
    Menu,
    Transformations,
    Projection,
    Viewport,
    Lighting,
}

impl SceneId {
    /// Fresh scene state, as on first entry.
    pub fn create(self) -> Box<dyn Scene> {
        match self {
            SceneId::Menu => Box::new(Menu::default()),
            SceneId::Transformations => Box::new(Transformations::default()),
            SceneId::Projection => Box::new(ProjectionScene::default()),
            SceneId::Viewport => Box::new(Viewports::default()),
            SceneId::Lighting => Box::new(Lighting::default()),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SceneId::Menu => "Computação Gráfica",
            SceneId::Transformations => "Módulo 1 - Transformações Geométricas",
            SceneId::Projection => "Módulo 2 - Projeção",
            SceneId::Viewport => "Módulo 3 - ViewPort",
            SceneId::Lighting => "Módulo 4 - Iluminação",
        }
    }
}

/// Discrete input delivered to a scene.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SceneEvent {
    /// Key press, including OS repeats.
    Key { key: Key, repeat: bool },
    /// Left click, input-space position.
    Click(PointerSample),
    /// Wheel notches; positive scrolls away from the user.
    Scroll(f32),
}

impl SceneEvent {
    /// Extracts scene events from one frame of input, in arrival order.
    pub fn collect(frame: &InputFrame) -> Vec<SceneEvent> {
        let mut out: Vec<SceneEvent> = frame
            .events
            .iter()
            .filter_map(|ev| match *ev {
                InputEvent::Key { key, state: KeyState::Pressed, repeat, .. } => {
                    Some(SceneEvent::Key { key, repeat })
                }
                InputEvent::PointerButton(b)
                    if b.button == MouseButton::Left && b.state == MouseButtonState::Pressed =>
                {
                    Some(SceneEvent::Click(PointerSample::new(b.x, b.y)))
                }
                _ => None,
            })
            .collect();

        if frame.scroll_delta != 0.0 {
            out.push(SceneEvent::Scroll(frame.scroll_delta));
        }
        out
    }

    /// True for a fresh (non-repeat) press of `key`.
    pub fn is_press(&self, key: Key) -> bool {
        matches!(*self, SceneEvent::Key { key: k, repeat: false } if k == key)
    }
}

/// What the app should do after a scene handled an event.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Transition {
    Stay,
    /// Return to the menu, discarding this scene's state.
    Back,
    Enter(SceneId),
    Quit,
}

/// The rectangles drawn last frame, kept for hit-testing the next clicks.
#[derive(Debug, Clone)]
pub struct Layout {
    pub viewport: Viewport,
    pub rects: Vec<UiRect>,
}

impl Layout {
    pub fn new(viewport: Viewport, rects: Vec<UiRect>) -> Self {
        Self { viewport, rects }
    }

    pub fn empty() -> Self {
        Self::new(Viewport::new(0.0, 0.0), Vec::new())
    }

    pub fn hit(&self, pointer: PointerSample) -> Option<&str> {
        hit_test(pointer, self.viewport, &self.rects)
    }

    pub fn get(&self, id: &str) -> Option<&UiRect> {
        self.rects.iter().find(|r| r.id == id)
    }

    /// The tab row, which scenes lay out first.
    pub fn tabs(&self) -> &[UiRect] {
        let n = self.rects.iter().take_while(|r| tab_index(&r.id).is_some()).count();
        &self.rects[..n]
    }
}

/// Output sinks for one frame of drawing.
pub struct SceneFrame<'a> {
    pub painter: Painter<'a>,
    pub meshes: &'a mut MeshList,
    pub layout: &'a Layout,
}

impl SceneFrame<'_> {
    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.layout.viewport
    }
}

pub trait Scene {
    fn id(&self) -> SceneId;

    fn clear_color(&self) -> Color;

    /// Applies one event. `layout` is what was drawn last frame.
    fn handle(&mut self, event: &SceneEvent, layout: &Layout) -> Transition;

    /// Advances animation by `dt` seconds.
    fn update(&mut self, dt: f32) {
        let _ = dt;
    }

    /// Clickable rectangles for the current window size.
    fn layout(&self, viewport: Viewport) -> Vec<UiRect>;

    fn draw(&self, frame: &mut SceneFrame<'_>);
}

/// Escape or the back button leave any scene other than the menu.
pub(crate) fn back_requested(event: &SceneEvent, layout: &Layout) -> bool {
    match event {
        SceneEvent::Click(p) => layout.hit(*p) == Some(BACK_BUTTON_ID),
        _ => event.is_press(Key::Escape),
    }
}

/// Tab index under a click, if any.
pub(crate) fn clicked_tab(event: &SceneEvent, layout: &Layout) -> Option<usize> {
    match event {
        SceneEvent::Click(p) => layout.hit(*p).and_then(tab_index),
        _ => None,
    }
}

const TAB_HEIGHT: f32 = 44.0;
const TAB_GAP: f32 = 16.0;

/// Tab row of `count` tabs followed by the back button.
pub(crate) fn scene_layout(viewport: Viewport, count: usize, tab_width: f32) -> Vec<UiRect> {
    let mut rects = layout_tabs(viewport, count, tab_width, TAB_HEIGHT, TAB_GAP);
    rects.push(layout_back_button(BACK_BUTTON_MARGIN));
    rects
}

/// Blank HUD lines that push the help text below the tab row.
const HUD_LINES_UNDER_TABS: usize = 3;

/// Tabs, HUD and back button, drawn over the 3D content.
pub(crate) fn draw_chrome(frame: &mut SceneFrame<'_>, tab_labels: &[&str], active_tab: usize, hud: &[&str]) {
    let layout = frame.layout;
    draw_tabs(&mut frame.painter, layout.tabs(), tab_labels, active_tab, &ButtonStyle::default());

    let lines: Vec<&str> = std::iter::repeat_n("", HUD_LINES_UNDER_TABS)
        .chain(hud.iter().copied())
        .collect();
    draw_hud(&mut frame.painter, &lines);
    if let Some(back) = layout.get(BACK_BUTTON_ID) {
        draw_back_button(&mut frame.painter, back);
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use cgkit_engine::input::{Modifiers, MouseWheelDelta, PointerButtonEvent};

    // ── event extraction ──────────────────────────────────────────────────

    #[test]
    fn collect_keeps_presses_clicks_and_scroll() {
        let mut frame = InputFrame::default();
        frame.push_event(InputEvent::Key {
            key: Key::W,
            state: KeyState::Pressed,
            modifiers: Modifiers::default(),
            repeat: true,
        });
        frame.push_event(InputEvent::Key {
            key: Key::W,
            state: KeyState::Released,
            modifiers: Modifiers::default(),
            repeat: false,
        });
        frame.push_event(InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            x: 5.0,
            y: 7.0,
            modifiers: Modifiers::default(),
        }));
        frame.push_event(InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Right,
            state: MouseButtonState::Pressed,
            x: 5.0,
            y: 7.0,
            modifiers: Modifiers::default(),
        }));
        frame.push_event(InputEvent::MouseWheel {
            delta: MouseWheelDelta::Line { x: 0.0, y: 1.0 },
            modifiers: Modifiers::default(),
        });
        frame.scroll_delta = 1.0;

        let events = SceneEvent::collect(&frame);
        assert_eq!(
            events,
            vec![
                SceneEvent::Key { key: Key::W, repeat: true },
                SceneEvent::Click(PointerSample::new(5.0, 7.0)),
                SceneEvent::Scroll(1.0),
            ]
        );
    }

    #[test]
    fn repeat_is_not_a_fresh_press() {
        assert!(key(Key::P).is_press(Key::P));
        assert!(!SceneEvent::Key { key: Key::P, repeat: true }.is_press(Key::P));
    }

    // ── navigation ────────────────────────────────────────────────────────

    #[test]
    fn every_scene_starts_with_its_own_id() {
        for id in [
            SceneId::Menu,
            SceneId::Transformations,
            SceneId::Projection,
            SceneId::Viewport,
            SceneId::Lighting,
        ] {
            assert_eq!(id.create().id(), id);
        }
    }

    #[test]
    fn escape_and_back_button_leave_scenes() {
        for id in [SceneId::Transformations, SceneId::Projection, SceneId::Viewport, SceneId::Lighting] {
            let mut scene = id.create();
            let layout = layout_of(scene.as_ref());
            assert_eq!(scene.handle(&key(Key::Escape), &layout), Transition::Back, "{id:?}");
            let click = click_on(&layout, BACK_BUTTON_ID);
            assert_eq!(scene.handle(&click, &layout), Transition::Back, "{id:?}");
        }
    }

    #[test]
    fn hud_starts_below_tabs() {
        let first_line_top = VP.height - (HUD_LINES_UNDER_TABS + 1) as f32 * cgkit_ui::widgets::HUD_LINE_HEIGHT;
        let tab_bottom = layout_of(SceneId::Lighting.create().as_ref()).tabs()[0].min.y;
        // Glyphs rise one cell (2 px) above their origin.
        assert!(first_line_top + 2.0 < tab_bottom);
    }

    #[test]
    fn click_outside_everything_stays() {
        let mut scene = SceneId::Projection.create();
        let layout = layout_of(scene.as_ref());
        let click = SceneEvent::Click(PointerSample::new(VP.width / 2.0, VP.height / 2.0));
        assert_eq!(scene.handle(&click, &layout), Transition::Stay);
    }
}

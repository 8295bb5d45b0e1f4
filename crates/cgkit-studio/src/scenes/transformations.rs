use cgkit_engine::coords::{Rect, Vec2, Viewport};
use cgkit_engine::input::Key;
use cgkit_engine::paint::Color;
use cgkit_geometry::transform::Elementary;
use cgkit_geometry::Solid;
use cgkit_ui::widgets::{draw_centered_text, TEXT_SCALE};
use cgkit_ui::UiRect;
use glam::{Mat4, Vec3};

use super::{
    back_requested, clicked_tab, draw_chrome, scene_layout, Layout, Scene, SceneEvent, SceneFrame, SceneId,
    Transition,
};
use crate::draw::{push_edges, push_solid, Surface, Transforms};

pub const DEFAULT_SPEED: f32 = 48.0;
pub const SPEED_STEP: f32 = 12.0;
pub const MAX_SPEED: f32 = 240.0;

const CUBE_HALF: f32 = 0.35;
const PYRAMID: (f32, f32) = (0.35, 0.7);

const COLUMNS: [(Elementary, &str, Color); 5] = [
    (Elementary::Translate, "Translação", Color::rgb(1.0, 0.4, 0.4)),
    (Elementary::Scale, "Escala", Color::rgb(0.4, 1.0, 0.4)),
    (Elementary::Rotate, "Rotação", Color::rgb(0.4, 0.4, 1.0)),
    (Elementary::Reflect, "Reflexão", Color::rgb(1.0, 1.0, 0.4)),
    (Elementary::Shear, "Cisalhamento", Color::rgb(1.0, 0.5, 1.0)),
];

const TABS: [&str; 2] = ["Cubo", "Pirâmide"];
const TAB_WIDTH: f32 = 200.0;

const LABEL_Y: f32 = 96.0;

/// Five columns, one per elementary transform, all applied to the same solid.
#[derive(Debug, Clone, PartialEq)]
pub struct Transformations {
    /// Spin angle in degrees.
    pub angle: f32,
    /// Degrees per second.
    pub speed: f32,
    pub paused: bool,
    /// 0 = cube, 1 = pyramid.
    pub solid_tab: usize,
}

impl Default for Transformations {
    fn default() -> Self {
        Self {
            angle: 0.0,
            speed: DEFAULT_SPEED,
            paused: false,
            solid_tab: 0,
        }
    }
}

impl Transformations {
    fn solid(&self) -> Solid {
        match self.solid_tab {
            0 => Solid::cube(CUBE_HALF),
            _ => Solid::pyramid(PYRAMID.0, PYRAMID.1),
        }
    }

    fn view(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, -3.0))
            * Mat4::from_rotation_x(20f32.to_radians())
            * Mat4::from_rotation_y((self.angle * 0.5).to_radians())
    }

    fn hud(&self) -> [String; 5] {
        let state = if self.paused { "pausado" } else { "girando" };
        [
            "Transformações geométricas".to_string(),
            format!("Velocidade: {:.0} graus/s ({state})", self.speed),
            "Espaço: pausar".to_string(),
            "Cima/Baixo: velocidade".to_string(),
            "Esc: menu".to_string(),
        ]
    }
}

/// Column `i` of `count` equal columns spanning the window.
pub fn column_region(viewport: Viewport, i: usize, count: usize) -> Rect {
    let w = viewport.width / count as f32;
    Rect::from_origin_size(i as f32 * w, 0.0, w, viewport.height)
}

impl Scene for Transformations {
    fn id(&self) -> SceneId {
        SceneId::Transformations
    }

    fn clear_color(&self) -> Color {
        Color::rgb(0.15, 0.15, 0.2)
    }

    fn handle(&mut self, event: &SceneEvent, layout: &Layout) -> Transition {
        if back_requested(event, layout) {
            return Transition::Back;
        }
        if let Some(tab) = clicked_tab(event, layout) {
            self.solid_tab = tab;
            return Transition::Stay;
        }
        if let SceneEvent::Key { key, .. } = *event {
            match key {
                Key::Space if event.is_press(Key::Space) => self.paused = !self.paused,
                Key::ArrowUp => self.speed = (self.speed + SPEED_STEP).min(MAX_SPEED),
                Key::ArrowDown => self.speed = (self.speed - SPEED_STEP).max(0.0),
                _ => {}
            }
        }
        Transition::Stay
    }

    fn update(&mut self, dt: f32) {
        if !self.paused {
            self.angle = (self.angle + self.speed * dt) % 720.0;
        }
    }

    fn layout(&self, viewport: Viewport) -> Vec<UiRect> {
        scene_layout(viewport, TABS.len(), TAB_WIDTH)
    }

    fn draw(&self, frame: &mut SceneFrame<'_>) {
        let vp = frame.viewport();
        let solid = self.solid();
        let projection = Mat4::orthographic_rh(-2.0, 2.0, -1.2, 1.2, -5.0, 5.0);
        let view = self.view();

        for (i, (transform, label, color)) in COLUMNS.into_iter().enumerate() {
            let region = column_region(vp, i, COLUMNS.len());
            let t = Transforms::new(transform.matrix(self.angle), view, projection);
            push_solid(frame.meshes, region, &t, &solid, Surface::Unlit(color));
            push_edges(frame.meshes, region, &t, &solid, color.scaled(0.35));

            let label_box = Rect::new(Vec2::new(region.min.x, LABEL_Y), Vec2::new(region.max.x, LABEL_Y));
            draw_centered_text(&mut frame.painter, label_box, label, TEXT_SCALE, Color::gray(0.9));
        }

        let hud = self.hud();
        draw_chrome(frame, &TABS, self.solid_tab, &hud.each_ref().map(String::as_str));
    }
}

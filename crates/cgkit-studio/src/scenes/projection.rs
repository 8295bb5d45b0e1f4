use cgkit_engine::coords::Viewport;
use cgkit_engine::input::Key;
use cgkit_engine::paint::Color;
use cgkit_geometry::projection::aspect_ratio;
use cgkit_geometry::{Camera, Projection, Solid};
use cgkit_ui::UiRect;
use glam::Mat4;

use super::{
    back_requested, clicked_tab, draw_chrome, scene_layout, Layout, Scene, SceneEvent, SceneFrame, SceneId,
    Transition,
};
use crate::draw::{push_axes, push_edges, push_solid, Surface, Transforms};

/// Camera move per key press, in world units.
pub const STEP: f32 = 0.4;

pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 3.0;
/// Zoom factor per wheel notch.
const ZOOM_PER_NOTCH: f32 = 1.1;

const CUBE_HALF: f32 = 0.5;
const CUBE_COLOR: Color = Color::rgb(0.35, 0.65, 0.95);

const TABS: [&str; 2] = ["Perspectiva", "Ortogonal"];
const TAB_WIDTH: f32 = 200.0;

/// A cube seen through a movable look-at camera.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionScene {
    pub camera: Camera,
    pub projection: Projection,
    pub zoom: f32,
}

impl Default for ProjectionScene {
    fn default() -> Self {
        Self {
            camera: Camera::default(),
            projection: Projection::Perspective,
            zoom: 1.0,
        }
    }
}

fn projection_tab(p: Projection) -> usize {
    match p {
        Projection::Perspective => 0,
        Projection::Orthographic => 1,
    }
}

impl ProjectionScene {
    fn apply_key(&mut self, key: Key, repeat: bool) {
        match key {
            Key::W => self.camera.dolly(STEP),
            Key::S => self.camera.dolly(-STEP),
            Key::A => self.camera.strafe(-STEP),
            Key::D => self.camera.strafe(STEP),
            Key::Q => self.camera.lift(STEP),
            Key::E => self.camera.lift(-STEP),
            Key::P if !repeat => self.projection = self.projection.toggled(),
            Key::R if !repeat => {
                log::debug!("projection scene reset");
                *self = Self::default();
            }
            _ => {}
        }
    }

    fn zoom_by(&mut self, notches: f32) {
        self.zoom = (self.zoom * ZOOM_PER_NOTCH.powf(notches)).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    fn hud(&self) -> [String; 6] {
        let e = self.camera.eye;
        let mode = match self.projection {
            Projection::Perspective => "perspectiva",
            Projection::Orthographic => "ortogonal",
        };
        [
            format!("Projeção: {mode}  zoom {:.2}", self.zoom),
            format!("Olho: ({:.1}, {:.1}, {:.1})", e.x, e.y, e.z),
            "W/S: frente/trás  A/D: lados  Q/E: sobe/desce".to_string(),
            "P: troca projeção  Roda: zoom".to_string(),
            "R: reinicia".to_string(),
            "Esc: menu".to_string(),
        ]
    }
}

impl Scene for ProjectionScene {
    fn id(&self) -> SceneId {
        SceneId::Projection
    }

    fn clear_color(&self) -> Color {
        Color::rgb(0.12, 0.12, 0.18)
    }

    fn handle(&mut self, event: &SceneEvent, layout: &Layout) -> Transition {
        if back_requested(event, layout) {
            return Transition::Back;
        }
        if let Some(tab) = clicked_tab(event, layout) {
            self.projection = match tab {
                0 => Projection::Perspective,
                _ => Projection::Orthographic,
            };
            return Transition::Stay;
        }
        match *event {
            SceneEvent::Key { key, repeat } => self.apply_key(key, repeat),
            SceneEvent::Scroll(notches) => self.zoom_by(notches),
            SceneEvent::Click(_) => {}
        }
        Transition::Stay
    }

    fn layout(&self, viewport: Viewport) -> Vec<UiRect> {
        scene_layout(viewport, TABS.len(), TAB_WIDTH)
    }

    fn draw(&self, frame: &mut SceneFrame<'_>) {
        let vp = frame.viewport();
        let region = vp.bounds();
        let projection = self.projection.matrix(aspect_ratio(vp.width, vp.height), self.zoom);
        let t = Transforms::new(Mat4::IDENTITY, self.camera.view(), projection);

        let cube = Solid::cube(CUBE_HALF);
        push_solid(frame.meshes, region, &t, &cube, Surface::Unlit(CUBE_COLOR));
        push_edges(frame.meshes, region, &t, &cube, Color::gray(0.1));
        push_axes(frame.meshes, region, &t, 1.5);

        let hud = self.hud();
        draw_chrome(frame, &TABS, projection_tab(self.projection), &hud.each_ref().map(String::as_str));
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use cgkit_ui::layout::tab_id;
    use glam::Vec3;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    // ── camera ────────────────────────────────────────────────────────────

    #[test]
    fn w_then_s_returns_camera() {
        let mut s = ProjectionScene::default();
        let layout = layout_of(&s);
        s.handle(&key(Key::W), &layout);
        assert!(s.camera.eye.length() < Camera::default().eye.length());
        s.handle(&key(Key::S), &layout);
        // Dolly scales by the current eye->center vector, which does not change.
        assert!(close(s.camera.eye, Camera::default().eye));
    }

    #[test]
    fn strafe_and_lift_keep_view_direction() {
        let mut s = ProjectionScene::default();
        let layout = layout_of(&s);
        let dir = s.camera.center - s.camera.eye;
        for k in [Key::A, Key::D, Key::D, Key::Q, Key::E, Key::E] {
            s.handle(&SceneEvent::Key { key: k, repeat: true }, &layout);
        }
        assert!(close(s.camera.center - s.camera.eye, dir));
        assert!((s.camera.eye.y - (Camera::default().eye.y - STEP)).abs() < 1e-5);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut s = ProjectionScene::default();
        let layout = layout_of(&s);
        s.handle(&key(Key::Q), &layout);
        s.handle(&key(Key::P), &layout);
        s.handle(&SceneEvent::Scroll(3.0), &layout);
        s.handle(&key(Key::R), &layout);
        assert_eq!(s, ProjectionScene::default());
    }

    // ── projection ────────────────────────────────────────────────────────

    #[test]
    fn p_toggles_and_tabs_select() {
        let mut s = ProjectionScene::default();
        let layout = layout_of(&s);
        s.handle(&key(Key::P), &layout);
        assert_eq!(s.projection, Projection::Orthographic);
        s.handle(&SceneEvent::Key { key: Key::P, repeat: true }, &layout);
        assert_eq!(s.projection, Projection::Orthographic);

        s.handle(&click_on(&layout, &tab_id(0)), &layout);
        assert_eq!(s.projection, Projection::Perspective);
        s.handle(&click_on(&layout, &tab_id(1)), &layout);
        assert_eq!(s.projection, Projection::Orthographic);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut s = ProjectionScene::default();
        let layout = layout_of(&s);
        s.handle(&SceneEvent::Scroll(100.0), &layout);
        assert_eq!(s.zoom, MAX_ZOOM);
        s.handle(&SceneEvent::Scroll(-100.0), &layout);
        assert_eq!(s.zoom, MIN_ZOOM);
    }
}

use cgkit_engine::coords::{Rect, Vec2, Viewport};
use cgkit_engine::input::Key;
use cgkit_engine::paint::Color;
use cgkit_geometry::projection::{aspect_ratio, ortho_fit};
use cgkit_geometry::{Camera, Solid};
use cgkit_ui::widgets::{draw_centered_text, draw_viewport_border, TEXT_SCALE};
use cgkit_ui::UiRect;
use glam::{Mat4, Vec3};

use super::transformations::column_region;
use super::{
    back_requested, clicked_tab, draw_chrome, scene_layout, Layout, Scene, SceneEvent, SceneFrame, SceneId,
    Transition,
};
use crate::draw::{push_axes, push_edges, push_solid, Surface, Transforms};

pub const DEFAULT_HALF_EXTENT: f32 = 2.5;
pub const MIN_HALF_EXTENT: f32 = 1.0;
pub const MAX_HALF_EXTENT: f32 = 6.0;
const HALF_EXTENT_PER_NOTCH: f32 = 0.25;

const NEAR: f32 = -10.0;
const FAR: f32 = 10.0;

const CUBE_HALF: f32 = 0.5;
const PYRAMID: (f32, f32) = (0.5, 1.0);
const SOLID_COLOR: Color = Color::rgb(0.9, 0.6, 0.3);
const BORDER_COLOR: Color = Color::rgb(0.4, 0.45, 0.5);

const TABS: [&str; 2] = ["Cubo", "Pirâmide"];
const TAB_WIDTH: f32 = 200.0;

const LABEL_Y: f32 = 96.0;

/// Front, side and top cameras, each looking at the origin.
pub fn cameras() -> [(&'static str, Camera); 3] {
    [
        ("Frente (+Z)", Camera::new(Vec3::new(0.0, 0.0, 4.0), Vec3::ZERO, Vec3::Y)),
        ("Lado (+X)", Camera::new(Vec3::new(4.0, 0.0, 0.0), Vec3::ZERO, Vec3::Y)),
        ("Topo (+Y)", Camera::new(Vec3::new(0.0, 4.0, 0.0), Vec3::ZERO, Vec3::NEG_Z)),
    ]
}

/// One solid in three side-by-side orthographic viewports.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewports {
    /// 0 = cube, 1 = pyramid.
    pub solid_tab: usize,
    /// Orthographic half-extent on the shorter axis of each viewport.
    pub half_extent: f32,
    pub show_axes: bool,
}

impl Default for Viewports {
    fn default() -> Self {
        Self {
            solid_tab: 0,
            half_extent: DEFAULT_HALF_EXTENT,
            show_axes: true,
        }
    }
}

impl Viewports {
    fn solid(&self) -> Solid {
        match self.solid_tab {
            0 => Solid::cube(CUBE_HALF),
            _ => Solid::pyramid(PYRAMID.0, PYRAMID.1),
        }
    }

    fn hud(&self) -> [String; 4] {
        [
            format!("Projeção ortogonal, meia largura {:.2}", self.half_extent),
            "Roda: zoom".to_string(),
            "X: eixos".to_string(),
            "Esc: menu".to_string(),
        ]
    }
}

impl Scene for Viewports {
    fn id(&self) -> SceneId {
        SceneId::Viewport
    }

    fn clear_color(&self) -> Color {
        Color::rgb(0.1, 0.1, 0.15)
    }

    fn handle(&mut self, event: &SceneEvent, layout: &Layout) -> Transition {
        if back_requested(event, layout) {
            return Transition::Back;
        }
        if let Some(tab) = clicked_tab(event, layout) {
            self.solid_tab = tab;
            return Transition::Stay;
        }
        match *event {
            SceneEvent::Scroll(notches) => {
                // Scrolling away from the user zooms in.
                self.half_extent = (self.half_extent - notches * HALF_EXTENT_PER_NOTCH)
                    .clamp(MIN_HALF_EXTENT, MAX_HALF_EXTENT);
            }
            _ if event.is_press(Key::X) => self.show_axes = !self.show_axes,
            _ => {}
        }
        Transition::Stay
    }

    fn layout(&self, viewport: Viewport) -> Vec<UiRect> {
        scene_layout(viewport, TABS.len(), TAB_WIDTH)
    }

    fn draw(&self, frame: &mut SceneFrame<'_>) {
        let vp = frame.viewport();
        let solid = self.solid();

        for (i, (label, camera)) in cameras().into_iter().enumerate() {
            let region = column_region(vp, i, 3);
            let aspect = aspect_ratio(region.width(), region.height());
            let projection = ortho_fit(self.half_extent, aspect, NEAR, FAR);
            let t = Transforms::new(Mat4::IDENTITY, camera.view(), projection);

            push_solid(frame.meshes, region, &t, &solid, Surface::Unlit(SOLID_COLOR));
            push_edges(frame.meshes, region, &t, &solid, Color::gray(0.15));
            if self.show_axes {
                push_axes(frame.meshes, region, &t, 1.2);
            }

            draw_viewport_border(&mut frame.painter, region, BORDER_COLOR);
            let label_box = Rect::new(Vec2::new(region.min.x, LABEL_Y), Vec2::new(region.max.x, LABEL_Y));
            draw_centered_text(&mut frame.painter, label_box, label, TEXT_SCALE, Color::gray(0.9));
        }

        let hud = self.hud();
        draw_chrome(frame, &TABS, self.solid_tab, &hud.each_ref().map(String::as_str));
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use cgkit_engine::scene::{DrawList, MeshList};
    use cgkit_ui::Painter;

    // ── cameras ───────────────────────────────────────────────────────────

    #[test]
    fn top_camera_sees_minus_z_as_up() {
        let (_, top) = cameras()[2];
        let p = top.view().transform_point3(Vec3::new(0.0, 0.0, -1.0));
        assert!(p.y > 0.99 && p.x.abs() < 1e-5);
    }

    #[test]
    fn side_camera_looks_down_minus_x() {
        let (_, side) = cameras()[1];
        let p = side.view().transform_point3(Vec3::ZERO);
        assert!((p.z + 4.0).abs() < 1e-5);
    }

    // ── state ─────────────────────────────────────────────────────────────

    #[test]
    fn wheel_zoom_is_clamped() {
        let mut s = Viewports::default();
        let layout = layout_of(&s);
        s.handle(&SceneEvent::Scroll(2.0), &layout);
        assert_eq!(s.half_extent, 2.0);
        s.handle(&SceneEvent::Scroll(50.0), &layout);
        assert_eq!(s.half_extent, MIN_HALF_EXTENT);
        s.handle(&SceneEvent::Scroll(-50.0), &layout);
        assert_eq!(s.half_extent, MAX_HALF_EXTENT);
    }

    #[test]
    fn x_toggles_axes() {
        let mut s = Viewports::default();
        let layout = layout_of(&s);
        s.handle(&key(Key::X), &layout);
        assert!(!s.show_axes);
    }

    // ── drawing ───────────────────────────────────────────────────────────

    #[test]
    fn three_regions_with_borders() {
        let s = Viewports::default();
        let layout = layout_of(&s);
        let mut dl = DrawList::new();
        let mut ml = MeshList::new();
        let mut frame = SceneFrame {
            painter: Painter::new(&mut dl, VP, None),
            meshes: &mut ml,
            layout: &layout,
        };
        s.draw(&mut frame);

        let mut regions: Vec<Rect> = ml.batches().iter().map(|b| b.region).collect();
        regions.dedup();
        assert_eq!(regions.len(), 3);

        let borders = dl.items().iter().filter(|c| c.color == BORDER_COLOR).count();
        assert_eq!(borders, 3 * 4);
    }
}

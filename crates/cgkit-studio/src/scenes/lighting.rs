use cgkit_engine::coords::Viewport;
use cgkit_engine::input::Key;
use cgkit_engine::paint::Color;
use cgkit_geometry::projection::{aspect_ratio, frustum};
use cgkit_geometry::{Camera, Material, PointLight, Shading, Solid};
use cgkit_ui::UiRect;
use glam::{Mat4, Vec3};

use super::{
    back_requested, clicked_tab, draw_chrome, scene_layout, Layout, Scene, SceneEvent, SceneFrame, SceneId,
    Transition,
};
use crate::draw::{push_edges, push_solid, Surface, Transforms};

const TABS: [&str; 3] = ["Flat", "Gouraud", "Comparar"];
const TAB_WIDTH: f32 = 260.0;

/// Degrees per arrow-key press.
pub const ROTATE_STEP: f32 = 10.0;

const NEAR: f32 = 0.1;
const FAR: f32 = 100.0;
const FRUSTUM_TOP: f32 = 0.5;

/// Horizontal offset of each solid in compare mode.
const COMPARE_OFFSET: f32 = 0.8;

const CUBE_HALF: f32 = 0.4;
const PYRAMID: (f32, f32) = (0.45, 0.9);

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Mode {
    Flat,
    Gouraud,
    /// Flat on the left, Gouraud on the right.
    Compare,
}

impl Mode {
    fn from_tab(tab: usize) -> Self {
        match tab {
            0 => Mode::Flat,
            1 => Mode::Gouraud,
            _ => Mode::Compare,
        }
    }

    fn tab(self) -> usize {
        match self {
            Mode::Flat => 0,
            Mode::Gouraud => 1,
            Mode::Compare => 2,
        }
    }
}

/// Flat vs. Gouraud shading under one point light.
#[derive(Debug, Clone, PartialEq)]
pub struct Lighting {
    pub mode: Mode,
    pub pyramid: bool,
    pub edges: bool,
    /// Rotation about Y, degrees.
    pub yaw: f32,
    /// Rotation about X, degrees.
    pub pitch: f32,
    pub light: PointLight,
    pub camera: Camera,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            mode: Mode::Compare,
            pyramid: false,
            edges: false,
            yaw: 0.0,
            pitch: 0.0,
            light: PointLight::default(),
            camera: Camera::new(Vec3::new(2.0, 1.5, 4.0), Vec3::ZERO, Vec3::Y),
        }
    }
}

impl Lighting {
    fn solid_and_material(&self) -> (Solid, Material) {
        if self.pyramid {
            (
                Solid::pyramid(PYRAMID.0, PYRAMID.1),
                Material::new(Vec3::new(0.8, 0.4, 0.2), Vec3::splat(0.5), 50.0),
            )
        } else {
            (
                Solid::cube(CUBE_HALF),
                Material::new(Vec3::new(0.2, 0.5, 0.8), Vec3::splat(0.4), 40.0),
            )
        }
    }

    fn rotation(&self) -> Mat4 {
        Mat4::from_rotation_x(self.pitch.to_radians()) * Mat4::from_rotation_y(self.yaw.to_radians())
    }

    /// Model offset and shading for each instance drawn in the current mode.
    fn instances(&self) -> Vec<(f32, Shading)> {
        match self.mode {
            Mode::Flat => vec![(0.0, Shading::Flat)],
            Mode::Gouraud => vec![(0.0, Shading::Smooth)],
            Mode::Compare => vec![(-COMPARE_OFFSET, Shading::Flat), (COMPARE_OFFSET, Shading::Smooth)],
        }
    }

    fn hud(&self) -> [String; 5] {
        let solid = if self.pyramid { "pirâmide" } else { "cubo" };
        let edges = if self.edges { "sim" } else { "não" };
        [
            format!("Luz pontual em (2, 3, 4)  objeto: {solid}  arestas: {edges}"),
            "C: cubo/pirâmide".to_string(),
            "E: arestas".to_string(),
            "Setas: girar".to_string(),
            "Esc: menu".to_string(),
        ]
    }
}

impl Scene for Lighting {
    fn id(&self) -> SceneId {
        SceneId::Lighting
    }

    fn clear_color(&self) -> Color {
        Color::rgb(0.08, 0.08, 0.12)
    }

    fn handle(&mut self, event: &SceneEvent, layout: &Layout) -> Transition {
        if back_requested(event, layout) {
            return Transition::Back;
        }
        if let Some(tab) = clicked_tab(event, layout) {
            self.mode = Mode::from_tab(tab);
            return Transition::Stay;
        }
        if let SceneEvent::Key { key, repeat } = *event {
            match key {
                Key::C if !repeat => self.pyramid = !self.pyramid,
                Key::E if !repeat => self.edges = !self.edges,
                Key::ArrowLeft => self.yaw -= ROTATE_STEP,
                Key::ArrowRight => self.yaw += ROTATE_STEP,
                Key::ArrowUp => self.pitch -= ROTATE_STEP,
                Key::ArrowDown => self.pitch += ROTATE_STEP,
                _ => {}
            }
        }
        Transition::Stay
    }

    fn layout(&self, viewport: Viewport) -> Vec<UiRect> {
        scene_layout(viewport, TABS.len(), TAB_WIDTH)
    }

    fn draw(&self, frame: &mut SceneFrame<'_>) {
        let vp = frame.viewport();
        let region = vp.bounds();
        let right = FRUSTUM_TOP * aspect_ratio(vp.width, vp.height);
        let projection = frustum(-right, right, -FRUSTUM_TOP, FRUSTUM_TOP, NEAR, FAR);
        let view = self.camera.view();
        let (solid, material) = self.solid_and_material();

        for (offset, shading) in self.instances() {
            let model = Mat4::from_translation(Vec3::new(offset, 0.0, 0.0)) * self.rotation();
            let t = Transforms::new(model, view, projection);
            let surface = Surface::Lit {
                light: &self.light,
                material: &material,
                eye: self.camera.eye,
                shading,
            };
            push_solid(frame.meshes, region, &t, &solid, surface);
            if self.edges {
                push_edges(frame.meshes, region, &t, &solid, Color::gray(0.05));
            }
        }

        let hud = self.hud();
        draw_chrome(frame, &TABS, self.mode.tab(), &hud.each_ref().map(String::as_str));
    }
}

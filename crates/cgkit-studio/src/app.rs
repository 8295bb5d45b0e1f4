use cgkit_engine::core::{App, AppControl, FrameCtx};
use cgkit_engine::render::{MeshRenderer, RectRenderer};
use cgkit_engine::scene::{DrawList, MeshList};
use cgkit_engine::window::{CursorIcon, RuntimeCtx};
use cgkit_ui::{Painter, PointerSample};

use crate::scenes::{Layout, Scene, SceneEvent, SceneFrame, SceneId, Transition};

/// Owns the active scene and the per-frame draw streams.
pub struct StudioApp {
    scene: Box<dyn Scene>,
    /// Rectangles drawn last frame; clicks are tested against these.
    layout: Layout,
    draw_list: DrawList,
    meshes: MeshList,
    rect_renderer: RectRenderer,
    mesh_renderer: MeshRenderer,
}

impl StudioApp {
    pub fn new(start: SceneId) -> Self {
        log::info!("starting in {start:?}");
        Self {
            scene: start.create(),
            layout: Layout::empty(),
            draw_list: DrawList::new(),
            meshes: MeshList::new(),
            rect_renderer: RectRenderer::new(),
            mesh_renderer: MeshRenderer::new(),
        }
    }

    fn enter(&mut self, id: SceneId, runtime: &mut RuntimeCtx) {
        log::info!("scene {:?} -> {id:?}", self.scene.id());
        self.scene = id.create();
        self.layout = Layout::empty();
        runtime.set_title(id.title());
    }

    /// Feeds this frame's events to the scene. Returns false on quit.
    fn dispatch(&mut self, events: &[SceneEvent], runtime: &mut RuntimeCtx) -> bool {
        for event in events {
            match self.scene.handle(event, &self.layout) {
                Transition::Stay => continue,
                Transition::Back => self.enter(SceneId::Menu, runtime),
                Transition::Enter(id) => self.enter(id, runtime),
                Transition::Quit => {
                    log::info!("quit requested");
                    return false;
                }
            }
            // The new scene has no layout yet; drop the rest of the frame's input.
            break;
        }
        true
    }
}

impl App for StudioApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let events = SceneEvent::collect(ctx.input_frame);
        if !self.dispatch(&events, ctx.runtime) {
            return AppControl::Exit;
        }

        self.scene.update(ctx.time.dt);

        let viewport = ctx.window.viewport();
        self.layout = Layout::new(viewport, self.scene.layout(viewport));

        let pointer = ctx.input.pointer_pos.map(|(x, y)| PointerSample::new(x, y));
        let hovering = pointer.and_then(|p| self.layout.hit(p)).is_some();
        ctx.window.set_cursor(if hovering { CursorIcon::Pointer } else { CursorIcon::Default });

        self.draw_list.clear();
        self.meshes.clear();
        {
            let mut frame = SceneFrame {
                painter: Painter::new(&mut self.draw_list, viewport, pointer),
                meshes: &mut self.meshes,
                layout: &self.layout,
            };
            self.scene.draw(&mut frame);
        }

        let clear = self.scene.clear_color();
        let (meshes, draw_list) = (&self.meshes, &self.draw_list);
        let (mesh_renderer, rect_renderer) = (&mut self.mesh_renderer, &mut self.rect_renderer);
        ctx.render(clear, |rctx, target| {
            mesh_renderer.render(rctx, target, meshes);
            rect_renderer.render(rctx, target, draw_list);
        })
    }
}

use crate::device::DEPTH_FORMAT;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{MeshList, MeshVertex, Primitive};

use super::common::{premul_alpha_blend, region_to_physical};

/// Immediate-mode renderer for clip-space triangles and lines.
///
/// The whole `MeshList` is uploaded once per frame; each batch is then drawn
/// with its own viewport so several views can share one pass. Depth testing
/// uses `LessEqual` so outlines drawn after faces at the same depth survive.
#[derive(Default)]
pub struct MeshRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    triangles: Option<wgpu::RenderPipeline>,
    lines: Option<wgpu::RenderPipeline>,

    vbo: Option<wgpu::Buffer>,
    vbo_capacity: usize,
}

impl MeshRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, meshes: &MeshList) {
        if meshes.is_empty() || !ctx.viewport.is_valid() {
            return;
        }

        self.ensure_pipelines(ctx);
        self.ensure_vertex_capacity(ctx, meshes.vertices().len());

        let Some(vbo) = self.vbo.as_ref() else { return };
        ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(meshes.vertices()));

        let Some(triangles) = self.triangles.as_ref() else { return };
        let Some(lines) = self.lines.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("cgkit mesh pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: target.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_vertex_buffer(0, vbo.slice(..));

        for batch in meshes.batches() {
            let Some([x, y, w, h]) =
                region_to_physical(batch.region, ctx.viewport, ctx.scale_factor, ctx.target_size)
            else {
                continue;
            };

            rpass.set_viewport(x, y, w, h, 0.0, 1.0);
            rpass.set_pipeline(match batch.primitive {
                Primitive::Triangles => triangles,
                Primitive::Lines => lines,
            });
            rpass.draw(batch.range.clone(), 0..1);
        }
    }

    fn ensure_pipelines(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format)
            && self.triangles.is_some()
            && self.lines.is_some()
        {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("cgkit mesh shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/mesh.wgsl").into()),
        });

        let layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("cgkit mesh pipeline layout"),
                bind_group_layouts: &[],
                immediate_size: 0,
            });

        let build = |label: &str, topology: wgpu::PrimitiveTopology| {
            ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&layout),

                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[mesh_vertex_layout()],
                },

                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.surface_format,
                        blend: Some(premul_alpha_blend()),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),

                // Mirror transforms flip winding, so nothing is culled.
                primitive: wgpu::PrimitiveState {
                    topology,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },

                depth_stencil: Some(wgpu::DepthStencilState {
                    format: DEPTH_FORMAT,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::LessEqual,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            })
        };

        self.triangles = Some(build("cgkit mesh triangles", wgpu::PrimitiveTopology::TriangleList));
        self.lines = Some(build("cgkit mesh lines", wgpu::PrimitiveTopology::LineList));
        self.pipeline_format = Some(ctx.surface_format);

        log::debug!("mesh pipelines built for {:?}", ctx.surface_format);
    }

    fn ensure_vertex_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.vbo_capacity && self.vbo.is_some() {
            return;
        }

        let new_cap = required.next_power_of_two().max(1024);
        self.vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("cgkit mesh vbo"),
            size: (new_cap * std::mem::size_of::<MeshVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vbo_capacity = new_cap;
    }
}

const MESH_ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
    0 => Float32x4, // clip
    1 => Float32x4  // color
];

fn mesh_vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<MeshVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &MESH_ATTRS,
    }
}

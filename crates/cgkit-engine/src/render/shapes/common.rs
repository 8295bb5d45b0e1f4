//! GPU types and helpers shared by the renderers.

use bytemuck::{Pod, Zeroable};
use winit::dpi::PhysicalSize;

use crate::coords::{Rect, Viewport};

// ── blend ─────────────────────────────────────────────────────────────────

pub(super) fn premul_alpha_blend() -> wgpu::BlendState {
    wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
    }
}

// ── viewport uniform ──────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct ViewportUniform {
    pub viewport: [f32; 2],
    pub _pad: [f32; 2], // 16-byte alignment
}

pub(super) fn viewport_ubo_min_binding_size() -> Option<std::num::NonZeroU64> {
    std::num::NonZeroU64::new(std::mem::size_of::<ViewportUniform>() as u64)
}

// ── quad vertex ───────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct QuadVertex {
    pub pos: [f32; 2], // 0..1
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

pub(super) const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { pos: [0.0, 0.0] },
    QuadVertex { pos: [1.0, 0.0] },
    QuadVertex { pos: [1.0, 1.0] },
    QuadVertex { pos: [0.0, 1.0] },
];

pub(super) const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

// ── viewport regions ──────────────────────────────────────────────────────

/// Converts an overlay-space region to `set_viewport` arguments `[x, y, w, h]`
/// in physical pixels with a top-left origin, clamped to the render target.
///
/// Returns `None` when less than one physical pixel remains on either axis.
pub(super) fn region_to_physical(
    region: Rect,
    viewport: Viewport,
    scale: f32,
    target: PhysicalSize<u32>,
) -> Option<[f32; 4]> {
    let r = region.normalized();
    let (tw, th) = (target.width as f32, target.height as f32);

    let x0 = (r.min.x * scale).clamp(0.0, tw);
    let x1 = (r.max.x * scale).clamp(0.0, tw);
    // Overlay y grows upward; framebuffer y grows downward.
    let y0 = ((viewport.height - r.max.y) * scale).clamp(0.0, th);
    let y1 = ((viewport.height - r.min.y) * scale).clamp(0.0, th);

    let (w, h) = (x1 - x0, y1 - y0);
    if !(w >= 1.0 && h >= 1.0) {
        return None;
    }
    Some([x0, y0, w, h])
}

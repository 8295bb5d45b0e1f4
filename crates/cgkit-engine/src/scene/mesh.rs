use std::ops::Range;

use bytemuck::{Pod, Zeroable};

use crate::coords::Rect;
use crate::paint::Color;

/// One mesh vertex, already transformed and lit on the CPU.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    /// Homogeneous clip-space position (before the perspective divide).
    pub clip: [f32; 4],
    /// Premultiplied RGBA.
    pub color: [f32; 4],
}

impl MeshVertex {
    #[inline]
    pub fn new(clip: [f32; 4], color: Color) -> Self {
        Self { clip, color: color.to_array() }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Primitive {
    Triangles,
    Lines,
}

/// A run of vertices drawn with one primitive type into one viewport region.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBatch {
    /// Target region in overlay space (logical pixels, bottom-left origin).
    pub region: Rect,
    pub primitive: Primitive,
    /// Vertex range into [`MeshList::vertices`].
    pub range: Range<u32>,
}

/// Immediate-mode 3D draw stream for a frame.
///
/// Consecutive pushes that share a region and primitive extend the same batch.
#[derive(Debug, Default)]
pub struct MeshList {
    vertices: Vec<MeshVertex>,
    batches: Vec<MeshBatch>,
}

impl MeshList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.batches.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &[MeshVertex] {
        &self.vertices
    }

    #[inline]
    pub fn batches(&self) -> &[MeshBatch] {
        &self.batches
    }

    pub fn push_triangle(&mut self, region: Rect, tri: [MeshVertex; 3]) {
        self.extend(region, Primitive::Triangles, &tri);
    }

    pub fn push_line(&mut self, region: Rect, a: MeshVertex, b: MeshVertex) {
        self.extend(region, Primitive::Lines, &[a, b]);
    }

    fn extend(&mut self, region: Rect, primitive: Primitive, verts: &[MeshVertex]) {
        let start = self.vertices.len() as u32;
        self.vertices.extend_from_slice(verts);
        let end = self.vertices.len() as u32;

        if let Some(last) = self.batches.last_mut() {
            if last.region == region && last.primitive == primitive && last.range.end == start {
                last.range.end = end;
                return;
            }
        }
        self.batches.push(MeshBatch { region, primitive, range: start..end });
    }
}

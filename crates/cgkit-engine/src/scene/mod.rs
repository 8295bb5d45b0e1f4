//! Draw streams recorded by the app each frame and consumed by `render`.
//!
//! - [`DrawList`]: overlay quads in logical pixels, painted in insertion order
//! - [`MeshList`]: clip-space triangles and lines, batched per viewport region

mod list;
mod mesh;

pub use list::{DrawList, RectCmd};
pub use mesh::{MeshBatch, MeshList, MeshVertex, Primitive};

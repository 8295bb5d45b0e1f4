//! GPU rendering.
//!
//! Renderers consume `scene` draw streams and issue wgpu commands. Each
//! renderer owns its pipelines and buffers and creates them lazily on first
//! use (or when the surface format changes).
//!
//! Conventions:
//! - overlay geometry is in logical pixels, bottom-left origin, +Y up
//! - mesh geometry arrives in clip space and is drawn into per-batch viewports
//!   with depth testing

mod ctx;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
pub use shapes::mesh::MeshRenderer;
pub use shapes::rect::RectRenderer;

//! Geometry for the cgkit teaching scenes.
//!
//! Everything here is pure CPU math over `glam` types:
//! - `solid`: procedural cube / square pyramid with flat or smooth normals,
//!   plus wireframe edge lists
//! - `normal`: face-normal synthesis and the shared normalization rule
//! - `transform`, `projection`, `camera`: the matrices the scenes demonstrate
//! - `lighting`: fixed-function style per-point shading
//!
//! World space is right-handed, +Y up. Clip-space depth follows wgpu (`[0, 1]`).

pub mod camera;
pub mod lighting;
pub mod normal;
pub mod projection;
pub mod solid;
pub mod transform;

pub use camera::Camera;
pub use lighting::{Material, PointLight};
pub use projection::Projection;
pub use solid::{Edge, Face, Shading, Solid, Vertex};

pub use glam::{Mat4, Vec3};

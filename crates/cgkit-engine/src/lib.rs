//! cgkit engine crate.
//!
//! Platform and GPU runtime used by the UI kit and the studio binary: a
//! winit event loop, a wgpu device per window, a platform-agnostic input
//! model, and two renderers (overlay quads and clip-space meshes).

pub mod core;
pub mod device;
pub mod input;
pub mod time;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;

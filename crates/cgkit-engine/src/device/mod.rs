//! GPU device and surface management.
//!
//! Responsibilities:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - configuring the window surface and the matching depth buffer
//! - acquiring frames and providing encoders/views for rendering

mod context;
mod depth;
mod error;
mod frame;
mod init;
mod surface;

pub use context::Gpu;
pub use depth::DEPTH_FORMAT;
pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use init::GpuInit;

//! Per-primitive renderers.

mod common;

pub mod mesh;
pub mod rect;

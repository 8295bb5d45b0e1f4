//! Paint model shared between the UI kit and the renderers.
//!
//! Only solid colors exist; every overlay quad and mesh vertex carries one.

pub mod color;

pub use color::Color;

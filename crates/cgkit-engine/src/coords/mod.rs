//! Overlay coordinate primitives.
//!
//! Overlay space is measured in logical pixels with the origin at the
//! bottom-left corner of the window and +Y pointing up. Pointer input arrives
//! top-left/+Y-down and must be flipped before it is compared with overlay
//! geometry.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;

//! cgkit UI: immediate-mode screen-space overlays on top of `cgkit-engine`.
//!
//! Everything here works in rendering space (logical pixels, origin at the
//! bottom-left, +Y up). Layout functions are pure and return [`UiRect`]s
//! that the caller keeps until the next frame, when pointer input is
//! resolved against them with [`hit_test`]. Drawing goes through a
//! [`Painter`] that records quads into the engine's `DrawList`; the only
//! text facility is a fixed 5×7 bitmap font.

pub mod font;
pub mod hit;
pub mod layout;
pub mod painter;
pub mod text;
pub mod widgets;

pub use hit::{hit_test, PointerSample};
pub use layout::{layout_back_button, layout_column, layout_tabs, UiRect};
pub use painter::Painter;
pub use text::{measure_text, render_text};

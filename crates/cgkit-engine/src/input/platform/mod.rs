//! Window-system translation into engine input events.

mod winit;

pub(crate) use self::winit::translate_window_event;

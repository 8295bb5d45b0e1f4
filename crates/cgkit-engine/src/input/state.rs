use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{
    InputEvent,
    Key,
    KeyState,
    Modifiers,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};

/// Current input state for a single window.
///
/// Per-frame transitions are recorded into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,

    pub focused: bool,

    /// Pointer position in logical pixels, top-left origin.
    pub pointer_pos: Option<(f32, f32)>,

    pub keys_down: HashSet<Key>,

    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies an input event to the current state and records deltas in `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
            }

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Releases are not delivered to unfocused windows.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key { key, state, modifiers, .. } => {
                self.modifiers = *modifiers;
                match state {
                    KeyState::Pressed => {
                        if self.keys_down.insert(*key) {
                            frame.keys_pressed.insert(*key);
                        }
                    }
                    KeyState::Released => {
                        if self.keys_down.remove(key) {
                            frame.keys_released.insert(*key);
                        }
                    }
                }
            }

            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y, modifiers }) => {
                self.pointer_pos = Some((*x, *y));
                self.modifiers = *modifiers;
                match state {
                    MouseButtonState::Pressed => {
                        if self.buttons_down.insert(*button) {
                            frame.buttons_pressed.insert(*button);
                        }
                    }
                    MouseButtonState::Released => {
                        if self.buttons_down.remove(button) {
                            frame.buttons_released.insert(*button);
                        }
                    }
                }
            }

            InputEvent::MouseWheel { delta, modifiers } => {
                self.modifiers = *modifiers;
                frame.scroll_delta += delta.lines_y();
            }
        }

        frame.push_event(ev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseWheelDelta;

    fn key(key: Key, state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key { key, state, modifiers: Modifiers::default(), repeat }
    }

    // ── keys ──────────────────────────────────────────────────────────────

    #[test]
    fn repeat_press_is_not_a_new_transition() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();

        st.apply_event(&mut fr, key(Key::W, KeyState::Pressed, false));
        fr.clear();
        st.apply_event(&mut fr, key(Key::W, KeyState::Pressed, true));

        assert!(st.keys_down.contains(&Key::W));
        assert!(!fr.keys_pressed.contains(&Key::W));
        assert_eq!(fr.events.len(), 1);
    }

    #[test]
    fn release_clears_down_set() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();

        st.apply_event(&mut fr, key(Key::Space, KeyState::Pressed, false));
        st.apply_event(&mut fr, key(Key::Space, KeyState::Released, false));

        assert!(!st.keys_down.contains(&Key::Space));
        assert!(fr.keys_pressed.contains(&Key::Space));
        assert!(fr.keys_released.contains(&Key::Space));
    }

    #[test]
    fn focus_loss_drops_held_keys() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();

        st.apply_event(&mut fr, key(Key::A, KeyState::Pressed, false));
        st.apply_event(&mut fr, InputEvent::Focused(false));

        assert!(st.keys_down.is_empty());
    }

    // ── pointer ───────────────────────────────────────────────────────────

    #[test]
    fn button_press_updates_pointer_position() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();

        st.apply_event(
            &mut fr,
            InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state: MouseButtonState::Pressed,
                x: 12.0,
                y: 34.0,
                modifiers: Modifiers::default(),
            }),
        );

        assert_eq!(st.pointer_pos, Some((12.0, 34.0)));
        assert!(fr.buttons_pressed.contains(&MouseButton::Left));
        assert!(st.buttons_down.contains(&MouseButton::Left));
    }

    #[test]
    fn pointer_left_forgets_position() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();

        st.apply_event(&mut fr, InputEvent::PointerMoved(PointerMoveEvent { x: 1.0, y: 2.0 }));
        st.apply_event(&mut fr, InputEvent::PointerLeft);

        assert_eq!(st.pointer_pos, None);
    }

    #[test]
    fn wheel_accumulates_until_frame_clear() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();
        let wheel = |y| InputEvent::MouseWheel {
            delta: MouseWheelDelta::Line { x: 0.0, y },
            modifiers: Modifiers::default(),
        };

        st.apply_event(&mut fr, wheel(1.0));
        st.apply_event(&mut fr, wheel(2.0));
        assert_eq!(fr.scroll_delta, 3.0);

        fr.clear();
        assert_eq!(fr.scroll_delta, 0.0);
        assert!(fr.is_empty());
    }
}

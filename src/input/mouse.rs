use glam::Vec2;

use super::event::MouseButton;

/// Set of mouse buttons currently held down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldButtons {
    left: bool,
    right: bool,
    middle: bool,
}

impl HeldButtons {
    /// No buttons held.
    pub const NONE: Self = Self {
        left: false,
        right: false,
        middle: false,
    };

    /// Only the given button held.
    #[must_use]
    pub fn only(button: MouseButton) -> Self {
        let mut held = Self::NONE;
        held.set(button, true);
        held
    }

    /// Mark `button` as pressed or released.
    pub fn set(&mut self, button: MouseButton, pressed: bool) {
        match button {
            MouseButton::Left => self.left = pressed,
            MouseButton::Right => self.right = pressed,
            MouseButton::Middle => self.middle = pressed,
        }
    }

    /// Whether `button` is held.
    #[must_use]
    pub fn contains(self, button: MouseButton) -> bool {
        match button {
            MouseButton::Left => self.left,
            MouseButton::Right => self.right,
            MouseButton::Middle => self.middle,
        }
    }

    /// Whether no button is held.
    #[must_use]
    pub fn is_empty(self) -> bool {
        !(self.left || self.right || self.middle)
    }
}

/// Cursor position and held-button tracking for one pointer.
#[derive(Debug, Default)]
pub(crate) struct PointerState {
    /// Last known cursor position; `None` until the first move.
    pub position: Option<Vec2>,
    /// Buttons currently down.
    pub buttons: HeldButtons,
}

impl PointerState {
    /// Record a press or release and report the gesture boundary it crosses.
    pub fn handle_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> GestureEdge {
        let was_idle = self.buttons.is_empty();
        if self.buttons.contains(button) == pressed {
            return GestureEdge::None;
        }
        self.buttons.set(button, pressed);
        match (was_idle, self.buttons.is_empty()) {
            (true, false) => GestureEdge::Started,
            (false, true) => GestureEdge::Ended,
            _ => GestureEdge::None,
        }
    }
}

/// Whether a button change began or finished a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GestureEdge {
    /// First button went down.
    Started,
    /// Last button came up.
    Ended,
    /// Gesture continues (or a repeated press/release was ignored).
    None,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_buttons_track_each_button() {
        let mut held = HeldButtons::NONE;
        assert!(held.is_empty());
        held.set(MouseButton::Middle, true);
        assert!(held.contains(MouseButton::Middle));
        assert!(!held.contains(MouseButton::Left));
        held.set(MouseButton::Middle, false);
        assert!(held.is_empty());
        assert!(HeldButtons::only(MouseButton::Left).contains(MouseButton::Left));
    }

    #[test]
    fn gesture_spans_first_press_to_last_release() {
        let mut state = PointerState::default();
        assert_eq!(
            state.handle_button(MouseButton::Left, true),
            GestureEdge::Started
        );
        assert_eq!(
            state.handle_button(MouseButton::Middle, true),
            GestureEdge::None
        );
        assert_eq!(
            state.handle_button(MouseButton::Left, false),
            GestureEdge::None
        );
        assert_eq!(
            state.handle_button(MouseButton::Middle, false),
            GestureEdge::Ended
        );
    }

    #[test]
    fn repeated_press_is_ignored() {
        let mut state = PointerState::default();
        let _ = state.handle_button(MouseButton::Left, true);
        assert_eq!(
            state.handle_button(MouseButton::Left, true),
            GestureEdge::None
        );
        assert_eq!(
            state.handle_button(MouseButton::Right, false),
            GestureEdge::None
        );
    }
}

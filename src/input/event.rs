/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// forwards them to an [`InputHandler`](super::InputHandler) such as the
/// orbit camera.
///
/// # Example
///
/// ```ignore
/// let changed = processor.handle_event(
///     InputEvent::CursorMoved { x: 100.0, y: 200.0 },
///     &mut orbit_camera,
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Wheel scroll in notches (positive = toward the target).
    Scroll {
        /// Signed notch count; one notch is 120 raw platform units.
        notches: f32,
    },
    /// Key pressed.
    Key {
        /// Physical key in `winit::keyboard::KeyCode` debug format, e.g.
        /// `"KeyW"` or `"ArrowLeft"`.
        code: String,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

#[cfg(feature = "viewer")]
impl MouseButton {
    /// Map a winit button, ignoring back/forward and vendor buttons.
    #[must_use]
    pub fn from_winit(button: winit::event::MouseButton) -> Option<Self> {
        match button {
            winit::event::MouseButton::Left => Some(Self::Left),
            winit::event::MouseButton::Right => Some(Self::Right),
            winit::event::MouseButton::Middle => Some(Self::Middle),
            _ => None,
        }
    }
}

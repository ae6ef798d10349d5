use glam::Vec2;

use super::{keyboard::CameraAction, mouse::HeldButtons};

/// Receiver of decoded pointer, wheel and key input.
///
/// The [`InputProcessor`](super::InputProcessor) calls these in the order
/// the platform delivers events. Every method returns `true` when it changed
/// what is on screen.
pub trait InputHandler {
    /// First button of a drag gesture went down at `point`.
    fn on_pointer_down(&mut self, point: Vec2) -> bool;

    /// Pointer moved to `point` while `buttons` are held.
    fn on_pointer_move(&mut self, point: Vec2, buttons: HeldButtons) -> bool;

    /// Last held button was released.
    fn on_pointer_up(&mut self) -> bool;

    /// Wheel turned by `notches` (positive = toward the target).
    fn on_wheel(&mut self, notches: f32) -> bool;

    /// A bound key was pressed.
    fn on_action(&mut self, action: CameraAction) -> bool;
}

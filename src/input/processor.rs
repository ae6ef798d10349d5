//! Converts raw platform events into [`InputHandler`] calls.
//!
//! The `InputProcessor` owns all transient input state (cursor position,
//! held buttons) and the key-binding map. It is the only thing that sits
//! between raw window events and the camera model.

use glam::Vec2;

use super::event::InputEvent;
use super::handler::InputHandler;
use super::mouse::{GestureEdge, HeldButtons, PointerState};
use crate::options::KeybindingOptions;

/// Routes [`InputEvent`]s to an [`InputHandler`].
///
/// Pointer moves are only forwarded while a button is held, so a handler
/// sees `down → move* → up` for every drag gesture.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if processor.handle_event(event, &mut orbit_camera) {
///     window.request_redraw();
/// }
/// ```
pub struct InputProcessor {
    /// Cursor and button tracking.
    pointer: PointerState,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a processor with the given key bindings.
    #[must_use]
    pub fn new(key_bindings: KeybindingOptions) -> Self {
        Self {
            pointer: PointerState::default(),
            key_bindings,
        }
    }

    /// Last known cursor position in physical pixels.
    #[must_use]
    pub fn cursor(&self) -> Option<Vec2> {
        self.pointer.position
    }

    /// Buttons currently held.
    #[must_use]
    pub fn buttons(&self) -> HeldButtons {
        self.pointer.buttons
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Replace the key bindings.
    pub fn set_key_bindings(&mut self, key_bindings: KeybindingOptions) {
        self.key_bindings = key_bindings;
    }

    /// Forget held buttons, e.g. when the window loses focus mid-drag.
    ///
    /// Ends any gesture in progress on `handler`.
    pub fn release_all(&mut self, handler: &mut impl InputHandler) -> bool {
        if self.pointer.buttons.is_empty() {
            return false;
        }
        self.pointer.buttons = HeldButtons::NONE;
        handler.on_pointer_up()
    }

    /// Process one raw event. Returns `true` if the handler changed state.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        handler: &mut impl InputHandler,
    ) -> bool {
        match event {
            InputEvent::CursorMoved { x, y } => {
                let point = Vec2::new(x, y);
                self.pointer.position = Some(point);
                if self.pointer.buttons.is_empty() {
                    return false;
                }
                handler.on_pointer_move(point, self.pointer.buttons)
            }
            InputEvent::MouseButton { button, pressed } => {
                match self.pointer.handle_button(button, pressed) {
                    // Without a known cursor position there is no anchor;
                    // the first move of the gesture only records one.
                    GestureEdge::Started => match self.pointer.position {
                        Some(point) => handler.on_pointer_down(point),
                        None => false,
                    },
                    GestureEdge::Ended => handler.on_pointer_up(),
                    GestureEdge::None => false,
                }
            }
            InputEvent::Scroll { notches } => {
                if notches == 0.0 {
                    return false;
                }
                handler.on_wheel(notches)
            }
            InputEvent::Key { code } => match self.key_bindings.lookup(&code) {
                Some(action) => handler.on_action(action),
                None => {
                    log::trace!("unbound key {code}");
                    false
                }
            },
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new(KeybindingOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::orbit::OrbitCamera;
    use crate::camera::pose::CameraPose;
    use crate::input::{CameraAction, MouseButton};

    #[derive(Debug, PartialEq)]
    enum Call {
        Down(Vec2),
        Move(Vec2, HeldButtons),
        Up,
        Wheel(f32),
        Action(CameraAction),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl InputHandler for Recorder {
        fn on_pointer_down(&mut self, point: Vec2) -> bool {
            self.calls.push(Call::Down(point));
            false
        }

        fn on_pointer_move(&mut self, point: Vec2, buttons: HeldButtons) -> bool {
            self.calls.push(Call::Move(point, buttons));
            true
        }

        fn on_pointer_up(&mut self) -> bool {
            self.calls.push(Call::Up);
            false
        }

        fn on_wheel(&mut self, notches: f32) -> bool {
            self.calls.push(Call::Wheel(notches));
            true
        }

        fn on_action(&mut self, action: CameraAction) -> bool {
            self.calls.push(Call::Action(action));
            true
        }
    }

    fn press(button: MouseButton) -> InputEvent {
        InputEvent::MouseButton {
            button,
            pressed: true,
        }
    }

    fn release(button: MouseButton) -> InputEvent {
        InputEvent::MouseButton {
            button,
            pressed: false,
        }
    }

    #[test]
    fn hover_without_buttons_is_not_forwarded() {
        let mut processor = InputProcessor::default();
        let mut recorder = Recorder::default();
        assert!(!processor.handle_event(
            InputEvent::CursorMoved { x: 5.0, y: 6.0 },
            &mut recorder,
        ));
        assert!(recorder.calls.is_empty());
        assert_eq!(processor.cursor(), Some(Vec2::new(5.0, 6.0)));
    }

    #[test]
    fn drag_gesture_is_down_moves_up() {
        let mut processor = InputProcessor::default();
        let mut recorder = Recorder::default();
        let events = [
            InputEvent::CursorMoved { x: 100.0, y: 100.0 },
            press(MouseButton::Left),
            InputEvent::CursorMoved { x: 110.0, y: 100.0 },
            press(MouseButton::Middle),
            InputEvent::CursorMoved { x: 120.0, y: 90.0 },
            release(MouseButton::Left),
            release(MouseButton::Middle),
            InputEvent::CursorMoved { x: 130.0, y: 90.0 },
        ];
        for event in events {
            let _ = processor.handle_event(event, &mut recorder);
        }

        let mut both = HeldButtons::only(MouseButton::Left);
        both.set(MouseButton::Middle, true);
        assert_eq!(
            recorder.calls,
            vec![
                Call::Down(Vec2::new(100.0, 100.0)),
                Call::Move(
                    Vec2::new(110.0, 100.0),
                    HeldButtons::only(MouseButton::Left)
                ),
                Call::Move(Vec2::new(120.0, 90.0), both),
                Call::Up,
            ]
        );
    }

    #[test]
    fn keys_go_through_bindings() {
        let mut processor = InputProcessor::default();
        let mut recorder = Recorder::default();
        assert!(processor.handle_event(
            InputEvent::Key {
                code: "KeyW".into()
            },
            &mut recorder,
        ));
        assert!(!processor.handle_event(
            InputEvent::Key {
                code: "KeyZ".into()
            },
            &mut recorder,
        ));
        assert_eq!(recorder.calls, vec![Call::Action(CameraAction::MoveForward)]);
    }

    #[test]
    fn zero_scroll_is_dropped() {
        let mut processor = InputProcessor::default();
        let mut recorder = Recorder::default();
        let _ = processor
            .handle_event(InputEvent::Scroll { notches: 0.0 }, &mut recorder);
        let _ = processor
            .handle_event(InputEvent::Scroll { notches: -2.0 }, &mut recorder);
        assert_eq!(recorder.calls, vec![Call::Wheel(-2.0)]);
    }

    #[test]
    fn release_all_ends_an_open_gesture_once() {
        let mut processor = InputProcessor::default();
        let mut recorder = Recorder::default();
        let _ = processor.handle_event(press(MouseButton::Right), &mut recorder);
        let _ = processor.release_all(&mut recorder);
        let _ = processor.release_all(&mut recorder);
        assert_eq!(recorder.calls, vec![Call::Up]);
        assert!(processor.buttons().is_empty());
    }

    #[test]
    fn press_before_any_cursor_position_does_not_anchor() {
        let mut processor = InputProcessor::default();
        let mut recorder = Recorder::default();
        let _ = processor.handle_event(press(MouseButton::Left), &mut recorder);
        assert!(recorder.calls.is_empty());

        let mut camera = OrbitCamera::default();
        let mut processor = InputProcessor::default();
        let _ = processor.handle_event(press(MouseButton::Left), &mut camera);
        let _ = processor.handle_event(
            InputEvent::CursorMoved { x: 400.0, y: 300.0 },
            &mut camera,
        );
        assert_eq!(camera.current_pose(), CameraPose::default());

        let _ = processor.handle_event(
            InputEvent::CursorMoved { x: 405.0, y: 300.0 },
            &mut camera,
        );
        assert!((camera.current_pose().azimuth - 1.0).abs() < 1e-5);
    }
}

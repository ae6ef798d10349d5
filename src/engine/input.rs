//! Input methods for PointViewEngine

use super::PointViewEngine;
use crate::input::InputEvent;

impl PointViewEngine {
    /// Process a platform-agnostic input event.
    ///
    /// Pointer and key events are routed through the input processor into
    /// the orbit camera. Returns `true` if the camera pose changed and a
    /// redraw is needed.
    ///
    /// # Example
    ///
    /// ```ignore
    /// engine.handle_input(InputEvent::CursorMoved { x, y });
    /// engine.handle_input(InputEvent::Scroll { notches: 1.0 });
    /// ```
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        let changed = self.input.handle_event(event, &mut self.orbit);
        if changed {
            self.sync_camera();
        }
        changed
    }

    /// End any drag in progress, e.g. when the window loses focus.
    pub fn release_input(&mut self) {
        let _ = self.input.release_all(&mut self.orbit);
    }
}

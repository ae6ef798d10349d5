//! Input handling: event types, pointer state, key actions, and the input
//! processor that turns raw window events into camera updates.

/// Platform-agnostic input events.
pub mod event;
/// The interface input is delivered through.
pub mod handler;
/// Bindable camera actions.
pub mod keyboard;
/// Held-button set and pointer tracking.
pub(crate) mod mouse;
/// Converts raw events into handler calls.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use handler::InputHandler;
pub use keyboard::CameraAction;
pub use mouse::HeldButtons;
pub use processor::InputProcessor;

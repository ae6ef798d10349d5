use serde::{Deserialize, Serialize};

/// Discrete camera actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// move_forward = "KeyW"
/// rotate_left = "ArrowLeft"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraAction {
    /// Move the target along the heading.
    MoveForward,
    /// Move the target against the heading.
    MoveBackward,
    /// Move the target left of the heading.
    StrafeLeft,
    /// Move the target right of the heading.
    StrafeRight,
    /// Increase the orbit distance.
    MoveUp,
    /// Decrease the orbit distance.
    MoveDown,
    /// Decrease azimuth by one angle step.
    RotateLeft,
    /// Increase azimuth by one angle step.
    RotateRight,
    /// Increase elevation by one angle step.
    RotateUp,
    /// Decrease elevation by one angle step.
    RotateDown,
    /// Return to the configured starting pose.
    ResetCamera,
}

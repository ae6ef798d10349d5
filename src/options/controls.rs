use serde::{Deserialize, Serialize};

/// How a wheel step that would cross zero distance is resolved.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ZoomClamp {
    /// Jump to `max(notches, min_distance)` when the step would cross zero.
    #[default]
    Stepped,
    /// Stop at the floor: `max(distance - notches, min_distance)`.
    Continuous,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Step sizes and sensitivities for mouse and keyboard camera control.
pub struct ControlOptions {
    /// Degrees (orbit) or world units (pan) per pixel of drag.
    pub sensitivity: f32,
    /// World units moved per movement key press.
    pub distance_step: f32,
    /// Degrees rotated per arrow key press.
    pub angle_step: f32,
    /// Smallest distance the camera may reach.
    pub min_distance: f32,
    /// Wheel behavior when zooming past the target.
    pub zoom_clamp: ZoomClamp,
    /// Pixels of touchpad scroll that count as one wheel notch.
    pub pixels_per_notch: f32,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            sensitivity: 0.2,
            distance_step: 0.2,
            angle_step: 1.0,
            min_distance: 0.01,
            zoom_clamp: ZoomClamp::Stepped,
            pixels_per_notch: 120.0,
        }
    }
}

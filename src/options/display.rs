use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// How points and the background are drawn.
pub struct DisplayOptions {
    /// Point sprite diameter in world units.
    pub point_size: f32,
    /// Point RGB color.
    pub point_color: [f32; 3],
    /// Clear color behind the cloud.
    pub background: [f32; 3],
    /// Wait for vertical blank before presenting.
    pub vsync: bool,
    /// Prefer an integrated GPU over a discrete one.
    pub low_power_gpu: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            point_size: 0.05,
            point_color: [1.0, 1.0, 1.0],
            background: [0.0, 0.0, 0.0],
            vsync: true,
            low_power_gpu: false,
        }
    }
}

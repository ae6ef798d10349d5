use serde::{Deserialize, Serialize};

use crate::camera::pose::CameraPose;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera projection parameters and the pose the viewer starts from.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Initial look-at target.
    pub target: [f32; 3],
    /// Initial distance from target to eye.
    pub distance: f32,
    /// Initial elevation in degrees.
    pub elevation: f32,
    /// Initial azimuth in degrees.
    pub azimuth: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 60.0,
            znear: 0.01,
            zfar: 1000.0,
            target: [0.0; 3],
            distance: 10.0,
            elevation: 0.0,
            azimuth: 0.0,
        }
    }
}

impl CameraOptions {
    /// Starting pose, forced into the valid range.
    #[must_use]
    pub fn initial_pose(&self, min_distance: f32) -> CameraPose {
        CameraPose {
            target: self.target.into(),
            distance: self.distance,
            elevation: self.elevation,
            azimuth: self.azimuth,
        }
        .normalized(min_distance)
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Parameters of the random point cloud sampled at startup.
pub struct CloudOptions {
    /// Number of points.
    pub count: usize,
    /// Standard deviation of the normal distribution on every axis.
    pub std_dev: f32,
    /// Fixed RNG seed; `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for CloudOptions {
    fn default() -> Self {
        Self {
            count: 1000,
            std_dev: 1.0,
            seed: None,
        }
    }
}

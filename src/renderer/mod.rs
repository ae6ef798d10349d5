//! Rendering for the point cloud viewer.

pub(crate) mod pipeline_util;
pub mod points;

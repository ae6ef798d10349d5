//! Camera system for orbiting a point cloud.
//!
//! [`pose`] holds the spherical pose and its clamp rules, [`orbit`] turns
//! input into pose changes, and [`core`]/[`controller`] project the pose for
//! the GPU.

/// GPU buffer and bind group mirroring the current pose.
pub mod controller;
/// Projection camera and GPU uniform types.
pub mod core;
/// Mouse/keyboard orbit model over a [`pose::CameraPose`].
pub mod orbit;
/// Orbit pose and its normalization helpers.
pub mod pose;

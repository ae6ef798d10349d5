// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive orbit-camera viewer for random 3D point clouds, built on wgpu.
//!
//! A cloud of normally distributed points is drawn as camera-facing discs.
//! The camera orbits a target: left-drag rotates, middle-drag pans, the
//! wheel zooms, and keys move or rotate in fixed steps. The current pose is
//! reported as a short status label.
//!
//! # Key entry points
//!
//! - [`camera::orbit::OrbitCamera`] - the input-to-pose camera model, usable
//!   without a GPU
//! - [`engine::PointViewEngine`] - GPU context, renderer and camera together
//! - [`options::Options`] - runtime configuration loaded from TOML presets
//! - [`Viewer`] - standalone winit window (`viewer` feature)
//!
//! # Architecture
//!
//! Window events become [`InputEvent`]s. The [`InputProcessor`] tracks held
//! buttons and key bindings and calls the [`InputHandler`] methods of the
//! orbit camera. Every accepted change is clamped or wrapped so the pose
//! stays valid, then mirrored into the GPU camera uniform for the next
//! frame.

pub mod camera;
pub mod cloud;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod renderer;
pub mod status;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use camera::orbit::{OrbitCamera, OrbitSettings};
pub use camera::pose::CameraPose;
pub use cloud::PointCloud;
pub use engine::PointViewEngine;
pub use error::PointViewError;
pub use input::{
    CameraAction, HeldButtons, InputEvent, InputHandler, InputProcessor,
    MouseButton,
};
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};

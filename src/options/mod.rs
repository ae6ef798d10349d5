//! Centralized viewer options with TOML preset support.
//!
//! All tweakable settings (camera start pose, control step sizes, the point
//! cloud, display colors, keybindings) are consolidated here. Options
//! serialize to/from TOML for presets stored in `assets/presets/`.

mod camera;
mod cloud;
mod controls;
mod display;
mod keybindings;

use std::path::Path;

pub use camera::CameraOptions;
pub use cloud::CloudOptions;
pub use controls::{ControlOptions, ZoomClamp};
pub use display::DisplayOptions;
pub use keybindings::KeybindingOptions;
use serde::{Deserialize, Serialize};

use crate::error::PointViewError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[controls]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera projection and starting pose.
    pub camera: CameraOptions,
    /// Mouse and keyboard step sizes.
    pub controls: ControlOptions,
    /// Random point cloud parameters.
    pub cloud: CloudOptions,
    /// Point and background appearance.
    pub display: DisplayOptions,
    /// Keyboard binding options.
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, PointViewError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| PointViewError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, PointViewError> {
        let content = std::fs::read_to_string(path).map_err(PointViewError::Io)?;
        let opts = Self::from_toml(&content)?;
        log::debug!("loaded options from {}", path.display());
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), PointViewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PointViewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(PointViewError::Io)?;
        }
        std::fs::write(path, content).map_err(PointViewError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::CameraAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[controls]
sensitivity = 0.5
zoom_clamp = "continuous"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.controls.sensitivity, 0.5);
        assert_eq!(opts.controls.zoom_clamp, ZoomClamp::Continuous);
        // Everything else should be default
        assert_eq!(opts.controls.distance_step, 0.2);
        assert_eq!(opts.controls.min_distance, 0.01);
        assert_eq!(opts.cloud.count, 1000);
        assert_eq!(opts.camera.distance, 10.0);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("[controls]\nsensitivity = \"fast\"")
            .unwrap_err();
        assert!(matches!(err, PointViewError::OptionsParse(_)));
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyW"),
            Some(CameraAction::MoveForward)
        );
        assert_eq!(
            opts.keybindings.lookup("ArrowRight"),
            Some(CameraAction::RotateRight)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn custom_bindings_survive_load() {
        let toml_str = r#"
[keybindings.bindings]
move_forward = "KeyI"
move_backward = "KeyK"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.lookup("KeyI"),
            Some(CameraAction::MoveForward)
        );
        assert_eq!(opts.keybindings.lookup("KeyW"), None);
    }

    #[test]
    fn rebinding_a_key_drops_its_old_action() {
        let mut bindings = KeybindingOptions::default();
        bindings.bind(CameraAction::ResetCamera, "KeyW");
        assert_eq!(bindings.lookup("KeyW"), Some(CameraAction::ResetCamera));
        assert!(!bindings.bindings.contains_key(&CameraAction::MoveForward));
        assert_eq!(bindings.lookup("KeyR"), None);
    }

    #[test]
    fn initial_pose_is_normalized() {
        let camera = CameraOptions {
            distance: 0.0,
            elevation: 100.0,
            azimuth: 370.0,
            ..CameraOptions::default()
        };
        let pose = camera.initial_pose(0.01);
        assert_eq!(pose.distance, 0.01);
        assert_eq!(pose.elevation, 90.0);
        assert_eq!(pose.azimuth, 10.0);
    }

    #[test]
    fn bundled_preset_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("assets/presets/close_up.toml");
        let opts = Options::load(&path).unwrap();
        assert_eq!(opts.camera.distance, 3.0);
        assert_eq!(opts.cloud.seed, Some(7));
        assert_eq!(opts.controls.zoom_clamp, ZoomClamp::Continuous);
    }

    #[test]
    fn save_then_load_preserves_options() {
        let dir = std::env::temp_dir()
            .join(format!("pointview-options-{}", std::process::id()));
        let path = dir.join("saved.toml");
        let mut opts = Options::default();
        opts.cloud.count = 42;
        opts.display.point_size = 0.1;
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();
        assert_eq!(loaded, opts);
    }
}

//! Options methods for PointViewEngine

use super::PointViewEngine;
use crate::camera::orbit::OrbitSettings;
use crate::cloud::PointCloud;
use crate::error::PointViewError;
use crate::options::Options;
use crate::renderer::points::point_instances;

/// Which GPU-side work an options change requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct OptionsDelta {
    /// `[cloud]` changed: sample a new cloud.
    resample: bool,
    /// Cloud or `[display]` changed: rebuild point instances.
    refresh_points: bool,
}

impl OptionsDelta {
    fn between(old: &Options, new: &Options) -> Self {
        let resample = old.cloud != new.cloud;
        Self {
            resample,
            refresh_points: resample || old.display != new.display,
        }
    }
}

impl PointViewEngine {
    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace options and apply the changes to every subsystem.
    ///
    /// A changed `[cloud]` section resamples the point cloud. The current
    /// camera pose is kept; a changed starting pose only affects
    /// [`crate::input::CameraAction::ResetCamera`]. Adapter and vsync
    /// choices only take effect on the next start.
    ///
    /// # Errors
    ///
    /// Returns [`PointViewError::Cloud`] if the new cloud options cannot be
    /// sampled. Nothing is applied in that case.
    pub fn set_options(&mut self, new: Options) -> Result<(), PointViewError> {
        let delta = OptionsDelta::between(&self.options, &new);
        if delta.resample {
            self.cloud = PointCloud::from_options(&new.cloud)?;
        }

        self.options = new;
        self.apply_camera();
        self.input.set_key_bindings(self.options.keybindings.clone());
        if delta.refresh_points {
            self.refresh_points();
        }
        Ok(())
    }

    /// Push camera and control options to the orbit model and GPU camera.
    fn apply_camera(&mut self) {
        let settings = OrbitSettings::from(&self.options.controls);
        self.orbit.set_settings(settings);
        self.orbit
            .set_home(self.options.camera.initial_pose(settings.min_distance));
        self.camera_controller.apply_options(&self.options.camera);
        self.sync_camera();
    }

    /// Re-upload point instances after a cloud or display change.
    fn refresh_points(&mut self) {
        let instances =
            point_instances(self.cloud.positions(), &self.options.display);
        self.points.write_instances(
            &self.context.device,
            &self.context.queue,
            &instances,
        );
        log::debug!("uploaded {} point instances", self.points.point_count());
    }
}

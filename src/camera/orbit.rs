//! The orbit camera model: a [`CameraPose`] plus the rules that move it.
//!
//! Nothing here touches the GPU. Every update clamps or wraps instead of
//! failing, so any sequence of input leaves the pose valid.

use glam::{Vec2, Vec3};

use super::pose::{
    apply_zoom, clamp_distance, clamp_elevation, wrap_azimuth, CameraPose,
};
use crate::input::{CameraAction, HeldButtons, InputHandler, MouseButton};
use crate::options::{ControlOptions, ZoomClamp};

/// Step sizes the model applies to input deltas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSettings {
    /// Degrees (orbit) or world units (pan) per pixel of drag.
    pub sensitivity: f32,
    /// World units per movement key press.
    pub distance_step: f32,
    /// Degrees per rotation key press.
    pub angle_step: f32,
    /// Distance floor.
    pub min_distance: f32,
    /// Wheel behavior when zooming past the target.
    pub zoom_clamp: ZoomClamp,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self::from(&ControlOptions::default())
    }
}

impl From<&ControlOptions> for OrbitSettings {
    fn from(controls: &ControlOptions) -> Self {
        Self {
            sensitivity: controls.sensitivity,
            distance_step: controls.distance_step,
            angle_step: controls.angle_step,
            min_distance: controls.min_distance,
            zoom_clamp: controls.zoom_clamp,
        }
    }
}

/// Orbit camera driven by drag, wheel and key input.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pose: CameraPose,
    home: CameraPose,
    settings: OrbitSettings,
    /// Pointer position at the previous drag update.
    last_pointer: Option<Vec2>,
    /// Whether a press has started a gesture that has not been released.
    dragging: bool,
}

impl OrbitCamera {
    /// Camera starting (and resetting) at `home`.
    #[must_use]
    pub fn new(home: CameraPose, settings: OrbitSettings) -> Self {
        let home = home.normalized(settings.min_distance);
        Self {
            pose: home,
            home,
            settings,
            last_pointer: None,
            dragging: false,
        }
    }

    /// Snapshot of the current pose.
    #[must_use]
    pub fn current_pose(&self) -> CameraPose {
        self.pose
    }

    /// Step sizes in use.
    #[must_use]
    pub fn settings(&self) -> OrbitSettings {
        self.settings
    }

    /// Swap step sizes; the pose is re-clamped against the new floor.
    pub fn set_settings(&mut self, settings: OrbitSettings) {
        self.settings = settings;
        self.pose = self.pose.normalized(settings.min_distance);
        self.home = self.home.normalized(settings.min_distance);
    }

    /// Replace the pose [`OrbitCamera::reset`] returns to. The current pose
    /// is left alone.
    pub fn set_home(&mut self, home: CameraPose) {
        self.home = home.normalized(self.settings.min_distance);
    }

    /// Return to the starting pose.
    pub fn reset(&mut self) {
        self.pose = self.home;
    }

    /// Record where a drag gesture starts.
    ///
    /// Only the first call of a gesture counts; repeated presses while a
    /// button is already down keep the original anchor.
    pub fn begin_drag(&mut self, point: Vec2) {
        if self.dragging {
            return;
        }
        self.dragging = true;
        self.last_pointer = Some(point);
    }

    /// Finish the current drag gesture.
    pub fn end_drag(&mut self) {
        self.dragging = false;
        self.last_pointer = None;
    }

    /// Apply pointer motion to `point` with `buttons` held.
    ///
    /// Middle pans the target in the XY plane, left orbits. Buttons are
    /// tested individually, so with both held both apply; an exact
    /// button-mask match would ignore such chords instead. Returns `true`
    /// if the pose changed. Without a previous pointer position this only
    /// records `point`.
    pub fn drag_update(&mut self, point: Vec2, buttons: HeldButtons) -> bool {
        let Some(last) = self.last_pointer.replace(point) else {
            return false;
        };
        let delta = (point - last) * self.settings.sensitivity;
        if delta == Vec2::ZERO {
            return false;
        }

        let mut changed = false;
        if buttons.contains(MouseButton::Middle) {
            self.pose.target.x -= delta.x;
            self.pose.target.y += delta.y;
            changed = true;
        }
        if buttons.contains(MouseButton::Left) {
            self.pose.azimuth = wrap_azimuth(self.pose.azimuth + delta.x);
            self.pose.elevation = clamp_elevation(self.pose.elevation + delta.y);
            changed = true;
        }
        changed
    }

    /// Zoom by `notches` wheel detents (positive moves toward the target).
    pub fn wheel_update(&mut self, notches: f32) {
        self.pose.distance = apply_zoom(
            self.pose.distance,
            notches,
            self.settings.min_distance,
            self.settings.zoom_clamp,
        );
    }

    /// Apply one discrete key action.
    pub fn key_update(&mut self, action: CameraAction) {
        let step = self.settings.distance_step;
        let heading = self.pose.heading();
        // Left of the heading in the ground plane.
        let left = Vec3::new(-heading.y, heading.x, 0.0);

        match action {
            CameraAction::MoveForward => self.pose.target += heading * step,
            CameraAction::MoveBackward => self.pose.target -= heading * step,
            CameraAction::StrafeLeft => self.pose.target += left * step,
            CameraAction::StrafeRight => self.pose.target -= left * step,
            CameraAction::MoveUp => self.change_distance(step),
            CameraAction::MoveDown => self.change_distance(-step),
            CameraAction::RotateLeft => self.rotate(-self.settings.angle_step, 0.0),
            CameraAction::RotateRight => self.rotate(self.settings.angle_step, 0.0),
            CameraAction::RotateUp => self.rotate(0.0, self.settings.angle_step),
            CameraAction::RotateDown => self.rotate(0.0, -self.settings.angle_step),
            CameraAction::ResetCamera => self.reset(),
        }
    }

    fn change_distance(&mut self, delta: f32) {
        self.pose.distance =
            clamp_distance(self.pose.distance + delta, self.settings.min_distance);
    }

    fn rotate(&mut self, azimuth: f32, elevation: f32) {
        self.pose.azimuth = wrap_azimuth(self.pose.azimuth + azimuth);
        self.pose.elevation = clamp_elevation(self.pose.elevation + elevation);
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(CameraPose::default(), OrbitSettings::default())
    }
}

impl InputHandler for OrbitCamera {
    fn on_pointer_down(&mut self, point: Vec2) -> bool {
        self.begin_drag(point);
        false
    }

    fn on_pointer_move(&mut self, point: Vec2, buttons: HeldButtons) -> bool {
        self.drag_update(point, buttons)
    }

    fn on_pointer_up(&mut self) -> bool {
        self.end_drag();
        false
    }

    fn on_wheel(&mut self, notches: f32) -> bool {
        let before = self.pose.distance;
        self.wheel_update(notches);
        self.pose.distance != before
    }

    fn on_action(&mut self, action: CameraAction) -> bool {
        let before = self.pose;
        self.key_update(action);
        self.pose != before
    }
}

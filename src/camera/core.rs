use glam::{Mat4, Vec3};

use super::pose::CameraPose;
use crate::options::CameraOptions;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and the billboard
/// basis for point sprites.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Screen-right direction in world space.
    pub right: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Screen-up direction in world space.
    pub up: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl Camera {
    /// Camera looking at `pose` with the projection from `options`.
    #[must_use]
    pub fn new(pose: &CameraPose, options: &CameraOptions, aspect: f32) -> Self {
        let mut camera = Self {
            eye: Vec3::ZERO,
            target: Vec3::ZERO,
            up: Vec3::Z,
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };
        camera.set_pose(pose);
        camera
    }

    /// Move the camera to the eye, target and up of `pose`.
    pub fn set_pose(&mut self, pose: &CameraPose) {
        self.eye = pose.eye();
        self.target = pose.target;
        self.up = pose.up();
    }

    /// Build the combined view-projection matrix.
    pub fn build_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        let proj = Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
        proj * view
    }

    /// Unit vector pointing right on screen.
    pub fn right(&self) -> Vec3 {
        (self.target - self.eye).cross(self.up).normalize_or_zero()
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.0,
            right: [1.0, 0.0, 0.0],
            fovy: 60.0,
            up: [0.0, 0.0, 1.0],
            _pad: 0.0,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.build_matrix().to_cols_array_2d();
        self.position = camera.eye.to_array();
        self.aspect = camera.aspect;
        self.right = camera.right().to_array();
        self.fovy = camera.fovy;
        self.up = camera.up.to_array();
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec4;

    use super::*;

    fn project(camera: &Camera, point: Vec3) -> Vec3 {
        let clip = camera.build_matrix() * Vec4::from((point, 1.0));
        clip.truncate() / clip.w
    }

    #[test]
    fn target_projects_to_screen_center() {
        let pose = CameraPose {
            target: Vec3::new(1.0, -2.0, 0.5),
            distance: 5.0,
            elevation: 30.0,
            azimuth: 200.0,
        };
        let camera = Camera::new(&pose, &CameraOptions::default(), 1.5);
        let ndc = project(&camera, pose.target);
        assert!(ndc.x.abs() < 1e-4);
        assert!(ndc.y.abs() < 1e-4);
        assert!((0.0..1.0).contains(&ndc.z));
    }

    #[test]
    fn top_down_view_has_finite_matrix() {
        let pose = CameraPose {
            elevation: 90.0,
            ..CameraPose::default()
        };
        let camera = Camera::new(&pose, &CameraOptions::default(), 1.0);
        assert!(camera.build_matrix().is_finite());
        assert!((camera.right().length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn uniform_tracks_camera() {
        let pose = CameraPose::default();
        let camera = Camera::new(&pose, &CameraOptions::default(), 2.0);
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);
        assert_eq!(uniform.aspect, 2.0);
        assert_eq!(uniform.position, camera.eye.to_array());
        // Looking down -X with Z up puts screen-right along +Y.
        assert!((uniform.right[1] - 1.0).abs() < 1e-5);
    }

    #[test]
    fn uniform_layout_is_16_byte_aligned() {
        assert_eq!(size_of::<CameraUniform>() % 16, 0);
    }
}

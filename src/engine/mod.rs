//! Rendering engine tying the GPU, camera and point renderer together.

mod input;
mod options;
mod render;

use crate::camera::controller::CameraController;
use crate::camera::orbit::{OrbitCamera, OrbitSettings};
use crate::camera::pose::CameraPose;
use crate::cloud::PointCloud;
use crate::error::PointViewError;
use crate::gpu::render_context::{GpuSettings, RenderContext};
use crate::input::InputProcessor;
use crate::options::Options;
use crate::renderer::points::{point_instances, PointRenderer};
use crate::status;

/// The point cloud viewer engine.
///
/// Owns the GPU context, the orbit camera model and its GPU mirror, the
/// input processor and the point renderer. Hosts forward platform events
/// through [`PointViewEngine::handle_input`] and call
/// [`PointViewEngine::render`] when a redraw is due.
///
/// # Frame flow
///
/// Input updates the [`OrbitCamera`] pose, the pose is synced into the
/// [`CameraController`], and the next render uploads the camera uniform and
/// draws every point as a camera-facing disc.
pub struct PointViewEngine {
    /// Core wgpu device, queue, and surface.
    pub context: RenderContext,
    /// GPU camera uniform and bind group.
    pub camera_controller: CameraController,
    orbit: OrbitCamera,
    input: InputProcessor,
    points: PointRenderer,
    cloud: PointCloud,
    options: Options,
}

impl PointViewEngine {
    /// Initialize the GPU, sample the point cloud and build the pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`PointViewError`] if GPU initialization fails or the cloud
    /// options cannot be sampled.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        options: Options,
    ) -> Result<Self, PointViewError> {
        let cloud = PointCloud::from_options(&options.cloud)?;
        let context = RenderContext::new(
            window,
            size,
            GpuSettings::from(&options.display),
        )
        .await?;
        Ok(Self::init_with_context(context, options, cloud))
    }

    fn init_with_context(
        context: RenderContext,
        options: Options,
        cloud: PointCloud,
    ) -> Self {
        let settings = OrbitSettings::from(&options.controls);
        let orbit = OrbitCamera::new(
            options.camera.initial_pose(settings.min_distance),
            settings,
        );
        let camera_controller = CameraController::new(
            &context,
            &orbit.current_pose(),
            &options.camera,
        );
        let points = PointRenderer::new(
            &context,
            &camera_controller.layout,
            &point_instances(cloud.positions(), &options.display),
        );
        let input = InputProcessor::new(options.keybindings.clone());

        let (width, height) = context.size();
        log::info!("engine ready: {} points, {width}x{height}", cloud.len());

        Self {
            context,
            camera_controller,
            orbit,
            input,
            points,
            cloud,
            options,
        }
    }

    /// Snapshot of the camera pose.
    #[must_use]
    pub fn current_pose(&self) -> CameraPose {
        self.orbit.current_pose()
    }

    /// Two-line status label for the current pose.
    #[must_use]
    pub fn status_text(&self) -> String {
        status::status_label(&self.orbit.current_pose())
    }

    /// The sampled point cloud.
    #[must_use]
    pub fn cloud(&self) -> &PointCloud {
        &self.cloud
    }

    /// Reconfigure the surface, depth buffer and projection for a new window
    /// size. Zero-sized dimensions are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.context.resize(width, height) {
            self.camera_controller.resize(width, height);
        }
    }

    /// Push the orbit pose into the GPU camera.
    fn sync_camera(&mut self) {
        self.camera_controller.sync(&self.orbit.current_pose());
    }
}

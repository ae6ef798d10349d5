use wgpu::util::DeviceExt;

use super::core::{Camera, CameraUniform};
use super::pose::CameraPose;
use crate::gpu::render_context::RenderContext;
use crate::options::CameraOptions;

/// GPU side of the camera: the projection camera, its uniform and the bind
/// group shaders read it through.
///
/// The controller never decides where the camera is. It mirrors whatever
/// [`CameraPose`] the orbit model hands it via [`CameraController::sync`].
pub struct CameraController {
    /// Projection camera rebuilt from the latest pose.
    pub camera: Camera,
    /// CPU copy of the uniform last written to the GPU.
    pub uniform: CameraUniform,
    /// Uniform buffer bound at group 0.
    pub buffer: wgpu::Buffer,
    /// Layout of the camera bind group.
    pub layout: wgpu::BindGroupLayout,
    /// Bind group exposing [`CameraController::buffer`].
    pub bind_group: wgpu::BindGroup,
    dirty: bool,
}

impl CameraController {
    /// Create GPU resources for a camera looking at `pose`.
    pub fn new(
        context: &RenderContext,
        pose: &CameraPose,
        options: &CameraOptions,
    ) -> Self {
        let camera = Camera::new(pose, options, context.aspect());

        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);

        let buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX
                        | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            },
        );

        let bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    layout: &layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: buffer.as_entire_binding(),
                    }],
                    label: Some("Camera Bind Group"),
                });

        Self {
            camera,
            uniform,
            buffer,
            layout,
            bind_group,
            dirty: false,
        }
    }

    /// Point the camera at a new pose. The GPU copy is refreshed on the next
    /// [`CameraController::update_gpu`].
    pub fn sync(&mut self, pose: &CameraPose) {
        self.camera.set_pose(pose);
        self.dirty = true;
    }

    /// Apply projection settings from options.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.camera.fovy = options.fovy;
        self.camera.znear = options.znear;
        self.camera.zfar = options.zfar;
        self.dirty = true;
    }

    /// Upload the uniform if the camera changed since the last upload.
    pub fn update_gpu(&mut self, queue: &wgpu::Queue) {
        if !self.dirty {
            return;
        }
        self.uniform.update_view_proj(&self.camera);
        queue.write_buffer(
            &self.buffer,
            0,
            bytemuck::cast_slice(&[self.uniform]),
        );
        self.dirty = false;
    }

    /// Update the aspect ratio. Zero-sized dimensions are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.camera.aspect = width as f32 / height as f32;
        self.dirty = true;
    }
}

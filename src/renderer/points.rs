//! Point sprite renderer.
//!
//! Follows the impostor-pass pattern: one storage buffer of instances, one
//! bind group, one pipeline, and a `draw(0..6, 0..count)` call. The vertex
//! shader expands each instance into a camera-facing quad and the fragment
//! shader trims it to a disc.

use glam::Vec3;

use super::pipeline_util;
use crate::gpu::dynamic_buffer::TypedBuffer;
use crate::gpu::render_context::RenderContext;
use crate::options::DisplayOptions;

const VERTICES_PER_POINT: u32 = 6;

/// Per-instance data for one point sprite.
/// Must match the WGSL PointInstance struct layout.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointInstance {
    /// xyz = position, w = diameter in world units
    pub center: [f32; 4],
    /// RGBA color
    pub color: [f32; 4],
}

/// Build sprite instances for `positions` using the display settings.
#[must_use]
pub fn point_instances(
    positions: &[Vec3],
    display: &DisplayOptions,
) -> Vec<PointInstance> {
    let [r, g, b] = display.point_color;
    let size = display.point_size.max(0.0);
    positions
        .iter()
        .map(|p| PointInstance {
            center: [p.x, p.y, p.z, size],
            color: [r, g, b, 1.0],
        })
        .collect()
}

/// Draws the point cloud as instanced sprites.
pub struct PointRenderer {
    pipeline: wgpu::RenderPipeline,
    instance_buffer: TypedBuffer<PointInstance>,
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
}

impl PointRenderer {
    /// Create the pipeline and upload the initial instances.
    pub fn new(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
        instances: &[PointInstance],
    ) -> Self {
        let instance_buffer = TypedBuffer::new_with_data(
            &context.device,
            "Point Instance Buffer",
            instances,
            wgpu::BufferUsages::STORAGE,
        );
        let bind_group_layout =
            Self::create_bind_group_layout(&context.device);
        let bind_group = Self::create_bind_group(
            &context.device,
            &bind_group_layout,
            &instance_buffer,
        );
        let pipeline =
            Self::create_pipeline(context, &bind_group_layout, camera_layout);

        log::debug!("point renderer created with {} points", instances.len());

        Self {
            pipeline,
            instance_buffer,
            bind_group_layout,
            bind_group,
        }
    }

    fn create_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Point Instance Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Storage { read_only: true },
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        })
    }

    fn create_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        buffer: &TypedBuffer<PointInstance>,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.buffer().as_entire_binding(),
            }],
            label: Some("Point Instance Bind Group"),
        })
    }

    fn create_pipeline(
        context: &RenderContext,
        instance_layout: &wgpu::BindGroupLayout,
        camera_layout: &wgpu::BindGroupLayout,
    ) -> wgpu::RenderPipeline {
        let shader = context.device.create_shader_module(wgpu::include_wgsl!(
            "../../assets/shaders/points.wgsl"
        ));

        let pipeline_layout = context.device.create_pipeline_layout(
            &wgpu::PipelineLayoutDescriptor {
                label: Some("Point Pipeline Layout"),
                bind_group_layouts: &[instance_layout, camera_layout],
                push_constant_ranges: &[],
            },
        );

        context
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Point Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &pipeline_util::color_target(context.format()),
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState::default(),
                depth_stencil: Some(pipeline_util::depth_stencil_state()),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            })
    }

    /// Replace the uploaded instances. Recreates the bind group if the buffer
    /// was reallocated.
    pub fn write_instances(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        instances: &[PointInstance],
    ) {
        if self.instance_buffer.write(device, queue, instances) {
            self.bind_group = Self::create_bind_group(
                device,
                &self.bind_group_layout,
                &self.instance_buffer,
            );
        }
    }

    /// Number of points drawn per frame.
    pub fn point_count(&self) -> usize {
        self.instance_buffer.count()
    }

    /// Issue the draw call. The camera bind group goes in group 1.
    pub fn draw<'a>(
        &'a self,
        render_pass: &mut wgpu::RenderPass<'a>,
        camera_bind_group: &'a wgpu::BindGroup,
    ) {
        if self.instance_buffer.is_empty() {
            return;
        }
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_bind_group(1, camera_bind_group, &[]);
        render_pass.draw(
            0..VERTICES_PER_POINT,
            0..self.instance_buffer.count() as u32,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instances_carry_position_size_and_color() {
        let display = DisplayOptions {
            point_size: 0.1,
            point_color: [1.0, 0.5, 0.0],
            ..DisplayOptions::default()
        };
        let instances =
            point_instances(&[Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO], &display);
        assert_eq!(instances.len(), 2);
        assert_eq!(instances[0].center, [1.0, 2.0, 3.0, 0.1]);
        assert_eq!(instances[0].color, [1.0, 0.5, 0.0, 1.0]);
    }

    #[test]
    fn negative_point_size_is_clamped() {
        let display = DisplayOptions {
            point_size: -1.0,
            ..DisplayOptions::default()
        };
        let instances = point_instances(&[Vec3::ONE], &display);
        assert_eq!(instances[0].center[3], 0.0);
    }

    #[test]
    fn instance_layout_matches_shader() {
        assert_eq!(size_of::<PointInstance>(), 32);
    }

    #[test]
    fn point_shader_validates() {
        let source = include_str!("../../assets/shaders/points.wgsl");
        let module = naga::front::wgsl::parse_str(source).unwrap();
        let _info = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::empty(),
        )
        .validate(&module)
        .unwrap();
        assert!(module.entry_points.iter().any(|e| e.name == "vs_main"));
        assert!(module.entry_points.iter().any(|e| e.name == "fs_main"));
    }
}

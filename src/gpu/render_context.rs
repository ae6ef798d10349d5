use std::fmt;

use crate::options::DisplayOptions;
use crate::renderer::pipeline_util::DEPTH_FORMAT;

/// Why the GPU could not be brought up for a window.
#[derive(Debug)]
pub enum GpuInitError {
    /// The window handle could not back a wgpu surface.
    NoSurface(wgpu::CreateSurfaceError),
    /// No adapter can present to the surface.
    NoAdapter(wgpu::RequestAdapterError),
    /// The adapter refused to open a device.
    NoDevice(wgpu::RequestDeviceError),
    /// The adapter has no configuration for a surface of this size.
    SurfaceUnsupported {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
}

impl fmt::Display for GpuInitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSurface(e) => write!(f, "cannot render to window: {e}"),
            Self::NoAdapter(e) => write!(f, "no usable GPU: {e}"),
            Self::NoDevice(e) => write!(f, "cannot open GPU device: {e}"),
            Self::SurfaceUnsupported { width, height } => {
                write!(f, "GPU cannot present a {width}x{height} surface")
            }
        }
    }
}

impl std::error::Error for GpuInitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NoSurface(e) => Some(e),
            Self::NoAdapter(e) => Some(e),
            Self::NoDevice(e) => Some(e),
            Self::SurfaceUnsupported { .. } => None,
        }
    }
}

/// Adapter and presentation choices taken from [`DisplayOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpuSettings {
    /// Wait for vertical blank before presenting.
    pub vsync: bool,
    /// Prefer an integrated GPU over a discrete one.
    pub low_power: bool,
}

impl From<&DisplayOptions> for GpuSettings {
    fn from(display: &DisplayOptions) -> Self {
        Self {
            vsync: display.vsync,
            low_power: display.low_power_gpu,
        }
    }
}

impl GpuSettings {
    fn present_mode(self) -> wgpu::PresentMode {
        if self.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        }
    }

    fn power_preference(self) -> wgpu::PowerPreference {
        if self.low_power {
            wgpu::PowerPreference::LowPower
        } else {
            wgpu::PowerPreference::HighPerformance
        }
    }
}

/// One acquired swapchain image with its view and a fresh encoder.
pub struct Frame {
    texture: wgpu::SurfaceTexture,
    /// View of the swapchain image to draw into.
    pub view: wgpu::TextureView,
    /// Encoder the frame's passes are recorded on.
    pub encoder: wgpu::CommandEncoder,
}

/// The window surface with its device, queue and depth target.
///
/// The depth target always matches the surface size; [`RenderContext::resize`]
/// rebuilds both together.
pub struct RenderContext {
    /// The wgpu logical device.
    pub device: wgpu::Device,
    /// The wgpu command queue.
    pub queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,
}

impl RenderContext {
    /// Open a device that can present to `window` at `size`.
    ///
    /// # Errors
    ///
    /// Returns [`GpuInitError`] naming the step that failed.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        settings: GpuSettings,
    ) -> Result<Self, GpuInitError> {
        let (width, height) = surface_extent(size);
        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(window)
            .map_err(GpuInitError::NoSurface)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: settings.power_preference(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(GpuInitError::NoAdapter)?;
        let info = adapter.get_info();

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("pointview device"),
                ..Default::default()
            })
            .await
            .map_err(GpuInitError::NoDevice)?;

        let mut config = surface
            .get_default_config(&adapter, width, height)
            .ok_or(GpuInitError::SurfaceUnsupported { width, height })?;
        config.present_mode = settings.present_mode();
        surface.configure(&device, &config);

        log::info!(
            "using {} ({:?}), {:?} at {width}x{height}, {:?}",
            info.name,
            info.backend,
            config.format,
            config.present_mode
        );

        let depth_view = create_depth_view(&device, width, height);
        Ok(Self {
            device,
            queue,
            surface,
            config,
            depth_view,
        })
    }

    /// Color format of the swapchain.
    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Current surface size in pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    /// Width over height of the current surface.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.config.width as f32 / self.config.height as f32
    }

    /// Depth attachment sized to the surface.
    pub fn depth_view(&self) -> &wgpu::TextureView {
        &self.depth_view
    }

    /// Resize the surface and depth target. Returns `false` (and does
    /// nothing) for a zero-sized window.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.depth_view = create_depth_view(&self.device, width, height);
        true
    }

    /// Acquire the next swapchain image.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] when the surface is lost, outdated or
    /// timed out.
    pub fn begin_frame(&self) -> Result<Frame, wgpu::SurfaceError> {
        let texture = self.surface.get_current_texture()?;
        let view = texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let encoder =
            self.device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("frame encoder"),
                });
        Ok(Frame {
            texture,
            view,
            encoder,
        })
    }

    /// Submit the frame's commands and present it.
    pub fn finish_frame(&self, frame: Frame) {
        let Frame {
            texture, encoder, ..
        } = frame;
        let _ = self.queue.submit([encoder.finish()]);
        texture.present();
    }
}

/// Surface size with both sides at least one pixel.
fn surface_extent((width, height): (u32, u32)) -> (u32, u32) {
    (width.max(1), height.max(1))
}

fn create_depth_view(
    device: &wgpu::Device,
    width: u32,
    height: u32,
) -> wgpu::TextureView {
    device
        .create_texture(&wgpu::TextureDescriptor {
            label: Some("depth target"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        })
        .create_view(&wgpu::TextureViewDescriptor::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_follow_display_options() {
        let display = DisplayOptions {
            vsync: false,
            low_power_gpu: true,
            ..DisplayOptions::default()
        };
        let settings = GpuSettings::from(&display);
        assert_eq!(settings.present_mode(), wgpu::PresentMode::AutoNoVsync);
        assert_eq!(
            settings.power_preference(),
            wgpu::PowerPreference::LowPower
        );
    }

    #[test]
    fn default_display_uses_vsync_on_fast_gpu() {
        let settings = GpuSettings::from(&DisplayOptions::default());
        assert_eq!(settings.present_mode(), wgpu::PresentMode::AutoVsync);
        assert_eq!(
            settings.power_preference(),
            wgpu::PowerPreference::HighPerformance
        );
    }

    #[test]
    fn zero_sized_window_gets_a_one_pixel_surface() {
        assert_eq!(surface_extent((0, 0)), (1, 1));
        assert_eq!(surface_extent((640, 0)), (640, 1));
        assert_eq!(surface_extent((640, 480)), (640, 480));
    }

    #[test]
    fn unsupported_surface_names_the_size() {
        let err = GpuInitError::SurfaceUnsupported {
            width: 3,
            height: 4,
        };
        assert_eq!(err.to_string(), "GPU cannot present a 3x4 surface");
        assert!(std::error::Error::source(&err).is_none());
    }
}

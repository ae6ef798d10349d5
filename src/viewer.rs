//! Standalone point cloud window backed by winit.
//!
//! ```no_run
//! # use pointview::{Options, Viewer};
//! Viewer::builder()
//!     .with_options(Options::default())
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::{
    error::PointViewError, options::Options, status, InputEvent, MouseButton,
    PointViewEngine,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    options_file: Option<PathBuf>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with default options and the title "pointview".
    fn new() -> Self {
        Self {
            options: None,
            options_file: None,
            title: "pointview".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Options file re-read when [`RELOAD_KEY`] is pressed. The reloaded
    /// options replace the current ones wholesale.
    #[must_use]
    pub fn with_options_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.options_file = Some(path.into());
        self
    }

    /// Set the window title prefix. The camera status is appended to it.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            options_file: self.options_file,
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that displays a random point cloud.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    options_file: Option<PathBuf>,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`PointViewError`] if the event loop fails or the engine
    /// cannot be initialized.
    pub fn run(self) -> Result<(), PointViewError> {
        let event_loop = EventLoop::new()
            .map_err(|e| PointViewError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            options: Some(self.options),
            options_file: self.options_file,
            title: self.title,
            shown_title: String::new(),
            init_error: None,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| PointViewError::Viewer(e.to_string()))?;

        app.init_error.map_or(Ok(()), Err)
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Key that re-reads the options file given to
/// [`ViewerBuilder::with_options_file`].
pub const RELOAD_KEY: KeyCode = KeyCode::F5;

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<PointViewEngine>,
    /// Options waiting for the engine to be created in `resumed`.
    options: Option<Options>,
    options_file: Option<PathBuf>,
    title: String,
    /// Title currently shown, to skip redundant updates.
    shown_title: String,
    init_error: Option<PointViewError>,
}

/// Compute the wgpu surface size: always the full window dimensions.
fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

/// Convert a wheel delta to notches. Positive values zoom in.
fn scroll_notches(delta: MouseScrollDelta, pixels_per_notch: f32) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => y,
        MouseScrollDelta::PixelDelta(pos) => {
            if pixels_per_notch > 0.0 {
                pos.y as f32 / pixels_per_notch
            } else {
                0.0
            }
        }
    }
}

impl ViewerApp {
    /// Forward an input event; redraw and refresh the title on change.
    fn dispatch(&mut self, event: InputEvent) {
        let Some(engine) = &mut self.engine else {
            return;
        };
        if engine.handle_input(event) {
            self.refresh_status();
            if let Some(w) = &self.window {
                w.request_redraw();
            }
        }
    }

    /// Show the camera status in the window title.
    fn refresh_status(&mut self) {
        let (Some(window), Some(engine)) = (&self.window, &self.engine) else {
            return;
        };
        let title = status::window_title(&self.title, &engine.current_pose());
        if title != self.shown_title {
            window.set_title(&title);
            log::debug!("{}", engine.status_text());
            self.shown_title = title;
        }
    }

    /// Re-read the options file and apply it. A bad file is logged and the
    /// running options are kept.
    fn reload_options(&mut self) {
        let (Some(path), Some(engine)) = (&self.options_file, &mut self.engine)
        else {
            return;
        };
        match Options::load(path).and_then(|o| engine.set_options(o)) {
            Ok(()) => {
                log::info!("reloaded options from {}", path.display());
                self.refresh_status();
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }
            Err(e) => log::warn!("options not reloaded: {e}"),
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: PointViewError) {
        log::error!("{error}");
        self.init_error = Some(error);
        event_loop.exit();
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let Some(options) = self.options.take() else {
            return;
        };

        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            let logical_w = (mon_size.width as f64 / scale * 0.75) as u32;
            let logical_h = (mon_size.height as f64 / scale * 0.75) as u32;
            Window::default_attributes()
                .with_title(&self.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    logical_w, logical_h,
                ))
        } else {
            Window::default_attributes().with_title(&self.title)
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.fail(event_loop, PointViewError::Viewer(e.to_string()));
                return;
            }
        };

        let size = viewport_size(window.inner_size());
        let engine = match pollster::block_on(PointViewEngine::new(
            window.clone(),
            size,
            options,
        )) {
            Ok(e) => e,
            Err(e) => {
                self.fail(event_loop, e);
                return;
            }
        };

        window.request_redraw();
        self.window = Some(window);
        self.engine = Some(engine);
        self.refresh_status();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        // Guard: both window and engine must be initialised.
        if self.window.is_none() || self.engine.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(event_size) => {
                let (vp_w, vp_h) = viewport_size(event_size);
                if let Some(engine) = &mut self.engine {
                    engine.resize(vp_w, vp_h);
                }
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => {
                let (Some(window), Some(engine)) =
                    (&self.window, &mut self.engine)
                else {
                    return;
                };
                match engine.render() {
                    Ok(()) => {}
                    Err(
                        wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost,
                    ) => {
                        let (vp_w, vp_h) = viewport_size(window.inner_size());
                        engine.resize(vp_w, vp_h);
                        window.request_redraw();
                    }
                    Err(e) => {
                        log::error!("render error: {e:?}");
                    }
                }
            }

            WindowEvent::Focused(false) => {
                if let Some(engine) = &mut self.engine {
                    engine.release_input();
                }
            }

            WindowEvent::MouseInput { button, state, .. } => {
                let Some(button) = MouseButton::from_winit(button) else {
                    return;
                };
                self.dispatch(InputEvent::MouseButton {
                    button,
                    pressed: state == ElementState::Pressed,
                });
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.dispatch(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let pixels_per_notch = self
                    .engine
                    .as_ref()
                    .map_or(120.0, |e| e.options().controls.pixels_per_notch);
                self.dispatch(InputEvent::Scroll {
                    notches: scroll_notches(delta, pixels_per_notch),
                });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                if code == RELOAD_KEY && self.options_file.is_some() {
                    self.reload_options();
                    return;
                }
                self.dispatch(InputEvent::Key {
                    code: format!("{code:?}"),
                });
            }

            _ => (),
        }
    }
}

#[cfg(test)]
mod tests {
    use winit::dpi::{PhysicalPosition, PhysicalSize};

    use super::*;

    #[test]
    fn line_delta_is_one_notch_per_line() {
        let notches =
            scroll_notches(MouseScrollDelta::LineDelta(0.0, -2.0), 120.0);
        assert_eq!(notches, -2.0);
    }

    #[test]
    fn pixel_delta_is_scaled_by_notch_size() {
        let delta = MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 240.0));
        assert_eq!(scroll_notches(delta, 120.0), 2.0);
        assert_eq!(scroll_notches(delta, 0.0), 0.0);
    }

    #[test]
    fn viewport_never_collapses_to_zero() {
        assert_eq!(viewport_size(PhysicalSize::new(0, 0)), (1, 1));
        assert_eq!(viewport_size(PhysicalSize::new(800, 600)), (800, 600));
    }

    #[test]
    fn builder_defaults() {
        let viewer = Viewer::builder().build();
        assert_eq!(viewer.title, "pointview");
        assert_eq!(viewer.options, Options::default());

        let viewer = Viewer::builder().with_title("cloud").build();
        assert_eq!(viewer.title, "cloud");
        assert!(viewer.options_file.is_none());
    }

    #[test]
    fn options_file_is_carried_to_the_viewer() {
        let viewer =
            Viewer::builder().with_options_file("presets/close_up.toml").build();
        assert_eq!(
            viewer.options_file,
            Some(PathBuf::from("presets/close_up.toml"))
        );
    }

    #[test]
    fn reload_key_is_not_a_default_binding() {
        let name = format!("{RELOAD_KEY:?}");
        assert_eq!(name, "F5");
        assert!(Options::default().keybindings.lookup(&name).is_none());
    }
}

//! Standalone window backed by winit.
//!
//! ```no_run
//! # use folio::Viewer;
//! Viewer::builder()
//!     .with_title("folio")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    engine::SceneEngine,
    error::FolioError,
    input::{InputEvent, MouseButton},
    options::Options,
};

/// Pixels of trackpad scroll that count as one wheel step.
const PIXELS_PER_SCROLL_STEP: f64 = 100.0;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "folio", default
    /// options).
    fn new() -> Self {
        Self {
            options: None,
            title: "folio".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
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
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that displays the portfolio scene.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
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
    /// Returns [`FolioError::Viewer`] if the event loop cannot be created
    /// or exits abnormally.
    pub fn run(self) -> Result<(), FolioError> {
        let event_loop =
            EventLoop::new().map_err(|e| FolioError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            options: Some(self.options),
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| FolioError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<SceneEngine>,
    options: Option<Options>,
    title: String,
}

/// Translate a winit event the scene cares about.
fn to_input_event(event: &WindowEvent, scale_factor: f64) -> Option<InputEvent> {
    match event {
        WindowEvent::MouseInput { button, state, .. } => Some(InputEvent::MouseButton {
            button: MouseButton::from(*button),
            pressed: *state == ElementState::Pressed,
        }),
        WindowEvent::CursorMoved { position, .. } => {
            let logical = position.to_logical::<f32>(scale_factor);
            Some(InputEvent::CursorMoved {
                x: logical.x,
                y: logical.y,
            })
        }
        WindowEvent::MouseWheel { delta, .. } => {
            #[allow(clippy::cast_possible_truncation)]
            let delta = match delta {
                MouseScrollDelta::LineDelta(_, y) => *y,
                MouseScrollDelta::PixelDelta(pos) => {
                    (pos.y / PIXELS_PER_SCROLL_STEP) as f32
                }
            };
            Some(InputEvent::Scroll { delta })
        }
        WindowEvent::ModifiersChanged(modifiers) => Some(InputEvent::ModifiersChanged {
            shift: modifiers.state().shift_key(),
        }),
        WindowEvent::KeyboardInput { event, .. } => {
            if event.state != ElementState::Pressed || event.repeat {
                return None;
            }
            let winit::keyboard::PhysicalKey::Code(code) = event.physical_key else {
                return None;
            };
            Some(InputEvent::Key {
                code: format!("{code:?}"),
            })
        }
        _ => None,
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            #[allow(clippy::cast_possible_truncation)]
            let logical_w = (f64::from(mon_size.width) / scale * 0.75) as u32;
            #[allow(clippy::cast_possible_truncation)]
            let logical_h = (f64::from(mon_size.height) / scale * 0.75) as u32;
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
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let options = self.options.take().unwrap_or_default();
        let engine = match pollster::block_on(SceneEngine::new(Arc::clone(&window), options)) {
            Ok(e) => e,
            Err(e) => {
                log::error!("Failed to initialize engine: {e}");
                event_loop.exit();
                return;
            }
        };

        window.request_redraw();
        self.window = Some(window);
        self.engine = Some(engine);
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
        let (Some(window), Some(engine)) = (&self.window, &mut self.engine) else {
            return;
        };

        let consumed = engine.overlay_event(window, &event);

        match event {
            WindowEvent::Resized(size) => {
                engine.resize(size.width, size.height, window.scale_factor());
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                let size = window.inner_size();
                engine.resize(size.width, size.height, scale_factor);
            }

            WindowEvent::RedrawRequested => {
                engine.render_frame(window);
                window.request_redraw();
            }

            _ => {
                // Modifier and release events still reach the scene so a
                // drag that ends over the panel does not stick.
                let passthrough = matches!(
                    event,
                    WindowEvent::ModifiersChanged(_)
                        | WindowEvent::MouseInput {
                            state: ElementState::Released,
                            ..
                        }
                );
                if consumed && !passthrough {
                    return;
                }
                if let Some(input) = to_input_event(&event, window.scale_factor()) {
                    let _ = engine.handle_input(input);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let viewer = Viewer::builder().build();
        assert_eq!(viewer.title, "folio");
        assert_eq!(viewer.options, Options::default());
    }

    #[test]
    fn builder_overrides() {
        let mut options = Options::default();
        options.layout.show_floor = true;
        let viewer = Viewer::builder()
            .with_title("portfolio")
            .with_options(options.clone())
            .build();
        assert_eq!(viewer.title, "portfolio");
        assert_eq!(viewer.options, options);
    }
}

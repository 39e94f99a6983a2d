//! The per-window engine: frame state plus the GPU objects that draw it.

pub mod command;
pub mod state;

use std::sync::Arc;

use winit::window::Window;

pub use self::command::SceneCommand;
pub use self::state::SceneState;
use crate::error::FolioError;
use crate::gpu::render_context::RenderContext;
use crate::gui::{DebugOverlay, DebugPanel};
use crate::input::InputEvent;
use crate::options::Options;
use crate::renderer::SceneRenderer;

/// The core engine for the portfolio scene.
///
/// Owns the one [`Scene`](crate::scene::Scene), orbit camera and renderer
/// for a window.
///
/// # Frame loop
///
/// Call [`render_frame`](Self::render_frame) on every redraw. It ticks the
/// clock, drains finished asset loads, advances the timelines and the orbit
/// damping, applies panel edits, then draws the scene and the debug overlay
/// and presents. Call [`resize`](Self::resize) when the window size or scale
/// factor changes. Input is forwarded via
/// [`handle_input`](Self::handle_input).
pub struct SceneEngine {
    /// Core wgpu device, queue, and surface.
    pub context: RenderContext,
    /// Scene, camera, timelines and options.
    pub state: SceneState,
    renderer: SceneRenderer,
    overlay: DebugOverlay,
}

impl SceneEngine {
    /// Engine drawing into `window`.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Gpu`] if the surface, adapter or device cannot
    /// be created.
    pub async fn new(window: Arc<Window>, options: Options) -> Result<Self, FolioError> {
        let physical = window.inner_size();
        let scale_factor = window.scale_factor();
        let logical = physical.to_logical::<f64>(scale_factor);

        let state = SceneState::new(options, logical.width, logical.height, scale_factor);
        let context = RenderContext::new(Arc::clone(&window), state.render_size()).await?;
        let renderer = SceneRenderer::new(&context);
        let mut panel = DebugPanel::for_options();
        panel.set_visible(state.debug_panel_visible());
        let overlay = DebugOverlay::new(&window, &context, panel);

        Ok(Self {
            context,
            state,
            renderer,
            overlay,
        })
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        self.state.options()
    }

    /// Perform one command.
    pub fn execute(&mut self, command: SceneCommand) {
        self.state.execute(command);
    }

    /// Process a platform-agnostic input event.
    ///
    /// ```ignore
    /// engine.handle_input(InputEvent::CursorMoved { x, y });
    /// engine.handle_input(InputEvent::Scroll { delta: 1.0 });
    /// ```
    pub fn handle_input(&mut self, event: InputEvent) -> Option<SceneCommand> {
        self.state.handle_input(event)
    }

    /// Offer a raw window event to the overlay first. Returns `true` when
    /// the overlay consumed it.
    pub fn overlay_event(
        &mut self,
        window: &Window,
        event: &winit::event::WindowEvent,
    ) -> bool {
        self.overlay.on_window_event(window, event)
    }

    /// Resize to a window of `width` x `height` physical pixels at
    /// `scale_factor`.
    pub fn resize(&mut self, width: u32, height: u32, scale_factor: f64) {
        if width == 0 || height == 0 {
            return;
        }
        self.state.resize(
            f64::from(width) / scale_factor,
            f64::from(height) / scale_factor,
            scale_factor,
        );
        let (w, h) = self.state.render_size();
        self.context.resize(w, h);
        self.renderer.resize(&self.context);
    }

    /// Run one frame and present it.
    ///
    /// Surface loss reconfigures the surface and skips the frame; other
    /// surface errors are logged and skip the frame.
    pub fn render_frame(&mut self, window: &Window) {
        let tick = self.state.tick();

        for (id, data) in self.state.poll_assets() {
            self.renderer.upload_texture(&self.context, id, &data);
        }

        self.state.advance(tick.delta);

        let frame = match self.context.get_next_frame() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("surface lost, reconfiguring");
                self.context.reconfigure();
                return;
            }
            Err(e) => {
                log::error!("dropping frame: {e}");
                return;
            }
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.renderer
            .sync(&self.context, &self.state.scene, &self.state.controller.camera);
        let mut encoder = self.context.create_encoder();
        self.renderer.render(
            &mut encoder,
            &view,
            &self.state.scene,
            self.state.options().display.clear_color,
        );

        self.overlay
            .panel_mut()
            .set_visible(self.state.debug_panel_visible());
        let values = self.state.option_values();
        let (actions, overlay_buffers) = self.overlay.paint(
            window,
            &self.context,
            &mut encoder,
            &view,
            self.state.viewport.pixel_ratio() as f32,
            &values,
        );
        self.state.queue_ui_actions(actions);

        self.context
            .queue
            .submit(overlay_buffers.into_iter().chain(std::iter::once(encoder.finish())));
        frame.present();
    }
}

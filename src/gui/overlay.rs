//! egui integration: winit input, per-frame UI run, and the overlay pass.

use winit::window::Window;

use super::panel::{DebugPanel, UiAction};
use crate::gpu::render_context::RenderContext;

/// Owns the egui context, its winit state and its wgpu renderer.
pub struct DebugOverlay {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
    panel: DebugPanel,
}

impl DebugOverlay {
    /// Create the overlay for `window`, drawing into the context's surface
    /// format.
    pub fn new(window: &Window, context: &RenderContext, panel: DebugPanel) -> Self {
        let ctx = egui::Context::default();
        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let renderer = egui_wgpu::Renderer::new(
            &context.device,
            context.format(),
            egui_wgpu::RendererOptions::default(),
        );
        Self {
            ctx,
            state,
            renderer,
            panel,
        }
    }

    /// Feed a window event to egui. Returns `true` when egui consumed it
    /// and the scene should not see it.
    pub fn on_window_event(
        &mut self,
        window: &Window,
        event: &winit::event::WindowEvent,
    ) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    /// The panel definition.
    pub fn panel(&self) -> &DebugPanel {
        &self.panel
    }

    /// Mutable panel access, for visibility toggles.
    pub fn panel_mut(&mut self) -> &mut DebugPanel {
        &mut self.panel
    }

    /// Run the UI against `values` and record its pass over `target`.
    ///
    /// `pixel_ratio` is the ratio the surface was sized with, which may be
    /// lower than the window's scale factor. Returns the panel's edits and
    /// any command buffers egui needs submitted before `encoder`.
    pub fn paint(
        &mut self,
        window: &Window,
        context: &RenderContext,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
        pixel_ratio: f32,
        values: &serde_json::Value,
    ) -> (Vec<UiAction>, Vec<wgpu::CommandBuffer>) {
        let raw_input = self.state.take_egui_input(window);
        let mut actions = Vec::new();
        let panel = &self.panel;
        let full_output = self.ctx.run(raw_input, |ctx| {
            actions = panel.show(ctx, values);
        });
        self.state
            .handle_platform_output(window, full_output.platform_output);

        let tris = self.ctx.tessellate(full_output.shapes, pixel_ratio);
        for (id, image_delta) in &full_output.textures_delta.set {
            self.renderer.update_texture(
                &context.device,
                &context.queue,
                *id,
                image_delta,
            );
        }

        let (width, height) = context.size();
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [width, height],
            pixels_per_point: pixel_ratio,
        };
        let command_buffers = self.renderer.update_buffers(
            &context.device,
            &context.queue,
            encoder,
            &tris,
            &screen_descriptor,
        );

        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("egui Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });
            self.renderer.render(
                &mut render_pass.forget_lifetime(),
                &tris,
                &screen_descriptor,
            );
        }

        for id in &full_output.textures_delta.free {
            self.renderer.free_texture(id);
        }
        (actions, command_buffers)
    }
}

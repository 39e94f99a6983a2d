//! Full-screen background image pass.

use crate::gpu::render_context::RenderContext;
use crate::gpu::texture::GpuTexture;
use crate::renderer::pipeline_util;

const BACKGROUND_SHADER: &str =
    include_str!("../../assets/shaders/background.wgsl");

/// Draws a texture stretched over the whole viewport, behind everything.
pub(crate) struct BackgroundPass {
    pipeline: wgpu::RenderPipeline,
}

impl BackgroundPass {
    pub fn new(context: &RenderContext, texture_layout: &wgpu::BindGroupLayout) -> Self {
        let shader = pipeline_util::shader_module(
            &context.device,
            "Background Shader",
            BACKGROUND_SHADER,
        );
        let layout = context.device.create_pipeline_layout(
            &wgpu::PipelineLayoutDescriptor {
                label: Some("Background Pipeline Layout"),
                bind_group_layouts: &[texture_layout],
                push_constant_ranges: &[],
            },
        );
        let pipeline = context
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Background Pipeline"),
                layout: Some(&layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &pipeline_util::surface_fragment_targets(
                        context.format(),
                    ),
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState::default(),
                depth_stencil: Some(pipeline_util::depth_ignored_state()),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            });
        Self { pipeline }
    }

    /// Draw `texture` over the whole target.
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>, texture: &GpuTexture) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &texture.bind_group, &[]);
        render_pass.draw(0..3, 0..1);
    }
}

//! Mesh pipelines.
//!
//! One shader serves every scene mesh; pipelines differ only in topology
//! and face culling. Single-sided materials cull back faces, double-sided
//! ones draw both and flip the normal in the shader.

use crate::{gpu::render_context::RenderContext, renderer::pipeline_util};
use crate::scene::{Material, MeshVertex, Side};

const MESH_SHADER: &str = include_str!("../../assets/shaders/mesh.wgsl");

/// Create a standard mesh render pipeline.
pub(crate) fn create_mesh_pipeline(
    context: &RenderContext,
    label: &str,
    shader: &wgpu::ShaderModule,
    topology: wgpu::PrimitiveTopology,
    cull_mode: Option<wgpu::Face>,
    bind_group_layouts: &[&wgpu::BindGroupLayout],
) -> wgpu::RenderPipeline {
    let pipeline_layout = context.device.create_pipeline_layout(
        &wgpu::PipelineLayoutDescriptor {
            label: Some(&format!("{label} Layout")),
            bind_group_layouts,
            push_constant_ranges: &[],
        },
    );

    context
        .device
        .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                buffers: &[MeshVertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                targets: &pipeline_util::surface_fragment_targets(
                    context.format(),
                ),
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode,
                ..Default::default()
            },
            depth_stencil: Some(pipeline_util::depth_stencil_state()),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
}

/// Which mesh pipeline a material draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MeshPipelineKind {
    /// Back faces culled.
    SingleSided,
    /// Both faces drawn.
    DoubleSided,
}

impl MeshPipelineKind {
    pub(crate) fn for_material(material: &Material) -> Self {
        match material {
            Material::Standard {
                side: Side::Double, ..
            } => Self::DoubleSided,
            _ => Self::SingleSided,
        }
    }
}

/// The triangle pipelines plus the line pipeline for the light helper.
pub(crate) struct MeshPipelines {
    single_sided: wgpu::RenderPipeline,
    double_sided: wgpu::RenderPipeline,
    /// Line-list pipeline.
    pub lines: wgpu::RenderPipeline,
}

impl MeshPipelines {
    /// Build all mesh pipelines against the shared bind group layouts
    /// (camera, lighting, object, texture).
    pub fn new(
        context: &RenderContext,
        bind_group_layouts: &[&wgpu::BindGroupLayout],
    ) -> Self {
        let shader =
            pipeline_util::shader_module(&context.device, "Mesh Shader", MESH_SHADER);
        Self {
            single_sided: create_mesh_pipeline(
                context,
                "Mesh Pipeline",
                &shader,
                wgpu::PrimitiveTopology::TriangleList,
                Some(wgpu::Face::Back),
                bind_group_layouts,
            ),
            double_sided: create_mesh_pipeline(
                context,
                "Double-Sided Mesh Pipeline",
                &shader,
                wgpu::PrimitiveTopology::TriangleList,
                None,
                bind_group_layouts,
            ),
            lines: create_mesh_pipeline(
                context,
                "Line Pipeline",
                &shader,
                wgpu::PrimitiveTopology::LineList,
                None,
                bind_group_layouts,
            ),
        }
    }

    /// Pipeline for a triangle mesh of the given kind.
    pub fn triangles(&self, kind: MeshPipelineKind) -> &wgpu::RenderPipeline {
        match kind {
            MeshPipelineKind::SingleSided => &self.single_sided,
            MeshPipelineKind::DoubleSided => &self.double_sided,
        }
    }
}

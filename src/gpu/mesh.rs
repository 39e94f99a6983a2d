//! Per-object GPU data: vertex/index buffers and the object uniform.

use glam::Mat4;
use wgpu::util::DeviceExt;

use crate::scene::{Material, MeshData, SceneObject, Side};

/// Shading flags, packed into `ObjectUniform::flags.x`.
pub const FLAG_LIT: u32 = 1;
/// Back faces shade with the flipped normal.
pub const FLAG_DOUBLE_SIDED: u32 = 1 << 1;

/// Per-object uniform.
/// NOTE: Must match WGSL struct layout exactly (160 bytes)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    /// Model matrix.
    pub model: [[f32; 4]; 4],
    /// Inverse-transpose of the model matrix, for normals.
    pub normal: [[f32; 4]; 4],
    /// Base color, alpha 1.
    pub color: [f32; 4],
    /// `x` holds `FLAG_*` bits; the rest is padding.
    pub flags: [u32; 4],
}

impl ObjectUniform {
    /// Uniform for an arbitrary transform and material.
    #[must_use]
    pub fn new(model: Mat4, material: &Material) -> Self {
        let (color, flags) = match *material {
            Material::Standard { color, side, .. } => {
                let mut flags = FLAG_LIT;
                if side == Side::Double {
                    flags |= FLAG_DOUBLE_SIDED;
                }
                (color, flags)
            }
            Material::Basic { color } => (color, 0),
        };
        Self {
            model: model.to_cols_array_2d(),
            normal: model.inverse().transpose().to_cols_array_2d(),
            color: color.to_rgba(),
            flags: [flags, 0, 0, 0],
        }
    }

    /// Uniform for a scene object's current transform.
    #[must_use]
    pub fn for_object(object: &SceneObject) -> Self {
        Self::new(object.transform.matrix(), &object.material)
    }
}

/// Vertex and index buffers for one mesh.
pub struct GpuMesh {
    /// Vertex buffer of `MeshVertex`.
    pub vertex_buffer: wgpu::Buffer,
    /// `u32` index buffer.
    pub index_buffer: wgpu::Buffer,
    /// Number of indices to draw.
    pub index_count: u32,
}

impl GpuMesh {
    /// Upload `mesh`. Returns `None` for an empty mesh.
    pub fn upload(device: &wgpu::Device, label: &str, mesh: &MeshData) -> Option<Self> {
        if mesh.indices.is_empty() {
            return None;
        }
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Some(Self {
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
        })
    }

    /// Bind the buffers and draw. Caller must set pipeline and bind groups.
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(
            self.index_buffer.slice(..),
            wgpu::IndexFormat::Uint32,
        );
        render_pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

//! Single-binding uniform buffers.

use wgpu::util::DeviceExt;

/// Layout with one uniform buffer at binding 0.
pub fn uniform_layout(
    device: &wgpu::Device,
    label: &str,
    visibility: wgpu::ShaderStages,
) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    })
}

/// A `Pod` value mirrored in a uniform buffer, with its bind group.
pub struct UniformBinding<T> {
    /// CPU copy of the last written value.
    pub value: T,
    /// The GPU buffer.
    pub buffer: wgpu::Buffer,
    /// Bind group exposing the buffer at binding 0.
    pub bind_group: wgpu::BindGroup,
}

impl<T: bytemuck::Pod> UniformBinding<T> {
    /// Create the buffer and a bind group against an existing `layout`.
    pub fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        label: &str,
        value: T,
    ) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::bytes_of(&value),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });
        Self {
            value,
            buffer,
            bind_group,
        }
    }

    /// Replace the value and upload it.
    pub fn write(&mut self, queue: &wgpu::Queue, value: T) {
        self.value = value;
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(&self.value));
    }
}

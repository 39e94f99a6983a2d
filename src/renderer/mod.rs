//! Scene rendering.
//!
//! `SceneRenderer` mirrors the scene's objects on the GPU by index. Objects
//! are never removed, so syncing only uploads the tail it has not seen and
//! refreshes per-object uniforms whose transform changed.

pub(crate) mod background;
pub(crate) mod mesh_pass;
pub(crate) mod pipeline_util;

use glam::Mat4;
use rustc_hash::FxHashMap;
use wgpu::util::DeviceExt;

use self::background::BackgroundPass;
use self::mesh_pass::{MeshPipelineKind, MeshPipelines};
use crate::assets::TextureData;
use crate::camera::core::{Camera, CameraUniform};
use crate::gpu::lighting::LightingUniform;
use crate::gpu::mesh::{GpuMesh, ObjectUniform};
use crate::gpu::render_context::RenderContext;
use crate::gpu::texture::{self, DepthTexture, GpuTexture};
use crate::gpu::uniform::{uniform_layout, UniformBinding};
use crate::scene::{Material, MeshVertex, Scene, SceneObject, TextureId};

/// Vertices in the light helper's line list.
const HELPER_VERTEX_COUNT: usize = 10;

/// One uploaded scene object.
struct GpuObject {
    mesh: GpuMesh,
    uniform: UniformBinding<ObjectUniform>,
    kind: MeshPipelineKind,
}

/// Line list for the directional light helper, rewritten every frame.
struct HelperLines {
    vertex_buffer: wgpu::Buffer,
    uniform: UniformBinding<ObjectUniform>,
}

/// Draws the background, every visible object and the light helper.
pub struct SceneRenderer {
    camera: UniformBinding<CameraUniform>,
    lighting: UniformBinding<LightingUniform>,
    object_layout: wgpu::BindGroupLayout,
    texture_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    white: GpuTexture,
    textures: FxHashMap<TextureId, GpuTexture>,
    objects: Vec<Option<GpuObject>>,
    helper: HelperLines,
    pipelines: MeshPipelines,
    background: BackgroundPass,
    depth: DepthTexture,
}

impl SceneRenderer {
    /// Create pipelines and shared bindings for the context's surface.
    pub fn new(context: &RenderContext) -> Self {
        let device = &context.device;
        let camera_layout = uniform_layout(
            device,
            "Camera Bind Group Layout",
            wgpu::ShaderStages::VERTEX_FRAGMENT,
        );
        let lighting_layout = uniform_layout(
            device,
            "Lighting Bind Group Layout",
            wgpu::ShaderStages::FRAGMENT,
        );
        let object_layout = uniform_layout(
            device,
            "Object Bind Group Layout",
            wgpu::ShaderStages::VERTEX_FRAGMENT,
        );
        let texture_layout = texture::texture_layout(device);
        let sampler = texture::linear_sampler(device);

        let camera =
            UniformBinding::new(device, &camera_layout, "Camera Buffer", CameraUniform::new());
        let lighting = UniformBinding::new(
            device,
            &lighting_layout,
            "Lighting Buffer",
            LightingUniform::default(),
        );
        let white = GpuTexture::upload(
            device,
            &context.queue,
            &texture_layout,
            &sampler,
            "White Texture",
            &TextureData::solid([255; 4]),
        );

        let helper = HelperLines {
            vertex_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Light Helper Vertices"),
                contents: bytemuck::cast_slice(
                    &[MeshVertex::point(glam::Vec3::ZERO); HELPER_VERTEX_COUNT],
                ),
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            }),
            uniform: UniformBinding::new(
                device,
                &object_layout,
                "Light Helper Uniform",
                ObjectUniform::new(Mat4::IDENTITY, &Material::Basic {
                    color: crate::scene::Color::WHITE,
                }),
            ),
        };

        let pipelines = MeshPipelines::new(
            context,
            &[&camera_layout, &lighting_layout, &object_layout, &texture_layout],
        );
        let background = BackgroundPass::new(context, &texture_layout);
        let (width, height) = context.size();

        Self {
            camera,
            lighting,
            object_layout,
            texture_layout,
            sampler,
            white,
            textures: FxHashMap::default(),
            objects: Vec::new(),
            helper,
            pipelines,
            background,
            depth: DepthTexture::new(device, width, height),
        }
    }

    /// Recreate the depth buffer to match the surface.
    pub fn resize(&mut self, context: &RenderContext) {
        let (width, height) = context.size();
        if self.depth.size() != (width, height) {
            self.depth = DepthTexture::new(&context.device, width, height);
        }
    }

    /// Make a decoded image resident in slot `id`.
    pub fn upload_texture(
        &mut self,
        context: &RenderContext,
        id: TextureId,
        data: &TextureData,
    ) {
        let texture = GpuTexture::upload(
            &context.device,
            &context.queue,
            &self.texture_layout,
            &self.sampler,
            "Scene Texture",
            data,
        );
        let _ = self.textures.insert(id, texture);
    }

    fn upload_object(&self, device: &wgpu::Device, object: &SceneObject) -> Option<GpuObject> {
        let mesh = GpuMesh::upload(device, &object.name, &object.mesh)?;
        let uniform = UniformBinding::new(
            device,
            &self.object_layout,
            &object.name,
            ObjectUniform::for_object(object),
        );
        Some(GpuObject {
            mesh,
            uniform,
            kind: MeshPipelineKind::for_material(&object.material),
        })
    }

    /// Upload new objects and refresh the camera, lights, transforms and
    /// light helper from the current frame state.
    pub fn sync(&mut self, context: &RenderContext, scene: &Scene, camera: &Camera) {
        let known = self.objects.len();
        for object in scene.objects().iter().skip(known) {
            log::debug!("uploading {}", object.name);
            let gpu = self.upload_object(&context.device, object);
            self.objects.push(gpu);
        }

        for (object, gpu) in scene.objects().iter().zip(&mut self.objects) {
            let Some(gpu) = gpu else { continue };
            let uniform = ObjectUniform::for_object(object);
            if uniform != gpu.uniform.value {
                gpu.uniform.write(&context.queue, uniform);
            }
        }

        let mut camera_uniform = self.camera.value;
        camera_uniform.update_view_proj(camera);
        self.camera.write(&context.queue, camera_uniform);

        let lighting = LightingUniform::from_rig(&scene.lights);
        if lighting != self.lighting.value {
            self.lighting.write(&context.queue, lighting);
        }

        let light = &scene.lights.directional;
        let vertices = light
            .helper_segments(scene.lights.helper_size)
            .map(MeshVertex::point);
        context.queue.write_buffer(
            &self.helper.vertex_buffer,
            0,
            bytemuck::cast_slice(&vertices),
        );
        let helper = ObjectUniform::new(Mat4::IDENTITY, &Material::Basic {
            color: light.color,
        });
        if helper != self.helper.uniform.value {
            self.helper.uniform.write(&context.queue, helper);
        }
    }

    /// Record the scene pass into `encoder`, clearing `target` to `clear`.
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
        scene: &Scene,
        clear: [f32; 3],
    ) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Scene Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                depth_slice: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: f64::from(clear[0]),
                        g: f64::from(clear[1]),
                        b: f64::from(clear[2]),
                        a: 1.0,
                    }),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth.view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if let Some(texture) = scene.background.and_then(|id| self.textures.get(&id)) {
            self.background.draw(&mut pass, texture);
        }

        pass.set_bind_group(0, &self.camera.bind_group, &[]);
        pass.set_bind_group(1, &self.lighting.bind_group, &[]);

        for (object, gpu) in scene.objects().iter().zip(&self.objects) {
            let Some(gpu) = gpu else { continue };
            if !object.visible {
                continue;
            }
            // A mapped surface stays undrawn until its image is resident.
            let texture = match object.material.map() {
                Some(id) => match self.textures.get(&id) {
                    Some(texture) => texture,
                    None => continue,
                },
                None => &self.white,
            };
            pass.set_pipeline(self.pipelines.triangles(gpu.kind));
            pass.set_bind_group(2, &gpu.uniform.bind_group, &[]);
            pass.set_bind_group(3, &texture.bind_group, &[]);
            gpu.mesh.draw(&mut pass);
        }

        if scene.lights.show_helper {
            pass.set_pipeline(&self.pipelines.lines);
            pass.set_bind_group(2, &self.helper.uniform.bind_group, &[]);
            pass.set_bind_group(3, &self.white.bind_group, &[]);
            pass.set_vertex_buffer(0, self.helper.vertex_buffer.slice(..));
            pass.draw(0..HELPER_VERTEX_COUNT as u32, 0..1);
        }
    }
}

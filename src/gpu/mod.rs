//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization, uniform and texture
//! bindings, the packed lighting uniform and per-object mesh buffers.

/// Packed ambient + directional lighting uniform.
pub mod lighting;
/// Per-object vertex/index buffers and object uniform.
pub mod mesh;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// Sampled image textures and the depth attachment.
pub mod texture;
/// Single-binding uniform buffers.
pub mod uniform;

//! CPU-side mesh data and primitive generators.
//!
//! Primitives follow a y-up, right-handed convention: planes lie in XY and
//! face +Z, cuboids are centered on the origin. Texture coordinates have
//! (0, 0) at the top-left of the image.

use glam::Vec3;

/// Interleaved vertex shared by every mesh pipeline.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Object-space normal (zero for line geometry).
    pub normal: [f32; 3],
    /// Texture coordinate.
    pub uv: [f32; 2],
}

impl MeshVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x3,
        2 => Float32x2,
    ];

    /// Vertex buffer layout matching the shader's `VertexInput`.
    #[must_use]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }

    /// Vertex with no meaningful normal or texture coordinate.
    #[must_use]
    pub fn point(position: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: [0.0; 3],
            uv: [0.0; 2],
        }
    }
}

/// Indexed triangle mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// Vertex array.
    pub vertices: Vec<MeshVertex>,
    /// Triangle list indices into `vertices`.
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Plane of `width` x `height` centered at the origin, facing +Z.
    #[must_use]
    pub fn plane(width: f32, height: f32) -> Self {
        let mut mesh = Self::default();
        mesh.push_quad(
            Vec3::ZERO,
            Vec3::X * (width * 0.5),
            Vec3::Y * (height * 0.5),
            Vec3::Z,
        );
        mesh
    }

    /// Box of the given extents centered at the origin, one quad per face.
    #[must_use]
    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        let half = Vec3::new(width, height, depth) * 0.5;
        let mut mesh = Self::default();
        // (normal, u axis, v axis); u x v points along the normal
        let faces = [
            (Vec3::X, Vec3::NEG_Z, Vec3::Y),
            (Vec3::NEG_X, Vec3::Z, Vec3::Y),
            (Vec3::Y, Vec3::X, Vec3::NEG_Z),
            (Vec3::NEG_Y, Vec3::X, Vec3::Z),
            (Vec3::Z, Vec3::X, Vec3::Y),
            (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
        ];
        for (normal, u, v) in faces {
            mesh.push_quad(normal * half, u * half, v * half, normal);
        }
        mesh
    }

    /// Append a quad spanning `center ± u ± v`, wound counter-clockwise
    /// when viewed from the side `normal` points to.
    pub fn push_quad(&mut self, center: Vec3, u: Vec3, v: Vec3, normal: Vec3) {
        let base = self.vertices.len() as u32;
        let corners = [
            (center - u - v, [0.0, 1.0]),
            (center + u - v, [1.0, 1.0]),
            (center + u + v, [1.0, 0.0]),
            (center - u + v, [0.0, 0.0]),
        ];
        self.vertices
            .extend(corners.into_iter().map(|(p, uv)| MeshVertex {
                position: p.to_array(),
                normal: normal.to_array(),
                uv,
            }));
        self.indices.extend_from_slice(&[
            base,
            base + 1,
            base + 2,
            base,
            base + 2,
            base + 3,
        ]);
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for an empty mesh.
    #[must_use]
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut iter = self.vertices.iter().map(|v| Vec3::from(v.position));
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face_normal(mesh: &MeshData, tri: usize) -> Vec3 {
        let idx = &mesh.indices[tri * 3..tri * 3 + 3];
        let p = |i: u32| Vec3::from(mesh.vertices[i as usize].position);
        (p(idx[1]) - p(idx[0]))
            .cross(p(idx[2]) - p(idx[0]))
            .normalize()
    }

    #[test]
    fn plane_spans_extents_and_faces_forward() {
        let mesh = MeshData::plane(10.0, 4.0);
        let (lo, hi) = mesh.bounds().unwrap();
        assert_eq!(lo, Vec3::new(-5.0, -2.0, 0.0));
        assert_eq!(hi, Vec3::new(5.0, 2.0, 0.0));
        assert!(face_normal(&mesh, 0).abs_diff_eq(Vec3::Z, 1e-6));
    }

    #[test]
    fn plane_top_left_uv_is_origin() {
        let mesh = MeshData::plane(2.0, 2.0);
        let top_left = mesh
            .vertices
            .iter()
            .find(|v| v.position[0] < 0.0 && v.position[1] > 0.0)
            .unwrap();
        assert_eq!(top_left.uv, [0.0, 0.0]);
    }

    #[test]
    fn cuboid_winding_matches_normals() {
        let mesh = MeshData::cuboid(2.0, 3.0, 0.5);
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.triangle_count(), 12);
        for tri in 0..mesh.triangle_count() {
            let stored =
                Vec3::from(mesh.vertices[mesh.indices[tri * 3] as usize].normal);
            assert!(face_normal(&mesh, tri).abs_diff_eq(stored, 1e-5));
        }
    }

    #[test]
    fn cuboid_bounds_are_centered() {
        let mesh = MeshData::cuboid(40.0, 2.0, 0.5);
        let (lo, hi) = mesh.bounds().unwrap();
        assert_eq!(lo, Vec3::new(-20.0, -1.0, -0.25));
        assert_eq!(hi, Vec3::new(20.0, 1.0, 0.25));
    }

    #[test]
    fn empty_mesh_has_no_bounds() {
        assert!(MeshData::default().bounds().is_none());
    }
}

use crate::scene::LightRig;

/// Lighting configuration shared by the mesh shader.
/// NOTE: Must match WGSL struct layout exactly (48 bytes)
///
/// WGSL layout:
///   ambient: vec3<f32>      (offset 0,  align 16)
///   _pad0: f32              (offset 12)
///   light_color: vec3<f32>  (offset 16, align 16)
///   _pad1: f32              (offset 28)
///   light_dir: vec3<f32>    (offset 32, align 16)
///   _pad2: f32              (offset 44)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    /// Ambient color premultiplied by its intensity
    pub ambient: [f32; 3],
    pub _pad0: f32,
    /// Directional color premultiplied by its intensity
    pub light_color: [f32; 3],
    pub _pad1: f32,
    /// Unit vector from the lit surface toward the light
    pub light_dir: [f32; 3],
    pub _pad2: f32,
}

impl LightingUniform {
    /// Pack the rig's current state.
    #[must_use]
    pub fn from_rig(rig: &LightRig) -> Self {
        let ambient = glam::Vec3::from(rig.ambient.color.0) * rig.ambient.intensity;
        let light = glam::Vec3::from(rig.directional.color.0)
            * rig.directional.intensity;
        Self {
            ambient: ambient.to_array(),
            _pad0: 0.0,
            light_color: light.to_array(),
            _pad1: 0.0,
            light_dir: rig.directional.direction().to_array(),
            _pad2: 0.0,
        }
    }
}

impl Default for LightingUniform {
    fn default() -> Self {
        Self::from_rig(&LightRig::default())
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn layout_is_48_bytes() {
        assert_eq!(std::mem::size_of::<LightingUniform>(), 48);
    }

    #[test]
    fn default_rig_packs_half_intensity_white() {
        let u = LightingUniform::default();
        assert_eq!(u.ambient, [0.5; 3]);
        assert_eq!(u.light_color, [0.5; 3]);
        let dir = Vec3::from(u.light_dir);
        assert!(dir.abs_diff_eq(Vec3::new(0.0, 10.0, 30.0).normalize(), 1e-6));
    }

    #[test]
    fn edits_flow_through() {
        let mut rig = LightRig::default();
        rig.ambient.intensity = 0.0;
        rig.directional.position = Vec3::new(-5.0, 0.0, 0.0);
        let u = LightingUniform::from_rig(&rig);
        assert_eq!(u.ambient, [0.0; 3]);
        assert_eq!(u.light_dir, [-1.0, 0.0, 0.0]);
    }
}

//! Ambient + directional light rig and the directional light helper.

use glam::Vec3;

use super::object::Color;
use crate::options::LightingOptions;

/// Uniform light applied equally to every lit surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    /// Light color.
    pub color: Color,
    /// Scalar intensity.
    pub intensity: f32,
}

/// Parallel light shining from `position` toward `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// Light color.
    pub color: Color,
    /// Scalar intensity.
    pub intensity: f32,
    /// Where the light sits; only the direction to `target` affects shading.
    pub position: Vec3,
    /// Point the light aims at.
    pub target: Vec3,
}

impl DirectionalLight {
    /// Unit vector from the target toward the light.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        (self.position - self.target).try_normalize().unwrap_or(Vec3::Y)
    }

    /// Line-list segments for the helper gizmo: a square of half-extent
    /// `size` around the light, facing the target, plus a line from the
    /// light to the target.
    #[must_use]
    pub fn helper_segments(&self, size: f32) -> [Vec3; 10] {
        let forward = -self.direction();
        let up_hint = if forward.y.abs() > 0.999 { Vec3::Z } else { Vec3::Y };
        let right = forward.cross(up_hint).normalize() * size;
        let up = right.cross(forward).normalize() * size;
        let p = self.position;
        let corners = [p - right + up, p + right + up, p + right - up, p - right - up];
        [
            corners[0],
            corners[1],
            corners[1],
            corners[2],
            corners[2],
            corners[3],
            corners[3],
            corners[0],
            p,
            self.target,
        ]
    }
}

/// The scene's two lights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightRig {
    /// Fill light.
    pub ambient: AmbientLight,
    /// Key ("moon") light.
    pub directional: DirectionalLight,
    /// Half-extent of the helper square.
    pub helper_size: f32,
    /// Whether the helper is drawn.
    pub show_helper: bool,
}

impl LightRig {
    /// Build the rig from options; the directional light aims at the origin.
    #[must_use]
    pub fn from_options(options: &LightingOptions) -> Self {
        Self {
            ambient: AmbientLight {
                color: Color(options.ambient_color),
                intensity: options.ambient_intensity,
            },
            directional: DirectionalLight {
                color: Color(options.directional_color),
                intensity: options.directional_intensity,
                position: options.directional_position.into(),
                target: Vec3::ZERO,
            },
            helper_size: options.helper_size,
            show_helper: options.show_helper,
        }
    }
}

impl Default for LightRig {
    fn default() -> Self {
        Self::from_options(&LightingOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rig_matches_moonlight() {
        let rig = LightRig::default();
        assert_eq!(rig.ambient.intensity, 0.5);
        assert_eq!(rig.directional.intensity, 0.5);
        assert_eq!(rig.directional.position, Vec3::new(0.0, 10.0, 30.0));
        assert_eq!(rig.directional.target, Vec3::ZERO);
        assert_eq!(rig.helper_size, 5.0);
    }

    #[test]
    fn direction_points_from_target_to_light() {
        let light = LightRig::default().directional;
        let expected = Vec3::new(0.0, 10.0, 30.0).normalize();
        assert!(light.direction().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn light_at_target_falls_back_to_up() {
        let mut light = LightRig::default().directional;
        light.position = Vec3::ZERO;
        assert_eq!(light.direction(), Vec3::Y);
    }

    #[test]
    fn helper_square_is_perpendicular_to_light_direction() {
        let light = LightRig::default().directional;
        let seg = light.helper_segments(5.0);
        let dir = light.direction();
        for pair in seg[..8].chunks(2) {
            let edge = pair[1] - pair[0];
            assert!((edge.length() - 10.0).abs() < 1e-4);
            assert!(edge.dot(dir).abs() < 1e-4);
        }
        assert_eq!(seg[8], light.position);
        assert_eq!(seg[9], Vec3::ZERO);
    }

    #[test]
    fn helper_handles_vertical_light() {
        let mut light = LightRig::default().directional;
        light.position = Vec3::new(0.0, 5.0, 0.0);
        let seg = light.helper_segments(1.0);
        assert!(seg.iter().all(|p| p.is_finite()));
    }
}

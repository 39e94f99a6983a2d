use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// World-space position of the directional light.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Position", inline)]
#[serde(default)]
pub struct LightPosition {
    /// X coordinate.
    #[schemars(title = "x", range(min = -5.0, max = 5.0), extend("step" = 0.001))]
    pub x: f32,
    /// Y coordinate.
    #[schemars(title = "y", range(min = -5.0, max = 5.0), extend("step" = 0.001))]
    pub y: f32,
    /// Z coordinate.
    #[schemars(title = "z", range(min = -5.0, max = 5.0), extend("step" = 0.001))]
    pub z: f32,
}

impl Default for LightPosition {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 10.0,
            z: 30.0,
        }
    }
}

impl From<LightPosition> for glam::Vec3 {
    fn from(p: LightPosition) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

/// Ambient + directional light rig. Ranged fields appear as debug sliders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
pub struct LightingOptions {
    /// Ambient light color (linear RGB).
    #[schemars(skip)]
    pub ambient_color: [f32; 3],
    /// Ambient light intensity.
    #[schemars(title = "Ambient", range(min = 0.0, max = 1.0), extend("step" = 0.001))]
    pub ambient_intensity: f32,
    /// Directional light color (linear RGB).
    #[schemars(skip)]
    pub directional_color: [f32; 3],
    /// Directional light intensity.
    #[schemars(title = "Moon Light", range(min = 0.0, max = 1.0), extend("step" = 0.001))]
    pub directional_intensity: f32,
    /// Directional light position; the light always aims at the origin.
    pub directional_position: LightPosition,
    /// Half-extent of the directional light helper square.
    #[schemars(skip)]
    pub helper_size: f32,
    /// Whether the directional light helper is drawn.
    #[schemars(skip)]
    pub show_helper: bool,
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            ambient_color: [1.0, 1.0, 1.0],
            ambient_intensity: 0.5,
            directional_color: [1.0, 1.0, 1.0],
            directional_intensity: 0.5,
            directional_position: LightPosition::default(),
            helper_size: 5.0,
            show_helper: true,
        }
    }
}

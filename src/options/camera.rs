use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and orbit control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Initial eye position; the camera orbits the origin.
    pub position: [f32; 3],
    /// Whether orbit motion decays inertially instead of stopping.
    pub damping: bool,
    /// Fraction of the pending orbit delta applied per frame.
    pub damping_factor: f32,
    /// Rotation sensitivity multiplier.
    pub rotate_speed: f32,
    /// Pan sensitivity multiplier.
    pub pan_speed: f32,
    /// Zoom sensitivity exponent applied to the 0.95 dolly step.
    pub zoom_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 75.0,
            znear: 0.1,
            zfar: 100.0,
            position: [0.0, 0.0, 20.0],
            damping: true,
            damping_factor: 0.05,
            rotate_speed: 1.0,
            pan_speed: 1.0,
            zoom_speed: 1.0,
        }
    }
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Output resolution and overlay toggles.
pub struct DisplayOptions {
    /// Upper bound on the device pixel ratio used for the surface.
    pub max_pixel_ratio: f64,
    /// Whether the debug panel starts open.
    pub show_debug_panel: bool,
    /// Clear color used until (or instead of) the background texture.
    pub clear_color: [f32; 3],
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            max_pixel_ratio: 2.0,
            show_debug_panel: true,
            clear_color: [0.0, 0.0, 0.0],
        }
    }
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Layout", inline)]
#[serde(default)]
/// Base constants every object's size and position derive from.
pub struct LayoutOptions {
    /// Floor width; horizontal sizes and offsets scale with it.
    pub floor_width: f32,
    /// Floor height; vertical sizes and offsets scale with it.
    pub floor_height: f32,
    /// Whether the floor plane is drawn.
    pub show_floor: bool,
    /// Extruded header text.
    pub header_text: String,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            floor_width: 40.0,
            floor_height: 20.0,
            show_floor: false,
            header_text: "Software Developer".to_owned(),
        }
    }
}

use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Assets", inline)]
#[serde(default)]
/// Asset file locations. Relative entries resolve against `root`.
pub struct AssetOptions {
    /// Directory all other asset paths are relative to.
    pub root: PathBuf,
    /// Full-screen background image.
    pub background: PathBuf,
    /// Image mapped onto the left panel.
    pub left_image: PathBuf,
    /// Image mapped onto the right panel.
    pub right_image: PathBuf,
    /// Typeface JSON used for the header text.
    pub font: PathBuf,
}

impl AssetOptions {
    /// Resolve an asset path against `root`.
    #[must_use]
    pub fn resolve(&self, relative: &std::path::Path) -> PathBuf {
        self.root.join(relative)
    }
}

impl Default for AssetOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("static"),
            background: PathBuf::from("textures/bricks/cross-hatch.png"),
            left_image: PathBuf::from("textures/bricks/color.jpg"),
            right_image: PathBuf::from("textures/keyboard.jpg"),
            font: PathBuf::from("fonts/Be_Vietnam_Pro_Black_Regular.json"),
        }
    }
}

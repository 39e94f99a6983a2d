//! Centralized scene/display options with TOML file support.
//!
//! All tweakable settings (layout constants, lighting, camera, display
//! toggles, asset paths, key bindings) are consolidated here. Options serialize to/from
//! TOML, and their JSON schema drives the debug panel: every numeric field
//! declaring a `range` becomes a slider.

mod assets;
mod camera;
mod display;
mod keybindings;
mod layout;
mod lighting;

use std::path::Path;

pub use assets::AssetOptions;
pub use camera::CameraOptions;
pub use display::DisplayOptions;
pub use keybindings::KeyBindings;
pub use layout::LayoutOptions;
pub use lighting::{LightPosition, LightingOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FolioError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[lighting]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Base layout constants for the scene objects.
    pub layout: LayoutOptions,
    /// Ambient and directional light parameters.
    pub lighting: LightingOptions,
    /// Camera projection and orbit control parameters.
    pub camera: CameraOptions,
    /// Output resolution and overlay toggles.
    pub display: DisplayOptions,
    /// Asset file locations.
    pub assets: AssetOptions,
    /// Keyboard shortcuts.
    pub keybindings: KeyBindings,
}

impl Options {
    /// Generate JSON Schema describing the options tree.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, FolioError> {
        let content = std::fs::read_to_string(path).map_err(FolioError::Io)?;
        toml::from_str(&content)
            .map_err(|e| FolioError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), FolioError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FolioError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FolioError::Io)?;
        }
        std::fs::write(path, content).map_err(FolioError::Io)
    }

    /// Return a copy with the field at `pointer` (a JSON pointer such as
    /// `/lighting/ambient_intensity`) replaced by `value`.
    ///
    /// The edit goes through a serde_json round trip, so the new value must
    /// deserialize into the field's type.
    pub fn with_value_at(
        &self,
        pointer: &str,
        value: serde_json::Value,
    ) -> Result<Self, FolioError> {
        let mut root = serde_json::to_value(self)
            .map_err(|e| FolioError::OptionsParse(e.to_string()))?;
        let slot = root.pointer_mut(pointer).ok_or_else(|| {
            FolioError::OptionsParse(format!("no option at {pointer}"))
        })?;
        *slot = value;
        serde_json::from_value(root)
            .map_err(|e| FolioError::OptionsParse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[lighting]
ambient_intensity = 0.8
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.lighting.ambient_intensity, 0.8);
        // Everything else should be default
        assert_eq!(opts.lighting.directional_intensity, 0.5);
        assert_eq!(opts.layout.floor_width, 40.0);
        assert_eq!(opts.camera.fovy, 75.0);
    }

    #[test]
    fn keybindings_section_overrides_defaults() {
        let toml_str = r#"
[keybindings.bindings]
Space = "trigger_about"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert!(opts.keybindings.lookup("Space").is_some());
        assert_eq!(opts.keybindings.lookup("KeyH"), None);
    }

    #[test]
    fn save_then_load_preserves_edits() {
        let dir = std::env::temp_dir()
            .join(format!("folio-options-{}", std::process::id()));
        let path = dir.join("scene.toml");
        let mut opts = Options::default();
        opts.layout.show_floor = true;
        opts.display.max_pixel_ratio = 1.0;
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = Options::load(Path::new("/nonexistent/folio.toml"))
            .unwrap_err();
        assert!(matches!(err, FolioError::Io(_)));
    }

    #[test]
    fn with_value_at_edits_nested_field() {
        let opts = Options::default()
            .with_value_at(
                "/lighting/directional_position/x",
                serde_json::json!(-2.5),
            )
            .unwrap();
        assert_eq!(opts.lighting.directional_position.x, -2.5);
        assert_eq!(opts.lighting.directional_position.y, 10.0);
    }

    #[test]
    fn with_value_at_rejects_unknown_pointer() {
        let err = Options::default()
            .with_value_at("/lighting/nope", serde_json::json!(1.0))
            .unwrap_err();
        assert!(matches!(err, FolioError::OptionsParse(_)));
    }

    #[test]
    fn with_value_at_rejects_wrong_type() {
        let result = Options::default().with_value_at(
            "/lighting/ambient_intensity",
            serde_json::json!("bright"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        for section in
            ["layout", "lighting", "camera", "display", "assets", "keybindings"]
         {
            assert!(props.contains_key(section), "missing {section}");
        }

        let lighting = &props["lighting"]["properties"];
        assert_eq!(lighting["ambient_intensity"]["maximum"], 1.0);
        assert_eq!(lighting["directional_position"]["properties"]["z"]
            ["minimum"], -5.0);
        assert!(lighting.get("helper_size").is_none());
    }
}

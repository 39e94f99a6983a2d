use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::input::KeyCommandTag;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Key bindings", inline)]
#[serde(default)]
/// Physical key → command mapping.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format: `"KeyH"`,
/// `"Space"`, `"Escape"`, etc.
pub struct KeyBindings {
    /// Maps key string → command (e.g. `"KeyH"` → `toggle_debug_panel`).
    pub bindings: HashMap<String, KeyCommandTag>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            bindings: HashMap::from([(
                "KeyH".into(),
                KeyCommandTag::ToggleDebugPanel,
            )]),
        }
    }
}

impl KeyBindings {
    /// Look up the command bound to a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyCommandTag> {
        self.bindings.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_h_to_panel_toggle() {
        let keys = KeyBindings::default();
        assert_eq!(keys.lookup("KeyH"), Some(KeyCommandTag::ToggleDebugPanel));
        assert_eq!(keys.lookup("KeyQ"), None);
    }

    #[test]
    fn bindings_load_from_toml() {
        let toml_str = r#"
[bindings]
Space = "trigger_about"
KeyP = "toggle_debug_panel"
"#;
        let keys: KeyBindings = toml::from_str(toml_str).unwrap();
        assert_eq!(keys.lookup("Space"), Some(KeyCommandTag::TriggerAbout));
        assert_eq!(keys.lookup("KeyP"), Some(KeyCommandTag::ToggleDebugPanel));
        assert_eq!(keys.lookup("KeyH"), None);
    }
}

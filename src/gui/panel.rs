//! Schema-driven control panel.
//!
//! The panel holds no option state of its own. It is generated from the
//! options JSON schema: every numeric leaf that declares `minimum` and
//! `maximum` becomes a slider keyed by its JSON pointer. Drawing the panel
//! against the current option values yields [`UiAction`]s for the engine
//! to apply.

use serde_json::Value;

/// An edit requested by the panel.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    /// Replace the option at `pointer` (e.g. `/lighting/ambient_intensity`).
    SetOption {
        /// JSON pointer into the serialized options.
        pointer: String,
        /// New JSON value.
        value: Value,
    },
}

/// One slider generated from the schema.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderControl {
    /// JSON pointer of the bound option.
    pub pointer: String,
    /// Display label: the schema title, or the field name.
    pub label: String,
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
    /// Increment, if declared.
    pub step: Option<f64>,
}

/// Debug control panel.
#[derive(Debug, Clone)]
pub struct DebugPanel {
    sliders: Vec<SliderControl>,
    visible: bool,
}

impl DebugPanel {
    /// Build the slider list from a JSON schema document.
    #[must_use]
    pub fn from_schema(schema: &Value) -> Self {
        let mut sliders = Vec::new();
        collect(schema, schema, "", "", &mut sliders);
        Self {
            sliders,
            visible: true,
        }
    }

    /// Panel for the crate's [`Options`](crate::options::Options).
    #[must_use]
    pub fn for_options() -> Self {
        match serde_json::to_value(crate::options::Options::json_schema()) {
            Ok(schema) => Self::from_schema(&schema),
            Err(e) => {
                log::warn!("options schema unavailable: {e}");
                Self::from_schema(&Value::Null)
            }
        }
    }

    /// Generated sliders in schema order.
    #[must_use]
    pub fn sliders(&self) -> &[SliderControl] {
        &self.sliders
    }

    /// Whether the panel is drawn.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the panel.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Flip visibility.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Draw the sliders against `values` (the serialized options) and
    /// return one action per edited slider.
    pub fn show(&self, ctx: &egui::Context, values: &Value) -> Vec<UiAction> {
        let mut actions = Vec::new();
        if !self.visible || self.sliders.is_empty() {
            return actions;
        }
        egui::Window::new("Controls")
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-10.0, 10.0))
            .resizable(false)
            .collapsible(true)
            .show(ctx, |ui| {
                for control in &self.sliders {
                    let Some(mut value) =
                        values.pointer(&control.pointer).and_then(Value::as_f64)
                    else {
                        continue;
                    };
                    let mut slider =
                        egui::Slider::new(&mut value, control.min..=control.max)
                            .clamping(egui::SliderClamping::Edits)
                            .text(control.label.as_str());
                    if let Some(step) = control.step {
                        slider = slider.step_by(step);
                    }
                    if ui.add(slider).changed() {
                        actions.push(UiAction::SetOption {
                            pointer: control.pointer.clone(),
                            value: Value::from(value),
                        });
                    }
                }
            });
        actions
    }
}

/// Follow a local `#/$defs/...` reference, if `node` is one.
fn resolve<'a>(root: &'a Value, node: &'a Value) -> &'a Value {
    match node.get("$ref").and_then(Value::as_str) {
        Some(reference) => reference
            .strip_prefix('#')
            .and_then(|pointer| root.pointer(pointer))
            .unwrap_or(node),
        None => node,
    }
}

fn is_numeric(node: &Value) -> bool {
    match node.get("type") {
        Some(Value::String(t)) => t == "number" || t == "integer",
        Some(Value::Array(types)) => types
            .iter()
            .any(|t| t.as_str().is_some_and(|t| t == "number" || t == "integer")),
        _ => false,
    }
}

fn collect(
    root: &Value,
    node: &Value,
    pointer: &str,
    name: &str,
    out: &mut Vec<SliderControl>,
) {
    let node = resolve(root, node);
    if let Some(properties) = node.get("properties").and_then(Value::as_object) {
        for (key, child) in properties {
            collect(root, child, &format!("{pointer}/{key}"), key, out);
        }
        return;
    }
    if !is_numeric(node) {
        return;
    }
    let (Some(min), Some(max)) = (
        node.get("minimum").and_then(Value::as_f64),
        node.get("maximum").and_then(Value::as_f64),
    ) else {
        return;
    };
    out.push(SliderControl {
        pointer: pointer.to_owned(),
        label: node
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or(name)
            .to_owned(),
        min,
        max,
        step: node.get("step").and_then(Value::as_f64),
    });
}

//! Native-side GUI layer: an egui overlay hosting the debug control panel.
//!
//! The panel is generated from the options schema and reports edits as
//! [`UiAction`]s; the engine applies them to its options and lights.

/// egui context, winit state and wgpu renderer.
pub mod overlay;
/// Schema-driven slider panel and its actions.
pub mod panel;

pub use overlay::DebugOverlay;
pub use panel::{DebugPanel, SliderControl, UiAction};

//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether it came from a mouse gesture, a key
//! press or a programmatic call, is represented as a `SceneCommand` and
//! handed to [`SceneEngine::execute`](super::SceneEngine::execute).

use glam::Vec2;

// ── Commands ─────────────────────────────────────────────────────────────

/// A discrete or parameterized operation the engine can perform.
///
/// ```ignore
/// engine.execute(SceneCommand::TriggerAbout);
/// engine.execute(SceneCommand::Zoom { delta: 1.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneCommand {
    // ── Timelines ───────────────────────────────────────────────────
    /// Start the about sequence (any pointer press).
    TriggerAbout,

    /// Start the contact sequence (primary double-click).
    TriggerContact,

    // ── Camera ──────────────────────────────────────────────────────
    /// Orbit the camera by `delta` logical pixels of pointer movement.
    RotateCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Pan the camera by `delta` logical pixels of pointer movement.
    PanCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Dolly the camera (positive = toward the target).
    Zoom {
        /// Scroll amount in wheel steps.
        delta: f32,
    },

    // ── Display ─────────────────────────────────────────────────────
    /// Show or hide the lighting panel.
    ToggleDebugPanel,
}

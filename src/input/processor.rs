//! Converts raw platform events into engine commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! drag detection, double-click timing, modifier keys) and the key-binding
//! map. It is the only thing that sits between raw window events and the
//! engine's [`execute`](crate::SceneEngine::execute) method.

use glam::Vec2;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::event::{InputEvent, MouseButton};
use super::mouse::{ClickResult, InputState};
use crate::engine::command::SceneCommand;
use crate::options::KeyBindings;

/// Serializable tag for the subset of [`SceneCommand`] that can be
/// key-bound.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommandTag {
    /// Show or hide the lighting panel.
    ToggleDebugPanel,
    /// Replay the about sequence.
    TriggerAbout,
}

impl KeyCommandTag {
    fn to_command(self) -> SceneCommand {
        match self {
            Self::ToggleDebugPanel => SceneCommand::ToggleDebugPanel,
            Self::TriggerAbout => SceneCommand::TriggerAbout,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// InputProcessor
// ─────────────────────────────────────────────────────────────────────────────

/// Converts raw window events into [`SceneCommand`]s.
///
/// Any button press starts the about sequence. A primary double-click
/// starts the contact sequence. Primary drags orbit (pan with shift),
/// secondary drags pan and the wheel dollies.
///
/// # Usage
///
/// ```ignore
/// if let Some(cmd) = input_processor.handle_event(event) {
///     engine.execute(cmd);
/// }
/// ```
#[derive(Debug)]
pub struct InputProcessor {
    /// Cursor tracking and click-count state machine.
    state: InputState,
    /// Button currently driving a drag, if any.
    held: Option<MouseButton>,
    /// Whether the primary press was seen here. Releases of presses that
    /// went to the overlay do not count as clicks.
    primary_down: bool,
    /// Whether the shift modifier is currently held.
    shift_pressed: bool,
    /// Key string → command mapping.
    key_bindings: KeyBindings,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: InputState::new(),
            held: None,
            primary_down: false,
            shift_pressed: false,
            key_bindings: KeyBindings::default(),
        }
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Current cursor position in logical pixels.
    #[must_use]
    pub fn mouse_pos(&self) -> (f32, f32) {
        self.state.mouse_pos
    }

    /// Replace the key bindings, keeping gesture state.
    pub fn set_key_bindings(&mut self, key_bindings: KeyBindings) {
        self.key_bindings = key_bindings;
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<SceneCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed)
            }
            InputEvent::Scroll { delta } => Some(SceneCommand::Zoom { delta }),
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
                None
            }
            InputEvent::Key { code } => {
                self.key_bindings.lookup(&code).map(KeyCommandTag::to_command)
            }
        }
    }

    /// Cursor moved: compute delta, possibly produce a camera command.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<SceneCommand> {
        let (delta_x, delta_y) = self.state.handle_mouse_position(x, y);
        let button = self.held?;

        let delta = Vec2::new(delta_x, delta_y);
        if delta.length_squared() > 1.0 {
            self.state.mark_dragging();
        }
        match button {
            MouseButton::Left if !self.shift_pressed => {
                Some(SceneCommand::RotateCamera { delta })
            }
            MouseButton::Left | MouseButton::Right => {
                Some(SceneCommand::PanCamera { delta })
            }
            _ => None,
        }
    }

    /// Button press/release: every press replays the about sequence, a
    /// quick second primary release starts the contact sequence.
    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> Option<SceneCommand> {
        if pressed {
            if matches!(button, MouseButton::Left | MouseButton::Right) {
                if button == MouseButton::Left {
                    self.state.handle_mouse_down();
                    self.primary_down = true;
                }
                self.held = Some(button);
            }
            return Some(SceneCommand::TriggerAbout);
        }

        if self.held == Some(button) {
            self.held = None;
        }
        if button != MouseButton::Left || !std::mem::take(&mut self.primary_down) {
            return None;
        }
        match self.state.process_mouse_up() {
            ClickResult::DoubleClick => Some(SceneCommand::TriggerContact),
            ClickResult::SingleClick | ClickResult::NoAction => None,
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(button: MouseButton) -> InputEvent {
        InputEvent::MouseButton {
            button,
            pressed: true,
        }
    }

    fn release(button: MouseButton) -> InputEvent {
        InputEvent::MouseButton {
            button,
            pressed: false,
        }
    }

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::CursorMoved { x, y }
    }

    #[test]
    fn any_press_triggers_about() {
        for button in [
            MouseButton::Left,
            MouseButton::Right,
            MouseButton::Middle,
            MouseButton::Other,
        ] {
            let mut input = InputProcessor::new();
            assert_eq!(
                input.handle_event(press(button)),
                Some(SceneCommand::TriggerAbout)
            );
        }
    }

    #[test]
    fn quick_double_click_triggers_contact() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(press(MouseButton::Left)),
            Some(SceneCommand::TriggerAbout)
        );
        assert_eq!(input.handle_event(release(MouseButton::Left)), None);
        assert_eq!(
            input.handle_event(press(MouseButton::Left)),
            Some(SceneCommand::TriggerAbout)
        );
        assert_eq!(
            input.handle_event(release(MouseButton::Left)),
            Some(SceneCommand::TriggerContact)
        );
    }

    #[test]
    fn releases_without_presses_are_not_clicks() {
        let mut input = InputProcessor::new();
        assert_eq!(input.handle_event(release(MouseButton::Left)), None);
        assert_eq!(input.handle_event(release(MouseButton::Left)), None);
    }

    #[test]
    fn overlay_press_does_not_pair_with_scene_click() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(press(MouseButton::Left));
        assert_eq!(input.handle_event(release(MouseButton::Left)), None);
        // Second press went to the overlay; only its release arrives.
        assert_eq!(input.handle_event(release(MouseButton::Left)), None);
    }

    #[test]
    fn secondary_double_click_does_not_trigger_contact() {
        let mut input = InputProcessor::new();
        for _ in 0..2 {
            let _ = input.handle_event(press(MouseButton::Right));
            assert_eq!(input.handle_event(release(MouseButton::Right)), None);
        }
    }

    #[test]
    fn left_drag_rotates_and_shift_drag_pans() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(moved(10.0, 10.0));
        let _ = input.handle_event(press(MouseButton::Left));
        assert_eq!(
            input.handle_event(moved(15.0, 10.0)),
            Some(SceneCommand::RotateCamera {
                delta: Vec2::new(5.0, 0.0)
            })
        );
        let _ = input.handle_event(InputEvent::ModifiersChanged { shift: true });
        assert_eq!(
            input.handle_event(moved(15.0, 12.0)),
            Some(SceneCommand::PanCamera {
                delta: Vec2::new(0.0, 2.0)
            })
        );
    }

    #[test]
    fn right_drag_pans() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(press(MouseButton::Right));
        assert!(matches!(
            input.handle_event(moved(4.0, 0.0)),
            Some(SceneCommand::PanCamera { .. })
        ));
        let _ = input.handle_event(release(MouseButton::Right));
        assert_eq!(input.handle_event(moved(8.0, 0.0)), None);
    }

    #[test]
    fn drag_then_click_is_not_double_click() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(press(MouseButton::Left));
        let _ = input.handle_event(moved(30.0, 0.0));
        let _ = input.handle_event(release(MouseButton::Left));
        let _ = input.handle_event(press(MouseButton::Left));
        assert_eq!(input.handle_event(release(MouseButton::Left)), None);
    }

    #[test]
    fn hover_without_button_is_ignored() {
        let mut input = InputProcessor::new();
        assert_eq!(input.handle_event(moved(100.0, 100.0)), None);
        assert_eq!(input.mouse_pos(), (100.0, 100.0));
    }

    #[test]
    fn scroll_zooms() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(InputEvent::Scroll { delta: -2.0 }),
            Some(SceneCommand::Zoom { delta: -2.0 })
        );
    }

    #[test]
    fn h_toggles_debug_panel() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(InputEvent::Key {
                code: "KeyH".into()
            }),
            Some(SceneCommand::ToggleDebugPanel)
        );
        assert_eq!(
            input.handle_event(InputEvent::Key {
                code: "KeyQ".into()
            }),
            None
        );
    }

    #[test]
    fn custom_binding_replays_about() {
        let mut bindings = KeyBindings::default();
        let _ = bindings
            .bindings
            .insert("Space".into(), KeyCommandTag::TriggerAbout);
        let mut input = InputProcessor::with_key_bindings(bindings);
        assert_eq!(
            input.handle_event(InputEvent::Key {
                code: "Space".into()
            }),
            Some(SceneCommand::TriggerAbout)
        );
    }
}

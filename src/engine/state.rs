//! Window-independent frame state: everything the engine mutates between
//! GPU submissions.

use super::command::SceneCommand;
use crate::animation::Director;
use crate::assets::{AssetTracker, TextureData};
use crate::camera::controller::OrbitController;
use crate::camera::viewport::Viewport;
use crate::gui::UiAction;
use crate::input::{InputEvent, InputProcessor};
use crate::options::Options;
use crate::scene::{Scene, TextureId};
use crate::util::frame_timing::{FrameTick, FrameTiming};

/// Scene, camera, timelines, input and options for one window.
pub struct SceneState {
    /// The scene aggregate.
    pub scene: Scene,
    /// "about" and "contact" timelines.
    pub director: Director,
    /// Damped orbit camera.
    pub controller: OrbitController,
    /// Logical size and pixel ratio.
    pub viewport: Viewport,
    /// Gesture recognition.
    pub input: InputProcessor,
    options: Options,
    device_pixel_ratio: f64,
    timing: FrameTiming,
    assets: AssetTracker,
    pending_actions: Vec<UiAction>,
    debug_panel_visible: bool,
}

impl SceneState {
    /// Build the scene for `options` and start its asset loads.
    ///
    /// `width`/`height` are logical pixels.
    #[must_use]
    pub fn new(options: Options, width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        let scene = Scene::from_options(&options);
        let assets = AssetTracker::spawn(&options, &scene);
        Self::with_assets(options, scene, assets, width, height, device_pixel_ratio)
    }

    fn with_assets(
        options: Options,
        scene: Scene,
        assets: AssetTracker,
        width: f64,
        height: f64,
        device_pixel_ratio: f64,
    ) -> Self {
        let viewport = Viewport::new(
            width,
            height,
            device_pixel_ratio,
            options.display.max_pixel_ratio,
        );
        let controller = OrbitController::new(&options.camera, viewport.aspect());
        log::info!(
            "scene built: {} objects, {}x{} @{}x",
            scene.len(),
            width,
            height,
            viewport.pixel_ratio()
        );
        Self {
            scene,
            director: Director::new(),
            controller,
            viewport,
            input: InputProcessor::with_key_bindings(options.keybindings.clone()),
            debug_panel_visible: options.display.show_debug_panel,
            options,
            device_pixel_ratio,
            timing: FrameTiming::new(),
            assets,
            pending_actions: Vec::new(),
        }
    }

    // -- Commands --

    /// Perform one command.
    pub fn execute(&mut self, command: SceneCommand) {
        let (_, height) = self.viewport.size();
        match command {
            SceneCommand::TriggerAbout => self.director.trigger_about(&self.scene),
            SceneCommand::TriggerContact => {
                self.director.trigger_contact(&self.scene);
            }
            SceneCommand::RotateCamera { delta } => {
                self.controller.rotate(delta, height as f32);
            }
            SceneCommand::PanCamera { delta } => {
                self.controller.pan(delta, height as f32);
            }
            SceneCommand::Zoom { delta } => self.controller.zoom(delta),
            SceneCommand::ToggleDebugPanel => {
                self.debug_panel_visible = !self.debug_panel_visible;
            }
        }
    }

    /// Route an input event through gesture recognition. Returns the
    /// command it produced, after executing it.
    pub fn handle_input(&mut self, event: InputEvent) -> Option<SceneCommand> {
        let command = self.input.handle_event(event)?;
        self.execute(command);
        Some(command)
    }

    // -- Viewport --

    /// Re-derive the viewport and camera aspect. `width`/`height` are
    /// logical pixels.
    pub fn resize(&mut self, width: f64, height: f64, device_pixel_ratio: f64) {
        self.device_pixel_ratio = device_pixel_ratio;
        self.viewport.resize(width, height, device_pixel_ratio);
        self.controller.resize(self.viewport.aspect());
    }

    /// Physical surface size for the current viewport.
    #[must_use]
    pub fn render_size(&self) -> (u32, u32) {
        self.viewport.render_size()
    }

    // -- Frame --

    /// Read the frame clock.
    pub fn tick(&mut self) -> FrameTick {
        self.timing.tick()
    }

    /// Move finished loads into the scene; returns decoded images that
    /// still need a GPU upload.
    pub fn poll_assets(&mut self) -> Vec<(TextureId, TextureData)> {
        self.assets.poll(&mut self.scene)
    }

    /// Advance the timelines by `dt` seconds, then the orbit damping once,
    /// then apply panel edits queued by the previous frame.
    pub fn advance(&mut self, dt: f32) {
        self.director.advance(dt, &mut self.scene);
        let _ = self.controller.update();
        for action in std::mem::take(&mut self.pending_actions) {
            self.apply_ui_action(action);
        }
    }

    // -- Options --

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Options serialized for the debug panel.
    #[must_use]
    pub fn option_values(&self) -> serde_json::Value {
        serde_json::to_value(&self.options).unwrap_or_else(|e| {
            log::warn!("failed to serialize options: {e}");
            serde_json::Value::Null
        })
    }

    /// Whether the debug panel should be drawn.
    #[must_use]
    pub fn debug_panel_visible(&self) -> bool {
        self.debug_panel_visible
    }

    /// Queue panel edits for the next [`SceneState::advance`].
    pub fn queue_ui_actions(&mut self, actions: impl IntoIterator<Item = UiAction>) {
        self.pending_actions.extend(actions);
    }

    /// Apply a panel edit now. Edits that do not fit the options tree are
    /// logged and dropped.
    pub fn apply_ui_action(&mut self, action: UiAction) {
        match action {
            UiAction::SetOption { pointer, value } => {
                match self.options.with_value_at(&pointer, value) {
                    Ok(options) => self.set_options(options),
                    Err(e) => log::warn!("ignoring edit to {pointer}: {e}"),
                }
            }
        }
    }

    /// Replace the options and push lighting, camera, display and key
    /// binding changes to their owners. Layout and asset changes take effect on the next
    /// startup.
    pub fn set_options(&mut self, options: Options) {
        if options.lighting != self.options.lighting {
            self.scene.apply_lighting(&options.lighting);
        }
        if options.camera != self.options.camera {
            self.controller.apply_options(&options.camera);
        }
        if options.display.max_pixel_ratio != self.options.display.max_pixel_ratio {
            self.viewport
                .set_max_pixel_ratio(options.display.max_pixel_ratio, self.device_pixel_ratio);
        }
        if options.display.show_debug_panel != self.options.display.show_debug_panel {
            self.debug_panel_visible = options.display.show_debug_panel;
        }
        if options.keybindings != self.options.keybindings {
            self.input.set_key_bindings(options.keybindings.clone());
        }
        self.options = options;
    }
}

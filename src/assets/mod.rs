//! Background asset loading.
//!
//! Every load runs on its own loader thread and reports exactly one
//! `Result` through a channel. The frame loop polls the channels without
//! blocking and moves finished values into the scene. Failures are logged
//! once and dropped: the dependent object simply never appears.

pub mod font;
pub mod texture;

use std::sync::mpsc::{self, TryRecvError};

pub use texture::TextureData;

use crate::error::FolioError;
use crate::options::Options;
use crate::scene::text::header_text;
use crate::scene::{Scene, SceneObject, TextureId};

/// Handle to a value produced on a loader thread, or never.
#[derive(Debug)]
pub struct Pending<T> {
    label: String,
    rx: mpsc::Receiver<Result<T, FolioError>>,
    done: bool,
}

impl<T: Send + 'static> Pending<T> {
    /// Run `job` on a new named thread.
    pub fn spawn<F>(label: &str, job: F) -> Result<Self, FolioError>
    where
        F: FnOnce() -> Result<T, FolioError> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let _ = std::thread::Builder::new()
            .name(format!("folio-load-{label}"))
            .spawn(move || {
                // The receiver may already be gone if the viewer closed.
                let _ = tx.send(job());
            })
            .map_err(FolioError::ThreadSpawn)?;
        Ok(Self {
            label: label.to_owned(),
            rx,
            done: false,
        })
    }
}

impl<T> Pending<T> {
    /// A handle that is already settled.
    pub fn ready(label: &str, result: Result<T, FolioError>) -> Self {
        let (tx, rx) = mpsc::channel();
        let _ = tx.send(result);
        Self {
            label: label.to_owned(),
            rx,
            done: false,
        }
    }

    /// Non-blocking poll. Returns the value once; a failure is logged and
    /// yields `None` forever after.
    pub fn try_take(&mut self) -> Option<T> {
        if self.done {
            return None;
        }
        match self.rx.try_recv() {
            Ok(Ok(value)) => {
                self.done = true;
                Some(value)
            }
            Ok(Err(e)) => {
                self.done = true;
                log::warn!("failed to load {}: {e}", self.label);
                None
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.done = true;
                log::warn!("loader for {} exited without a result", self.label);
                None
            }
        }
    }

    /// Whether the handle has settled and been consumed.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// What is being loaded.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// All in-flight loads for one scene.
#[derive(Debug, Default)]
pub struct AssetTracker {
    textures: Vec<(TextureId, Pending<TextureData>)>,
    header_text: Option<Pending<SceneObject>>,
}

impl AssetTracker {
    /// Tracker with nothing in flight.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start loading the three images and the header text for a scene
    /// built by [`Scene::from_options`]. A loader thread that fails to
    /// spawn is logged and treated like a failed load.
    #[must_use]
    pub fn spawn(options: &Options, scene: &Scene) -> Self {
        let assets = &options.assets;
        let mut tracker = Self::new();
        log::info!("loading assets from {}", assets.root.display());

        for (name, relative) in [
            ("background", &assets.background),
            ("leftImage", &assets.left_image),
            ("rightImage", &assets.right_image),
        ] {
            let Some(id) = scene.texture_id(name) else {
                continue;
            };
            let path = assets.resolve(relative);
            match Pending::spawn(name, move || TextureData::load(&path)) {
                Ok(pending) => tracker.track_texture(id, pending),
                Err(e) => log::warn!("failed to load {name}: {e}"),
            }
        }

        let path = assets.resolve(&assets.font);
        let content = options.layout.header_text.clone();
        match Pending::spawn("headerText", move || {
            let face = font::Typeface::load(&path)?;
            header_text(&face, &content)
        }) {
            Ok(pending) => tracker.track_header_text(pending),
            Err(e) => log::warn!("failed to load headerText: {e}"),
        }
        tracker
    }

    /// Track an image destined for texture slot `id`.
    pub fn track_texture(&mut self, id: TextureId, pending: Pending<TextureData>) {
        self.textures.push((id, pending));
    }

    /// Track the header text object.
    pub fn track_header_text(&mut self, pending: Pending<SceneObject>) {
        self.header_text = Some(pending);
    }

    /// Move finished loads into the scene. Resolved text objects are
    /// appended directly; decoded images are returned for GPU upload.
    pub fn poll(&mut self, scene: &mut Scene) -> Vec<(TextureId, TextureData)> {
        if let Some(pending) = &mut self.header_text {
            if let Some(object) = pending.try_take() {
                log::info!("{} resolved", pending.label());
                let _ = scene.add(object);
            }
            if pending.is_done() {
                self.header_text = None;
            }
        }

        let mut ready = Vec::new();
        for (id, pending) in &mut self.textures {
            if let Some(data) = pending.try_take() {
                log::info!(
                    "{} resolved ({}x{})",
                    pending.label(),
                    data.width,
                    data.height
                );
                ready.push((*id, data));
            }
        }
        self.textures.retain(|(_, pending)| !pending.is_done());
        ready
    }

    /// Whether every load has settled.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.textures.is_empty() && self.header_text.is_none()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::scene::text::HEADER_TEXT_NAME;

    fn drain(tracker: &mut AssetTracker, scene: &mut Scene) -> Vec<TextureId> {
        let mut textures = Vec::new();
        for _ in 0..500 {
            textures.extend(tracker.poll(scene).into_iter().map(|(id, _)| id));
            if tracker.is_idle() {
                break;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        assert!(tracker.is_idle());
        textures
    }

    #[test]
    fn pending_yields_value_once() {
        let mut pending = Pending::ready("n", Ok(7));
        assert_eq!(pending.try_take(), Some(7));
        assert!(pending.is_done());
        assert_eq!(pending.try_take(), None);
    }

    #[test]
    fn pending_failure_is_swallowed() {
        let mut pending: Pending<u32> =
            Pending::ready("n", Err(FolioError::Font("bad".to_owned())));
        assert_eq!(pending.try_take(), None);
        assert!(pending.is_done());
    }

    #[test]
    fn spawned_job_delivers() {
        let mut pending = Pending::spawn("sum", || Ok(2 + 3)).unwrap();
        let mut value = None;
        for _ in 0..500 {
            value = pending.try_take();
            if value.is_some() {
                break;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(value, Some(5));
    }

    #[test]
    fn missing_assets_leave_solids_and_no_text() {
        let mut options = Options::default();
        options.assets.root = "/nonexistent/folio-assets".into();
        let mut scene = Scene::from_options(&options);
        let before = scene.len();

        let mut tracker = AssetTracker::spawn(&options, &scene);
        let textures = drain(&mut tracker, &mut scene);

        assert!(textures.is_empty());
        assert_eq!(scene.len(), before);
        assert!(scene.find(HEADER_TEXT_NAME).is_none());
        for name in ["header", "leftPanel", "rightPanel", "navBar"] {
            assert!(scene.find(name).is_some());
        }
    }

    #[test]
    fn resolved_text_is_appended() {
        use crate::assets::font::tests::TEST_FONT;

        let mut scene = Scene::from_options(&Options::default());
        let face = font::Typeface::from_json(TEST_FONT).unwrap();
        let mut tracker = AssetTracker::new();
        tracker.track_header_text(Pending::ready("headerText", header_text(&face, "A")));
        assert!(tracker.poll(&mut scene).is_empty());
        assert!(scene.find(HEADER_TEXT_NAME).is_some());
        assert!(tracker.is_idle());
    }

    #[test]
    fn resolved_texture_is_returned_for_upload() {
        let mut scene = Scene::from_options(&Options::default());
        let id = scene.texture_id("leftImage").unwrap();
        let mut tracker = AssetTracker::new();
        tracker.track_texture(id, Pending::ready("leftImage", Ok(TextureData::solid([9; 4]))));
        let ready = tracker.poll(&mut scene);
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].0, id);
    }
}

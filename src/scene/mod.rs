//! Authoritative scene: flat object storage, lights and background.
//!
//! Objects are appended and never removed, so an [`ObjectId`] stays valid
//! for the life of the scene. The renderer mirrors objects by index and
//! uploads any it has not seen yet.

pub mod layout;
pub mod light;
pub mod mesh;
pub mod object;
pub mod text;

pub use layout::{SceneLayout, SceneTextures};
pub use light::{AmbientLight, DirectionalLight, LightRig};
pub use mesh::{MeshData, MeshVertex};
pub use object::{
    Color, Material, ObjectId, SceneObject, Shape, Side, TextureId,
    Transform, TransformProperty,
};
use rustc_hash::FxHashMap;

use crate::options::Options;

/// The authoritative scene. Owns all objects in a flat list.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
    by_name: FxHashMap<String, ObjectId>,
    texture_names: Vec<String>,
    /// Texture drawn behind everything, once resident.
    pub background: Option<TextureId>,
    /// Ambient and directional lights.
    pub lights: LightRig,
}

impl Scene {
    /// Create an empty scene with the default light rig.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build every solid object for `options`, register the three image
    /// slots and attach the background. The header text is added later by
    /// the asset tracker.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        let mut scene = Self::new();
        let textures = SceneTextures {
            background: scene.register_texture("background"),
            left_image: scene.register_texture("leftImage"),
            right_image: scene.register_texture("rightImage"),
        };
        scene.background = Some(textures.background);
        scene.lights = LightRig::from_options(&options.lighting);

        let layout = SceneLayout::from_options(&options.layout);
        for object in layout.objects(&textures) {
            let _ = scene.add(object);
        }
        scene
    }

    // -- Objects --

    /// Append an object. A later object with a duplicate name shadows the
    /// earlier one in [`Scene::find`].
    pub fn add(&mut self, object: SceneObject) -> ObjectId {
        let id = ObjectId(self.objects.len() as u32);
        let _ = self.by_name.insert(object.name.clone(), id);
        self.objects.push(object);
        id
    }

    /// Look up an object by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<ObjectId> {
        self.by_name.get(name).copied()
    }

    /// Read access to an object.
    #[must_use]
    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id.index())
    }

    /// Write access to an object.
    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(id.index())
    }

    /// Read access by name.
    #[must_use]
    pub fn named(&self, name: &str) -> Option<&SceneObject> {
        self.find(name).and_then(|id| self.object(id))
    }

    /// All objects in insertion order.
    #[must_use]
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Number of objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the scene has no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    // -- Textures --

    /// Reserve a texture slot; the image itself arrives asynchronously.
    pub fn register_texture(&mut self, name: &str) -> TextureId {
        let id = TextureId(self.texture_names.len() as u32);
        self.texture_names.push(name.to_owned());
        id
    }

    /// Slot registered under `name`.
    #[must_use]
    pub fn texture_id(&self, name: &str) -> Option<TextureId> {
        self.texture_names
            .iter()
            .position(|n| n == name)
            .map(|i| TextureId(i as u32))
    }

    /// Name a texture slot was registered with.
    #[must_use]
    pub fn texture_name(&self, id: TextureId) -> Option<&str> {
        self.texture_names.get(id.0 as usize).map(String::as_str)
    }

    // -- Lights --

    /// Re-derive the light rig after the lighting options changed.
    pub fn apply_lighting(&mut self, options: &crate::options::LightingOptions) {
        self.lights = LightRig::from_options(options);
    }
}

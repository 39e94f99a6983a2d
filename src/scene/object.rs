//! Scene objects: shape, material and transform.

use glam::{EulerRot, Mat4, Quat, Vec3};

use super::mesh::MeshData;

/// Stable index of an object within its [`Scene`](super::Scene).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub(crate) u32);

impl ObjectId {
    /// Position in the scene's object list.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Handle to a texture slot registered on the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub(crate) u32);

/// RGB color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(pub [f32; 3]);

impl Color {
    /// Pure blue.
    pub const BLUE: Self = Self::from_hex(0x0000ff);
    /// Pure white.
    pub const WHITE: Self = Self::from_hex(0xffffff);

    /// Build from a packed `0xRRGGBB` value.
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self([
            ((hex >> 16) & 0xff) as f32 / 255.0,
            ((hex >> 8) & 0xff) as f32 / 255.0,
            (hex & 0xff) as f32 / 255.0,
        ])
    }

    /// Color with alpha 1, for uniforms.
    #[must_use]
    pub fn to_rgba(self) -> [f32; 4] {
        [self.0[0], self.0[1], self.0[2], 1.0]
    }
}

/// Which faces of a surface are shaded as front faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    /// Only the face the normal points out of.
    #[default]
    Front,
    /// Both faces; back faces shade with the flipped normal.
    Double,
}

/// Surface appearance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Lit by the ambient and directional lights.
    Standard {
        /// Base color, multiplied with the map when present.
        color: Color,
        /// Optional image texture.
        map: Option<TextureId>,
        /// Face shading mode.
        side: Side,
    },
    /// Flat unlit color.
    Basic {
        /// Output color.
        color: Color,
    },
}

impl Material {
    /// Lit solid color, front faces only.
    #[must_use]
    pub const fn standard(hex: u32) -> Self {
        Self::Standard {
            color: Color::from_hex(hex),
            map: None,
            side: Side::Front,
        }
    }

    /// Lit image texture visible from both sides.
    #[must_use]
    pub const fn textured(texture: TextureId) -> Self {
        Self::Standard {
            color: Color::WHITE,
            map: Some(texture),
            side: Side::Double,
        }
    }

    /// Texture this material samples, if any.
    #[must_use]
    pub fn map(&self) -> Option<TextureId> {
        match self {
            Self::Standard { map, .. } => *map,
            Self::Basic { .. } => None,
        }
    }
}

/// Shape an object was generated from, kept for layout queries.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Flat rectangle in the XY plane.
    Plane {
        /// Extent along X.
        width: f32,
        /// Extent along Y.
        height: f32,
    },
    /// Axis-aligned box.
    Cuboid {
        /// Extent along X.
        width: f32,
        /// Extent along Y.
        height: f32,
        /// Extent along Z.
        depth: f32,
    },
    /// Extruded text.
    Text {
        /// Rendered string.
        content: String,
        /// Glyph em size in world units.
        size: f32,
        /// Extrusion depth.
        depth: f32,
    },
}

impl Shape {
    /// Extent along X, or `None` for text.
    #[must_use]
    pub fn width(&self) -> Option<f32> {
        match self {
            Self::Plane { width, .. } | Self::Cuboid { width, .. } => {
                Some(*width)
            }
            Self::Text { .. } => None,
        }
    }

    /// Extent along Y, or `None` for text.
    #[must_use]
    pub fn height(&self) -> Option<f32> {
        match self {
            Self::Plane { height, .. } | Self::Cuboid { height, .. } => {
                Some(*height)
            }
            Self::Text { .. } => None,
        }
    }

    /// Triangle mesh for plane and box shapes. Text meshes come from the
    /// font loader instead.
    #[must_use]
    pub fn primitive_mesh(&self) -> Option<MeshData> {
        match *self {
            Self::Plane { width, height } => {
                Some(MeshData::plane(width, height))
            }
            Self::Cuboid {
                width,
                height,
                depth,
            } => Some(MeshData::cuboid(width, height, depth)),
            Self::Text { .. } => None,
        }
    }
}

/// Animatable transform channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformProperty {
    /// Translation.
    Position,
    /// Euler XYZ rotation in radians.
    Rotation,
    /// Per-axis scale.
    Scale,
}

/// Position, Euler XYZ rotation (radians) and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Translation.
    pub position: Vec3,
    /// Rotation about X, then Y, then Z (intrinsic).
    pub rotation: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Identity transform translated to `position`.
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Current value of a channel.
    #[must_use]
    pub fn get(&self, property: TransformProperty) -> Vec3 {
        match property {
            TransformProperty::Position => self.position,
            TransformProperty::Rotation => self.rotation,
            TransformProperty::Scale => self.scale,
        }
    }

    /// Overwrite a channel.
    pub fn set(&mut self, property: TransformProperty, value: Vec3) {
        match property {
            TransformProperty::Position => self.position = value,
            TransformProperty::Rotation => self.rotation = value,
            TransformProperty::Scale => self.scale = value,
        }
    }

    /// Model matrix: translate * rotate * scale.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(
            self.scale,
            rotation,
            self.position,
        )
    }
}

/// A renderable item in the scene.
#[derive(Debug, Clone)]
pub struct SceneObject {
    /// Lookup name (e.g. `"header"`).
    pub name: String,
    /// Shape the mesh was generated from.
    pub shape: Shape,
    /// Object-space triangles.
    pub mesh: MeshData,
    /// Surface appearance.
    pub material: Material,
    /// Mutable transform; the only field animations touch.
    pub transform: Transform,
    /// Whether the renderer draws the object.
    pub visible: bool,
}

impl SceneObject {
    /// Object for a plane or box shape, with its mesh generated.
    #[must_use]
    pub fn primitive(
        name: &str,
        shape: Shape,
        material: Material,
        position: Vec3,
    ) -> Self {
        let mesh = shape.primitive_mesh().unwrap_or_default();
        Self {
            name: name.to_owned(),
            shape,
            mesh,
            material,
            transform: Transform::at(position),
            visible: true,
        }
    }
}

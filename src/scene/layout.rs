//! Portfolio layout: every size and position is a fixed multiple of the
//! floor width and height.

use glam::Vec3;

use super::object::{Color, Material, SceneObject, Shape, TextureId};
use crate::options::LayoutOptions;

/// Thickness of every box in the layout.
const PANEL_DEPTH: f32 = 0.5;

/// Where the header text sits once its font resolves.
pub const HEADER_TEXT_POSITION: Vec3 = Vec3::new(-19.0, 8.5, 1.0);
/// Header text glyph size in world units.
pub const HEADER_TEXT_SIZE: f32 = 0.5;
/// Header text extrusion depth.
pub const HEADER_TEXT_DEPTH: f32 = 0.2;
/// Segments used to flatten each glyph curve.
pub const HEADER_TEXT_CURVE_SEGMENTS: u32 = 12;
/// How far the header text bevel reaches past each face.
pub const HEADER_TEXT_BEVEL_THICKNESS: f32 = 0.03;
/// How far the header text bevel reaches outward.
pub const HEADER_TEXT_BEVEL_SIZE: f32 = 0.02;
/// Outline offset where the bevel starts.
pub const HEADER_TEXT_BEVEL_OFFSET: f32 = 0.0;
/// Bevel rings per side.
pub const HEADER_TEXT_BEVEL_SEGMENTS: u32 = 5;
/// Header text color.
pub const HEADER_TEXT_COLOR: Color = Color::BLUE;

/// Texture slots the layout's materials refer to.
#[derive(Debug, Clone, Copy)]
pub struct SceneTextures {
    /// Full-screen background.
    pub background: TextureId,
    /// Image on the left panel.
    pub left_image: TextureId,
    /// Image on the right panel.
    pub right_image: TextureId,
}

/// Pure layout arithmetic over the two base constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneLayout {
    /// `flrWidth`.
    pub width: f32,
    /// `flrHeight`.
    pub height: f32,
    /// Whether the floor is drawn.
    pub show_floor: bool,
}

/// Shape and placement of one object, before materials are attached.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// Object name.
    pub name: &'static str,
    /// Object shape.
    pub shape: Shape,
    /// Object position.
    pub position: Vec3,
}

impl SceneLayout {
    /// Layout for the given base constants, floor hidden.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            show_floor: false,
        }
    }

    /// Layout from options.
    #[must_use]
    pub fn from_options(options: &LayoutOptions) -> Self {
        Self {
            show_floor: options.show_floor,
            ..Self::new(options.floor_width, options.floor_height)
        }
    }

    fn cuboid(width: f32, height: f32) -> Shape {
        Shape::Cuboid {
            width,
            height,
            depth: PANEL_DEPTH,
        }
    }

    /// Floor plane.
    #[must_use]
    pub fn floor(&self) -> Placement {
        Placement {
            name: "floor",
            shape: Shape::Plane {
                width: self.width,
                height: self.height,
            },
            position: Vec3::new(-2.0, 0.0, 0.0),
        }
    }

    /// Full-width bar along the top.
    #[must_use]
    pub fn header(&self) -> Placement {
        Placement {
            name: "header",
            shape: Self::cuboid(self.width, self.height * 0.1),
            position: Vec3::new(-2.0, self.height * 0.45, 0.1),
        }
    }

    /// Left half panel.
    #[must_use]
    pub fn left_panel(&self) -> Placement {
        Placement {
            name: "leftPanel",
            shape: Self::cuboid(self.width * 0.5, self.height * 0.9),
            position: Vec3::new(-(self.width * 0.25) - 2.0, -1.0, 0.0),
        }
    }

    /// Image plane in front of the left panel.
    #[must_use]
    pub fn left_image(&self) -> Placement {
        Placement {
            name: "leftImage",
            shape: Shape::Plane {
                width: self.width * 0.25,
                height: self.height * 0.5,
            },
            position: Vec3::new(-(self.width * 0.25), -3.0, 1.0),
        }
    }

    /// Right half panel.
    #[must_use]
    pub fn right_panel(&self) -> Placement {
        Placement {
            name: "rightPanel",
            shape: Self::cuboid(self.width * 0.5, self.height * 0.9),
            position: Vec3::new(self.width * 0.25 - 2.0, -1.0, 0.0),
        }
    }

    /// Image plane in front of the right panel.
    #[must_use]
    pub fn right_image(&self) -> Placement {
        Placement {
            name: "rightImage",
            shape: Shape::Plane {
                width: self.width * 0.2,
                height: self.height * 0.75,
            },
            position: Vec3::new(self.width * 0.25 - 2.0, -1.0, 1.0),
        }
    }

    /// Tall bar on the far right.
    #[must_use]
    pub fn nav_bar(&self) -> Placement {
        Placement {
            name: "navBar",
            shape: Self::cuboid(self.width * 0.1, self.height),
            position: Vec3::new(self.width * 0.25 + 10.0, 0.0, 0.0),
        }
    }

    /// Every solid object with its material, in draw order.
    #[must_use]
    pub fn objects(&self, textures: &SceneTextures) -> Vec<SceneObject> {
        let build = |p: Placement, material: Material| {
            SceneObject::primitive(p.name, p.shape, material, p.position)
        };
        let mut floor = build(self.floor(), Material::standard(0xa9c388));
        floor.visible = self.show_floor;
        vec![
            floor,
            build(self.header(), Material::standard(0xffc8a1)),
            build(self.left_panel(), Material::standard(0xff2a2a)),
            build(self.left_image(), Material::textured(textures.left_image)),
            build(self.right_panel(), Material::standard(0xffffff)),
            build(
                self.right_image(),
                Material::textured(textures.right_image),
            ),
            build(self.nav_bar(), Material::standard(0x3cdfb8)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn textures() -> SceneTextures {
        SceneTextures {
            background: TextureId(0),
            left_image: TextureId(1),
            right_image: TextureId(2),
        }
    }

    #[test]
    fn ratios_hold_for_arbitrary_constants() {
        for (w, h) in [(40.0, 20.0), (12.0, 7.0), (100.0, 3.5), (1.0, 1.0)] {
            let layout = SceneLayout::new(w, h);

            let left = layout.left_panel();
            assert_eq!(left.shape.width(), Some(0.5 * w));
            assert_eq!(left.shape.height(), Some(0.9 * h));
            assert_eq!(left.position.x, -(0.25 * w) - 2.0);

            let right = layout.right_panel();
            assert_eq!(right.shape.width(), Some(0.5 * w));
            assert_eq!(right.position.x, 0.25 * w - 2.0);

            let header = layout.header();
            assert_eq!(header.shape.width(), Some(w));
            assert_eq!(header.shape.height(), Some(0.1 * h));
            assert_eq!(header.position, Vec3::new(-2.0, 0.45 * h, 0.1));

            let left_image = layout.left_image();
            assert_eq!(left_image.shape.width(), Some(0.25 * w));
            assert_eq!(left_image.shape.height(), Some(0.5 * h));
            assert_eq!(left_image.position, Vec3::new(-(0.25 * w), -3.0, 1.0));

            let right_image = layout.right_image();
            assert_eq!(right_image.shape.width(), Some(0.2 * w));
            assert_eq!(right_image.shape.height(), Some(0.75 * h));
            assert_eq!(right_image.position, Vec3::new(0.25 * w - 2.0, -1.0, 1.0));

            let nav = layout.nav_bar();
            assert_eq!(nav.shape.width(), Some(0.1 * w));
            assert_eq!(nav.shape.height(), Some(h));
            assert_eq!(nav.position.x, 0.25 * w + 10.0);

            let floor = layout.floor();
            assert_eq!(floor.shape.width(), Some(w));
            assert_eq!(floor.shape.height(), Some(h));
            assert_eq!(floor.position.x, -2.0);
        }
    }

    #[test]
    fn default_constants_place_left_panel() {
        let left = SceneLayout::new(40.0, 20.0).left_panel();
        assert_eq!(left.position, Vec3::new(-12.0, -1.0, 0.0));
        assert_eq!(left.shape.width(), Some(20.0));
    }

    #[test]
    fn image_planes_are_textured_and_double_sided() {
        let objects = SceneLayout::new(40.0, 20.0).objects(&textures());
        let left = objects.iter().find(|o| o.name == "leftImage").unwrap();
        assert_eq!(left.material, Material::textured(TextureId(1)));
        let right = objects.iter().find(|o| o.name == "rightImage").unwrap();
        assert_eq!(right.material.map(), Some(TextureId(2)));
    }

    #[test]
    fn boxes_share_panel_depth() {
        let layout = SceneLayout::new(40.0, 20.0);
        for placement in [layout.header(), layout.left_panel(), layout.nav_bar()]
        {
            assert!(matches!(
                placement.shape,
                Shape::Cuboid { depth, .. } if depth == PANEL_DEPTH
            ));
        }
    }
}

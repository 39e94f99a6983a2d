//! Extruded 3D text built from typeface outlines.
//!
//! Glyph curves are flattened into polygons, the faces are triangulated
//! with lyon's fill tessellator (non-zero rule, so counters come out as
//! holes), and the contours are swept from z = 0 to z = depth to form the
//! side walls. An optional bevel adds chamfer rings beyond both caps.

use glam::{Vec2, Vec3};
use lyon::geom::{CubicBezierSegment, QuadraticBezierSegment};
use lyon::math::point;
use lyon::path::Path;
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, VertexBuffers,
};

use super::layout::{
    HEADER_TEXT_BEVEL_OFFSET, HEADER_TEXT_BEVEL_SEGMENTS, HEADER_TEXT_BEVEL_SIZE,
    HEADER_TEXT_BEVEL_THICKNESS, HEADER_TEXT_COLOR, HEADER_TEXT_CURVE_SEGMENTS,
    HEADER_TEXT_DEPTH, HEADER_TEXT_POSITION, HEADER_TEXT_SIZE,
};
use super::mesh::{MeshData, MeshVertex};
use super::object::{Material, SceneObject, Shape, Transform};
use crate::assets::font::{OutlineCommand, Typeface};
use crate::error::FolioError;

/// Name the header text object is registered under.
pub const HEADER_TEXT_NAME: &str = "headerText";

/// Chamfer around the extruded body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bevel {
    /// How far the bevel reaches past each cap along Z.
    pub thickness: f32,
    /// How far the bevel reaches outward from the outline.
    pub size: f32,
    /// Outline offset at the caps, where the bevel starts.
    pub offset: f32,
    /// Rings per side.
    pub segments: u32,
}

/// Size and extrusion parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Em size in world units.
    pub size: f32,
    /// Extrusion depth along +Z.
    pub depth: f32,
    /// Line segments per curve.
    pub curve_segments: u32,
    /// Optional chamfer; `None` gives flat walls.
    pub bevel: Option<Bevel>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: HEADER_TEXT_SIZE,
            depth: HEADER_TEXT_DEPTH,
            curve_segments: HEADER_TEXT_CURVE_SEGMENTS,
            bevel: Some(Bevel {
                thickness: HEADER_TEXT_BEVEL_THICKNESS,
                size: HEADER_TEXT_BEVEL_SIZE,
                offset: HEADER_TEXT_BEVEL_OFFSET,
                segments: HEADER_TEXT_BEVEL_SEGMENTS,
            }),
        }
    }
}

/// Flatten outline commands into closed polygons. A repeated closing point
/// is dropped and degenerate contours (fewer than three points) are
/// discarded.
#[must_use]
pub fn flatten_outline(
    commands: &[OutlineCommand],
    curve_segments: u32,
) -> Vec<Vec<Vec2>> {
    let segments = curve_segments.max(1);
    let mut contours: Vec<Vec<Vec2>> = Vec::new();
    let mut current: Vec<Vec2> = Vec::new();
    let to_point = |v: Vec2| point(v.x, v.y);

    for command in commands {
        let last = current.last().copied().unwrap_or(Vec2::ZERO);
        match *command {
            OutlineCommand::MoveTo(p) => {
                contours.push(std::mem::take(&mut current));
                current.push(p);
            }
            OutlineCommand::LineTo(p) => current.push(p),
            OutlineCommand::QuadTo { ctrl, to } => {
                let curve = QuadraticBezierSegment {
                    from: to_point(last),
                    ctrl: to_point(ctrl),
                    to: to_point(to),
                };
                current.extend((1..=segments).map(|i| {
                    let p = curve.sample(i as f32 / segments as f32);
                    Vec2::new(p.x, p.y)
                }));
            }
            OutlineCommand::CubicTo { ctrl1, ctrl2, to } => {
                let curve = CubicBezierSegment {
                    from: to_point(last),
                    ctrl1: to_point(ctrl1),
                    ctrl2: to_point(ctrl2),
                    to: to_point(to),
                };
                current.extend((1..=segments).map(|i| {
                    let p = curve.sample(i as f32 / segments as f32);
                    Vec2::new(p.x, p.y)
                }));
            }
        }
    }
    contours.push(current);

    for contour in &mut contours {
        if contour.len() > 1 && contour.first() == contour.last() {
            let _ = contour.pop();
        }
    }
    contours.retain(|c| c.len() >= 3);
    contours
}

/// Twice the signed area; positive for counter-clockwise polygons.
fn signed_area(contour: &[Vec2]) -> f32 {
    contour
        .iter()
        .zip(contour.iter().cycle().skip(1))
        .map(|(a, b)| a.perp_dot(*b))
        .sum()
}

/// Smallest `1 + cos` between adjacent edge normals before a miter is
/// replaced by the bisector (hairpin turns).
const MIN_MITER_DENOM: f32 = 0.05;

/// Outward normal of edge `a -> b`; `winding` is the sign of the outer
/// contours' area.
fn outward_normal(a: Vec2, b: Vec2, winding: f32) -> Vec2 {
    let edge = b - a;
    Vec2::new(edge.y, -edge.x).normalize_or_zero() * winding
}

/// Per-vertex offset direction that moves both adjacent edges outward by
/// one unit.
fn miter_directions(contour: &[Vec2], winding: f32) -> Vec<Vec2> {
    let n = contour.len();
    (0..n)
        .map(|i| {
            let prev = contour[(i + n - 1) % n];
            let here = contour[i];
            let next = contour[(i + 1) % n];
            let n1 = outward_normal(prev, here, winding);
            let n2 = outward_normal(here, next, winding);
            let denom = 1.0 + n1.dot(n2);
            if denom < MIN_MITER_DENOM {
                (n1 + n2).normalize_or(n1)
            } else {
                (n1 + n2) / denom
            }
        })
        .collect()
}

/// Cross-sections from back to front as `(z, outward offset)`. Without a
/// bevel this is just the two cap planes; with one, each side gets
/// `segments` quarter-circle rings beyond the body.
fn layers(depth: f32, bevel: Option<&Bevel>) -> Vec<(f32, f32)> {
    let Some(bevel) = bevel else {
        return vec![(0.0, 0.0), (depth, 0.0)];
    };
    let segments = bevel.segments.max(1);
    let ring = |i: u32| {
        let t = i as f32 / segments as f32 * std::f32::consts::FRAC_PI_2;
        (
            bevel.thickness * t.cos(),
            bevel.size * t.sin() + bevel.offset,
        )
    };
    let full = bevel.size + bevel.offset;
    let mut out: Vec<(f32, f32)> = (0..segments)
        .map(|i| {
            let (dz, off) = ring(i);
            (-dz, off)
        })
        .collect();
    out.push((0.0, full));
    out.push((depth, full));
    out.extend((0..segments).rev().map(|i| {
        let (dz, off) = ring(i);
        (depth + dz, off)
    }));
    out
}

/// Triangulate the contours into front and back caps and sweep side walls
/// between them. With a bevel, the caps sit `thickness` beyond z = 0 and
/// z = depth and the walls chamfer out to `size + offset`.
pub fn extrude(
    contours: &[Vec<Vec2>],
    depth: f32,
    bevel: Option<&Bevel>,
) -> Result<MeshData, FolioError> {
    let mut mesh = MeshData::default();
    if contours.is_empty() {
        return Ok(mesh);
    }

    // Outer contours dominate the total area, so its sign tells which
    // winding the font uses for outlines; holes wind the other way.
    let winding = signed_area_total(contours).signum();
    let miters: Vec<Vec<Vec2>> = contours
        .iter()
        .map(|c| miter_directions(c, winding))
        .collect();
    let offset_contour = |index: usize, offset: f32| -> Vec<Vec2> {
        contours[index]
            .iter()
            .zip(&miters[index])
            .map(|(p, m)| *p + *m * offset)
            .collect()
    };
    let sections = layers(depth, bevel);
    let (back_z, cap_offset) = sections[0];
    let front_z = sections[sections.len() - 1].0;

    let mut builder = Path::builder();
    for index in 0..contours.len() {
        let contour = offset_contour(index, cap_offset);
        let _ = builder.begin(point(contour[0].x, contour[0].y));
        for p in &contour[1..] {
            let _ = builder.line_to(point(p.x, p.y));
        }
        builder.end(true);
    }
    let path = builder.build();

    let mut caps: VertexBuffers<Vec2, u32> = VertexBuffers::new();
    FillTessellator::new().tessellate_path(
        &path,
        &FillOptions::non_zero(),
        &mut BuffersBuilder::new(&mut caps, |v: FillVertex| {
            Vec2::new(v.position().x, v.position().y)
        }),
    )?;

    let front_base = mesh.vertices.len() as u32;
    for (z, normal) in [(front_z, Vec3::Z), (back_z, Vec3::NEG_Z)] {
        mesh.vertices.extend(caps.vertices.iter().map(|p| MeshVertex {
            position: [p.x, p.y, z],
            normal: normal.to_array(),
            uv: p.to_array(),
        }));
    }
    let back_base = front_base + caps.vertices.len() as u32;
    for tri in caps.indices.chunks_exact(3) {
        let (a, mut b, mut c) = (tri[0], tri[1], tri[2]);
        let [pa, pb, pc] = [a, b, c].map(|i| caps.vertices[i as usize]);
        if (pb - pa).perp_dot(pc - pa) < 0.0 {
            std::mem::swap(&mut b, &mut c);
        }
        mesh.indices
            .extend_from_slice(&[front_base + a, front_base + b, front_base + c]);
        mesh.indices
            .extend_from_slice(&[back_base + a, back_base + c, back_base + b]);
    }

    for (index, contour) in contours.iter().enumerate() {
        let rings: Vec<(f32, Vec<Vec2>)> = sections
            .iter()
            .map(|&(z, offset)| (z, offset_contour(index, offset)))
            .collect();
        for pair in rings.windows(2) {
            let ((z0, lower), (z1, upper)) = (&pair[0], &pair[1]);
            for i in 0..contour.len() {
                let j = (i + 1) % contour.len();
                let outward = outward_normal(contour[i], contour[j], winding);
                push_wall(
                    &mut mesh,
                    [
                        lower[i].extend(*z0),
                        lower[j].extend(*z0),
                        upper[j].extend(*z1),
                        upper[i].extend(*z1),
                    ],
                    outward.extend(0.0),
                );
            }
        }
    }
    Ok(mesh)
}

fn signed_area_total(contours: &[Vec<Vec2>]) -> f32 {
    let total: f32 = contours.iter().map(|c| signed_area(c)).sum();
    if total == 0.0 {
        1.0
    } else {
        total
    }
}

/// One flat side quad `[a, b, b', a']`, wound to face away from the solid.
fn push_wall(mesh: &mut MeshData, corners: [Vec3; 4], outward: Vec3) {
    let base = mesh.vertices.len() as u32;
    let mut normal = (corners[1] - corners[0])
        .cross(corners[3] - corners[0])
        .normalize_or(outward);
    if normal.dot(outward) < 0.0 {
        normal = -normal;
    }
    let uvs = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];
    mesh.vertices
        .extend(corners.iter().zip(uvs).map(|(p, uv)| MeshVertex {
            position: p.to_array(),
            normal: normal.to_array(),
            uv,
        }));
    let facing = (corners[1] - corners[0])
        .cross(corners[2] - corners[0])
        .dot(normal);
    if facing >= 0.0 {
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    } else {
        mesh.indices
            .extend_from_slice(&[base, base + 2, base + 1, base, base + 3, base + 2]);
    }
}

/// Lay out, flatten and extrude `text`.
pub fn text_mesh(
    face: &Typeface,
    text: &str,
    style: &TextStyle,
) -> Result<MeshData, FolioError> {
    let commands = face.layout(text, style.size)?;
    let contours = flatten_outline(&commands, style.curve_segments);
    extrude(&contours, style.depth, style.bevel.as_ref())
}

/// The unlit header text object, ready to append to the scene.
pub fn header_text(face: &Typeface, content: &str) -> Result<SceneObject, FolioError> {
    let style = TextStyle::default();
    let mesh = text_mesh(face, content, &style)?;
    Ok(SceneObject {
        name: HEADER_TEXT_NAME.to_owned(),
        shape: Shape::Text {
            content: content.to_owned(),
            size: style.size,
            depth: style.depth,
        },
        mesh,
        material: Material::Basic {
            color: HEADER_TEXT_COLOR,
        },
        transform: Transform::at(HEADER_TEXT_POSITION),
        visible: true,
    })
}

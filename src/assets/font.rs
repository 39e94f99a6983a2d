//! Typeface JSON fonts: glyph outlines and text layout.
//!
//! The format stores one outline string per glyph, a whitespace-separated
//! list of commands in font units: `m x y`, `l x y`, `q x y cx cy` and
//! `b x y c1x c1y c2x c2y`. Curve commands list their end point first.

use std::str::SplitWhitespace;

use glam::Vec2;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::error::FolioError;

/// Fallback glyph used when a character is missing.
const FALLBACK_GLYPH: &str = "?";

/// Font-unit bounding box of the whole typeface.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
pub struct BoundingBox {
    /// Left edge.
    #[serde(rename = "xMin")]
    pub x_min: f32,
    /// Bottom edge.
    #[serde(rename = "yMin")]
    pub y_min: f32,
    /// Right edge.
    #[serde(rename = "xMax")]
    pub x_max: f32,
    /// Top edge.
    #[serde(rename = "yMax")]
    pub y_max: f32,
}

/// One glyph: horizontal advance plus optional outline.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Glyph {
    /// Horizontal advance in font units.
    pub ha: f32,
    /// Outline command string; absent or empty for whitespace.
    #[serde(default)]
    pub o: Option<String>,
}

/// A parsed typeface.
#[derive(Debug, Clone, Deserialize)]
pub struct Typeface {
    /// Glyphs keyed by the character they render.
    pub glyphs: FxHashMap<String, Glyph>,
    /// Family name, informational only.
    #[serde(rename = "familyName", default)]
    pub family_name: String,
    /// Font units per em.
    pub resolution: f32,
    /// Overall bounds, used for line height.
    #[serde(rename = "boundingBox", default)]
    pub bounding_box: BoundingBox,
    /// Underline thickness, added to the line height.
    #[serde(rename = "underlineThickness", default)]
    pub underline_thickness: f32,
}

/// One outline drawing command in layout space (y up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutlineCommand {
    /// Start a new contour.
    MoveTo(Vec2),
    /// Straight segment.
    LineTo(Vec2),
    /// Quadratic curve.
    QuadTo {
        /// Control point.
        ctrl: Vec2,
        /// End point.
        to: Vec2,
    },
    /// Cubic curve.
    CubicTo {
        /// First control point.
        ctrl1: Vec2,
        /// Second control point.
        ctrl2: Vec2,
        /// End point.
        to: Vec2,
    },
}

impl Typeface {
    /// Parse a typeface JSON document.
    pub fn from_json(json: &str) -> Result<Self, FolioError> {
        let face: Self = serde_json::from_str(json)
            .map_err(|e| FolioError::Font(e.to_string()))?;
        if face.resolution <= 0.0 {
            return Err(FolioError::Font(format!(
                "invalid resolution {}",
                face.resolution
            )));
        }
        Ok(face)
    }

    /// Read and parse a typeface file.
    pub fn load(path: &std::path::Path) -> Result<Self, FolioError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Distance between baselines for glyphs of `size`.
    #[must_use]
    pub fn line_height(&self, size: f32) -> f32 {
        let b = &self.bounding_box;
        (b.y_max - b.y_min + self.underline_thickness) * size / self.resolution
    }

    /// Lay out `text` left to right from the origin, scaled so one em is
    /// `size` units. Newlines return to x = 0 one line lower. Characters
    /// without a glyph fall back to `?`; if that is missing too they are
    /// skipped.
    pub fn layout(
        &self,
        text: &str,
        size: f32,
    ) -> Result<Vec<OutlineCommand>, FolioError> {
        let scale = size / self.resolution;
        let line_height = self.line_height(size);
        let mut offset = Vec2::ZERO;
        let mut commands = Vec::new();
        let mut buf = [0u8; 4];

        for ch in text.chars() {
            if ch == '\n' {
                offset = Vec2::new(0.0, offset.y - line_height);
                continue;
            }
            let key: &str = ch.encode_utf8(&mut buf);
            let Some(glyph) = self
                .glyphs
                .get(key)
                .or_else(|| self.glyphs.get(FALLBACK_GLYPH))
            else {
                log::warn!(
                    "font {:?} has no glyph for {ch:?} and no fallback",
                    self.family_name
                );
                continue;
            };
            if let Some(outline) = glyph.o.as_deref() {
                parse_outline(outline, scale, offset, &mut commands)?;
            }
            offset.x += glyph.ha * scale;
        }
        Ok(commands)
    }
}

/// Parse one glyph outline, appending scaled and offset commands.
fn parse_outline(
    outline: &str,
    scale: f32,
    offset: Vec2,
    out: &mut Vec<OutlineCommand>,
) -> Result<(), FolioError> {
    let mut tokens = outline.split_whitespace();
    let point = |tokens: &mut SplitWhitespace<'_>| {
        read_point(tokens).map(|p| p * scale + offset)
    };

    while let Some(op) = tokens.next() {
        let command = match op {
            "m" => OutlineCommand::MoveTo(point(&mut tokens)?),
            "l" => OutlineCommand::LineTo(point(&mut tokens)?),
            "q" => {
                let to = point(&mut tokens)?;
                let ctrl = point(&mut tokens)?;
                OutlineCommand::QuadTo { ctrl, to }
            }
            "b" => {
                let to = point(&mut tokens)?;
                let ctrl1 = point(&mut tokens)?;
                let ctrl2 = point(&mut tokens)?;
                OutlineCommand::CubicTo { ctrl1, ctrl2, to }
            }
            "z" => continue,
            other => {
                return Err(FolioError::Font(format!(
                    "unknown outline command {other:?}"
                )))
            }
        };
        out.push(command);
    }
    Ok(())
}

fn read_point(tokens: &mut SplitWhitespace<'_>) -> Result<Vec2, FolioError> {
    let mut coord = || {
        let token = tokens.next().ok_or_else(|| {
            FolioError::Font("outline ended mid-command".to_owned())
        })?;
        token
            .parse::<f32>()
            .map_err(|_| FolioError::Font(format!("bad outline number {token:?}")))
    };
    let x = coord()?;
    let y = coord()?;
    Ok(Vec2::new(x, y))
}

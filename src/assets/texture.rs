//! Decoded image data, ready for GPU upload.

use std::path::Path;

use crate::error::FolioError;

/// Tightly packed RGBA8 pixels, rows top to bottom.
#[derive(Clone, PartialEq, Eq)]
pub struct TextureData {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes.
    pub rgba: Vec<u8>,
}

impl std::fmt::Debug for TextureData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextureData")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba.len())
            .finish()
    }
}

impl TextureData {
    /// Decode a PNG or JPEG file.
    pub fn load(path: &Path) -> Result<Self, FolioError> {
        let image = image::open(path)?.to_rgba8();
        Ok(Self::from_image(image))
    }

    /// Decode an in-memory PNG or JPEG.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FolioError> {
        let image = image::load_from_memory(bytes)?.to_rgba8();
        Ok(Self::from_image(image))
    }

    /// Take ownership of an already decoded image.
    #[must_use]
    pub fn from_image(image: image::RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            rgba: image.into_raw(),
        }
    }

    /// A single pixel of one color.
    #[must_use]
    pub fn solid(rgba: [u8; 4]) -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: rgba.to_vec(),
        }
    }

    /// Bytes per row.
    #[must_use]
    pub fn stride(&self) -> u32 {
        self.width * 4
    }
}

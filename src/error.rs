//! Crate-level error types.

use std::fmt;

use crate::gpu::render_context::RenderContextError;

/// Errors produced by the folio crate.
#[derive(Debug)]
pub enum FolioError {
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Failed to spawn a background loader thread.
    ThreadSpawn(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
    /// Typeface JSON could not be parsed or laid out.
    Font(String),
    /// Image decoding failure.
    Texture(String),
    /// Glyph outline tessellation failure.
    Tessellation(String),
}

impl fmt::Display for FolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ThreadSpawn(e) => {
                write!(f, "failed to spawn thread: {e}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
            Self::Font(msg) => write!(f, "font error: {msg}"),
            Self::Texture(msg) => write!(f, "texture error: {msg}"),
            Self::Tessellation(msg) => {
                write!(f, "tessellation error: {msg}")
            }
        }
    }
}

impl std::error::Error for FolioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Io(e) | Self::ThreadSpawn(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RenderContextError> for FolioError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<std::io::Error> for FolioError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<image::ImageError> for FolioError {
    fn from(e: image::ImageError) -> Self {
        Self::Texture(e.to_string())
    }
}

impl From<lyon::tessellation::TessellationError> for FolioError {
    fn from(e: lyon::tessellation::TessellationError) -> Self {
        Self::Tessellation(format!("{e:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_keep_their_source() {
        let err = FolioError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("I/O error"));
    }

    #[test]
    fn message_variants_have_no_source() {
        let err = FolioError::Font("no glyphs".to_owned());
        assert!(std::error::Error::source(&err).is_none());
        assert_eq!(err.to_string(), "font error: no glyphs");
    }
}

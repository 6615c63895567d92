//! Structured error types for pricesheet.
//!
//! These cover the asset-loading seam only (font bytes, logo bytes). The
//! render pipeline itself never returns an error: every failure it can hit
//! is absorbed into a visible fallback and reported through
//! [`crate::render::RenderedSheet::degraded`].

/// All errors that can occur while loading assets for the engine.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    /// The font bytes could not be parsed as a TTF/OTF face.
    #[error("Font parse error: {0}")]
    FontParse(String),

    /// The logo bytes could not be decoded as a raster image.
    #[error("Logo decode: {0}")]
    LogoDecode(#[from] image::ImageError),

    /// I/O error while reading an asset file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SheetError>;

impl From<String> for SheetError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for SheetError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

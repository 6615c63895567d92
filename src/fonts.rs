//! Text metrics provider.
//!
//! Wraps `rusttype` faces behind a small measuring interface. A face that
//! cannot be loaded degrades to a fallback with monospace-equivalent
//! metrics (a fixed em fraction per character), so the rest of the pipeline
//! keeps working with lower-fidelity text instead of failing the render.
//! Fonts are meant to be loaded once at process start and reused read-only
//! across renders; measurement is deterministic for a (face, size, text)
//! triple.

use std::path::Path;

use log::warn;
use rusttype::{Font, Scale};

use crate::error::{Result, SheetError};

/// Advance width of one fallback character, as a fraction of the font size.
pub const FALLBACK_ADVANCE_EM: f32 = 0.6;

/// Fallback line height as a fraction of the font size.
pub const FALLBACK_LINE_EM: f32 = 1.2;

/// Fallback ascent as a fraction of the font size (descent is the rest of
/// [`FALLBACK_LINE_EM`]).
pub const FALLBACK_ASCENT_EM: f32 = 0.8;

/// One loaded face: either a real vector font or the built-in fallback.
#[derive(Clone)]
pub enum Face {
    /// Parsed TTF/OTF face.
    Vector(Font<'static>),
    /// Monospace-equivalent metrics; rendered as greeked glyph boxes.
    Fallback,
}

impl std::fmt::Debug for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vector(_) => f.write_str("Face::Vector"),
            Self::Fallback => f.write_str("Face::Fallback"),
        }
    }
}

impl Face {
    /// Parse a face from font bytes, degrading to [`Face::Fallback`] when
    /// the bytes are not a valid font.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        match Font::try_from_vec(bytes) {
            Some(font) => Self::Vector(font),
            None => {
                warn!("font bytes failed to parse, using fallback metrics");
                Self::Fallback
            }
        }
    }

    /// Strict variant of [`Face::from_bytes`] for callers that want to know
    /// their asset is broken instead of silently degrading.
    pub fn try_from_bytes(bytes: Vec<u8>) -> Result<Self> {
        Font::try_from_vec(bytes)
            .map(Self::Vector)
            .ok_or_else(|| SheetError::FontParse("not a valid TTF/OTF face".to_string()))
    }

    pub fn fallback() -> Self {
        Self::Fallback
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback)
    }

    /// Measured advance width of `text` at `size`, in px.
    ///
    /// For vector faces this is the summed glyph advance including pair
    /// kerning, which is monotone under removal of trailing characters —
    /// the text fitter relies on that.
    pub fn measure(&self, size: f32, text: &str) -> f32 {
        match self {
            Self::Vector(font) => {
                let scale = Scale::uniform(size);
                let mut width = 0.0;
                let mut last = None;
                for ch in text.chars() {
                    let glyph = font.glyph(ch).scaled(scale);
                    if let Some(prev) = last {
                        width += font.pair_kerning(scale, prev, glyph.id());
                    }
                    width += glyph.h_metrics().advance_width;
                    last = Some(glyph.id());
                }
                width
            }
            Self::Fallback => text.chars().count() as f32 * FALLBACK_ADVANCE_EM * size,
        }
    }

    /// Fixed line height for this face at `size`, in px.
    pub fn line_height(&self, size: f32) -> f32 {
        match self {
            Self::Vector(font) => {
                let m = font.v_metrics(Scale::uniform(size));
                m.ascent - m.descent + m.line_gap
            }
            Self::Fallback => FALLBACK_LINE_EM * size,
        }
    }

    /// Ascent above the baseline at `size`, in px.
    pub fn ascent(&self, size: f32) -> f32 {
        match self {
            Self::Vector(font) => font.v_metrics(Scale::uniform(size)).ascent,
            Self::Fallback => FALLBACK_ASCENT_EM * size,
        }
    }

    /// Descent below the baseline at `size`, in px (negative, rusttype
    /// convention).
    pub fn descent(&self, size: f32) -> f32 {
        match self {
            Self::Vector(font) => font.v_metrics(Scale::uniform(size)).descent,
            Self::Fallback => (FALLBACK_ASCENT_EM - FALLBACK_LINE_EM) * size,
        }
    }
}

/// The two faces the sheet uses: regular for cell text and the title, bold
/// for headers. Either may independently degrade to the fallback.
#[derive(Debug, Clone)]
pub struct FontSet {
    pub regular: Face,
    pub bold: Face,
}

impl FontSet {
    /// Build a font set from raw font bytes; `None` or unparsable bytes
    /// degrade that face to the fallback.
    pub fn from_bytes(regular: Option<Vec<u8>>, bold: Option<Vec<u8>>) -> Self {
        let load = |bytes: Option<Vec<u8>>| match bytes {
            Some(b) => Face::from_bytes(b),
            None => {
                warn!("no font bytes supplied, using fallback metrics");
                Face::Fallback
            }
        };
        Self {
            regular: load(regular),
            bold: load(bold),
        }
    }

    /// Load both faces from font files, absorbing read failures into the
    /// fallback. Intended to run once at process start.
    pub fn load(regular: &Path, bold: &Path) -> Self {
        let read = |path: &Path| match std::fs::read(path) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warn!("could not read font {}: {e}", path.display());
                None
            }
        };
        Self::from_bytes(read(regular), read(bold))
    }

    /// A font set with both faces degraded. Useful for tests and headless
    /// environments with no font assets.
    pub fn fallback() -> Self {
        Self {
            regular: Face::Fallback,
            bold: Face::Fallback,
        }
    }

    /// True when any face is running on fallback metrics.
    pub fn degraded(&self) -> bool {
        self.regular.is_fallback() || self.bold.is_fallback()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_measure_is_per_char() {
        let face = Face::fallback();
        assert_eq!(face.measure(20.0, ""), 0.0);
        assert_eq!(face.measure(20.0, "abc"), 3.0 * 0.6 * 20.0);
        // chars, not bytes
        assert_eq!(face.measure(10.0, "ÁÉ…"), 3.0 * 0.6 * 10.0);
    }

    #[test]
    fn test_fallback_line_height_scales() {
        let face = Face::fallback();
        assert_eq!(face.line_height(20.0), 24.0);
        assert_eq!(face.line_height(10.0), 12.0);
    }

    #[test]
    fn test_garbage_bytes_degrade() {
        let face = Face::from_bytes(vec![0, 1, 2, 3]);
        assert!(face.is_fallback());
        assert!(Face::try_from_bytes(vec![0, 1, 2, 3]).is_err());
    }

    #[test]
    fn test_fontset_degraded_flag() {
        assert!(FontSet::fallback().degraded());
        assert!(FontSet::from_bytes(None, None).degraded());
    }
}

//! Color parsing and the fixed engine palette.
//!
//! Brand colors arrive as `#RRGGBB` strings from the persistence
//! collaborator; everything else the engine draws uses the constants below.

use image::Rgba;

/// Canvas background.
pub const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Body text, title, and date stamp.
pub const TEXT: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Brand name inside the colored header band.
pub const BAND_TEXT: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Table rules and outer borders (`#DDDDDD`).
pub const BORDER: Rgba<u8> = Rgba([221, 221, 221, 255]);

/// Placeholder caption for a logo that failed to decode.
pub const ALERT: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Applied when a brand name in the groups has no entry in the ordered
/// brand list (`#778899`).
pub const DEFAULT_BRAND: Rgba<u8> = Rgba([119, 136, 153, 255]);

/// Parse a `#RRGGBB` (or `RRGGBB`) string into an opaque RGBA pixel.
pub fn parse_hex(s: &str) -> Option<Rgba<u8>> {
    let trimmed = s.trim();
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if hex.len() != 6 {
        return None;
    }
    let byte_at = |range| {
        hex.get(range)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
    };
    let r = byte_at(0..2)?;
    let g = byte_at(2..4)?;
    let b = byte_at(4..6)?;
    Some(Rgba([r, g, b, 255]))
}

/// Parse a brand color string, falling back to [`DEFAULT_BRAND`] when the
/// string is not a valid 6-digit hex color.
pub fn parse_hex_or_default(s: &str) -> Rgba<u8> {
    parse_hex(s).unwrap_or(DEFAULT_BRAND)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_with_hash() {
        assert_eq!(parse_hex("#0057B7"), Some(Rgba([0, 0x57, 0xB7, 255])));
    }

    #[test]
    fn test_parse_hex_without_hash() {
        assert_eq!(parse_hex("2E8B57"), Some(Rgba([0x2E, 0x8B, 0x57, 255])));
    }

    #[test]
    fn test_parse_hex_lowercase() {
        assert_eq!(parse_hex("#ddddDD"), Some(BORDER));
    }

    #[test]
    fn test_parse_hex_rejects_bad_input() {
        assert_eq!(parse_hex(""), None);
        assert_eq!(parse_hex("#FFF"), None);
        assert_eq!(parse_hex("#GGGGGG"), None);
        assert_eq!(parse_hex("#AABBCCDD"), None);
    }

    #[test]
    fn test_parse_hex_or_default_falls_back() {
        assert_eq!(parse_hex_or_default("not a color"), DEFAULT_BRAND);
        assert_eq!(parse_hex_or_default("#778899"), DEFAULT_BRAND);
    }
}

//! Text fitting: ellipsis truncation against a pixel budget.

use crate::fonts::Face;

/// Suffix appended to truncated text.
pub const ELLIPSIS: char = '…';

/// Truncate `text` so its measured width fits `max_width` px at `size`.
///
/// Text that already fits is returned unchanged. Otherwise the last
/// character is removed and `trimmed + "…"` re-measured until it fits; if
/// even one character plus the ellipsis is too wide, the ellipsis alone is
/// returned. A linear trim-and-test on purpose — cell strings are short
/// (model names, specs, currency strings) and the simple loop is easy to
/// reason about.
pub fn fit_ellipsis(face: &Face, size: f32, text: &str, max_width: f32) -> String {
    if face.measure(size, text) <= max_width {
        return text.to_string();
    }
    let mut kept: Vec<char> = text.chars().collect();
    while !kept.is_empty() {
        let mut candidate: String = kept.iter().collect();
        candidate.push(ELLIPSIS);
        if face.measure(size, &candidate) <= max_width {
            return candidate;
        }
        kept.pop();
    }
    ELLIPSIS.to_string()
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

    // Fallback metrics: each char is 0.6 * size px wide.
    const SIZE: f32 = 10.0;
    const CHAR_W: f32 = 6.0;

    #[test]
    fn test_fitting_text_is_unchanged() {
        let face = Face::fallback();
        assert_eq!(fit_ellipsis(&face, SIZE, "abc", 3.0 * CHAR_W), "abc");
        assert_eq!(fit_ellipsis(&face, SIZE, "", 0.0), "");
    }

    #[test]
    fn test_truncation_appends_ellipsis() {
        let face = Face::fallback();
        // Budget for 4 chars; "abcdef" must become 3 kept + ellipsis.
        assert_eq!(fit_ellipsis(&face, SIZE, "abcdef", 4.0 * CHAR_W), "abc…");
    }

    #[test]
    fn test_ellipsis_alone_when_nothing_fits() {
        let face = Face::fallback();
        // Room for exactly one char: no kept char plus ellipsis fits.
        assert_eq!(fit_ellipsis(&face, SIZE, "abcdef", CHAR_W), "…");
    }

    #[test]
    fn test_trims_whole_chars_not_bytes() {
        let face = Face::fallback();
        let fitted = fit_ellipsis(&face, SIZE, "ÁÉÍÓÚÑ", 4.0 * CHAR_W);
        assert_eq!(fitted, "ÁÉÍ…");
    }
}

//! Integration tests for text measurement and ellipsis truncation.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use pricesheet::text::fit_ellipsis;
use pricesheet::Face;
use test_case::test_case;

// Fallback metrics: width = 0.6 * size per char.
const SIZE: f32 = 20.0;
const CHAR_W: f32 = 12.0;

#[test_case("SAMSUNG A16" ; "model name")]
#[test_case("4/128GB DUAL SIM" ; "spec string")]
#[test_case("RD$7,500.00" ; "currency string")]
#[test_case("" ; "empty string")]
fn test_fitting_text_passes_through(text: &str) {
    let face = Face::fallback();
    let budget = face.measure(SIZE, text);
    assert_eq!(fit_ellipsis(&face, SIZE, text, budget), text);
}

#[test_case(10.0 * CHAR_W, "A VERY LONG MODEL NAME" ; "generous budget")]
#[test_case(4.0 * CHAR_W, "A VERY LONG MODEL NAME" ; "tight budget")]
#[test_case(1.0 * CHAR_W, "A VERY LONG MODEL NAME" ; "one char budget")]
#[test_case(3.5 * CHAR_W, "ÁÉÍÓÚÑ ACENTOS" ; "multibyte text")]
fn test_truncation_safety(budget: f32, text: &str) {
    let face = Face::fallback();
    let fitted = fit_ellipsis(&face, SIZE, text, budget);
    assert!(
        face.measure(SIZE, &fitted) <= budget,
        "fitted text {fitted:?} is wider than its budget {budget}"
    );
    assert!(fitted.ends_with('…'), "truncated text must end with ellipsis");
}

#[test]
fn test_truncation_is_idempotent() {
    let face = Face::fallback();
    for budget_chars in 1..=12 {
        let budget = budget_chars as f32 * CHAR_W;
        let once = fit_ellipsis(&face, SIZE, "INFINIX HOT 40 PRO 8/256", budget);
        let twice = fit_ellipsis(&face, SIZE, &once, budget);
        assert_eq!(once, twice, "re-fitting changed the text at budget {budget}");
    }
}

#[test]
fn test_ellipsis_alone_when_no_char_fits() {
    let face = Face::fallback();
    // Room for the ellipsis but nothing else.
    let fitted = fit_ellipsis(&face, SIZE, "WIDE", CHAR_W);
    assert_eq!(fitted, "…");
}

#[test]
fn test_measure_is_monotone_under_prefix_trim() {
    let face = Face::fallback();
    let text = "SAMSUNG GALAXY TAB A9 WIFI 64GB";
    let mut chars: Vec<char> = text.chars().collect();
    let mut last = face.measure(SIZE, text);
    while chars.pop().is_some() {
        let shorter: String = chars.iter().collect();
        let w = face.measure(SIZE, &shorter);
        assert!(w <= last, "removing a trailing char must not widen text");
        last = w;
    }
}

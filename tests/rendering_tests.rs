//! End-to-end rendering tests for the canvas composer.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

mod common;

use chrono::NaiveDate;
use image::Rgba;
use pricesheet::{group_by_brand, render_sheet, BrandGroups, SheetConfig};

fn fixed_date() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2026, 8, 28)
}

#[test]
fn test_renders_are_deterministic() {
    let fonts = common::fallback_fonts();
    let cfg = SheetConfig::default();
    let roster = common::roster();
    let groups = common::groups_of(&[("Samsung", 4), ("Tecno", 2), ("ZTE", 7)]);
    let logo = common::png_logo(60, 40);

    let first = render_sheet(
        &fonts,
        &cfg,
        roster.as_slice(),
        &groups,
        Some(&logo),
        fixed_date(),
    );
    let second = render_sheet(
        &fonts,
        &cfg,
        roster.as_slice(),
        &groups,
        Some(&logo),
        fixed_date(),
    );
    assert_eq!(first.font_size, second.font_size);
    assert_eq!(
        first.image.as_raw(),
        second.image.as_raw(),
        "identical inputs must produce bit-identical bitmaps"
    );
}

#[test]
fn test_empty_selection_renders_minimum_canvas() {
    let fonts = common::fallback_fonts();
    let cfg = SheetConfig::default();
    let roster = common::roster();
    let sheet = render_sheet(
        &fonts,
        &cfg,
        roster.as_slice(),
        &BrandGroups::new(),
        None,
        fixed_date(),
    );
    assert_eq!(sheet.image.width(), cfg.canvas_width);
    assert_eq!(sheet.image.height(), cfg.min_height as u32);
    // No brand tables: the table region below the header is untouched.
    let below_tables = sheet.image.get_pixel(540, 400);
    assert_eq!(*below_tables, Rgba([255, 255, 255, 255]));
}

#[test]
fn test_canvas_grows_with_dense_content() {
    let fonts = common::fallback_fonts();
    let cfg = SheetConfig::default();
    let roster = common::roster();
    let groups = common::groups_of(&[("Samsung", 40), ("Tecno", 40), ("ZTE", 40)]);
    let sheet = render_sheet(&fonts, &cfg, roster.as_slice(), &groups, None, fixed_date());
    assert!(
        sheet.image.height() > cfg.min_height as u32,
        "content needing more than the minimum must grow the canvas"
    );
}

#[test]
fn test_brand_band_uses_brand_color() {
    let fonts = common::fallback_fonts();
    let cfg = SheetConfig::default();
    let roster = common::roster();
    let groups = common::groups_of(&[("Samsung", 1)]);
    let sheet = render_sheet(&fonts, &cfg, roster.as_slice(), &groups, None, fixed_date());
    // Left edge of the first brand band in column 0 (#0057B7), away from
    // the centered brand name.
    let band = sheet.image.get_pixel(60, 225);
    assert_eq!(*band, Rgba([0x00, 0x57, 0xB7, 255]));
}

/// A brand present in the groups with zero items keeps its band visible
/// but draws no table below it.
#[test]
fn test_empty_brand_group_renders_band_only() {
    let fonts = common::fallback_fonts();
    let cfg = SheetConfig::default();
    let roster = common::roster();
    let mut groups = BrandGroups::new();
    groups.insert("SAMSUNG".to_string(), Vec::new());
    let sheet = render_sheet(&fonts, &cfg, roster.as_slice(), &groups, None, fixed_date());
    let band = sheet.image.get_pixel(60, 225);
    assert_eq!(*band, Rgba([0x00, 0x57, 0xB7, 255]));
    // Just below the band: background, not a sub-header or border.
    let below = sheet.image.get_pixel(60, 250);
    assert_eq!(*below, Rgba([255, 255, 255, 255]));
}

/// Model names wider than the cell budget truncate: differences beyond the
/// truncation point must not reach the bitmap.
#[test]
fn test_overlong_model_names_truncate_in_render() {
    let fonts = common::fallback_fonts();
    let cfg = SheetConfig::default();
    let roster = common::roster();

    let long_a = vec![common::item("Samsung", "AAAAAAAAAAAAAAAAAAAAX", "4GB", 100.0)];
    let long_b = vec![common::item("Samsung", "AAAAAAAAAAAAAAAAAAAAY", "4GB", 100.0)];
    let sheet_a = render_sheet(
        &fonts,
        &cfg,
        roster.as_slice(),
        &group_by_brand(&long_a),
        None,
        fixed_date(),
    );
    let sheet_b = render_sheet(
        &fonts,
        &cfg,
        roster.as_slice(),
        &group_by_brand(&long_b),
        None,
        fixed_date(),
    );
    assert_eq!(
        sheet_a.image.as_raw(),
        sheet_b.image.as_raw(),
        "text past the truncation point must not affect the render"
    );
}

#[test]
fn test_logo_is_composited() {
    let fonts = common::fallback_fonts();
    let cfg = SheetConfig::default();
    let roster = common::roster();
    let groups = common::groups_of(&[("Samsung", 1)]);
    let logo = common::png_logo(50, 50);
    let with_logo = render_sheet(
        &fonts,
        &cfg,
        roster.as_slice(),
        &groups,
        Some(&logo),
        fixed_date(),
    );
    // Logo is centered at x = (1080 - 50) / 2 = 515, y = 40.
    let inside = with_logo.image.get_pixel(530, 60);
    assert_eq!(*inside, Rgba([10, 20, 200, 255]));

    let without = render_sheet(&fonts, &cfg, roster.as_slice(), &groups, None, fixed_date());
    assert_ne!(with_logo.image.as_raw(), without.image.as_raw());
}

#[test]
fn test_undecodable_logo_draws_red_caption_and_degrades() {
    let fonts = common::fallback_fonts();
    let cfg = SheetConfig::default();
    let roster = common::roster();
    let groups = common::groups_of(&[("Samsung", 1)]);
    let sheet = render_sheet(
        &fonts,
        &cfg,
        roster.as_slice(),
        &groups,
        Some(&[0x01, 0x02, 0x03]),
        fixed_date(),
    );
    assert!(sheet.degraded);
    let red_pixels = sheet
        .image
        .pixels()
        .filter(|p| **p == Rgba([255, 0, 0, 255]))
        .count();
    assert!(red_pixels > 0, "invalid-logo caption should be drawn in red");
}

#[test]
fn test_fallback_fonts_set_degraded_flag() {
    let fonts = common::fallback_fonts();
    let cfg = SheetConfig::default();
    let roster = common::roster();
    let groups = common::groups_of(&[("Samsung", 1)]);
    let sheet = render_sheet(&fonts, &cfg, roster.as_slice(), &groups, None, fixed_date());
    assert!(sheet.degraded);
    assert_eq!(sheet.font_size, cfg.nominal_size);
}

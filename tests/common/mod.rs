//! Common test fixtures for the pricesheet integration tests.
//!
//! All fixtures run on fallback font metrics (0.6 em per character) so the
//! tests are deterministic without shipping font assets.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic,
    clippy::cast_possible_truncation
)]

use pricesheet::{BrandGroups, BrandRoster, CatalogItem, FontSet, WorkingSelection};

/// Font set with both faces on fallback metrics.
pub fn fallback_fonts() -> FontSet {
    FontSet::fallback()
}

/// A small three-brand roster in a fixed order.
pub fn roster() -> BrandRoster {
    let mut r = BrandRoster::new();
    assert!(r.add("Samsung", "#0057B7"));
    assert!(r.add("Tecno", "#20B2AA"));
    assert!(r.add("ZTE", "#00BFFF"));
    r
}

/// Build a catalog item with a formatted price string.
pub fn item(brand: &str, model: &str, specs: &str, price: f64) -> CatalogItem {
    CatalogItem::new(brand, model, specs, price, &format!("RD${price:.0}"))
}

/// A working selection with `counts[i]` items for each named brand.
pub fn selection_of(counts: &[(&str, usize)]) -> WorkingSelection {
    let mut sel = WorkingSelection::new();
    for &(brand, n) in counts {
        for i in 0..n {
            assert!(sel.insert(item(brand, &format!("Model {i}"), "4/128GB", 5000.0)));
        }
    }
    sel
}

/// Groups built straight from [`selection_of`].
pub fn groups_of(counts: &[(&str, usize)]) -> BrandGroups {
    pricesheet::group_by_brand(selection_of(counts).items())
}

/// Encode a solid-color PNG for logo tests.
pub fn png_logo(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 200, 255]));
    let mut bytes = Vec::new();
    img.write_to(
        &mut std::io::Cursor::new(&mut bytes),
        image::ImageOutputFormat::Png,
    )
    .expect("PNG encoding failed");
    bytes
}

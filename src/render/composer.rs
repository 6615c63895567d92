//! Canvas composition: sizing pass, header (logo, title, date), tables.
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use chrono::{Local, NaiveDate};
use image::imageops::FilterType;
use image::{GrayImage, Rgba, RgbaImage};
use log::{debug, warn};

use crate::color;
use crate::config::SheetConfig;
use crate::fonts::FontSet;
use crate::layout::{estimate_height, solve};
use crate::types::{Brand, BrandGroups};

use super::primitives::{Anchor, Canvas};
use super::table::draw_tables;

/// Output of one render call.
///
/// The engine never fails: every problem it can hit (missing fonts, broken
/// logo bytes, content too dense for any candidate size) degrades to a
/// visible fallback instead, and `degraded` reports that any fallback
/// fired.
pub struct RenderedSheet {
    pub image: RgbaImage,
    /// Font size chosen by the auto-fit solver.
    pub font_size: u32,
    /// True when a fallback fired: fallback font metrics, undecodable logo
    /// bytes, or the auto-fit floor.
    pub degraded: bool,
}

/// Render one price sheet.
///
/// Two passes: a sizing pass runs the height estimator at the nominal font
/// size to fix the canvas height (never below the configured minimum), then
/// the draw pass allocates the bitmap and draws the logo, title, date
/// stamp, and the two balanced table columns. Deterministic for identical
/// inputs; the call takes a read-only snapshot and keeps no state between
/// invocations.
pub fn render_sheet(
    fonts: &FontSet,
    cfg: &SheetConfig,
    order: &[Brand],
    groups: &BrandGroups,
    logo: Option<&[u8]>,
    date: Option<NaiveDate>,
) -> RenderedSheet {
    let required =
        estimate_height(order, groups, cfg.base_spacing, cfg.header_offset) + cfg.bottom_margin;
    let budget = required.max(cfg.min_height);
    debug!("sizing pass: required {required}, canvas height {budget}");

    let fit = solve(order, groups, cfg, budget);
    let mut degraded = fonts.degraded() || fit.floored;

    let mut canvas = Canvas::new(cfg.canvas_width, budget as u32, color::BACKGROUND);
    let width = cfg.canvas_width as f32;
    let band_size = (cfg.brand_header_size * cfg.scale_ratio(fit.size)).trunc();

    // Caption baseline for both logo placeholders.
    let caption = |canvas: &mut Canvas, text: &str, fill: Rgba<u8>| {
        canvas.draw_text(
            &fonts.bold,
            band_size,
            width / 2.0,
            cfg.logo_y + 50.0,
            Anchor::BaselineCenter,
            fill,
            text,
        );
    };
    match logo {
        Some(bytes) => match image::load_from_memory(bytes) {
            Ok(decoded) => draw_logo(&mut canvas, cfg, &decoded),
            Err(e) => {
                warn!("logo bytes failed to decode: {e}");
                caption(&mut canvas, &cfg.logo_invalid, color::ALERT);
                degraded = true;
            }
        },
        None => caption(&mut canvas, &cfg.logo_placeholder, color::TEXT),
    }

    canvas.draw_text(
        &fonts.regular,
        cfg.title_size,
        cfg.title_x,
        cfg.title_y,
        Anchor::TopLeft,
        color::TEXT,
        &cfg.title,
    );
    let date_txt = date
        .unwrap_or_else(|| Local::now().date_naive())
        .format(&cfg.date_format)
        .to_string();
    let date_x = width - fonts.regular.measure(cfg.title_size, &date_txt) - cfg.title_x;
    canvas.draw_text(
        &fonts.regular,
        cfg.title_size,
        date_x,
        cfg.title_y,
        Anchor::TopLeft,
        color::TEXT,
        &date_txt,
    );

    draw_tables(&mut canvas, fonts, cfg, order, groups, fit);

    RenderedSheet {
        image: canvas.into_image(),
        font_size: fit.size,
        degraded,
    }
}

/// Composite the logo, horizontally centered with a soft drop shadow.
///
/// The logo is scaled down to fit the configured box (aspect preserved,
/// never enlarged). The shadow is the logo's alpha channel, Gaussian
/// blurred and composited in black at reduced opacity below and to the
/// right of the logo.
fn draw_logo(canvas: &mut Canvas, cfg: &SheetConfig, decoded: &image::DynamicImage) {

    let logo = if decoded.width() > cfg.logo_box || decoded.height() > cfg.logo_box {
        decoded
            .resize(cfg.logo_box, cfg.logo_box, FilterType::Lanczos3)
            .to_rgba8()
    } else {
        decoded.to_rgba8()
    };

    let mask = GrayImage::from_fn(logo.width(), logo.height(), |x, y| {
        image::Luma([logo.get_pixel(x, y).0[3]])
    });
    let shadow = image::imageops::blur(&mask, cfg.shadow_sigma);

    let x = i64::from(cfg.canvas_width.saturating_sub(logo.width()) / 2);
    let y = cfg.logo_y as i64;
    let offset = i64::from(cfg.shadow_offset);
    let peak = f32::from(cfg.shadow_alpha) / 255.0;
    for (sx, sy, pixel) in shadow.enumerate_pixels() {
        let alpha = f32::from(pixel.0[0]) / 255.0 * peak;
        canvas.blend_pixel(
            x + offset + i64::from(sx),
            y + offset + i64::from(sy),
            Rgba([0, 0, 0, 255]),
            alpha,
        );
    }
    canvas.overlay(&logo, x, y);
}

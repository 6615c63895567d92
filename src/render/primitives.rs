//! CPU drawing primitives over an RGBA buffer.
//!
//! The canvas is always opaque (the sheet background is filled at creation)
//! so blending writes alpha 255. All geometry is clamped to the buffer
//! before converting to pixel indices.
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use image::{Rgba, RgbaImage};
use rusttype::{point, Scale};

use crate::fonts::{Face, FALLBACK_ADVANCE_EM};

/// How the (x, y) passed to [`Canvas::draw_text`] anchors the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// x = left edge, y = top of the line box.
    TopLeft,
    /// x = horizontal center, y = vertical center of the line box.
    Center,
    /// x = horizontal center, y = baseline.
    BaselineCenter,
}

/// A fixed-size opaque RGBA canvas.
pub struct Canvas {
    img: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Self {
        Self {
            img: RgbaImage::from_pixel(width, height, background),
        }
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    pub fn into_image(self) -> RgbaImage {
        self.img
    }

    /// Fill an axis-aligned rectangle, clamped to the canvas.
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba<u8>) {
        let x0 = x.max(0.0) as u32;
        let y0 = y.max(0.0) as u32;
        let x1 = ((x + w).max(0.0) as u32).min(self.img.width());
        let y1 = ((y + h).max(0.0) as u32).min(self.img.height());
        for py in y0..y1 {
            for px in x0..x1 {
                self.img.put_pixel(px, py, color);
            }
        }
    }

    /// 1px horizontal line from `x0` to `x1` at `y`.
    pub fn hline(&mut self, x0: f32, x1: f32, y: f32, color: Rgba<u8>) {
        self.fill_rect(x0.min(x1), y, (x1 - x0).abs(), 1.0, color);
    }

    /// 1px vertical line from `y0` to `y1` at `x`.
    pub fn vline(&mut self, x: f32, y0: f32, y1: f32, color: Rgba<u8>) {
        self.fill_rect(x, y0.min(y1), 1.0, (y1 - y0).abs(), color);
    }

    /// 1px rectangle outline.
    pub fn outline_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba<u8>) {
        self.hline(x, x + w, y, color);
        self.hline(x, x + w, y + h, color);
        self.vline(x, y, y + h, color);
        self.vline(x + w, y, y + h, color);
    }

    /// Blend `color` over the pixel at (x, y) with the given coverage in
    /// `[0, 1]`. Out-of-bounds coordinates are ignored.
    pub fn blend_pixel(&mut self, x: i64, y: i64, color: Rgba<u8>, coverage: f32) {
        if x < 0 || y < 0 || coverage <= 0.0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.img.width() || y >= self.img.height() {
            return;
        }
        let a = coverage.min(1.0);
        let inv = 1.0 - a;
        let dst = self.img.get_pixel_mut(x, y);
        let Rgba([r, g, b, _]) = color;
        dst.0 = [
            (f32::from(r) * a + f32::from(dst.0[0]) * inv) as u8,
            (f32::from(g) * a + f32::from(dst.0[1]) * inv) as u8,
            (f32::from(b) * a + f32::from(dst.0[2]) * inv) as u8,
            255,
        ];
    }

    /// Alpha-composite an RGBA image onto the canvas with its top-left
    /// corner at (x, y).
    pub fn overlay(&mut self, over: &RgbaImage, x: i64, y: i64) {
        for (ox, oy, pixel) in over.enumerate_pixels() {
            let Rgba([_, _, _, a]) = *pixel;
            if a == 0 {
                continue;
            }
            self.blend_pixel(
                x + i64::from(ox),
                y + i64::from(oy),
                *pixel,
                f32::from(a) / 255.0,
            );
        }
    }

    /// Draw a single line of text. Vector faces rasterize real glyph
    /// coverage; the fallback face draws one greeked box per non-space
    /// character so degraded output stays visible and deterministic.
    pub fn draw_text(
        &mut self,
        face: &Face,
        size: f32,
        x: f32,
        y: f32,
        anchor: Anchor,
        color: Rgba<u8>,
        text: &str,
    ) {
        let width = face.measure(size, text);
        let ascent = face.ascent(size);
        let descent = face.descent(size);
        let (start_x, baseline) = match anchor {
            Anchor::TopLeft => (x, y + ascent),
            // Line box spans [baseline - ascent, baseline - descent].
            Anchor::Center => (x - width / 2.0, y + (ascent + descent) / 2.0),
            Anchor::BaselineCenter => (x - width / 2.0, y),
        };
        match face {
            Face::Vector(font) => {
                let scale = Scale::uniform(size);
                for glyph in font.layout(text, scale, point(start_x, baseline)) {
                    if let Some(bb) = glyph.pixel_bounding_box() {
                        glyph.draw(|gx, gy, coverage| {
                            self.blend_pixel(
                                i64::from(bb.min.x) + i64::from(gx),
                                i64::from(bb.min.y) + i64::from(gy),
                                color,
                                coverage,
                            );
                        });
                    }
                }
            }
            Face::Fallback => {
                let advance = FALLBACK_ADVANCE_EM * size;
                let box_h = advance;
                let mut caret = start_x;
                for ch in text.chars() {
                    if !ch.is_whitespace() {
                        self.fill_rect(
                            caret + 1.0,
                            baseline - box_h,
                            (advance - 2.0).max(1.0),
                            box_h,
                            color,
                        );
                    }
                    caret += advance;
                }
            }
        }
    }
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

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    #[test]
    fn test_fill_rect_is_clamped() {
        let mut canvas = Canvas::new(10, 10, WHITE);
        canvas.fill_rect(-5.0, -5.0, 100.0, 100.0, BLACK);
        let img = canvas.into_image();
        assert_eq!(*img.get_pixel(0, 0), BLACK);
        assert_eq!(*img.get_pixel(9, 9), BLACK);
    }

    #[test]
    fn test_blend_pixel_full_coverage_replaces() {
        let mut canvas = Canvas::new(4, 4, WHITE);
        canvas.blend_pixel(1, 1, BLACK, 1.0);
        canvas.blend_pixel(100, 100, BLACK, 1.0); // ignored
        let img = canvas.into_image();
        assert_eq!(*img.get_pixel(1, 1), BLACK);
        assert_eq!(*img.get_pixel(2, 2), WHITE);
    }

    #[test]
    fn test_fallback_text_marks_pixels() {
        let mut canvas = Canvas::new(100, 40, WHITE);
        canvas.draw_text(
            &Face::fallback(),
            20.0,
            0.0,
            0.0,
            Anchor::TopLeft,
            BLACK,
            "ab",
        );
        let img = canvas.into_image();
        let dark = img.pixels().filter(|p| p.0[0] == 0).count();
        assert!(dark > 0, "greeked boxes should be drawn");
    }

    #[test]
    fn test_spaces_leave_no_ink() {
        let mut canvas = Canvas::new(100, 40, WHITE);
        canvas.draw_text(
            &Face::fallback(),
            20.0,
            0.0,
            0.0,
            Anchor::TopLeft,
            BLACK,
            "   ",
        );
        let img = canvas.into_image();
        assert!(img.pixels().all(|p| *p == WHITE));
    }
}

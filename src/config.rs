//! Layout configuration for the price sheet.
//!
//! Every hand-tuned constant of the engine lives here as a named field so
//! callers can tune them. The defaults reproduce the shipped sheet: a
//! 1080px-wide canvas, two 440px columns, and the compact spacing the
//! auto-fit solver scales down when content is dense. The width fractions
//! and margins have no derivation beyond visual tuning; treat them as
//! adjustable, not as invariants.

/// Vertical spacing constants at one font size.
///
/// The estimator, the auto-fit solver, and the renderer all consume the
/// same `RowSpacing` value so their geometry can never diverge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowSpacing {
    /// Height of one table row (sub-header or item), in px.
    pub row: f32,
    /// Height of the colored brand header band, in px.
    pub brand_header: f32,
    /// Gap between consecutive brand blocks in a column, in px.
    pub gap: f32,
}

impl RowSpacing {
    /// Scale all three constants by `ratio`, truncating toward zero so a
    /// scaled spacing is always whole pixels.
    #[must_use]
    pub fn scaled(self, ratio: f32) -> Self {
        Self {
            row: (self.row * ratio).trunc(),
            brand_header: (self.brand_header * ratio).trunc(),
            gap: (self.gap * ratio).trunc(),
        }
    }
}

/// Full configuration for one rendered sheet.
#[derive(Debug, Clone)]
pub struct SheetConfig {
    /// Canvas width in px; the canvas height is computed per render.
    pub canvas_width: u32,
    /// Lower bound on canvas height.
    pub min_height: f32,
    /// Vertical space reserved above the table region during estimation
    /// (logo + title + date band); both column accumulators start here.
    pub header_offset: f32,
    /// Margin added below the estimated content in the sizing pass.
    pub bottom_margin: f32,
    /// Horizontal reserve subtracted from the canvas width before splitting
    /// the remainder into two columns.
    pub column_reserve: f32,
    /// X of the left edge of column 0.
    pub left_margin: f32,
    /// Horizontal gap between the two columns.
    pub column_gap: f32,

    /// Font size the sizing pass runs at; top of the auto-fit range.
    pub nominal_size: u32,
    /// Bottom of the auto-fit range, used unconditionally when nothing fits.
    pub floor_size: u32,
    /// The auto-fit solver accepts a size only when the estimated height is
    /// strictly below `budget - safety_margin`.
    pub safety_margin: f32,
    /// Spacing constants at the nominal size; auto-fit scales these.
    pub base_spacing: RowSpacing,

    /// Brand band text size at the nominal font size (scaled by auto-fit).
    pub brand_header_size: f32,
    /// Title and date stamp size (never scaled by auto-fit).
    pub title_size: f32,
    /// Title position; the date stamp shares `title_y`.
    pub title_x: f32,
    pub title_y: f32,
    /// Y where the table region starts drawing.
    pub table_top: f32,

    /// Pixels subtracted from each cell's width budget before fitting text.
    pub cell_pad: f32,
    /// Fraction of the column width given to the model cell.
    pub model_fraction: f32,
    /// Fraction of the column width given to the spec cell; the price cell
    /// takes the remainder.
    pub spec_fraction: f32,

    /// Logo bounding box (square side, px); logos are never enlarged.
    pub logo_box: u32,
    /// Y of the logo's top edge.
    pub logo_y: f32,
    /// Gaussian blur sigma applied to the drop shadow.
    pub shadow_sigma: f32,
    /// Shadow offset, applied on both axes.
    pub shadow_offset: u32,
    /// Peak shadow opacity (0-255).
    pub shadow_alpha: u8,

    /// Title line drawn above the table region.
    pub title: String,
    /// Sub-header captions for the three cells.
    pub caption_model: String,
    pub caption_spec: String,
    pub caption_price: String,
    /// Caption drawn when no logo is supplied.
    pub logo_placeholder: String,
    /// Caption drawn when the supplied logo bytes do not decode.
    pub logo_invalid: String,
    /// `chrono` format string for the date stamp.
    pub date_format: String,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            canvas_width: 1080,
            min_height: 1500.0,
            header_offset: 200.0,
            bottom_margin: 20.0,
            column_reserve: 200.0,
            left_margin: 50.0,
            column_gap: 70.0,
            nominal_size: 20,
            floor_size: 12,
            safety_margin: 40.0,
            base_spacing: RowSpacing {
                row: 25.0,
                brand_header: 30.0,
                gap: 3.0,
            },
            brand_header_size: 28.0,
            title_size: 26.0,
            title_x: 50.0,
            title_y: 180.0,
            table_top: 210.0,
            cell_pad: 15.0,
            model_fraction: 0.40,
            spec_fraction: 0.25,
            logo_box: 180,
            logo_y: 40.0,
            shadow_sigma: 4.0,
            shadow_offset: 5,
            shadow_alpha: 100,
            title: "Wholesale Price List (Updated Regularly)".to_string(),
            caption_model: "MODEL".to_string(),
            caption_spec: "SPECS".to_string(),
            caption_price: "PRICE".to_string(),
            logo_placeholder: "ADD LOGO".to_string(),
            logo_invalid: "INVALID LOGO".to_string(),
            date_format: "%d/%m/%Y".to_string(),
        }
    }
}

impl SheetConfig {
    /// Width of one layout column in px.
    #[must_use]
    pub fn column_width(&self) -> f32 {
        ((self.canvas_width as f32 - self.column_reserve) / 2.0).trunc()
    }

    /// X of the left edge of column `index` (0 or 1).
    #[must_use]
    pub fn column_x(&self, index: usize) -> f32 {
        self.left_margin + index as f32 * (self.column_width() + self.column_gap)
    }

    /// Ratio by which auto-fit scales typography at `size`.
    #[must_use]
    pub fn scale_ratio(&self, size: u32) -> f32 {
        size as f32 / self.nominal_size as f32
    }
}

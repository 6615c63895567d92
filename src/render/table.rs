//! Brand table rendering: header bands, sub-headers, item rows, rules.

use crate::color;
use crate::config::SheetConfig;
use crate::fonts::FontSet;
use crate::layout::{plan_columns, AutoFit};
use crate::text::fit_ellipsis;
use crate::types::{Brand, BrandGroups};

use super::primitives::{Anchor, Canvas};

/// Draw both columns of brand tables below the sheet header.
///
/// Re-runs the same greedy fold the estimator used, this time keeping the
/// column membership lists, then draws each brand block top to bottom.
pub fn draw_tables(
    canvas: &mut Canvas,
    fonts: &FontSet,
    cfg: &SheetConfig,
    order: &[Brand],
    groups: &BrandGroups,
    fit: AutoFit,
) {
    let plans = plan_columns(order, groups, fit.spacing, cfg.table_top);
    let col_w = cfg.column_width();
    let band_size = (cfg.brand_header_size * cfg.scale_ratio(fit.size)).trunc();
    let text_size = fit.size as f32;
    let spacing = fit.spacing;

    let model_w = col_w * cfg.model_fraction;
    let spec_w = col_w * cfg.spec_fraction;
    let price_w = col_w - model_w - spec_w;

    for (col_idx, plan) in plans.iter().enumerate() {
        let x = cfg.column_x(col_idx);
        let mut y = cfg.table_top;
        for brand_name in &plan.brands {
            let items = groups.get(brand_name).map(Vec::as_slice).unwrap_or(&[]);
            let band_color = order
                .iter()
                .find(|b| &b.name == brand_name)
                .map(|b| color::parse_hex_or_default(&b.color))
                .unwrap_or(color::DEFAULT_BRAND);

            canvas.fill_rect(x, y, col_w, spacing.brand_header, band_color);
            canvas.draw_text(
                &fonts.bold,
                band_size,
                x + col_w / 2.0,
                y + spacing.brand_header / 2.0,
                Anchor::Center,
                color::BAND_TEXT,
                brand_name,
            );
            y += spacing.brand_header;

            // An empty brand keeps its band visible but draws no table.
            if items.is_empty() {
                continue;
            }

            let col1_x = x;
            let col2_x = x + model_w;
            let col3_x = x + model_w + spec_w;
            let table_start = y;
            y += spacing.row;

            let captions = [
                (col1_x + model_w / 2.0, cfg.caption_model.as_str()),
                (col2_x + spec_w / 2.0, cfg.caption_spec.as_str()),
                (col3_x + price_w / 2.0, cfg.caption_price.as_str()),
            ];
            for (cx, caption) in captions {
                canvas.draw_text(
                    &fonts.bold,
                    text_size,
                    cx,
                    table_start + spacing.row / 2.0,
                    Anchor::Center,
                    color::TEXT,
                    caption,
                );
            }

            for item in items {
                let row_y = y;
                y += spacing.row;
                let model = fit_ellipsis(
                    &fonts.regular,
                    text_size,
                    &item.model.to_uppercase(),
                    model_w - cfg.cell_pad,
                );
                let spec = fit_ellipsis(
                    &fonts.regular,
                    text_size,
                    &item.specs.to_uppercase(),
                    spec_w - cfg.cell_pad,
                );
                let price = fit_ellipsis(
                    &fonts.regular,
                    text_size,
                    &item.price_display,
                    price_w - cfg.cell_pad,
                );
                let cells = [
                    (col1_x + model_w / 2.0, model),
                    (col2_x + spec_w / 2.0, spec),
                    (col3_x + price_w / 2.0, price),
                ];
                for (cx, cell_text) in cells {
                    canvas.draw_text(
                        &fonts.regular,
                        text_size,
                        cx,
                        row_y + spacing.row / 2.0,
                        Anchor::Center,
                        color::TEXT,
                        &cell_text,
                    );
                }
            }

            // Rules go on top of the cell text, same as the band geometry:
            // one horizontal rule per row boundary, two interior verticals,
            // and the outer border.
            let table_end = y;
            for i in 0..=items.len() + 1 {
                let rule_y = table_start + i as f32 * spacing.row;
                canvas.hline(x, x + col_w, rule_y, color::BORDER);
            }
            canvas.vline(col2_x, table_start, table_end, color::BORDER);
            canvas.vline(col3_x, table_start, table_end, color::BORDER);
            canvas.outline_rect(x, table_start, col_w, table_end - table_start, color::BORDER);

            y += spacing.gap;
        }
    }
}

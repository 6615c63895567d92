//! Font auto-fit: pick the largest candidate size whose layout fits.

use log::{debug, warn};

use crate::config::{RowSpacing, SheetConfig};
use crate::types::{Brand, BrandGroups};

use super::estimate_height;

/// Result of the auto-fit solve: the chosen size and the spacing constants
/// scaled to it. `floored` marks the degraded outcome where no candidate
/// satisfied the budget and the floor size was used unconditionally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoFit {
    pub size: u32,
    pub spacing: RowSpacing,
    pub floored: bool,
}

/// Walk candidate sizes from the nominal size down to the floor, scaling
/// the spacing constants proportionally and re-estimating, and accept the
/// first candidate whose estimated height is strictly below
/// `budget - safety_margin`. When none fits, the floor size is used anyway:
/// crowded output beats no output, and the floor guarantees termination.
pub fn solve(order: &[Brand], groups: &BrandGroups, cfg: &SheetConfig, budget: f32) -> AutoFit {
    for size in (cfg.floor_size..=cfg.nominal_size).rev() {
        let spacing = cfg.base_spacing.scaled(cfg.scale_ratio(size));
        let height = estimate_height(order, groups, spacing, cfg.header_offset);
        if height < budget - cfg.safety_margin {
            debug!("auto-fit chose size {size} (height {height} within budget {budget})");
            return AutoFit {
                size,
                spacing,
                floored: false,
            };
        }
    }
    warn!(
        "no font size in {}..={} fits budget {budget}, using floor",
        cfg.floor_size, cfg.nominal_size
    );
    AutoFit {
        size: cfg.floor_size,
        spacing: cfg.base_spacing.scaled(cfg.scale_ratio(cfg.floor_size)),
        floored: true,
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::types::CatalogItem;

    fn fixture(items_per_brand: usize) -> (Vec<Brand>, BrandGroups) {
        let names = ["A", "B", "C", "D"];
        let order: Vec<Brand> = names
            .iter()
            .enumerate()
            .map(|(i, n)| {
                let mut b = Brand::new(n, "#112233");
                b.order_index = i;
                b
            })
            .collect();
        let mut groups = BrandGroups::new();
        for name in names {
            let items = (0..items_per_brand)
                .map(|i| CatalogItem::new(name, &format!("m{i}"), "", 1.0, "$1"))
                .collect();
            groups.insert(name.to_string(), items);
        }
        (order, groups)
    }

    #[test]
    fn test_roomy_budget_keeps_nominal_size() {
        let cfg = SheetConfig::default();
        let (order, groups) = fixture(3);
        let fit = solve(&order, &groups, &cfg, 5000.0);
        assert_eq!(fit.size, cfg.nominal_size);
        assert!(!fit.floored);
        assert_eq!(fit.spacing, cfg.base_spacing);
    }

    #[test]
    fn test_tight_budget_shrinks_size() {
        let cfg = SheetConfig::default();
        let (order, groups) = fixture(20);
        // Nominal: two blocks of 30+25+500+3 = 558 per column -> 200 + 1116.
        let nominal_height =
            estimate_height(&order, &groups, cfg.base_spacing, cfg.header_offset);
        let fit = solve(&order, &groups, &cfg, nominal_height);
        assert!(fit.size < cfg.nominal_size);
        assert!(fit.size >= cfg.floor_size);
        // The chosen size actually satisfies the budget.
        let chosen = estimate_height(&order, &groups, fit.spacing, cfg.header_offset);
        assert!(chosen < nominal_height - cfg.safety_margin);
    }

    #[test]
    fn test_impossible_budget_falls_back_to_floor() {
        let cfg = SheetConfig::default();
        let (order, groups) = fixture(50);
        let fit = solve(&order, &groups, &cfg, 100.0);
        assert_eq!(fit.size, cfg.floor_size);
        assert!(fit.floored);
        assert_eq!(
            fit.spacing,
            cfg.base_spacing.scaled(cfg.scale_ratio(cfg.floor_size))
        );
    }
}

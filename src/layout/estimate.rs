//! Column height estimation for the two-column balanced layout.

use crate::config::RowSpacing;
use crate::types::{Brand, BrandGroups};

use super::{assign_columns, ColumnPlan};

/// Vertical extent of one brand block: header band, table sub-header row,
/// one row per item, and the gap to the next block.
pub fn block_height(item_count: usize, spacing: RowSpacing) -> f32 {
    spacing.brand_header + spacing.row + item_count as f32 * spacing.row + spacing.gap
}

/// Iterator over `(brand name, block height)` for the brands in `order`
/// that are present in `groups`, in order.
fn blocks<'a>(
    order: &'a [Brand],
    groups: &'a BrandGroups,
    spacing: RowSpacing,
) -> impl Iterator<Item = (&'a str, f32)> {
    order.iter().filter_map(move |brand| {
        groups
            .get(&brand.name)
            .map(|items| (brand.name.as_str(), block_height(items.len(), spacing)))
    })
}

/// Run the greedy fold and return the full column plans. The renderer uses
/// this; the estimator below keeps only the taller height.
pub fn plan_columns(
    order: &[Brand],
    groups: &BrandGroups,
    spacing: RowSpacing,
    start_y: f32,
) -> [ColumnPlan; 2] {
    assign_columns(blocks(order, groups, spacing), start_y)
}

/// Total vertical extent of the balanced two-column layout: both column
/// accumulators start at `start_y`, blocks are assigned greedily, and the
/// taller final accumulator is the answer.
pub fn estimate_height(
    order: &[Brand],
    groups: &BrandGroups,
    spacing: RowSpacing,
    start_y: f32,
) -> f32 {
    let [first, second] = plan_columns(order, groups, spacing, start_y);
    first.height.max(second.height)
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

    const SPACING: RowSpacing = RowSpacing {
        row: 25.0,
        brand_header: 30.0,
        gap: 3.0,
    };

    fn groups_of(counts: &[(&str, usize)]) -> BrandGroups {
        let mut groups = BrandGroups::new();
        for &(brand, n) in counts {
            let items = (0..n)
                .map(|i| CatalogItem::new(brand, &format!("m{i}"), "", 1.0, "$1"))
                .collect();
            groups.insert(brand.to_string(), items);
        }
        groups
    }

    fn order_of(names: &[&str]) -> Vec<Brand> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let mut b = Brand::new(name, "#000000");
                b.order_index = i;
                b
            })
            .collect()
    }

    #[test]
    fn test_block_height_formula() {
        // 30 + 25 + 4*25 + 3
        assert_eq!(block_height(4, SPACING), 158.0);
        // Zero items still cost band + sub-header + gap in assignment.
        assert_eq!(block_height(0, SPACING), 58.0);
    }

    #[test]
    fn test_estimate_skips_brands_without_groups() {
        let order = order_of(&["A", "ABSENT", "B"]);
        let groups = groups_of(&[("A", 2), ("B", 1)]);
        // A: 30+25+50+3 = 108 -> col0 (308); B: 30+25+25+3 = 83 -> col1 (283)
        assert_eq!(estimate_height(&order, &groups, SPACING, 200.0), 308.0);
    }

    #[test]
    fn test_estimate_is_monotone_in_item_count() {
        let order = order_of(&["A", "B", "C"]);
        let sparse = groups_of(&[("A", 2), ("B", 1), ("C", 3)]);
        let dense = groups_of(&[("A", 2), ("B", 6), ("C", 3)]);
        let h_sparse = estimate_height(&order, &sparse, SPACING, 200.0);
        let h_dense = estimate_height(&order, &dense, SPACING, 200.0);
        assert!(h_dense >= h_sparse);
    }

    #[test]
    fn test_empty_groups_estimate_is_start_y() {
        let order = order_of(&["A"]);
        assert_eq!(estimate_height(&order, &BrandGroups::new(), SPACING, 200.0), 200.0);
    }
}

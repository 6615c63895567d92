//! Integration tests for column balancing and height estimation.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use pricesheet::layout::{assign_columns, block_height, estimate_height, plan_columns};
use pricesheet::{BrandGroups, RowSpacing, SheetConfig};

const SPACING: RowSpacing = RowSpacing {
    row: 25.0,
    brand_header: 30.0,
    gap: 3.0,
};

// ============================================================================
// Greedy assignment
// ============================================================================

/// Concrete membership check: blocks of 220, 120, and 60 px starting from
/// 200 px per column. The first block lands in column 0, the remaining two
/// balance into column 1, ending at 420 / 380.
#[test]
fn test_greedy_membership_for_concrete_blocks() {
    let blocks = [("C", 220.0), ("A", 120.0), ("B", 60.0)];
    let [col0, col1] = assign_columns(blocks, 200.0);
    assert_eq!(col0.brands, vec!["C"], "C fills the first column alone");
    assert_eq!(col1.brands, vec!["A", "B"], "A then B balance column 1");
    assert_eq!(col0.height, 420.0);
    assert_eq!(col1.height, 380.0);
}

/// Same blocks in roster order A, B, C: greedy is order-driven, so the
/// membership changes while the balance guarantee still holds.
#[test]
fn test_greedy_is_order_driven() {
    let blocks = [("A", 120.0), ("B", 60.0), ("C", 220.0)];
    let [col0, col1] = assign_columns(blocks, 200.0);
    assert_eq!(col0.brands, vec!["A"]);
    assert_eq!(col1.brands, vec!["B", "C"]);
    assert_eq!(col0.height, 320.0);
    assert_eq!(col1.height, 480.0);
}

/// Greedy shortest-first guarantees the final imbalance never exceeds the
/// largest single block.
#[test]
fn test_balance_bound_holds() {
    let cases: &[&[f32]] = &[
        &[220.0, 120.0, 60.0],
        &[58.0, 58.0, 58.0, 58.0, 58.0],
        &[400.0, 30.0, 30.0, 30.0],
        &[95.0, 210.0, 33.0, 180.0, 61.0, 140.0],
        &[500.0],
    ];
    for heights in cases {
        let max_block = heights.iter().copied().fold(0.0_f32, f32::max);
        let blocks: Vec<(&str, f32)> = heights.iter().map(|&h| ("X", h)).collect();
        let [col0, col1] = assign_columns(blocks, 200.0);
        let diff = (col0.height - col1.height).abs();
        assert!(
            diff <= max_block,
            "imbalance {diff} exceeds max block {max_block} for {heights:?}"
        );
    }
}

// ============================================================================
// Height estimation
// ============================================================================

#[test]
fn test_block_height_counts_band_subheader_rows_and_gap() {
    // 30 (band) + 25 (sub-header) + 3*25 (rows) + 3 (gap)
    assert_eq!(block_height(3, SPACING), 133.0);
}

#[test]
fn test_estimator_matches_manual_fold() {
    let roster = common::roster();
    let groups = common::groups_of(&[("Samsung", 3), ("Tecno", 1), ("ZTE", 5)]);
    // Samsung: 133 -> col0 (333); Tecno: 83 -> col1 (283); ZTE: 183 -> col1 (466)
    let h = estimate_height(roster.as_slice(), &groups, SPACING, 200.0);
    assert_eq!(h, 466.0);
}

#[test]
fn test_estimator_is_nondecreasing_in_item_count() {
    let roster = common::roster();
    let mut previous = 0.0;
    for extra in 0..8 {
        let groups = common::groups_of(&[("Samsung", 2), ("Tecno", 1 + extra), ("ZTE", 4)]);
        let h = estimate_height(roster.as_slice(), &groups, SPACING, 200.0);
        assert!(
            h >= previous,
            "estimate dropped from {previous} to {h} when adding items"
        );
        previous = h;
    }
}

#[test]
fn test_estimator_and_renderer_plan_agree() {
    let cfg = SheetConfig::default();
    let roster = common::roster();
    let groups = common::groups_of(&[("Samsung", 4), ("Tecno", 2), ("ZTE", 6)]);
    let estimate = estimate_height(roster.as_slice(), &groups, cfg.base_spacing, 200.0);
    let [col0, col1] = plan_columns(roster.as_slice(), &groups, cfg.base_spacing, 200.0);
    assert_eq!(estimate, col0.height.max(col1.height));
}

#[test]
fn test_empty_groups_estimate_to_start_offset() {
    let roster = common::roster();
    let h = estimate_height(roster.as_slice(), &BrandGroups::new(), SPACING, 200.0);
    assert_eq!(h, 200.0);
}

/// A brand present in the groups mapping with an empty item vector is still
/// assigned and costed like a band-only block.
#[test]
fn test_explicit_empty_group_is_costed() {
    let roster = common::roster();
    let mut groups = BrandGroups::new();
    groups.insert("SAMSUNG".to_string(), Vec::new());
    let h = estimate_height(roster.as_slice(), &groups, SPACING, 200.0);
    assert_eq!(h, 200.0 + block_height(0, SPACING));
}

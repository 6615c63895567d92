//! Catalog items and the per-brand grouping pass.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One priced catalog item.
///
/// Identity is the derived `(brand, model, specs)` key, never an assigned
/// id: renaming any of the three fields changes identity. The price carries
/// both a numeric value (for sorting/export by collaborators) and the
/// already-formatted display string the engine renders verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Brand name this item belongs to (matches `Brand::name`).
    pub brand: String,
    pub model: String,
    /// Free-text spec string.
    pub specs: String,
    pub price: f64,
    /// Locale-formatted price string; the engine never formats prices.
    pub price_display: String,
}

impl CatalogItem {
    pub fn new(brand: &str, model: &str, specs: &str, price: f64, price_display: &str) -> Self {
        Self {
            brand: brand.trim().to_uppercase(),
            model: model.to_string(),
            specs: specs.to_string(),
            price,
            price_display: price_display.to_string(),
        }
    }

    /// Derived identity key, also the persistence primary key and the
    /// de-duplication key for the working selection.
    pub fn identity_key(&self) -> String {
        format!("{}-{}-{}", self.brand, self.model, self.specs)
    }
}

/// Engine input: brand name -> ordered items carrying that brand.
///
/// Map order is irrelevant; iteration is always driven by the ordered brand
/// list, so a plain `HashMap` works here.
pub type BrandGroups = HashMap<String, Vec<CatalogItem>>;

/// Group items by brand in a single pass. Items keep their input order
/// within each group; brands with no items do not appear in the result.
pub fn group_by_brand(items: &[CatalogItem]) -> BrandGroups {
    let mut groups = BrandGroups::new();
    for item in items {
        groups
            .entry(item.brand.clone())
            .or_default()
            .push(item.clone());
    }
    groups
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

    #[test]
    fn test_identity_key_is_derived() {
        let item = CatalogItem::new("Tecno", "Spark 20", "8/256GB", 6500.0, "RD$6,500");
        assert_eq!(item.identity_key(), "TECNO-Spark 20-8/256GB");

        let mut renamed = item;
        renamed.model = "Spark 21".to_string();
        assert_eq!(renamed.identity_key(), "TECNO-Spark 21-8/256GB");
    }

    #[test]
    fn test_grouping_preserves_item_order() {
        let items = vec![
            CatalogItem::new("A", "first", "", 1.0, "$1"),
            CatalogItem::new("B", "other", "", 2.0, "$2"),
            CatalogItem::new("A", "second", "", 3.0, "$3"),
        ];
        let groups = group_by_brand(&items);
        let a_models: Vec<&str> = groups["A"].iter().map(|i| i.model.as_str()).collect();
        assert_eq!(a_models, vec!["first", "second"]);
        assert_eq!(groups["B"].len(), 1);
    }

    #[test]
    fn test_grouping_omits_absent_brands() {
        let groups = group_by_brand(&[]);
        assert!(groups.is_empty());
    }
}

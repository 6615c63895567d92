//! Brands and the ordered brand roster.

use serde::{Deserialize, Serialize};

/// One brand: a unique uppercase name, a display color, and the order index
/// that drives both presentation order and layout-assignment priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    /// Case-normalized (uppercase) unique name.
    pub name: String,
    /// Display color as an `#RRGGBB` string.
    pub color: String,
    /// Position in the roster; dense in `[0, N)`.
    pub order_index: usize,
}

impl Brand {
    /// Create a brand with a normalized name. The order index is assigned
    /// by the roster, so a free-standing brand starts at 0.
    pub fn new(name: &str, color: &str) -> Self {
        Self {
            name: name.trim().to_uppercase(),
            color: color.to_string(),
            order_index: 0,
        }
    }
}

/// The ordered brand list.
///
/// Every mutation re-indexes so that order indices stay a dense permutation
/// of `[0, N)`. Names are unique case-insensitively; lookups normalize the
/// same way construction does.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrandRoster {
    brands: Vec<Brand>,
}

impl BrandRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a brand at the end of the roster. Returns `false` (and leaves
    /// the roster untouched) when a brand with the same normalized name
    /// already exists.
    pub fn add(&mut self, name: &str, color: &str) -> bool {
        let brand = Brand::new(name, color);
        if self.position(&brand.name).is_some() {
            return false;
        }
        self.brands.push(brand);
        self.reindex();
        true
    }

    /// Remove a brand by name. Returns `false` when no such brand exists.
    pub fn remove(&mut self, name: &str) -> bool {
        let Some(pos) = self.position(name) else {
            return false;
        };
        self.brands.remove(pos);
        self.reindex();
        true
    }

    /// Swap a brand with its predecessor. No-op (returns `false`) for the
    /// first brand or an unknown name.
    pub fn move_up(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(pos) if pos > 0 => {
                self.brands.swap(pos, pos - 1);
                self.reindex();
                true
            }
            _ => false,
        }
    }

    /// Swap a brand with its successor. No-op (returns `false`) for the
    /// last brand or an unknown name.
    pub fn move_down(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(pos) if pos + 1 < self.brands.len() => {
                self.brands.swap(pos, pos + 1);
                self.reindex();
                true
            }
            _ => false,
        }
    }

    /// Look up a brand by (case-insensitive) name.
    pub fn get(&self, name: &str) -> Option<&Brand> {
        self.position(name).and_then(|pos| self.brands.get(pos))
    }

    /// Brands in ascending order-index order.
    pub fn as_slice(&self) -> &[Brand] {
        &self.brands
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Brand> {
        self.brands.iter()
    }

    pub fn len(&self) -> usize {
        self.brands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brands.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        let normalized = name.trim().to_uppercase();
        self.brands.iter().position(|b| b.name == normalized)
    }

    fn reindex(&mut self) {
        for (i, brand) in self.brands.iter_mut().enumerate() {
            brand.order_index = i;
        }
    }
}

impl<'a> IntoIterator for &'a BrandRoster {
    type Item = &'a Brand;
    type IntoIter = std::slice::Iter<'a, Brand>;

    fn into_iter(self) -> Self::IntoIter {
        self.brands.iter()
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

    fn roster() -> BrandRoster {
        let mut r = BrandRoster::new();
        assert!(r.add("Samsung", "#0057B7"));
        assert!(r.add("Infinix", "#2E8B57"));
        assert!(r.add("ZTE", "#00BFFF"));
        r
    }

    #[test]
    fn test_names_normalize_to_uppercase() {
        let r = roster();
        assert_eq!(r.as_slice()[0].name, "SAMSUNG");
        assert!(r.get("samsung").is_some());
    }

    #[test]
    fn test_duplicate_add_is_rejected_case_insensitively() {
        let mut r = roster();
        assert!(!r.add("SAMSUNG", "#FFFFFF"));
        assert!(!r.add("  samsung ", "#FFFFFF"));
        assert_eq!(r.len(), 3);
        // Original color kept
        assert_eq!(r.get("Samsung").unwrap().color, "#0057B7");
    }

    #[test]
    fn test_indices_stay_dense_after_remove() {
        let mut r = roster();
        assert!(r.remove("Infinix"));
        let indices: Vec<usize> = r.iter().map(|b| b.order_index).collect();
        assert_eq!(indices, vec![0, 1]);
        assert_eq!(r.as_slice()[1].name, "ZTE");
    }

    #[test]
    fn test_move_up_and_down() {
        let mut r = roster();
        assert!(r.move_up("ZTE"));
        let names: Vec<&str> = r.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["SAMSUNG", "ZTE", "INFINIX"]);

        assert!(r.move_down("SAMSUNG"));
        let names: Vec<&str> = r.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["ZTE", "SAMSUNG", "INFINIX"]);

        let indices: Vec<usize> = r.iter().map(|b| b.order_index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_moves_at_boundaries_are_noops() {
        let mut r = roster();
        assert!(!r.move_up("SAMSUNG"));
        assert!(!r.move_down("ZTE"));
        assert!(!r.move_up("UNKNOWN"));
    }
}

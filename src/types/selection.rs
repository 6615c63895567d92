//! The session-local working selection.

use serde::{Deserialize, Serialize};

use super::CatalogItem;

/// Ordered set of items chosen for the current price sheet.
///
/// Lives only for the session; projects persist identity keys and the
/// selection is rebuilt from them against the full inventory on reload.
/// No two entries ever share an identity key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkingSelection {
    items: Vec<CatalogItem>,
}

impl WorkingSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item unless one with the same identity key is already
    /// present; a duplicate insert is a no-op returning `false`.
    pub fn insert(&mut self, item: CatalogItem) -> bool {
        let key = item.identity_key();
        if self.items.iter().any(|i| i.identity_key() == key) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove the item with the given identity key. Returns `false` when
    /// the key is not present.
    pub fn remove_by_key(&mut self, key: &str) -> bool {
        let Some(pos) = self.items.iter().position(|i| i.identity_key() == key) else {
            return false;
        };
        self.items.remove(pos);
        true
    }

    /// Rebuild a selection from persisted identity keys, in key order.
    /// Keys that no longer resolve against the inventory are skipped.
    pub fn restore(keys: &[String], inventory: &[CatalogItem]) -> Self {
        let mut selection = Self::new();
        for key in keys {
            if let Some(item) = inventory.iter().find(|i| &i.identity_key() == key) {
                selection.insert(item.clone());
            }
        }
        selection
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
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

    fn item(brand: &str, model: &str) -> CatalogItem {
        CatalogItem::new(brand, model, "base", 100.0, "$100")
    }

    #[test]
    fn test_duplicate_insert_is_noop() {
        let mut sel = WorkingSelection::new();
        assert!(sel.insert(item("A", "one")));
        assert!(!sel.insert(item("A", "one")));
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn test_remove_by_key() {
        let mut sel = WorkingSelection::new();
        sel.insert(item("A", "one"));
        sel.insert(item("A", "two"));
        assert!(sel.remove_by_key("A-one-base"));
        assert!(!sel.remove_by_key("A-one-base"));
        assert_eq!(sel.items()[0].model, "two");
    }

    #[test]
    fn test_restore_skips_stale_keys() {
        let inventory = vec![item("A", "one"), item("B", "two")];
        let keys = vec![
            "B-two-base".to_string(),
            "A-gone-base".to_string(),
            "A-one-base".to_string(),
        ];
        let sel = WorkingSelection::restore(&keys, &inventory);
        let models: Vec<&str> = sel.items().iter().map(|i| i.model.as_str()).collect();
        assert_eq!(models, vec!["two", "one"]);
    }
}

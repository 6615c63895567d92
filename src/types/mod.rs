//! Core data types for the price sheet engine.
//!
//! Brands, catalog items, and the session-local working selection. All of
//! these are owned by the persistence collaborator; the engine treats them
//! as read-only value data for the duration of one render call.

mod brand;
mod item;
mod selection;

pub use brand::{Brand, BrandRoster};
pub use item::{group_by_brand, BrandGroups, CatalogItem};
pub use selection::WorkingSelection;

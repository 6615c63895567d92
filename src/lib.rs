//! pricesheet - balanced two-column price-sheet rendering
//!
//! Turns an ordered brand list and a set of priced items into a single
//! bitmap with a legibly typeset price table:
//! - Greedy shortest-column-first balancing across two columns
//! - Auto-fit typography (largest font size that fits the height budget)
//! - Canvas height derived from content, never below a fixed minimum
//! - Ellipsis truncation of cell text against per-cell pixel budgets
//! - Optional logo with a soft drop shadow, title, and date stamp
//!
//! The render path never fails: missing fonts, undecodable logos, and
//! over-dense content all degrade to visible fallbacks, reported through
//! [`render::RenderedSheet::degraded`].
//!
//! # Usage
//!
//! ```no_run
//! use pricesheet::{render_sheet, FontSet, SheetConfig};
//! use pricesheet::{group_by_brand, BrandRoster, CatalogItem, WorkingSelection};
//!
//! let fonts = FontSet::load("fonts/Regular.ttf".as_ref(), "fonts/Bold.ttf".as_ref());
//! let mut brands = BrandRoster::new();
//! brands.add("Samsung", "#0057B7");
//!
//! let mut selection = WorkingSelection::new();
//! selection.insert(CatalogItem::new("Samsung", "A16", "4/128GB", 7500.0, "RD$7,500"));
//!
//! let groups = group_by_brand(selection.items());
//! let sheet = render_sheet(
//!     &fonts,
//!     &SheetConfig::default(),
//!     brands.as_slice(),
//!     &groups,
//!     None,
//!     None,
//! );
//! assert!(!sheet.image.is_empty());
//! ```

// Data model
pub mod color;
pub mod config;
pub mod error;
pub mod types;

// Text
pub mod fonts;
pub mod text;

// Layout and rasterization
pub mod layout;
pub mod render;

pub use config::{RowSpacing, SheetConfig};
pub use error::{Result, SheetError};
pub use fonts::{Face, FontSet};
pub use render::{render_sheet, RenderedSheet};
pub use types::*;

/// Get the library version
#[must_use]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

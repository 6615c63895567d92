//! Rasterization: drawing primitives, brand tables, and the composer.

mod composer;
mod primitives;
mod table;

pub use composer::{render_sheet, RenderedSheet};
pub use primitives::{Anchor, Canvas};

//! Layout: column balancing, height estimation, and font auto-fit.
//!
//! Everything here is pure and cheap (O(number of brands) per call); the
//! auto-fit solver re-runs the estimator once per candidate size. The
//! estimator and the renderer share the same greedy fold, so the height the
//! auto-fit decision is based on is exactly the height the renderer
//! produces.

mod autofit;
mod balance;
mod estimate;

pub use autofit::{solve, AutoFit};
pub use balance::{assign_columns, ColumnPlan};
pub use estimate::{block_height, estimate_height, plan_columns};

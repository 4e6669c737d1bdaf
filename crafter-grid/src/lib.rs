//! Shape matching for crafting grids.
//!
//! Observed arrangements and catalog patterns are both [`Grid`]s. Matching trims
//! empty borders, tries all four quarter turns and compares cell by cell. A
//! [`RecipeIndex`] narrows the catalog to patterns with the same
//! [`ShapeSignature`] before the full comparison runs.

mod error;
mod grid;
mod index;
mod matrix;
mod symbol;

pub use error::ShapeError;
pub use grid::Grid;
pub use index::{CatalogPattern, RecipeIndex};
pub use matrix::{diagonal_trace, equivalent, rotate, shape_signature, trim, ShapeSignature};
pub use symbol::{Symbol, EMPTY_MARKER};

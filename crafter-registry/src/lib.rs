//! Crafting catalog: recipe definitions read from JSON, validated and indexed
//! for matching with `crafter-grid`.

mod catalog;
mod definition;
mod error;
mod refinement;

pub use catalog::{Catalog, CatalogSettings};
pub use definition::{CraftResult, RecipeDefinition, RefinementDefinition};
pub use error::CatalogError;
pub use refinement::{Refinement, RefinementIndex};

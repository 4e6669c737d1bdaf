use std::path::PathBuf;

use crafter_grid::ShapeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Couldn't read catalog at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Couldn't parse recipe file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Recipe '{recipe}' has an invalid shape: {source}")]
    Shape { recipe: String, source: ShapeError },
    #[error("Recipe '{recipe}' uses unknown layer '{layer}'")]
    UnknownLayer { recipe: String, layer: String },
    #[error("Recipe '{0}' has neither a pattern nor refinements")]
    NothingToRegister(String),
    #[error("Recipe '{0}' doesn't contain a single item")]
    EmptyPattern(String),
    #[error("Recipe '{0}' is registered twice")]
    DuplicateRecipe(String),
    #[error("Refinement in '{recipe}' has an empty {field}")]
    EmptyRefinementField { recipe: String, field: &'static str },
}

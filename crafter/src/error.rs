use crafter_grid::ShapeError;
use crafter_registry::CatalogError;
use log::log;
use thiserror::Error;

pub trait CrafterError: std::error::Error {
    fn log(&self) {
        log!(self.severity(), "{}", self);
    }

    fn severity(&self) -> log::Level;
}

impl CrafterError for CatalogError {
    fn severity(&self) -> log::Level {
        log::Level::Error
    }
}

/// A single observation line that couldn't be turned into a grid.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Malformed observation: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Observation uses unknown layer '{0}'")]
    UnknownLayer(String),
    #[error("Observation doesn't fit the crafting grid: {0}")]
    Shape(#[from] ShapeError),
}

impl CrafterError for InputError {
    fn severity(&self) -> log::Level {
        match self {
            Self::Malformed(_) | Self::UnknownLayer(_) | Self::Shape(_) => log::Level::Warn,
        }
    }
}

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("Grid footprint {width}x{height} has no cells")]
    EmptyFootprint { width: usize, height: usize },
    #[error("Grid footprint {width}x{height} is too large")]
    FootprintOverflow { width: usize, height: usize },
    #[error("Layer '{layer}' has {actual} cells, expected {expected}")]
    LayerLength {
        layer: String,
        expected: usize,
        actual: usize,
    },
}

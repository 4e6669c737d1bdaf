use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use itertools::{iproduct, Itertools};
use log::trace;

use crate::{Grid, Symbol};

/// Bucketing key: the layer count plus the number of occupied cells per layer.
///
/// Unaffected by trimming and rotation, so an observed grid and a catalog pattern
/// that could match always share a signature. Different shapes may collide.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeSignature {
    pub layer_count: usize,
    pub filled: Vec<usize>,
}

impl fmt::Display for ShapeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.layer_count)?;
        for filled in &self.filled {
            write!(f, "-{filled}")?;
        }
        Ok(())
    }
}

pub fn shape_signature(grid: &Grid) -> ShapeSignature {
    ShapeSignature {
        layer_count: grid.layer_count(),
        filled: grid
            .layers()
            .values()
            .map(|cells| cells.iter().filter(|symbol| !symbol.is_empty()).count())
            .collect(),
    }
}

fn is_blank(grid: &Grid, row: usize, col: usize) -> bool {
    let index = row * grid.width() + col;
    grid.layers().values().all(|cells| cells[index].is_empty())
}

/// Indices to keep along one axis.
///
/// On a three-wide axis a blank middle line between two occupied lines is kept,
/// so hollow patterns survive.
fn retained(len: usize, is_empty: impl Fn(usize) -> bool) -> Vec<usize> {
    let empty = (0..len).map(is_empty).collect_vec();
    let sandwiched = len == 3 && empty[1] && !empty[0] && !empty[2];
    (0..len)
        .filter(|&i| !empty[i] || (sandwiched && i == 1))
        .collect()
}

fn select(grid: &Grid, rows: &[usize], cols: &[usize]) -> Grid {
    let layers = grid
        .layers()
        .iter()
        .map(|(name, cells)| {
            let kept = iproduct!(rows.iter(), cols.iter())
                .map(|(row, col)| cells[row * grid.width() + col].clone())
                .collect();
            (name.clone(), kept)
        })
        .collect();
    Grid::from_parts(cols.len(), rows.len(), layers)
}

/// Removes rows and then columns that are empty in every layer.
///
/// A grid without any item trims down to a degenerate zero-sized grid.
pub fn trim(grid: &Grid) -> Grid {
    let rows = retained(grid.height(), |row| {
        (0..grid.width()).all(|col| is_blank(grid, row, col))
    });
    let all_cols = (0..grid.width()).collect_vec();
    let row_trimmed = select(grid, &rows, &all_cols);

    let cols = retained(row_trimmed.width(), |col| {
        (0..row_trimmed.height()).all(|row| is_blank(&row_trimmed, row, col))
    });
    let all_rows = (0..row_trimmed.height()).collect_vec();
    select(&row_trimmed, &all_rows, &cols)
}

/// Quarter turn: the cell at `(row, col)` moves to index `height * (width - 1 - col) + row`
/// of a `height x width` grid.
pub fn rotate(grid: &Grid) -> Grid {
    let (width, height) = (grid.width(), grid.height());
    let layers: BTreeMap<String, Vec<Symbol>> = grid
        .layers()
        .iter()
        .map(|(name, cells)| {
            let mut rotated = vec![Symbol::empty(); cells.len()];
            for (row, col) in iproduct!(0..height, 0..width) {
                rotated[height * (width - 1 - col) + row] = cells[row * width + col].clone();
            }
            (name.clone(), rotated)
        })
        .collect();
    Grid::from_parts(height, width, layers)
}

/// Hash of the main diagonal of one layer. Cheap pre-filter only.
pub fn diagonal_trace(grid: &Grid, layer: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    if let Some(cells) = grid.layer(layer) {
        for k in 0..grid.width().min(grid.height()) {
            cells[k * grid.width() + k].hash(&mut hasher);
        }
    }
    hasher.finish()
}

fn same_shape(lhs: &Grid, rhs: &Grid) -> bool {
    lhs.width() == rhs.width()
        && lhs.height() == rhs.height()
        && lhs.layer_names().eq(rhs.layer_names())
        && lhs
            .layer_names()
            .all(|layer| diagonal_trace(lhs, layer) == diagonal_trace(rhs, layer))
        && lhs.layers() == rhs.layers()
}

fn matches_any_rotation(lhs: &Grid, rhs: &Grid) -> bool {
    if lhs.is_degenerate() || rhs.is_degenerate() || lhs.layer_count() != rhs.layer_count() {
        return false;
    }
    std::iter::successors(Some(rhs.clone()), |previous| Some(rotate(previous)))
        .take(4)
        .enumerate()
        .any(|(quarter, candidate)| {
            let matched = same_shape(lhs, &candidate);
            if matched {
                trace!("matched after {quarter} quarter turn(s)");
            }
            matched
        })
}

/// Whether `observed` matches `pattern` in any of the four orientations.
///
/// Both sides are trimmed first unless `exact` is set.
pub fn equivalent(observed: &Grid, pattern: &Grid, exact: bool) -> bool {
    if exact {
        matches_any_rotation(observed, pattern)
    } else {
        matches_any_rotation(&trim(observed), &trim(pattern))
    }
}

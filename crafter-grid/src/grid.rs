use std::collections::BTreeMap;

use crate::{ShapeError, Symbol};

/// Rectangular arrangement of symbols, stacked over one or more named layers.
///
/// Every layer is stored row-major (`index = row * width + col`) and shares the
/// same `width x height` footprint. Grids are never mutated after construction;
/// [`crate::trim`] and [`crate::rotate`] return new grids.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    layers: BTreeMap<String, Vec<Symbol>>,
}

impl Grid {
    pub fn new(
        width: usize,
        height: usize,
        layers: BTreeMap<String, Vec<Symbol>>,
    ) -> Result<Self, ShapeError> {
        let expected = width
            .checked_mul(height)
            .ok_or(ShapeError::FootprintOverflow { width, height })?;
        if expected == 0 {
            return Err(ShapeError::EmptyFootprint { width, height });
        }
        if let Some((layer, cells)) = layers.iter().find(|(_, cells)| cells.len() != expected) {
            return Err(ShapeError::LayerLength {
                layer: layer.clone(),
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self::from_parts(width, height, layers))
    }

    pub fn single_layer<S: Into<Symbol>>(
        width: usize,
        height: usize,
        layer: &str,
        cells: impl IntoIterator<Item = S>,
    ) -> Result<Self, ShapeError> {
        let cells = cells.into_iter().map(Into::into).collect();
        Self::new(width, height, BTreeMap::from([(layer.to_string(), cells)]))
    }

    /// Skips validation; trimming may legitimately produce a zero-sized grid.
    pub(crate) fn from_parts(
        width: usize,
        height: usize,
        layers: BTreeMap<String, Vec<Symbol>>,
    ) -> Self {
        Self {
            width,
            height,
            layers,
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn layers(&self) -> &BTreeMap<String, Vec<Symbol>> {
        &self.layers
    }

    pub fn layer(&self, name: &str) -> Option<&[Symbol]> {
        self.layers.get(name).map(Vec::as_slice)
    }

    pub fn layer_names(&self) -> impl Iterator<Item = &str> {
        self.layers.keys().map(String::as_str)
    }

    pub fn get(&self, layer: &str, row: usize, col: usize) -> Option<&Symbol> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.layers.get(layer)?.get(row * self.width + col)
    }

    /// A grid trimmed down to nothing.
    pub const fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Occupied cells across every layer.
    pub fn filled_count(&self) -> usize {
        self.layers
            .values()
            .flatten()
            .filter(|symbol| !symbol.is_empty())
            .count()
    }

    /// Same grid without the layers that hold no item at all.
    pub fn without_empty_layers(&self) -> Self {
        let layers = self
            .layers
            .iter()
            .filter(|(_, cells)| cells.iter().any(|symbol| !symbol.is_empty()))
            .map(|(name, cells)| (name.clone(), cells.clone()))
            .collect();
        Self::from_parts(self.width, self.height, layers)
    }

    /// The only occupied symbol, if exactly one cell in the whole grid holds an item.
    pub fn sole_symbol(&self) -> Option<&Symbol> {
        let mut filled = self
            .layers
            .values()
            .flatten()
            .filter(|symbol| !symbol.is_empty());
        let symbol = filled.next()?;
        filled.next().is_none().then_some(symbol)
    }
}

#[cfg(test)]
mod test {
    use std::collections::BTreeMap;

    use super::Grid;
    use crate::{ShapeError, Symbol};

    fn cells(raw: &[&str]) -> Vec<Symbol> {
        raw.iter().copied().map(Symbol::new).collect()
    }

    #[test]
    fn rejects_wrong_layer_length() {
        let layers = BTreeMap::from([
            ("bottom".to_string(), cells(&["a"; 9])),
            ("top".to_string(), cells(&["a"; 8])),
        ]);
        assert_eq!(
            Grid::new(3, 3, layers),
            Err(ShapeError::LayerLength {
                layer: "top".to_string(),
                expected: 9,
                actual: 8,
            })
        );
    }

    #[test]
    fn rejects_overflowing_footprint() {
        assert_eq!(
            Grid::new(usize::MAX, 2, BTreeMap::new()),
            Err(ShapeError::FootprintOverflow {
                width: usize::MAX,
                height: 2,
            })
        );
    }

    #[test]
    fn rejects_empty_footprint() {
        assert_eq!(
            Grid::single_layer::<&str>(0, 3, "middle", []),
            Err(ShapeError::EmptyFootprint {
                width: 0,
                height: 3
            })
        );
        assert!(Grid::single_layer::<&str>(3, 0, "middle", []).is_err());
    }

    #[test]
    fn unknown_symbols_are_legal() {
        let grid = Grid::single_layer(2, 1, "middle", ["no_such_item", "Another"]).unwrap();
        assert_eq!(grid.get("middle", 0, 1), Some(&Symbol::new("another")));
        assert_eq!(grid.get("middle", 1, 0), None);
        assert_eq!(grid.get("top", 0, 0), None);
    }

    #[test]
    fn row_major_access() {
        let grid = Grid::single_layer(3, 2, "middle", ["a", "b", "c", "d", "e", "f"]).unwrap();
        assert_eq!(grid.get("middle", 1, 0), Some(&Symbol::new("d")));
        assert_eq!(grid.get("middle", 0, 2), Some(&Symbol::new("c")));
        assert_eq!(grid.get("middle", 0, 3), None);
    }

    #[test]
    fn drops_unused_layers() {
        let layers = BTreeMap::from([
            ("bottom".to_string(), cells(&[" ", " ", " ", " "])),
            ("middle".to_string(), cells(&[" ", "a", " ", " "])),
        ]);
        let grid = Grid::new(2, 2, layers).unwrap().without_empty_layers();
        assert_eq!(grid.layer_names().collect::<Vec<_>>(), ["middle"]);
        assert_eq!((grid.width(), grid.height()), (2, 2));
    }

    #[test]
    fn sole_symbol() {
        let one = Grid::single_layer(2, 2, "middle", [" ", "log", " ", " "]).unwrap();
        assert_eq!(one.sole_symbol(), Some(&Symbol::new("log")));
        assert_eq!(one.filled_count(), 1);

        let two = Grid::single_layer(2, 2, "middle", [" ", "log", "log", " "]).unwrap();
        assert_eq!(two.sole_symbol(), None);

        let none = Grid::single_layer(2, 2, "middle", [" "; 4]).unwrap();
        assert_eq!(none.sole_symbol(), None);
        assert_eq!(none.filled_count(), 0);
    }
}

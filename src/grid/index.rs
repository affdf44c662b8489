//! Synthetic, storage-free index grids.

use crate::grid::Grid;

/// 2D position inside a grid, as synthesized by [`IndexGrid`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Idx {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
}

/// A grid whose element at `(y, x)` is the coordinate pair itself.
///
/// `IndexGrid` stores nothing but its shape; the item is synthesized on
/// access. Passed alongside data grids to `for_each`-style algorithms it
/// recovers the position inside functors that otherwise only see element
/// values. There is no pixel storage and no pixel access: the coordinate
/// *is* the value.
///
/// ```
/// use gridscan::{for_each2, GridView, Idx, IndexGrid};
///
/// let data = [10u8, 20, 30, 40, 50, 60];
/// let view = GridView::from_slice(&data, 2, 3)?;
/// let mut weighted = 0usize;
/// for_each2(&IndexGrid::from_grid(&view), &view, |idx: Idx, &px| {
///     weighted += idx.y * usize::from(px);
/// })?;
/// assert_eq!(weighted, 150);
/// # Ok::<(), gridscan::GridScanError>(())
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IndexGrid {
    rows: usize,
    cols: usize,
}

impl IndexGrid {
    /// Creates an index grid with the given shape.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Creates an index grid matching the shape of an existing grid.
    pub fn from_grid<G: Grid>(grid: &G) -> Self {
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
        }
    }
}

impl Grid for IndexGrid {
    type Item<'a>
        = Idx
    where
        Self: 'a;

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn at(&self, y: usize, x: usize) -> Idx {
        Idx { x, y }
    }
}

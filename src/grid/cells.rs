//! Writable strided views over borrowed buffers.

use std::cell::Cell;

use crate::grid::{self, Grid, GridBuf};
use crate::util::{GridScanError, GridScanResult};

/// Borrowed, writable 2D view with an explicit row step.
///
/// The view is a `(origin, rows, cols, step)` index tuple over a slice of
/// [`Cell`]s. Construction from `&mut [T]` takes the exclusive borrow once
/// and hands back freely aliasable cell handles, which is what lets the
/// pairwise traversal pass two handles into the same grid to one functor
/// without any `unsafe`. `Cell<T>` has the same representation as `T`, so
/// the view costs nothing over the raw buffer.
pub struct GridCells<'a, T> {
    data: &'a [Cell<T>],
    origin: usize,
    rows: usize,
    cols: usize,
    step: usize,
}

impl<'a, T> Copy for GridCells<'a, T> {}

impl<'a, T> Clone for GridCells<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> GridCells<'a, T> {
    /// Creates a contiguous writable view with `step == cols`.
    pub fn from_mut(data: &'a mut [T], rows: usize, cols: usize) -> GridScanResult<Self> {
        Self::new(data, rows, cols, cols)
    }

    /// Creates a writable view with an explicit step.
    pub fn new(data: &'a mut [T], rows: usize, cols: usize, step: usize) -> GridScanResult<Self> {
        Self::from_cells(Cell::from_mut(data).as_slice_of_cells(), rows, cols, step)
    }

    /// Creates a view over an existing cell slice.
    pub fn from_cells(
        data: &'a [Cell<T>],
        rows: usize,
        cols: usize,
        step: usize,
    ) -> GridScanResult<Self> {
        let needed = grid::required_len(rows, cols, step)?;
        if data.len() < needed {
            return Err(GridScanError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            origin: 0,
            rows,
            cols,
            step,
        })
    }

    pub(crate) fn from_parts(
        data: &'a [Cell<T>],
        origin: usize,
        rows: usize,
        cols: usize,
        step: usize,
    ) -> Self {
        Self {
            data,
            origin,
            rows,
            cols,
            step,
        }
    }

    /// Returns the row count.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the column count.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the step in elements between row starts.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns the cell at `(y, x)` if it is within the logical window.
    pub fn cell(&self, y: usize, x: usize) -> Option<&'a Cell<T>> {
        if y >= self.rows || x >= self.cols {
            return None;
        }
        self.data.get(self.origin + y * self.step + x)
    }

    /// Returns the cells of row `y` as a contiguous slice of length `cols`.
    pub fn row(&self, y: usize) -> Option<&'a [Cell<T>]> {
        if y >= self.rows {
            return None;
        }
        let start = self.origin + y * self.step;
        self.data.get(start..start + self.cols)
    }

    /// Returns a zero-copy writable sub-view sharing the backing cells.
    pub fn crop(&self, top: usize, left: usize, rows: usize, cols: usize) -> GridScanResult<Self> {
        let origin = grid::crop_offset(
            self.origin,
            self.step,
            self.rows,
            self.cols,
            top,
            left,
            rows,
            cols,
        )?;
        Ok(Self {
            data: self.data,
            origin,
            rows,
            cols,
            step: self.step,
        })
    }

    /// Signed crop re-widening a previously cropped view; validated against
    /// the backing allocation. See [`GridView::crop_signed`].
    ///
    /// [`GridView::crop_signed`]: crate::grid::GridView::crop_signed
    pub fn crop_signed(
        &self,
        top: isize,
        left: isize,
        rows: usize,
        cols: usize,
    ) -> GridScanResult<Self> {
        let origin = grid::crop_signed_offset(
            self.origin,
            self.step,
            self.data.len(),
            self.rows,
            self.cols,
            top,
            left,
            rows,
            cols,
        )?;
        Ok(Self {
            data: self.data,
            origin,
            rows,
            cols,
            step: self.step,
        })
    }
}

impl<'a, T: Copy> GridCells<'a, T> {
    /// Returns the value at `(y, x)` if it is within the logical window.
    pub fn get(&self, y: usize, x: usize) -> Option<T> {
        self.cell(y, x).map(Cell::get)
    }

    /// Writes the value at `(y, x)`.
    ///
    /// # Panics
    /// Panics if `(y, x)` is outside the logical window.
    pub fn set(&self, y: usize, x: usize, value: T) {
        assert!(y < self.rows && x < self.cols, "position out of range");
        self.data[self.origin + y * self.step + x].set(value);
    }

    /// Sets every element of the logical window to `value`.
    pub fn fill(&self, value: T) {
        for y in 0..self.rows {
            let row = self.row(y).expect("row within view bounds");
            for cell in row {
                cell.set(value);
            }
        }
    }

    /// Copies the logical window into `dst`, row by row.
    pub fn copy_to(&self, dst: GridCells<'_, T>) -> GridScanResult<()> {
        grid::check_shape(self, &dst)?;
        for y in 0..self.rows {
            let src = self.row(y).expect("row within view bounds");
            let out = dst.row(y).expect("row within view bounds");
            for (cell, value) in out.iter().zip(src) {
                cell.set(value.get());
            }
        }
        Ok(())
    }

    /// Deep copy: allocates a fresh contiguous [`GridBuf`] with the same
    /// shape and copies the addressed contents into it.
    pub fn deep_clone(&self) -> GridBuf<T> {
        let mut data = Vec::with_capacity(self.rows * self.cols);
        for y in 0..self.rows {
            let row = self.row(y).expect("row within view bounds");
            data.extend(row.iter().map(Cell::get));
        }
        GridBuf::from_vec_exact(data, self.rows, self.cols)
    }
}

impl<'a, T> Grid for GridCells<'a, T> {
    type Item<'b>
        = &'b Cell<T>
    where
        Self: 'b;

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn at(&self, y: usize, x: usize) -> &Cell<T> {
        debug_assert!(y < self.rows && x < self.cols);
        &self.data[self.origin + y * self.step + x]
    }
}

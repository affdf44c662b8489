//! Owning grids over reference-counted buffers.

use std::cell::Cell;
use std::rc::Rc;

use crate::grid::{self, Grid, GridCells};
use crate::util::{GridScanError, GridScanResult};

/// Owning 2D grid backed by a shared, reference-counted buffer.
///
/// `Clone` is the shallow copy: it clones the handle and shares the buffer,
/// leaving the `(origin, rows, cols, step)` metadata independent, the way an
/// `Rc` handle behaves. The deep copy is the separately named
/// [`GridBuf::deep_clone`]. Cropped children share the parent's buffer and
/// keep the allocation alive for as long as any handle exists.
///
/// Elements live in [`Cell`]s, so writes go through `&self`; that interior
/// mutability is what makes the shared-buffer model coherent without locks
/// in a single-threaded crate.
pub struct GridBuf<T> {
    data: Rc<[Cell<T>]>,
    origin: usize,
    rows: usize,
    cols: usize,
    step: usize,
}

impl<T> Clone for GridBuf<T> {
    /// Shallow copy: shares the reference-counted buffer.
    fn clone(&self) -> Self {
        Self {
            data: Rc::clone(&self.data),
            origin: self.origin,
            rows: self.rows,
            cols: self.cols,
            step: self.step,
        }
    }
}

impl<T: Default> GridBuf<T> {
    /// Allocates a `rows x cols` grid of default-valued elements.
    pub fn new(rows: usize, cols: usize) -> GridScanResult<Self> {
        grid::required_len(rows, cols, cols)?;
        let data: Vec<Cell<T>> = (0..rows * cols).map(|_| Cell::new(T::default())).collect();
        Ok(Self {
            data: data.into(),
            origin: 0,
            rows,
            cols,
            step: cols,
        })
    }
}

impl<T: Copy> GridBuf<T> {
    /// Allocates a `rows x cols` grid with every element set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> GridScanResult<Self> {
        grid::required_len(rows, cols, cols)?;
        let data: Vec<Cell<T>> = (0..rows * cols).map(|_| Cell::new(value)).collect();
        Ok(Self {
            data: data.into(),
            origin: 0,
            rows,
            cols,
            step: cols,
        })
    }

    /// Returns the value at `(y, x)` if it is within the logical window.
    pub fn get(&self, y: usize, x: usize) -> Option<T> {
        if y >= self.rows || x >= self.cols {
            return None;
        }
        self.data.get(self.origin + y * self.step + x).map(Cell::get)
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
        self.cells().fill(value);
    }

    /// Copies the logical window into `dst`, row by row; shapes must match.
    pub fn copy_to(&self, dst: &GridBuf<T>) -> GridScanResult<()> {
        self.cells().copy_to(dst.cells())
    }

    /// Deep copy: allocates fresh contiguous storage with the same shape
    /// and copies the addressed contents into it.
    pub fn deep_clone(&self) -> Self {
        self.cells().deep_clone()
    }
}

impl<T> GridBuf<T> {
    /// Adopts an existing buffer as a contiguous `rows x cols` grid.
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> GridScanResult<Self> {
        let needed = grid::required_len(rows, cols, cols)?;
        if data.len() < needed {
            return Err(GridScanError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self::from_vec_exact(data, rows, cols))
    }

    /// Internal constructor for buffers already known to fit.
    pub(crate) fn from_vec_exact(data: Vec<T>, rows: usize, cols: usize) -> Self {
        let cells: Vec<Cell<T>> = data.into_iter().map(Cell::new).collect();
        Self {
            data: cells.into(),
            origin: 0,
            rows,
            cols,
            step: cols,
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

    /// Borrows the grid as a writable view over the same buffer.
    pub fn cells(&self) -> GridCells<'_, T> {
        GridCells::from_parts(&self.data, self.origin, self.rows, self.cols, self.step)
    }

    /// Returns the cells of row `y` as a contiguous slice of length `cols`.
    pub fn row(&self, y: usize) -> Option<&[Cell<T>]> {
        if y >= self.rows {
            return None;
        }
        let start = self.origin + y * self.step;
        self.data.get(start..start + self.cols)
    }

    /// Returns a sub-grid sharing this grid's buffer.
    ///
    /// The child holds its own handle to the allocation, so it remains
    /// valid after the parent is dropped.
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
            data: Rc::clone(&self.data),
            origin,
            rows,
            cols,
            step: self.step,
        })
    }

    /// Signed crop re-widening a previously cropped grid; validated against
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
            data: Rc::clone(&self.data),
            origin,
            rows,
            cols,
            step: self.step,
        })
    }
}

impl<T> Grid for GridBuf<T> {
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

//! Read-only strided views over borrowed buffers.

use crate::grid::{self, Grid, GridBuf, GridCells};
use crate::util::{GridScanError, GridScanResult};

/// Borrowed, read-only 2D view with an explicit row step.
///
/// The view never owns memory; it is a `(origin, rows, cols, step)` index
/// tuple over the whole backing slice, so the element at `(y, x)` lives at
/// `origin + step * y + x`. A step larger than the column count represents
/// padded rows. Crops are zero-copy: they move the origin and shrink the
/// shape while keeping the step and the backing slice, which is what lets
/// [`GridView::crop_signed`] re-widen a cropped view later.
#[derive(Copy, Clone, Debug)]
pub struct GridView<'a, T> {
    data: &'a [T],
    origin: usize,
    rows: usize,
    cols: usize,
    step: usize,
}

impl<'a, T> GridView<'a, T> {
    /// Creates a contiguous view with `step == cols`.
    pub fn from_slice(data: &'a [T], rows: usize, cols: usize) -> GridScanResult<Self> {
        Self::new(data, rows, cols, cols)
    }

    /// Creates a view with an explicit step.
    pub fn new(data: &'a [T], rows: usize, cols: usize, step: usize) -> GridScanResult<Self> {
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

    /// Returns the element at `(y, x)` if it is within the logical window.
    pub fn get(&self, y: usize, x: usize) -> Option<&'a T> {
        if y >= self.rows || x >= self.cols {
            return None;
        }
        self.data.get(self.origin + y * self.step + x)
    }

    /// Returns a contiguous slice for row `y` with length `cols`.
    pub fn row(&self, y: usize) -> Option<&'a [T]> {
        if y >= self.rows {
            return None;
        }
        let start = self.origin + y * self.step;
        self.data.get(start..start + self.cols)
    }

    /// Returns a zero-copy sub-view sharing the backing slice.
    ///
    /// The window must lie inside this view: `top + rows <= self.rows()` and
    /// `left + cols <= self.cols()`, otherwise `OutOfRange`. The step is
    /// retained, so the sub-view addresses the same memory as the parent.
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

    /// Signed crop: negative `top`/`left` re-widen a previously cropped
    /// view back toward its original extent.
    ///
    /// Unlike [`GridView::crop`], the requested window is validated against
    /// the backing allocation instead of the logical window, so an un-crop
    /// of a cropped view succeeds while anything addressing outside the
    /// allocation fails with `OutOfRange`.
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

impl<'a, T: Copy> GridView<'a, T> {
    /// Copies the logical window into `dst`, row by row.
    ///
    /// Shapes must match; only `cols` elements per row are copied, never the
    /// step padding.
    pub fn copy_to(&self, dst: GridCells<'_, T>) -> GridScanResult<()> {
        grid::check_shape(self, &dst)?;
        for y in 0..self.rows {
            let src = self.row(y).expect("row within view bounds");
            let out = dst.row(y).expect("row within view bounds");
            for (cell, value) in out.iter().zip(src) {
                cell.set(*value);
            }
        }
        Ok(())
    }

    /// Deep copy: allocates a fresh contiguous [`GridBuf`] with the same
    /// shape and copies the addressed contents into it.
    pub fn deep_clone(&self) -> GridBuf<T> {
        let mut data = Vec::with_capacity(self.rows * self.cols);
        for y in 0..self.rows {
            data.extend_from_slice(self.row(y).expect("row within view bounds"));
        }
        GridBuf::from_vec_exact(data, self.rows, self.cols)
    }
}

impl<'a, T> Grid for GridView<'a, T> {
    type Item<'b>
        = &'b T
    where
        Self: 'b;

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn at(&self, y: usize, x: usize) -> &T {
        debug_assert!(y < self.rows && x < self.cols);
        &self.data[self.origin + y * self.step + x]
    }
}

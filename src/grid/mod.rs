//! Grid views, owned grids, and the grid capability trait.
//!
//! Everything the iteration algorithms consume satisfies [`Grid`]: a
//! read-only borrowed view ([`GridView`]), a writable borrowed view
//! ([`GridCells`]), an owning reference-counted grid ([`GridBuf`]), and a
//! storage-free index grid ([`IndexGrid`]). Any future grid-like adapter
//! that honors the same contract is interchangeable with these.

use crate::util::{GridScanError, GridScanResult};

pub mod buf;
pub mod cells;
pub mod index;
pub mod view;

pub use buf::GridBuf;
pub use cells::GridCells;
pub use index::{Idx, IndexGrid};
pub use view::GridView;

/// The grid capability: a 2D, row-major, possibly strided arrangement of
/// items of a fixed type.
///
/// `Item` is what a visitation functor receives for one cell: `&T` for
/// read-only views, `&Cell<T>` for writable views, an [`Idx`] by value for
/// the synthetic index grid.
///
/// The capability deliberately stops at shape and access. A row step is a
/// property of buffer-backed grids, so `step()` lives on [`GridView`],
/// [`GridCells`] and [`GridBuf`] rather than here; [`IndexGrid`] has no
/// storage and therefore no step at all.
pub trait Grid {
    /// What a visitation functor receives for one cell.
    type Item<'a>
    where
        Self: 'a;

    /// Number of rows.
    fn rows(&self) -> usize;

    /// Number of columns.
    fn cols(&self) -> usize;

    /// Positional accessor for the cell at row `y`, column `x`.
    ///
    /// Callers must keep `y < rows()` and `x < cols()`; the iteration
    /// algorithms in this crate always do. A violation panics in debug
    /// builds and is not a supported access path in release builds.
    fn at(&self, y: usize, x: usize) -> Self::Item<'_>;
}

/// Minimum buffer length for a `rows x cols` grid with the given step,
/// validating the dimensions along the way.
pub(crate) fn required_len(rows: usize, cols: usize, step: usize) -> GridScanResult<usize> {
    if rows == 0 || cols == 0 {
        return Err(GridScanError::InvalidDimensions { rows, cols });
    }
    if step < cols {
        return Err(GridScanError::InvalidStride { cols, step });
    }
    (rows - 1)
        .checked_mul(step)
        .and_then(|v| v.checked_add(cols))
        .ok_or(GridScanError::InvalidDimensions { rows, cols })
}

/// Checks that two grids share a shape, reporting the first grid's shape as
/// the expected one.
pub(crate) fn check_shape<A, B>(a: &A, b: &B) -> GridScanResult<()>
where
    A: Grid,
    B: Grid,
{
    if a.rows() != b.rows() || a.cols() != b.cols() {
        return Err(GridScanError::ShapeMismatch {
            expected_rows: a.rows(),
            expected_cols: a.cols(),
            rows: b.rows(),
            cols: b.cols(),
        });
    }
    Ok(())
}

/// Origin offset for an unsigned crop. The requested window must lie inside
/// the logical extent of the source.
#[allow(clippy::too_many_arguments)]
pub(crate) fn crop_offset(
    origin: usize,
    step: usize,
    src_rows: usize,
    src_cols: usize,
    top: usize,
    left: usize,
    rows: usize,
    cols: usize,
) -> GridScanResult<usize> {
    if rows == 0 || cols == 0 {
        return Err(GridScanError::InvalidDimensions { rows, cols });
    }
    let row_end = top.checked_add(rows);
    let col_end = left.checked_add(cols);
    if row_end.map_or(true, |v| v > src_rows) || col_end.map_or(true, |v| v > src_cols) {
        return Err(GridScanError::OutOfRange {
            top: top as isize,
            left: left as isize,
            rows,
            cols,
            src_rows,
            src_cols,
        });
    }
    Ok(origin + step * top + left)
}

/// Origin offset for a signed crop. Negative offsets re-widen a previously
/// cropped grid, so the window is validated against the backing allocation
/// rather than the logical extent; it can never escape the allocation.
#[allow(clippy::too_many_arguments)]
pub(crate) fn crop_signed_offset(
    origin: usize,
    step: usize,
    data_len: usize,
    src_rows: usize,
    src_cols: usize,
    top: isize,
    left: isize,
    rows: usize,
    cols: usize,
) -> GridScanResult<usize> {
    if rows == 0 || cols == 0 {
        return Err(GridScanError::InvalidDimensions { rows, cols });
    }
    if cols > step {
        return Err(GridScanError::InvalidStride { cols, step });
    }
    let out_of_range = || GridScanError::OutOfRange {
        top,
        left,
        rows,
        cols,
        src_rows,
        src_cols,
    };
    let new_origin = (step as isize)
        .checked_mul(top)
        .and_then(|v| v.checked_add(left))
        .and_then(|v| v.checked_add(origin as isize))
        .ok_or_else(out_of_range)?;
    if new_origin < 0 {
        return Err(out_of_range());
    }
    let new_origin = new_origin as usize;
    let needed = (rows - 1)
        .checked_mul(step)
        .and_then(|v| v.checked_add(cols))
        .and_then(|v| v.checked_add(new_origin))
        .ok_or_else(out_of_range)?;
    if needed > data_len {
        return Err(out_of_range());
    }
    Ok(new_origin)
}

#[cfg(test)]
mod tests {
    use super::{crop_offset, crop_signed_offset, required_len};
    use crate::util::GridScanError;

    #[test]
    fn required_len_counts_padding_once() {
        assert_eq!(required_len(3, 4, 4).unwrap(), 12);
        assert_eq!(required_len(3, 4, 6).unwrap(), 16);
        assert_eq!(required_len(1, 4, 100).unwrap(), 4);
    }

    #[test]
    fn required_len_rejects_bad_layouts() {
        assert_eq!(
            required_len(0, 4, 4).err().unwrap(),
            GridScanError::InvalidDimensions { rows: 0, cols: 4 }
        );
        assert_eq!(
            required_len(2, 4, 3).err().unwrap(),
            GridScanError::InvalidStride { cols: 4, step: 3 }
        );
    }

    #[test]
    fn crop_offset_advances_by_step() {
        assert_eq!(crop_offset(0, 5, 4, 5, 1, 2, 2, 2).unwrap(), 7);
        assert!(crop_offset(0, 5, 4, 5, 3, 0, 2, 2).is_err());
    }

    #[test]
    fn crop_signed_offset_stays_in_allocation() {
        // widen a 2x2 window at origin 7 back to the full 4x5 grid
        assert_eq!(crop_signed_offset(7, 5, 20, 2, 2, -1, -2, 4, 5).unwrap(), 0);
        // escaping before the allocation and past its end both report the
        // requested window, each through its own rejection branch
        assert_eq!(
            crop_signed_offset(7, 5, 20, 2, 2, -2, -2, 4, 5).err().unwrap(),
            GridScanError::OutOfRange {
                top: -2,
                left: -2,
                rows: 4,
                cols: 5,
                src_rows: 2,
                src_cols: 2,
            }
        );
        assert_eq!(
            crop_signed_offset(0, 5, 20, 4, 5, 0, 0, 5, 5).err().unwrap(),
            GridScanError::OutOfRange {
                top: 0,
                left: 0,
                rows: 5,
                cols: 5,
                src_rows: 4,
                src_cols: 5,
            }
        );
    }
}

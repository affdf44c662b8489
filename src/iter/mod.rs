//! Elementwise iteration over one to four grids.
//!
//! The `for_each` family visits every position of its grids in row-major
//! order and invokes the functor once per position with one item per grid,
//! in grid-argument order. All grids must share a shape; the multi-grid
//! variants check this and fail with `ShapeMismatch`. Iteration is purely
//! sequential and makes no assumption about functor purity.

pub mod pair;

pub use pair::{for_each_pair, for_each_pair2, for_each_pair3, for_each_pair4};

use crate::grid::{self, Grid};
use crate::util::GridScanResult;

/// Visits every position of one grid in row-major order.
///
/// ```
/// use gridscan::{for_each, GridView};
///
/// let data = [1u32, 2, 3, 4, 5, 6];
/// let view = GridView::from_slice(&data, 2, 3)?;
/// let mut sum = 0;
/// for_each(&view, |&v| sum += v);
/// assert_eq!(sum, 21);
/// # Ok::<(), gridscan::GridScanError>(())
/// ```
pub fn for_each<'g, A, F>(a: &'g A, mut func: F)
where
    A: Grid,
    F: FnMut(A::Item<'g>),
{
    for y in 0..a.rows() {
        for x in 0..a.cols() {
            func(a.at(y, x));
        }
    }
}

/// Visits every position of two same-shaped grids in row-major order.
///
/// Writable grids receive cell handles, so the functor can mutate in place:
///
/// ```
/// use gridscan::{for_each2, GridCells, GridView};
///
/// let input = [1u8, 2, 3, 4, 5, 6];
/// let mut output = [0u16; 6];
/// let src = GridView::from_slice(&input, 2, 3)?;
/// let dst = GridCells::from_mut(&mut output, 2, 3)?;
/// for_each2(&src, &dst, |&px, out| out.set(u16::from(px) * 2))?;
/// assert_eq!(output, [2, 4, 6, 8, 10, 12]);
/// # Ok::<(), gridscan::GridScanError>(())
/// ```
pub fn for_each2<'g, A, B, F>(a: &'g A, b: &'g B, mut func: F) -> GridScanResult<()>
where
    A: Grid,
    B: Grid,
    F: FnMut(A::Item<'g>, B::Item<'g>),
{
    grid::check_shape(a, b)?;
    for y in 0..a.rows() {
        for x in 0..a.cols() {
            func(a.at(y, x), b.at(y, x));
        }
    }
    Ok(())
}

/// Visits every position of three same-shaped grids in row-major order.
pub fn for_each3<'g, A, B, C, F>(a: &'g A, b: &'g B, c: &'g C, mut func: F) -> GridScanResult<()>
where
    A: Grid,
    B: Grid,
    C: Grid,
    F: FnMut(A::Item<'g>, B::Item<'g>, C::Item<'g>),
{
    grid::check_shape(a, b)?;
    grid::check_shape(a, c)?;
    for y in 0..a.rows() {
        for x in 0..a.cols() {
            func(a.at(y, x), b.at(y, x), c.at(y, x));
        }
    }
    Ok(())
}

/// Visits every position of four same-shaped grids in row-major order.
pub fn for_each4<'g, A, B, C, D, F>(
    a: &'g A,
    b: &'g B,
    c: &'g C,
    d: &'g D,
    mut func: F,
) -> GridScanResult<()>
where
    A: Grid,
    B: Grid,
    C: Grid,
    D: Grid,
    F: FnMut(A::Item<'g>, B::Item<'g>, C::Item<'g>, D::Item<'g>),
{
    grid::check_shape(a, b)?;
    grid::check_shape(a, c)?;
    grid::check_shape(a, d)?;
    for y in 0..a.rows() {
        for x in 0..a.cols() {
            func(a.at(y, x), b.at(y, x), c.at(y, x), d.at(y, x));
        }
    }
    Ok(())
}

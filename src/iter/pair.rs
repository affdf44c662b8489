//! Single-visit traversal of 4-adjacent cell pairs.
//!
//! The `for_each_pair` family visits every undirected edge of the
//! 4-adjacency graph of its grids exactly once: an `R x C` grid yields
//! `R*(C-1)` horizontal and `C*(R-1)` vertical edges. The functor always
//! receives the earlier position first (the up or left cell), then the
//! later one, with the items grouped per grid. The traversal order is part
//! of the contract since side-effecting functors can observe it:
//!
//! 1. vertical edges of column 0, top to bottom;
//! 2. horizontal edges of row 0, left to right;
//! 3. for each remaining position in row-major order, its vertical pair
//!    first, then its horizontal pair.

use crate::grid::{self, Grid};
use crate::util::GridScanResult;

/// Visits every 4-adjacent pair of one grid exactly once.
pub fn for_each_pair<'g, A, F>(a: &'g A, mut func: F)
where
    A: Grid,
    F: FnMut(A::Item<'g>, A::Item<'g>),
{
    let rows = a.rows();
    let cols = a.cols();
    // first column
    for y in 1..rows {
        func(a.at(y - 1, 0), a.at(y, 0));
    }
    // first row
    for x in 1..cols {
        func(a.at(0, x - 1), a.at(0, x));
    }
    // the rest
    for y in 1..rows {
        for x in 1..cols {
            func(a.at(y - 1, x), a.at(y, x));
            func(a.at(y, x - 1), a.at(y, x));
        }
    }
}

/// Visits every 4-adjacent pair of two same-shaped grids exactly once.
///
/// The classic use is accumulating signed differences, where each edge
/// contributes once with opposite signs to its two sides:
///
/// ```
/// use gridscan::{for_each_pair2, GridCells, GridView};
///
/// let image = [0u8, 0, 0, 0, 9, 0, 0, 0, 0];
/// let mut laplacian = [0i32; 9];
/// let img = GridView::from_slice(&image, 3, 3)?;
/// let lap = GridCells::from_mut(&mut laplacian, 3, 3)?;
/// for_each_pair2(&img, &lap, |&b1, &b2, l1, l2| {
///     let d = i32::from(b1) - i32::from(b2);
///     l1.set(l1.get() + d);
///     l2.set(l2.get() - d);
/// })?;
/// assert_eq!(laplacian[4], 36);
/// assert_eq!(laplacian.iter().sum::<i32>(), 0);
/// # Ok::<(), gridscan::GridScanError>(())
/// ```
pub fn for_each_pair2<'g, A, B, F>(a: &'g A, b: &'g B, mut func: F) -> GridScanResult<()>
where
    A: Grid,
    B: Grid,
    F: FnMut(A::Item<'g>, A::Item<'g>, B::Item<'g>, B::Item<'g>),
{
    grid::check_shape(a, b)?;
    let rows = a.rows();
    let cols = a.cols();
    // first column
    for y in 1..rows {
        func(a.at(y - 1, 0), a.at(y, 0), b.at(y - 1, 0), b.at(y, 0));
    }
    // first row
    for x in 1..cols {
        func(a.at(0, x - 1), a.at(0, x), b.at(0, x - 1), b.at(0, x));
    }
    // the rest
    for y in 1..rows {
        for x in 1..cols {
            func(a.at(y - 1, x), a.at(y, x), b.at(y - 1, x), b.at(y, x));
            func(a.at(y, x - 1), a.at(y, x), b.at(y, x - 1), b.at(y, x));
        }
    }
    Ok(())
}

/// Visits every 4-adjacent pair of three same-shaped grids exactly once.
pub fn for_each_pair3<'g, A, B, C, F>(
    a: &'g A,
    b: &'g B,
    c: &'g C,
    mut func: F,
) -> GridScanResult<()>
where
    A: Grid,
    B: Grid,
    C: Grid,
    F: FnMut(
        A::Item<'g>,
        A::Item<'g>,
        B::Item<'g>,
        B::Item<'g>,
        C::Item<'g>,
        C::Item<'g>,
    ),
{
    grid::check_shape(a, b)?;
    grid::check_shape(a, c)?;
    let rows = a.rows();
    let cols = a.cols();
    // first column
    for y in 1..rows {
        func(
            a.at(y - 1, 0),
            a.at(y, 0),
            b.at(y - 1, 0),
            b.at(y, 0),
            c.at(y - 1, 0),
            c.at(y, 0),
        );
    }
    // first row
    for x in 1..cols {
        func(
            a.at(0, x - 1),
            a.at(0, x),
            b.at(0, x - 1),
            b.at(0, x),
            c.at(0, x - 1),
            c.at(0, x),
        );
    }
    // the rest
    for y in 1..rows {
        for x in 1..cols {
            func(
                a.at(y - 1, x),
                a.at(y, x),
                b.at(y - 1, x),
                b.at(y, x),
                c.at(y - 1, x),
                c.at(y, x),
            );
            func(
                a.at(y, x - 1),
                a.at(y, x),
                b.at(y, x - 1),
                b.at(y, x),
                c.at(y, x - 1),
                c.at(y, x),
            );
        }
    }
    Ok(())
}

/// Visits every 4-adjacent pair of four same-shaped grids exactly once.
pub fn for_each_pair4<'g, A, B, C, D, F>(
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
    F: FnMut(
        A::Item<'g>,
        A::Item<'g>,
        B::Item<'g>,
        B::Item<'g>,
        C::Item<'g>,
        C::Item<'g>,
        D::Item<'g>,
        D::Item<'g>,
    ),
{
    grid::check_shape(a, b)?;
    grid::check_shape(a, c)?;
    grid::check_shape(a, d)?;
    let rows = a.rows();
    let cols = a.cols();
    // first column
    for y in 1..rows {
        func(
            a.at(y - 1, 0),
            a.at(y, 0),
            b.at(y - 1, 0),
            b.at(y, 0),
            c.at(y - 1, 0),
            c.at(y, 0),
            d.at(y - 1, 0),
            d.at(y, 0),
        );
    }
    // first row
    for x in 1..cols {
        func(
            a.at(0, x - 1),
            a.at(0, x),
            b.at(0, x - 1),
            b.at(0, x),
            c.at(0, x - 1),
            c.at(0, x),
            d.at(0, x - 1),
            d.at(0, x),
        );
    }
    // the rest
    for y in 1..rows {
        for x in 1..cols {
            func(
                a.at(y - 1, x),
                a.at(y, x),
                b.at(y - 1, x),
                b.at(y, x),
                c.at(y - 1, x),
                c.at(y, x),
                d.at(y - 1, x),
                d.at(y, x),
            );
            func(
                a.at(y, x - 1),
                a.at(y, x),
                b.at(y, x - 1),
                b.at(y, x),
                c.at(y, x - 1),
                c.at(y, x),
                d.at(y, x - 1),
                d.at(y, x),
            );
        }
    }
    Ok(())
}

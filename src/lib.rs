//! Gridscan is an allocation-free iteration protocol over 2D strided grids.
//!
//! Any externally owned, row-major (possibly padded) buffer can be wrapped
//! without copying: [`GridView`] for read-only access, [`GridCells`] for
//! in-place mutation. [`GridBuf`] owns its own reference-counted buffer,
//! and [`IndexGrid`] is a storage-free grid whose elements are their own
//! coordinates. All of them satisfy the [`Grid`] trait and are
//! interchangeable wherever a grid is expected.
//!
//! Three algorithms are built on that capability: elementwise iteration
//! over one to four grids ([`for_each`] and friends), single-visit
//! traversal of 4-adjacent cell pairs ([`for_each_pair`] and friends), and
//! boundary-clipped window filtering ([`filter()`], with a
//! [`gaussian_kernel`] generator). Per-position computation is expressed as
//! plain functors; no element type, I/O format, or algorithm is baked in.

pub mod filter;
pub mod grid;
pub mod iter;
mod trace;
pub mod util;

pub use filter::{filter, gaussian_kernel};
pub use grid::{Grid, GridBuf, GridCells, GridView, Idx, IndexGrid};
pub use iter::{
    for_each, for_each2, for_each3, for_each4, for_each_pair, for_each_pair2, for_each_pair3,
    for_each_pair4,
};
pub use util::{GridScanError, GridScanResult};

//! Error types for gridscan.

use thiserror::Error;

/// Result alias for gridscan operations.
pub type GridScanResult<T> = std::result::Result<T, GridScanError>;

/// Errors reported by grid constructors and iteration algorithms.
///
/// Every variant is a caller-input validation failure. None is fatal, none
/// involves I/O, and all are deterministic given the inputs, so there is no
/// retry concept; callers reject the bad input and move on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridScanError {
    /// A grid dimension is zero.
    #[error("invalid dimensions: {rows}x{cols}")]
    InvalidDimensions {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
    /// The row step is smaller than the column count.
    #[error("invalid step: cols={cols}, step={step}")]
    InvalidStride {
        /// Logical column count.
        cols: usize,
        /// Elements between row starts.
        step: usize,
    },
    /// The backing buffer cannot hold the described grid.
    #[error("buffer too small: needed {needed}, got {got}")]
    BufferTooSmall {
        /// Minimum buffer length for the described grid.
        needed: usize,
        /// Actual buffer length.
        got: usize,
    },
    /// Grids passed to a multi-grid operation differ in shape.
    #[error("shape mismatch: expected {expected_rows}x{expected_cols}, got {rows}x{cols}")]
    ShapeMismatch {
        /// Rows of the first grid.
        expected_rows: usize,
        /// Columns of the first grid.
        expected_cols: usize,
        /// Rows of the offending grid.
        rows: usize,
        /// Columns of the offending grid.
        cols: usize,
    },
    /// Crop parameters exceed the source extent.
    #[error(
        "crop out of range: top={top} left={left} rows={rows} cols={cols} in {src_rows}x{src_cols}"
    )]
    OutOfRange {
        /// Top offset of the requested window.
        top: isize,
        /// Left offset of the requested window.
        left: isize,
        /// Rows of the requested window.
        rows: usize,
        /// Columns of the requested window.
        cols: usize,
        /// Rows of the source grid.
        src_rows: usize,
        /// Columns of the source grid.
        src_cols: usize,
    },
    /// A filter kernel violates its size constraints.
    #[error("invalid kernel: {0}")]
    InvalidKernel(&'static str),
}

//! Gaussian kernel generation.

use crate::grid::GridBuf;
use crate::util::{GridScanError, GridScanResult};

/// Builds a symmetric Gaussian weight kernel of the given shape.
///
/// The weight at offset `(dx, dy)` from the center is
/// `exp(-(dx^2 + dy^2) / (2 * sigma^2))`; the center weight is 1. Each
/// distance class is computed once per quadrant and mirrored into the other
/// three, so `exp` runs roughly once per four cells.
///
/// Weights are not normalized. Evaluate functors are expected to divide by
/// the weight sum they actually accumulated, which is also what keeps
/// boundary-clipped windows correct in [`filter()`](crate::filter::filter()).
pub fn gaussian_kernel(rows: usize, cols: usize, sigma: f64) -> GridScanResult<GridBuf<f32>> {
    if rows == 0 || cols == 0 || rows % 2 == 0 || cols % 2 == 0 {
        return Err(GridScanError::InvalidKernel("kernel dimensions must be odd"));
    }
    if sigma <= 0.0 {
        return Err(GridScanError::InvalidKernel("sigma must be positive"));
    }
    let cy = rows / 2;
    let cx = cols / 2;
    let factor = 0.5 / (sigma * sigma);
    let mut weights = vec![0.0f32; rows * cols];
    for dy in 0..=cy {
        for dx in 0..=cx {
            let w = (-factor * (dx * dx + dy * dy) as f64).exp() as f32;
            weights[(cy - dy) * cols + (cx - dx)] = w;
            weights[(cy - dy) * cols + (cx + dx)] = w;
            weights[(cy + dy) * cols + (cx - dx)] = w;
            weights[(cy + dy) * cols + (cx + dx)] = w;
        }
    }
    Ok(GridBuf::from_vec_exact(weights, rows, cols))
}

//! Boundary-aware local-window filtering.
//!
//! A 2D filter is a local process: each output pixel depends on a
//! kernel-sized neighborhood of the input. [`filter()`] owns both nested
//! iterations, the outer walk over output positions and the inner walk over
//! the window, and leaves the arithmetic to two caller functors. The
//! `accumulate` functor folds `(input pixel, kernel weight)` pairs into an
//! explicit state object; `evaluate` turns that state into one output pixel
//! and resets it for the next position.
//!
//! At the image boundary the window is clipped to the valid extent and the
//! kernel is clipped to the matching sub-rectangle, so every accumulated
//! pair stays aligned; there is no zero-padding. Evaluate functors that
//! normalize by the accumulated weight sum therefore behave correctly at
//! the borders for free.

pub mod gaussian;

pub use gaussian::gaussian_kernel;

use crate::grid::{self, Grid};
use crate::trace::{trace_event, trace_span};
use crate::util::{GridScanError, GridScanResult};

/// Runs a window filter over `input`, writing one value per position of
/// `output`.
///
/// `state` is the shared intermediate result: `accumulate` folds into it
/// once per `(input pixel, kernel weight)` pair of the clipped window,
/// `evaluate` is then invoked exactly once for the output position and is
/// expected to reset the state before returning.
///
/// Kernel dimensions must be odd so a unique center exists, and the kernel
/// must fit inside the input in both dimensions; `input` and `output` must
/// share a shape. Complexity is `O(rows * cols * krows * kcols)`; only the
/// four border bands pay clipping arithmetic, the interior runs the full
/// kernel with precomputed bounds.
///
/// ```
/// use gridscan::{filter, gaussian_kernel, GridCells, GridView};
///
/// let input = [10.0f32; 20];
/// let mut blurred = [0.0f32; 20];
/// let src = GridView::from_slice(&input, 4, 5)?;
/// let dst = GridCells::from_mut(&mut blurred, 4, 5)?;
/// let kernel = gaussian_kernel(3, 3, 1.0)?;
///
/// let mut acc = (0.0f32, 0.0f32); // (weighted sum, weight sum)
/// filter(
///     &src,
///     &dst,
///     &kernel,
///     &mut acc,
///     |acc, &px, w| {
///         acc.0 += px * w.get();
///         acc.1 += w.get();
///     },
///     |acc, out| {
///         out.set(acc.0 / acc.1);
///         *acc = (0.0, 0.0);
///     },
/// )?;
/// assert!(blurred.iter().all(|&v| (v - 10.0).abs() < 1e-4));
/// # Ok::<(), gridscan::GridScanError>(())
/// ```
pub fn filter<'g, I, O, K, S, A, E>(
    input: &'g I,
    output: &'g O,
    kernel: &'g K,
    state: &mut S,
    mut accumulate: A,
    mut evaluate: E,
) -> GridScanResult<()>
where
    I: Grid,
    O: Grid,
    K: Grid,
    A: FnMut(&mut S, I::Item<'g>, K::Item<'g>),
    E: FnMut(&mut S, O::Item<'g>),
{
    grid::check_shape(input, output)?;
    let rows = input.rows();
    let cols = input.cols();
    let krows = kernel.rows();
    let kcols = kernel.cols();
    if krows == 0 || kcols == 0 || krows % 2 == 0 || kcols % 2 == 0 {
        return Err(GridScanError::InvalidKernel("kernel dimensions must be odd"));
    }
    if krows > rows || kcols > cols {
        return Err(GridScanError::InvalidKernel("kernel larger than input"));
    }
    let kr = krows / 2;
    let kc = kcols / 2;

    let _span = trace_span!("filter", rows, cols, krows, kcols).entered();
    trace_event!("filter_bands", band_rows = kr, band_cols = kc);

    // top band
    for y in 0..kr {
        for x in 0..cols {
            clipped(input, output, kernel, state, &mut accumulate, &mut evaluate, y, x, kr, kc);
        }
    }
    // bottom band
    for y in rows - kr..rows {
        for x in 0..cols {
            clipped(input, output, kernel, state, &mut accumulate, &mut evaluate, y, x, kr, kc);
        }
    }
    // left band
    for y in kr..rows - kr {
        for x in 0..kc {
            clipped(input, output, kernel, state, &mut accumulate, &mut evaluate, y, x, kr, kc);
        }
    }
    // right band
    for y in kr..rows - kr {
        for x in cols - kc..cols {
            clipped(input, output, kernel, state, &mut accumulate, &mut evaluate, y, x, kr, kc);
        }
    }
    // interior, full kernel, no clipping arithmetic
    for y in kr..rows - kr {
        for x in kc..cols - kc {
            run_window(
                input,
                kernel,
                state,
                &mut accumulate,
                y - kr,
                x - kc,
                krows,
                kcols,
                0,
                0,
            );
            evaluate(state, output.at(y, x));
        }
    }
    Ok(())
}

/// One boundary position: clip the window to the input extent, clip the
/// kernel to the matching sub-rectangle, accumulate, evaluate.
#[allow(clippy::too_many_arguments)]
fn clipped<'g, I, O, K, S, A, E>(
    input: &'g I,
    output: &'g O,
    kernel: &'g K,
    state: &mut S,
    accumulate: &mut A,
    evaluate: &mut E,
    y: usize,
    x: usize,
    kr: usize,
    kc: usize,
) where
    I: Grid,
    O: Grid,
    K: Grid,
    A: FnMut(&mut S, I::Item<'g>, K::Item<'g>),
    E: FnMut(&mut S, O::Item<'g>),
{
    let y0 = y.saturating_sub(kr);
    let y1 = (y + kr + 1).min(input.rows());
    let x0 = x.saturating_sub(kc);
    let x1 = (x + kc + 1).min(input.cols());
    run_window(
        input,
        kernel,
        state,
        accumulate,
        y0,
        x0,
        y1 - y0,
        x1 - x0,
        kr + y0 - y,
        kc + x0 - x,
    );
    evaluate(state, output.at(y, x));
}

/// Row-major accumulation over one window, with the kernel window offset by
/// `(ky0, kx0)` to match the clipped input window.
#[allow(clippy::too_many_arguments)]
fn run_window<'g, I, K, S, A>(
    input: &'g I,
    kernel: &'g K,
    state: &mut S,
    accumulate: &mut A,
    y0: usize,
    x0: usize,
    rows: usize,
    cols: usize,
    ky0: usize,
    kx0: usize,
) where
    I: Grid,
    K: Grid,
    A: FnMut(&mut S, I::Item<'g>, K::Item<'g>),
{
    for dy in 0..rows {
        for dx in 0..cols {
            accumulate(state, input.at(y0 + dy, x0 + dx), kernel.at(ky0 + dy, kx0 + dx));
        }
    }
}

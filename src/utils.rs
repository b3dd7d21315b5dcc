//! Convenience methods for constructing sample tables in a way that echoes,
//! but does not exactly match, methods common in scripting languages.
use num_traits::{Float, FloatConst, NumCast};

use crate::InterpError;

/// Cast a count to the float type; unrepresentable counts become NaN.
#[inline]
fn cast<T: Float>(i: usize) -> T {
    <T as NumCast>::from(i).unwrap_or_else(T::nan)
}

/// Generates evenly spaced values from start to stop,
/// including the endpoint.
pub fn linspace<T>(start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float,
{
    let dx: T = (stop - start) / cast(n.max(2) - 1);
    (0..n).map(|i| start + cast::<T>(i) * dx).collect()
}

/// Generates `n` Chebyshev nodes of the first kind on `[start, stop]`,
/// in increasing order.
///
/// Sampling at these nodes keeps high-degree Lagrange interpolants from
/// oscillating near the ends of the interval.
pub fn chebyshev<T>(start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float + FloatConst,
{
    let two: T = cast(2);
    let mid = (start + stop) / two;
    let half = (stop - start) / two;
    let n_t: T = cast(n);
    (0..n)
        .rev()
        .map(|k| mid + half * (T::PI() * (two * cast::<T>(k) + T::one()) / (two * n_t)).cos())
        .collect()
}

/// Interleaves per-component columns into the flat table layout,
/// like `[p0, q0, w0, p1, q1, w1, ...]` for columns `p`, `q`, `w`.
///
/// # Errors
/// * If there are no columns
/// * If the columns have different lengths
pub fn interleave<T: Copy>(columns: &[&[T]]) -> Result<Vec<T>, InterpError> {
    let n = match columns.first() {
        Some(c) => c.len(),
        None => return Err(InterpError::InvalidInput("Need at least one column")),
    };
    if columns.iter().any(|c| c.len() != n) {
        return Err(InterpError::InvalidInput("Dimension mismatch"));
    }

    Ok((0..n)
        .flat_map(|i| columns.iter().map(move |c| c[i]))
        .collect())
}

//! Polynomial approximation methods over tabulated, vector-valued samples.
//!
//! Every method consumes the same table layout: a list of sample locations
//! `xs` and a flat list of values `ys` holding `stride` consecutive values per
//! sample, like `[p0, q0, w0, p1, q1, w1, ...]` for three components.
//!
//! Long tables are usually not interpolated in one piece. A host asks the
//! method how many samples it needs for a given degree, selects that many
//! samples around the query point with [`sample_window`], and interpolates
//! on the sub-table, which is what [`interpolate_windowed`] does.

pub mod lagrange;
pub mod linear;

use core::ops::Range;

use itertools::Itertools;
use num_traits::Float;

use crate::InterpError;

/// A method that interpolates a sample table at a single query point.
pub trait Approximation<T: Float> {
    /// Human-readable name of the method.
    const NAME: &'static str;

    /// Number of samples needed to build an interpolant of the given degree.
    fn required_sample_count(degree: usize) -> usize;

    /// Interpolate the table at `x`, overwriting `out` (length `stride`)
    /// and handing the same buffer back.
    fn interpolate<'o>(
        x: T,
        xs: &[T],
        ys: &[T],
        stride: usize,
        out: &'o mut [T],
    ) -> Result<&'o mut [T], InterpError>;

    /// Interpolate the table at `x`, allocating for the output for convenience.
    #[cfg(feature = "std")]
    #[inline]
    fn interpolate_alloc(x: T, xs: &[T], ys: &[T], stride: usize) -> Result<Vec<T>, InterpError> {
        let mut out = vec![T::zero(); stride];
        Self::interpolate(x, xs, ys, stride, &mut out)?;
        Ok(out)
    }
}

/// Select `count` consecutive sample indices centred on `x`.
///
/// Points outside the table get the window at the nearest edge. If the table
/// is shorter than `count`, the whole table is returned.
///
/// # Errors
/// * If `count < 2` or the table has fewer than 2 entries
/// * If `xs` is not strictly increasing
pub fn sample_window<T: Float>(x: T, xs: &[T], count: usize) -> Result<Range<usize>, InterpError> {
    let n = xs.len();
    if count < 2 {
        return Err(InterpError::InvalidInput("Window must hold at least 2 samples"));
    }
    if n < 2 {
        return Err(InterpError::InvalidInput("Need at least 2 samples"));
    }
    if let Some((i, (a, b))) = xs.iter().tuple_windows().find_position(|(a, b)| a >= b) {
        return if a == b {
            log::debug!("duplicate sample location at index {}", i);
            Err(InterpError::DegenerateSamples { i, j: i + 1 })
        } else {
            Err(InterpError::InvalidInput(
                "Sample locations must be monotonically increasing",
            ))
        };
    }

    let count = if count > n {
        log::debug!("window of {} truncated to table of {} samples", count, n);
        n
    } else {
        count
    };

    // First sample at or above `x`; the window straddles it
    let above = xs.partition_point(|v| v < &x);
    let first = above.saturating_sub(count / 2).min(n - count);
    log::trace!("window {}..{} of {}", first, first + count, n);

    Ok(first..first + count)
}

/// Interpolate at `x` with method `A`, using only the samples nearest `x`
/// that a `degree` interpolant needs.
///
/// # Errors
/// * Any error from [`sample_window`]
/// * If `ys.len() != xs.len() * stride`
/// * Any error from the method itself
pub fn interpolate_windowed<'o, T, A>(
    x: T,
    xs: &[T],
    ys: &[T],
    stride: usize,
    degree: usize,
    out: &'o mut [T],
) -> Result<&'o mut [T], InterpError>
where
    T: Float,
    A: Approximation<T>,
{
    if stride == 0 || xs.len().checked_mul(stride) != Some(ys.len()) {
        return Err(InterpError::InvalidInput("Dimension mismatch"));
    }
    let window = sample_window(x, xs, A::required_sample_count(degree))?;
    let vals = &ys[window.start * stride..window.end * stride];
    A::interpolate(x, &xs[window], vals, stride, out)
}

#[cfg(test)]
mod test {
    use super::{interpolate_windowed, lagrange::Lagrange, linear::Linear, sample_window};
    use crate::InterpError;
    use crate::utils::linspace;

    #[test]
    fn test_window_centered() {
        let xs = linspace(0.0_f64, 9.0, 10);

        assert_eq!(sample_window(4.5, &xs, 4).unwrap(), 3..7);
        assert_eq!(sample_window(4.0, &xs, 4).unwrap(), 2..6);
        assert_eq!(sample_window(4.0, &xs, 3).unwrap(), 3..6);
        assert_eq!(sample_window(0.2, &xs, 2).unwrap(), 0..2);
    }

    #[test]
    fn test_window_clamped_to_edges() {
        let xs = linspace(0.0_f64, 9.0, 10);

        // Extrapolation below and above the table
        assert_eq!(sample_window(-100.0, &xs, 4).unwrap(), 0..4);
        assert_eq!(sample_window(100.0, &xs, 4).unwrap(), 6..10);
        assert_eq!(sample_window(8.9, &xs, 4).unwrap(), 6..10);

        // Request larger than the table
        assert_eq!(sample_window(3.0, &xs, 50).unwrap(), 0..10);
    }

    #[test]
    fn test_window_rejects_bad_tables() {
        let xs = [0.0_f64, 1.0, 1.0, 2.0];
        assert_eq!(
            sample_window(0.5, &xs, 2),
            Err(InterpError::DegenerateSamples { i: 1, j: 2 })
        );

        let xs = [0.0_f64, 2.0, 1.0];
        assert!(matches!(
            sample_window(0.5, &xs, 2),
            Err(InterpError::InvalidInput(_))
        ));

        assert!(matches!(
            sample_window(0.5, &[0.0_f64], 2),
            Err(InterpError::InvalidInput(_))
        ));
        assert!(matches!(
            sample_window(0.5, &[0.0_f64, 1.0], 1),
            Err(InterpError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_windowed_methods() {
        // y = x^2 on a long table, two components [x^2, -x^2]
        let xs = linspace(-5.0_f64, 5.0, 11);
        let ys: Vec<f64> = xs.iter().flat_map(|&x| [x * x, -x * x]).collect();
        let mut out = [0.0; 2];

        // Quadratic windows reproduce a quadratic exactly, inside and outside
        for loc in [-7.0, -4.5, 0.25, 3.3, 6.0] {
            interpolate_windowed::<_, Lagrange>(loc, &xs, &ys, 2, 2, &mut out).unwrap();
            assert!((out[0] - loc * loc).abs() < 1e-9);
            assert!((out[1] + loc * loc).abs() < 1e-9);
        }

        // Linear windows give the chord between neighbours
        interpolate_windowed::<_, Linear>(2.5, &xs, &ys, 2, 1, &mut out).unwrap();
        assert!((out[0] - 6.5).abs() < 1e-12);
        assert!((out[1] + 6.5).abs() < 1e-12);

        // Mismatched table
        assert!(matches!(
            interpolate_windowed::<_, Lagrange>(0.0, &xs, &ys[1..], 2, 2, &mut out),
            Err(InterpError::InvalidInput(_))
        ));
        assert!(matches!(
            interpolate_windowed::<_, Lagrange>(0.0, &xs, &[], usize::MAX, 2, &mut out),
            Err(InterpError::InvalidInput(_))
        ));

        // Huge degree uses the whole table
        interpolate_windowed::<_, Lagrange>(0.5, &xs, &ys, 2, usize::MAX, &mut out).unwrap();
        assert!((out[0] - 0.25).abs() < 1e-9);
    }
}

//! Lagrange polynomial interpolation / extrapolation of vector-valued samples.
//!
//! The interpolant through N samples is the degree N-1 polynomial
//!
//! ```text
//! P(x) = sum_i L_i(x) * y_i,    L_i(x) = prod_{j != i} (x - x_j) / (x_i - x_j)
//! ```
//!
//! evaluated directly from the basis coefficients on every call.
//! No weights are precomputed or stored, so evaluation works entirely on the
//! stack and in an embedded environment, at O(N^2 * stride) per query point.
//!
//! ```rust
//! use polyinterp::lagrange;
//!
//! // Samples of (t, t^2) at t = 0, 1, 2
//! let xs = [0.0_f64, 1.0, 2.0];
//! let ys = [0.0_f64, 0.0, 1.0, 1.0, 2.0, 4.0];
//!
//! // Storage for output
//! let mut out = [0.0; 2];
//!
//! // Do interpolation
//! lagrange::interpolate(1.5, &xs, &ys, 2, &mut out).unwrap();
//! assert!((out[0] - 1.5).abs() < 1e-12);
//! assert!((out[1] - 2.25).abs() < 1e-12);
//! ```
//!
//! References
//! * https://en.wikipedia.org/wiki/Lagrange_polynomial
use core::ops::Range;

use num_traits::Float;

use super::{sample_window, Approximation};
use crate::InterpError;

/// Number of samples needed for an interpolant of the given degree.
///
/// At least 2 samples are always requested, even for degree 0.
#[inline]
pub fn required_sample_count(degree: usize) -> usize {
    degree.saturating_add(1).max(2)
}

/// Interpolate the table at `x` into `out`, which must have length `stride`.
///
/// Returns the same buffer that was passed in.
///
/// # Errors
/// * If `stride == 0` or `out.len() != stride`
/// * If there are fewer than 2 samples
/// * If `ys.len() != xs.len() * stride`
/// * If two sample locations are equal; `out` is left zeroed
pub fn interpolate<'o, T: Float>(
    x: T,
    xs: &[T],
    ys: &[T],
    stride: usize,
    out: &'o mut [T],
) -> Result<&'o mut [T], InterpError> {
    LagrangeInterpolator::new(xs, ys, stride)?.interp_one(x, out)?;
    Ok(out)
}

/// Interpolate the table at `x`, allocating for the output.
///
/// For repeated evaluation, use [`interpolate`] with a preallocated buffer.
#[cfg(feature = "std")]
pub fn interpolate_alloc<T: Float>(
    x: T,
    xs: &[T],
    ys: &[T],
    stride: usize,
) -> Result<Vec<T>, InterpError> {
    let mut out = vec![T::zero(); stride];
    interpolate(x, xs, ys, stride, &mut out)?;
    Ok(out)
}

/// Lagrange interpolation as an [`Approximation`] method.
#[derive(Clone, Copy, Debug, Default)]
pub struct Lagrange;

impl<T: Float> Approximation<T> for Lagrange {
    const NAME: &'static str = "Lagrange";

    #[inline]
    fn required_sample_count(degree: usize) -> usize {
        required_sample_count(degree)
    }

    #[inline]
    fn interpolate<'o>(
        x: T,
        xs: &[T],
        ys: &[T],
        stride: usize,
        out: &'o mut [T],
    ) -> Result<&'o mut [T], InterpError> {
        interpolate(x, xs, ys, stride, out)
    }
}

/// A Lagrange interpolator / extrapolator over one sample table.
///
/// Assumes sample `i` owns `vals[i * stride..(i + 1) * stride]`.
/// Sample locations only need to be distinct for full-table evaluation;
/// windowed evaluation additionally needs them increasing.
///
/// Operation Complexity
/// * O(N^2 * stride) per observation point over the full table.
/// * O(degree^2 * stride) + O(N) for windowed evaluation.
///
/// Memory Complexity
/// * No storage beyond the borrowed table and the output buffer.
#[derive(Clone, Copy, Debug)]
pub struct LagrangeInterpolator<'a, T: Float> {
    /// Sample locations, size N
    grid: &'a [T],

    /// Values at each sample, size N * stride
    vals: &'a [T],

    /// Number of values per sample
    stride: usize,
}

impl<'a, T: Float> LagrangeInterpolator<'a, T> {
    /// Build a new interpolator, using O(1) calculations and no storage.
    ///
    /// Duplicate sample locations are not checked here; checking all pairs is
    /// as expensive as an evaluation, and they are caught during evaluation.
    ///
    /// # Errors
    /// * If `stride == 0`
    /// * If there are fewer than 2 samples
    /// * If `vals.len() != grid.len() * stride`
    pub fn new(grid: &'a [T], vals: &'a [T], stride: usize) -> Result<Self, InterpError> {
        if stride == 0 {
            return Err(InterpError::InvalidInput("Stride must be at least 1"));
        }
        if grid.len() < 2 {
            return Err(InterpError::InvalidInput("Need at least 2 samples"));
        }
        if grid.len().checked_mul(stride) != Some(vals.len()) {
            return Err(InterpError::InvalidInput("Dimension mismatch"));
        }

        Ok(Self { grid, vals, stride })
    }

    /// Number of samples in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    /// Always false; a table holds at least 2 samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// Number of values per sample.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Degree of the full-table interpolant.
    #[inline]
    pub fn degree(&self) -> usize {
        self.grid.len() - 1
    }

    /// Interpolate at a set of observation points.
    ///
    /// The value for `locs[q]` is written to `out[q * stride..(q + 1) * stride]`.
    ///
    /// # Errors
    /// * If `out.len() != locs.len() * stride`
    /// * If two sample locations are equal
    pub fn interp(&self, locs: &[T], out: &mut [T]) -> Result<(), InterpError> {
        if locs.len().checked_mul(self.stride) != Some(out.len()) {
            return Err(InterpError::InvalidInput("Dimension mismatch"));
        }

        for (&loc, chunk) in locs.iter().zip(out.chunks_exact_mut(self.stride)) {
            self.interp_one(loc, chunk)?;
        }

        Ok(())
    }

    /// Interpolate at a set of observation points, allocating for the output.
    #[cfg(feature = "std")]
    pub fn interp_alloc(&self, locs: &[T]) -> Result<Vec<T>, InterpError> {
        let n = locs
            .len()
            .checked_mul(self.stride)
            .ok_or(InterpError::InvalidInput("Dimension mismatch"))?;
        let mut out = vec![T::zero(); n];
        self.interp(locs, &mut out)?;
        Ok(out)
    }

    /// Interpolate the value at a point into `out`, which must have length `stride`.
    ///
    /// # Errors
    /// * If `out.len() != stride`
    /// * If two sample locations are equal; `out` is left zeroed
    #[inline]
    pub fn interp_one(&self, x: T, out: &mut [T]) -> Result<(), InterpError> {
        if out.len() != self.stride {
            return Err(InterpError::InvalidInput("Output size must match stride"));
        }
        accumulate(x, self.grid, self.vals, self.stride, out)
    }

    /// Interpolate the value at a point with the stride fixed at compile time,
    /// using no allocation.
    ///
    /// # Errors
    /// * If `S != stride`
    /// * If two sample locations are equal
    #[inline]
    pub fn interp_fixed<const S: usize>(&self, x: T) -> Result<[T; S], InterpError> {
        let mut out = [T::zero(); S];
        self.interp_one(x, &mut out)?;
        Ok(out)
    }

    /// Interpolate at `x` using only the `required_sample_count(degree)`
    /// samples nearest to it.
    ///
    /// # Errors
    /// * If the sample locations are not increasing
    /// * If two neighbouring sample locations are equal
    /// * If `out.len() != stride`
    pub fn interp_windowed(&self, x: T, degree: usize, out: &mut [T]) -> Result<(), InterpError> {
        let window = sample_window(x, self.grid, required_sample_count(degree))?;
        self.window(window).interp_one(x, out)
    }

    /// View of a contiguous run of samples.
    #[inline]
    fn window(&self, idx: Range<usize>) -> Self {
        Self {
            grid: &self.grid[idx.clone()],
            vals: &self.vals[idx.start * self.stride..idx.end * self.stride],
            stride: self.stride,
        }
    }
}

/// Sum the basis-weighted sample values into `out`.
/// Assumes the shapes were already checked.
#[inline]
fn accumulate<T: Float>(
    x: T,
    grid: &[T],
    vals: &[T],
    stride: usize,
    out: &mut [T],
) -> Result<(), InterpError> {
    out.fill(T::zero());

    for (i, (&xi, yi)) in grid.iter().zip(vals.chunks_exact(stride)).enumerate() {
        let mut coeff = T::one();
        for (j, &xj) in grid.iter().enumerate() {
            if j == i {
                continue;
            }
            let dx = xi - xj;
            if dx == T::zero() {
                log::debug!("degenerate samples at indices {} and {}", i, j);
                out.fill(T::zero());
                return Err(InterpError::DegenerateSamples {
                    i: i.min(j),
                    j: i.max(j),
                });
            }
            coeff = coeff * (x - xj) / dx;
        }

        for (o, &y) in out.iter_mut().zip(yi) {
            *o = *o + coeff * y;
        }
    }

    Ok(())
}

//! Two-point linear interpolation / extrapolation of vector-valued samples.
//!
//! This is the lightweight companion to the Lagrange method for hosts that
//! only need a first-order interpolant between neighbouring samples; combine
//! it with [`crate::approx::interpolate_windowed`] to pick the neighbours.

use num_traits::Float;

use super::Approximation;
use crate::InterpError;

/// Linear interpolation between exactly two samples.
#[derive(Clone, Copy, Debug, Default)]
pub struct Linear;

impl<T: Float> Approximation<T> for Linear {
    const NAME: &'static str = "Linear";

    /// Always 2, whatever the requested degree.
    #[inline]
    fn required_sample_count(_degree: usize) -> usize {
        2
    }

    /// # Errors
    /// * If the table does not hold exactly 2 samples
    /// * If `stride == 0`, `ys.len() != 2 * stride` or `out.len() != stride`
    /// * If the two sample locations are equal
    fn interpolate<'o>(
        x: T,
        xs: &[T],
        ys: &[T],
        stride: usize,
        out: &'o mut [T],
    ) -> Result<&'o mut [T], InterpError> {
        if xs.len() != 2 {
            return Err(InterpError::InvalidInput(
                "Linear method needs exactly 2 samples",
            ));
        }
        if stride == 0 || stride.checked_mul(2) != Some(ys.len()) || out.len() != stride {
            return Err(InterpError::InvalidInput("Dimension mismatch"));
        }

        let (x0, x1) = (xs[0], xs[1]);
        let dx = x1 - x0;
        if dx == T::zero() {
            log::debug!("degenerate linear samples");
            return Err(InterpError::DegenerateSamples { i: 0, j: 1 });
        }

        let (w0, w1) = ((x1 - x) / dx, (x - x0) / dx);
        let (y0, y1) = ys.split_at(stride);
        for ((o, &a), &b) in out.iter_mut().zip(y0).zip(y1) {
            *o = w0 * a + w1 * b;
        }

        Ok(out)
    }
}

//! Polynomial interpolation/extrapolation of vector-valued sample tables,
//! no-std and no-alloc compatible.
//!
//! A sample table is a list of increasing, distinct sample locations `xs`
//! and a flat list of values `ys` carrying `stride` values per sample,
//! `[p0, q0, w0, p1, q1, w1, ...]`. Each query point produces `stride` values.
//!
//! # Performance Scalings
//! The Lagrange method evaluates the basis coefficients directly on every call,
//! with no precomputed weights, so its only storage is the caller's output buffer.
//! Windowed evaluation bisects the table to pick the samples nearest the query point,
//! then interpolates on that sub-table only.
//!
//! | Method                        | RAM       | Interp. / Extrap. Cost              |
//! |-------------------------------|-----------|-------------------------------------|
//! | lagrange, full table          | O(stride) | O(N^2 * stride)                     |
//! | lagrange, windowed            | O(stride) | O(degree^2 * stride) + O(N)         |
//! | linear                        | O(stride) | O(stride)                           |
//!
//! # Example: Lagrange on a full table
//! ```rust
//! use polyinterp::lagrange;
//!
//! // Samples of y = x^2
//! let xs = [0.0_f64, 1.0, 2.0];
//! let ys = [0.0_f64, 1.0, 4.0];
//!
//! // Storage for output
//! let mut out = [0.0; 1];
//!
//! // Do interpolation; the output buffer is handed back
//! let y = lagrange::interpolate(1.5, &xs, &ys, 1, &mut out).unwrap();
//! assert!((y[0] - 2.25).abs() < 1e-12);
//! ```
//!
//! # Example: Windowed interpolation of a trajectory
//! ```rust
//! use polyinterp::{approx::interpolate_windowed, Lagrange, utils::interleave};
//!
//! // Time-tagged positions
//! let t = [0.0_f64, 1.0, 2.0, 3.0, 4.0, 5.0];
//! let px = [0.0_f64, 1.0, 2.0, 3.0, 4.0, 5.0];
//! let py = [0.0_f64, 1.0, 4.0, 9.0, 16.0, 25.0];
//! let pos = interleave(&[&px[..], &py[..]]).unwrap();
//!
//! // Quadratic interpolant on the 3 samples nearest t = 2.5
//! let mut out = [0.0; 2];
//! interpolate_windowed::<_, Lagrange>(2.5, &t, &pos, 2, 2, &mut out).unwrap();
//! assert!((out[0] - 2.5).abs() < 1e-12);
//! assert!((out[1] - 6.25).abs() < 1e-12);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub use error::InterpError;

pub mod approx;
pub use approx::{
    interpolate_windowed, lagrange, lagrange::Lagrange, lagrange::LagrangeInterpolator, linear,
    linear::Linear, sample_window, Approximation,
};

#[cfg(feature = "std")]
pub mod utils;

#[cfg(all(test, feature = "std"))]
pub(crate) mod testing;

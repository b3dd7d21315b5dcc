//! Failure modes shared by every approximation method.
use thiserror::Error;

/// Contract violations detected while interpolating.
///
/// Both variants describe bad caller input; nothing is retried and no
/// partial result is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InterpError {
    /// Table or buffer shapes are inconsistent, or a parameter is out of range.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// Two sample locations coincide, so a basis coefficient would divide by zero.
    #[error("degenerate samples: x[{i}] == x[{j}]")]
    DegenerateSamples { i: usize, j: usize },
}

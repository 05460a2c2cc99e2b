//! Error types for lattice construction and buffer plumbing.

use std::error::Error;
use std::fmt;

/// Errors from lattice construction and field-buffer shape checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LatticeError {
    /// The requested grid side is below the minimum of 3 sites
    /// (one interior site between two boundary sites per axis).
    GridTooSmall {
        /// The rejected side length.
        side: usize,
    },
    /// A buffer did not have the expected length.
    SizeMismatch {
        /// Required length in elements.
        expected: usize,
        /// Provided length in elements.
        got: usize,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridTooSmall { side } => {
                write!(f, "grid side must be at least 3, got {side}")
            }
            Self::SizeMismatch { expected, got } => {
                write!(f, "buffer length mismatch: expected {expected}, got {got}")
            }
        }
    }
}

impl Error for LatticeError {}

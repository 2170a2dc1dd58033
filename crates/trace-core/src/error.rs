//! Error types for trace math operations.
//!
//! The default matrix APIs never fail: a singular inverse silently yields the
//! identity. Callers that need to tell a real inverse from that fallback use
//! the strict variants, which report the failure through [`Error`].
//!
//! # Usage
//!
//! ```rust
//! use trace_core::{Error, Result};
//!
//! fn pivot(column: usize, magnitude: f64) -> Result<()> {
//!     if magnitude == 0.0 {
//!         return Err(Error::singular_pivot(column));
//!     }
//!     Ok(())
//! }
//!
//! assert!(pivot(0, 1.0).is_ok());
//! assert!(pivot(2, 0.0).unwrap_err().is_singular());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - `trace-math` - `Matrix4::try_inverse`

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the strict math APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Forward elimination found no non-zero pivot.
    ///
    /// Every entry of `column` at or below the diagonal was exactly zero, so
    /// the matrix has no inverse.
    #[error("singular matrix: no non-zero pivot in column {column}")]
    SingularPivot {
        /// Pivot column being eliminated
        column: usize,
    },

    /// Backward substitution hit a zero on the diagonal.
    ///
    /// Returned when the upper-triangular form still has an exact zero at
    /// `(row, row)`. For a 4x4 input this is normally the last row, since the
    /// forward pass only checks the first three pivots. An all-zero row 0 can
    /// end up here: if row 3 has a non-zero in column 0 it is swapped up as
    /// the pivot, and the zero row lands at the bottom.
    #[error("singular matrix: zero diagonal entry at row {row}")]
    SingularDiagonal {
        /// Row whose diagonal entry is zero
        row: usize,
    },
}

impl Error {
    /// Creates an [`Error::SingularPivot`] error.
    #[inline]
    pub fn singular_pivot(column: usize) -> Self {
        Self::SingularPivot { column }
    }

    /// Creates an [`Error::SingularDiagonal`] error.
    #[inline]
    pub fn singular_diagonal(row: usize) -> Self {
        Self::SingularDiagonal { row }
    }

    /// Returns `true` if this error means the matrix was singular.
    #[inline]
    pub fn is_singular(&self) -> bool {
        matches!(self, Self::SingularPivot { .. } | Self::SingularDiagonal { .. })
    }
}

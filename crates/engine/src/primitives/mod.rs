//! Dense algebra shared by the vector-space matchers
//!
//! - `vector`: fixed-length `f64` vectors and slice similarity functions
//! - `matrix`: row-major `f64` matrices with row and column views
//! - `evidence`: per-cell lists of contributing stem ids

pub mod evidence;
pub mod matrix;
pub mod vector;

use thiserror::Error;

pub use evidence::EvidenceMatrix;
pub use matrix::{ColumnView, ColumnViewMut, DenseMatrix};
pub use vector::DenseVector;

/// Result type for algebra operations
pub type AlgebraResult<T> = std::result::Result<T, AlgebraError>;

/// Shape errors raised by matrix operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// Element-wise operation between matrices of different shapes
    #[error("shape mismatch: {}x{} vs {}x{}", left.0, left.1, right.0, right.1)]
    ShapeMismatch {
        /// Left operand shape (rows, cols)
        left: (usize, usize),
        /// Right operand shape (rows, cols)
        right: (usize, usize),
    },

    /// Vector written into a row or column of the wrong length
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Required length
        expected: usize,
        /// Supplied length
        actual: usize,
    },
}

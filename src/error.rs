//! densemat::error - failure values returned by matrix operations
//!
//! Shape-sensitive operations report failures as values instead of
//! aborting, so a pipeline of matrix operations can keep going and
//! report at the end. Out-of-range element access is a caller bug and
//! panics instead (see [`crate::Matrix::get`]).

/// Errors that can occur during matrix operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatrixError {
    /// Element-wise arithmetic or a matrix product was attempted on
    /// operands whose dimensions do not line up.
    #[error("dimensions of the two matrices are different: {left} != {right}")]
    DimensionMismatch { left: String, right: String },

    /// A transposition or LU decomposition was requested for a
    /// non-square matrix.
    #[error("matrix width and height must be the same, got {dimension}")]
    NotSquare { dimension: String },

    /// The determinant is zero or undefined, so no inverse exists.
    #[error("this matrix does not have an inverse (determinant is {determinant})")]
    NotInvertible { determinant: f64 },

    /// Text input that does not describe a rectangular grid of numbers,
    /// or a binary header with nonsensical dimensions.
    #[error("malformed matrix input: {0}")]
    MalformedInput(String),

    /// A binary buffer too short for the dimensions it declares.
    #[error("expected {expected} bytes but got {actual}")]
    TruncatedBuffer { expected: usize, actual: usize },
}

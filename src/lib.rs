//! densemat - dense f64 matrix value type and numeric kernel
//!
//! Public submodules:
//! - matrix (Matrix, LuDecomposition, Transposition)
//! - codec (text and binary representations)
//! - error (MatrixError)

pub mod codec;
pub mod error;
pub mod matrix;

pub use error::MatrixError;
pub use matrix::lu::LuDecomposition;
pub use matrix::transpose::Transposition;
pub use matrix::{Matrix, DEFAULT_TOLERANCE};

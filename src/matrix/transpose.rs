// src/matrix/transpose.rs
//! The four reflection strategies over a square matrix.
//!
//! A closed enum with one function switching over the reflection
//! formulas; adding a reflection means extending [`Transposition`], not
//! plugging in arbitrary behavior.

use crate::error::MatrixError;
use crate::matrix::Matrix;

/// The supported reflections. Each maps a square matrix to a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transposition {
    /// `out(y, x) = in(x, y)` - the conventional transpose.
    MainDiagonal,
    /// `out(w-1-y, h-1-x) = in(x, y)` - reflection across the
    /// anti-diagonal.
    SideDiagonal,
    /// `out(w-1-x, y) = in(x, y)` - mirror across the vertical center
    /// line.
    VerticalLine,
    /// `out(x, h-1-y) = in(x, y)` - mirror across the horizontal center
    /// line.
    HorizontalLine,
}

impl Transposition {
    /// All variants, in menu order.
    pub const ALL: [Transposition; 4] = [
        Transposition::MainDiagonal,
        Transposition::SideDiagonal,
        Transposition::VerticalLine,
        Transposition::HorizontalLine,
    ];

    /// Apply the reflection. The caller has already checked squareness.
    fn apply(self, input: &Matrix) -> Matrix {
        let w = input.width();
        let h = input.height();
        let mut out = input.same_shape();
        for y in 0..h {
            for x in 0..w {
                let value = input.get(x, y);
                match self {
                    Transposition::MainDiagonal => out.set(y, x, value),
                    Transposition::SideDiagonal => out.set(w - 1 - y, h - 1 - x, value),
                    Transposition::VerticalLine => out.set(w - 1 - x, y, value),
                    Transposition::HorizontalLine => out.set(x, h - 1 - y, value),
                }
            }
        }
        out
    }
}

impl Matrix {
    /// Transpose along the main diagonal.
    pub fn transpose(&self) -> Result<Matrix, MatrixError> {
        self.transpose_by(Transposition::MainDiagonal)
    }

    /// Transpose using the given reflection. Fails with
    /// [`MatrixError::NotSquare`] for rectangular matrices.
    pub fn transpose_by(&self, transposition: Transposition) -> Result<Matrix, MatrixError> {
        if self.width() != self.height() {
            return Err(MatrixError::NotSquare {
                dimension: self.dimension(),
            });
        }
        Ok(transposition.apply(self))
    }
}

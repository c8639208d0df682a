// src/matrix/lu.rs
//! Doolittle LU factorization with partial row pivoting.
//!
//! Unlike the Laplace determinant this scales polynomially, so it is
//! also the right determinant route for anything past ~10x10.

use tracing::trace;

use crate::error::MatrixError;
use crate::matrix::Matrix;

/// Result of a pivoted LU factorization: `l * u` equals the input with
/// its rows reordered per `pivots`.
#[derive(Debug, Clone, PartialEq)]
pub struct LuDecomposition {
    /// Unit lower triangular factor.
    pub l: Matrix,
    /// Upper triangular factor.
    pub u: Matrix,
    /// Original row indices in their final order.
    pub pivots: Vec<usize>,
    /// +1 if the row-swap count is even, -1 if odd.
    pub parity: i32,
}

impl LuDecomposition {
    /// Determinant of the original matrix: the signed product of U's
    /// diagonal.
    pub fn determinant(&self) -> f64 {
        let mut product = self.parity as f64;
        for i in 0..self.u.width() {
            product *= self.u.get(i, i);
        }
        product
    }
}

impl Matrix {
    /// Factor this matrix into unit-lower and upper triangular parts
    /// with partial pivoting.
    ///
    /// An exactly-zero pivot does not abort; elimination proceeds and
    /// the degenerate factors carry the resulting infinities or NaNs.
    /// Fails with [`MatrixError::NotSquare`] for rectangular input.
    pub fn lu_decomposition(&self) -> Result<LuDecomposition, MatrixError> {
        if self.width() != self.height() {
            return Err(MatrixError::NotSquare {
                dimension: self.dimension(),
            });
        }
        let n = self.width();
        // Working grid; elimination factors are stored in place below
        // the diagonal so that row swaps carry them along.
        let mut grid: Vec<Vec<f64>> = (0..n).map(|y| self.row(y).to_vec()).collect();
        let mut pivots: Vec<usize> = (0..n).collect();
        let mut swaps = 0usize;

        for k in 0..n.saturating_sub(1) {
            let mut pivot_row = k;
            for i in k + 1..n {
                if grid[i][k].abs() > grid[pivot_row][k].abs() {
                    pivot_row = i;
                }
            }
            if pivot_row != k {
                trace!(column = k, from = pivot_row, to = k, "pivot row swap");
                grid.swap(k, pivot_row);
                pivots.swap(k, pivot_row);
                swaps += 1;
            }
            let pivot = grid[k][k];
            for i in k + 1..n {
                let factor = grid[i][k] / pivot;
                grid[i][k] = factor;
                for j in k + 1..n {
                    grid[i][j] -= factor * grid[k][j];
                }
            }
        }

        let mut l = Matrix::identity(n);
        let mut u = Matrix::zeroed(n, n);
        for y in 0..n {
            for x in 0..n {
                if x < y {
                    l.set(x, y, grid[y][x]);
                } else {
                    u.set(x, y, grid[y][x]);
                }
            }
        }
        Ok(LuDecomposition {
            l,
            u,
            pivots,
            parity: if swaps % 2 == 0 { 1 } else { -1 },
        })
    }
}

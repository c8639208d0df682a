// src/matrix/determinant.rs
//! Cofactor-expansion determinant, minors, and the adjoint-based inverse.
//!
//! The determinant is the O(n!) textbook Laplace expansion, not an
//! elimination. It is exact in structure but degrades sharply past
//! ~10x10; callers with larger matrices should go through
//! [`crate::Matrix::lu_decomposition`] and take the product of U's
//! diagonal instead.

use tracing::trace;

use crate::error::MatrixError;
use crate::matrix::Matrix;

impl Matrix {
    /// The determinant of this matrix, or NaN if the matrix is not
    /// square. NaN is the "undefined" sentinel and is distinct from a
    /// computed zero.
    pub fn determinant(&self) -> f64 {
        if self.width() != self.height() {
            return f64::NAN;
        }
        match self.width() {
            1 => self.get(0, 0),
            2 => self.get(0, 0) * self.get(1, 1) - self.get(1, 0) * self.get(0, 1),
            n => {
                trace!(size = n, "laplace expansion along row 0");
                let mut result = 0.0;
                for x in 0..n {
                    let sign = if x % 2 == 0 { 1.0 } else { -1.0 };
                    result += sign * self.get(x, 0) * self.cofactor(x, 0);
                }
                result
            }
        }
    }

    /// The (n-1)x(n-1) submatrix omitting column `excluded_x` and row
    /// `excluded_y`.
    ///
    /// # Panics
    /// Panics if the matrix is not square, is 1x1, or the excluded
    /// coordinates are out of range.
    pub fn minor(&self, excluded_x: usize, excluded_y: usize) -> Matrix {
        let n = self.width();
        assert_eq!(n, self.height(), "minors are defined for square matrices");
        assert!(n > 1, "a 1x1 matrix has no minors");
        assert!(
            excluded_x < n && excluded_y < n,
            "index ({}, {}) out of range for {} matrix",
            excluded_x,
            excluded_y,
            self.dimension()
        );
        let mut out = Matrix::zeroed(n - 1, n - 1);
        let mut out_y = 0;
        for y in 0..n {
            if y == excluded_y {
                continue;
            }
            let mut out_x = 0;
            for x in 0..n {
                if x == excluded_x {
                    continue;
                }
                out.set(out_x, out_y, self.get(x, y));
                out_x += 1;
            }
            out_y += 1;
        }
        out
    }

    /// Determinant of the minor at `(x, y)`. The checkerboard expansion
    /// sign is applied by the caller, not here.
    pub fn cofactor(&self, x: usize, y: usize) -> f64 {
        self.minor(x, y).determinant()
    }

    /// The inverse of this matrix.
    ///
    /// Fails with [`MatrixError::NotInvertible`] when the determinant is
    /// zero or undefined. 2x2 matrices use the closed form; anything
    /// larger goes through the signed cofactor matrix, scaled by 1/det
    /// and transposed along the main diagonal.
    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        let det = self.determinant();
        if det == 0.0 || det.is_nan() {
            return Err(MatrixError::NotInvertible { determinant: det });
        }
        match self.width() {
            1 => Ok(Matrix::from_rows(&[[1.0 / det]])),
            2 => {
                // Swap the diagonal, negate the off-diagonal, scale.
                let mut out = Matrix::zeroed(2, 2);
                out.set(0, 0, self.get(1, 1));
                out.set(1, 1, self.get(0, 0));
                out.set(1, 0, -self.get(1, 0));
                out.set(0, 1, -self.get(0, 1));
                Ok(out.scale(1.0 / det))
            }
            n => {
                let mut cofactors = Matrix::zeroed(n, n);
                for y in 0..n {
                    for x in 0..n {
                        let sign = if (x + y) % 2 == 0 { 1.0 } else { -1.0 };
                        cofactors.set(x, y, sign * self.cofactor(x, y));
                    }
                }
                cofactors.scale(1.0 / det).transpose()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::matrix::{Matrix, DEFAULT_TOLERANCE};
    use crate::MatrixError;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_determinant_2x2() {
        let m = Matrix::from_rows(&[[4.0, 7.0], [2.0, 6.0]]);
        assert_eq!(m.determinant(), 10.0);
    }

    #[test]
    fn test_determinant_1x1_is_the_value() {
        let m = Matrix::from_rows(&[[-3.5]]);
        assert_eq!(m.determinant(), -3.5);
    }

    #[test]
    fn test_determinant_3x3() {
        let m = Matrix::from_rows(&[[2.0, 1.0, 4.0], [4.0, 4.0, 2.0], [4.0, 6.0, 7.0]]);
        assert_eq!(m.determinant(), 44.0);
    }

    #[test]
    fn test_determinant_4x4() {
        let m = Matrix::from_rows(&[
            [1.0, 3.0, 5.0, 9.0],
            [1.0, 3.0, 1.0, 7.0],
            [4.0, 3.0, 9.0, 7.0],
            [5.0, 2.0, 0.0, 9.0],
        ]);
        assert_eq!(m.determinant(), -124.0);
    }

    #[test]
    fn test_determinant_non_square_is_nan() {
        let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert!(m.determinant().is_nan());
    }

    #[test]
    fn test_determinant_scaling_law() {
        let mut rng = StdRng::seed_from_u64(582375269);
        for n in 2..=4 {
            let m = Matrix::random(n, n, &mut rng);
            let alpha: f64 = rng.gen_range(0.5..2.0);
            let scaled_det = m.scale(alpha).determinant();
            let expected = alpha.powi(n as i32) * m.determinant();
            let relative = (scaled_det - expected).abs() / expected.abs().max(1e-6);
            assert!(relative < 1e-12, "relative error {} at n={}", relative, n);
        }
    }

    #[test]
    fn test_minor_extraction() {
        let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let minor = m.minor(1, 0);
        assert_eq!(minor, Matrix::from_rows(&[[4.0, 6.0], [7.0, 9.0]]));
    }

    #[test]
    fn test_inverse_2x2_fixture() {
        let m = Matrix::from_rows(&[[4.0, 7.0], [2.0, 6.0]]);
        let inverse = m.inverse().unwrap();
        assert_eq!(inverse, Matrix::from_rows(&[[0.6, -0.7], [-0.2, 0.4]]));
    }

    #[test]
    fn test_inverse_times_original_is_identity() {
        let m = Matrix::from_rows(&[[2.0, 1.0, 4.0], [4.0, 4.0, 2.0], [4.0, 6.0, 7.0]]);
        let inverse = m.inverse().unwrap();
        let product = m.multiply(&inverse).unwrap();
        assert!(product.approx_eq(&Matrix::identity(3), DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_singular_matrix_has_no_inverse() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]);
        assert_eq!(
            m.inverse(),
            Err(MatrixError::NotInvertible { determinant: 0.0 })
        );
    }

    #[test]
    fn test_non_square_matrix_has_no_inverse() {
        let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert!(matches!(
            m.inverse(),
            Err(MatrixError::NotInvertible { .. })
        ));
    }
}

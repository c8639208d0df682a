// src/matrix/mod.rs
//! densemat::matrix - the dense matrix value type and its arithmetic.
//!
//! A [`Matrix`] is immutable once constructed: every operation that
//! "changes" a matrix builds and returns a new instance, so a value can
//! be shared freely and derived results never go stale.

pub mod determinant;
pub mod lu;
pub mod transpose;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::MatrixError;

/// Tolerance used by [`PartialEq`] and the dimension-gated comparisons.
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// Dense grid of f64 values, addressed as `(x, y)` with `x` the column
/// and `y` the row. Stored row-major.
#[derive(Debug, Clone)]
pub struct Matrix {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Build a matrix from row slices.
    ///
    /// # Panics
    /// Panics if `rows` is empty, a row is empty, or the rows have
    /// differing lengths. Ragged input is a caller bug, not a runtime
    /// data condition.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Self {
        assert!(!rows.is_empty(), "matrix must have at least one row");
        let width = rows[0].as_ref().len();
        assert!(width > 0, "matrix rows must not be empty");
        let mut data = Vec::with_capacity(width * rows.len());
        for row in rows {
            let row = row.as_ref();
            assert_eq!(row.len(), width, "all rows must have the same length");
            data.extend_from_slice(row);
        }
        Self {
            width,
            height: rows.len(),
            data,
        }
    }

    /// All-zero matrix of the given dimensions.
    pub fn zeroed(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "matrix dimensions must be positive");
        Self {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    /// A zeroed matrix with this matrix's dimensions: the shape-only
    /// counterpart of [`Clone`].
    pub fn same_shape(&self) -> Self {
        Self::zeroed(self.width, self.height)
    }

    /// Identity matrix of the given size.
    pub fn identity(size: usize) -> Self {
        let mut out = Self::zeroed(size, size);
        for i in 0..size {
            out.set(i, i, 1.0);
        }
        out
    }

    /// Matrix filled with random values in `[0, 1)`.
    pub fn random<R: Rng>(width: usize, height: usize, rng: &mut R) -> Self {
        let mut out = Self::zeroed(width, height);
        for value in &mut out.data {
            *value = rng.gen::<f64>();
        }
        out
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Dimensions in the format "width x height", used in diagnostics.
    pub fn dimension(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }

    /// True if width and height both match.
    pub fn dimension_matches(&self, other: &Matrix) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Value at column `x`, row `y`.
    ///
    /// # Panics
    /// Panics if `x` or `y` is out of range.
    pub fn get(&self, x: usize, y: usize) -> f64 {
        assert!(
            x < self.width && y < self.height,
            "index ({}, {}) out of range for {} matrix",
            x,
            y,
            self.dimension()
        );
        self.data[y * self.width + x]
    }

    /// The values in row-major order.
    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// Row `y` as a slice.
    pub(crate) fn row(&self, y: usize) -> &[f64] {
        &self.data[y * self.width..(y + 1) * self.width]
    }

    /// Element writer for construction and engine-internal use only;
    /// finished matrices are never mutated.
    pub(crate) fn set(&mut self, x: usize, y: usize, value: f64) {
        let width = self.width;
        self.data[y * width + x] = value;
    }

    /// Element-wise sum of the two matrices.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if !self.dimension_matches(other) {
            return Err(MatrixError::DimensionMismatch {
                left: self.dimension(),
                right: other.dimension(),
            });
        }
        let mut out = self.clone();
        for (value, rhs) in out.data.iter_mut().zip(&other.data) {
            *value += rhs;
        }
        Ok(out)
    }

    /// Element-wise difference `self - other`.
    pub fn subtract(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if !self.dimension_matches(other) {
            return Err(MatrixError::DimensionMismatch {
                left: self.dimension(),
                right: other.dimension(),
            });
        }
        let mut out = self.clone();
        for (value, rhs) in out.data.iter_mut().zip(&other.data) {
            *value -= rhs;
        }
        Ok(out)
    }

    /// Multiplies every value by the given factor.
    pub fn scale(&self, scalar: f64) -> Matrix {
        let mut out = self.clone();
        for value in &mut out.data {
            *value *= scalar;
        }
        out
    }

    /// Standard matrix product, valid when `self.width == other.height`;
    /// the result is `other.width` wide and `self.height` tall.
    ///
    /// If that orientation does not fit but the reverse one does, the
    /// product is computed with the operands swapped instead of failing.
    /// Callers that care about operand order must check which
    /// orientation actually ran.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.width == other.height {
            let mut out = Matrix::zeroed(other.width, self.height);
            for y in 0..self.height {
                let row = self.row(y);
                for x in 0..other.width {
                    let mut sum = 0.0;
                    for (i, value) in row.iter().enumerate() {
                        sum += value * other.get(x, i);
                    }
                    out.set(x, y, sum);
                }
            }
            Ok(out)
        } else if other.width == self.height {
            other.multiply(self)
        } else {
            Err(MatrixError::DimensionMismatch {
                left: self.dimension(),
                right: other.dimension(),
            })
        }
    }

    /// Element-wise comparison within `tolerance`, gated on matching
    /// dimensions. Bit-identical pairs compare equal before the
    /// tolerance check, so equal NaNs and infinities do not poison the
    /// comparison.
    pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> bool {
        self.dimension_matches(other)
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| a.total_cmp(b).is_eq() || (a - b).abs() <= tolerance)
    }

    /// True if the matrix equals its own main-diagonal transpose.
    /// Non-square matrices are never symmetric.
    pub fn is_symmetric(&self) -> bool {
        match self.transpose() {
            Ok(transposed) => self.approx_eq(&transposed, DEFAULT_TOLERANCE),
            Err(_) => false,
        }
    }

    /// True if every value is strictly greater than zero.
    pub fn is_real(&self) -> bool {
        self.data.iter().all(|value| *value > 0.0)
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, DEFAULT_TOLERANCE)
    }
}

// Serde representation is the (width, height, values) triple; the grid
// is validated against the declared dimensions on the way in.
impl Serialize for Matrix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (self.width, self.height, &self.data).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Matrix {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (width, height, data) = <(usize, usize, Vec<f64>)>::deserialize(deserializer)?;
        if width == 0 || height == 0 || data.len() != width * height {
            return Err(serde::de::Error::custom(format!(
                "matrix of {}x{} cannot hold {} values",
                width,
                height,
                data.len()
            )));
        }
        Ok(Matrix {
            width,
            height,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_from_rows_and_get() {
        let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(m.width(), 3);
        assert_eq!(m.height(), 2);
        assert_eq!(m.get(0, 0), 1.0);
        assert_eq!(m.get(2, 1), 6.0);
        assert_eq!(m.dimension(), "3x2");
    }

    #[test]
    #[should_panic(expected = "all rows must have the same length")]
    fn test_ragged_rows_panic() {
        let rows: Vec<Vec<f64>> = vec![vec![1.0, 2.0], vec![3.0]];
        Matrix::from_rows(&rows);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_get_out_of_range_panics() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
        m.get(2, 0);
    }

    #[test]
    fn test_identity() {
        let id = Matrix::identity(3);
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(id.get(x, y), if x == y { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn test_add_and_subtract() {
        let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::from_rows(&[[9.0, 8.0], [7.0, 6.0]]);

        let sum = a.add(&b).unwrap();
        assert_eq!(sum, Matrix::from_rows(&[[10.0, 10.0], [10.0, 10.0]]));

        let diff = sum.subtract(&b).unwrap();
        assert!(diff.approx_eq(&a, DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_add_dimension_mismatch() {
        let a = Matrix::from_rows(&[[1.0, 2.0]]);
        let b = Matrix::from_rows(&[[1.0], [2.0]]);
        let err = a.add(&b).unwrap_err();
        assert_eq!(
            err,
            MatrixError::DimensionMismatch {
                left: "2x1".into(),
                right: "1x2".into(),
            }
        );
    }

    #[test]
    fn test_scale() {
        let a = Matrix::from_rows(&[[1.0, -2.0], [3.0, 0.5]]);
        let scaled = a.scale(2.0);
        assert_eq!(scaled, Matrix::from_rows(&[[2.0, -4.0], [6.0, 1.0]]));
    }

    #[test]
    fn test_multiply() {
        let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let b = Matrix::from_rows(&[[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]]);
        let product = a.multiply(&b).unwrap();
        assert_eq!(
            product,
            Matrix::from_rows(&[[58.0, 64.0], [139.0, 154.0]])
        );
    }

    #[test]
    fn test_multiply_swaps_operands_when_reverse_fits() {
        let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let b = Matrix::from_rows(&[[1.0, 0.0], [0.0, 2.0]]);

        // a (3 wide, 2 tall) times b (2 wide, 2 tall) does not fit, but
        // the reverse orientation does, so the product comes back as b * a.
        let swapped = a.multiply(&b).unwrap();
        let direct = b.multiply(&a).unwrap();
        assert_eq!(swapped, direct);
        assert_eq!(
            swapped,
            Matrix::from_rows(&[[1.0, 2.0, 3.0], [8.0, 10.0, 12.0]])
        );
    }

    #[test]
    fn test_multiply_dimension_mismatch() {
        let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert!(matches!(
            a.multiply(&b),
            Err(MatrixError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_approx_eq_tolerance() {
        let a = Matrix::from_rows(&[[1.0, 2.0]]);
        let b = Matrix::from_rows(&[[1.009, 1.991]]);
        assert_eq!(a, b);
        let c = Matrix::from_rows(&[[1.02, 2.0]]);
        assert_ne!(a, c);
        assert!(a.approx_eq(&c, 0.05));
    }

    #[test]
    fn test_approx_eq_bitwise_shortcut() {
        let a = Matrix::from_rows(&[[f64::NAN, f64::INFINITY]]);
        let b = Matrix::from_rows(&[[f64::NAN, f64::INFINITY]]);
        assert!(a.approx_eq(&b, DEFAULT_TOLERANCE));

        let c = Matrix::from_rows(&[[f64::NAN, f64::NEG_INFINITY]]);
        assert!(!a.approx_eq(&c, DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_is_symmetric() {
        let symmetric = Matrix::from_rows(&[[1.0, 7.0], [7.0, 3.0]]);
        assert!(symmetric.is_symmetric());

        let asymmetric = Matrix::from_rows(&[[1.0, 7.0], [5.0, 3.0]]);
        assert!(!asymmetric.is_symmetric());

        let rectangular = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert!(!rectangular.is_symmetric());
    }

    #[test]
    fn test_is_real_requires_strictly_positive_values() {
        assert!(Matrix::from_rows(&[[0.1, 2.0], [3.0, 4.0]]).is_real());
        assert!(!Matrix::from_rows(&[[0.0, 2.0], [3.0, 4.0]]).is_real());
        assert!(!Matrix::from_rows(&[[-1.0, 2.0], [3.0, 4.0]]).is_real());
        assert!(!Matrix::from_rows(&[[f64::NAN, 2.0]]).is_real());
    }

    #[test]
    fn test_random_fills_unit_interval() {
        let mut rng = StdRng::seed_from_u64(582375269);
        let m = Matrix::random(5, 5, &mut rng);
        assert!(m.values().iter().all(|v| (0.0..1.0).contains(v)));
    }

    #[test]
    fn test_same_shape_keeps_dimensions_and_drops_values() {
        let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let blank = m.same_shape();
        assert!(blank.dimension_matches(&m));
        assert!(blank.values().iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_clone_is_equal() {
        let mut rng = StdRng::seed_from_u64(42);
        let m = Matrix::random(4, 3, &mut rng);
        assert_eq!(m, m.clone());
    }

    #[test]
    fn test_serde_roundtrip() {
        let m = Matrix::from_rows(&[[1.5, -2.0], [0.25, 1e300]]);
        let encoded = bincode::serialize(&m).unwrap();
        let decoded: Matrix = bincode::deserialize(&encoded).unwrap();
        assert_eq!(m, decoded);
    }

    #[test]
    fn test_serde_rejects_inconsistent_dimensions() {
        let encoded = bincode::serialize(&(2usize, 2usize, vec![1.0f64, 2.0, 3.0])).unwrap();
        assert!(bincode::deserialize::<Matrix>(&encoded).is_err());
    }
}

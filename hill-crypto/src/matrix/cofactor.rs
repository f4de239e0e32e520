//! Determinant, adjugate and inverse by cofactor expansion.
//!
//! Expansion along the first row is `O(n!)`. Keys are entered by hand and rarely exceed
//! 4x4, and on integer matrices the expansion is exact, which row reduction over `f64`
//! would not be.

use super::Matrix;
use crate::errors::HillCryptoError;

use num_traits::{Signed, ToPrimitive};

impl<T: Copy> Matrix<T> {
    /// The `(n-1)×(n-1)` matrix left after deleting row `row` and column `col`.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` for an out-of-range index, `InvalidMatrix` when nothing would
    /// be left (a single row or a single column).
    pub fn cofactor_submatrix(&self, row: usize, col: usize) -> Result<Matrix<T>, HillCryptoError> {
        if row >= self.rows() || col >= self.cols() {
            return Err(HillCryptoError::DimensionMismatch(format!(
                "Index ({}, {}) is outside a {}x{} matrix",
                row,
                col,
                self.rows(),
                self.cols()
            )));
        }

        Matrix::try_from_rows(minor_of(&self.data, row, col))
    }
}

/// Cofactor signs need negation, so these are only defined for signed elements.
///
/// ```compile_fail
/// # use hill_crypto::matrix::Matrix;
/// let a: Matrix<u32> = Matrix::try_from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// a.adjugate().unwrap();
/// ```
impl<T: Signed + Copy> Matrix<T> {
    /// Computes the determinant by cofactor expansion along the first row.
    ///
    /// # Errors
    ///
    /// Returns `HillCryptoError::NotSquare` for non-square input.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::matrix::Matrix;
    /// let a = Matrix::try_from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    /// assert_eq!(a.determinant().unwrap(), -2);
    /// ```
    pub fn determinant(&self) -> Result<T, HillCryptoError> {
        self.ensure_square("determinant")?;
        Ok(determinant_of(&self.data))
    }

    /// Transpose of the cofactor matrix, `C[i][j] = (-1)^(i+j) · det(minor(i, j))`.
    ///
    /// The adjugate of a 1×1 matrix is `[[1]]`.
    ///
    /// # Errors
    ///
    /// Returns `HillCryptoError::NotSquare` for non-square input.
    pub fn adjugate(&self) -> Result<Matrix<T>, HillCryptoError> {
        self.ensure_square("adjugate")?;

        let n = self.rows();
        if n == 1 {
            return Matrix::identity(1);
        }

        let cofactors = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| {
                        let minor = determinant_of(&minor_of(&self.data, i, j));
                        if (i + j) % 2 == 0 { minor } else { -minor }
                    })
                    .collect()
            })
            .collect();

        Ok(Matrix { data: cofactors }.transpose())
    }
}

impl<T: Signed + Copy + ToPrimitive> Matrix<T> {
    /// Real-valued inverse `adj(A) / det(A)`.
    ///
    /// The result keeps full `f64` precision; round with [`Matrix::rounded`] when
    /// presenting it.
    ///
    /// # Errors
    ///
    /// `NotSquare` for non-square input, `SingularMatrix` when the determinant is zero.
    pub fn inverse(&self) -> Result<Matrix<f64>, HillCryptoError> {
        let det = self.determinant()?;
        if det.is_zero() {
            return Err(HillCryptoError::SingularMatrix);
        }

        let det = to_f64(det)?;
        let adj = self.adjugate()?;

        let data = adj
            .data
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&v| to_f64(v).map(|v| v / det))
                    .collect::<Result<Vec<f64>, HillCryptoError>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Matrix { data })
    }
}

fn to_f64<T: ToPrimitive>(value: T) -> Result<f64, HillCryptoError> {
    value.to_f64().ok_or_else(|| {
        HillCryptoError::InternalError("matrix entry is not representable as f64".to_string())
    })
}

pub(crate) fn minor_of<T: Copy>(data: &[Vec<T>], row: usize, col: usize) -> Vec<Vec<T>> {
    data.iter()
        .enumerate()
        .filter(|&(i, _)| i != row)
        .map(|(_, r)| {
            r.iter()
                .enumerate()
                .filter(|&(j, _)| j != col)
                .map(|(_, &v)| v)
                .collect()
        })
        .collect()
}

fn determinant_of<T: Signed + Copy>(data: &[Vec<T>]) -> T {
    match data.len() {
        1 => data[0][0],
        2 => data[0][0] * data[1][1] - data[0][1] * data[1][0],
        _ => data[0]
            .iter()
            .enumerate()
            .fold(T::zero(), |det, (j, &val)| {
                let term = val * determinant_of(&minor_of(data, 0, j));
                if j % 2 == 0 { det + term } else { det - term }
            }),
    }
}

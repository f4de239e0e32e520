//! Element-wise and product operations. None of them reduce modulo anything: the
//! cipher path uses [`crate::ring::matrix_ops`] instead.

use super::{Matrix, Vector};
use crate::errors::HillCryptoError;

use num_traits::Num;

impl<T: Num + Copy> Matrix<T> {
    /// Computes the element-wise sum `C = A + B`.
    ///
    /// # Errors
    ///
    /// Returns `HillCryptoError::DimensionMismatch` if the shapes differ.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::matrix::Matrix;
    /// let a = Matrix::try_from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    /// let b = Matrix::try_from_rows(vec![vec![10, 20], vec![30, 40]]).unwrap();
    /// assert_eq!(a.add(&b).unwrap().to_array(), &[vec![11, 22], vec![33, 44]]);
    /// ```
    pub fn add(&self, other: &Matrix<T>) -> Result<Matrix<T>, HillCryptoError> {
        if self.shape() != other.shape() {
            return Err(HillCryptoError::DimensionMismatch(format!(
                "Matrix shapes must match for addition ({}x{} vs {}x{})",
                self.rows(),
                self.cols(),
                other.rows(),
                other.cols()
            )));
        }

        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a.iter().zip(b).map(|(&x, &y)| x + y).collect())
            .collect();

        Ok(Matrix { data })
    }

    /// Computes the matrix product `C = AB`, an `A.rows × B.cols` matrix.
    ///
    /// # Errors
    ///
    /// Returns `HillCryptoError::DimensionMismatch` if `A.cols != B.rows`.
    pub fn multiply_by_matrix(&self, other: &Matrix<T>) -> Result<Matrix<T>, HillCryptoError> {
        let m_common = self.cols();
        if other.rows() != m_common {
            return Err(HillCryptoError::DimensionMismatch(format!(
                "Inner dimensions must match for matrix multiplication ({} vs {})",
                m_common,
                other.rows()
            )));
        }

        let p = other.cols();
        let mut data = vec![vec![T::zero(); p]; self.rows()];
        for (i, row) in self.data.iter().enumerate() {
            for j in 0..p {
                data[i][j] = row
                    .iter()
                    .zip(&other.data)
                    .fold(T::zero(), |acc, (&a, b_row)| acc + a * b_row[j]);
            }
        }

        Ok(Matrix { data })
    }

    /// A·x where A is an m×n matrix and x is a length–n column vector.
    /// Returns an m‐vector.
    ///
    /// # Errors
    ///
    /// Returns `HillCryptoError::DimensionMismatch` if `x.len() != A.cols`.
    pub fn multiply_by_vector(&self, x: &[T]) -> Result<Vector<T>, HillCryptoError> {
        if x.len() != self.cols() {
            return Err(HillCryptoError::DimensionMismatch(format!(
                "Matrix columns ({}) must match vector length ({})",
                self.cols(),
                x.len()
            )));
        }

        Ok(self
            .data
            .iter()
            .map(|row| {
                row.iter()
                    .zip(x)
                    .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
            })
            .collect())
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> Matrix<T> {
        let data = (0..self.cols())
            .map(|j| self.data.iter().map(|row| row[j]).collect())
            .collect();

        Matrix { data }
    }
}

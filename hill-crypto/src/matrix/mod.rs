//! # Matrix Module
//!
//! Provides the [`Matrix`] type: a validated, rectangular grid of numbers that is never
//! mutated by the engine operations. Every operation returns a new value.
//!
//! Integer matrices (`Matrix<i64>`) keep determinants and adjugates exact, which the
//! Hill cipher relies on. Real-valued work uses the default `Matrix<f64>`.

pub mod cofactor;
pub mod ops;

use crate::errors::HillCryptoError;

use num_traits::Num;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use std::fmt;

/// Represents a column vector.
pub type Vector<T> = Vec<T>;

/// Decimal places used when real-valued matrices are presented.
pub const DISPLAY_PRECISION: u32 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T = f64> {
    data: Vec<Vec<T>>,
}

impl<T> Matrix<T> {
    /// Builds a matrix from user-supplied rows.
    ///
    /// # Errors
    ///
    /// Returns `HillCryptoError::InvalidMatrix` if there are no rows, the first row is empty,
    /// or the rows have different lengths.
    pub fn try_from_rows(rows: Vec<Vec<T>>) -> Result<Self, HillCryptoError> {
        let Some(first) = rows.first() else {
            return Err(HillCryptoError::InvalidMatrix(
                "Matrix must have at least one row".to_string(),
            ));
        };
        let cols = first.len();
        if cols == 0 {
            return Err(HillCryptoError::InvalidMatrix(
                "Matrix must have at least one column".to_string(),
            ));
        }

        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(HillCryptoError::InvalidMatrix(format!(
                "Row {} has length {} but expected {}",
                i,
                row.len(),
                cols
            )));
        }

        Ok(Matrix { data: rows })
    }

    pub fn rows(&self) -> usize {
        self.data.len()
    }

    pub fn cols(&self) -> usize {
        self.data[0].len()
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// Borrow the underlying rows.
    pub fn to_array(&self) -> &[Vec<T>] {
        &self.data
    }

    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.data
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.data.get(row).and_then(|r| r.get(col))
    }

    /// Applies `mapper` to every element, producing a new matrix of the same shape.
    pub fn map<U>(&self, mapper: impl Fn(&T) -> U) -> Matrix<U> {
        Matrix {
            data: self
                .data
                .iter()
                .map(|row| row.iter().map(&mapper).collect())
                .collect(),
        }
    }

    pub(crate) fn ensure_square(&self, operation: &str) -> Result<(), HillCryptoError> {
        if !self.is_square() {
            return Err(HillCryptoError::NotSquare(format!(
                "{} requires a square matrix, got {}x{}",
                operation,
                self.rows(),
                self.cols()
            )));
        }

        Ok(())
    }
}

impl<T: Num + Copy> Matrix<T> {
    /// Creates an identity matrix of size `n`.
    ///
    /// # Errors
    ///
    /// `InvalidMatrix` when `n == 0`.
    pub fn identity(n: usize) -> Result<Self, HillCryptoError> {
        let data = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| if i == j { T::one() } else { T::zero() })
                    .collect()
            })
            .collect();

        Matrix::try_from_rows(data)
    }
}

impl Matrix<f64> {
    /// Rounds every entry to `places` decimals. Only meant for presentation: the engine
    /// itself keeps full precision.
    pub fn rounded(&self, places: u32) -> Matrix<f64> {
        let factor = 10f64.powi(places as i32);
        self.map(|v| (v * factor).round() / factor)
    }

    /// Element-wise comparison within `tolerance`.
    pub fn approx_eq(&self, other: &Matrix<f64>, tolerance: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .flatten()
                .zip(other.data.iter().flatten())
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = HillCryptoError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Matrix::try_from_rows(rows)
    }
}

impl<T: Serialize> Matrix<T> {
    /// Serializes the matrix as a JSON array of rows.
    pub fn to_json(&self) -> Result<String, HillCryptoError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<T: for<'de> Deserialize<'de>> Matrix<T> {
    /// Parses a JSON array of rows, e.g. `[[3, 3], [2, 5]]`.
    pub fn from_json(json: &str) -> Result<Self, HillCryptoError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<T: Serialize> Serialize for Matrix<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.data.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Matrix<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<T>>::deserialize(deserializer)?;
        Matrix::try_from_rows(rows).map_err(D::Error::custom)
    }
}

/// Formats one row per line. A precision (`{:.3}`) is forwarded to every entry.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                match f.precision() {
                    Some(p) => write!(f, "{:.*}", p, value)?,
                    None => write!(f, "{}", value)?,
                }
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

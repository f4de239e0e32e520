//! Integer matrix arithmetic carried out entirely in Z_m.
//!
//! Every product is reduced as soon as it is formed, so keys with arbitrarily large
//! entries never overflow. [`matrix_mul`] is the public check that `K · K⁻¹ ≡ I`.

use crate::errors::HillCryptoError;
use crate::matrix::cofactor::minor_of;
use crate::matrix::{Matrix, Vector};
use crate::ring::Ring;

/// A·x mod m where A is an m×n integer matrix and x is a length–n vector.
/// Returns an m‐vector with components in `[0, m)`.
pub fn matrix_vector_mul(
    a: &Matrix<i64>,
    x: &[i64],
    ring: &Ring,
) -> Result<Vector<i64>, HillCryptoError> {
    let n = a.cols();
    if x.len() != n {
        return Err(HillCryptoError::DimensionMismatch(format!(
            "Matrix columns ({}) must match vector length ({})",
            n,
            x.len()
        )));
    }

    Ok(a.to_array()
        .iter()
        .map(|row| {
            row.iter()
                .zip(x)
                .fold(0, |sum, (&a_ij, &x_j)| ring.add(sum, ring.mul(a_ij, x_j)))
        })
        .collect())
}

/// Computes the matrix product `C = AB` modulo the ring's modulus.
///
/// # Errors
///
/// Returns `HillCryptoError::DimensionMismatch` if the inner dimensions do not match.
pub fn matrix_mul(
    a: &Matrix<i64>,
    b: &Matrix<i64>,
    ring: &Ring,
) -> Result<Matrix<i64>, HillCryptoError> {
    let m_common = a.cols();
    if b.rows() != m_common {
        return Err(HillCryptoError::DimensionMismatch(format!(
            "Inner dimensions must match for matrix multiplication ({} vs {})",
            m_common,
            b.rows()
        )));
    }

    let c = a
        .to_array()
        .iter()
        .map(|row| {
            (0..b.cols())
                .map(|j| {
                    row.iter()
                        .zip(b.to_array())
                        .fold(0, |sum, (&a_ik, b_row)| {
                            ring.add(sum, ring.mul(a_ik, b_row[j]))
                        })
                })
                .collect()
        })
        .collect();

    Matrix::try_from_rows(c)
}

/// Determinant modulo the ring's modulus, in `[0, m)`.
///
/// Cofactor expansion along the first row with every step reduced, so
/// `mod_determinant(A) == det(A) mod m` without ever forming `det(A)`.
///
/// # Errors
///
/// `NotSquare` for non-square input.
pub fn mod_determinant(a: &Matrix<i64>, ring: &Ring) -> Result<i64, HillCryptoError> {
    a.ensure_square("determinant")?;
    Ok(mod_determinant_of(a.to_array(), ring))
}

/// Adjugate modulo the ring's modulus, every entry in `[0, m)`.
///
/// # Errors
///
/// `NotSquare` for non-square input.
pub fn mod_adjugate(a: &Matrix<i64>, ring: &Ring) -> Result<Matrix<i64>, HillCryptoError> {
    a.ensure_square("adjugate")?;

    let n = a.rows();
    if n == 1 {
        return Matrix::identity(1);
    }

    let data = a.to_array();
    // adj(A)[i][j] is the (j, i) cofactor
    let adj = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    let minor = mod_determinant_of(&minor_of(data, j, i), ring);
                    if (i + j) % 2 == 0 { minor } else { ring.neg(minor) }
                })
                .collect()
        })
        .collect();

    Matrix::try_from_rows(adj)
}

fn mod_determinant_of(data: &[Vec<i64>], ring: &Ring) -> i64 {
    match data.len() {
        1 => ring.normalize(data[0][0]),
        2 => ring.sub(
            ring.mul(data[0][0], data[1][1]),
            ring.mul(data[0][1], data[1][0]),
        ),
        _ => data[0].iter().enumerate().fold(0, |det, (j, &val)| {
            let term = ring.mul(val, mod_determinant_of(&minor_of(data, 0, j), ring));
            if j % 2 == 0 { ring.add(det, term) } else { ring.sub(det, term) }
        }),
    }
}

/// Inverse of a square integer matrix modulo the ring's modulus:
/// `det(A)^-1 · adj(A)`, every entry in `[0, m)`.
///
/// # Errors
///
/// `NotSquare` for non-square input. `SingularMatrixMod` when `det(A) mod m` is 0 or has
/// no multiplicative inverse.
///
/// # Example
///
/// ```
/// # use hill_crypto::matrix::Matrix;
/// # use hill_crypto::ring::{Ring, matrix_ops::mod_inverse_matrix};
/// let key = Matrix::try_from_rows(vec![vec![3, 3], vec![2, 5]]).unwrap();
/// let inv = mod_inverse_matrix(&key, &Ring::default()).unwrap();
/// assert_eq!(inv.to_array(), &[vec![15, 17], vec![20, 9]]);
/// ```
pub fn mod_inverse_matrix(
    a: &Matrix<i64>,
    ring: &Ring,
) -> Result<Matrix<i64>, HillCryptoError> {
    let det_mod = mod_determinant(a, ring)?;
    if det_mod == 0 {
        return Err(HillCryptoError::SingularMatrixMod(format!(
            "determinant is 0 mod {}",
            ring.modulus
        )));
    }

    let inv_det = ring.inv(det_mod).map_err(|_| {
        HillCryptoError::SingularMatrixMod(format!(
            "determinant {} has no inverse mod {}",
            det_mod, ring.modulus
        ))
    })?;

    Ok(mod_adjugate(a, ring)?.map(|&v| ring.mul(inv_det, v)))
}

impl Matrix<i64> {
    /// See [`mod_inverse_matrix`].
    pub fn mod_inverse_matrix(&self, modulus: u64) -> Result<Matrix<i64>, HillCryptoError> {
        mod_inverse_matrix(self, &Ring::try_with(modulus)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: Vec<Vec<i64>>) -> Matrix<i64> {
        Matrix::try_from_rows(rows).unwrap()
    }

    #[test]
    fn test_matrix_vector_mul_ok() {
        let ring = Ring::default();
        let a = m(vec![vec![1, 2], vec![3, 4]]);
        // R1: (5 + 12) = 17, R2: (15 + 24) = 39 = 13 mod 26
        assert_eq!(matrix_vector_mul(&a, &[5, 6], &ring).unwrap(), vec![17, 13]);
    }

    #[test]
    fn test_matrix_vector_mul_normalizes_negatives() {
        let ring = Ring::default();
        let a = m(vec![vec![-1, 0], vec![0, -27]]);
        assert_eq!(matrix_vector_mul(&a, &[1, 1], &ring).unwrap(), vec![25, 25]);
    }

    #[test]
    fn test_matrix_vector_mul_dimension_mismatch() {
        let ring = Ring::default();
        let a = m(vec![vec![1, 2], vec![3, 4]]);
        assert!(matches!(
            matrix_vector_mul(&a, &[5, 6, 7], &ring),
            Err(HillCryptoError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_matrix_mul_ok() {
        let ring = Ring::try_with(13).unwrap();
        let a = m(vec![vec![1, 2], vec![3, 4]]);
        let b = m(vec![vec![5, 6], vec![7, 8]]);
        // [[19, 22], [43, 50]] mod 13
        assert_eq!(matrix_mul(&a, &b, &ring).unwrap(), m(vec![vec![6, 9], vec![4, 11]]));
        assert!(matrix_mul(&a, &m(vec![vec![1], vec![2], vec![3]]), &ring).is_err());
    }

    #[test]
    fn test_mod_inverse_matrix_2x2() {
        let ring = Ring::default();
        let key = m(vec![vec![3, 3], vec![2, 5]]);
        // det = 9, 9^-1 = 3 mod 26, adj = [[5, -3], [-2, 3]]
        let inv = mod_inverse_matrix(&key, &ring).unwrap();
        assert_eq!(inv, m(vec![vec![15, 17], vec![20, 9]]));
        assert_eq!(matrix_mul(&key, &inv, &ring).unwrap(), Matrix::identity(2).unwrap());
    }

    #[test]
    fn test_mod_inverse_matrix_3x3() {
        let key = m(vec![vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]]);
        let inv = key.mod_inverse_matrix(26).unwrap();
        assert_eq!(
            inv,
            m(vec![vec![8, 5, 10], vec![21, 8, 21], vec![21, 12, 8]])
        );
        let ring = Ring::default();
        assert_eq!(matrix_mul(&inv, &key, &ring).unwrap(), Matrix::identity(3).unwrap());
    }

    #[test]
    fn test_mod_inverse_matrix_singular_mod() {
        let ring = Ring::default();
        // det = 26
        let zero_det = m(vec![vec![2, 0], vec![0, 13]]);
        assert!(matches!(
            mod_inverse_matrix(&zero_det, &ring),
            Err(HillCryptoError::SingularMatrixMod(_))
        ));
        // det = 2, gcd(2, 26) = 2
        let even_det = m(vec![vec![2, 0], vec![0, 1]]);
        assert!(matches!(
            mod_inverse_matrix(&even_det, &ring),
            Err(HillCryptoError::SingularMatrixMod(_))
        ));
    }

    #[test]
    fn test_mod_determinant_matches_exact_determinant() {
        let ring = Ring::default();
        for key in [
            m(vec![vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]]),
            m(vec![vec![1, 2], vec![3, 4]]),
            m(vec![vec![-7]]),
            m(vec![
                vec![1, 0, 2, -1],
                vec![3, 0, 0, 5],
                vec![2, 1, 4, -3],
                vec![1, 0, 5, 0],
            ]),
        ] {
            let exact = key.determinant().unwrap();
            assert_eq!(mod_determinant(&key, &ring).unwrap(), ring.normalize(exact));
            assert_eq!(
                mod_adjugate(&key, &ring).unwrap(),
                key.adjugate().unwrap().map(|&v| ring.normalize(v))
            );
        }
    }

    #[test]
    fn test_mod_inverse_matrix_large_entries() {
        let ring = Ring::default();
        let shift = 26 * 1_000_000_000;
        let key = m(vec![
            vec![6 + shift, 24, 1],
            vec![13, 16 + shift, 10],
            vec![20, 17, 15 + shift],
        ]);
        let classic = m(vec![vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]]);

        assert_eq!(
            mod_inverse_matrix(&key, &ring).unwrap(),
            mod_inverse_matrix(&classic, &ring).unwrap()
        );

        let huge = m(vec![vec![i64::MAX, i64::MIN], vec![i64::MIN + 1, i64::MAX]]);
        assert!(mod_determinant(&huge, &ring).is_ok());
    }

    #[test]
    fn test_mod_inverse_matrix_not_square() {
        let key = m(vec![vec![1, 2, 3]]);
        assert!(matches!(
            key.mod_inverse_matrix(26),
            Err(HillCryptoError::NotSquare(_))
        ));
    }
}

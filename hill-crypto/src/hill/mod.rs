//! # Hill Cipher
//!
//! Block substitution over Z_26: every block of `n` characters becomes a column vector
//! that is multiplied by the `n×n` key (or its modular inverse) modulo 26.
//!
//! The pad sentinel encodes as 26, which is congruent to `A` in Z_26. Padding and spaces
//! therefore decrypt as `A`.

pub mod cipher;
pub mod config;

pub use cipher::HillCipher;
pub use config::HillConfig;

use crate::blocks::split_into_blocks;
use crate::codec::Codec;
use crate::errors::HillCryptoError;
use crate::matrix::Matrix;
use crate::ring::Ring;
use crate::ring::matrix_ops::{matrix_vector_mul, mod_inverse_matrix};

use itertools::Itertools;

/// Encrypts `text` under `key` with the default codec.
///
/// # Errors
///
/// `NotSquare` for a non-square key, `InvalidCharacter` for anything other than letters,
/// spaces and the pad sentinel.
///
/// # Example
///
/// ```
/// # use hill_crypto::hill::encrypt;
/// # use hill_crypto::matrix::Matrix;
/// let rows = vec![vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]];
/// let key = Matrix::try_from_rows(rows).unwrap();
/// assert_eq!(encrypt("ACT", &key).unwrap(), "POH");
/// ```
pub fn encrypt(text: &str, key: &Matrix<i64>) -> Result<String, HillCryptoError> {
    key.ensure_square("Hill encryption")?;
    transform(text, key, &Ring::default(), &Codec::default())
}

/// Decrypts `text` under `key` with the default codec.
///
/// The modular inverse of the key is computed before any block is touched.
///
/// # Errors
///
/// `NotSquare` or `SingularMatrixMod` for an unusable key, `InvalidCharacter` for bad input.
pub fn decrypt(text: &str, key: &Matrix<i64>) -> Result<String, HillCryptoError> {
    let ring = Ring::default();
    let inverse_key = mod_inverse_matrix(key, &ring)?;

    transform(text, &inverse_key, &ring, &Codec::default())
}

/// Runs every block of `text` through `matrix` modulo the ring's modulus.
pub(crate) fn transform(
    text: &str,
    matrix: &Matrix<i64>,
    ring: &Ring,
    codec: &Codec,
) -> Result<String, HillCryptoError> {
    let blocks = split_into_blocks(text, matrix.rows(), codec)?;
    log::debug!(
        "transforming {} block(s) of size {}",
        blocks.len(),
        blocks.block_size()
    );

    let output: String = blocks
        .map(|block| -> Result<String, HillCryptoError> {
            let vector = block
                .chars()
                .map(|c| codec.char_to_number(c))
                .collect::<Result<Vec<i64>, _>>()?;
            let transformed = matrix_vector_mul(matrix, &vector, ring)?;
            log::trace!("{:?} -> {:?}", vector, transformed);

            Ok(transformed
                .into_iter()
                .map(|n| codec.number_to_char(n))
                .join(""))
        })
        .collect::<Result<Vec<_>, _>>()?
        .concat();

    Ok(codec.denormalize(&output))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key3() -> Matrix<i64> {
        Matrix::try_from_rows(vec![vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]]).unwrap()
    }

    #[test]
    fn test_classic_example() -> Result<(), HillCryptoError> {
        let key = key3();
        assert_eq!(encrypt("ACT", &key)?, "POH");
        assert_eq!(decrypt("POH", &key)?, "ACT");
        // lowercase input encodes like uppercase
        assert_eq!(encrypt("act", &key)?, "POH");
        Ok(())
    }

    #[test]
    fn test_key_with_large_entries_decrypts() -> Result<(), HillCryptoError> {
        // congruent to key3() mod 26
        let shift = 26 * 1_000_000_000;
        let key = Matrix::try_from_rows(vec![
            vec![6 + shift, 24, 1],
            vec![13, 16 + shift, 10],
            vec![20, 17, 15 + shift],
        ])?;
        assert_eq!(encrypt("ACT", &key)?, "POH");
        assert_eq!(decrypt("POH", &key)?, "ACT");
        Ok(())
    }

    #[test]
    fn test_two_by_two_known_vector() -> Result<(), HillCryptoError> {
        // HE = (7, 4): (3*7 + 3*4, 2*7 + 5*4) = (33, 34) = (7, 8) = "HI"
        let key = Matrix::try_from_rows(vec![vec![3, 3], vec![2, 5]])?;
        assert_eq!(encrypt("HE", &key)?, "HI");
        assert_eq!(decrypt("HI", &key)?, "HE");
        Ok(())
    }

    #[test]
    fn test_encrypt_rejects_non_square_key() {
        let key = Matrix::try_from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert!(matches!(
            encrypt("ABC", &key),
            Err(HillCryptoError::NotSquare(_))
        ));
    }

    #[test]
    fn test_decrypt_fails_before_touching_blocks() {
        // invalid characters would fail later; the key error must win
        let key = Matrix::try_from_rows(vec![vec![2, 4], vec![1, 2]]).unwrap();
        assert!(matches!(
            decrypt("12!?", &key),
            Err(HillCryptoError::SingularMatrixMod(_))
        ));
    }

    #[test]
    fn test_invalid_character() {
        assert!(matches!(
            encrypt("AC7", &key3()),
            Err(HillCryptoError::InvalidCharacter('7'))
        ));
    }

    #[test]
    fn test_padding_is_encrypted_as_value_26() -> Result<(), HillCryptoError> {
        let key = Matrix::try_from_rows(vec![vec![3, 3], vec![2, 5]])?;
        let ciphertext = encrypt("HELLO", &key)?;
        assert_eq!(ciphertext.len(), 6);
        // the sentinel folds onto A in Z_26
        assert_eq!(decrypt(&ciphertext, &key)?, "HELLOA");
        Ok(())
    }
}

use super::config::HillConfig;
use super::transform;
use crate::codec::Codec;
use crate::errors::HillCryptoError;
use crate::matrix::Matrix;
use crate::ring::Ring;
use crate::ring::matrix_ops::mod_inverse_matrix;

/// A Hill cipher bound to a validated key.
///
/// The key is checked once and its modular inverse is kept, so neither
/// [`HillCipher::encrypt`] nor [`HillCipher::decrypt`] can fail on the key.
#[derive(Debug, Clone, PartialEq)]
pub struct HillCipher {
    key: Matrix<i64>,
    inverse_key: Matrix<i64>,
    ring: Ring,
    codec: Codec,
}

impl HillCipher {
    /// # Errors
    ///
    /// `NotSquare` or `SingularMatrixMod` when `key` cannot be used for decryption.
    pub fn try_with(key: Matrix<i64>) -> Result<Self, HillCryptoError> {
        Self::try_with_codec(key, Codec::default())
    }

    pub fn try_with_codec(key: Matrix<i64>, codec: Codec) -> Result<Self, HillCryptoError> {
        let ring = Ring::default();
        let inverse_key = mod_inverse_matrix(&key, &ring)?;
        log::debug!("Hill cipher ready with a {}x{} key", key.rows(), key.cols());

        Ok(Self {
            key,
            inverse_key,
            ring,
            codec,
        })
    }

    pub fn try_from_config(config: HillConfig) -> Result<Self, HillCryptoError> {
        let codec = Codec::try_with(config.pad_sentinel)?;
        Self::try_with_codec(config.key, codec)
    }

    pub fn key(&self) -> &Matrix<i64> {
        &self.key
    }

    pub fn inverse_key(&self) -> &Matrix<i64> {
        &self.inverse_key
    }

    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    pub fn block_size(&self) -> usize {
        self.key.rows()
    }

    pub fn encrypt(&self, plaintext: &str) -> Result<String, HillCryptoError> {
        transform(plaintext, &self.key, &self.ring, &self.codec)
    }

    pub fn decrypt(&self, ciphertext: &str) -> Result<String, HillCryptoError> {
        transform(ciphertext, &self.inverse_key, &self.ring, &self.codec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hill;

    fn key2() -> Matrix<i64> {
        Matrix::try_from_rows(vec![vec![3, 3], vec![2, 5]]).unwrap()
    }

    #[test]
    fn test_rejects_unusable_keys() {
        let not_square = Matrix::try_from_rows(vec![vec![1, 2]]).unwrap();
        assert!(matches!(
            HillCipher::try_with(not_square),
            Err(HillCryptoError::NotSquare(_))
        ));

        let det_13 = Matrix::try_from_rows(vec![vec![13, 0], vec![0, 1]]).unwrap();
        assert!(matches!(
            HillCipher::try_with(det_13),
            Err(HillCryptoError::SingularMatrixMod(_))
        ));
    }

    #[test]
    fn test_matches_free_functions() -> Result<(), HillCryptoError> {
        let cipher = HillCipher::try_with(key2())?;
        assert_eq!(cipher.block_size(), 2);
        assert_eq!(cipher.inverse_key().to_array(), &[vec![15, 17], vec![20, 9]]);

        let ciphertext = cipher.encrypt("ATTACK AT DAWN")?;
        assert_eq!(ciphertext, hill::encrypt("ATTACK AT DAWN", &key2())?);
        assert_eq!(cipher.decrypt(&ciphertext)?, hill::decrypt(&ciphertext, &key2())?);
        Ok(())
    }

    #[test]
    fn test_custom_sentinel() -> Result<(), HillCryptoError> {
        let cipher = HillCipher::try_with_codec(key2(), Codec::try_with('-')?)?;
        assert_eq!(cipher.codec().pad_sentinel(), '-');
        assert!(cipher.encrypt("AB-C").is_ok());
        assert!(matches!(
            cipher.encrypt("AB_C"),
            Err(HillCryptoError::InvalidCharacter('_'))
        ));
        Ok(())
    }

    #[test]
    fn test_from_config() -> Result<(), HillCryptoError> {
        let config = HillConfig::from_json(r#"{"key": [[3, 3], [2, 5]], "pad_sentinel": "*"}"#)?;
        let cipher = HillCipher::try_from_config(config)?;
        assert_eq!(cipher.key(), &key2());
        assert_eq!(cipher.codec().pad_sentinel(), '*');
        Ok(())
    }
}

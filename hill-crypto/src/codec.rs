//! Alphabet codec: letters `A`–`Z` and the pad sentinel to and from `0..=26`.
//!
//! The cipher alphabet has no space symbol. Spaces are swapped for the pad sentinel
//! before encoding and swapped back after decoding.

use crate::errors::HillCryptoError;
use crate::preset::alphabet::{ALPHABET_LEN, INDEX_TO_LETTER, LETTER_TO_INDEX};

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAD_SENTINEL: char = '_';
/// Numeric value of the pad sentinel.
pub const PAD_VALUE: i64 = ALPHABET_LEN as i64;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Codec {
    pad_sentinel: char,
}

impl Default for Codec {
    fn default() -> Self {
        Codec {
            pad_sentinel: DEFAULT_PAD_SENTINEL,
        }
    }
}

impl Codec {
    /// Creates a codec that pads with `pad_sentinel`.
    ///
    /// # Errors
    ///
    /// `InvalidParameters` if the sentinel is a letter or a space, since both already
    /// have a meaning in the plaintext.
    pub fn try_with(pad_sentinel: char) -> Result<Self, HillCryptoError> {
        if pad_sentinel.is_alphabetic() || pad_sentinel == ' ' {
            return Err(HillCryptoError::InvalidParameters(format!(
                "pad sentinel '{}' must not be a letter or a space",
                pad_sentinel
            )));
        }

        Ok(Codec { pad_sentinel })
    }

    pub fn pad_sentinel(&self) -> char {
        self.pad_sentinel
    }

    /// # Example
    ///
    /// ```
    /// # use hill_crypto::codec::Codec;
    /// let codec = Codec::default();
    /// assert_eq!(codec.char_to_number('a').unwrap(), 0);
    /// assert_eq!(codec.char_to_number('Z').unwrap(), 25);
    /// assert_eq!(codec.char_to_number('_').unwrap(), 26);
    /// assert!(codec.char_to_number('1').is_err());
    /// ```
    pub fn char_to_number(&self, c: char) -> Result<i64, HillCryptoError> {
        if c == self.pad_sentinel {
            return Ok(PAD_VALUE);
        }

        LETTER_TO_INDEX
            .get(&c.to_ascii_uppercase())
            .copied()
            .ok_or(HillCryptoError::InvalidCharacter(c))
    }

    /// `26` becomes the pad sentinel, anything else `n mod 26` as a letter.
    pub fn number_to_char(&self, n: i64) -> char {
        if n == PAD_VALUE {
            return self.pad_sentinel;
        }

        INDEX_TO_LETTER[n.rem_euclid(PAD_VALUE) as usize]
    }

    /// Replaces every space with the pad sentinel.
    pub fn normalize(&self, text: &str) -> String {
        text.replace(' ', &self.pad_sentinel.to_string())
    }

    /// Replaces every pad sentinel with a space.
    pub fn denormalize(&self, text: &str) -> String {
        text.replace(self.pad_sentinel, " ")
    }
}

/// [`Codec::char_to_number`] with the default sentinel.
pub fn char_to_number(c: char) -> Result<i64, HillCryptoError> {
    Codec::default().char_to_number(c)
}

/// [`Codec::number_to_char`] with the default sentinel.
pub fn number_to_char(n: i64) -> char {
    Codec::default().number_to_char(n)
}

//! Arithmetic in the residue ring Z_m.

use crate::errors::HillCryptoError;

use num_integer::Integer;

use serde::{Deserialize, Serialize};

/// Modulus used by the Hill cipher: the 26 letters of the Latin alphabet.
pub const HILL_MODULUS: u64 = 26;

/// Represents a finite ring Z_m using modular arithmetic.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub modulus: u64,
}

impl Default for Ring {
    fn default() -> Self {
        Ring {
            modulus: HILL_MODULUS,
        }
    }
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1.
    pub fn try_with(modulus: u64) -> Result<Self, HillCryptoError> {
        if modulus <= 1 || modulus > i64::MAX as u64 {
            return Err(HillCryptoError::InvalidModulus(format!(
                "Modulus must be in (1, i64::MAX], got {}",
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.modulus(), 26);
    /// ```
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Normalizes a value into `[0, modulus)`, negative values included.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.normalize(27), 1);
    /// assert_eq!(ring.normalize(-3), 23);
    /// assert_eq!(ring.normalize(26), 0);
    /// ```
    pub fn normalize(&self, value: i64) -> i64 {
        value.rem_euclid(self.modulus as i64)
    }

    /// Computes `(a + b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.add(20, 10), 4);
    /// assert_eq!(ring.add(-2, 5), 3);
    /// ```
    pub fn add(&self, a: i64, b: i64) -> i64 {
        let sum = self.normalize(a) as i128 + self.normalize(b) as i128;

        (sum % self.modulus as i128) as i64
    }

    /// Computes `(a - b) mod modulus`.
    pub fn sub(&self, a: i64, b: i64) -> i64 {
        self.add(a, self.neg(b))
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Uses `i128` internally to prevent overflow before the reduction.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.mul(7, 5), 9); // 35 mod 26
    /// assert_eq!(ring.mul(-2, 6), 14); // -12 mod 26
    /// assert_eq!(ring.mul(13, 2), 0);
    /// ```
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        let product = self.normalize(a) as i128 * self.normalize(b) as i128;

        (product % self.modulus as i128) as i64
    }

    /// Computes the additive inverse `-a mod modulus`.
    pub fn neg(&self, a: i64) -> i64 {
        let a_norm = self.normalize(a);
        if a_norm == 0 {
            return 0;
        }

        self.modulus as i64 - a_norm
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// The inverse exists if and only if `gcd(a, modulus) == 1` and is the unique
    /// `x` in `[1, modulus)` with `a * x ≡ 1`.
    ///
    /// # Errors
    ///
    /// Returns `HillCryptoError::NoModularInverse` if `a ≡ 0` or `gcd(a, modulus) != 1`.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.inv(3).unwrap(), 9); // 3 * 9 = 27 = 1 mod 26
    /// assert_eq!(ring.inv(25).unwrap(), 25);
    /// assert!(ring.inv(13).is_err());
    /// assert!(ring.inv(0).is_err());
    /// ```
    pub fn inv(&self, a: i64) -> Result<i64, HillCryptoError> {
        let a_norm = self.normalize(a);
        if a_norm == 0 {
            return Err(HillCryptoError::NoModularInverse(format!(
                "Cannot invert 0 in mod {}",
                self.modulus
            )));
        }

        let egcd = a_norm.extended_gcd(&(self.modulus as i64));
        if egcd.gcd != 1 {
            return Err(HillCryptoError::NoModularInverse(format!(
                "Modular inverse does not exist for {} mod {} (gcd={})",
                a_norm, self.modulus, egcd.gcd
            )));
        }

        Ok(self.normalize(egcd.x))
    }

    /// Whether `a` is a unit of the ring.
    pub fn is_unit(&self, a: i64) -> bool {
        self.normalize(a).gcd(&(self.modulus as i64)) == 1
    }
}

/// Multiplicative inverse of `a` modulo `m`.
///
/// # Errors
///
/// `InvalidModulus` for `m <= 1`, `NoModularInverse` when `gcd(a mod m, m) != 1`.
///
/// # Example
///
/// ```
/// # use hill_crypto::ring::mod_inverse;
/// assert_eq!(mod_inverse(5, 26).unwrap(), 21);
/// assert_eq!(mod_inverse(-1, 26).unwrap(), 25);
/// assert!(mod_inverse(2, 26).is_err());
/// ```
pub fn mod_inverse(a: i64, m: u64) -> Result<i64, HillCryptoError> {
    Ring::try_with(m)?.inv(a)
}

use crate::errors::HillCryptoError;
use crate::matrix::Matrix;
use crate::ring::matrix_ops::mod_determinant;
use crate::ring::{HILL_MODULUS, Ring};

use itertools::iproduct;

use rand::Rng;

/// Upper bound on rejection-sampling rounds in [`random_key`].
///
/// Roughly a third of random matrices mod 26 are invertible, so this is never reached in
/// practice.
pub const MAX_KEY_ATTEMPTS: usize = 10_000;

/// Whether `key` can be used to both encrypt and decrypt: square, with a determinant
/// that is a unit mod 26.
pub fn is_valid_key(key: &Matrix<i64>) -> bool {
    let ring = Ring::default();
    mod_determinant(key, &ring)
        .map(|det| ring.is_unit(det))
        .unwrap_or(false)
}

/// Draws a random `size×size` key with entries in `[0, 26)`, resampling until the key is
/// invertible mod 26.
///
/// # Errors
///
/// `InvalidParameters` when `size == 0`, `InternalError` if no valid key turns up within
/// [`MAX_KEY_ATTEMPTS`].
pub fn random_key<R: Rng + ?Sized>(
    size: usize,
    rng: &mut R,
) -> Result<Matrix<i64>, HillCryptoError> {
    if size == 0 {
        return Err(HillCryptoError::InvalidParameters(
            "Key size must be > 0".to_string(),
        ));
    }

    for attempt in 1..=MAX_KEY_ATTEMPTS {
        let rows = (0..size)
            .map(|_| {
                (0..size)
                    .map(|_| rng.random_range(0..HILL_MODULUS as i64))
                    .collect()
            })
            .collect();
        let candidate = Matrix::try_from_rows(rows)?;

        if is_valid_key(&candidate) {
            log::debug!("found a valid {}x{} key after {} attempt(s)", size, size, attempt);
            return Ok(candidate);
        }
        log::trace!("attempt {}: key is not invertible mod {}", attempt, HILL_MODULUS);
    }

    Err(HillCryptoError::InternalError(format!(
        "no invertible {}x{} key found in {} attempts",
        size, size, MAX_KEY_ATTEMPTS
    )))
}

/// Every matrix `[[a, b, c], [-2, 1, 0], [-1, -1, 1]]` with `a, b, c` in `[-range, range]`
/// whose determinant is exactly 1.
///
/// A unit determinant means the inverse has integer entries, so such keys are convenient
/// for working Hill examples by hand. The determinant of this template is `a + 2b + 3c`.
pub fn find_unit_determinant_keys(range: i64) -> Vec<Matrix<i64>> {
    let range = range.abs();

    iproduct!(-range..=range, -range..=range, -range..=range)
        .filter_map(|(a, b, c)| {
            let rows = vec![vec![a, b, c], vec![-2, 1, 0], vec![-1, -1, 1]];
            let matrix = Matrix::try_from_rows(rows).ok()?;
            let det = matrix.determinant().ok()?;
            log::trace!("[{}, {}, {}] -> det {}", a, b, c, det);

            (det == 1).then_some(matrix)
        })
        .collect()
}

//! Matrix algebra over integers and reals, and the Hill cipher built on it.
//!
//! ```
//! # use hill_crypto::{HillCipher, Matrix};
//! let rows = vec![vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]];
//! let key = Matrix::try_from_rows(rows).unwrap();
//! let cipher = HillCipher::try_with(key).unwrap();
//! assert_eq!(cipher.encrypt("ACT").unwrap(), "POH");
//! assert_eq!(cipher.decrypt("POH").unwrap(), "ACT");
//! ```

pub mod blocks;
pub mod codec;
pub mod errors;
pub mod hill;
pub mod keygen;
pub mod matrix;
pub mod preset;
pub mod ring;

pub use errors::HillCryptoError;
pub use hill::{HillCipher, HillConfig, decrypt, encrypt};
pub use matrix::Matrix;

#[derive(thiserror::Error, Debug)]
pub enum HillCryptoError {
    /// Operand shapes are incompatible for the requested operation.
    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),
    /// Determinant, adjugate or inverse requested on a non-square matrix.
    #[error("NotSquare: {0}")]
    NotSquare(String),
    /// The real-valued determinant is zero, so the ordinary inverse is undefined.
    #[error("SingularMatrix: the determinant is 0")]
    SingularMatrix,
    /// The determinant has no multiplicative inverse modulo the cipher modulus.
    #[error("SingularMatrixMod: {0}")]
    SingularMatrixMod(String),
    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, m) != 1).
    #[error("NoModularInverse: {0}")]
    NoModularInverse(String),
    #[error("InvalidCharacter: '{0}' is not a letter or the pad sentinel")]
    InvalidCharacter(char),

    /// Empty or ragged rows.
    #[error("InvalidMatrix: {0}")]
    InvalidMatrix(String),
    /// Error when creating a ring with an invalid modulus (m <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    #[error("Block size must be positive")]
    InvalidBlockSize,
    #[error("InvalidParameters: {0}")]
    InvalidParameters(String),
    #[error("InternalError: {0}")]
    InternalError(String),

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}

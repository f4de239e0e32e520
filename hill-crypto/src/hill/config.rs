use crate::codec::DEFAULT_PAD_SENTINEL;
use crate::errors::HillCryptoError;
use crate::matrix::Matrix;

use serde::{Deserialize, Serialize};

/// Serializable description of a Hill cipher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HillConfig {
    /// Square key, as an array of rows.
    pub key: Matrix<i64>,
    /// Character that stands for spaces and padding.
    #[serde(default = "default_pad_sentinel")]
    pub pad_sentinel: char,
}

fn default_pad_sentinel() -> char {
    DEFAULT_PAD_SENTINEL
}

impl HillConfig {
    pub fn new(key: Matrix<i64>) -> Self {
        Self {
            key,
            pad_sentinel: DEFAULT_PAD_SENTINEL,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, HillCryptoError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, HillCryptoError> {
        Ok(serde_json::to_string(self)?)
    }
}

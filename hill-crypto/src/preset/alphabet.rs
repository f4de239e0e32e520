use lazy_static::lazy_static;
use std::collections::HashMap;

/// Number of letters in the cipher alphabet.
pub const ALPHABET_LEN: usize = 26;

lazy_static! {
    /// Maps an index (0 to 25) to its uppercase Latin letter (A-Z).
    pub static ref INDEX_TO_LETTER: Vec<char> = ('A'..='Z').collect();

    /// Maps an uppercase Latin letter (A-Z) back to its index (0 to 25).
    pub static ref LETTER_TO_INDEX: HashMap<char, i64> = INDEX_TO_LETTER
        .iter()
        .enumerate()
        .map(|(i, &ch)| (ch, i as i64))
        .collect();
}

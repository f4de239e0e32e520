use crate::codec::Codec;
use crate::errors::HillCryptoError;

/// Lazy sequence of fixed-size blocks over padded, normalized text.
///
/// Cloning yields an independent iterator, and [`Blocks::restart`] rewinds in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blocks {
    padded: Vec<char>,
    size: usize,
    position: usize,
}

impl Blocks {
    pub fn block_size(&self) -> usize {
        self.size
    }

    /// The whole normalized and padded text.
    pub fn padded_text(&self) -> String {
        self.padded.iter().collect()
    }

    pub fn restart(&mut self) {
        self.position = 0;
    }
}

impl Iterator for Blocks {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let block = self.padded.get(self.position..self.position + self.size)?;
        self.position += self.size;

        Some(block.iter().collect())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.padded.len() - self.position) / self.size;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Blocks {}

/// Splits `text` into blocks of `size` characters.
///
/// Spaces become the pad sentinel, and the text is right-padded with the sentinel up to
/// the next multiple of `size`. Empty text still yields one block made entirely of
/// sentinels.
///
/// # Errors
///
/// `InvalidBlockSize` when `size == 0`.
///
/// # Example
///
/// ```
/// # use hill_crypto::blocks::split_into_blocks;
/// # use hill_crypto::codec::Codec;
/// let blocks: Vec<String> = split_into_blocks("HELLO", 2, &Codec::default()).unwrap().collect();
/// assert_eq!(blocks, ["HE", "LL", "O_"]);
/// ```
pub fn split_into_blocks(
    text: &str,
    size: usize,
    codec: &Codec,
) -> Result<Blocks, HillCryptoError> {
    if size == 0 {
        return Err(HillCryptoError::InvalidBlockSize);
    }

    let mut padded: Vec<char> = codec.normalize(text).chars().collect();
    let block_count = padded.len().div_ceil(size).max(1);
    padded.resize(block_count * size, codec.pad_sentinel());

    Ok(Blocks {
        padded,
        size,
        position: 0,
    })
}

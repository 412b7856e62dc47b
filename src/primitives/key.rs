//! 256-bit ChaCha20 key
//!
//! The key is the only secret input of the cipher. It is stored as raw
//! bytes and wiped when dropped; its `Debug` output never reveals the
//! contents.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::KEY_SIZE;
use super::conv::load_le_words;
use crate::error::CipherError;

/// ChaCha20 secret key (32 bytes).
///
/// How the key is produced (CSPRNG, KDF, key exchange) is the caller's
/// concern. This type only guarantees its length and its erasure.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Key([u8; KEY_SIZE]);

impl Key {
    /// Wraps 32 raw key bytes.
    pub const fn new(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Returns the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }

    /// Returns the key as eight little-endian words (state words 4..=11).
    pub(crate) fn words(&self) -> [u32; 8] {
        let mut words = [0u32; 8];
        load_le_words(&mut words, &self.0);
        words
    }
}

impl From<[u8; KEY_SIZE]> for Key {
    fn from(bytes: [u8; KEY_SIZE]) -> Self {
        Self::new(bytes)
    }
}

/// Builds a key from a runtime-sized slice.
///
/// Fails with [`CipherError::InvalidLength`] unless the slice holds exactly
/// 32 bytes. The input is never truncated or padded.
impl TryFrom<&[u8]> for Key {
    type Error = CipherError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; KEY_SIZE] =
            bytes.try_into().map_err(|_| CipherError::InvalidLength {
                field: "key",
                expected: KEY_SIZE,
                actual: bytes.len(),
            })?;

        Ok(Self(bytes))
    }
}

impl Debug for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("Key(..)")
    }
}

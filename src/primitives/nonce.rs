//! 96-bit ChaCha20 nonce (IETF variant)

use super::NONCE_SIZE;
use super::conv::load_le_words;
use crate::error::CipherError;

/// ChaCha20 nonce (12 bytes).
///
/// Nonces are public, but a (key, nonce, counter) triple must never be used
/// for two different messages. The crate does not track nonce usage.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Nonce([u8; NONCE_SIZE]);

impl Nonce {
    /// Wraps 12 raw nonce bytes.
    pub const fn new(bytes: [u8; NONCE_SIZE]) -> Self {
        Self(bytes)
    }

    /// Returns the raw nonce bytes.
    pub fn as_bytes(&self) -> &[u8; NONCE_SIZE] {
        &self.0
    }

    /// Returns the nonce as three little-endian words (state words 13..=15).
    pub(crate) fn words(&self) -> [u32; 3] {
        let mut words = [0u32; 3];
        load_le_words(&mut words, &self.0);
        words
    }
}

impl From<[u8; NONCE_SIZE]> for Nonce {
    fn from(bytes: [u8; NONCE_SIZE]) -> Self {
        Self::new(bytes)
    }
}

impl TryFrom<&[u8]> for Nonce {
    type Error = CipherError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; NONCE_SIZE] =
            bytes.try_into().map_err(|_| CipherError::InvalidLength {
                field: "nonce",
                expected: NONCE_SIZE,
                actual: bytes.len(),
            })?;

        Ok(Self(bytes))
    }
}

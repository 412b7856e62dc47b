//! ChaCha20 block function

use zeroize::Zeroize;

use super::state::InternalState;
use crate::primitives::conv::store_le_words;
use crate::primitives::{BLOCK_SIZE, BlockCounter, Key, KeystreamBlock, Nonce};

/// Generates a single 64-byte ChaCha20 keystream block.
///
/// # Parameters
/// - `key`: 256-bit secret key
/// - `nonce`: 96-bit nonce (IETF variant)
/// - `counter`: 32-bit block counter, placed in state word 12 as-is
///
/// # Returns
/// The 16 permuted-and-added state words, serialized little-endian in word
/// order. The block can be XORed with plaintext or ciphertext.
///
/// # Security Notes
/// - This function does **not** perform encryption or authentication.
/// - Reusing the same `(key, nonce, counter)` tuple for two messages is
///   catastrophic for confidentiality and must be prevented by the caller.
///
/// The function is pure: it reads nothing but its arguments and keeps all
/// intermediate state on its own stack, so concurrent calls never interfere.
pub fn generate_block(key: &Key, nonce: &Nonce, counter: BlockCounter) -> KeystreamBlock {
    let mut words = InternalState::new(key, nonce, counter).keystream_words();

    let mut out = [0u8; BLOCK_SIZE];
    store_le_words(&mut out, &words);
    words.zeroize();

    out
}

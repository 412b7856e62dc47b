//! Multi-block keystream application
//!
//! Messages longer than 64 bytes are covered by consecutive keystream
//! blocks: byte `i` of the message is combined with byte `i % 64` of the
//! block generated for `counter + i / 64`. The last block may be used only
//! partially.

use tracing::{trace, warn};
use zeroize::Zeroize;

use super::block::generate_block;
use super::combine::xor_into;
use crate::primitives::{BLOCK_SIZE, BlockCounter, Key, Nonce};

/// Encrypts or decrypts `data` in place, starting at block `counter`.
///
/// The counter advances by one per 64-byte block and wraps modulo 2³².
/// A wrap means the keystream is about to repeat; it is reported as a
/// warning but not refused, matching the block function's contract.
///
/// Empty input generates no block.
pub fn apply_keystream_in_place(
    key: &Key,
    nonce: &Nonce,
    counter: BlockCounter,
    data: &mut [u8],
) {
    let blocks = data.len().div_ceil(BLOCK_SIZE);

    trace!(bytes = data.len(), blocks, counter, "applying chacha20 keystream");

    if wraps(counter, blocks) {
        warn!(
            counter,
            blocks, "chacha20 block counter wraps, keystream will repeat"
        );
    }

    let mut block_counter = counter;

    for chunk in data.chunks_mut(BLOCK_SIZE) {
        let mut keystream = generate_block(key, nonce, block_counter);
        block_counter = block_counter.wrapping_add(1);

        xor_into(chunk, &keystream);
        keystream.zeroize();
    }
}

/// Encrypts or decrypts `data` into a new buffer, starting at block `counter`.
///
/// Applying this twice with the same key, nonce and counter returns the
/// original data.
pub fn apply_keystream(
    key: &Key,
    nonce: &Nonce,
    counter: BlockCounter,
    data: &[u8],
) -> Vec<u8> {
    let mut out = data.to_vec();
    apply_keystream_in_place(key, nonce, counter, &mut out);

    out
}

/// Returns `len` bytes of keystream starting at block `counter`.
///
/// The result is the concatenation of consecutive blocks, truncated to
/// `len` bytes.
pub fn keystream(key: &Key, nonce: &Nonce, counter: BlockCounter, len: usize) -> Vec<u8> {
    let mut out = vec![0u8; len];
    apply_keystream_in_place(key, nonce, counter, &mut out);

    out
}

/// Whether `blocks` blocks starting at `counter` run past `u32::MAX`.
fn wraps(counter: BlockCounter, blocks: usize) -> bool {
    u64::from(counter) + blocks as u64 > 1u64 << 32
}

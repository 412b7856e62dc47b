//! ChaCha20 internal state and permutation
//!
//! The state is a 4×4 matrix of 32-bit words laid out as:
//!
//! ```text
//!  0  1  2  3    constants ("expand 32-byte k")
//!  4  5  6  7    key words 0..4
//!  8  9 10 11    key words 4..8
//! 12 13 14 15    block counter, nonce words 0..3
//! ```
//!
//! A state is built fresh for every block and lives only on the stack of
//! the call that owns it.

use zeroize::Zeroize;

use crate::primitives::{BlockCounter, Key, Nonce};

/// ChaCha20 constant words.
///
/// These values correspond to the ASCII string:
/// `"expand 32-byte k"` encoded as little-endian `u32` words, as defined
/// in RFC 8439.
///
/// They are public, fixed, and non-secret, and define the ChaCha20
/// permutation domain.
pub const CONSTANTS: [u32; 4] = [
    0x6170_7865, // "expa"
    0x3320_646e, // "nd 3"
    0x7962_2d32, // "2-by"
    0x6b20_6574, // "te k"
];

/// Number of single rounds applied by the permutation (10 double rounds).
pub const ROUNDS: usize = 20;

/// Performs one ChaCha20 quarter round on state words `a`, `b`, `c`, `d`.
///
/// A quarter round mixes four 32-bit words of the internal state using
/// addition modulo 2³², XOR, and fixed left rotations (16, 12, 8, 7). This
/// operation is the fundamental source of diffusion and non-linearity in
/// ChaCha20.
///
/// The function is branchless. Indices must be distinct and below 16.
#[inline(always)]
pub fn quarter_round(state: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(16);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(12);

    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(8);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(7);
}

/// Applies the full ChaCha20 permutation (20 rounds).
///
/// Each double round performs four column quarter rounds followed by four
/// diagonal quarter rounds. No feed-forward is applied here; that step
/// belongs to [`generate_block`](super::generate_block).
pub fn rounds(state: &mut [u32; 16]) {
    for _ in 0..ROUNDS / 2 {
        // Column rounds
        quarter_round(state, 0, 4, 8, 12);
        quarter_round(state, 1, 5, 9, 13);
        quarter_round(state, 2, 6, 10, 14);
        quarter_round(state, 3, 7, 11, 15);

        // Diagonal rounds
        quarter_round(state, 0, 5, 10, 15);
        quarter_round(state, 1, 6, 11, 12);
        quarter_round(state, 2, 7, 8, 13);
        quarter_round(state, 3, 4, 9, 14);
    }
}

/// Initial ChaCha20 state for one block.
///
/// Holds key material, so it is wiped once the block has been produced.
pub(crate) struct InternalState([u32; 16]);

impl InternalState {
    /// Lays out constants, key, counter and nonce as described above.
    pub(crate) fn new(key: &Key, nonce: &Nonce, counter: BlockCounter) -> Self {
        let mut state = [0u32; 16];

        state[0..4].copy_from_slice(&CONSTANTS);

        let mut key_words = key.words();
        state[4..12].copy_from_slice(&key_words);
        key_words.zeroize();

        state[12] = counter;
        state[13..16].copy_from_slice(&nonce.words());

        Self(state)
    }

    /// Permutes a copy of the state and adds the original back in.
    ///
    /// Returns the 16 output words; serialization and wiping them are left
    /// to the caller. The original state is wiped before returning.
    pub(crate) fn keystream_words(mut self) -> [u32; 16] {
        let mut working = self.0;

        rounds(&mut working);

        // Feed-forward
        working
            .iter_mut()
            .zip(&self.0)
            .for_each(|(w, o)| *w = w.wrapping_add(*o));

        self.0.zeroize();
        working
    }
}

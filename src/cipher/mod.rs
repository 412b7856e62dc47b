//! ChaCha20 stream cipher
//!
//! This module provides a low-level, dependency-light implementation of the
//! ChaCha20 stream cipher as specified in RFC 8439 (IETF variant: 96-bit
//! nonce, 32-bit block counter).
//!
//! It is organized in layers:
//!
//! - `state`  
//!   The 16-word internal state, the quarter round and the 20-round
//!   permutation.
//!
//! - `block`  
//!   The block function: one 64-byte keystream block from a key, a nonce
//!   and a counter.
//!
//! - `combine`  
//!   XOR of data against an explicit keystream, with strict length checks.
//!
//! - `stream`  
//!   Multi-block application with counter advancement.
//!
//! Everything here is a pure function of its inputs: no heap-allocated
//! cipher object, no shared state, no I/O. All calls may run in parallel.
//!
//! This module **does not** implement authenticated encryption. Higher-level
//! constructions (such as ChaCha20-Poly1305) must be built on top of this
//! primitive with strict nonce and key management.

mod block;
mod combine;
mod state;
mod stream;

pub use block::generate_block;
pub use combine::{combine, combine_in_place};
pub use state::{CONSTANTS, ROUNDS, quarter_round, rounds};
pub use stream::{apply_keystream, apply_keystream_in_place, keystream};

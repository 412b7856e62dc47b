//! ChaCha20 stream cipher for Nebula
//!
//! This crate provides the ChaCha20 keystream generator (RFC 8439, IETF
//! variant) and the XOR combination that turns it into a stream cipher.
//!
//! The focus is on **clarity, predictability, and auditability**. The
//! cipher is exposed as a set of pure functions rather than as a stateful
//! object: every call builds its own working state on the stack, uses it,
//! wipes it, and returns. Nothing is shared between calls.
//!
//! # Module overview
//!
//! - `primitives`
//!   Fixed-size inputs and outputs: [`Key`], [`Nonce`], [`BlockCounter`]
//!   and [`KeystreamBlock`], plus the little-endian word conversions used
//!   to load them into the cipher state.
//!
//! - `cipher`
//!   The ChaCha20 quarter round and permutation, the block function
//!   ([`generate_block`]), the keystream combiner ([`combine`]) and the
//!   multi-block helpers ([`apply_keystream`], [`keystream`]).
//!
//! - `error`
//!   The crate-wide [`CipherError`] type.
//!
//! # Example
//!
//! ```
//! use cryptal_stream::{Key, Nonce, apply_keystream};
//!
//! let key = Key::new([0x42; 32]);
//! let nonce = Nonce::new([0x24; 12]);
//!
//! let ciphertext = apply_keystream(&key, &nonce, 1, b"attack at dawn");
//! let plaintext = apply_keystream(&key, &nonce, 1, &ciphertext);
//!
//! assert_eq!(plaintext, b"attack at dawn");
//! ```
//!
//! # Scope
//!
//! - No authentication: ciphertexts are malleable.
//! - No key derivation and no key/nonce generation.
//! - Nonce uniqueness per key is the caller's responsibility.
//!
//! # Logging
//!
//! The crate emits `tracing` events (stream sizes at `trace`, counter
//! wrap-around at `warn`) and never installs a subscriber. Key, nonce and
//! data bytes are never logged.

pub mod cipher;
pub mod error;
pub mod primitives;

pub use cipher::{
    apply_keystream, apply_keystream_in_place, combine, combine_in_place, generate_block,
    keystream,
};
pub use error::{CipherError, Result};
pub use primitives::{BLOCK_SIZE, BlockCounter, KEY_SIZE, Key, KeystreamBlock, NONCE_SIZE, Nonce};

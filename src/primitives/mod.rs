//! Primitive types
//!
//! This module defines the fixed-size inputs and outputs of the ChaCha20
//! block function.
//!
//! The sizes are encoded in the types themselves: once a [`Key`] or a
//! [`Nonce`] exists, it is guaranteed to have the right length, so the
//! block function never has to validate anything. Length checks happen
//! exactly once, at the boundary where raw slices are turned into these
//! types.
//!
//! Current primitives include:
//! - `Key`: a 256-bit secret key, wiped from memory on drop
//! - `Nonce`: a 96-bit public nonce (IETF variant)
//! - `BlockCounter`: the 32-bit block index within a (key, nonce) stream
//! - `KeystreamBlock`: one 64-byte output block

pub(crate) mod conv;
mod key;
mod nonce;

pub use key::Key;
pub use nonce::Nonce;

/// Size of a ChaCha20 key in bytes.
pub const KEY_SIZE: usize = 32;

/// Size of a ChaCha20 nonce in bytes.
pub const NONCE_SIZE: usize = 12;

/// Size of a ChaCha20 keystream block in bytes.
pub const BLOCK_SIZE: usize = 64;

/// Index of a 64-byte block within a (key, nonce) keystream.
///
/// The counter occupies word 12 of the state as a native `u32`. It wraps
/// modulo 2³²; avoiding keystream reuse past that point is up to the caller.
pub type BlockCounter = u32;

/// One 64-byte ChaCha20 keystream block.
pub type KeystreamBlock = [u8; BLOCK_SIZE];

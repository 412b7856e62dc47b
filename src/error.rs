//! Error types for the stream cipher.
//!
//! Every fallible operation in this crate reports a [`CipherError`]. All
//! errors stem from caller-supplied sizes; the arithmetic itself cannot fail,
//! so nothing here is transient or worth retrying.

use thiserror::Error;

/// Errors produced by key/nonce construction and keystream combination.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// A fixed-size input was built from a slice of the wrong length.
    ///
    /// `field` names the offending input (`"key"` or `"nonce"`).
    #[error("invalid {field} length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Data and keystream passed to a combiner differ in length.
    #[error("length mismatch: data is {data} bytes but keystream is {keystream} bytes")]
    LengthMismatch { data: usize, keystream: usize },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CipherError>;

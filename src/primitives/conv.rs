//! Little-endian conversions between bytes and 32-bit words
//!
//! ChaCha20 is defined over little-endian words on every platform. These
//! helpers perform the loads and stores explicitly so the block function
//! never depends on host byte order.

/// Loads consecutive little-endian words from `bytes` into `words`.
///
/// `bytes` must hold exactly `4 * words.len()` bytes. All callers pass
/// fixed-size arrays, so the relation is checked only in debug builds.
pub(crate) fn load_le_words(words: &mut [u32], bytes: &[u8]) {
    debug_assert_eq!(bytes.len(), words.len() * 4);

    for (w, c) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *w = u32::from_le_bytes([c[0], c[1], c[2], c[3]]);
    }
}

/// Stores `words` into `bytes` as consecutive little-endian words.
pub(crate) fn store_le_words(bytes: &mut [u8], words: &[u32]) {
    debug_assert_eq!(bytes.len(), words.len() * 4);

    for (c, w) in bytes.chunks_exact_mut(4).zip(words) {
        c.copy_from_slice(&w.to_le_bytes());
    }
}

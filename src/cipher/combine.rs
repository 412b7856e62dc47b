//! Keystream combination
//!
//! Encryption and decryption are the same operation: XOR with the
//! keystream. Applying it twice with the same keystream restores the input.

use crate::error::{CipherError, Result};

/// XORs `data` with `keystream` into a new buffer.
///
/// # Errors
/// Returns [`CipherError::LengthMismatch`] if the two inputs differ in
/// length. Inputs are never truncated or padded.
///
/// # Notes
/// For inputs longer than one block, the caller concatenates keystream
/// blocks for consecutive counters, or uses
/// [`apply_keystream`](super::apply_keystream) directly.
pub fn combine(data: &[u8], keystream: &[u8]) -> Result<Vec<u8>> {
    let mut out = data.to_vec();
    combine_in_place(&mut out, keystream)?;

    Ok(out)
}

/// XORs `keystream` into `data` in place.
///
/// Same length contract as [`combine`]; `data` is left untouched on error.
pub fn combine_in_place(data: &mut [u8], keystream: &[u8]) -> Result<()> {
    if data.len() != keystream.len() {
        return Err(CipherError::LengthMismatch {
            data: data.len(),
            keystream: keystream.len(),
        });
    }

    xor_into(data, keystream);

    Ok(())
}

/// XORs `src` into `dst` over their common prefix.
#[inline]
pub(crate) fn xor_into(dst: &mut [u8], src: &[u8]) {
    dst.iter_mut().zip(src).for_each(|(d, s)| *d ^= s);
}

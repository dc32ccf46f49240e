//! Wire encoding for BIP37 filters
//!
//! The same layout is carried by the `filterload` message:
//!
//! ```text
//! varint   filter_length
//! bytes    filter[filter_length]
//! uint32   hash_funcs   (little-endian)
//! uint32   tweak        (little-endian)
//! uint8    flags
//! ```

pub mod varint;
pub mod wire;

use crate::error::DecodeError;

/// Split `n` bytes off the front of `input`
pub(crate) fn take<'a>(input: &mut &'a [u8], n: usize) -> Result<&'a [u8], DecodeError> {
    if input.len() < n {
        return Err(DecodeError::UnexpectedEof {
            needed: n,
            remaining: input.len(),
        });
    }
    let (head, tail) = input.split_at(n);
    *input = tail;
    Ok(head)
}

/// Read a little-endian u32 from the front of `input`
pub(crate) fn read_u32_le(input: &mut &[u8]) -> Result<u32, DecodeError> {
    let raw = take(input, 4)?;
    Ok(u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]))
}

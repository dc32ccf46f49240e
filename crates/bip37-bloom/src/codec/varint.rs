//! CompactSize variable length integers
//!
//! | Value               | Encoding            |
//! |---------------------|---------------------|
//! | `< 0xfd`            | 1 byte              |
//! | `<= 0xffff`         | `0xfd` + u16 LE     |
//! | `<= 0xffff_ffff`    | `0xfe` + u32 LE     |
//! | larger              | `0xff` + u64 LE     |

use super::take;
use crate::error::DecodeError;

/// Number of bytes `value` occupies once encoded
pub fn size(value: u64) -> usize {
    match value {
        0..=0xfc => 1,
        0xfd..=0xffff => 3,
        0x1_0000..=0xffff_ffff => 5,
        _ => 9,
    }
}

/// Append the encoding of `value` to `out`
pub fn write(value: u64, out: &mut Vec<u8>) {
    match value {
        0..=0xfc => out.push(value as u8),
        0xfd..=0xffff => {
            out.push(0xfd);
            out.extend_from_slice(&(value as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            out.push(0xfe);
            out.extend_from_slice(&(value as u32).to_le_bytes());
        }
        _ => {
            out.push(0xff);
            out.extend_from_slice(&value.to_le_bytes());
        }
    }
}

/// Read one value from the front of `input`, advancing it
///
/// Rejects encodings that are longer than necessary.
pub fn read(input: &mut &[u8]) -> Result<u64, DecodeError> {
    let prefix = take(input, 1)?[0];
    let (value, min) = match prefix {
        0xfd => {
            let raw = take(input, 2)?;
            (u16::from_le_bytes([raw[0], raw[1]]) as u64, 0xfd)
        }
        0xfe => {
            let raw = take(input, 4)?;
            (
                u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]) as u64,
                0x1_0000,
            )
        }
        0xff => {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(take(input, 8)?);
            (u64::from_le_bytes(buf), 0x1_0000_0000)
        }
        small => return Ok(small as u64),
    };

    if value < min {
        return Err(DecodeError::NonCanonicalVarInt);
    }
    Ok(value)
}

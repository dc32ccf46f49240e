//! `filterload` payload encoding of a [`BloomFilter`]

use tracing::warn;

use super::{read_u32_le, take, varint};
use crate::domain::{BloomFilter, MAX_BLOOM_FILTER_SIZE};
use crate::error::{DecodeError, FilterError};

/// Bytes following the bit array: hash count, tweak and flags
const TRAILER_SIZE: usize = 4 + 4 + 1;

impl BloomFilter {
    /// Size of the wire encoding in bytes
    pub fn serialized_size(&self) -> usize {
        let len = self.size_bytes();
        varint::size(len as u64) + len + TRAILER_SIZE
    }

    /// Append the wire encoding to `out`
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        let bits = self.as_bytes();
        varint::write(bits.len() as u64, out);
        out.extend_from_slice(bits);
        out.extend_from_slice(&self.hash_funcs().to_le_bytes());
        out.extend_from_slice(&self.tweak().to_le_bytes());
        out.push(self.flags());
    }

    /// Serialize the filter to bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.serialized_size());
        self.encode_into(&mut out);
        out
    }

    /// Deserialize a filter from its wire encoding
    ///
    /// The size limits enforced at construction apply here too. The element
    /// counter is not part of the encoding and starts at zero.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FilterError> {
        let mut input = bytes;

        let len = varint::read(&mut input)?;
        // Checked before allocating the bit array
        if len > MAX_BLOOM_FILTER_SIZE as u64 {
            warn!(len = len, "Rejected bloom filter with oversized length prefix");
            return Err(FilterError::FilterTooLarge {
                size: usize::try_from(len).unwrap_or(usize::MAX),
                max: MAX_BLOOM_FILTER_SIZE,
            });
        }

        let bits = take(&mut input, len as usize)?.to_vec();
        let hash_funcs = read_u32_le(&mut input)?;
        let tweak = read_u32_le(&mut input)?;
        let flags = take(&mut input, 1)?[0];

        if !input.is_empty() {
            return Err(DecodeError::TrailingBytes(input.len()).into());
        }

        Self::from_parts(bits, hash_funcs, tweak, flags)
    }
}

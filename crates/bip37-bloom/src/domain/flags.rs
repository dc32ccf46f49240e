//! BIP37 filter update flags
//!
//! Tells a matching peer which outputs of a matched transaction it should
//! add back into the filter. The filter itself only carries the raw byte.

use serde::{Deserialize, Serialize};

use crate::error::FilterError;

/// Never update the filter with outpoints
pub const BLOOM_UPDATE_NONE: u8 = 0;
/// Always update the filter with outpoints of matched outputs
pub const BLOOM_UPDATE_ALL: u8 = 1;
/// Only update with outpoints of matched P2PK or bare multisig outputs
pub const BLOOM_UPDATE_P2PUBKEY_ONLY: u8 = 2;

/// Typed view of the update flags byte
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BloomFlags {
    #[default]
    None,
    All,
    PubkeyOnly,
}

impl From<BloomFlags> for u8 {
    fn from(flags: BloomFlags) -> Self {
        match flags {
            BloomFlags::None => BLOOM_UPDATE_NONE,
            BloomFlags::All => BLOOM_UPDATE_ALL,
            BloomFlags::PubkeyOnly => BLOOM_UPDATE_P2PUBKEY_ONLY,
        }
    }
}

impl TryFrom<u8> for BloomFlags {
    type Error = FilterError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            BLOOM_UPDATE_NONE => Ok(BloomFlags::None),
            BLOOM_UPDATE_ALL => Ok(BloomFlags::All),
            BLOOM_UPDATE_P2PUBKEY_ONLY => Ok(BloomFlags::PubkeyOnly),
            other => Err(FilterError::InvalidFlags(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_to_byte() {
        assert_eq!(u8::from(BloomFlags::None), 0);
        assert_eq!(u8::from(BloomFlags::All), 1);
        assert_eq!(u8::from(BloomFlags::PubkeyOnly), 2);
    }

    #[test]
    fn test_flags_from_byte() {
        assert_eq!(BloomFlags::try_from(2), Ok(BloomFlags::PubkeyOnly));
        assert_eq!(BloomFlags::try_from(3), Err(FilterError::InvalidFlags(3)));
    }
}

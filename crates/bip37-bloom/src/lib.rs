//! # BIP37 Bloom Filters
//!
//! Connection Bloom filters for light clients. A client loads a filter into
//! a full peer with `filterload`, and the peer only relays transactions that
//! match it.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure filter logic, no I/O
//!   - `BloomFilter`: bit array, insert, contains, FPR estimate
//!   - `murmur3_32`: the hash every BIP37 peer uses
//!   - `BloomConfig`: Configuration with validation
//!   - `BloomConfigBuilder`: Fluent builder for configuration
//!
//! - **Codec Layer** (`codec/`): Wire format
//!   - CompactSize varints
//!   - `BloomFilter::to_bytes` / `BloomFilter::from_bytes`
//!
//! ## Invariants
//!
//! - Filter size between 1 and 36000 bytes, at most 50 hash functions
//! - No false negatives: if inserted, `contains()` MUST return true
//! - Bits are only ever set, never cleared
//!
//! ## Parameter policy
//!
//! [`BloomFilter::new`] clamps degenerate parameters to the protocol limits,
//! so it never fails. [`BloomFilter::try_new`], [`BloomConfig::validate`]
//! and [`BloomFilter::from_bytes`] reject them instead.
//!
//! ## Usage Example
//!
//! ```
//! use bip37_bloom::{BloomFilter, BLOOM_UPDATE_ALL};
//!
//! let mut filter = BloomFilter::new(0.0001, 100, 0x5eed, BLOOM_UPDATE_ALL);
//! filter.insert(b"script pubkey");
//! assert!(filter.contains(b"script pubkey"));
//!
//! let payload = filter.to_bytes();
//! assert_eq!(payload.len(), filter.serialized_size());
//! ```

pub mod codec;
pub mod domain;
pub mod error;

// Re-exports for convenience
pub use domain::{
    murmur3_32, BloomConfig, BloomConfigBuilder, BloomFilter, BloomFilterParams, BloomFlags,
    BLOOM_UPDATE_ALL, BLOOM_UPDATE_NONE, BLOOM_UPDATE_P2PUBKEY_ONLY, MAX_BLOOM_FILTER_SIZE,
    MAX_HASH_FUNCS,
};
pub use error::{DecodeError, FilterError};

//! Domain Layer - Pure filter logic
//!
//! This layer contains:
//! - MurmurHash3 and per-round seed derivation
//! - Parameter calculations
//! - The BIP37 Bloom filter
//! - Update flags
//! - Configuration
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Pure functions where possible

pub mod bloom_filter;
pub mod config;
pub mod flags;
pub mod hash_functions;
pub mod parameters;

pub use bloom_filter::BloomFilter;
pub use config::{BloomConfig, BloomConfigBuilder};
pub use flags::{BloomFlags, BLOOM_UPDATE_ALL, BLOOM_UPDATE_NONE, BLOOM_UPDATE_P2PUBKEY_ONLY};
pub use hash_functions::{murmur3_32, HASH_SEED_MULTIPLIER};
pub use parameters::{
    calculate_parameters, BloomFilterParams, MAX_BLOOM_FILTER_SIZE, MAX_HASH_FUNCS,
};

//! Error types for the BIP37 Bloom filter crate

use thiserror::Error;

/// Errors raised while constructing or validating a filter
#[derive(Debug, Error, PartialEq)]
pub enum FilterError {
    #[error("Filter size exceeds maximum: {size} > {max}")]
    FilterTooLarge { size: usize, max: usize },

    #[error("Too many hash functions: {count} > {max}")]
    TooManyHashFuncs { count: u32, max: u32 },

    #[error("Filter must contain at least one byte")]
    EmptyFilter,

    #[error("Invalid false positive rate: {fpr} (must be between 0 and 1, exclusive)")]
    InvalidFPR { fpr: f64 },

    #[error("Invalid filter parameters: {0}")]
    InvalidParameters(String),

    #[error("Unknown update flags: {0}")]
    InvalidFlags(u8),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// Errors from reading the wire encoding
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Unexpected end of input: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEof { needed: usize, remaining: usize },

    #[error("Non-canonical variable length integer")]
    NonCanonicalVarInt,

    #[error("Trailing bytes after filter: {0}")]
    TrailingBytes(usize),
}

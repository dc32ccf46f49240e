//! Core BIP37 Bloom filter implementation
//!
//! INVARIANTS:
//! - The bit array holds between 1 and 36000 bytes and never changes size
//! - At most 50 hash rounds
//! - No false negatives: once inserted, `contains()` MUST return true

use bitvec::prelude::*;
use tracing::{debug, warn};

use super::config::BloomConfig;
use super::flags::{BloomFlags, BLOOM_UPDATE_NONE};
use super::hash_functions::bit_index;
use super::parameters::{
    calculate_parameters, estimate_fpr, MAX_BLOOM_FILTER_SIZE, MAX_HASH_FUNCS,
};
use crate::error::FilterError;

/// Connection Bloom filter as loaded into a peer with `filterload`
///
/// Bit `i` is stored in byte `i >> 3` at bit `i & 7`, least significant bit
/// first, which is exactly the `Lsb0` ordering of a `BitVec<u8>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BloomFilter {
    /// Packed bit array
    bits: BitVec<u8, Lsb0>,
    /// Number of hash rounds per element
    hash_funcs: u32,
    /// Salt mixed into every hash seed
    tweak: u32,
    /// Update flags, carried verbatim
    flags: u8,
    /// Number of insert calls, used for the FPR estimate only
    elements: usize,
}

impl BloomFilter {
    /// Create a filter sized for `elements` items at `fp_rate`
    ///
    /// Out-of-range parameters are clamped to the protocol limits instead of
    /// being rejected. Use [`BloomFilter::try_new`] to fail fast.
    pub fn new(fp_rate: f64, elements: usize, tweak: u32, flags: u8) -> Self {
        let params = calculate_parameters(fp_rate, elements);
        debug!(
            size_bytes = params.size_bytes,
            hash_funcs = params.hash_funcs,
            elements = elements,
            fp_rate = fp_rate,
            "Created bloom filter"
        );

        Self {
            bits: bitvec![u8, Lsb0; 0; params.size_bytes * 8],
            hash_funcs: params.hash_funcs,
            tweak,
            flags,
            elements: 0,
        }
    }

    /// Like [`BloomFilter::new`], but rejects parameters that would be clamped
    /// for lack of a meaningful value
    ///
    /// `fp_rate` must lie strictly between 0 and 1, and `elements` must be
    /// at least 1.
    pub fn try_new(
        fp_rate: f64,
        elements: usize,
        tweak: u32,
        flags: u8,
    ) -> Result<Self, FilterError> {
        if !(fp_rate > 0.0 && fp_rate < 1.0) {
            return Err(FilterError::InvalidFPR { fpr: fp_rate });
        }
        if elements == 0 {
            return Err(FilterError::InvalidParameters(
                "expected element count cannot be 0".to_string(),
            ));
        }
        Ok(Self::new(fp_rate, elements, tweak, flags))
    }

    /// Create a filter that matches everything
    ///
    /// One byte with every bit set and no hash rounds: `insert` only bumps the
    /// counter and `contains` is always true.
    pub fn new_full_match() -> Self {
        Self {
            bits: BitVec::from_vec(vec![0xff]),
            hash_funcs: 0,
            tweak: 0,
            flags: BLOOM_UPDATE_NONE,
            elements: 0,
        }
    }

    /// Create a filter from explicit wire-level parameters
    pub fn from_parts(
        bits: Vec<u8>,
        hash_funcs: u32,
        tweak: u32,
        flags: u8,
    ) -> Result<Self, FilterError> {
        if bits.is_empty() {
            return Err(FilterError::EmptyFilter);
        }
        if bits.len() > MAX_BLOOM_FILTER_SIZE {
            warn!(size = bits.len(), "Rejected oversized bloom filter");
            return Err(FilterError::FilterTooLarge {
                size: bits.len(),
                max: MAX_BLOOM_FILTER_SIZE,
            });
        }
        if hash_funcs > MAX_HASH_FUNCS {
            warn!(hash_funcs = hash_funcs, "Rejected bloom filter with too many hash functions");
            return Err(FilterError::TooManyHashFuncs {
                count: hash_funcs,
                max: MAX_HASH_FUNCS,
            });
        }

        Ok(Self {
            bits: BitVec::from_vec(bits),
            hash_funcs,
            tweak,
            flags,
            elements: 0,
        })
    }

    /// Create a filter from a validated configuration
    pub fn from_config(config: &BloomConfig) -> Result<Self, FilterError> {
        config.validate()?;
        Ok(Self::new(
            config.target_fpr,
            config.expected_elements,
            config.tweak,
            config.flags.into(),
        ))
    }

    /// Insert an element into the filter
    ///
    /// Bumps the element counter exactly once, even with no hash rounds.
    pub fn insert(&mut self, element: &[u8]) {
        let size_bits = self.size_bits();
        for round in 0..self.hash_funcs {
            let idx = bit_index(element, round, self.tweak, size_bits);
            self.bits.set(idx as usize, true);
        }
        self.elements += 1;
    }

    /// Test if an element might be in the filter
    ///
    /// Returns `false` at the first unset bit. With no hash rounds every
    /// element matches.
    pub fn contains(&self, element: &[u8]) -> bool {
        let size_bits = self.size_bits();
        (0..self.hash_funcs).all(|round| {
            let idx = bit_index(element, round, self.tweak, size_bits);
            self.bits[idx as usize]
        })
    }

    /// Theoretical false positive rate for the current number of inserts
    ///
    /// Formula: FPR = (1 - e^(-kn/m))^k
    pub fn estimated_false_positive_rate(&self) -> f64 {
        estimate_fpr(self.bits.len(), self.elements, self.hash_funcs)
    }

    /// Raw bit array bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.bits.as_raw_slice()
    }

    /// Length of the bit array in bytes
    pub fn size_bytes(&self) -> usize {
        self.bits.as_raw_slice().len()
    }

    fn size_bits(&self) -> u32 {
        // Bounded by 36000 * 8
        self.bits.len() as u32
    }

    /// Number of hash rounds
    pub fn hash_funcs(&self) -> u32 {
        self.hash_funcs
    }

    pub fn tweak(&self) -> u32 {
        self.tweak
    }

    /// Raw update flags byte
    pub fn flags(&self) -> u8 {
        self.flags
    }

    /// Typed update flags, if the byte holds a known value
    pub fn update_flags(&self) -> Result<BloomFlags, FilterError> {
        BloomFlags::try_from(self.flags)
    }

    /// Number of insert calls so far
    pub fn elements_inserted(&self) -> usize {
        self.elements
    }

    /// Get the number of bits set in the filter
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Every bit set: the filter matches anything
    pub fn is_full_match(&self) -> bool {
        self.bits.all()
    }

    /// No bit set: the filter matches nothing, unless it has no hash rounds
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Whether a peer would accept this filter
    pub fn is_within_size_constraints(&self) -> bool {
        (1..=MAX_BLOOM_FILTER_SIZE).contains(&self.size_bytes())
            && self.hash_funcs <= MAX_HASH_FUNCS
    }
}

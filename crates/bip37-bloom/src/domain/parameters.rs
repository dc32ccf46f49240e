//! BIP37 Bloom filter parameter calculation
//!
//! Formulas:
//! - size = -n*ln(fpr) / (ln(2)^2) / 8    -- bytes, rounded up
//! - k    = (size*8 / n) * ln(2)          -- hash functions, rounded down
//! - FPR  = (1 - e^(-kn/m))^k             -- estimate for the current fill

use std::f64::consts::LN_2;

use tracing::debug;

/// Largest filter a peer will accept, in bytes
pub const MAX_BLOOM_FILTER_SIZE: usize = 36_000;

/// Largest number of hash rounds a peer will accept
pub const MAX_HASH_FUNCS: u32 = 50;

/// Derived BIP37 filter parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BloomFilterParams {
    /// Length of the bit array in bytes
    pub size_bytes: usize,
    /// Number of hash rounds
    pub hash_funcs: u32,
}

/// Derive the filter size and hash count for `elements` items at `fp_rate`
///
/// Degenerate inputs are clamped rather than rejected:
/// - a non-positive or non-finite size becomes 1 byte, an infinite one 36000
/// - `elements == 0` yields the maximum hash count, the limit of the
///   formula as the divisor goes to zero
pub fn calculate_parameters(fp_rate: f64, elements: usize) -> BloomFilterParams {
    let size_bytes = filter_size_bytes(fp_rate, elements);
    let hash_funcs = hash_func_count(size_bytes, elements);

    BloomFilterParams {
        size_bytes,
        hash_funcs,
    }
}

/// Bit array length in bytes, clamped to `[1, MAX_BLOOM_FILTER_SIZE]`
pub fn filter_size_bytes(fp_rate: f64, elements: usize) -> usize {
    let raw = (-1.0 / (LN_2 * LN_2) * elements as f64 * fp_rate.ln() / 8.0).ceil();

    // NaN and negatives saturate to 0, +inf to usize::MAX
    let size = (raw as usize).clamp(1, MAX_BLOOM_FILTER_SIZE);
    if !(1.0..=MAX_BLOOM_FILTER_SIZE as f64).contains(&raw) {
        debug!(
            fp_rate = fp_rate,
            elements = elements,
            raw = raw,
            size = size,
            "Clamped bloom filter size"
        );
    }
    size
}

/// Hash round count for a filter of `size_bytes`, clamped to `[0, MAX_HASH_FUNCS]`
pub fn hash_func_count(size_bytes: usize, elements: usize) -> u32 {
    if elements == 0 {
        debug!(
            size_bytes = size_bytes,
            "No expected elements, using maximum hash function count"
        );
        return MAX_HASH_FUNCS;
    }

    let raw = (size_bytes as f64 * 8.0 / elements as f64 * LN_2).floor();
    (raw as u32).min(MAX_HASH_FUNCS)
}

/// Estimated false positive rate
///
/// Formula: FPR = (1 - e^(-kn/m))^k, with `m` the size in bits.
pub fn estimate_fpr(size_bits: usize, elements: usize, hash_funcs: u32) -> f64 {
    if size_bits == 0 {
        return 1.0;
    }
    let k = hash_funcs as f64;
    let exponent = -k * elements as f64 / size_bits as f64;
    (1.0 - exponent.exp()).powi(hash_funcs as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameters_n100_fpr00001() {
        let params = calculate_parameters(0.0001, 100);

        // ceil(2.0814 * 100 * 9.2103 / 8) = 240, floor(240*8/100 * ln2) = 13
        assert_eq!(params.size_bytes, 240);
        assert_eq!(params.hash_funcs, 13);
    }

    #[test]
    fn test_parameters_match_closed_form() {
        let (fpr, n) = (0.0001_f64, 100usize);
        let params = calculate_parameters(fpr, n);

        let size = -1.0 / (LN_2 * LN_2) * n as f64 * fpr.ln() / 8.0;
        assert!((params.size_bytes as f64 - size).abs() < 1.0);

        let k = params.size_bytes as f64 * 8.0 / n as f64 * LN_2;
        assert!((params.hash_funcs as f64 - k).abs() < 1.0);
    }

    #[test]
    fn test_size_rounds_up() {
        // 3 elements at 1% needs 28.75 bits, so 4 bytes
        let params = calculate_parameters(0.01, 3);
        assert_eq!(params.size_bytes, 4);
        assert_eq!(params.hash_funcs, 7);
    }

    #[test]
    fn test_size_clamped_to_maximum() {
        let params = calculate_parameters(0.000_001, 1_000_000);
        assert_eq!(params.size_bytes, MAX_BLOOM_FILTER_SIZE);
    }

    #[test]
    fn test_hash_funcs_clamped_to_maximum() {
        let params = calculate_parameters(1e-30, 1);
        assert_eq!(params.hash_funcs, MAX_HASH_FUNCS);
    }

    #[test]
    fn test_zero_elements() {
        let params = calculate_parameters(0.01, 0);
        assert_eq!(params.size_bytes, 1);
        assert_eq!(params.hash_funcs, MAX_HASH_FUNCS);
    }

    #[test]
    fn test_degenerate_fp_rates() {
        // ln(1) = 0 and ln(x > 1) > 0 both give a non-positive size
        assert_eq!(filter_size_bytes(1.0, 100), 1);
        assert_eq!(filter_size_bytes(2.0, 100), 1);
        // ln(0) = -inf
        assert_eq!(filter_size_bytes(0.0, 100), MAX_BLOOM_FILTER_SIZE);
        // ln of a negative number is NaN
        assert_eq!(filter_size_bytes(-0.5, 100), 1);
        assert_eq!(filter_size_bytes(f64::NAN, 100), 1);
    }

    #[test]
    fn test_lower_fpr_needs_more_bytes() {
        let loose = calculate_parameters(0.1, 100);
        let tight = calculate_parameters(0.01, 100);
        assert!(tight.size_bytes > loose.size_bytes);
    }

    #[test]
    fn test_estimate_fpr() {
        // m=1000 bits, n=100, k=7 is roughly 0.8%
        let fpr = estimate_fpr(1000, 100, 7);
        assert!(fpr > 0.005 && fpr < 0.02, "Expected FPR≈0.008, got {}", fpr);
    }

    #[test]
    fn test_estimate_fpr_empty_filter() {
        assert_eq!(estimate_fpr(1920, 0, 13), 0.0);
    }

    #[test]
    fn test_estimate_fpr_no_hash_funcs() {
        assert_eq!(estimate_fpr(8, 10, 0), 1.0);
        assert_eq!(estimate_fpr(0, 10, 5), 1.0);
    }
}

//! Hash functions for BIP37 Bloom filters
//!
//! BIP37 fixes the hash to MurmurHash3 (x86, 32-bit). Every round `i` of a
//! filter with tweak `t` hashes the element with seed `i * 0xfba4c795 + t`,
//! so `k` independent bit positions come out of one hash function.
//!
//! Peers must pick the exact same bits, so the hash output is part of the
//! wire contract.

use std::io::Cursor;

/// Multiplier applied to the round number when deriving a seed
pub const HASH_SEED_MULTIPLIER: u32 = 0xfba4_c795;

/// MurmurHash3 x86_32 of `data` with `seed`
pub fn murmur3_32(data: &[u8], seed: u32) -> u32 {
    let mut cursor = Cursor::new(data);

    // Reading from an in-memory cursor cannot fail
    murmur3::murmur3_32(&mut cursor, seed).unwrap_or(0)
}

/// Seed used for hash round `round` of a filter salted with `tweak`
pub fn round_seed(round: u32, tweak: u32) -> u32 {
    round.wrapping_mul(HASH_SEED_MULTIPLIER).wrapping_add(tweak)
}

/// Bit position selected by hash round `round` in a filter of `size_bits` bits
///
/// `size_bits` must be non-zero; a filter always holds at least one byte.
pub fn bit_index(element: &[u8], round: u32, tweak: u32, size_bits: u32) -> u32 {
    murmur3_32(element, round_seed(round, tweak)) % size_bits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_murmur3_empty_input() {
        assert_eq!(murmur3_32(b"", 0), 0);
        assert_eq!(murmur3_32(b"", 0xfba4_c795), 0x6a39_6f08);
        assert_eq!(murmur3_32(b"", 0xffff_ffff), 0x81f1_6f39);
    }

    #[test]
    fn test_murmur3_tail_lengths() {
        // One vector per tail length, plus a full block
        assert_eq!(murmur3_32(&[0x00], 0), 0x514e_28b7);
        assert_eq!(murmur3_32(&[0x00], 0xfba4_c795), 0xea3f_0b17);
        assert_eq!(murmur3_32(&[0xff], 0), 0xfd6c_f10d);
        assert_eq!(murmur3_32(&[0x00, 0x11], 0), 0x16c6_b7ab);
        assert_eq!(murmur3_32(&[0x00, 0x11, 0x22], 0), 0x8eb5_1c3d);
        assert_eq!(murmur3_32(&[0x00, 0x11, 0x22, 0x33], 0), 0xb447_1bf8);
    }

    #[test]
    fn test_murmur3_ascii_vectors() {
        assert_eq!(murmur3_32(b"test", 0), 0xba6b_d213);
        assert_eq!(
            murmur3_32(b"The quick brown fox jumps over the lazy dog", 0),
            0x2e4f_f723
        );
    }

    #[test]
    fn test_murmur3_deterministic() {
        let element = b"wallet_script_0xABCD";
        assert_eq!(murmur3_32(element, 42), murmur3_32(element, 42));
    }

    #[test]
    fn test_round_seed_wraps() {
        assert_eq!(round_seed(0, 7), 7);
        assert_eq!(round_seed(1, 0), HASH_SEED_MULTIPLIER);
        assert_eq!(
            round_seed(2, 0xffff_ffff),
            HASH_SEED_MULTIPLIER
                .wrapping_mul(2)
                .wrapping_add(0xffff_ffff)
        );
    }

    #[test]
    fn test_bit_index_in_range() {
        for round in 0..50 {
            let idx = bit_index(b"outpoint", round, 12345, 24);
            assert!(idx < 24, "index {} out of range for round {}", idx, round);
        }
    }

    #[test]
    fn test_tweak_changes_positions() {
        let element = b"wallet_address_0x1234";
        let a: Vec<u32> = (0..10).map(|i| bit_index(element, i, 0, 8000)).collect();
        let b: Vec<u32> = (0..10).map(|i| bit_index(element, i, 12345, 8000)).collect();

        assert_ne!(
            a, b,
            "Different tweaks should produce different positions for privacy rotation"
        );
    }
}

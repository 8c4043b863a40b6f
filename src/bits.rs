//! Word/byte conversions shared by the digest modules.
//!
//! The MD family (MD4, MD5) reads message blocks and writes digests
//! little-endian; the SHA family does both big-endian. Every byte-order
//! decision in the crate goes through this module so the two conventions
//! can't get mixed up inside a compression core.

use core::convert::TryInto;

/// Splits a 64-byte block into 16 little-endian u32 words.
pub(crate) fn load_words_le(block: &[u8]) -> [u32; 16] {
    let mut w = [0u32; 16];
    for (i, word) in w.iter_mut().enumerate() {
        *word = u32::from_le_bytes(block[4 * i..4 * i + 4].try_into().unwrap());
    }
    w
}

/// Splits a 64-byte block into 16 big-endian u32 words.
pub(crate) fn load_words_be(block: &[u8]) -> [u32; 16] {
    let mut w = [0u32; 16];
    for (i, word) in w.iter_mut().enumerate() {
        *word = u32::from_be_bytes(block[4 * i..4 * i + 4].try_into().unwrap());
    }
    w
}

/// Splits a 128-byte block into 16 big-endian u64 words.
pub(crate) fn load_words64_be(block: &[u8]) -> [u64; 16] {
    let mut w = [0u64; 16];
    for (i, word) in w.iter_mut().enumerate() {
        *word = u64::from_be_bytes(block[8 * i..8 * i + 8].try_into().unwrap());
    }
    w
}

/// Serializes state words little-endian into `out`, which must hold
/// exactly `4 * words.len()` bytes.
pub(crate) fn store_words_le(words: &[u32], out: &mut [u8]) {
    for (chunk, word) in out.chunks_exact_mut(4).zip(words) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
}

/// Serializes state words big-endian into `out`.
pub(crate) fn store_words_be(words: &[u32], out: &mut [u8]) {
    for (chunk, word) in out.chunks_exact_mut(4).zip(words) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
}

/// Serializes 64-bit state words big-endian into `out`.
pub(crate) fn store_words64_be(words: &[u64], out: &mut [u8]) {
    for (chunk, word) in out.chunks_exact_mut(8).zip(words) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_words_endianness() {
        let mut block = [0u8; 64];
        block[..4].copy_from_slice(&[0x01, 0x02, 0x03, 0x04]);

        let le = load_words_le(&block);
        assert_eq!(le[0], 0x04030201);
        assert_eq!(le[1], 0);

        let be = load_words_be(&block);
        assert_eq!(be[0], 0x01020304);
    }

    #[test]
    fn test_load_words64() {
        let mut block = [0u8; 128];
        block[..8].copy_from_slice(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]);

        let w = load_words64_be(&block);
        assert_eq!(w[0], 0x0102030405060708);
        assert_eq!(w[15], 0);
    }

    #[test]
    fn test_store_round_trips() {
        let words = [0xdeadbeefu32, 0x01234567];

        let mut le = [0u8; 8];
        store_words_le(&words, &mut le);
        assert_eq!(le, [0xef, 0xbe, 0xad, 0xde, 0x67, 0x45, 0x23, 0x01]);

        let mut be = [0u8; 8];
        store_words_be(&words, &mut be);
        assert_eq!(be, [0xde, 0xad, 0xbe, 0xef, 0x01, 0x23, 0x45, 0x67]);

        let mut wide = [0u8; 8];
        store_words64_be(&[0x0123456789abcdefu64], &mut wide);
        assert_eq!(wide, [0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef]);
    }
}

//! DISCLAIMER: This module is a toy implementation of SHA-0 (FIPS 180,
//! 1993) and SHA-1 (FIPS 180-1) in pure Rust. It is *EXCLUSIVELY* for
//! demonstration and educational purposes. Both algorithms have practical
//! collision attacks; do NOT use them for anything security-sensitive.
//!
//! The two algorithms share their entire 80-step compression function and
//! differ in exactly one place: SHA-1 rotates each expanded schedule word
//! left by one bit, SHA-0 does not. The shared core is parameterized on
//! that rotation.

use crate::bits::{load_words_be, store_words_be};
use crate::pad::sha_pad;

/// The size of the SHA-0 digest in bytes (160 bits = 20 bytes).
pub const SHA0_OUTPUT_SIZE: usize = 20;
/// The size of the SHA-1 digest in bytes (160 bits = 20 bytes).
pub const SHA1_OUTPUT_SIZE: usize = 20;

/// Initial chaining value shared by SHA-0 and SHA-1.
static INIT: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// Round constants, one per block of 20 steps.
static K: [u32; 4] = [0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xCA62C1D6];

/// Expands a 64-byte block into the 80-word schedule.
///
/// `rotate` selects the SHA-1 behavior (rotate each expanded word left by
/// one); SHA-0 uses the plain XOR.
fn expand(block: &[u8], rotate: bool) -> [u32; 80] {
    let mut w = [0u32; 80];
    w[..16].copy_from_slice(&load_words_be(block));
    for t in 16..80 {
        let v = w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16];
        w[t] = if rotate { v.rotate_left(1) } else { v };
    }
    w
}

/// Runs the 80-step compression on one block, updating the chaining value.
fn process_block(state: &mut [u32; 5], block: &[u8], rotate: bool) {
    let w = expand(block, rotate);

    let (mut a, mut b, mut c, mut d, mut e) =
        (state[0], state[1], state[2], state[3], state[4]);

    for (t, &word) in w.iter().enumerate() {
        let f = match t / 20 {
            0 => (b & c) | (!b & d),
            2 => (b & c) ^ (b & d) ^ (c & d),
            _ => b ^ c ^ d,
        };

        let temp = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(K[t / 20])
            .wrapping_add(word);

        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}

fn digest(data: &[u8], rotate: bool) -> [u8; 20] {
    let padded = sha_pad(data);

    let mut state = INIT;
    for block in padded.chunks_exact(64) {
        process_block(&mut state, block, rotate);
    }

    let mut out = [0u8; 20];
    store_words_be(&state, &mut out);
    out
}

/// Computes the SHA-0 digest of `data` as 20 raw bytes.
pub fn sha0_digest(data: &[u8]) -> [u8; SHA0_OUTPUT_SIZE] {
    digest(data, false)
}

/// Computes the SHA-0 digest of `data` as a lowercase hex string.
pub fn sha0_hex(data: &[u8]) -> String {
    hex::encode(sha0_digest(data))
}

/// Computes the SHA-1 digest of `data` as 20 raw bytes.
pub fn sha1_digest(data: &[u8]) -> [u8; SHA1_OUTPUT_SIZE] {
    digest(data, true)
}

/// Computes the SHA-1 digest of `data` as a lowercase hex string.
pub fn sha1_hex(data: &[u8]) -> String {
    hex::encode(sha1_digest(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha1_empty() {
        assert_eq!(sha1_hex(b""), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    }

    #[test]
    fn test_sha1_abc() {
        // FIPS 180-1 Appendix A
        assert_eq!(sha1_hex(b"abc"), "a9993e364706816aba3e25717850c26c9cd0d89d");
    }

    #[test]
    fn test_sha1_two_blocks() {
        // FIPS 180-1 Appendix B
        assert_eq!(
            sha1_hex(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
            "84983e441c3bd26ebaae4aa1f95129e5e54670f1"
        );
    }

    #[test]
    fn test_sha1_alphabet() {
        assert_eq!(
            sha1_hex(b"abcdefghijklmnopqrstuvwxyz"),
            "32d10c7b8cf96570ca04ce37f2a19d84240d3a89"
        );
    }

    #[test]
    fn test_sha1_alphanumeric() {
        assert_eq!(
            sha1_hex(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789"),
            "761c457bf73b14d27e9e9265c46f4b4dda11f940"
        );
    }

    #[test]
    fn test_sha0_empty() {
        assert_eq!(sha0_hex(b""), "f96cea198ad1dd5617ac084a3d92c6107708c0ef");
    }

    #[test]
    fn test_sha0_abc() {
        // FIPS 180 (1993) Appendix A
        assert_eq!(sha0_hex(b"abc"), "0164b8a914cd2a5e74c4f7ff082c4d97f1edf880");
    }

    #[test]
    fn test_sha0_alphanumeric() {
        assert_eq!(
            sha0_hex(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789"),
            "79e966f7a3a990df33e40e3d7f8f18d2caebadfa"
        );
    }

    #[test]
    fn test_sha0_and_sha1_disagree_past_one_word() {
        // The schedule rotation only matters once expanded words feed back,
        // so any multi-word message separates the two algorithms.
        assert_ne!(sha0_hex(b"abc"), sha1_hex(b"abc"));
    }
}

//! DISCLAIMER: This module is a toy implementation of the MD2 (legacy) hash
//! function in pure Rust, following RFC 1319. It is *EXCLUSIVELY* for
//! demonstration and educational purposes. MD2 is thoroughly broken; do NOT
//! use it for any real cryptographic or security-sensitive operation.
//!
//! MD2 is the odd one out of this crate: it is byte-oriented rather than
//! word-oriented. It pads to a 16-byte boundary with bytes valued by the
//! pad length, appends a 16-byte running checksum, and then mixes a 48-byte
//! state through a 256-entry substitution table derived from the digits
//! of pi.

/// The size of the MD2 digest in bytes (128 bits = 16 bytes).
pub const MD2_OUTPUT_SIZE: usize = 16;

const BLOCK_SIZE: usize = 16;

/// The pi-derived substitution table from RFC 1319.
static S: [u8; 256] = [
    41, 46, 67, 201, 162, 216, 124, 1, 61, 54, 84, 161, 236, 240, 6, 19,
    98, 167, 5, 243, 192, 199, 115, 140, 152, 147, 43, 217, 188, 76, 130, 202,
    30, 155, 87, 60, 253, 212, 224, 22, 103, 66, 111, 24, 138, 23, 229, 18,
    190, 78, 196, 214, 218, 158, 222, 73, 160, 251, 245, 142, 187, 47, 238, 122,
    169, 104, 121, 145, 21, 178, 7, 63, 148, 194, 16, 137, 11, 34, 95, 33,
    128, 127, 93, 154, 90, 144, 50, 39, 53, 62, 204, 231, 191, 247, 151, 3,
    255, 25, 48, 179, 72, 165, 181, 209, 215, 94, 146, 42, 172, 86, 170, 198,
    79, 184, 56, 210, 150, 164, 125, 182, 118, 252, 107, 226, 156, 116, 4, 241,
    69, 157, 112, 89, 100, 113, 135, 32, 134, 91, 207, 101, 230, 45, 168, 2,
    27, 96, 37, 173, 174, 176, 185, 246, 28, 70, 97, 105, 52, 64, 126, 15,
    85, 71, 163, 35, 221, 81, 175, 58, 195, 92, 249, 206, 186, 197, 234, 38,
    44, 83, 13, 110, 133, 40, 132, 9, 211, 223, 205, 244, 65, 129, 77, 82,
    106, 220, 55, 200, 108, 193, 171, 250, 36, 225, 123, 8, 12, 189, 177, 74,
    120, 136, 149, 139, 227, 99, 232, 109, 233, 203, 213, 254, 59, 0, 29, 57,
    242, 239, 183, 14, 102, 88, 208, 228, 166, 119, 114, 248, 235, 117, 75, 10,
    49, 68, 80, 180, 143, 237, 31, 26, 219, 153, 141, 51, 159, 17, 131, 20,
];

/// Pads `msg` to a multiple of 16 bytes and appends the RFC 1319 checksum.
///
/// The pad is r copies of the byte r, where r = 16 - (len mod 16); a
/// message already at a block boundary still gains a full block of 16s.
/// The checksum is computed over the padded message with the one-byte
/// register L carried across blocks, then appended as a final block.
fn pad_with_checksum(msg: &[u8]) -> Vec<u8> {
    let r = BLOCK_SIZE - msg.len() % BLOCK_SIZE;
    let mut buf = Vec::with_capacity(msg.len() + r + BLOCK_SIZE);
    buf.extend_from_slice(msg);
    buf.resize(msg.len() + r, r as u8);

    let mut checksum = [0u8; BLOCK_SIZE];
    let mut l = 0u8;
    for block in buf.chunks_exact(BLOCK_SIZE) {
        for (c, &byte) in checksum.iter_mut().zip(block) {
            *c ^= S[(byte ^ l) as usize];
            l = *c;
        }
    }
    buf.extend_from_slice(&checksum);
    buf
}

/// Computes the MD2 digest of `data` as 16 raw bytes.
pub fn md2_digest(data: &[u8]) -> [u8; MD2_OUTPUT_SIZE] {
    let padded = pad_with_checksum(data);

    let mut x = [0u8; 48];
    for block in padded.chunks_exact(BLOCK_SIZE) {
        for i in 0..BLOCK_SIZE {
            x[16 + i] = block[i];
            x[32 + i] = x[i] ^ block[i];
        }

        let mut t = 0u8;
        for round in 0..18u8 {
            for byte in x.iter_mut() {
                *byte ^= S[t as usize];
                t = *byte;
            }
            t = t.wrapping_add(round);
        }
    }

    let mut digest = [0u8; MD2_OUTPUT_SIZE];
    digest.copy_from_slice(&x[..MD2_OUTPUT_SIZE]);
    digest
}

/// Computes the MD2 digest of `data` as a lowercase hex string.
pub fn md2_hex(data: &[u8]) -> String {
    hex::encode(md2_digest(data))
}

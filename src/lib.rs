//! # Classical Message Digests
//!
//! Word-oriented implementations of the classical Merkle–Damgård hash
//! functions, straight from their published standards: MD2 (RFC 1319),
//! MD4 (RFC 1320), MD5 (RFC 1321), SHA-0 (FIPS 180, 1993), SHA-1
//! (FIPS 180-1), and the SHA-2 family including SHA-512/224 and
//! SHA-512/256 (FIPS 180-4).
//!
//! Every algorithm is exposed two ways: a `*_digest` function returning
//! the raw digest bytes, and a `*_hex` function returning the lowercase
//! hexadecimal string.
//!
//! ```rust
//! use classic_hashes::{md5_hex, sha256_hex};
//!
//! assert_eq!(md5_hex(b""), "d41d8cd98f00b204e9800998ecf8427e");
//! assert_eq!(
//!     sha256_hex(b"abc"),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```
//!
//! DISCLAIMER: every algorithm in this crate except the SHA-2 family is
//! cryptographically broken, and none of the implementations attempt
//! constant-time execution. This crate exists for demonstration and
//! educational purposes. For production use, reach for a vetted library
//! (e.g. the RustCrypto `sha2` crate).

mod bits;
mod pad;

pub mod md2;
pub mod md4;
pub mod md5;
pub mod sha1;
pub mod sha256;
pub mod sha512;


pub use md2::{md2_digest, md2_hex, MD2_OUTPUT_SIZE};
pub use md4::{md4_digest, md4_hex, MD4_OUTPUT_SIZE};
pub use md5::{md5_digest, md5_hex, MD5_OUTPUT_SIZE};
pub use sha1::{
    sha0_digest, sha0_hex, sha1_digest, sha1_hex, SHA0_OUTPUT_SIZE, SHA1_OUTPUT_SIZE,
};
pub use sha256::{
    sha224_digest, sha224_hex, sha256_digest, sha256_hex, SHA224_OUTPUT_SIZE, SHA256_OUTPUT_SIZE,
};
pub use sha512::{
    sha384_digest, sha384_hex, sha512_224_digest, sha512_224_hex, sha512_256_digest,
    sha512_256_hex, sha512_digest, sha512_hex, SHA384_OUTPUT_SIZE, SHA512_224_OUTPUT_SIZE,
    SHA512_256_OUTPUT_SIZE, SHA512_OUTPUT_SIZE,
};

//! # shorthash: keyed short-input hashing with SipHash-2-4
//!
//! A pure-Rust implementation of SipHash-2-4, compatible with libsodium's
//! [short-input hashing](https://libsodium.gitbook.io/doc/hashing/short-input_hashing)
//! functions, in both the 64-bit (`crypto_shorthash_siphash24`) and 128-bit
//! (`crypto_shorthash_siphashx24`) output modes.
//!
//! Like libsodium wrappers elsewhere, this library includes both a _classic_
//! API, which operates on plain arrays and mirrors the libsodium function
//! names, and a _Rustaceous_ API with typed, zeroizing keys. Both compute the
//! same digests and can be mixed freely.
//!
//! To get started with the Rustaceous API, refer to [shorthash]. For the
//! classic API, refer to [classic::crypto_shorthash]. If you just want a
//! digest of a runtime-chosen width, use [`siphash24`]:
//!
//! ```
//! let digest = shorthash::siphash24(&[0u8; 16], b"hello, world!\n", 16).expect("hash failed");
//! assert_eq!(digest.len(), 16);
//! ```
//!
//! # Security notes
//!
//! SipHash is a pseudorandom function for short inputs. It is suitable for
//! hash tables exposed to untrusted input and for short authentication tags,
//! but its 64-bit output is too small for long-term message authentication.
//! This crate has NOT been audited.

#![warn(missing_docs)]

#[macro_use]
pub mod error;
#[cfg(feature = "serde")]
mod bytes_serde;
mod sip;
mod utils;

/// Classic libsodium-style API
pub mod classic {
    pub mod crypto_shorthash;
}
/// Constant value definitions
pub mod constants;
pub mod prelude;
/// Random number generation utilities
pub mod rng;
pub mod shorthash;
pub mod types;

pub use crate::error::Error;
pub use crate::shorthash::siphash24;
#[cfg(feature = "hex")]
pub use crate::shorthash::siphash24_hex;

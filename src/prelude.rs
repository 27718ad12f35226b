//! # The shorthash prelude
//!
//! This module re-exports the most commonly used items within this crate.
//! This module is provided for convenience.
//!
//! # Basic usage
//!
//! ```
//! use shorthash::prelude::*;
//!
//! let key = Key::gen();
//! let digest: Digest = ShortHash::compute(&key, b"hello");
//! assert_eq!(digest.len(), CRYPTO_SHORTHASH_BYTES);
//! ```

pub use crate::constants::*;
pub use crate::error::Error;
pub use crate::shorthash::*;
pub use crate::types::*;

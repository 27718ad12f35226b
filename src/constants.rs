/// Length of a short-input hash key, in bytes.
pub const CRYPTO_SHORTHASH_KEYBYTES: usize = CRYPTO_SHORTHASH_SIPHASH24_KEYBYTES;
/// Length of the default short-input hash output, in bytes.
pub const CRYPTO_SHORTHASH_BYTES: usize = CRYPTO_SHORTHASH_SIPHASH24_BYTES;

/// Key length for SipHash-2-4 with 64-bit output.
pub const CRYPTO_SHORTHASH_SIPHASH24_KEYBYTES: usize = 16;
/// Output length for SipHash-2-4 with 64-bit output.
pub const CRYPTO_SHORTHASH_SIPHASH24_BYTES: usize = 8;

/// Key length for SipHash-2-4 with 128-bit output.
pub const CRYPTO_SHORTHASH_SIPHASHX24_KEYBYTES: usize = 16;
/// Output length for SipHash-2-4 with 128-bit output.
pub const CRYPTO_SHORTHASH_SIPHASHX24_BYTES: usize = 16;

/// Output length used when the caller does not ask for a specific width.
pub const DEFAULT_OUTPUT_BYTES: usize = CRYPTO_SHORTHASH_BYTES;

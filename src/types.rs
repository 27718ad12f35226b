//! # Base type definitions
//!
//! The traits in this module let the hashing functions accept keys, inputs
//! and outputs in several forms: plain arrays, slices, [`Vec`]s and the
//! zeroizing [`StackByteArray`].

use std::convert::TryFrom;
use std::ops::{Deref, DerefMut};

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constants::{CRYPTO_SHORTHASH_SIPHASH24_BYTES, CRYPTO_SHORTHASH_SIPHASHX24_BYTES};
use crate::error::Error;
use crate::rng::copy_randombytes;

/// Read-only access to a sequence of bytes of any length.
pub trait Bytes {
    /// Returns a slice over the bytes.
    fn as_slice(&self) -> &[u8];
    /// Returns the number of bytes.
    fn len(&self) -> usize {
        self.as_slice().len()
    }
    /// Returns true if there are no bytes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Mutable access to a sequence of bytes.
pub trait MutBytes: Bytes {
    /// Returns a mutable slice over the bytes.
    fn as_mut_slice(&mut self) -> &mut [u8];
}

/// A byte sequence of exactly `LENGTH` bytes.
pub trait ByteArray<const LENGTH: usize>: Bytes {
    /// Returns a reference to the underlying array.
    fn as_array(&self) -> &[u8; LENGTH];
}

/// A byte sequence of exactly `LENGTH` bytes that can be written to.
pub trait MutByteArray<const LENGTH: usize>: ByteArray<LENGTH> + MutBytes {
    /// Returns a mutable reference to the underlying array.
    fn as_mut_array(&mut self) -> &mut [u8; LENGTH];
}

/// Output containers that can be created with room for exactly `LENGTH`
/// bytes, used for hash outputs.
pub trait NewByteArray<const LENGTH: usize>: MutBytes {
    /// Returns a new, zero-filled container of `LENGTH` bytes.
    fn new_byte_array() -> Self;
}

impl Bytes for [u8] {
    #[inline]
    fn as_slice(&self) -> &[u8] {
        self
    }
}

impl MutBytes for [u8] {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [u8] {
        self
    }
}

impl Bytes for Vec<u8> {
    #[inline]
    fn as_slice(&self) -> &[u8] {
        self.as_ref()
    }
}

impl MutBytes for Vec<u8> {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [u8] {
        self.as_mut()
    }
}

impl<const LENGTH: usize> NewByteArray<LENGTH> for Vec<u8> {
    fn new_byte_array() -> Self {
        vec![0u8; LENGTH]
    }
}

impl<const LENGTH: usize> Bytes for [u8; LENGTH] {
    #[inline]
    fn as_slice(&self) -> &[u8] {
        self
    }
}

impl<const LENGTH: usize> MutBytes for [u8; LENGTH] {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [u8] {
        self
    }
}

impl<const LENGTH: usize> ByteArray<LENGTH> for [u8; LENGTH] {
    #[inline]
    fn as_array(&self) -> &[u8; LENGTH] {
        self
    }
}

impl<const LENGTH: usize> MutByteArray<LENGTH> for [u8; LENGTH] {
    #[inline]
    fn as_mut_array(&mut self) -> &mut [u8; LENGTH] {
        self
    }
}

impl<const LENGTH: usize> NewByteArray<LENGTH> for [u8; LENGTH] {
    fn new_byte_array() -> Self {
        [0u8; LENGTH]
    }
}

/// Stack-allocated, fixed-length byte array which is zeroed when dropped.
/// Used for keys and digests.
#[derive(Zeroize, ZeroizeOnDrop, Clone)]
pub struct StackByteArray<const LENGTH: usize>([u8; LENGTH]);

impl<const LENGTH: usize> StackByteArray<LENGTH> {
    /// Returns a new, zero-filled byte array.
    pub fn new() -> Self {
        Self([0u8; LENGTH])
    }

    /// Returns a byte array filled with random data from the OS.
    pub fn gen() -> Self {
        let mut res = Self::new();
        copy_randombytes(&mut res.0);
        res
    }

    /// Returns the contents as a lowercase hex string.
    #[cfg(feature = "hex")]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl<const LENGTH: usize> Default for StackByteArray<LENGTH> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const LENGTH: usize> std::fmt::Debug for StackByteArray<LENGTH> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("StackByteArray").field(&&self.0[..]).finish()
    }
}

impl<const LENGTH: usize> PartialEq for StackByteArray<LENGTH> {
    fn eq(&self, other: &Self) -> bool {
        self.0[..].ct_eq(&other.0[..]).into()
    }
}

impl<const LENGTH: usize> Eq for StackByteArray<LENGTH> {}

impl<const LENGTH: usize> Bytes for StackByteArray<LENGTH> {
    #[inline]
    fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl<const LENGTH: usize> MutBytes for StackByteArray<LENGTH> {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl<const LENGTH: usize> ByteArray<LENGTH> for StackByteArray<LENGTH> {
    #[inline]
    fn as_array(&self) -> &[u8; LENGTH] {
        &self.0
    }
}

impl<const LENGTH: usize> MutByteArray<LENGTH> for StackByteArray<LENGTH> {
    #[inline]
    fn as_mut_array(&mut self) -> &mut [u8; LENGTH] {
        &mut self.0
    }
}

impl<const LENGTH: usize> NewByteArray<LENGTH> for StackByteArray<LENGTH> {
    fn new_byte_array() -> Self {
        Self::new()
    }
}

impl<const LENGTH: usize> Deref for StackByteArray<LENGTH> {
    type Target = [u8; LENGTH];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const LENGTH: usize> DerefMut for StackByteArray<LENGTH> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const LENGTH: usize> AsRef<[u8]> for StackByteArray<LENGTH> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const LENGTH: usize> From<&[u8; LENGTH]> for StackByteArray<LENGTH> {
    fn from(src: &[u8; LENGTH]) -> Self {
        Self(*src)
    }
}

impl<const LENGTH: usize> From<[u8; LENGTH]> for StackByteArray<LENGTH> {
    fn from(src: [u8; LENGTH]) -> Self {
        Self(src)
    }
}

impl<const LENGTH: usize> TryFrom<&[u8]> for StackByteArray<LENGTH> {
    type Error = Error;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        if src.len() != LENGTH {
            Err(Error::InvalidLength {
                expected: LENGTH,
                found: src.len(),
            })
        } else {
            let mut arr = Self::new();
            arr.0.copy_from_slice(src);
            Ok(arr)
        }
    }
}

/// Selects between the 64-bit and 128-bit output modes of SipHash-2-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputWidth {
    /// 8-byte digest
    Bits64,
    /// 16-byte digest
    Bits128,
}

impl OutputWidth {
    /// Returns the digest length in bytes.
    pub const fn bytes(self) -> usize {
        match self {
            OutputWidth::Bits64 => CRYPTO_SHORTHASH_SIPHASH24_BYTES,
            OutputWidth::Bits128 => CRYPTO_SHORTHASH_SIPHASHX24_BYTES,
        }
    }
}

impl Default for OutputWidth {
    fn default() -> Self {
        OutputWidth::Bits64
    }
}

impl TryFrom<usize> for OutputWidth {
    type Error = Error;

    fn try_from(output_bytes: usize) -> Result<Self, Self::Error> {
        match output_bytes {
            CRYPTO_SHORTHASH_SIPHASH24_BYTES => Ok(OutputWidth::Bits64),
            CRYPTO_SHORTHASH_SIPHASHX24_BYTES => Ok(OutputWidth::Bits128),
            other => Err(Error::InvalidOutputWidth(other)),
        }
    }
}

//! # Short-input hashing
//!
//! [`ShortHash`] implements libsodium's short-input hashing, based on
//! SipHash-2-4, with either a 64-bit or a 128-bit output.
//!
//! Use [`ShortHash`] when:
//!
//! * you need a keyed hash for hash tables that must resist hash-flooding
//! * you need a short authentication tag for small messages
//! * your inputs are short and the output only needs to be 8 or 16 bytes
//!
//! If you need a general purpose hash or MAC for long messages, use a
//! different construction.
//!
//! # Rustaceous API example
//!
//! ```
//! use shorthash::shorthash::*;
//!
//! // Generate a random key
//! let key = Key::gen();
//!
//! // Compute the 64-bit hash
//! let hash: Digest = ShortHash::compute(&key, b"Data to hash");
//!
//! // Compute the 128-bit hash as a Vec
//! let wide_hash = ShortHash::compute_wide_to_vec(&key, b"Data to hash");
//! assert_eq!(wide_hash.len(), 16);
//!
//! // Verify a tag
//! ShortHash::compute_and_verify(&hash, &key, b"Data to hash").expect("verify failed");
//! ShortHash::compute_and_verify(&hash, &key, b"Other data").expect_err("verify should fail");
//! ```
//!
//! # Width-selecting interface
//!
//! ```
//! use shorthash::siphash24;
//!
//! let digest = siphash24(&[0u8; 16], b"hello, world!\n", 8).expect("hash failed");
//! assert_eq!(digest, [0xf1, 0x47, 0x34, 0x95, 0xa5, 0xaa, 0xc2, 0x62]);
//!
//! // Only 8 and 16 byte outputs exist
//! siphash24(&[0u8; 16], b"hello, world!\n", 12).expect_err("width should be rejected");
//! ```

use std::convert::{TryFrom, TryInto};

use subtle::ConstantTimeEq;

use crate::constants::{
    CRYPTO_SHORTHASH_BYTES, CRYPTO_SHORTHASH_KEYBYTES, CRYPTO_SHORTHASH_SIPHASHX24_BYTES,
};
use crate::error::Error;
use crate::sip::{siphash, siphash24 as sip24, siphashx24};
pub use crate::types::*;

/// Stack-allocated key for short-input hashing.
pub type Key = StackByteArray<CRYPTO_SHORTHASH_KEYBYTES>;
/// Stack-allocated 64-bit short-input hash.
pub type Digest = StackByteArray<CRYPTO_SHORTHASH_BYTES>;
/// Stack-allocated 128-bit short-input hash.
pub type WideDigest = StackByteArray<CRYPTO_SHORTHASH_SIPHASHX24_BYTES>;

/// SipHash-2-4 short-input hashing, compatible with libsodium's
/// `crypto_shorthash_siphash24` and `crypto_shorthash_siphashx24`.
pub struct ShortHash;

impl ShortHash {
    /// Computes (and returns) the 64-bit hash of `input` using `key`.
    pub fn compute<
        Key: ByteArray<CRYPTO_SHORTHASH_KEYBYTES> + ?Sized,
        Input: Bytes + ?Sized,
        Output: NewByteArray<CRYPTO_SHORTHASH_BYTES>,
    >(
        key: &Key,
        input: &Input,
    ) -> Output {
        let mut output = Output::new_byte_array();
        siphash(
            output.as_mut_slice(),
            input.as_slice(),
            key.as_array(),
            OutputWidth::Bits64,
        );
        output
    }

    /// Convenience wrapper around [`ShortHash::compute`]. Returns the hash as
    /// a [`Vec`].
    pub fn compute_to_vec<
        Key: ByteArray<CRYPTO_SHORTHASH_KEYBYTES> + ?Sized,
        Input: Bytes + ?Sized,
    >(
        key: &Key,
        input: &Input,
    ) -> Vec<u8> {
        Self::compute(key, input)
    }

    /// Computes (and returns) the 128-bit hash of `input` using `key`.
    pub fn compute_wide<
        Key: ByteArray<CRYPTO_SHORTHASH_KEYBYTES> + ?Sized,
        Input: Bytes + ?Sized,
        Output: NewByteArray<CRYPTO_SHORTHASH_SIPHASHX24_BYTES>,
    >(
        key: &Key,
        input: &Input,
    ) -> Output {
        let mut output = Output::new_byte_array();
        siphash(
            output.as_mut_slice(),
            input.as_slice(),
            key.as_array(),
            OutputWidth::Bits128,
        );
        output
    }

    /// Convenience wrapper around [`ShortHash::compute_wide`]. Returns the
    /// hash as a [`Vec`].
    pub fn compute_wide_to_vec<
        Key: ByteArray<CRYPTO_SHORTHASH_KEYBYTES> + ?Sized,
        Input: Bytes + ?Sized,
    >(
        key: &Key,
        input: &Input,
    ) -> Vec<u8> {
        Self::compute_wide(key, input)
    }

    /// Computes the hash of `input` using `key`, with the output length
    /// chosen at runtime by `width`.
    pub fn compute_with_width<
        Key: ByteArray<CRYPTO_SHORTHASH_KEYBYTES> + ?Sized,
        Input: Bytes + ?Sized,
    >(
        key: &Key,
        input: &Input,
        width: OutputWidth,
    ) -> Vec<u8> {
        let mut output = vec![0u8; width.bytes()];
        siphash(&mut output, input.as_slice(), key.as_array(), width);
        output
    }

    /// Verifies that `other_tag` is the 64-bit hash of `input` under `key`,
    /// using a constant-time comparison.
    pub fn compute_and_verify<
        OtherTag: ByteArray<CRYPTO_SHORTHASH_BYTES> + ?Sized,
        Key: ByteArray<CRYPTO_SHORTHASH_KEYBYTES> + ?Sized,
        Input: Bytes + ?Sized,
    >(
        other_tag: &OtherTag,
        key: &Key,
        input: &Input,
    ) -> Result<(), Error> {
        let mut computed = Digest::new();
        sip24(computed.as_mut_array(), input.as_slice(), key.as_array());
        verify_tag(other_tag.as_slice(), computed.as_slice())
    }

    /// Verifies that `other_tag` is the 128-bit hash of `input` under `key`,
    /// using a constant-time comparison.
    pub fn compute_wide_and_verify<
        OtherTag: ByteArray<CRYPTO_SHORTHASH_SIPHASHX24_BYTES> + ?Sized,
        Key: ByteArray<CRYPTO_SHORTHASH_KEYBYTES> + ?Sized,
        Input: Bytes + ?Sized,
    >(
        other_tag: &OtherTag,
        key: &Key,
        input: &Input,
    ) -> Result<(), Error> {
        let mut computed = WideDigest::new();
        siphashx24(computed.as_mut_array(), input.as_slice(), key.as_array());
        verify_tag(other_tag.as_slice(), computed.as_slice())
    }
}

fn verify_tag(other_tag: &[u8], computed: &[u8]) -> Result<(), Error> {
    if other_tag.ct_eq(computed).unwrap_u8() == 1 {
        Ok(())
    } else {
        Err(Error::VerificationFailed)
    }
}

/// Computes SipHash-2-4 of `data` under `key`, returning a digest of
/// `output_bytes` bytes.
///
/// `output_bytes` must be 8 or 16 (use
/// [`DEFAULT_OUTPUT_BYTES`](crate::constants::DEFAULT_OUTPUT_BYTES) for the
/// usual 64-bit digest), and `key` must be exactly 16 bytes. Both are checked
/// before any hashing takes place.
pub fn siphash24(key: &[u8], data: &[u8], output_bytes: usize) -> Result<Vec<u8>, Error> {
    let width = OutputWidth::try_from(output_bytes)?;
    let key: &[u8; CRYPTO_SHORTHASH_KEYBYTES] =
        key.try_into().map_err(|_| Error::InvalidKeyLength {
            expected: CRYPTO_SHORTHASH_KEYBYTES,
            found: key.len(),
        })?;

    Ok(ShortHash::compute_with_width(key, data, width))
}

/// Hex-encoded variant of [`siphash24`]: decodes `key_hex` and `data_hex`,
/// hashes them, and returns the digest as lowercase hex.
///
/// Malformed hex yields [`Error::InvalidInputType`]. A well-formed key of the
/// wrong length yields [`Error::InvalidKeyLength`], just like the raw-byte
/// interface.
///
/// ```
/// use shorthash::shorthash::siphash24_hex;
///
/// let digest = siphash24_hex(
///     "abcdef01234567899876543210fedcba",
///     &hex::encode(b"hello, world!\n"),
///     8,
/// )
/// .expect("hash failed");
/// assert_eq!(digest, "d3d44e1d6b1f243d");
/// ```
#[cfg(feature = "hex")]
pub fn siphash24_hex(key_hex: &str, data_hex: &str, output_bytes: usize) -> Result<String, Error> {
    let width = OutputWidth::try_from(output_bytes)?;
    let key = hex::decode(key_hex)
        .map_err(|err| shorthash_error!(format!("key is not valid hex: {}", err)))?;
    let data = hex::decode(data_hex)
        .map_err(|err| shorthash_error!(format!("data is not valid hex: {}", err)))?;

    let digest = siphash24(&key, &data, width.bytes())?;
    Ok(hex::encode(digest))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO: &[u8] = b"hello, world!\n";
    // the 128-bit reference digest was published for a message with a
    // literal backslash-n ending
    const HELLO_ESCAPED: &[u8] = b"hello, world!\\n";

    #[test]
    fn test_known_answers() {
        let digest: Digest = ShortHash::compute(&[0u8; 16], HELLO);
        assert_eq!(
            digest.as_array(),
            &[0xf1, 0x47, 0x34, 0x95, 0xa5, 0xaa, 0xc2, 0x62]
        );

        let key = Key::from([
            0xab, 0xcd, 0xef, 0x01, 0x23, 0x45, 0x67, 0x89, 0x98, 0x76, 0x54, 0x32, 0x10, 0xfe,
            0xdc, 0xba,
        ]);
        let digest = ShortHash::compute_to_vec(&key, HELLO);
        assert_eq!(digest, [0xd3, 0xd4, 0x4e, 0x1d, 0x6b, 0x1f, 0x24, 0x3d]);

        let wide: WideDigest = ShortHash::compute_wide(&[0u8; 16], HELLO_ESCAPED);
        assert_eq!(
            wide.as_array(),
            &[
                0x8a, 0x03, 0x75, 0x66, 0x0b, 0x02, 0x06, 0x3d, 0xfd, 0x49, 0x0f, 0x73, 0xb1, 0x14,
                0x61, 0x26
            ]
        );

        assert_eq!(
            ShortHash::compute_wide_to_vec(&[0u8; 16], HELLO),
            [
                0xdd, 0x6d, 0xd9, 0x6f, 0xf6, 0x5b, 0x35, 0xb3, 0xea, 0x91, 0x77, 0x8f, 0x42, 0x2f,
                0x2e, 0xde
            ]
        );
    }

    #[test]
    fn test_widths_agree() {
        let key = Key::gen();
        let input = b"some input that spans more than one block";

        let narrow: Digest = ShortHash::compute(&key, input);
        let wide: WideDigest = ShortHash::compute_wide(&key, input);

        assert_eq!(
            ShortHash::compute_with_width(&key, input, OutputWidth::Bits64),
            narrow.as_slice()
        );
        assert_eq!(
            ShortHash::compute_with_width(&key, input, OutputWidth::Bits128),
            wide.as_slice()
        );
        // the 128-bit mode perturbs the state up front, so its first half is
        // not the 64-bit digest
        assert_ne!(&wide[..8], narrow.as_slice());
    }

    #[test]
    fn test_siphash24_validation() {
        for width in [0usize, 4, 12, 32].iter() {
            assert_eq!(
                siphash24(&[0u8; 16], HELLO, *width),
                Err(Error::InvalidOutputWidth(*width))
            );
        }
        for len in [0usize, 1, 15, 17, 32].iter() {
            let key = vec![0u8; *len];
            assert_eq!(
                siphash24(&key, HELLO, 8),
                Err(Error::InvalidKeyLength {
                    expected: 16,
                    found: *len
                })
            );
        }
        // the width is checked first
        assert_eq!(
            siphash24(&[0u8; 3], HELLO, 3),
            Err(Error::InvalidOutputWidth(3))
        );
    }

    #[test]
    fn test_siphash24_widths() {
        assert_eq!(siphash24(&[0u8; 16], HELLO, 8).expect("hash").len(), 8);
        assert_eq!(siphash24(&[0u8; 16], HELLO, 16).expect("hash").len(), 16);
        assert_eq!(siphash24(&[0u8; 16], b"", 8).expect("hash").len(), 8);
    }

    #[test]
    fn test_verify() {
        let key = Key::gen();
        let tag: Digest = ShortHash::compute(&key, b"tag me");
        let wide_tag: WideDigest = ShortHash::compute_wide(&key, b"tag me");

        ShortHash::compute_and_verify(&tag, &key, b"tag me").expect("verify failed");
        ShortHash::compute_wide_and_verify(&wide_tag, &key, b"tag me").expect("verify failed");

        assert_eq!(
            ShortHash::compute_and_verify(&tag, &key, b"tag you"),
            Err(Error::VerificationFailed)
        );
        assert_eq!(
            ShortHash::compute_wide_and_verify(&wide_tag, &Key::gen(), b"tag me"),
            Err(Error::VerificationFailed)
        );
    }

    #[cfg(feature = "hex")]
    #[test]
    fn test_siphash24_hex() {
        let data_hex = hex::encode(HELLO);

        assert_eq!(
            siphash24_hex(&"00".repeat(16), &data_hex, 8).expect("hash failed"),
            "f1473495a5aac262"
        );
        assert_eq!(
            siphash24_hex(&"00".repeat(16), &hex::encode(HELLO_ESCAPED), 16)
                .expect("hash failed"),
            "8a0375660b02063dfd490f73b1146126"
        );
        assert_eq!(
            siphash24_hex("ABCDEF01234567899876543210FEDCBA", &data_hex, 8)
                .expect("hash failed"),
            "d3d44e1d6b1f243d"
        );
    }

    #[cfg(feature = "hex")]
    #[test]
    fn test_siphash24_hex_errors() {
        let data_hex = hex::encode(HELLO);

        match siphash24_hex("not hex at all", &data_hex, 8) {
            Err(Error::InvalidInputType(message)) => assert!(message.contains("key")),
            other => panic!("unexpected result {:?}", other),
        }
        match siphash24_hex(&"00".repeat(16), "abc", 8) {
            Err(Error::InvalidInputType(message)) => assert!(message.contains("data")),
            other => panic!("unexpected result {:?}", other),
        }
        assert_eq!(
            siphash24_hex("0011", &data_hex, 8),
            Err(Error::InvalidKeyLength {
                expected: 16,
                found: 2
            })
        );
        assert_eq!(
            siphash24_hex("zz", &data_hex, 4),
            Err(Error::InvalidOutputWidth(4))
        );
    }
}

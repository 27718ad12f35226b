//! # Error type
//!
//! Every fallible operation in this crate returns [`Error`]. Validation
//! happens before any hashing work starts, so an error never comes with a
//! partial digest.

use std::fmt;

/// Errors returned by the short-input hashing functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The key was not exactly
    /// [`CRYPTO_SHORTHASH_KEYBYTES`](crate::constants::CRYPTO_SHORTHASH_KEYBYTES)
    /// bytes long.
    InvalidKeyLength {
        /// Required key length
        expected: usize,
        /// Length of the key that was supplied
        found: usize,
    },
    /// The requested output width was neither 8 nor 16 bytes.
    InvalidOutputWidth(usize),
    /// Input was supplied in a representation that could not be converted
    /// to bytes, such as malformed hex.
    InvalidInputType(String),
    /// A slice could not be converted into a fixed-size byte array.
    InvalidLength {
        /// Length of the target array
        expected: usize,
        /// Length of the slice that was supplied
        found: usize,
    },
    /// A computed tag did not match the expected tag.
    VerificationFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKeyLength { expected, found } => write!(
                f,
                "key must be {} bytes long, found {} bytes",
                expected, found
            ),
            Error::InvalidOutputWidth(width) => {
                write!(f, "output width must be 8 or 16 bytes, found {}", width)
            }
            Error::InvalidInputType(message) => write!(f, "invalid input type: {}", message),
            Error::InvalidLength { expected, found } => {
                write!(f, "invalid size: expected {} found {}", expected, found)
            }
            Error::VerificationFailed => f.write_str("authentication tags do not match"),
        }
    }
}

impl std::error::Error for Error {}

macro_rules! shorthash_error {
    ($msg:expr) => {{
        crate::error::Error::InvalidInputType(format!("{}, from {}:{}", $msg, file!(), line!()))
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::InvalidKeyLength {
                expected: 16,
                found: 15
            }
            .to_string(),
            "key must be 16 bytes long, found 15 bytes"
        );
        assert_eq!(
            Error::InvalidOutputWidth(12).to_string(),
            "output width must be 8 or 16 bytes, found 12"
        );
        assert_eq!(
            Error::VerificationFailed.to_string(),
            "authentication tags do not match"
        );
    }

    #[test]
    fn test_error_macro() {
        match shorthash_error!("not hex") {
            Error::InvalidInputType(message) => {
                assert!(message.starts_with("not hex, from "));
                assert!(message.contains("error.rs"));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }
}

//! Error types for cipher construction, processing, and key parsing.

use std::num::ParseIntError;

use crate::CipherKind;

/// A key that violates its cipher's validity invariant.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum InvalidKey {
    /// The affine multiplier shares a factor with 26.
    #[display("affine multiplier {a} is not invertible mod 26")]
    NonInvertibleMultiplier {
        /// The rejected multiplier.
        a: i64,
    },
    /// The Hill key matrix has a determinant that shares a factor with 26.
    #[display("hill key determinant {determinant} is not invertible mod 26")]
    SingularMatrix {
        /// The determinant, reduced mod 26.
        determinant: i64,
    },
    /// The Playfair keyword has no alphabetic characters.
    #[display("playfair keyword contains no letters")]
    EmptyKeyword,
    /// The Playfair keyword does not produce exactly 25 distinct symbols.
    #[display("playfair keyword yields {len} symbols instead of 25")]
    KeySquareSize {
        /// The number of distinct symbols produced.
        len: usize,
    },
}

/// An error raised by a cipher operation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum CipherError {
    /// The key is invalid for the requested operation.
    #[display("invalid key: {_0}")]
    InvalidKey(#[from] InvalidKey),
    /// A letter could not be found in the Playfair key square.
    #[display("letter {letter} is not in the key square")]
    LookupFailure {
        /// The missing letter, uppercase.
        letter: char,
    },
    /// A block cipher was given a ciphertext that does not split into whole blocks.
    #[display("ciphertext has {letters} letters, which is not a whole number of blocks")]
    IncompleteBlock {
        /// The number of letters in the ciphertext.
        letters: usize,
    },
}

/// The cipher name given to [`CipherKind::from_str`](std::str::FromStr::from_str) is unknown.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown cipher {name:?} (expected caesar, affine, playfair or hill)")]
pub struct UnknownCipherError {
    /// The rejected name.
    #[error(not(source))]
    pub name: String,
}

/// Key text that cannot be turned into a cipher key.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum KeyParseError {
    /// The key text has the wrong number of integers.
    #[display("{kind} key needs exactly {expected} integer(s), found {found}")]
    WrongTokenCount {
        /// The cipher the key was parsed for.
        kind: CipherKind,
        /// The number of integers the key requires.
        expected: usize,
        /// The number of integers found.
        found: usize,
    },
    /// A token is not a valid integer.
    #[display("invalid integer in key: {_0}")]
    InvalidInteger(#[from] ParseIntError),
    /// The key parsed but violates its cipher's validity invariant.
    #[display("{_0}")]
    InvalidKey(#[from] CipherError),
}

impl From<InvalidKey> for KeyParseError {
    fn from(err: InvalidKey) -> Self {
        Self::InvalidKey(err.into())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_display_messages() {
        let err = CipherError::from(InvalidKey::NonInvertibleMultiplier { a: 13 });
        assert_eq!(err.to_string(), "invalid key: affine multiplier 13 is not invertible mod 26");
        assert!(err.is_invalid_key());

        let err = KeyParseError::WrongTokenCount {
            kind: CipherKind::Hill,
            expected: 4,
            found: 3,
        };
        assert_eq!(err.to_string(), "hill key needs exactly 4 integer(s), found 3");
    }

    #[test]
    fn test_error_sources() {
        let err = KeyParseError::from(InvalidKey::SingularMatrix { determinant: 4 });
        let source = err.source().expect("wrapped cipher error");
        assert_eq!(
            source.to_string(),
            "invalid key: hill key determinant 4 is not invertible mod 26"
        );
        assert!(CipherError::LookupFailure { letter: 'J' }.source().is_none());
    }
}

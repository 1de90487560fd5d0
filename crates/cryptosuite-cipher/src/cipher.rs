//! Uniform access to the four ciphers.
//!
//! [`Cipher`] holds any one of the concrete ciphers and exposes the same
//! `encrypt`/`decrypt` contract for all of them. [`CipherKind`] names a cipher and
//! is what front ends parse from user input before building a [`Cipher`] with
//! [`Cipher::from_key_text`].

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{
    AffineCipher, CaesarCipher, CipherError, HillCipher, KeyParseError, PlayfairCipher,
    UnknownCipherError, key,
};

/// The name of a cipher.
///
/// # Examples
///
/// ```
/// use cryptosuite_cipher::CipherKind;
///
/// let kind: CipherKind = " Playfair ".parse()?;
/// assert_eq!(kind, CipherKind::Playfair);
/// assert_eq!(kind.to_string(), "playfair");
///
/// assert!("vigenere".parse::<CipherKind>().is_err());
/// # Ok::<(), cryptosuite_cipher::UnknownCipherError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CipherKind {
    /// [`CaesarCipher`].
    Caesar,
    /// [`AffineCipher`].
    Affine,
    /// [`PlayfairCipher`].
    Playfair,
    /// [`HillCipher`].
    Hill,
}

impl CipherKind {
    /// Every cipher, in menu order.
    pub const ALL: [Self; 4] = [Self::Caesar, Self::Affine, Self::Playfair, Self::Hill];

    /// Returns the lowercase name of the cipher.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Caesar => "caesar",
            Self::Affine => "affine",
            Self::Playfair => "playfair",
            Self::Hill => "hill",
        }
    }
}

impl Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CipherKind {
    type Err = UnknownCipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownCipherError {
                name: name.to_owned(),
            })
    }
}

/// A keyed cipher of any kind.
///
/// Every operation returns a `Result` so that callers can treat the four ciphers
/// alike; Caesar and Affine never fail once built.
///
/// # Examples
///
/// ```
/// use cryptosuite_cipher::{Cipher, CipherKind};
///
/// let cipher = Cipher::from_key_text(CipherKind::Affine, "5, 8")?;
/// assert_eq!(cipher.encrypt("affine")?, "IHHWVC");
///
/// let cipher = Cipher::from_key_text(CipherKind::Hill, "3 3 2 5")?;
/// assert_eq!(cipher.decrypt("DPLE")?, "help");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_more::From)]
pub enum Cipher {
    /// A Caesar shift.
    Caesar(CaesarCipher),
    /// An affine substitution.
    Affine(AffineCipher),
    /// A Playfair digram cipher.
    Playfair(PlayfairCipher),
    /// A 2×2 Hill cipher.
    Hill(HillCipher),
}

impl Cipher {
    /// Parses `key_text` in the key format of `kind` and builds the cipher.
    ///
    /// See the [`key`](crate::key) module for the accepted formats.
    ///
    /// # Errors
    ///
    /// Returns a [`KeyParseError`] if the key text is malformed or the key is invalid.
    pub fn from_key_text(kind: CipherKind, key_text: &str) -> Result<Self, KeyParseError> {
        let cipher = match kind {
            CipherKind::Caesar => CaesarCipher::new(key::parse_caesar_key(key_text)?).into(),
            CipherKind::Affine => {
                let (a, b) = key::parse_affine_key(key_text)?;
                AffineCipher::new(a, b)?.into()
            }
            CipherKind::Playfair => PlayfairCipher::new(key::parse_playfair_key(key_text))?.into(),
            CipherKind::Hill => HillCipher::new(key::parse_hill_key(key_text)?).into(),
        };
        Ok(cipher)
    }

    /// Returns which cipher this is.
    #[must_use]
    pub const fn kind(&self) -> CipherKind {
        match self {
            Self::Caesar(_) => CipherKind::Caesar,
            Self::Affine(_) => CipherKind::Affine,
            Self::Playfair(_) => CipherKind::Playfair,
            Self::Hill(_) => CipherKind::Hill,
        }
    }

    /// Encrypts `plaintext`.
    ///
    /// # Errors
    ///
    /// Propagates the error of the underlying cipher.
    pub fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        match self {
            Self::Caesar(cipher) => Ok(cipher.encrypt(plaintext)),
            Self::Affine(cipher) => Ok(cipher.encrypt(plaintext)),
            Self::Playfair(cipher) => cipher.encrypt(plaintext),
            Self::Hill(cipher) => Ok(cipher.encrypt(plaintext)),
        }
    }

    /// Decrypts `ciphertext`.
    ///
    /// # Errors
    ///
    /// Propagates the error of the underlying cipher.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        match self {
            Self::Caesar(cipher) => Ok(cipher.decrypt(ciphertext)),
            Self::Affine(cipher) => Ok(cipher.decrypt(ciphertext)),
            Self::Playfair(cipher) => cipher.decrypt(ciphertext),
            Self::Hill(cipher) => cipher.decrypt(ciphertext),
        }
    }
}

#[cfg(test)]
mod tests {
    use cryptosuite_core::Matrix2;

    use super::*;
    use crate::InvalidKey;

    #[test]
    fn test_kind_names() {
        for kind in CipherKind::ALL {
            assert_eq!(kind.name().parse::<CipherKind>(), Ok(kind));
            assert_eq!(kind.to_string().to_uppercase().parse::<CipherKind>(), Ok(kind));
        }
        assert_eq!(
            "rot13".parse::<CipherKind>(),
            Err(UnknownCipherError {
                name: "rot13".to_owned()
            })
        );
    }

    #[test]
    fn test_from_key_text() {
        let cipher = Cipher::from_key_text(CipherKind::Caesar, " 3\n").unwrap();
        assert_eq!(cipher, Cipher::Caesar(CaesarCipher::new(3)));
        assert_eq!(cipher.kind(), CipherKind::Caesar);

        let cipher = Cipher::from_key_text(CipherKind::Playfair, "  MONARCHY \n").unwrap();
        assert_eq!(cipher.encrypt("balloon").unwrap(), "AXSUPMMO");

        let cipher = Cipher::from_key_text(CipherKind::Hill, "[[3, 3], [2, 5]]").unwrap();
        assert_eq!(
            cipher,
            Cipher::Hill(HillCipher::new(Matrix2::new([[3, 3], [2, 5]])))
        );
    }

    #[test]
    fn test_from_key_text_rejects_invalid_keys() {
        assert_eq!(
            Cipher::from_key_text(CipherKind::Affine, "13 1"),
            Err(KeyParseError::from(InvalidKey::NonInvertibleMultiplier {
                a: 13
            }))
        );
        assert_eq!(
            Cipher::from_key_text(CipherKind::Playfair, "123"),
            Err(KeyParseError::from(InvalidKey::EmptyKeyword))
        );
        assert!(matches!(
            Cipher::from_key_text(CipherKind::Hill, "1 2 3"),
            Err(KeyParseError::WrongTokenCount { found: 3, .. })
        ));
    }

    #[test]
    fn test_dispatch_round_trip() {
        let keys = [
            (CipherKind::Caesar, "7"),
            (CipherKind::Affine, "9,2"),
            (CipherKind::Playfair, "keyword"),
            (CipherKind::Hill, "5 8 17 13"),
        ];
        for (kind, key_text) in keys {
            let cipher = Cipher::from_key_text(kind, key_text).unwrap();
            let ciphertext = cipher.encrypt("Meet me at noon").unwrap();
            assert_ne!(ciphertext, "Meet me at noon");
            assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "meet me at noon", "{kind}");
        }
    }
}

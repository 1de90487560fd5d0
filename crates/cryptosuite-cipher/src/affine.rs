//! The affine cipher.

use cryptosuite_core::{Letter, modular};

use crate::{CipherError, InvalidKey};

/// The affine substitution cipher, `y = a·x + b (mod 26)`.
///
/// The multiplier `a` must be invertible mod 26 (odd and not 13); this is checked
/// when the cipher is created, so decryption can never run with a missing inverse.
///
/// Casing follows [`CaesarCipher`](crate::CaesarCipher): uppercase ciphertext,
/// lowercase plaintext, other characters copied through.
///
/// # Examples
///
/// ```
/// use cryptosuite_cipher::AffineCipher;
///
/// let cipher = AffineCipher::new(5, 8)?;
/// assert_eq!(cipher.encrypt("a"), "I");
/// assert_eq!(cipher.decrypt("I"), "a");
///
/// assert!(AffineCipher::new(13, 1).is_err());
/// # Ok::<(), cryptosuite_cipher::CipherError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AffineCipher {
    a: i64,
    b: i64,
    a_inv: i64,
}

impl AffineCipher {
    /// Creates a cipher with multiplier `a` and offset `b`.
    ///
    /// Both values are reduced mod 26.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidKey::NonInvertibleMultiplier`] if `gcd(a, 26) != 1`.
    pub fn new(a: i64, b: i64) -> Result<Self, CipherError> {
        let a_inv = modular::mod_inverse(a).ok_or(InvalidKey::NonInvertibleMultiplier { a })?;
        Ok(Self {
            a: modular::reduce(a),
            b: modular::reduce(b),
            a_inv,
        })
    }

    /// Returns the key `(a, b)`, reduced mod 26.
    #[must_use]
    pub const fn key(&self) -> (i64, i64) {
        (self.a, self.b)
    }

    /// Encrypts `plaintext`, producing uppercase letters.
    #[must_use]
    pub fn encrypt(&self, plaintext: &str) -> String {
        plaintext
            .chars()
            .map(|ch| {
                Letter::from_char(ch).map_or(ch, |x| {
                    Letter::from_residue(self.a * x.value() + self.b).to_upper()
                })
            })
            .collect()
    }

    /// Decrypts `ciphertext`, producing lowercase letters.
    #[must_use]
    pub fn decrypt(&self, ciphertext: &str) -> String {
        ciphertext
            .chars()
            .map(|ch| {
                Letter::from_char(ch).map_or(ch, |y| {
                    Letter::from_residue(self.a_inv * (y.value() - self.b)).to_lower()
                })
            })
            .collect()
    }
}

/// The classroom default key `(9, 2)`.
impl Default for AffineCipher {
    fn default() -> Self {
        Self { a: 9, b: 2, a_inv: 3 }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_textbook_key() {
        let cipher = AffineCipher::new(5, 8).unwrap();
        assert_eq!(cipher.encrypt("a"), "I");
        assert_eq!(cipher.decrypt("I"), "a");
        assert_eq!(cipher.encrypt("affine cipher"), "IHHWVC SWFRCP");
        assert_eq!(cipher.decrypt("IHHWVC SWFRCP"), "affine cipher");
    }

    #[test]
    fn test_default_key() {
        let cipher = AffineCipher::default();
        assert_eq!(cipher, AffineCipher::new(9, 2).unwrap());
        assert_eq!(cipher.decrypt(&cipher.encrypt("default")), "default");
    }

    #[test]
    fn test_rejects_non_invertible_multiplier() {
        for a in [0, 2, 4, 13, 26, -2, 52] {
            assert_eq!(
                AffineCipher::new(a, 1),
                Err(CipherError::InvalidKey(InvalidKey::NonInvertibleMultiplier { a }))
            );
        }
    }

    #[test]
    fn test_key_is_reduced() {
        let cipher = AffineCipher::new(-21, 30).unwrap();
        assert_eq!(cipher.key(), (5, 4));
        assert_eq!(cipher, AffineCipher::new(5, 4).unwrap());
    }

    fn arb_multiplier() -> impl Strategy<Value = i64> {
        (-500_i64..500).prop_filter("multiplier must be invertible mod 26", |&a| {
            modular::is_invertible(a)
        })
    }

    proptest! {
        #[test]
        fn decrypt_undoes_encrypt(a in arb_multiplier(), b in -500_i64..500, text in "[ -~]{0,64}") {
            let cipher = AffineCipher::new(a, b).unwrap();
            let restored = cipher.decrypt(&cipher.encrypt(&text));
            prop_assert_eq!(restored, text.to_ascii_lowercase());
        }
    }
}

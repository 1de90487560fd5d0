//! The Caesar shift cipher.

use cryptosuite_core::{Letter, modular};

/// The Caesar shift cipher.
///
/// Every letter is moved `shift` places along the alphabet. Encryption emits
/// uppercase ciphertext and decryption emits lowercase plaintext; every other
/// character is copied through unchanged.
///
/// Any integer is a valid key: it is reduced mod 26 on construction.
///
/// # Examples
///
/// ```
/// use cryptosuite_cipher::CaesarCipher;
///
/// let cipher = CaesarCipher::new(3);
/// assert_eq!(cipher.encrypt("abc"), "DEF");
/// assert_eq!(cipher.decrypt("DEF"), "abc");
///
/// // Non-letters keep their position
/// assert_eq!(CaesarCipher::new(1).encrypt("ab-cd"), "BC-DE");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CaesarCipher {
    shift: i64,
}

impl CaesarCipher {
    /// Creates a cipher that shifts letters by `shift` places.
    #[must_use]
    pub const fn new(shift: i64) -> Self {
        Self {
            shift: modular::reduce(shift),
        }
    }

    /// Returns the shift, reduced into the range `0..26`.
    #[must_use]
    pub const fn shift(&self) -> i64 {
        self.shift
    }

    /// Encrypts `plaintext`, producing uppercase letters.
    #[must_use]
    pub fn encrypt(&self, plaintext: &str) -> String {
        map_letters(plaintext, self.shift, Letter::to_upper)
    }

    /// Decrypts `ciphertext`, producing lowercase letters.
    #[must_use]
    pub fn decrypt(&self, ciphertext: &str) -> String {
        map_letters(ciphertext, -self.shift, Letter::to_lower)
    }
}

fn map_letters(text: &str, shift: i64, render: fn(Letter) -> char) -> String {
    text.chars()
        .map(|ch| Letter::from_char(ch).map_or(ch, |letter| render(letter.shifted(shift))))
        .collect()
}

/// The classroom default key of 3.
impl Default for CaesarCipher {
    fn default() -> Self {
        Self::new(3)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_shift_by_three() {
        let cipher = CaesarCipher::new(3);
        assert_eq!(cipher.encrypt("abc"), "DEF");
        assert_eq!(cipher.encrypt("xyz"), "ABC");
        assert_eq!(cipher.decrypt("DEF"), "abc");
        assert_eq!(cipher.decrypt("abc"), "xyz");
        assert_eq!(CaesarCipher::default(), cipher);
    }

    #[test]
    fn test_case_convention() {
        let cipher = CaesarCipher::new(0);
        assert_eq!(cipher.encrypt("MiXeD"), "MIXED");
        assert_eq!(cipher.decrypt("MiXeD"), "mixed");
    }

    #[test]
    fn test_key_is_reduced() {
        assert_eq!(CaesarCipher::new(29), CaesarCipher::new(3));
        assert_eq!(CaesarCipher::new(-23), CaesarCipher::new(3));
        assert_eq!(CaesarCipher::new(-1).shift(), 25);
        assert_eq!(
            CaesarCipher::new(i64::MIN).encrypt("a"),
            CaesarCipher::new(i64::MIN % 26).encrypt("a")
        );
    }

    #[test]
    fn test_non_letters_pass_through() {
        let cipher = CaesarCipher::new(1);
        let encrypted = cipher.encrypt("ab-cd");
        assert_eq!(encrypted, "BC-DE");
        assert_eq!(encrypted.chars().nth(2), Some('-'));
        assert_eq!(cipher.encrypt("Zoë, 42!"), "APë, 42!");
        assert_eq!(cipher.decrypt("APë, 42!"), "zoë, 42!");
    }

    proptest! {
        #[test]
        fn decrypt_undoes_encrypt(shift in any::<i64>(), text in "[ -~]{0,64}") {
            let cipher = CaesarCipher::new(shift);
            let restored = cipher.decrypt(&cipher.encrypt(&text));
            prop_assert_eq!(restored, text.to_ascii_lowercase());
        }
    }
}

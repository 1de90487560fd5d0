//! The 2×2 Hill cipher and known-plaintext key recovery.

use cryptosuite_core::{Letter, Matrix2, SymbolMap};

use crate::{CipherError, InvalidKey};

/// The 2×2 Hill block cipher.
///
/// Letters are read in pairs as row vectors and multiplied by the key matrix mod 26.
/// An odd number of plaintext letters is padded with a trailing `X`. Decryption
/// multiplies by the inverse key and does not strip the padding.
///
/// Any matrix can encrypt, but only a key whose determinant is invertible mod 26
/// can decrypt. The inverse is computed once, when the cipher is created.
///
/// # Examples
///
/// ```
/// use cryptosuite_cipher::HillCipher;
/// use cryptosuite_core::Matrix2;
///
/// let cipher = HillCipher::new(Matrix2::new([[3, 3], [2, 5]]));
/// assert_eq!(cipher.encrypt("help"), "DPLE");
/// assert_eq!(cipher.decrypt("DPLE")?, "help");
///
/// // Odd-length input is padded with X
/// assert_eq!(cipher.decrypt(&cipher.encrypt("hel"))?, "helx");
/// # Ok::<(), cryptosuite_cipher::CipherError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HillCipher {
    key: Matrix2,
    inverse: Option<Matrix2>,
}

impl HillCipher {
    /// Creates a cipher with the key matrix `key`.
    #[must_use]
    pub fn new(key: Matrix2) -> Self {
        Self {
            key,
            inverse: key.inverse(),
        }
    }

    /// Returns the key matrix.
    #[must_use]
    pub const fn key(&self) -> Matrix2 {
        self.key
    }

    /// Returns `true` if the key can be used to decrypt.
    #[must_use]
    pub const fn is_invertible(&self) -> bool {
        self.inverse.is_some()
    }

    /// Encrypts `plaintext`, producing uppercase letters.
    #[must_use]
    pub fn encrypt(&self, plaintext: &str) -> String {
        let (mut letters, symbols) = SymbolMap::split(plaintext);
        if letters.len() % 2 != 0 {
            letters.push(Letter::X);
        }
        symbols.splice(apply_blocks(self.key, &letters).map(Letter::to_upper))
    }

    /// Decrypts `ciphertext`, producing lowercase letters.
    ///
    /// # Errors
    ///
    /// - [`InvalidKey::SingularMatrix`] if the key has no inverse mod 26.
    /// - [`CipherError::IncompleteBlock`] if the ciphertext has an odd number of letters.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        let inverse = self.inverse.ok_or_else(|| InvalidKey::SingularMatrix {
            determinant: self.key.determinant(),
        })?;
        let (letters, symbols) = SymbolMap::split(ciphertext);
        if letters.len() % 2 != 0 {
            return Err(CipherError::IncompleteBlock {
                letters: letters.len(),
            });
        }
        Ok(symbols.splice(apply_blocks(inverse, &letters).map(Letter::to_lower)))
    }

    /// Recovers a key from a known plaintext and its ciphertext.
    ///
    /// Only letters are considered. Windows of four letters are taken at even
    /// offsets; the first window whose plaintext matrix `P` is invertible mod 26
    /// gives the key `P⁻¹ × C`. Windows never run past the end of the shorter text.
    ///
    /// Returns `None` if either text has fewer than four letters or no window is
    /// invertible.
    ///
    /// # Examples
    ///
    /// ```
    /// use cryptosuite_cipher::HillCipher;
    /// use cryptosuite_core::Matrix2;
    ///
    /// let key = Matrix2::new([[3, 3], [2, 5]]);
    /// let ciphertext = HillCipher::new(key).encrypt("HELLOWORLD");
    /// assert_eq!(HillCipher::crack_key("HELLOWORLD", &ciphertext), Some(key));
    ///
    /// assert_eq!(HillCipher::crack_key("abc", "XYZ"), None);
    /// ```
    #[must_use]
    pub fn crack_key(plaintext: &str, ciphertext: &str) -> Option<Matrix2> {
        let (plain, _) = SymbolMap::split(plaintext);
        let (cipher, _) = SymbolMap::split(ciphertext);
        let len = plain.len().min(cipher.len());
        if len < 4 {
            return None;
        }

        (0..=len - 4).step_by(2).find_map(|i| {
            let plain_inverse = window(&plain[i..i + 4]).inverse()?;
            Some(plain_inverse.mul_mod(&window(&cipher[i..i + 4])))
        })
    }
}

/// The classroom default key `[[5, 8], [17, 13]]`.
impl Default for HillCipher {
    fn default() -> Self {
        Self::new(Matrix2::new([[5, 8], [17, 13]]))
    }
}

fn apply_blocks(matrix: Matrix2, letters: &[Letter]) -> impl Iterator<Item = Letter> + '_ {
    letters.chunks_exact(2).flat_map(move |pair| {
        matrix
            .apply([pair[0].value(), pair[1].value()])
            .map(Letter::from_residue)
    })
}

/// Reads four letters as the rows of a matrix.
fn window(letters: &[Letter]) -> Matrix2 {
    Matrix2::new([
        [letters[0].value(), letters[1].value()],
        [letters[2].value(), letters[3].value()],
    ])
}

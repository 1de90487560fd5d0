//! Classical ciphers over the 26-letter Latin alphabet.
//!
//! This crate implements four pre-modern ciphers on top of the arithmetic in
//! [`cryptosuite_core`]. Every cipher is an immutable value built from its key;
//! encryption and decryption are pure functions of that key and the input text.
//!
//! # Overview
//!
//! - [`caesar`]: [`CaesarCipher`], a fixed shift of the alphabet
//! - [`affine`]: [`AffineCipher`], `y = a·x + b (mod 26)`
//! - [`playfair`]: [`PlayfairCipher`], digram substitution on a 5×5 [`KeySquare`]
//! - [`hill`]: [`HillCipher`], 2×2 matrix blocks, with known-plaintext key recovery
//! - [`cipher`]: [`Cipher`] and [`CipherKind`], one interface over all four
//! - [`key`]: parsing of key text typed by a user
//! - [`error`]: the error types shared by the above
//!
//! # Text conventions
//!
//! Only ASCII letters are transformed. Any other character (digits, punctuation,
//! whitespace, non-ASCII letters) is saved with its position and spliced back into
//! the output. Encryption produces uppercase letters and decryption lowercase.
//!
//! # Examples
//!
//! ```
//! use cryptosuite_cipher::{Cipher, CipherKind, HillCipher};
//!
//! let kind: CipherKind = "caesar".parse()?;
//! let cipher = Cipher::from_key_text(kind, "3")?;
//! assert_eq!(cipher.encrypt("Attack at dawn!")?, "DWWDFN DW GDZQ!");
//!
//! let hill = Cipher::from_key_text(CipherKind::Hill, "3 3 2 5")?;
//! let ciphertext = hill.encrypt("HELLOWORLD")?;
//! let key = HillCipher::crack_key("HELLOWORLD", &ciphertext);
//! assert_eq!(key.map(|key| key.to_string()).as_deref(), Some("3 3\n2 5"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod affine;
pub mod caesar;
pub mod cipher;
pub mod error;
pub mod hill;
pub mod key;
pub mod playfair;

pub use self::{
    affine::AffineCipher,
    caesar::CaesarCipher,
    cipher::{Cipher, CipherKind},
    error::{CipherError, InvalidKey, KeyParseError, UnknownCipherError},
    hill::HillCipher,
    playfair::{KeySquare, PlayfairCipher},
};

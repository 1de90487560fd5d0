//! The `encrypt`, `decrypt` and `crack` subcommands.

use std::io::{self, Read};

use cryptosuite_cipher::{Cipher, CipherError, CipherKind, HillCipher};
use cryptosuite_core::Matrix2;

use crate::CliError;

/// The direction of a cipher operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Operation {
    /// Plaintext to ciphertext.
    #[display("encrypt")]
    Encrypt,
    /// Ciphertext to plaintext.
    #[display("decrypt")]
    Decrypt,
}

impl Operation {
    /// Runs this operation with `cipher`.
    ///
    /// # Errors
    ///
    /// Propagates the cipher's error.
    pub fn apply(self, cipher: &Cipher, text: &str) -> Result<String, CipherError> {
        match self {
            Self::Encrypt => cipher.encrypt(text),
            Self::Decrypt => cipher.decrypt(text),
        }
    }
}

/// Builds a `kind` cipher from `key_text` and runs `operation` on `text`.
///
/// # Errors
///
/// Returns [`CliError::KeyParse`] for a bad key and [`CliError::Cipher`] if the
/// cipher rejects the text.
pub fn transform(
    operation: Operation,
    kind: CipherKind,
    key_text: &str,
    text: &str,
) -> Result<String, CliError> {
    let cipher = Cipher::from_key_text(kind, key_text)?;
    log::debug!("parsed {kind} key: {cipher:?}");
    log::info!("{operation} with {kind}: {} characters", text.chars().count());
    Ok(operation.apply(&cipher, text)?)
}

/// Recovers a Hill key from a known plaintext/ciphertext pair.
///
/// # Errors
///
/// Returns [`CliError::NoKeyRecovered`] if no key can be derived.
pub fn crack(plaintext: &str, ciphertext: &str) -> Result<Matrix2, CliError> {
    log::info!(
        "cracking hill key from {} plaintext and {} ciphertext characters",
        plaintext.chars().count(),
        ciphertext.chars().count()
    );
    HillCipher::crack_key(plaintext, ciphertext).ok_or_else(|| {
        log::warn!("no invertible plaintext block found");
        CliError::NoKeyRecovered
    })
}

/// Returns `text`, or everything read from `input` if `text` is `None`.
///
/// One trailing line break is removed from input that was read.
///
/// # Errors
///
/// Returns any error raised while reading `input`.
pub fn read_text(text: Option<String>, input: impl Read) -> io::Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    let mut text = io::read_to_string(input)?;
    strip_line_ending(&mut text);
    Ok(text)
}

/// Removes one trailing `\n` or `\r\n`, leaving any other whitespace in place.
pub(crate) fn strip_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform() {
        let out = transform(Operation::Encrypt, CipherKind::Caesar, "3", "abc").unwrap();
        assert_eq!(out, "DEF");
        let out = transform(Operation::Decrypt, CipherKind::Affine, "5, 8", "IHHWVC").unwrap();
        assert_eq!(out, "affine");
    }

    #[test]
    fn test_transform_errors() {
        assert!(matches!(
            transform(Operation::Encrypt, CipherKind::Hill, "2 4 6 8", "ab"),
            Err(CliError::KeyParse(_))
        ));
        assert!(matches!(
            transform(Operation::Decrypt, CipherKind::Playfair, "MONARCHY", "ABC"),
            Err(CliError::Cipher(CipherError::IncompleteBlock { letters: 3 }))
        ));
    }

    #[test]
    fn test_crack() {
        let key = crack("HELLOWORLD", "DPDKIWYXNW").unwrap();
        assert_eq!(key, Matrix2::new([[3, 3], [2, 5]]));
        assert!(matches!(crack("aaaa", "BBBB"), Err(CliError::NoKeyRecovered)));
    }

    #[test]
    fn test_read_text() {
        assert_eq!(read_text(Some("given".to_owned()), io::empty()).unwrap(), "given");
        assert_eq!(read_text(None, &b"from stdin\r\n"[..]).unwrap(), "from stdin");
        assert_eq!(read_text(None, &b"two\nlines\n\n"[..]).unwrap(), "two\nlines\n");
        assert_eq!(read_text(None, &b"  padded  \n"[..]).unwrap(), "  padded  ");
    }
}

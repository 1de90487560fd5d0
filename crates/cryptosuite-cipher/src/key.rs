//! Parsing of cipher keys from user-supplied text.
//!
//! | Cipher   | Format                                                      |
//! |----------|-------------------------------------------------------------|
//! | Caesar   | one integer                                                 |
//! | Affine   | two integers `a b`, separated by whitespace and/or commas   |
//! | Playfair | the keyword itself                                          |
//! | Hill     | four integers in row-major order, anything in between       |
//!
//! Surrounding whitespace is ignored in every format.

use std::sync::LazyLock;

use cryptosuite_core::Matrix2;
use regex::Regex;

use crate::{CipherKind, InvalidKey, KeyParseError};

static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?\d+").expect("integer pattern is valid"));

/// Parses a Caesar shift.
///
/// # Errors
///
/// Returns [`KeyParseError::InvalidInteger`] if the text is not a single integer.
///
/// # Examples
///
/// ```
/// use cryptosuite_cipher::key;
///
/// assert_eq!(key::parse_caesar_key(" -3\n")?, -3);
/// assert!(key::parse_caesar_key("3 4").is_err());
/// # Ok::<(), cryptosuite_cipher::KeyParseError>(())
/// ```
pub fn parse_caesar_key(text: &str) -> Result<i64, KeyParseError> {
    Ok(text.trim().parse()?)
}

/// Parses an affine key `(a, b)`.
///
/// Commas are treated as whitespace, so `5,8`, `5, 8` and `5 8` are all accepted.
/// Only the format is checked here; the multiplier is validated by
/// [`AffineCipher::new`](crate::AffineCipher::new).
///
/// # Errors
///
/// - [`KeyParseError::InvalidInteger`] if a token is not an integer.
/// - [`KeyParseError::WrongTokenCount`] if there are not exactly two tokens.
///
/// # Examples
///
/// ```
/// use cryptosuite_cipher::key;
///
/// assert_eq!(key::parse_affine_key("5,8")?, (5, 8));
/// assert_eq!(key::parse_affine_key(" 9 , 2 ")?, (9, 2));
/// assert!(key::parse_affine_key("5").is_err());
/// # Ok::<(), cryptosuite_cipher::KeyParseError>(())
/// ```
pub fn parse_affine_key(text: &str) -> Result<(i64, i64), KeyParseError> {
    let values = text
        .replace(',', " ")
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<Vec<i64>, _>>()?;
    match values[..] {
        [a, b] => Ok((a, b)),
        _ => Err(KeyParseError::WrongTokenCount {
            kind: CipherKind::Affine,
            expected: 2,
            found: values.len(),
        }),
    }
}

/// Returns the Playfair keyword with surrounding whitespace removed.
#[must_use]
pub fn parse_playfair_key(text: &str) -> &str {
    text.trim()
}

/// Parses a Hill key matrix.
///
/// Every integer in the text (an optional `-` followed by digits) is collected and
/// anything else is ignored, so `3 3 2 5`, `3,3;2,5` and `[[3, 3], [2, 5]]` are
/// equivalent. The integers fill the matrix row by row.
///
/// The key must be usable for decryption, so its determinant is checked here.
///
/// # Errors
///
/// - [`KeyParseError::WrongTokenCount`] if the text does not contain exactly four integers.
/// - [`KeyParseError::InvalidInteger`] if an integer does not fit in an `i64`.
/// - [`KeyParseError::InvalidKey`] if the matrix is not invertible mod 26.
///
/// # Examples
///
/// ```
/// use cryptosuite_cipher::key;
/// use cryptosuite_core::Matrix2;
///
/// assert_eq!(key::parse_hill_key("3 3\n2 5")?, Matrix2::new([[3, 3], [2, 5]]));
/// assert!(key::parse_hill_key("2 4 6 8").is_err()); // determinant 18
/// # Ok::<(), cryptosuite_cipher::KeyParseError>(())
/// ```
pub fn parse_hill_key(text: &str) -> Result<Matrix2, KeyParseError> {
    let values = INTEGER
        .find_iter(text)
        .map(|m| m.as_str().parse())
        .collect::<Result<Vec<i64>, _>>()?;
    let [a, b, c, d] = values[..] else {
        return Err(KeyParseError::WrongTokenCount {
            kind: CipherKind::Hill,
            expected: 4,
            found: values.len(),
        });
    };

    let matrix = Matrix2::new([[a, b], [c, d]]);
    if !matrix.is_invertible() {
        return Err(InvalidKey::SingularMatrix {
            determinant: matrix.determinant(),
        }
        .into());
    }
    Ok(matrix)
}

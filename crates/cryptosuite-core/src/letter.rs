//! Letters of the 26-letter Latin alphabet.

use std::fmt::{self, Display};

use crate::modular;

/// A letter of the Latin alphabet, stored as its alphabet index in the range 0-25.
///
/// Case is not part of a letter. It is chosen when the letter is turned back into a
/// character with [`to_upper`](Self::to_upper) or [`to_lower`](Self::to_lower).
///
/// Only ASCII letters are recognized. Every other character, including non-ASCII
/// alphabetic characters, is treated as a symbol by the ciphers.
///
/// # Examples
///
/// ```
/// use cryptosuite_core::Letter;
///
/// let letter = Letter::from_char('c').unwrap();
/// assert_eq!(letter.index(), 2);
/// assert_eq!(letter.to_upper(), 'C');
///
/// // Arithmetic wraps around the alphabet
/// assert_eq!(Letter::Z.shifted(1), Letter::A);
/// assert_eq!(Letter::A.shifted(-1), Letter::Z);
///
/// // Iterate over the whole alphabet
/// assert_eq!(Letter::ALL.len(), 26);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter {
    index: u8,
}

impl Letter {
    /// The letter `A` (index 0).
    pub const A: Self = Self { index: 0 };
    /// The letter `I` (index 8). Playfair stores `I` and `J` in this letter's cell.
    pub const I: Self = Self { index: 8 };
    /// The letter `J` (index 9).
    pub const J: Self = Self { index: 9 };
    /// The letter `X` (index 23), used as the padding letter by Playfair and Hill.
    pub const X: Self = Self { index: 23 };
    /// The letter `Z` (index 25).
    pub const Z: Self = Self { index: 25 };

    /// Array containing all 26 letters from `A` to `Z`.
    pub const ALL: [Self; 26] = {
        let mut all = [Self::A; 26];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 26 {
            all[i] = Self { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Creates a letter from its alphabet index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-25.
    ///
    /// # Examples
    ///
    /// ```
    /// use cryptosuite_core::Letter;
    ///
    /// assert_eq!(Letter::new(0), Letter::A);
    /// assert_eq!(Letter::new(25), Letter::Z);
    /// ```
    ///
    /// ```should_panic
    /// use cryptosuite_core::Letter;
    ///
    /// // This will panic
    /// let _ = Letter::new(26);
    /// ```
    #[must_use]
    pub fn new(index: u8) -> Self {
        assert!(index < 26, "Letter index must be 0-25, got {index}");
        Self { index }
    }

    /// Creates a letter from an ASCII letter of either case.
    ///
    /// Returns `None` for any other character.
    ///
    /// # Examples
    ///
    /// ```
    /// use cryptosuite_core::Letter;
    ///
    /// assert_eq!(Letter::from_char('a'), Some(Letter::A));
    /// assert_eq!(Letter::from_char('A'), Some(Letter::A));
    /// assert_eq!(Letter::from_char('-'), None);
    /// assert_eq!(Letter::from_char('é'), None);
    /// ```
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        let byte = u8::try_from(ch).ok().filter(u8::is_ascii_alphabetic)?;
        Some(Self {
            index: byte.to_ascii_uppercase() - b'A',
        })
    }

    /// Creates a letter from any integer, reducing it modulo 26.
    ///
    /// Negative values wrap around, so `-1` is `Z`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cryptosuite_core::Letter;
    ///
    /// assert_eq!(Letter::from_residue(27), Letter::new(1));
    /// assert_eq!(Letter::from_residue(-1), Letter::Z);
    /// ```
    #[must_use]
    pub fn from_residue(value: i64) -> Self {
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = modular::reduce(value) as u8;
        Self { index }
    }

    /// Returns the alphabet index of this letter (0-25).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.index
    }

    /// Returns the alphabet index of this letter as a signed value for modular arithmetic.
    #[must_use]
    pub fn value(self) -> i64 {
        i64::from(self.index)
    }

    /// Returns the letter `shift` places further along the alphabet, wrapping around.
    #[must_use]
    pub fn shifted(self, shift: i64) -> Self {
        Self::from_residue(self.value() + modular::reduce(shift))
    }

    /// Returns this letter as an uppercase ASCII character.
    #[must_use]
    pub fn to_upper(self) -> char {
        char::from(b'A' + self.index)
    }

    /// Returns this letter as a lowercase ASCII character.
    #[must_use]
    pub fn to_lower(self) -> char {
        char::from(b'a' + self.index)
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_upper())
    }
}

impl From<Letter> for u8 {
    fn from(letter: Letter) -> u8 {
        letter.index()
    }
}

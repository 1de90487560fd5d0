//! Positions of the non-letter characters of a text.
//!
//! Ciphers only transform letters. Before processing, [`SymbolMap::split`] pulls the
//! letters out of a text and remembers where every other character was; afterwards
//! [`SymbolMap::splice`] merges the saved characters back into the transformed
//! letter stream at their original positions.

use std::slice;

use crate::Letter;

/// The non-letter characters of a text, with their original character positions.
///
/// Positions count characters (not bytes) and are strictly increasing.
///
/// # Examples
///
/// ```
/// use cryptosuite_core::SymbolMap;
///
/// let (letters, symbols) = SymbolMap::split("ab-cd");
/// assert_eq!(letters.len(), 4);
/// assert_eq!(symbols.iter().collect::<Vec<_>>(), vec![(2, '-')]);
///
/// // Symbols land at their original index
/// assert_eq!(symbols.splice("WXYZ".chars()), "WX-YZ");
///
/// // Indices past the end of a shorter output are appended in order
/// assert_eq!(symbols.splice("W".chars()), "W-");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolMap {
    symbols: Vec<(usize, char)>,
}

impl SymbolMap {
    /// Splits `text` into its letters and the map of its remaining characters.
    #[must_use]
    pub fn split(text: &str) -> (Vec<Letter>, Self) {
        let mut letters = Vec::with_capacity(text.len());
        let mut symbols = Vec::new();
        for (index, ch) in text.chars().enumerate() {
            match Letter::from_char(ch) {
                Some(letter) => letters.push(letter),
                None => symbols.push((index, ch)),
            }
        }
        (letters, Self { symbols })
    }

    /// Returns the number of saved symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if the text contained only letters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns an iterator over `(position, character)` pairs in position order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (usize, char)> + '_ {
        self.symbols.iter().copied()
    }

    /// Merges the saved symbols into `letters`.
    ///
    /// Each symbol is emitted as soon as the output reaches its saved position.
    /// Symbols whose position lies beyond the end of the letters are appended in
    /// their original order. The result equals inserting every symbol at its position,
    /// in ascending order, into the letter sequence.
    #[must_use]
    pub fn splice<I>(&self, letters: I) -> String
    where
        I: IntoIterator<Item = char>,
    {
        let letters = letters.into_iter();
        let mut out = String::with_capacity(letters.size_hint().0 + self.symbols.len());
        let mut pending = self.symbols.iter().peekable();
        let mut written = 0;

        for ch in letters {
            while let Some(&(_, symbol)) = pending.next_if(|&&(index, _)| index <= written) {
                out.push(symbol);
                written += 1;
            }
            out.push(ch);
            written += 1;
        }
        out.extend(pending.map(|&(_, symbol)| symbol));
        out
    }
}

impl<'a> IntoIterator for &'a SymbolMap {
    type Item = (usize, char);
    type IntoIter = std::iter::Copied<slice::Iter<'a, (usize, char)>>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter().copied()
    }
}

//! The Playfair digram cipher and its key square.

use std::fmt::{self, Display};

use cryptosuite_core::{Letter, SymbolMap};

use crate::{CipherError, InvalidKey};

/// The side length of a Playfair key square.
pub const SQUARE_SIZE: usize = 5;

const CELL_COUNT: usize = SQUARE_SIZE * SQUARE_SIZE;

/// The 5×5 Playfair key square.
///
/// The square is built from a keyword: the keyword's letters in first-occurrence
/// order, followed by the rest of the alphabet, with `J` removed so that `I` and `J`
/// share a cell. It is immutable once built.
///
/// # Examples
///
/// ```
/// use cryptosuite_cipher::KeySquare;
/// use cryptosuite_core::Letter;
///
/// let square = KeySquare::from_keyword("MONARCHY")?;
/// assert_eq!(
///     square.to_string(),
///     "MONAR\nCHYBD\nEFGIK\nLPQST\nUVWXZ"
/// );
/// assert_eq!(square.position(Letter::new(7))?, (1, 1)); // H
/// # Ok::<(), cryptosuite_cipher::CipherError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySquare {
    cells: [[Letter; SQUARE_SIZE]; SQUARE_SIZE],
    positions: [Option<(usize, usize)>; 26],
}

impl KeySquare {
    /// Builds the key square for `keyword`.
    ///
    /// Alphabetic characters of the keyword are uppercased and deduplicated; all
    /// other characters are ignored. A `J` in the keyword is dropped along with the
    /// alphabet's `J`.
    ///
    /// # Errors
    ///
    /// - [`InvalidKey::EmptyKeyword`] if the keyword has no alphabetic characters.
    /// - [`InvalidKey::KeySquareSize`] if the keyword does not yield exactly 25
    ///   symbols, which happens when it contains non-ASCII letters.
    pub fn from_keyword(keyword: &str) -> Result<Self, CipherError> {
        let keyword_symbols: Vec<char> = keyword
            .chars()
            .filter(|ch| ch.is_alphabetic())
            .map(|ch| ch.to_ascii_uppercase())
            .collect();
        if keyword_symbols.is_empty() {
            return Err(InvalidKey::EmptyKeyword.into());
        }

        let mut symbols: Vec<char> = Vec::with_capacity(CELL_COUNT + 1);
        for ch in keyword_symbols.into_iter().chain('A'..='Z') {
            if !symbols.contains(&ch) {
                symbols.push(ch);
            }
        }
        symbols.retain(|&ch| ch != 'J');

        let len = symbols.len();
        let letters = symbols
            .into_iter()
            .map(Letter::from_char)
            .collect::<Option<Vec<_>>>()
            .filter(|letters| letters.len() == CELL_COUNT)
            .ok_or(InvalidKey::KeySquareSize { len })?;

        let mut cells = [[Letter::A; SQUARE_SIZE]; SQUARE_SIZE];
        let mut positions = [None; 26];
        for (i, letter) in letters.into_iter().enumerate() {
            let (row, col) = (i / SQUARE_SIZE, i % SQUARE_SIZE);
            cells[row][col] = letter;
            positions[usize::from(letter.index())] = Some((row, col));
        }
        Ok(Self { cells, positions })
    }

    /// Returns the letter at `row`, `col`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 5 or greater.
    #[must_use]
    pub fn at(&self, row: usize, col: usize) -> Letter {
        self.cells[row][col]
    }

    /// Returns the rows of the square.
    #[must_use]
    pub fn rows(&self) -> &[[Letter; SQUARE_SIZE]; SQUARE_SIZE] {
        &self.cells
    }

    /// Returns the `(row, col)` of `letter`.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::LookupFailure`] for `J`, which has no cell of its own.
    pub fn position(&self, letter: Letter) -> Result<(usize, usize), CipherError> {
        self.positions[usize::from(letter.index())].ok_or(CipherError::LookupFailure {
            letter: letter.to_upper(),
        })
    }
}

impl Display for KeySquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for letter in row {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    /// Steps along a row or column: one cell left/up to encrypt, right/down to decrypt.
    const fn step(self) -> usize {
        match self {
            Direction::Encrypt => SQUARE_SIZE - 1,
            Direction::Decrypt => 1,
        }
    }
}

/// The Playfair digram cipher.
///
/// Letters are processed in pairs on a [`KeySquare`]:
///
/// - **Same row**: each letter moves one column left to encrypt, right to decrypt.
/// - **Same column**: each letter moves one row up to encrypt, down to decrypt.
/// - **Rectangle**: each letter takes its partner's column and keeps its own row.
///
/// Before encryption, `J` becomes `I` and an `X` is inserted after a letter that
/// would otherwise be paired with itself, or that is left over at the end.
/// Decryption removes every `X` that sits between two identical characters.
/// Non-letters are saved and spliced back at their original positions.
///
/// # Examples
///
/// ```
/// use cryptosuite_cipher::PlayfairCipher;
///
/// let cipher = PlayfairCipher::new("MONARCHY")?;
/// let ciphertext = cipher.encrypt("balloon")?;
/// assert_eq!(ciphertext, "AXSUPMMO"); // BA LX LO ON
/// assert_eq!(cipher.decrypt(&ciphertext)?, "balloon");
/// # Ok::<(), cryptosuite_cipher::CipherError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayfairCipher {
    square: KeySquare,
}

impl PlayfairCipher {
    /// Creates a cipher whose key square is built from `keyword`.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidKey`] error if the keyword cannot build a square; see
    /// [`KeySquare::from_keyword`].
    pub fn new(keyword: &str) -> Result<Self, CipherError> {
        Ok(Self {
            square: KeySquare::from_keyword(keyword)?,
        })
    }

    /// Returns the key square.
    #[must_use]
    pub fn square(&self) -> &KeySquare {
        &self.square
    }

    /// Encrypts `plaintext`, producing uppercase letters.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::LookupFailure`] if a letter is missing from the key square.
    pub fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        let (letters, symbols) = SymbolMap::split(plaintext);
        let letters = normalize(letters);

        let mut out = Vec::with_capacity(letters.len() + 1);
        for (first, second) in digrams(&letters) {
            let [first, second] = self.transform(first, second, Direction::Encrypt)?;
            out.extend([first.to_upper(), second.to_upper()]);
        }
        Ok(symbols.splice(out))
    }

    /// Decrypts `ciphertext`, producing lowercase letters.
    ///
    /// # Errors
    ///
    /// - [`CipherError::IncompleteBlock`] if the ciphertext has an odd number of letters.
    /// - [`CipherError::LookupFailure`] if a letter is missing from the key square.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        let (letters, symbols) = SymbolMap::split(ciphertext);
        let letters = normalize(letters);
        if letters.len() % 2 != 0 {
            return Err(CipherError::IncompleteBlock {
                letters: letters.len(),
            });
        }

        let mut out = Vec::with_capacity(letters.len());
        for pair in letters.chunks_exact(2) {
            let [first, second] = self.transform(pair[0], pair[1], Direction::Decrypt)?;
            out.extend([first.to_upper(), second.to_upper()]);
        }
        let spliced: Vec<char> = symbols.splice(out).chars().collect();
        Ok(remove_padding(&spliced)
            .map(|ch| ch.to_ascii_lowercase())
            .collect())
    }

    fn transform(
        &self,
        first: Letter,
        second: Letter,
        direction: Direction,
    ) -> Result<[Letter; 2], CipherError> {
        let (r1, c1) = self.square.position(first)?;
        let (r2, c2) = self.square.position(second)?;
        let step = direction.step();

        let pair = if r1 == r2 {
            [
                self.square.at(r1, (c1 + step) % SQUARE_SIZE),
                self.square.at(r2, (c2 + step) % SQUARE_SIZE),
            ]
        } else if c1 == c2 {
            [
                self.square.at((r1 + step) % SQUARE_SIZE, c1),
                self.square.at((r2 + step) % SQUARE_SIZE, c2),
            ]
        } else {
            [self.square.at(r1, c2), self.square.at(r2, c1)]
        };
        Ok(pair)
    }
}

/// Maps `J` to `I`.
fn normalize(mut letters: Vec<Letter>) -> Vec<Letter> {
    for letter in &mut letters {
        if *letter == Letter::J {
            *letter = Letter::I;
        }
    }
    letters
}

/// Splits letters into digrams.
///
/// A letter followed by the same letter, or by nothing, is paired with `X` and only
/// that letter is consumed. `X` itself can still end up as `XX`.
fn digrams(letters: &[Letter]) -> Vec<(Letter, Letter)> {
    let mut pairs = Vec::with_capacity(letters.len() / 2 + 1);
    let mut i = 0;
    while i < letters.len() {
        let first = letters[i];
        match letters.get(i + 1) {
            Some(&second) if second != first => {
                pairs.push((first, second));
                i += 2;
            }
            _ => {
                pairs.push((first, Letter::X));
                i += 1;
            }
        }
    }
    pairs
}

/// Drops every `X` whose neighbors in `chars` are equal.
///
/// Neighbors are taken from the input, so a removal never changes what the next
/// position is compared against.
fn remove_padding(chars: &[char]) -> impl Iterator<Item = char> + '_ {
    chars.iter().enumerate().filter_map(|(i, &ch)| {
        let padded = ch == 'X'
            && i > 0
            && chars
                .get(i + 1)
                .is_some_and(|&next| next == chars[i - 1]);
        (!padded).then_some(ch)
    })
}

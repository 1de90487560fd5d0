//! Core data structures for classical cipher implementations.
//!
//! This crate provides the small, shared vocabulary used by every cipher in the
//! suite: letters of the 26-letter Latin alphabet, arithmetic modulo 26, 2×2
//! matrices over the integers mod 26, and a map that keeps non-letter characters
//! out of the way while the letters are transformed.
//!
//! # Overview
//!
//! 1. **Alphabet** - [`letter`]: the [`Letter`] type, an index in the range 0-25.
//! 2. **Arithmetic** - [`modular`]: reduction, GCD, and modular inverses mod 26.
//! 3. **Matrices** - [`matrix`]: the [`Matrix2`] type with determinant, inverse,
//!    and block multiplication.
//! 4. **Text layout** - [`symbols`]: the [`SymbolMap`] type, which records where
//!    punctuation, digits, and whitespace sit so they can be spliced back into a
//!    transformed letter stream.
//!
//! Nothing in this crate performs I/O or logging.
//!
//! # Examples
//!
//! ```
//! use cryptosuite_core::{Letter, Matrix2, SymbolMap};
//!
//! let (letters, symbols) = SymbolMap::split("hi, you");
//! assert_eq!(letters.len(), 5);
//!
//! let shifted = letters.iter().map(|letter| letter.shifted(1).to_upper());
//! assert_eq!(symbols.splice(shifted), "IJ, ZPV");
//!
//! let key = Matrix2::new([[3, 3], [2, 5]]);
//! assert!(key.inverse().is_some());
//! assert_eq!(Letter::from_char('q'), Some(Letter::new(16)));
//! ```

pub mod letter;
pub mod matrix;
pub mod modular;
pub mod symbols;

// Re-export commonly used types
pub use self::{letter::Letter, matrix::Matrix2, symbols::SymbolMap};

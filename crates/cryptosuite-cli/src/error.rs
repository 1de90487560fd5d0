//! Errors reported by the command-line front end.

use std::{io, path::PathBuf};

use cryptosuite_cipher::{CipherError, KeyParseError, UnknownCipherError};

/// An error that ends a command.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CliError {
    /// Reading or writing a named file failed.
    #[display("{}: {source}", path.display())]
    File {
        /// The file that could not be accessed.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// Reading standard input or writing standard output failed.
    #[display("{_0}")]
    Io(#[from] io::Error),
    /// The cipher name is not recognised.
    #[display("{_0}")]
    UnknownCipher(#[from] UnknownCipherError),
    /// The key text could not be turned into a key.
    #[display("{_0}")]
    KeyParse(#[from] KeyParseError),
    /// The cipher rejected the input.
    #[display("{_0}")]
    Cipher(#[from] CipherError),
    /// Key recovery found no invertible plaintext block.
    #[display("no hill key could be recovered from the given texts")]
    NoKeyRecovered,
}

impl CliError {
    /// Returns a closure that attaches `path` to an I/O error.
    pub(crate) fn file(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Self::File { path, source }
    }
}

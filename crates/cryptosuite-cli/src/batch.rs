//! The batch driver: runs every cipher over the sample files.
//!
//! Keys are read from the keys directory:
//!
//! | File               | Content                          |
//! |--------------------|----------------------------------|
//! | `caesar_key.txt`   | first line: the shift            |
//! | `affine_key.txt`   | first line: `a b`                |
//! | `playfair_key.txt` | first line: the keyword          |
//! | `hill_key.txt`     | the four matrix entries          |
//!
//! `plaintext.txt` is read from the texts directory. For each cipher the driver
//! writes `ciphertext_<cipher>.txt`, reads it back and writes its decryption to
//! `plaintext_<cipher>.txt`. Finally the Hill key is recovered from the Hill
//! plaintext/ciphertext pair and written to `hill_key_cracked.txt`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use cryptosuite_cipher::{Cipher, CipherKind};
use cryptosuite_core::Matrix2;

use crate::{
    CliError,
    oneshot::{self, Operation},
};

/// The files written by a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    /// Every written file, in the order written.
    pub written: Vec<PathBuf>,
    /// The recovered Hill key.
    pub cracked_key: Matrix2,
}

/// Runs the batch driver.
///
/// # Errors
///
/// Returns the first error encountered: a missing or unwritable file, a bad key,
/// or a Hill key that cannot be recovered.
pub fn run(keys_dir: &Path, texts_dir: &Path) -> Result<BatchReport, CliError> {
    let plaintext = read(&texts_dir.join("plaintext.txt"))?;
    let mut written = Vec::new();
    let mut hill_ciphertext = String::new();

    for kind in CipherKind::ALL {
        let key_text = read_key(keys_dir, kind)?;
        let cipher = Cipher::from_key_text(kind, &key_text)?;
        log::info!("batch: {kind}");

        let ciphertext_path = texts_dir.join(format!("ciphertext_{kind}.txt"));
        write(&ciphertext_path, &Operation::Encrypt.apply(&cipher, &plaintext)?)?;
        written.push(ciphertext_path.clone());

        let ciphertext = read(&ciphertext_path)?;
        let plaintext_path = texts_dir.join(format!("plaintext_{kind}.txt"));
        write(&plaintext_path, &Operation::Decrypt.apply(&cipher, &ciphertext)?)?;
        written.push(plaintext_path);

        if kind == CipherKind::Hill {
            hill_ciphertext = ciphertext;
        }
    }

    let cracked_key = oneshot::crack(&plaintext, &hill_ciphertext)?;
    let cracked_path = texts_dir.join("hill_key_cracked.txt");
    write(&cracked_path, &cracked_key.to_string())?;
    written.push(cracked_path);

    Ok(BatchReport {
        written,
        cracked_key,
    })
}

/// Reads the key text of `kind`: the first line, or the whole file for Hill.
fn read_key(keys_dir: &Path, kind: CipherKind) -> Result<String, CliError> {
    let content = read(&keys_dir.join(format!("{kind}_key.txt")))?;
    let key_text = match kind {
        CipherKind::Hill => content,
        _ => content.lines().next().unwrap_or_default().to_owned(),
    };
    log::debug!("{kind} key text: {key_text:?}");
    Ok(key_text)
}

fn read(path: &Path) -> Result<String, CliError> {
    log::debug!("reading {}", path.display());
    fs::read_to_string(path).map_err(CliError::file(path))
}

fn write(path: &Path, contents: &str) -> Result<(), CliError> {
    log::debug!("writing {}", path.display());
    fs::write(path, contents).map_err(CliError::file(path))
}

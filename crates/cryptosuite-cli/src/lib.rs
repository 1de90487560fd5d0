//! Command-line front end for the classical cipher suite.
//!
//! The `cryptosuite` binary offers three ways in:
//!
//! - [`oneshot`]: `encrypt`, `decrypt` and `crack` subcommands for scripting
//! - [`interactive`]: a prompt loop reading from stdin
//! - [`batch`]: runs every cipher over key and text files on disk
//!
//! All cipher work is delegated to [`cryptosuite_cipher`]. This crate owns the
//! I/O, the logging and the exit status.

use std::io;

pub mod args;
pub mod batch;
pub mod error;
pub mod interactive;
pub mod oneshot;

pub use self::{
    args::{Args, CipherArgs, Command},
    error::CliError,
};
use self::oneshot::Operation;

/// Runs the command selected by `args` against the process's stdin and stdout.
///
/// # Errors
///
/// Returns the error that ended the command.
pub fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Command::Encrypt(cipher_args) => run_cipher(Operation::Encrypt, cipher_args)?,
        Command::Decrypt(cipher_args) => run_cipher(Operation::Decrypt, cipher_args)?,
        Command::Crack(crack_args) => {
            let key = oneshot::crack(&crack_args.plaintext, &crack_args.ciphertext)?;
            println!("{key}");
        }
        Command::Interactive => interactive::run(io::stdin().lock(), io::stdout().lock())?,
        Command::Batch(batch_args) => {
            let report = batch::run(&batch_args.keys_dir, &batch_args.texts_dir)?;
            for path in &report.written {
                println!("wrote {}", path.display());
            }
        }
    }
    Ok(())
}

fn run_cipher(operation: Operation, args: CipherArgs) -> Result<(), CliError> {
    let text = oneshot::read_text(args.text, io::stdin().lock())?;
    let out = oneshot::transform(operation, args.cipher.into(), &args.key, &text)?;
    println!("{out}");
    Ok(())
}

//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use cryptosuite_cipher::CipherKind;
use log::LevelFilter;

/// Encrypt, decrypt and break classical ciphers.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Log more details to stderr. Repeat for debug output.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// The command to run.
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Returns the log level selected by `--verbose`.
    ///
    /// `RUST_LOG` is applied on top of this level.
    #[must_use]
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}

/// A subcommand.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Encrypt text.
    Encrypt(CipherArgs),
    /// Decrypt text.
    Decrypt(CipherArgs),
    /// Recover a Hill key from a known plaintext and its ciphertext.
    Crack(CrackArgs),
    /// Prompt for ciphers, keys and texts until `q` is entered.
    Interactive,
    /// Encrypt and decrypt the sample files with every cipher.
    Batch(BatchArgs),
}

/// Arguments of `encrypt` and `decrypt`.
#[derive(Debug, clap::Args)]
pub struct CipherArgs {
    /// The cipher to use.
    #[arg(short, long, value_enum)]
    pub cipher: CipherArg,

    /// The key: a shift, `a,b`, a keyword, or four matrix entries.
    #[arg(short, long, allow_hyphen_values = true)]
    pub key: String,

    /// The text to process. Read from stdin when omitted.
    pub text: Option<String>,
}

/// Arguments of `crack`.
#[derive(Debug, clap::Args)]
pub struct CrackArgs {
    /// The known plaintext.
    #[arg(short, long)]
    pub plaintext: String,

    /// The ciphertext of the known plaintext.
    #[arg(short, long)]
    pub ciphertext: String,
}

/// Arguments of `batch`.
#[derive(Debug, clap::Args)]
pub struct BatchArgs {
    /// Directory holding `caesar_key.txt`, `affine_key.txt`, `playfair_key.txt` and `hill_key.txt`.
    #[arg(long, value_name = "DIR", default_value = "sample keys")]
    pub keys_dir: PathBuf,

    /// Directory holding `plaintext.txt`; outputs are written here too.
    #[arg(long, value_name = "DIR", default_value = "sample texts")]
    pub texts_dir: PathBuf,
}

/// Cipher names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CipherArg {
    /// Caesar shift.
    Caesar,
    /// Affine substitution.
    Affine,
    /// Playfair digrams.
    Playfair,
    /// 2×2 Hill matrix.
    Hill,
}

impl From<CipherArg> for CipherKind {
    fn from(arg: CipherArg) -> Self {
        match arg {
            CipherArg::Caesar => Self::Caesar,
            CipherArg::Affine => Self::Affine,
            CipherArg::Playfair => Self::Playfair,
            CipherArg::Hill => Self::Hill,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_encrypt() {
        let args = Args::parse_from([
            "cryptosuite",
            "-v",
            "encrypt",
            "-c",
            "hill",
            "-k",
            "-1 2 3 4",
            "hi",
        ]);
        assert_eq!(args.log_level(), LevelFilter::Info);
        let Command::Encrypt(cipher_args) = args.command else {
            panic!("expected encrypt, got {:?}", args.command);
        };
        assert_eq!(CipherKind::from(cipher_args.cipher), CipherKind::Hill);
        assert_eq!(cipher_args.key, "-1 2 3 4");
        assert_eq!(cipher_args.text.as_deref(), Some("hi"));
    }

    #[test]
    fn test_batch_defaults() {
        let args = Args::parse_from(["cryptosuite", "batch", "-vv"]);
        assert_eq!(args.log_level(), LevelFilter::Debug);
        let Command::Batch(batch) = args.command else {
            panic!("expected batch, got {:?}", args.command);
        };
        assert_eq!(batch.keys_dir, PathBuf::from("sample keys"));
        assert_eq!(batch.texts_dir, PathBuf::from("sample texts"));
    }
}

//! The interactive prompt loop.
//!
//! Each round asks for a cipher, an operation, a key and a text, then prints the
//! result. Invalid input is reported and the loop moves on to the next round.

use std::io::{self, BufRead, Write};

use cryptosuite_cipher::{CipherKind, HillCipher};

use crate::oneshot::{self, Operation};

const QUIT_WORDS: [&str; 3] = ["q", "quit", "exit"];

/// Runs the prompt loop until the user quits or `input` is exhausted.
///
/// # Errors
///
/// Returns any error raised while reading `input` or writing `output`.
pub fn run<R, W>(input: R, output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut session = Session { input, output };
    session.banner()?;
    while session.round()? {}
    Ok(())
}

struct Session<R, W> {
    input: R,
    output: W,
}

impl<R, W> Session<R, W>
where
    R: BufRead,
    W: Write,
{
    fn banner(&mut self) -> io::Result<()> {
        let names = CipherKind::ALL.map(CipherKind::name).join(", ");
        writeln!(self.output, "CryptoSuite")?;
        writeln!(self.output, "Ciphers: {names}")
    }

    /// Runs one round. Returns `false` when the session is over.
    fn round(&mut self) -> io::Result<bool> {
        writeln!(self.output)?;
        let Some(cipher) = self.prompt("Cipher (or 'q' to quit)")? else {
            return Ok(false);
        };
        let cipher = cipher.trim();
        if QUIT_WORDS.contains(&cipher.to_ascii_lowercase().as_str()) {
            return Ok(false);
        }

        let Some(mode) = self.prompt("Operation: encrypt / decrypt / crack(hill)")? else {
            return Ok(false);
        };
        let mode = mode.trim().to_ascii_lowercase();
        if mode.starts_with("crack") {
            return self.crack();
        }

        let Some(key_text) = self.prompt("Key")? else {
            return Ok(false);
        };
        let Some(text) = self.prompt("Text")? else {
            return Ok(false);
        };

        let operation = match mode.as_str() {
            "encrypt" => Operation::Encrypt,
            "decrypt" => Operation::Decrypt,
            _ => {
                writeln!(self.output, "Unknown operation.")?;
                return Ok(true);
            }
        };
        let result = cipher
            .parse::<CipherKind>()
            .map_err(Into::into)
            .and_then(|kind| oneshot::transform(operation, kind, &key_text, &text));
        match result {
            Ok(out) => writeln!(self.output, "Output: {out}")?,
            Err(err) => writeln!(self.output, "Error: {err}")?,
        }
        Ok(true)
    }

    fn crack(&mut self) -> io::Result<bool> {
        let Some(plaintext) = self.prompt("Known plaintext")? else {
            return Ok(false);
        };
        let Some(ciphertext) = self.prompt("Known ciphertext")? else {
            return Ok(false);
        };
        match HillCipher::crack_key(&plaintext, &ciphertext) {
            Some(key) => writeln!(self.output, "Recovered Hill key (2x2):\n{key}")?,
            None => {
                log::warn!("no invertible plaintext block found");
                writeln!(self.output, "Recovered Hill key (2x2): no key found")?;
            }
        }
        Ok(true)
    }

    /// Prints `label` and reads one line without its line ending.
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        oneshot::strip_line_ending(&mut line);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(input: &str) -> String {
        let mut output = Vec::new();
        run(input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_encrypt_then_quit() {
        let output = session("caesar\nencrypt\n3\nabc\nq\n");
        assert!(output.starts_with("CryptoSuite\nCiphers: caesar, affine, playfair, hill\n"));
        assert!(output.contains("Output: DEF\n"));
        assert!(output.ends_with("Cipher (or 'q' to quit): "));
    }

    #[test]
    fn test_decrypt_each_cipher() {
        let output = session(
            "Affine\ndecrypt\n5,8\nIHHWVC SWFRCP\n\
             playfair\nDECRYPT\nMONARCHY\nAXSUPMMO\n\
             hill\ndecrypt\n3 3\nDPLE\n\
             quit\n",
        );
        assert!(output.contains("Output: affine cipher\n"));
        assert!(output.contains("Output: balloon\n"));
        assert!(output.contains("Error: hill key needs exactly 4 integer(s), found 2\n"));
    }

    #[test]
    fn test_errors_do_not_end_the_session() {
        let output = session(
            "enigma\nencrypt\n1\nabc\n\
             caesar\nrotate\n1\nabc\n\
             affine\nencrypt\n13 1\nabc\n\
             caesar\nencrypt\n1\nabc\n",
        );
        assert!(output.contains("Error: unknown cipher \"enigma\""));
        assert!(output.contains("Unknown operation.\n"));
        assert!(output.contains("Error: invalid key: affine multiplier 13 is not invertible mod 26\n"));
        assert!(output.contains("Output: BCD\n"));
    }

    #[test]
    fn test_crack() {
        let output = session("hill\ncrack\nHELLOWORLD\nDPDKIWYXNW\nx\ncrack\naaaa\nBBBB\nexit\n");
        assert!(output.contains("Recovered Hill key (2x2):\n3 3\n2 5\n"));
        assert!(output.contains("Recovered Hill key (2x2): no key found\n"));
    }

    #[test]
    fn test_text_keeps_surrounding_whitespace() {
        let output = session("  caesar \n encrypt\n 1 \n  ab cd  \r\nq\n");
        assert!(output.contains("Output:   BC DE  \n"));

        let output = session("hill\ncrack\n HELLOWORLD \n\tDPDKIWYXNW\nq\n");
        assert!(output.contains("Recovered Hill key (2x2):\n3 3\n2 5\n"));
    }

    #[test]
    fn test_end_of_input_mid_round() {
        let output = session("caesar\nencrypt\n");
        assert!(output.ends_with("Key: \n"));
    }
}

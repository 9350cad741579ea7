//! Interactive prompt.

use std::io::{self, BufRead, Write};

/// Prompt shown before reading the text.
pub const PROMPT: &str = "Please enter text to be encoded:";

/// Writes [`PROMPT`] to `prompt_out` and reads one line from `input`.
///
/// The trailing line ending (`\n` or `\r\n`) is removed. End of input
/// before any text yields an empty string.
pub fn read_text<R: BufRead, W: Write>(input: &mut R, prompt_out: &mut W) -> io::Result<String> {
    writeln!(prompt_out, "{}", PROMPT)?;
    prompt_out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(line)
}

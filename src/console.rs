//! Line-oriented prompting over any `BufRead` input and `Write` output.

use std::borrow::Cow;
use std::io::{BufRead, Write};

use log::{debug, warn};

use crate::error::{Result, WriterError};
use crate::model::ListStyle;

/// Removes one trailing line terminator (`\n` or `\r\n`) if present.
///
/// Empty input, or input without a terminator, is returned unchanged.
pub fn strip_line_terminator(line: &str) -> &str {
    if let Some(stripped) = line.strip_suffix("\r\n") {
        stripped
    } else if let Some(stripped) = line.strip_suffix('\n') {
        stripped
    } else {
        line
    }
}

/// Cuts `line` down to at most `max` characters, keeping the start.
/// Returns true if anything was removed.
fn truncate_chars(line: &mut String, max: usize) -> bool {
    match line.char_indices().nth(max) {
        Some((cut, _)) => {
            line.truncate(cut);
            true
        }
        None => false,
    }
}

/// Prompts written to `output` and answers read from `input`
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `text` as-is and flushes, leaving the cursor on the same line
    pub fn prompt(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Writes `text` followed by a newline
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Reads one line without its terminator.
    ///
    /// Returns `None` at end of input. Characters past `max` are dropped.
    /// Bytes that are not valid UTF-8 are replaced with `U+FFFD`.
    pub fn read_line(&mut self, max: usize) -> Result<Option<String>> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            debug!("end of input");
            return Ok(None);
        }

        let decoded = String::from_utf8_lossy(&raw);
        if let Cow::Owned(_) = decoded {
            warn!("Input line was not valid UTF-8, invalid bytes were replaced");
        }
        let mut line = strip_line_terminator(&decoded).to_string();
        // A cap of zero would turn every answer into a blank line
        let max = max.max(1);
        if truncate_chars(&mut line, max) {
            warn!("Input line longer than {} characters was truncated", max);
        }
        Ok(Some(line))
    }

    /// Reads lines until one is not blank.
    ///
    /// Fails with [`WriterError::InputClosed`] if input ends first.
    pub fn read_nonblank_line(&mut self, max: usize) -> Result<String> {
        loop {
            match self.read_line(max)? {
                None => return Err(WriterError::InputClosed),
                Some(line) if line.is_empty() => debug!("blank answer, reading again"),
                Some(line) => return Ok(line),
            }
        }
    }

    /// Asks a yes/no question.
    ///
    /// Only an answer starting with `n` or `N` means no; anything else that
    /// is not blank means yes.
    pub fn ask_yes_no(&mut self, question: &str, max: usize) -> Result<bool> {
        self.say(question)?;
        let answer = self.read_nonblank_line(max)?;
        self.say("")?;

        let yes = !matches!(answer.chars().next(), Some('n' | 'N'));
        debug!("answer {:?} read as {}", answer, if yes { "yes" } else { "no" });
        Ok(yes)
    }

    /// Collects entries, one per line, until a blank line or end of input.
    ///
    /// Each entry is prompted with its list marker. Stopping before the
    /// first entry gives an empty list.
    pub fn read_list(&mut self, style: ListStyle, max: usize) -> Result<Vec<String>> {
        let mut entries = Vec::new();
        loop {
            self.prompt(&format!("  {} ", style.marker(entries.len())))?;
            match self.read_line(max)? {
                Some(line) if !line.is_empty() => entries.push(line),
                _ => break,
            }
        }
        debug!("collected {} {:?} entries", entries.len(), style);
        Ok(entries)
    }
}

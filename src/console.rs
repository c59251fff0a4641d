// Line-oriented prompting over any reader/writer pair

use eyre::{Context, Result};
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Prompt and print helper
///
/// Generic over the streams so interactive operations can run against
/// in-memory buffers in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process stdin/stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label` without a newline and read one line of input
    ///
    /// Returns `None` at end of input. The trailing line break is removed,
    /// other whitespace is kept.
    pub fn ask(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Print one line
    pub fn say(&mut self, text: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Get the underlying writer
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Unwrap into the underlying streams
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

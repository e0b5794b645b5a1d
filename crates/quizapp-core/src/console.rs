//! Line-oriented console I/O.
//!
//! Generic over the reader and writer so the interactive flow can run against
//! stdin/stdout or against scripted in-memory buffers.

use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::error::QuizError;

/// A prompt/print pair over one input and one output stream.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write `text` without a newline, flush, and read one line.
    ///
    /// The line terminator is stripped; other whitespace is kept. End of
    /// input is `QuizError::InputClosed`.
    pub fn prompt(&mut self, text: &str) -> Result<String, QuizError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(QuizError::InputClosed);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    pub fn write_line(&mut self, text: impl Display) -> Result<(), QuizError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Give back the output stream (used to inspect transcripts).
    pub fn into_output(self) -> W {
        self.output
    }
}

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use crate::error::DialogError;

/// Line-oriented input and output for menus.
pub struct Console<'io> {
    input: Box<dyn BufRead + 'io>,
    output: Box<dyn Write + 'io>,
}

impl<'io> Console<'io> {
    pub fn new(input: impl BufRead + 'io, output: impl Write + 'io) -> Self {
        Self {
            input: Box::new(input),
            output: Box::new(output),
        }
    }

    /// Read one line and return it trimmed. End of input is an error.
    pub fn read_line(&mut self) -> Result<String, DialogError> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(DialogError::InputClosed);
        }
        Ok(buf.trim().to_string())
    }

    /// Write `text` followed by a newline.
    pub fn line(&mut self, text: impl Display) -> Result<(), DialogError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    pub fn lines<I, L>(&mut self, lines: I) -> Result<(), DialogError>
    where
        I: IntoIterator<Item = L>,
        L: Display,
    {
        for line in lines {
            self.line(line)?;
        }
        Ok(())
    }

    /// Write `text` without a newline and flush so it shows before input.
    pub fn prompt(&mut self, text: impl Display) -> Result<(), DialogError> {
        write!(self.output, "{text}")?;
        self.flush()
    }

    pub fn flush(&mut self) -> Result<(), DialogError> {
        self.output.flush()?;
        Ok(())
    }
}

impl Console<'static> {
    /// Console bound to the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl std::fmt::Debug for Console<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}

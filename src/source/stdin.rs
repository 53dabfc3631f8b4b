//! Stdin-based item source for piped input.

use crate::model::error::InputError;
use std::io::{BufRead, BufReader, IsTerminal, Read};

/// Piped JSON Lines input, read to EOF.
#[derive(Debug)]
pub struct StdinSource<R: Read> {
    reader: BufReader<R>,
}

impl StdinSource<std::io::Stdin> {
    /// Create a source over the process's stdin.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NoInput` if stdin is an interactive terminal,
    /// so the tool does not sit waiting for typed input.
    pub fn new() -> Result<Self, InputError> {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(InputError::NoInput);
        }
        Ok(Self::from_reader(stdin))
    }
}

impl<R: Read> StdinSource<R> {
    /// Create a source from any reader. Skips the terminal check.
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
        }
    }

    /// Read all lines until EOF, without trailing newlines.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` for read failures, including invalid UTF-8.
    pub fn read_lines(&mut self) -> Result<Vec<String>, InputError> {
        let lines = (&mut self.reader)
            .lines()
            .collect::<Result<Vec<_>, _>>()?;
        Ok(lines)
    }
}

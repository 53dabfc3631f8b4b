//! File-based item source.

use crate::model::error::InputError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Read-once JSON Lines file.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    reader: BufReader<File>,
}

impl FileSource {
    /// Open `path` for reading.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    /// Returns `InputError::Io` for other I/O errors.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            reader: BufReader::new(file),
        })
    }

    /// Path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all remaining lines, without trailing newlines.
    ///
    /// A final line without a newline is included.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` for read failures.
    pub fn read_lines(&mut self) -> Result<Vec<String>, InputError> {
        let lines = (&mut self.reader)
            .lines()
            .collect::<Result<Vec<_>, _>>()?;
        Ok(lines)
    }
}

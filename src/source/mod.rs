//! Item input sources.
//!
//! Items arrive as JSON Lines, either from a file or piped on stdin. Both
//! are read once to completion; lines that fail to parse are reported and
//! skipped so one bad record never blocks a layout.

use crate::model::error::InputError;
use crate::model::{Item, ParseError};
use std::io::Stdin;
use std::path::PathBuf;
use tracing::{info, warn};

pub mod file;
pub mod stdin;

pub use file::FileSource;
pub use stdin::StdinSource;

/// Items read from a source plus the lines that were rejected.
#[derive(Debug, Default)]
pub struct LoadedItems {
    /// Successfully parsed items, in input order.
    pub items: Vec<Item>,
    /// Parse failures, in input order.
    pub errors: Vec<ParseError>,
}

/// Unified input source for JSON Lines item data.
#[derive(Debug)]
pub enum InputSource {
    /// A JSON Lines file on disk.
    File(FileSource),
    /// Piped standard input.
    Stdin(StdinSource<Stdin>),
}

impl InputSource {
    /// Read the whole source and parse every line.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` for read failures. Parse failures are
    /// returned in [`LoadedItems::errors`] instead.
    pub fn load(self) -> Result<LoadedItems, InputError> {
        let (label, lines) = match self {
            InputSource::File(mut f) => (f.path().display().to_string(), f.read_lines()?),
            InputSource::Stdin(mut s) => ("<stdin>".to_string(), s.read_lines()?),
        };
        Ok(parse_loaded(&label, lines))
    }
}

pub(crate) fn parse_loaded(label: &str, lines: Vec<String>) -> LoadedItems {
    let (items, errors) = crate::parser::parse_items(lines, 1);
    for error in &errors {
        warn!(source = label, %error, "Skipping malformed item");
    }
    info!(
        source = label,
        items = items.len(),
        rejected = errors.len(),
        "Loaded items"
    );
    LoadedItems { items, errors }
}

/// Detect and create the appropriate input source.
///
/// A file path wins; otherwise stdin is used when it is piped.
///
/// # Errors
///
/// - `InputError::FileNotFound` if the file does not exist
/// - `InputError::NoInput` if no file is given and stdin is a terminal
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    match file {
        Some(path) => Ok(InputSource::File(FileSource::new(path)?)),
        None => Ok(InputSource::Stdin(StdinSource::new()?)),
    }
}

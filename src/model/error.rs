//! Error types for masonry-grid.
//!
//! Errors are `thiserror` enums that compose via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned by the binary
//!   - [`InputError`] - Item file/stdin reading failures
//!   - [`LayoutError`] - Invalid grid configuration or estimator misuse
//!   - [`ConfigError`](crate::config::ConfigError) - Config file failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Tracing setup failures
//! - [`ParseError`] - JSON Lines item parsing failures, reported per line
//! - [`ImageError`] - Image fetch failures, handled per cell
//!
//! # Recovery Strategy
//!
//! Parse errors are **non-fatal**: malformed item lines are logged and skipped.
//! [`MeasureError`] never escapes the estimator; a failed text block degrades to
//! a height of 0 so one bad item cannot break the grid. Everything else is fatal
//! and propagates to `main`.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read items from file or stdin.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// Layout could not be computed.
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing subscriber could not be installed.
    #[error("Logging setup failed: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Writing layout output failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Errors raised by the layout core.
///
/// Both variants indicate caller bugs: configuration is validated once at
/// construction and never clamped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// Non-positive column count or width, negative spacing or insets, or a
    /// derived column width that is not positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use masonry_grid::model::error::LayoutError;
    ///
    /// let err = LayoutError::InvalidConfiguration {
    ///     reason: "column count must be at least 1".to_string(),
    /// };
    /// assert!(err.to_string().contains("column count"));
    /// ```
    #[error("Invalid grid configuration: {reason}")]
    InvalidConfiguration {
        /// Which constraint was violated.
        reason: String,
    },

    /// The height estimator was asked to measure at a non-positive width.
    #[error("Invalid measurement width: {0}")]
    InvalidWidth(f64),
}

impl LayoutError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

/// Failure reported by a text-measurement collaborator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeasureError {
    /// Font size is zero, negative or not finite.
    #[error("Invalid font size: {size}")]
    InvalidFont {
        /// The rejected point size.
        size: f64,
    },
}

/// Errors from the image loading collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    /// The image source could not produce bytes for `uri`.
    #[error("Failed to fetch image {uri}: {reason}")]
    Fetch {
        /// Requested URI.
        uri: String,
        /// Why the fetch failed.
        reason: String,
    },

    /// The request was cancelled before the load started or finished.
    #[error("Image request cancelled")]
    Cancelled,
}

/// Errors encountered when reading item input from files or stdin.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified item file does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The filesystem path that was not found.
        path: PathBuf,
    },

    /// No input source was provided - user must supply a file path, pipe stdin,
    /// or ask for demo items.
    ///
    /// # Examples
    ///
    /// ```
    /// use masonry_grid::model::error::InputError;
    ///
    /// let msg = InputError::NoInput.to_string();
    /// assert!(msg.contains("file path or pipe data to stdin"));
    /// ```
    #[error("No input source: provide a file path or pipe data to stdin")]
    NoInput,

    /// Generic I/O error reading from input source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors encountered when parsing JSON Lines item records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A line contains syntactically invalid JSON or a record of the wrong shape.
    #[error("Invalid JSON at line {line}: {message}")]
    InvalidJson {
        /// The 1-based line number where parsing failed.
        line: usize,
        /// The JSON parser error message.
        message: String,
    },

    /// A record is missing one of `title`, `description` or `image_reference`.
    #[error("Missing required field '{field}' at line {line}")]
    MissingField {
        /// The 1-based line number of the incomplete record.
        line: usize,
        /// The missing JSON key.
        field: &'static str,
    },
}

impl ParseError {
    /// The 1-based line number the error refers to.
    pub fn line(&self) -> usize {
        match self {
            ParseError::InvalidJson { line, .. } | ParseError::MissingField { line, .. } => *line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn input_error_file_not_found_display() {
        let err = InputError::FileNotFound {
            path: PathBuf::from("/tmp/missing.jsonl"),
        };
        let msg = err.to_string();
        assert!(msg.contains("File not found"));
        assert!(msg.contains("/tmp/missing.jsonl"));
    }

    #[test]
    fn input_error_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let input_err: InputError = io_err.into();
        let msg = input_err.to_string();
        assert!(msg.contains("IO error"));
        assert!(msg.contains("access denied"));
    }

    #[test]
    fn layout_error_invalid_width_display() {
        let err = LayoutError::InvalidWidth(-3.0);
        assert_eq!(err.to_string(), "Invalid measurement width: -3");
    }

    #[test]
    fn layout_error_config_helper_keeps_reason() {
        let err = LayoutError::config("spacing must be non-negative");
        assert_eq!(
            err,
            LayoutError::InvalidConfiguration {
                reason: "spacing must be non-negative".to_string()
            }
        );
    }

    #[test]
    fn image_error_fetch_display() {
        let err = ImageError::Fetch {
            uri: "https://picsum.photos/200".to_string(),
            reason: "timed out".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("https://picsum.photos/200"));
        assert!(msg.contains("timed out"));
    }

    #[test]
    fn parse_error_missing_field_display() {
        let err = ParseError::MissingField {
            line: 15,
            field: "title",
        };
        let msg = err.to_string();
        assert!(msg.contains("'title'"));
        assert!(msg.contains("line 15"));
        assert_eq!(err.line(), 15);
    }

    #[test]
    fn app_error_from_layout_error() {
        let app_err: AppError = LayoutError::InvalidWidth(0.0).into();
        let msg = app_err.to_string();
        assert!(msg.contains("Layout failed"));
        assert!(msg.contains("Invalid measurement width"));
    }

    #[test]
    fn app_error_nested_io_through_input_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let input_err: InputError = io_err.into();
        let app_err: AppError = input_err.into();
        let msg = app_err.to_string();
        assert!(msg.contains("Failed to read input"));
        assert!(msg.contains("IO error"));
    }
}

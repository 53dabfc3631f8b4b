//! JSON Lines parser for grid items.
//!
//! One item per line:
//!
//! ```json
//! {"title": "Title: 0", "description": "...", "image_reference": "https://picsum.photos/200"}
//! ```
//!
//! Parsing is pure. Bad lines become [`ParseError`]s carrying their 1-based
//! line number; they never abort a batch.

use crate::model::{Item, ParseError};
use serde::Deserialize;

/// Raw JSON structure for deserializing items.
///
/// Fields are optional here so a missing one is reported by name rather
/// than as a generic serde error.
#[derive(Debug, Deserialize)]
struct RawItem {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, alias = "imageReference", alias = "photo_url")]
    image_reference: Option<String>,
}

/// Parse a single JSON Lines record into an [`Item`].
///
/// # Errors
///
/// - `ParseError::InvalidJson` for malformed JSON or non-object records
/// - `ParseError::MissingField` when a required key is absent
///
/// # Examples
///
/// ```
/// use masonry_grid::parser::parse_item;
///
/// let item = parse_item(
///     r#"{"title":"t","description":"d","image_reference":"https://picsum.photos/200"}"#,
///     1,
/// )
/// .unwrap();
/// assert_eq!(item.title, "t");
/// ```
pub fn parse_item(raw: &str, line_number: usize) -> Result<Item, ParseError> {
    let raw_item: RawItem = serde_json::from_str(raw).map_err(|e| ParseError::InvalidJson {
        line: line_number,
        message: e.to_string(),
    })?;

    let missing = |field: &'static str| ParseError::MissingField {
        line: line_number,
        field,
    };

    Ok(Item {
        title: raw_item.title.ok_or_else(|| missing("title"))?,
        description: raw_item.description.ok_or_else(|| missing("description"))?,
        image_reference: raw_item
            .image_reference
            .ok_or_else(|| missing("image_reference"))?,
    })
}

/// Parse a batch of lines, collecting items and errors separately.
///
/// Blank lines are skipped without error. Line numbers start at
/// `starting_line_number`.
pub fn parse_items<I, S>(lines: I, starting_line_number: usize) -> (Vec<Item>, Vec<ParseError>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut items = Vec::new();
    let mut errors = Vec::new();

    for (offset, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }
        match parse_item(line, starting_line_number + offset) {
            Ok(item) => items.push(item),
            Err(err) => errors.push(err),
        }
    }

    (items, errors)
}

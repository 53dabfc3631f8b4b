//! Text measurement.
//!
//! [`TextMeasure`] is the seam to whatever text-layout engine renders the
//! cells. [`MonospaceMeasure`] is a deterministic stand-in that wraps words
//! on display columns (via `unicode-width`) with a fixed advance per column.

use crate::model::MeasureError;
use serde::{Deserialize, Serialize};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Line box height as a multiple of the font size.
const LINE_HEIGHT_FACTOR: f64 = 1.2;

/// Font weight. Only the two weights the cells use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// Body text.
    #[default]
    Regular,
    /// Headings.
    Heavy,
}

/// Font used to measure a text block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Font {
    /// Point size.
    pub size: f64,
    /// Weight.
    #[serde(default)]
    pub weight: FontWeight,
}

impl Font {
    /// Regular-weight font of the given size.
    pub fn regular(size: f64) -> Self {
        Self {
            size,
            weight: FontWeight::Regular,
        }
    }

    /// Heavy-weight font of the given size.
    pub fn heavy(size: f64) -> Self {
        Self {
            size,
            weight: FontWeight::Heavy,
        }
    }
}

/// Reports the bounding-box height of word-wrapped text.
///
/// # Contract
/// - MUST be deterministic for fixed `(text, font, max_width)`; the height
///   cache assumes it
/// - SHOULD return `Ok(0.0)` for empty text
/// - MUST be shareable across threads (heights may be estimated in parallel)
pub trait TextMeasure: Send + Sync {
    /// Height of `text` set in `font` and wrapped at `max_width`.
    fn measure(&self, text: &str, font: &Font, max_width: f64) -> Result<f64, MeasureError>;
}

/// Fixed-advance text measurement.
///
/// Every display column advances by `font.size × 0.5` (regular) or
/// `font.size × 0.55` (heavy). Wide characters count as two columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonospaceMeasure;

impl MonospaceMeasure {
    fn advance(font: &Font) -> f64 {
        let ratio = match font.weight {
            FontWeight::Regular => 0.5,
            FontWeight::Heavy => 0.55,
        };
        font.size * ratio
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure(&self, text: &str, font: &Font, max_width: f64) -> Result<f64, MeasureError> {
        if !(font.size.is_finite() && font.size > 0.0) {
            return Err(MeasureError::InvalidFont { size: font.size });
        }
        if text.is_empty() {
            return Ok(0.0);
        }

        let max_columns = ((max_width / Self::advance(font)).floor() as usize).max(1);
        let lines: usize = text
            .lines()
            .map(|paragraph| wrapped_line_count(paragraph, max_columns))
            .sum();

        Ok((lines as f64 * font.size * LINE_HEIGHT_FACTOR).ceil())
    }
}

/// Count the lines a single paragraph occupies with greedy word wrapping.
///
/// A blank paragraph still takes one line. Words wider than a line are
/// broken between characters.
fn wrapped_line_count(paragraph: &str, max_columns: usize) -> usize {
    let mut lines = 1;
    let mut used = 0;

    for word in paragraph.split_whitespace() {
        let word_columns = word.width();
        let needed = if used == 0 {
            word_columns
        } else {
            used + 1 + word_columns
        };
        if needed <= max_columns {
            used = needed;
            continue;
        }

        if used > 0 {
            lines += 1;
            used = 0;
        }
        if word_columns <= max_columns {
            used = word_columns;
            continue;
        }

        for ch in word.chars() {
            let ch_columns = ch.width().unwrap_or(0);
            if used > 0 && used + ch_columns > max_columns {
                lines += 1;
                used = 0;
            }
            used += ch_columns;
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    // 17pt regular advances 8.5 per column; 85.0 wide fits exactly 10 columns.
    const TEN_COLUMNS: f64 = 85.0;

    fn measure(text: &str, width: f64) -> f64 {
        MonospaceMeasure
            .measure(text, &Font::regular(17.0), width)
            .expect("valid font")
    }

    #[test]
    fn empty_text_has_zero_height() {
        assert_eq!(measure("", TEN_COLUMNS), 0.0);
    }

    #[test]
    fn single_line_is_one_line_box_rounded_up() {
        // 17 * 1.2 = 20.4 → 21
        assert_eq!(measure("hello", TEN_COLUMNS), 21.0);
    }

    #[test]
    fn words_wrap_at_column_limit() {
        assert_eq!(wrapped_line_count("hello world", 10), 2);
        assert_eq!(wrapped_line_count("hi there", 10), 1);
        assert_eq!(wrapped_line_count("aaaa bbbb cccc", 10), 2);
    }

    #[test]
    fn overlong_word_breaks_between_characters() {
        assert_eq!(wrapped_line_count("abcdefghijklmnopqrstuvwxy", 10), 3);
    }

    #[test]
    fn overlong_word_after_text_starts_on_new_line() {
        assert_eq!(wrapped_line_count("a abcdefghijkl", 10), 3);
    }

    #[test]
    fn hard_line_breaks_start_new_lines() {
        // two paragraphs plus a blank one in between: 3 lines → ceil(61.2)
        assert_eq!(measure("one\n\ntwo", TEN_COLUMNS), 62.0);
    }

    #[test]
    fn wide_characters_count_two_columns() {
        // five CJK characters = 10 columns, the sixth wraps
        assert_eq!(wrapped_line_count("漢字漢字漢字", 10), 2);
    }

    #[test]
    fn heavy_weight_uses_wider_advance() {
        // 10 regular columns fit in 85.0, heavy (9.35) only fits 9
        let text = "abcdefghij";
        let regular = MonospaceMeasure
            .measure(text, &Font::regular(17.0), TEN_COLUMNS)
            .unwrap();
        let heavy = MonospaceMeasure
            .measure(text, &Font::heavy(17.0), TEN_COLUMNS)
            .unwrap();
        assert_eq!(regular, 21.0);
        assert_eq!(heavy, 41.0);
    }

    #[test]
    fn narrow_width_still_makes_progress() {
        // max_width smaller than one column: one column per line
        assert_eq!(measure("abc", 1.0), 62.0);
    }

    #[test]
    fn invalid_font_size_is_an_error() {
        let err = MonospaceMeasure
            .measure("text", &Font::regular(0.0), TEN_COLUMNS)
            .unwrap_err();
        assert_eq!(err, MeasureError::InvalidFont { size: 0.0 });
    }

    #[test]
    fn measurement_is_deterministic() {
        let text = "Lorem ipsum is placeholder text commonly used in the graphic";
        assert_eq!(measure(text, 150.0), measure(text, 150.0));
    }
}

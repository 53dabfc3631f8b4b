//! JSON output.

use crate::layout::GridLayout;
use std::io::Write;

/// Write `layout` as pretty JSON followed by a newline.
///
/// # Errors
///
/// Returns any I/O error from `out`.
pub fn write_json(layout: &GridLayout, mut out: impl Write) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut out, layout)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Frame;

    #[test]
    fn writes_frames_and_content_height() {
        let layout = GridLayout {
            frames: vec![Frame::new(0.0, 0.0, 100.0, 50.0)],
            content_height: 50.0,
        };
        let mut buf = Vec::new();
        write_json(&layout, &mut buf).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["content_height"], 50.0);
        assert_eq!(value["frames"][0]["width"], 100.0);
        assert!(buf.ends_with(b"\n"));
    }

    #[test]
    fn empty_layout() {
        let mut buf = Vec::new();
        write_json(&GridLayout::default(), &mut buf).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["frames"].as_array().map(Vec::len), Some(0));
        assert_eq!(value["content_height"], 0.0);
    }
}

//! Fixed-width table output.

use crate::layout::LayoutSink;
use crate::model::{Frame, Item};
use std::fmt::Write;

/// Collects placements into a text table, one row per item.
#[derive(Debug)]
pub struct TableSink<'a> {
    items: &'a [Item],
    text: String,
}

impl<'a> TableSink<'a> {
    /// Table for `items`; titles are looked up by placement index.
    pub fn new(items: &'a [Item]) -> Self {
        let mut text = String::new();
        let _ = writeln!(
            text,
            "{:>5} {:>8} {:>8} {:>8} {:>8}  title",
            "index", "x", "y", "width", "height"
        );
        Self { items, text }
    }

    /// The rendered table.
    pub fn into_string(self) -> String {
        self.text
    }
}

impl LayoutSink for TableSink<'_> {
    fn place(&mut self, index: usize, frame: &Frame) {
        let title = self.items.get(index).map_or("", |item| item.title.as_str());
        // Writing to a String cannot fail.
        let _ = writeln!(
            self.text,
            "{:>5} {:>8.1} {:>8.1} {:>8.1} {:>8.1}  {}",
            index, frame.x, frame.y, frame.width, frame.height, title
        );
    }

    fn finish(&mut self, content_height: f64) {
        let _ = writeln!(self.text, "content height: {content_height:.1}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_rows_in_placement_order() {
        let items: Vec<Item> = (0..3)
            .map(|i| Item::new(format!("Title: {i}"), "", ""))
            .collect();
        let mut sink = TableSink::new(&items);
        sink.place(0, &Frame::new(0.0, 0.0, 150.0, 212.0));
        sink.place(1, &Frame::new(166.0, 0.0, 150.0, 134.0));
        sink.place(2, &Frame::new(166.0, 150.0, 150.0, 96.0));
        sink.finish(246.0);

        insta::assert_snapshot!(sink.into_string(), @r"
        index        x        y    width   height  title
            0      0.0      0.0    150.0    212.0  Title: 0
            1    166.0      0.0    150.0    134.0  Title: 1
            2    166.0    150.0    150.0     96.0  Title: 2
        content height: 246.0
        ");
    }

    #[test]
    fn missing_item_has_empty_title() {
        let mut sink = TableSink::new(&[]);
        sink.place(4, &Frame::new(0.0, 0.0, 1.0, 1.0));
        let text = sink.into_string();

        assert!(text.lines().nth(1).is_some_and(|row| row.ends_with("1.0  ")));
    }

    #[test]
    fn empty_layout_has_header_and_total_only() {
        let mut sink = TableSink::new(&[]);
        sink.finish(0.0);

        assert_eq!(sink.into_string().lines().count(), 2);
    }
}

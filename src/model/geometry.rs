//! Layout geometry in layout-unit coordinates.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle describing where an item is placed.
///
/// Produced once per item by the layout provider and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width (always the column width).
    pub width: f64,
    /// Height as resolved for the item.
    pub height: f64,
}

impl Frame {
    /// Create a new frame.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }
}

/// Horizontal padding subtracted from the available width.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeInsets {
    /// Padding on the leading edge.
    #[serde(default)]
    pub leading: f64,
    /// Padding on the trailing edge.
    #[serde(default)]
    pub trailing: f64,
}

impl EdgeInsets {
    /// Create insets from leading and trailing padding.
    pub fn new(leading: f64, trailing: f64) -> Self {
        Self { leading, trailing }
    }

    /// Same padding on both edges.
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value)
    }

    /// Total horizontal padding.
    pub fn horizontal(&self) -> f64 {
        self.leading + self.trailing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_edges() {
        let frame = Frame::new(166.0, 40.0, 150.0, 212.5);
        assert_eq!(frame.max_x(), 316.0);
        assert_eq!(frame.max_y(), 252.5);
    }

    #[test]
    fn insets_default_to_zero() {
        assert_eq!(EdgeInsets::default().horizontal(), 0.0);
    }

    #[test]
    fn insets_horizontal_sums_both_edges() {
        assert_eq!(EdgeInsets::new(10.0, 6.0).horizontal(), 16.0);
        assert_eq!(EdgeInsets::uniform(10.0).horizontal(), 20.0);
    }

    #[test]
    fn frame_serializes_as_flat_object() {
        let json = serde_json::to_string(&Frame::new(0.0, 1.0, 2.0, 3.0)).unwrap();
        assert_eq!(json, r#"{"x":0.0,"y":1.0,"width":2.0,"height":3.0}"#);
    }
}

//! MasonryLayoutProvider - greedy shortest-column placement
//!
//! Items are placed one at a time, in order. Each item goes to the column
//! that is currently shortest (lowest index on ties), directly below what is
//! already there. The provider is a stateful iterator: every call to
//! [`MasonryLayoutProvider::place_next`] consumes and mutates the column
//! state, so the call order must match the final item order exactly once.
//!
//! # States
//!
//! - uninitialized: no placements yet, all columns at 0
//! - accumulating: at least one placement
//!
//! There is no reset. When the width or column count changes, build a new
//! provider.

use crate::model::{EdgeInsets, Frame, LayoutError};
use tracing::{trace, warn};

/// Source of item heights at a given column width.
///
/// Implemented for `FnMut(usize, f64) -> f64` closures and [`ReplayHeights`].
pub trait HeightProvider {
    /// Height of the item at `index` when laid out `column_width` wide.
    fn height_of(&mut self, index: usize, column_width: f64) -> f64;
}

impl<F> HeightProvider for F
where
    F: FnMut(usize, f64) -> f64,
{
    fn height_of(&mut self, index: usize, column_width: f64) -> f64 {
        self(index, column_width)
    }
}

/// Heights resolved ahead of time, replayed by index.
///
/// Indices past the end of the buffer resolve to 0.
#[derive(Debug, Clone, Copy)]
pub struct ReplayHeights<'a> {
    heights: &'a [f64],
}

impl<'a> ReplayHeights<'a> {
    /// Replay `heights`, where `heights[i]` is the height of item `i`.
    pub fn new(heights: &'a [f64]) -> Self {
        Self { heights }
    }
}

impl HeightProvider for ReplayHeights<'_> {
    fn height_of(&mut self, index: usize, _column_width: f64) -> f64 {
        self.heights.get(index).copied().unwrap_or(0.0)
    }
}

/// Grid dimensions a provider is built for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    /// Number of columns (≥ 1).
    pub columns: usize,
    /// Gap between columns and between stacked items (≥ 0).
    pub inter_item_spacing: f64,
    /// Total available width, insets included (> 0).
    pub total_width: f64,
    /// Horizontal padding (≥ 0 each).
    pub content_insets: EdgeInsets,
}

impl GridGeometry {
    /// Width of one column after spacing and insets are taken out.
    ///
    /// `(total_width − (columns − 1)·spacing − leading − trailing) / columns`
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidConfiguration` if any input is out of
    /// range or the resulting width is not positive. Values are never clamped.
    ///
    /// # Examples
    ///
    /// ```
    /// use masonry_grid::layout::GridGeometry;
    /// use masonry_grid::model::EdgeInsets;
    ///
    /// let geometry = GridGeometry {
    ///     columns: 2,
    ///     inter_item_spacing: 16.0,
    ///     total_width: 336.0,
    ///     content_insets: EdgeInsets::uniform(10.0),
    /// };
    /// assert_eq!(geometry.column_width().unwrap(), 150.0);
    /// ```
    pub fn column_width(&self) -> Result<f64, LayoutError> {
        if self.columns == 0 {
            return Err(LayoutError::config("column count must be at least 1"));
        }
        if !(self.total_width.is_finite() && self.total_width > 0.0) {
            return Err(LayoutError::config(format!(
                "total width must be positive, got {}",
                self.total_width
            )));
        }
        if !(self.inter_item_spacing.is_finite() && self.inter_item_spacing >= 0.0) {
            return Err(LayoutError::config(format!(
                "inter-item spacing must be non-negative, got {}",
                self.inter_item_spacing
            )));
        }
        let EdgeInsets { leading, trailing } = self.content_insets;
        if !(leading.is_finite() && leading >= 0.0 && trailing.is_finite() && trailing >= 0.0) {
            return Err(LayoutError::config(format!(
                "content insets must be non-negative, got leading {leading} trailing {trailing}"
            )));
        }

        let columns = self.columns as f64;
        let gutters = (columns - 1.0) * self.inter_item_spacing;
        let width = (self.total_width - gutters - self.content_insets.horizontal()) / columns;
        if width <= 0.0 {
            return Err(LayoutError::config(format!(
                "column width must be positive, got {width} for total width {}",
                self.total_width
            )));
        }
        Ok(width)
    }
}

/// Greedy bin-packing of a sequential item stream into columns.
///
/// # Invariants
/// - `column_heights.len() == columns >= 1`
/// - every column height is ≥ 0
/// - a frame's `y` is the rounded pre-placement height of its column
#[derive(Debug)]
pub struct MasonryLayoutProvider<H> {
    column_heights: Vec<f64>,
    column_width: f64,
    inter_item_spacing: f64,
    content_insets: EdgeInsets,
    heights: H,
    placed: usize,
}

impl<H: HeightProvider> MasonryLayoutProvider<H> {
    /// Create a provider with all columns at height 0.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidConfiguration` if `geometry` is invalid
    /// (see [`GridGeometry::column_width`]).
    pub fn new(geometry: GridGeometry, heights: H) -> Result<Self, LayoutError> {
        let column_width = geometry.column_width()?;
        Ok(Self {
            column_heights: vec![0.0; geometry.columns],
            column_width,
            inter_item_spacing: geometry.inter_item_spacing,
            content_insets: geometry.content_insets,
            heights,
            placed: 0,
        })
    }

    /// Width every placed frame gets.
    pub fn column_width(&self) -> f64 {
        self.column_width
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.column_heights.len()
    }

    /// Padding the grid was built with.
    pub fn content_insets(&self) -> EdgeInsets {
        self.content_insets
    }

    /// Current cumulative height of each column, spacing included.
    pub fn column_heights(&self) -> &[f64] {
        &self.column_heights
    }

    /// Number of items placed so far.
    pub fn placed_count(&self) -> usize {
        self.placed
    }

    /// Place the item at `index` and return its frame.
    ///
    /// 1. pick the shortest column (lowest index on ties)
    /// 2. resolve the height at the column width
    /// 3. `y` = that column's height, rounded to whole units
    /// 4. `x` = `(column_width + spacing) × column`
    /// 5. the column grows to `y + height + spacing`
    ///
    /// A negative or non-finite height is replaced by 0 so one bad item
    /// cannot corrupt the column state.
    pub fn place_next(&mut self, index: usize) -> Frame {
        let column = self.shortest_column();
        let height = sanitize_height(self.heights.height_of(index, self.column_width), index);

        let y = self.column_heights[column].round();
        let x = (self.column_width + self.inter_item_spacing) * column as f64;
        self.column_heights[column] = y + height + self.inter_item_spacing;
        self.placed += 1;

        trace!(index, column, x, y, height, "Placed item");
        Frame::new(x, y, self.column_width, height)
    }

    /// Place every index from `indices` in order.
    pub fn place_all(&mut self, indices: impl IntoIterator<Item = usize>) -> Vec<Frame> {
        indices
            .into_iter()
            .map(|index| self.place_next(index))
            .collect()
    }

    /// Height of the tallest column; 0 before any placement.
    ///
    /// Used to size the grid container.
    pub fn max_column_height(&self) -> f64 {
        self.column_heights.iter().copied().fold(0.0, f64::max)
    }

    /// Give back the height provider.
    pub fn into_heights(self) -> H {
        self.heights
    }

    fn shortest_column(&self) -> usize {
        let mut shortest = 0;
        for (column, &height) in self.column_heights.iter().enumerate().skip(1) {
            if height < self.column_heights[shortest] {
                shortest = column;
            }
        }
        shortest
    }
}

fn sanitize_height(height: f64, index: usize) -> f64 {
    if height.is_finite() && height >= 0.0 {
        height
    } else {
        warn!(index, height, "Unusable item height, placing with height 0");
        0.0
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;

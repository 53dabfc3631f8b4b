//! LayoutOrchestrator - one layout pass end to end
//!
//! For each item, in order: resolve a height (cache, then estimator), hand
//! it to a fresh [`MasonryLayoutProvider`], forward the frame to the
//! rendering layer. The cache is invalidated whenever [`LayoutParams`]
//! differ from the previous pass, so a height measured at one column width
//! is never reused at another.

use super::cache::HeightCache;
use super::cancel::CancellationToken;
use super::estimator::HeightEstimator;
use super::measure::TextMeasure;
use super::params::LayoutParams;
use super::provider::{GridGeometry, MasonryLayoutProvider, ReplayHeights};
use crate::model::{EdgeInsets, Frame, Item, LayoutError};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

/// Rendering layer collaborator.
///
/// Receives every frame in item order, then the total content height.
pub trait LayoutSink {
    /// Position the cell for item `index`.
    fn place(&mut self, index: usize, frame: &Frame);

    /// All frames were delivered; size the container to `content_height`.
    fn finish(&mut self, content_height: f64);
}

/// Grid settings that stay fixed across passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Number of columns.
    pub columns: usize,
    /// Gap between columns and between stacked items.
    pub inter_item_spacing: f64,
    /// Horizontal padding.
    pub content_insets: EdgeInsets,
}

impl GridConfig {
    /// Geometry for a pass at `total_width`.
    pub fn geometry(&self, total_width: f64) -> GridGeometry {
        GridGeometry {
            columns: self.columns,
            inter_item_spacing: self.inter_item_spacing,
            total_width,
            content_insets: self.content_insets,
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: 2,
            inter_item_spacing: 16.0,
            content_insets: EdgeInsets::uniform(10.0),
        }
    }
}

/// Result of a layout pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GridLayout {
    /// One frame per item, in item order.
    pub frames: Vec<Frame>,
    /// Height of the tallest column.
    pub content_height: f64,
}

impl GridLayout {
    /// Deliver this layout's frames and content height to `sink`.
    pub fn replay_into<S: LayoutSink>(&self, sink: &mut S) {
        for (index, frame) in self.frames.iter().enumerate() {
            sink.place(index, frame);
        }
        sink.finish(self.content_height);
    }
}

impl LayoutSink for GridLayout {
    fn place(&mut self, _index: usize, frame: &Frame) {
        self.frames.push(*frame);
    }

    fn finish(&mut self, content_height: f64) {
        self.content_height = content_height;
    }
}

/// Outcome of a cancellable pass.
#[derive(Debug, Clone, PartialEq)]
pub enum PassOutcome {
    /// The pass ran to completion.
    Completed(GridLayout),
    /// The token was cancelled; nothing was applied.
    Superseded,
}

/// Drives layout passes over an item list.
#[derive(Debug)]
pub struct LayoutOrchestrator<M> {
    config: GridConfig,
    estimator: HeightEstimator<M>,
    cache: HeightCache,
    last_params: Option<LayoutParams>,
}

impl<M: TextMeasure> LayoutOrchestrator<M> {
    /// Create an orchestrator with an empty height cache.
    pub fn new(config: GridConfig, estimator: HeightEstimator<M>) -> Self {
        Self {
            config,
            estimator,
            cache: HeightCache::new(),
            last_params: None,
        }
    }

    /// Grid settings in use.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Replace grid settings. Cached heights are dropped on the next pass if
    /// the column width changes.
    pub fn set_config(&mut self, config: GridConfig) {
        if config.inter_item_spacing != self.config.inter_item_spacing
            || config.content_insets != self.config.content_insets
        {
            // column width changes even when LayoutParams do not
            self.last_params = None;
        }
        self.config = config;
    }

    /// Height cache contents.
    pub fn cache(&self) -> &HeightCache {
        &self.cache
    }

    /// Lay out `items` at `total_width`.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidConfiguration` if the grid does not fit
    /// `total_width`.
    pub fn layout(&mut self, items: &[Item], total_width: f64) -> Result<GridLayout, LayoutError> {
        let geometry = self.prepare_pass(total_width)?;

        let estimator = &self.estimator;
        let cache = &mut self.cache;
        let mut failure = None;
        let heights = |index: usize, column_width: f64| {
            if let Some(height) = cache.get_at(index, column_width) {
                return height;
            }
            match estimator.estimate(&items[index], column_width) {
                Ok(height) => {
                    cache.put(index, column_width, height);
                    height
                }
                Err(err) => {
                    failure.get_or_insert(err);
                    0.0
                }
            }
        };

        let mut provider = MasonryLayoutProvider::new(geometry, heights)?;
        let mut layout = GridLayout::default();
        for index in 0..items.len() {
            let frame = provider.place_next(index);
            layout.place(index, &frame);
        }
        let content_height = provider.max_column_height();
        drop(provider);

        if let Some(err) = failure {
            return Err(err);
        }
        layout.finish(content_height);
        debug!(
            items = items.len(),
            content_height,
            cached = self.cache.len(),
            "Layout pass complete"
        );
        Ok(layout)
    }

    /// Lay out `items` at `total_width`, forwarding frames to `sink`.
    ///
    /// The whole pass completes before the first frame is forwarded, so a
    /// failed pass leaves `sink` untouched.
    ///
    /// # Errors
    ///
    /// Same as [`layout`](Self::layout).
    pub fn layout_into<S: LayoutSink>(
        &mut self,
        items: &[Item],
        total_width: f64,
        sink: &mut S,
    ) -> Result<(), LayoutError> {
        self.layout(items, total_width)?.replay_into(sink);
        Ok(())
    }

    /// Lay out `items` with heights estimated in parallel.
    ///
    /// Missing heights are estimated concurrently into an ordered buffer,
    /// which is then replayed through a fresh provider in item order. If
    /// `token` is cancelled before the results are applied, the pass
    /// returns [`PassOutcome::Superseded`] and leaves the cache untouched.
    ///
    /// # Errors
    ///
    /// Same as [`layout`](Self::layout).
    pub fn layout_concurrent(
        &mut self,
        items: &[Item],
        total_width: f64,
        token: &CancellationToken,
    ) -> Result<PassOutcome, LayoutError> {
        let geometry = self.prepare_pass(total_width)?;
        let column_width = geometry.column_width()?;

        let estimator = &self.estimator;
        let cache = &self.cache;
        let resolved: Option<Result<Vec<(f64, bool)>, LayoutError>> = items
            .par_iter()
            .enumerate()
            .map(|(index, item)| {
                if token.is_cancelled() {
                    return None;
                }
                let resolved = match cache.get_at(index, column_width) {
                    Some(height) => Ok((height, false)),
                    None => estimator
                        .estimate(item, column_width)
                        .map(|height| (height, true)),
                };
                Some(resolved)
            })
            .collect();

        let Some(resolved) = resolved else {
            debug!(items = items.len(), "Layout pass superseded during estimation");
            return Ok(PassOutcome::Superseded);
        };
        let resolved = resolved?;
        if token.is_cancelled() {
            debug!(items = items.len(), "Layout pass superseded before replay");
            return Ok(PassOutcome::Superseded);
        }

        let mut heights = Vec::with_capacity(resolved.len());
        for (index, (height, fresh)) in resolved.into_iter().enumerate() {
            if fresh {
                self.cache.put(index, column_width, height);
            }
            heights.push(height);
        }

        let mut provider = MasonryLayoutProvider::new(geometry, ReplayHeights::new(&heights))?;
        let mut layout = GridLayout::default();
        for index in 0..items.len() {
            let frame = provider.place_next(index);
            layout.place(index, &frame);
        }
        layout.finish(provider.max_column_height());

        debug!(
            items = items.len(),
            content_height = layout.content_height,
            "Concurrent layout pass complete"
        );
        Ok(PassOutcome::Completed(layout))
    }

    /// Validate the grid at `total_width` and drop cached heights if the
    /// layout parameters changed since the previous pass.
    fn prepare_pass(&mut self, total_width: f64) -> Result<GridGeometry, LayoutError> {
        let geometry = self.config.geometry(total_width);
        let column_width = geometry.column_width()?;

        let params = LayoutParams::new(total_width, self.config.columns);
        if self.last_params != Some(params) {
            if !self.cache.is_empty() {
                debug!(
                    ?params,
                    previous = ?self.last_params,
                    dropped = self.cache.len(),
                    "Layout parameters changed, invalidating height cache"
                );
            }
            self.cache.invalidate_all();
            self.last_params = Some(params);
        }

        debug!(
            items_cached = self.cache.len(),
            columns = self.config.columns,
            column_width,
            "Starting layout pass"
        );
        Ok(geometry)
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;

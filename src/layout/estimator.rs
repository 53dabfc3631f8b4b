//! Item height estimation.
//!
//! This is THE canonical height calculation. Placement never renders a cell;
//! it asks the estimator how tall the cell would be at a column width.
//!
//! A cell is an image on top of two wrapped text blocks:
//!
//! ```text
//! height = width × image_aspect_ratio
//!        + measure(title, title_font, width)
//!        + measure(description, description_font, width)
//! ```

use super::measure::{Font, MonospaceMeasure, TextMeasure};
use crate::model::{Item, LayoutError};
use tracing::warn;

/// Policy constants for estimating a cell's height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatorConfig {
    /// Image height as a fraction of the column width.
    pub image_aspect_ratio: f64,
    /// Font of the title block.
    pub title_font: Font,
    /// Font of the description block.
    pub description_font: Font,
}

impl EstimatorConfig {
    /// Check the policy constants.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidConfiguration` if `image_aspect_ratio` is
    /// negative or not finite.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !(self.image_aspect_ratio.is_finite() && self.image_aspect_ratio >= 0.0) {
            return Err(LayoutError::config(format!(
                "image aspect ratio must be finite and non-negative, got {}",
                self.image_aspect_ratio
            )));
        }
        Ok(())
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            image_aspect_ratio: 0.75,
            title_font: Font::heavy(17.0),
            description_font: Font::regular(17.0),
        }
    }
}

/// Computes an item's rendered height at a given width.
#[derive(Debug, Clone)]
pub struct HeightEstimator<M> {
    config: EstimatorConfig,
    measure: M,
}

impl<M: TextMeasure> HeightEstimator<M> {
    /// Create an estimator over a text-measurement collaborator.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidConfiguration` when `config` fails
    /// [`EstimatorConfig::validate`]. Values are never clamped.
    pub fn new(config: EstimatorConfig, measure: M) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self { config, measure })
    }

    /// Policy constants in use.
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Estimate the rendered height of `item` at `width`.
    ///
    /// # Contract
    /// - MUST be deterministic (same inputs → same output)
    /// - Empty title or description contributes 0
    /// - A failed text measurement contributes 0 and is logged
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidWidth` when `width` is not a positive,
    /// finite number.
    ///
    /// # Examples
    ///
    /// ```
    /// use masonry_grid::layout::{HeightEstimator, MonospaceMeasure};
    /// use masonry_grid::model::Item;
    ///
    /// let estimator = HeightEstimator::<MonospaceMeasure>::default();
    /// let item = Item::new("", "", "https://example.com/a.png");
    /// assert_eq!(estimator.estimate(&item, 200.0).unwrap(), 150.0);
    /// assert!(estimator.estimate(&item, 0.0).is_err());
    /// ```
    pub fn estimate(&self, item: &Item, width: f64) -> Result<f64, LayoutError> {
        if !(width.is_finite() && width > 0.0) {
            return Err(LayoutError::InvalidWidth(width));
        }

        let image = width * self.config.image_aspect_ratio;
        let title = self.text_block(&item.title, &self.config.title_font, width);
        let description =
            self.text_block(&item.description, &self.config.description_font, width);

        Ok(image + title + description)
    }

    fn text_block(&self, text: &str, font: &Font, width: f64) -> f64 {
        if text.is_empty() {
            return 0.0;
        }
        match self.measure.measure(text, font, width) {
            Ok(height) if height.is_finite() && height >= 0.0 => height,
            Ok(height) => {
                warn!(height, "Text measurement returned an unusable height, using 0");
                0.0
            }
            Err(err) => {
                warn!(error = %err, "Text measurement failed, using 0");
                0.0
            }
        }
    }
}

impl Default for HeightEstimator<MonospaceMeasure> {
    fn default() -> Self {
        Self {
            config: EstimatorConfig::default(),
            measure: MonospaceMeasure,
        }
    }
}

//! Layout core - masonry placement and the height pipeline that feeds it
//!
//! # Module Structure
//!
//! - `params`: LayoutParams - global parameters whose change forces relayout
//! - `cache`: HeightCache - item index → measured height memo
//! - `measure`: TextMeasure - wrapped text height collaborator + monospace reference
//! - `estimator`: HeightEstimator - item content → rendered height
//! - `provider`: MasonryLayoutProvider - greedy shortest-column placement
//! - `cancel`: CancellationToken - discard superseded work
//! - `orchestrator`: LayoutOrchestrator - one layout pass end to end

pub mod cache;
pub mod cancel;
pub mod estimator;
pub mod measure;
pub mod orchestrator;
pub mod params;
pub mod provider;

pub use cache::{HeightCache, HeightCacheEntry};
pub use cancel::CancellationToken;
pub use estimator::{EstimatorConfig, HeightEstimator};
pub use measure::{Font, FontWeight, MonospaceMeasure, TextMeasure};
pub use orchestrator::{GridConfig, GridLayout, LayoutOrchestrator, LayoutSink, PassOutcome};
pub use params::LayoutParams;
pub use provider::{GridGeometry, HeightProvider, MasonryLayoutProvider, ReplayHeights};

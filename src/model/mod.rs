//! Domain model types (pure).
//!
//! All types in this module are pure data.

pub mod error;
pub mod geometry;
pub mod item;

// Re-export for convenience
pub use error::{AppError, ImageError, InputError, LayoutError, MeasureError, ParseError};
pub use geometry::{EdgeInsets, Frame};
pub use item::Item;

//! Image loading collaborator.
//!
//! Independent from layout: loads run on any thread, in any order, and never
//! block placement. Two pieces keep them safe with recycled cells:
//!
//! - `cache`: ResponseCache - in-process response cache keyed by URI
//! - `loader`: ImageSource + CachedImageLoader - fetch through the cache
//! - `slot`: ImageSlot - a cell's image, applied only while its request is live
//!
//! The response cache is keyed by URI and is unrelated to the layout height
//! cache, which is keyed by item index.

pub mod cache;
pub mod loader;
pub mod slot;

pub use cache::ResponseCache;
pub use loader::{CachedImageLoader, ImageSource};
pub use slot::{ImageRequest, ImageSlot};

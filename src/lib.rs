//! Masonry grid layout.
//!
//! Places variable-height items into a fixed number of equal-width columns,
//! always appending to the currently shortest column. Heights come from a
//! [`layout::HeightEstimator`] and are cached per item until the layout
//! parameters change.
//!
//! Pure layout core (`layout`, `model`, `parser`) with an impure shell
//! around it (`source`, `output`, `config`, `logging`, `image`).

pub mod config;
pub mod image;
pub mod layout;
pub mod logging;
pub mod model;
pub mod output;
pub mod parser;
pub mod source;

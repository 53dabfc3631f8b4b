//! Rendering finished layouts for the command line.
//!
//! - `json`: the whole [`GridLayout`](crate::layout::GridLayout) as pretty JSON
//! - `table`: [`TableSink`], a [`LayoutSink`](crate::layout::LayoutSink)
//!   producing one aligned row per placed item

pub mod json;
pub mod table;

pub use json::write_json;
pub use table::TableSink;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON object with `frames` and `content_height`.
    #[default]
    Json,
    /// Fixed-width text table.
    Table,
}

//! masonry-grid - Entry Point

use clap::Parser;
use masonry_grid::layout::{
    CancellationToken, GridLayout, HeightEstimator, LayoutOrchestrator, MonospaceMeasure,
    PassOutcome,
};
use masonry_grid::model::{AppError, Item};
use masonry_grid::output::{write_json, OutputFormat, TableSink};
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

/// masonry-grid - lay out items in a shortest-column-first masonry grid
#[derive(Parser, Debug)]
#[command(name = "masonry-grid")]
#[command(version)]
#[command(about = "Compute masonry grid frames for JSON Lines items")]
pub struct Args {
    /// Path to JSON Lines item file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Total container width in points
    #[arg(short, long, default_value_t = 375.0)]
    pub width: f64,

    /// Number of columns (overrides config and environment)
    #[arg(short, long)]
    pub columns: Option<usize>,

    /// Spacing between items (overrides config and environment)
    #[arg(short, long)]
    pub spacing: Option<f64>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Lay out COUNT generated sample items instead of reading input
    #[arg(long, value_name = "COUNT", conflicts_with = "file")]
    pub demo: Option<usize>,

    /// Estimate item heights on a thread pool
    #[arg(long)]
    pub parallel: bool,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = masonry_grid::config::load_config_with_precedence(args.config.clone())?;
        let merged = masonry_grid::config::merge_config(config_file);
        let with_env = masonry_grid::config::apply_env_overrides(merged);
        masonry_grid::config::apply_cli_overrides(with_env, args.columns, args.spacing)
    };

    masonry_grid::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");
    for (variable, value) in masonry_grid::config::invalid_env_overrides() {
        warn!(variable, value = %value, "Ignoring unparseable environment override");
        eprintln!("masonry-grid: ignoring {variable}={value:?}, not a number");
    }

    let items = load_items(&args)?;

    let estimator = HeightEstimator::new(config.estimator_config(), MonospaceMeasure)?;
    let mut orchestrator = LayoutOrchestrator::new(config.grid_config(), estimator);

    let layout = if args.parallel {
        match orchestrator.layout_concurrent(&items, args.width, &CancellationToken::new())? {
            PassOutcome::Completed(layout) => layout,
            PassOutcome::Superseded => GridLayout::default(),
        }
    } else {
        orchestrator.layout(&items, args.width)?
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Json => write_json(&layout, &mut out)?,
        OutputFormat::Table => {
            let mut sink = TableSink::new(&items);
            layout.replay_into(&mut sink);
            out.write_all(sink.into_string().as_bytes())?;
        }
    }
    out.flush()?;

    Ok(())
}

/// Items from `--demo`, the input file, or piped stdin.
fn load_items(args: &Args) -> Result<Vec<Item>, AppError> {
    if let Some(count) = args.demo {
        return Ok(Item::sample(count));
    }

    let source = masonry_grid::source::detect_input_source(args.file.clone())?;
    let loaded = source.load()?;
    if !loaded.errors.is_empty() {
        warn!(rejected = loaded.errors.len(), "Some input lines were skipped");
        eprintln!(
            "masonry-grid: skipped {} malformed line(s), see log for details",
            loaded.errors.len()
        );
    }
    Ok(loaded.items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let err = Args::try_parse_from(["masonry-grid", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let err = Args::try_parse_from(["masonry-grid", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["masonry-grid"]);
        assert_eq!(args.file, None);
        assert_eq!(args.width, 375.0);
        assert_eq!(args.columns, None);
        assert_eq!(args.spacing, None);
        assert_eq!(args.config, None);
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.demo, None);
        assert!(!args.parallel);
    }

    #[test]
    fn test_file_path_populates_file_field() {
        let args = Args::parse_from(["masonry-grid", "items.jsonl"]);
        assert_eq!(args.file, Some(PathBuf::from("items.jsonl")));
    }

    #[test]
    fn test_grid_flags() {
        let args = Args::parse_from([
            "masonry-grid",
            "--width",
            "336",
            "-c",
            "3",
            "--spacing",
            "8",
            "--format",
            "table",
        ]);
        assert_eq!(args.width, 336.0);
        assert_eq!(args.columns, Some(3));
        assert_eq!(args.spacing, Some(8.0));
        assert_eq!(args.format, OutputFormat::Table);
    }

    #[test]
    fn test_format_invalid_rejects() {
        let err = Args::try_parse_from(["masonry-grid", "--format", "yaml"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn test_demo_conflicts_with_file() {
        let err = Args::try_parse_from(["masonry-grid", "items.jsonl", "--demo", "4"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_demo_items_are_loaded_without_input() {
        let args = Args::parse_from(["masonry-grid", "--demo", "4"]);
        let items = load_items(&args).unwrap();
        assert_eq!(items, Item::sample(4));
    }

    #[test]
    fn test_cli_columns_flow_through_config_precedence_chain() {
        use masonry_grid::config::{apply_cli_overrides, merge_config, ConfigFile};

        let config_file = ConfigFile {
            columns: Some(3),
            ..ConfigFile::default()
        };
        let merged = merge_config(Some(config_file));
        assert_eq!(merged.columns, 3, "Config file should override default");

        let args = Args::parse_from(["masonry-grid", "--columns", "4"]);
        let with_cli = apply_cli_overrides(merged, args.columns, args.spacing);
        assert_eq!(with_cli.columns, 4, "CLI should override all other sources");
        assert_eq!(with_cli.grid_config().columns, 4);
    }
}

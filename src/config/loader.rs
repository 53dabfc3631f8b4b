//! Configuration file loading with precedence handling.

use crate::layout::{EstimatorConfig, Font, GridConfig};
use crate::model::EdgeInsets;
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "MASONRY_GRID_CONFIG";
/// Environment variable overriding the column count.
pub const COLUMNS_ENV: &str = "MASONRY_GRID_COLUMNS";
/// Environment variable overriding the inter-item spacing.
pub const SPACING_ENV: &str = "MASONRY_GRID_SPACING";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, defaults are used.
/// Corresponds to `~/.config/masonry-grid/config.toml`:
///
/// ```toml
/// columns = 3
/// inter_item_spacing = 12.0
/// image_aspect_ratio = 0.75
///
/// [content_insets]
/// leading = 10.0
/// trailing = 10.0
///
/// [title_font]
/// size = 17.0
/// weight = "heavy"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Number of grid columns.
    #[serde(default)]
    pub columns: Option<usize>,

    /// Vertical and horizontal gap between items.
    #[serde(default)]
    pub inter_item_spacing: Option<f64>,

    /// Horizontal insets of the grid content.
    #[serde(default)]
    pub content_insets: Option<EdgeInsets>,

    /// Image height as a fraction of the column width.
    #[serde(default)]
    pub image_aspect_ratio: Option<f64>,

    /// Font used to measure item titles.
    #[serde(default)]
    pub title_font: Option<Font>,

    /// Font used to measure item descriptions.
    #[serde(default)]
    pub description_font: Option<Font>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Number of grid columns.
    pub columns: usize,
    /// Gap between items.
    pub inter_item_spacing: f64,
    /// Horizontal content insets.
    pub content_insets: EdgeInsets,
    /// Image height over column width.
    pub image_aspect_ratio: f64,
    /// Title font.
    pub title_font: Font,
    /// Description font.
    pub description_font: Font,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        let grid = GridConfig::default();
        let estimator = EstimatorConfig::default();
        Self {
            columns: grid.columns,
            inter_item_spacing: grid.inter_item_spacing,
            content_insets: grid.content_insets,
            image_aspect_ratio: estimator.image_aspect_ratio,
            title_font: estimator.title_font,
            description_font: estimator.description_font,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Grid geometry settings for the orchestrator.
    pub fn grid_config(&self) -> GridConfig {
        GridConfig {
            columns: self.columns,
            inter_item_spacing: self.inter_item_spacing,
            content_insets: self.content_insets,
        }
    }

    /// Height estimation settings.
    pub fn estimator_config(&self) -> EstimatorConfig {
        EstimatorConfig {
            image_aspect_ratio: self.image_aspect_ratio,
            title_font: self.title_font,
            description_font: self.description_font,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/masonry-grid/masonry-grid.log` on Linux, or the
/// platform equivalent. Falls back to the current directory when no state
/// directory is known.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("masonry-grid").join("masonry-grid.log")
    } else {
        PathBuf::from("masonry-grid.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/masonry-grid/config.toml` on Linux, the platform
/// equivalent elsewhere, or `None` when no config directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("masonry-grid").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `MASONRY_GRID_CONFIG` environment variable
/// 3. Default path `~/.config/masonry-grid/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed,
/// or if `MASONRY_GRID_CONFIG` is not valid UTF-8.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    match std::env::var(CONFIG_ENV) {
        Ok(env_path) => return load_config_file(PathBuf::from(env_path)),
        Err(std::env::VarError::NotUnicode(raw)) => {
            return Err(ConfigError::InvalidPath(raw.to_string_lossy().into_owned()));
        }
        Err(std::env::VarError::NotPresent) => {}
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Read a numeric environment override. `None` when unset, `Err` with the
/// raw value when it does not parse.
fn parse_env<T: FromStr>(name: &str) -> Option<Result<T, String>> {
    let raw = std::env::var(name).ok()?;
    Some(raw.trim().parse().map_err(|_| raw))
}

fn env_override<T: FromStr>(name: &str) -> Option<T> {
    parse_env(name)?.ok()
}

/// Environment overrides that are set but unparseable, as
/// `(variable, raw value)` pairs.
///
/// [`apply_env_overrides`] ignores these silently since it runs before the
/// log subscriber exists. Call this once logging is up to report them.
pub fn invalid_env_overrides() -> Vec<(&'static str, String)> {
    let mut invalid = Vec::new();
    if let Some(Err(raw)) = parse_env::<usize>(COLUMNS_ENV) {
        invalid.push((COLUMNS_ENV, raw));
    }
    if let Some(Err(raw)) = parse_env::<f64>(SPACING_ENV) {
        invalid.push((SPACING_ENV, raw));
    }
    invalid
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `MASONRY_GRID_COLUMNS`: column count
/// - `MASONRY_GRID_SPACING`: inter-item spacing
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(columns) = env_override(COLUMNS_ENV) {
        config.columns = columns;
    }
    if let Some(spacing) = env_override(SPACING_ENV) {
        config.inter_item_spacing = spacing;
    }
    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        columns: config.columns.unwrap_or(defaults.columns),
        inter_item_spacing: config
            .inter_item_spacing
            .unwrap_or(defaults.inter_item_spacing),
        content_insets: config.content_insets.unwrap_or(defaults.content_insets),
        image_aspect_ratio: config
            .image_aspect_ratio
            .unwrap_or(defaults.image_aspect_ratio),
        title_font: config.title_font.unwrap_or(defaults.title_font),
        description_font: config.description_font.unwrap_or(defaults.description_font),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// Only flags the user actually passed are applied.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    columns_override: Option<usize>,
    spacing_override: Option<f64>,
) -> ResolvedConfig {
    if let Some(columns) = columns_override {
        config.columns = columns;
    }
    if let Some(spacing) = spacing_override {
        config.inter_item_spacing = spacing;
    }
    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

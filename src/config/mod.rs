//! Configuration module.
//!
//! Settings resolve in four layers, lowest to highest precedence:
//! built-in defaults, the TOML config file, environment variables, and CLI
//! flags. See [`loader`] for each step.

pub mod loader;

pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    invalid_env_overrides, load_config_file, load_config_with_precedence, merge_config,
    ConfigError, ConfigFile, ResolvedConfig,
};

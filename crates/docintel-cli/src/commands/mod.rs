//! Subcommand implementations.

pub mod analyze;
pub mod batch;
pub mod config;
pub mod extract;
pub mod output;

use std::path::{Path, PathBuf};

use docintel_core::DocIntelConfig;

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("docintel")
        .join("config.json")
}

/// Resolve the configuration file path from the `--config` flag.
pub fn config_path(config_path: Option<&str>) -> PathBuf {
    config_path
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path)
}

/// Load configuration. An explicit path must exist; the default one may not.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<DocIntelConfig> {
    let config = match config_path {
        Some(path) => DocIntelConfig::from_file(Path::new(path))?,
        None => DocIntelConfig::load_or_default(&default_config_path())?,
    };
    Ok(config)
}

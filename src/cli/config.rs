//! Configuration file loading for the CLI.
//!
//! Search order:
//! 1. Explicit `--config` path
//! 2. `scs.toml` in the working directory
//! 3. Built-in defaults

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::config::ParserConfig;

const LOCAL_CONFIG: &str = "scs.toml";

/// Find and load the parser configuration.
///
/// # Errors
///
/// Fails when an explicit path cannot be read or any found file is not a
/// valid configuration.
pub fn load_config(explicit_path: Option<&Path>) -> anyhow::Result<ParserConfig> {
    if let Some(path) = explicit_path {
        tracing::info!(path = %path.display(), "Loading configuration from explicit path");
        return load_config_file(path);
    }
    let local = Path::new(LOCAL_CONFIG);
    if local.exists() {
        tracing::info!(path = %local.display(), "Loading configuration from local path");
        return load_config_file(local);
    }
    tracing::debug!("No configuration file found, using defaults");
    Ok(ParserConfig::default())
}

fn load_config_file(path: &Path) -> anyhow::Result<ParserConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Unable to read configuration file {}", path.display()))?;
    parse_config(&content)
        .with_context(|| format!("Invalid configuration file {}", path.display()))
}

fn parse_config(content: &str) -> anyhow::Result<ParserConfig> {
    Ok(toml::from_str(content)?)
}

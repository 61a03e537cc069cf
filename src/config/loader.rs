//! Configuration loading.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::ConfConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Decode a JSON configuration document. Stops at the first bad field.
pub fn load_str(content: &str) -> Result<ConfConfig, ConfigError> {
    Ok(serde_json::from_str(content)?)
}

/// Load and decode a JSON configuration file.
pub fn load_config(path: &Path) -> Result<ConfConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = load_str(&content)?;

    tracing::debug!(
        path = %path.display(),
        inbounds = config.inbounds.len(),
        outbounds = config.outbounds.len(),
        "Configuration decoded"
    );
    Ok(config)
}

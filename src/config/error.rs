//! Configuration loading errors.

use thiserror::Error;

/// Errors that can occur while loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document was not valid JSON or did not match the expected shape
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// Reading the configuration source failed
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

//! Configuration errors
//!
//! Everything that can go wrong before a run starts: reject-word files and
//! the configuration file itself. These are fatal to the run that needs them.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for configuration loading
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Errors raised while loading configuration or reject lists
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configured reject-word file does not exist
    #[error("reject word file '{}' does not exist", path.display())]
    MissingRejectFile {
        /// Path that was looked up
        path: PathBuf,
    },

    /// A file exists but could not be read
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`MatchConfig`](crate::MatchConfig)
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is syntactically valid but out of range
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue {
        /// Offending field
        field: String,
        /// What is wrong with it
        reason: String,
    },
}

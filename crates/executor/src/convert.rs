//! Error conversion from lower-layer error types.
//!
//! Config and I/O failures keep their message; algebra errors only arise
//! from a broken matrix invariant and map to [`Error::Internal`].

use conceptmatch_core::ConfigError;
use conceptmatch_engine::AlgebraError;

use crate::{Error, Result};

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::Configuration {
            reason: err.to_string(),
        }
    }
}

impl From<AlgebraError> for Error {
    fn from(err: AlgebraError) -> Self {
        Error::Internal {
            reason: format!("matrix algebra failed: {}", err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Configuration {
            reason: format!("invalid project snapshot: {}", err),
        }
    }
}

/// Convert a lower-layer result into an executor result.
pub fn convert_result<T, E: Into<Error>>(r: std::result::Result<T, E>) -> Result<T> {
    r.map_err(Into::into)
}

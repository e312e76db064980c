//! Executor error type

use conceptmatch_core::ProjectId;
use thiserror::Error;

/// Errors surfaced by command execution.
///
/// Configuration problems are raised before any stem tree is replaced.
#[derive(Debug, Error)]
pub enum Error {
    /// Reject lists or config file could not be loaded
    #[error("configuration error: {reason}")]
    Configuration {
        /// What went wrong
        reason: String,
    },

    /// The persistence layer has no such project
    #[error("project not found: {project}")]
    ProjectNotFound {
        /// Requested project
        project: ProjectId,
    },

    /// The matcher needs a threshold and none was given or configured
    #[error("matcher '{matcher}' requires a threshold")]
    ThresholdRequired {
        /// Matcher name
        matcher: String,
    },

    /// A threshold outside [0, 1] or not a number
    #[error("invalid threshold {value} for matcher '{matcher}', expected a value in [0, 1]")]
    InvalidThreshold {
        /// Matcher name
        matcher: String,
        /// Rejected value
        value: f64,
    },

    /// Matching was requested before stem trees were built
    #[error("stem trees missing for {project}, rebuild them first")]
    StemTreesMissing {
        /// Project without trees
        project: ProjectId,
    },

    /// Reading or writing a file failed
    #[error("I/O error: {reason}")]
    Io {
        /// Underlying error message
        reason: String,
    },

    /// Unexpected internal state
    #[error("internal error: {reason}")]
    Internal {
        /// What went wrong
        reason: String,
    },
}

//! Error type for the host binary.

use optable_core::OptionError;
use thiserror::Error;

/// Errors that end an `optable` run.
#[derive(Debug, Error)]
pub enum HostError {
    /// Reading configuration or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid YAML for [`HostConfig`](crate::config::HostConfig).
    #[error("invalid configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The option table could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Validation or dispatch of the command line failed.
    #[error(transparent)]
    Options(#[from] OptionError),
}

impl HostError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Options(err) => err.status().exit_code(),
            _ => 1,
        }
    }
}

/// Convenience alias for results with [`HostError`].
pub type Result<T> = std::result::Result<T, HostError>;

//! Error types for option validation and dispatch.
//!
//! Every failure the engine can report is a variant of [`OptionError`].
//! Parsing failures (unknown options, missing arguments, missing required
//! options, unknown identities) all collapse to [`Status::BadParameters`];
//! handler failures carry the handler's own status code.

use thiserror::Error;

/// Failure reported by an option handler.
///
/// The meaning is defined by the handler. The engine only propagates it,
/// wrapped in [`OptionError::HandlerFailure`].
///
/// # Examples
///
/// ```
/// use optable_core::HandlerError;
///
/// let err = HandlerError::new("port is not a number");
/// assert_eq!(err.code(), 1);
/// assert_eq!(err.to_string(), "port is not a number");
///
/// let err = HandlerError::with_code("device busy", 3);
/// assert_eq!(err.code(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct HandlerError {
    message: String,
    code: i32,
}

impl HandlerError {
    /// Creates a handler failure with the default status code `1`.
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_code(message, 1)
    }

    /// Creates a handler failure with an explicit status code.
    ///
    /// A code of `0` would read as success to a shell, so it is raised to `1`.
    pub fn with_code(message: impl Into<String>, code: i32) -> Self {
        Self {
            message: message.into(),
            code: if code == 0 { 1 } else { code },
        }
    }

    /// Human-readable failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Status code the host should exit with.
    pub fn code(&self) -> i32 {
        self.code
    }
}

/// Errors produced by the presence checker, validator and dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    /// The queried identity names no descriptor in the table.
    #[error("no option named \"{0}\" in the option table")]
    BadIdentity(String),
    /// A token matched no descriptor.
    #[error("Bad option \"{0}\": unknown option")]
    UnknownOption(String),
    /// An argument-bearing option was last, or followed by another option.
    #[error("Bad option \"{option}\": missing argument, you must specify the \"{argument}\"")]
    MissingArgument {
        /// The token as it appeared in the argument vector.
        option: String,
        /// Placeholder of the expected argument (e.g. `NUM`).
        argument: String,
    },
    /// A required option never appeared.
    #[error("Option {0} is required")]
    RequiredOptionMissing(String),
    /// A dispatched handler reported failure.
    #[error("Option {option} failed: {source}")]
    HandlerFailure {
        /// Display name of the descriptor whose handler failed.
        option: String,
        /// The handler's own error.
        source: HandlerError,
    },
}

impl OptionError {
    /// Abstract status for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use optable_core::{HandlerError, OptionError, Status};
    ///
    /// let err = OptionError::UnknownOption("-x".into());
    /// assert_eq!(err.status(), Status::BadParameters);
    ///
    /// let err = OptionError::HandlerFailure {
    ///     option: "-p".into(),
    ///     source: HandlerError::with_code("busy", 4),
    /// };
    /// assert_eq!(err.status(), Status::HandlerFailed(4));
    /// ```
    pub fn status(&self) -> Status {
        match self {
            Self::HandlerFailure { source, .. } => Status::HandlerFailed(source.code()),
            _ => Status::BadParameters,
        }
    }
}

/// Abstract result status, mapped to a process exit code by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Validation or argument error.
    BadParameters,
    /// A handler failed with the given code.
    HandlerFailed(i32),
}

impl Status {
    /// Process exit code for this status.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::BadParameters => 1,
            Self::HandlerFailed(code) => code,
        }
    }
}

/// Convenience alias for results with [`OptionError`].
pub type Result<T> = std::result::Result<T, OptionError>;

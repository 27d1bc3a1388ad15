//! Error types for session-core operations.

use std::path::PathBuf;

/// All errors that can occur while inspecting a session.
///
/// These always propagate to the caller. Validator assertion failures are
/// reported separately through [`ValidationError::Assertion`].
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("I/O error: {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration file malformed: {path}: {details}")]
    ConfigMalformed { path: PathBuf, details: String },

    #[error("JSON serialization error: {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl SessionError {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        SessionError::Io {
            context: context.into(),
            source,
        }
    }
}

/// Convenience type alias for Results using SessionError.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Failure signal returned by a [`SessionValidators`](crate::SessionValidators) implementation.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The validator ran and the data did not satisfy it.
    /// Status checks turn this into `false`.
    #[error("Validation failed: {0}")]
    Assertion(String),

    /// The validator could not run at all. Status checks propagate this.
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl ValidationError {
    pub fn assertion(reason: impl Into<String>) -> Self {
        ValidationError::Assertion(reason.into())
    }
}

//! Error types for the indicator workspace.

use thiserror::Error;

use crate::validation::ValidationError;

/// Result type alias using the workspace error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the indicator crates.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid input or request
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration failed validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create an error with additional context.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to any error type.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.into().with_context(context))
    }
}

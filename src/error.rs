//! Error types for boilerplate

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Boilerplate errors
#[derive(Error, Debug)]
pub enum Error {
    /// A generation operation was called on a rule whose `is_valid()` is false.
    /// This is a caller bug and should not be recovered from.
    #[error("Precondition violated: {0}")]
    Precondition(String),

    /// A broken internal invariant. Never swallow this.
    #[error("Internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    TestGeneration(#[from] TestGenerationError),

    #[error("Invalid parameter name: {0}")]
    InvalidName(String),

    #[error("Spec parse error: {0}")]
    SpecParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Recoverable failure while setting up or running a generation session,
/// e.g. a parameter whose type cannot be resolved to a rule.
///
/// The message is never empty.
#[derive(Error, Debug)]
#[error("Test generation failed: {message}")]
pub struct TestGenerationError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

const FALLBACK_MESSAGE: &str = "unspecified test generation failure";

impl TestGenerationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: non_empty(message.into()),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: non_empty(message.into()),
            source: Some(Box::new(source)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Original cause, if one was attached
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.source.as_deref()
    }
}

fn non_empty(message: String) -> String {
    if message.trim().is_empty() {
        FALLBACK_MESSAGE.to_string()
    } else {
        message
    }
}

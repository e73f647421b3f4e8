//! Error types for the angle model and quiz session.

/// Result type for unit circle operations
pub type UnitCircleResult<T> = Result<T, UnitCircleError>;

/// Error type for unit circle operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UnitCircleError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Domain error: {0}")]
    DomainError(String),

    #[error("Invalid answer: {0}")]
    InvalidAnswer(String),

    #[error("Invalid input id: {0}")]
    InvalidInputId(usize),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<String> for UnitCircleError {
    fn from(s: String) -> Self {
        UnitCircleError::InternalError(s)
    }
}

impl From<&str> for UnitCircleError {
    fn from(s: &str) -> Self {
        UnitCircleError::InternalError(s.to_string())
    }
}

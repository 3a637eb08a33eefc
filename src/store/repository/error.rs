//! Error types for repository operations.

use crate::api::FormReport;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Input was rejected before it reached storage.
    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        /// Field-level report when the rejection came from form validation.
        report: Option<FormReport>,
    },

    /// Configuration or initialization error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal/unexpected errors.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RepositoryError {
    /// Create a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a validation error without field detail.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            report: None,
        }
    }

    /// Create a validation error carrying the form report.
    pub fn validation_with_report(message: impl Into<String>, report: FormReport) -> Self {
        Self::Validation {
            message: message.into(),
            report: Some(report),
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// The attached form report, if any.
    pub fn report(&self) -> Option<&FormReport> {
        match self {
            Self::Validation {
                report: Some(report),
                ..
            } => Some(report),
            _ => None,
        }
    }
}

// Allow creating errors from bare strings at call sites that have no
// structured detail to attach.
impl From<String> for RepositoryError {
    fn from(s: String) -> Self {
        RepositoryError::internal(s)
    }
}

impl From<&str> for RepositoryError {
    fn from(s: &str) -> Self {
        RepositoryError::internal(s.to_string())
    }
}

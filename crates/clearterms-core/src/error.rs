//! Centralized error types for ClearTerms.

use thiserror::Error;

/// Message shown when the backend gives no usable detail.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to analyze policy. Please check input.";

/// Main error type for ClearTerms operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClearTermsError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("An analysis is already in progress")]
    Busy,

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for ClearTerms operations.
pub type ClearTermsResult<T> = Result<T, ClearTermsError>;

impl ClearTermsError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// What went wrong with a single analysis call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisErrorKind {
    /// The request never produced a response (connect failure, timeout).
    Transport,
    /// The backend answered with a non-2xx status.
    Status(u16),
    /// A 2xx body that does not match `PolicyAnalysis`.
    MalformedResponse,
}

/// Failure of the outbound analysis call.
///
/// `detail` holds the backend's human-readable message when it sent one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", message_or_generic(.detail))]
pub struct AnalysisError {
    pub kind: AnalysisErrorKind,
    pub detail: Option<String>,
}

impl AnalysisError {
    pub fn transport() -> Self {
        Self { kind: AnalysisErrorKind::Transport, detail: None }
    }

    pub fn status(code: u16, detail: Option<String>) -> Self {
        Self { kind: AnalysisErrorKind::Status(code), detail }
    }

    pub fn malformed() -> Self {
        Self { kind: AnalysisErrorKind::MalformedResponse, detail: None }
    }

    /// The best message to show the user.
    pub fn display_message(&self) -> &str {
        message_or_generic(&self.detail)
    }
}

fn message_or_generic(detail: &Option<String>) -> &str {
    detail
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(GENERIC_FAILURE_MESSAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_is_preferred() {
        let err = AnalysisError::status(500, Some("Could not fetch URL".to_string()));
        assert_eq!(err.display_message(), "Could not fetch URL");
        assert_eq!(err.to_string(), "Could not fetch URL");
    }

    #[test]
    fn test_generic_fallback() {
        assert_eq!(AnalysisError::transport().display_message(), GENERIC_FAILURE_MESSAGE);
        assert_eq!(AnalysisError::malformed().display_message(), GENERIC_FAILURE_MESSAGE);
        let blank = AnalysisError::status(502, Some("  ".to_string()));
        assert_eq!(blank.display_message(), GENERIC_FAILURE_MESSAGE);
    }
}

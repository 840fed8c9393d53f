//! Domain Errors
//!
//! `SearchFailure` is what a search backend reports. `DomainError` covers
//! backend setup (config, validation).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification of a search backend failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    EmptyQuery,
    Configuration,
    RequestFailed,
    ParseError,
    ApiError { status: u16 },
    RateLimited,
    /// Backend-specific failure identified by name
    Other(String),
}

impl FailureKind {
    /// Identifier used in failure descriptions (`RateLimited`, `ApiError`, ...)
    pub fn name(&self) -> &str {
        match self {
            FailureKind::EmptyQuery => "EmptyQuery",
            FailureKind::Configuration => "Configuration",
            FailureKind::RequestFailed => "RequestFailed",
            FailureKind::ParseError => "ParseError",
            FailureKind::ApiError { .. } => "ApiError",
            FailureKind::RateLimited => "RateLimited",
            FailureKind::Other(name) => name,
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::EmptyQuery => write!(f, "Empty query"),
            FailureKind::Configuration => write!(f, "Configuration error"),
            FailureKind::RequestFailed => write!(f, "Request failed"),
            FailureKind::ParseError => write!(f, "Parse error"),
            FailureKind::ApiError { status } => write!(f, "API error ({})", status),
            FailureKind::RateLimited => write!(f, "Rate limited"),
            FailureKind::Other(name) => write!(f, "{}", name),
        }
    }
}

/// Failure reported by a search backend
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{kind}: {message}")]
pub struct SearchFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl SearchFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn empty_query() -> Self {
        Self::new(FailureKind::EmptyQuery, "Search query cannot be empty")
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Configuration, message)
    }

    pub fn request_failed(message: impl Into<String>) -> Self {
        Self::new(FailureKind::RequestFailed, message)
    }

    pub fn parse_error(message: impl Into<String>) -> Self {
        Self::new(FailureKind::ParseError, message)
    }

    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::new(FailureKind::ApiError { status }, message)
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(FailureKind::RateLimited, message)
    }

    pub fn other(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(FailureKind::Other(name.into()), message)
    }

    /// Kind and message as `Kind('message')`, e.g. `RateLimited('quota exceeded')`
    pub fn describe(&self) -> String {
        let escaped = self.message.replace('\\', "\\\\").replace('\'', "\\'");
        format!("{}('{}')", self.kind.name(), escaped)
    }
}

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_uses_kind_name() {
        let failure = SearchFailure::rate_limited("quota exceeded");
        assert_eq!(failure.describe(), "RateLimited('quota exceeded')");
    }

    #[test]
    fn test_describe_other_kind_verbatim() {
        let failure = SearchFailure::other("RuntimeError", "quota exceeded");
        assert_eq!(failure.describe(), "RuntimeError('quota exceeded')");
    }

    #[test]
    fn test_describe_escapes_quotes() {
        let failure = SearchFailure::parse_error("can't read body");
        assert_eq!(failure.describe(), r"ParseError('can\'t read body')");
    }

    #[test]
    fn test_display() {
        let failure = SearchFailure::api_error(401, "Access denied");
        assert_eq!(failure.to_string(), "API error (401): Access denied");
        assert_eq!(failure.describe(), "ApiError('Access denied')");
    }

    #[test]
    fn test_empty_query_display() {
        let failure = SearchFailure::empty_query();
        assert_eq!(failure.to_string(), "Empty query: Search query cannot be empty");
    }

    #[test]
    fn test_domain_error_display() {
        let err = DomainError::Configuration("Bing subscription key is empty".to_string());
        assert_eq!(err.to_string(), "Configuration error: Bing subscription key is empty");
    }
}

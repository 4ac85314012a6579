// src/error.rs
//! Application error types.
//!
//! Layout, rendering and variable resolution never fail. Everything that
//! touches the outside world (files, the store API, template shells) returns
//! `Result<_, AppError>`.

use std::fmt;
use thiserror::Error;

/// Store API failure classes derived from the HTTP status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorCode {
    /// Token missing, invalid or expired
    Unauthorized,
    /// Token valid but not allowed to touch this tenant's resource
    Forbidden,
    /// The template, exposé or property does not exist
    NotFound,
    /// Too many requests
    RateLimited,
    /// Any 5xx
    ServerError,
    /// Any other non-success status
    HttpStatus(u16),
}

impl ApiErrorCode {
    pub fn from_http_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            429 => Self::RateLimited,
            500..=599 => Self::ServerError,
            other => Self::HttpStatus(other),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Whether retrying later could succeed. The client itself never retries.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::RateLimited | Self::ServerError)
    }
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::Forbidden => write!(f, "forbidden"),
            Self::NotFound => write!(f, "not_found"),
            Self::RateLimited => write!(f, "rate_limited"),
            Self::ServerError => write!(f, "server_error"),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Exposé API returned an error ({code}): {message}")]
    ExposeService {
        code: ApiErrorCode,
        message: String,
        status: reqwest::StatusCode,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template file not found at {path}: {source}")]
    TemplateNotFound {
        path: String,
        source: std::io::Error,
    },

    #[error("Template render error for template {name}: {message}")]
    TemplateRenderError { name: String, message: String },

    #[error("JSON parse error for {path}: {source}")]
    JsonParseError {
        path: std::path::PathBuf,
        source: serde_json::Error,
    },

    #[error("Output delivery failed: {}", failures.join(", "))]
    DeliveryFailed { failures: Vec<String> },

    #[error("Internal error: {message}")]
    InternalError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error(transparent)]
    ValidationError(#[from] crate::types::ValidationError),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

impl From<std::fmt::Error> for AppError {
    fn from(err: std::fmt::Error) -> Self {
        AppError::InternalError {
            message: "Formatting error".to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl AppError {
    /// Typed API code when the store rejected the request.
    pub fn api_code(&self) -> Option<&ApiErrorCode> {
        match self {
            AppError::ExposeService { code, .. } => Some(code),
            _ => None,
        }
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiErrorCode::from_http_status(401), ApiErrorCode::Unauthorized);
        assert_eq!(ApiErrorCode::from_http_status(403), ApiErrorCode::Forbidden);
        assert_eq!(ApiErrorCode::from_http_status(404), ApiErrorCode::NotFound);
        assert_eq!(ApiErrorCode::from_http_status(429), ApiErrorCode::RateLimited);
        assert_eq!(ApiErrorCode::from_http_status(503), ApiErrorCode::ServerError);
        assert_eq!(ApiErrorCode::from_http_status(418), ApiErrorCode::HttpStatus(418));
        assert!(ApiErrorCode::ServerError.is_transient());
        assert!(!ApiErrorCode::Forbidden.is_transient());
    }

    #[test]
    fn test_service_error_display() {
        let err = AppError::ExposeService {
            code: ApiErrorCode::NotFound,
            message: "Template not found".to_string(),
            status: reqwest::StatusCode::NOT_FOUND,
        };
        assert_eq!(
            err.to_string(),
            "Exposé API returned an error (not_found): Template not found"
        );
        assert!(err.api_code().is_some_and(ApiErrorCode::is_not_found));
    }
}

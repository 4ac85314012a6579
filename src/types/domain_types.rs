// src/types/domain_types.rs
//! Domain-specific newtypes for type safety and validation.

use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Bearer token for the exposé backend (a Cognito-issued access or id token).
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Create a new API token with validation
    pub fn new(token: impl Into<String>) -> Result<Self, ValidationError> {
        let token = token.into();
        let token = token.trim();

        if token.is_empty() {
            return Err(ValidationError::InvalidApiToken {
                reason: "token cannot be empty".to_string(),
            });
        }

        if token.starts_with("Bearer ") {
            return Err(ValidationError::InvalidApiToken {
                reason: "pass the raw token without the 'Bearer ' prefix".to_string(),
            });
        }

        if token.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(ValidationError::InvalidApiToken {
                reason: "token must not contain whitespace".to_string(),
            });
        }

        if token.len() < 16 {
            return Err(ValidationError::InvalidApiToken {
                reason: "token is too short".to_string(),
            });
        }

        Ok(Self(token.to_string()))
    }

    /// Get the token as a string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Redact token in display
        write!(f, "{}...", &self.0[..8])
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiToken({})", self)
    }
}

/// Validated URL type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUrl(Url);

// Manual Serialize/Deserialize implementation for Url
impl Serialize for ValidatedUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ValidatedUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ValidatedUrl::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl ValidatedUrl {
    /// Create a new validated URL
    pub fn parse(url: &str) -> Result<Self, ValidationError> {
        match Url::parse(url) {
            Ok(parsed_url) => {
                if parsed_url.scheme() != "http" && parsed_url.scheme() != "https" {
                    return Err(ValidationError::InvalidUrl {
                        url: url.to_string(),
                        reason: "Only HTTP and HTTPS URLs are supported".to_string(),
                    });
                }
                Ok(Self(parsed_url))
            }
            Err(e) => Err(ValidationError::InvalidUrl {
                url: url.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    /// Get the URL as a string
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Joins an endpoint path onto this base, keeping any base path prefix
    /// (e.g. the API gateway stage `/dev`).
    pub fn join_endpoint(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.0.as_str().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }
}

impl fmt::Display for ValidatedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The final rendered output (HTML document, layout summary or JSON).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedExpose(String);

impl RenderedExpose {
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RenderedExpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_token_validation() {
        assert!(ApiToken::new("eyJraWQiOiJrZXkxIiwiYWxnIjoiUlMyNTYifQ").is_ok());
        assert!(ApiToken::new("").is_err());
        assert!(ApiToken::new("short").is_err());
        assert!(ApiToken::new("Bearer eyJraWQiOiJrZXkxIiwiYWxn").is_err());
        assert!(ApiToken::new("eyJraWQiOiJr ZXkxIiwiYWxn").is_err());
    }

    #[test]
    fn test_api_token_is_redacted() {
        let token = ApiToken::new("eyJraWQiOiJrZXkxIiwiYWxnIjoiUlMyNTYifQ").unwrap();
        assert_eq!(token.to_string(), "eyJraWQi...");
        assert!(!format!("{:?}", token).contains("ZXkx"));
    }

    #[test]
    fn test_join_endpoint_keeps_stage_prefix() {
        let base = ValidatedUrl::parse("https://api.example.com/dev/").unwrap();
        assert_eq!(
            base.join_endpoint("/expose-templates/t1"),
            "https://api.example.com/dev/expose-templates/t1"
        );
    }

    #[test]
    fn test_rejects_non_http_urls() {
        assert!(ValidatedUrl::parse("ftp://example.com").is_err());
        assert!(ValidatedUrl::parse("not a url").is_err());
    }
}

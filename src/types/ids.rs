use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// Strong typing for IDs with phantom types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Id<T> {
    value: String,
    _phantom: PhantomData<T>,
}

/// Marker types for different ID kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TemplateMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExposeMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LeadMarker;

/// Type aliases for specific ID types
pub type BlockId = Id<BlockMarker>;
pub type TemplateId = Id<TemplateMarker>;
pub type ExposeId = Id<ExposeMarker>;
pub type PropertyId = Id<PropertyMarker>;
pub type LeadId = Id<LeadMarker>;

/// Longest identifier the backend hands out (cuid, uuid, or editor-generated).
const MAX_ID_LENGTH: usize = 128;

impl<T> Id<T> {
    /// Parse an identifier issued by the backend or the editor.
    ///
    /// IDs are opaque: anything non-empty that is safe to place in a URL path
    /// segment is accepted as-is (after trimming).
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::InvalidId("ID cannot be empty".to_string()));
        }

        if trimmed.len() > MAX_ID_LENGTH {
            return Err(ValidationError::InvalidId(format!(
                "ID too long: {} characters (max {})",
                trimmed.len(),
                MAX_ID_LENGTH
            )));
        }

        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        {
            return Err(ValidationError::InvalidId(format!(
                "ID contains characters outside [A-Za-z0-9._-]: {}",
                trimmed
            )));
        }

        Ok(Self::from_normalized(trimmed.to_string()))
    }

    /// Create an ID from an already trusted string (internal use)
    pub(crate) fn from_normalized(value: String) -> Self {
        Self {
            value,
            _phantom: PhantomData,
        }
    }

    /// Create a new random v4 UUID ID
    pub fn new_v4() -> Self {
        Self::from_normalized(Uuid::new_v4().to_string())
    }

    /// Create a new random ID with a readable prefix, e.g. `pageBreak-1b2c…`.
    pub fn with_prefix(prefix: &str) -> Self {
        Self::from_normalized(format!("{}-{}", prefix, Uuid::new_v4().as_simple()))
    }

    /// Get the ID as a string reference
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_normalized(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_parsing() {
        let id = TemplateId::parse("clx1abc2d0000qwe8rty").unwrap();
        assert_eq!(id.as_str(), "clx1abc2d0000qwe8rty");

        let id = ExposeId::parse("  550e8400-e29b-41d4-a716-446655440000 ").unwrap();
        assert_eq!(id.as_str(), "550e8400-e29b-41d4-a716-446655440000");

        let id = BlockId::parse("hero-1").unwrap();
        assert_eq!(id.as_str(), "hero-1");
    }

    #[test]
    fn test_invalid_ids() {
        assert!(TemplateId::parse("").is_err());
        assert!(TemplateId::parse("   ").is_err());
        assert!(TemplateId::parse("../etc/passwd").is_err());
        assert!(TemplateId::parse("a b").is_err());
        assert!(TemplateId::parse(&"x".repeat(200)).is_err());
    }

    #[test]
    fn test_prefixed_ids_are_unique() {
        let a = BlockId::with_prefix("pageBreak");
        let b = BlockId::with_prefix("pageBreak");
        assert!(a.as_str().starts_with("pageBreak-"));
        assert_ne!(a, b);
    }
}

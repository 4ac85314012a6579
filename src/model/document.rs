use super::block::Block;
use super::decode::lenient;
use super::entity::{Binding, Property};
use crate::types::{ExposeId, PropertyId, TemplateId, ThemeKey};
use crate::variables::resolve;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

fn default_theme() -> String {
    ThemeKey::Default.as_str().to_string()
}

/// A reusable exposé layout. Shows placeholder chips until a property is bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: TemplateId,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::blocks")]
    pub blocks: Vec<Block>,
    /// Raw theme key as stored; see [`Template::theme_key`]
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Template {
    pub fn theme_key(&self) -> ThemeKey {
        ThemeKey::resolve(&self.theme)
    }

    /// Concrete block list for a new exposé: every string field of every block
    /// is resolved against `binding`. Block ids are kept.
    pub fn instantiate(&self, binding: &Binding) -> Vec<Block> {
        self.blocks
            .iter()
            .map(|block| {
                let mut block = block.clone();
                for field in block.text_fields_mut() {
                    if field.contains("{{") {
                        *field = resolve(field, Some(binding));
                    }
                }
                block
            })
            .collect()
    }
}

/// Lifecycle state of an exposé. Unrecognized states are preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExposeStatus {
    #[default]
    Draft,
    Published,
    Other(String),
}

impl ExposeStatus {
    pub fn parse(value: &str) -> Self {
        match value {
            "DRAFT" => ExposeStatus::Draft,
            "PUBLISHED" => ExposeStatus::Published,
            other => ExposeStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ExposeStatus::Draft => "DRAFT",
            ExposeStatus::Published => "PUBLISHED",
            ExposeStatus::Other(s) => s,
        }
    }
}

impl fmt::Display for ExposeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ExposeStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ExposeStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => ExposeStatus::parse(&s),
            _ => ExposeStatus::Draft,
        })
    }
}

/// A concrete exposé bound to one property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expose {
    pub id: ExposeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_id: Option<PropertyId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<TemplateId>,
    #[serde(default, deserialize_with = "lenient::blocks")]
    pub blocks: Vec<Block>,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub status: ExposeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<Property>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Expose {
    pub fn theme_key(&self) -> ThemeKey {
        ThemeKey::resolve(&self.theme)
    }
}

/// Either kind of laid-out document.
#[derive(Debug, Clone, PartialEq)]
pub enum ExposeDocument {
    Template(Template),
    Expose(Expose),
}

impl ExposeDocument {
    /// Decide the document kind from its shape: exposés carry a
    /// `propertyId` or `status`, templates a `name`.
    pub fn from_json(value: Value) -> Result<Self, serde_json::Error> {
        let looks_like_expose = value
            .as_object()
            .map(|obj| obj.contains_key("propertyId") || obj.contains_key("status"))
            .unwrap_or(false);

        if looks_like_expose {
            serde_json::from_value(value).map(ExposeDocument::Expose)
        } else {
            serde_json::from_value(value).map(ExposeDocument::Template)
        }
    }

    pub fn blocks(&self) -> &[Block] {
        match self {
            ExposeDocument::Template(t) => &t.blocks,
            ExposeDocument::Expose(e) => &e.blocks,
        }
    }

    pub fn theme_key(&self) -> ThemeKey {
        match self {
            ExposeDocument::Template(t) => t.theme_key(),
            ExposeDocument::Expose(e) => e.theme_key(),
        }
    }

    pub fn is_template(&self) -> bool {
        matches!(self, ExposeDocument::Template(_))
    }

    pub fn id(&self) -> &str {
        match self {
            ExposeDocument::Template(t) => t.id.as_str(),
            ExposeDocument::Expose(e) => e.id.as_str(),
        }
    }

    /// Human-readable title for logs and the export header
    pub fn display_title(&self) -> String {
        match self {
            ExposeDocument::Template(t) if !t.name.trim().is_empty() => t.name.clone(),
            ExposeDocument::Template(t) => format!("Vorlage {}", t.id),
            ExposeDocument::Expose(e) => e
                .property
                .as_ref()
                .and_then(|p| p.title.clone())
                .unwrap_or_else(|| format!("Exposé {}", e.id)),
        }
    }

    /// The property embedded in an exposé response, if any
    pub fn embedded_property(&self) -> Option<&Property> {
        match self {
            ExposeDocument::Template(_) => None,
            ExposeDocument::Expose(e) => e.property.as_ref(),
        }
    }
}

// src/api/responses.rs
//! Wire shapes of the exposé store that are not domain types themselves.

use crate::model::{encode_blocks, Expose, ExposeStatus, Template};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of every non-success response: `{ "error": "Template not found" }`
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// `PUT /expose-templates/:id`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateUpdate {
    pub name: String,
    pub blocks: Value,
    pub theme: String,
    pub is_default: bool,
}

impl From<&Template> for TemplateUpdate {
    fn from(template: &Template) -> Self {
        Self {
            name: template.name.clone(),
            blocks: encode_blocks(&template.blocks),
            theme: template.theme.clone(),
            is_default: template.is_default,
        }
    }
}

/// `PUT /exposes/:id`
#[derive(Debug, Clone, Serialize)]
pub struct ExposeUpdate {
    pub blocks: Value,
    pub theme: String,
    pub status: ExposeStatus,
}

impl From<&Expose> for ExposeUpdate {
    fn from(expose: &Expose) -> Self {
        Self {
            blocks: encode_blocks(&expose.blocks),
            theme: expose.theme.clone(),
            status: expose.status.clone(),
        }
    }
}

// src/model/decode.rs
//! Lenient JSON decoding of blocks.
//!
//! Stored block lists are edited by hand, by older editor versions and by the
//! AI assistant, so decoding never fails: a field of the wrong JSON type or an
//! empty string is treated as absent, a missing id is generated, and unknown
//! block types are carried through untouched.

use super::block::{Block, BlockKind};
use super::blocks::*;
use super::common::{BlockCommon, StyleOverrides};
use crate::types::BlockId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Read-only view over the fields of one block object.
struct Fields<'a>(&'a Map<String, Value>);

impl<'a> Fields<'a> {
    /// Non-empty string field
    fn string(&self, key: &str) -> Option<String> {
        match self.0.get(key) {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }

    fn bool(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(Value::as_bool)
    }

    fn small_int(&self, key: &str) -> Option<u8> {
        self.0
            .get(key)
            .and_then(Value::as_u64)
            .and_then(|n| u8::try_from(n).ok())
    }

    /// Array of non-empty strings; `{text}` objects are accepted in place of strings.
    fn text_list(&self, key: &str) -> Vec<String> {
        self.0
            .get(key)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| match item {
                        Value::String(s) if !s.is_empty() => Some(s.clone()),
                        Value::Object(obj) => match obj.get("text") {
                            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
                            _ => None,
                        },
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// `{label, value}` rows. `None` when the field is absent or not an array.
    fn labeled_values(&self, key: &str) -> Option<Vec<LabeledValue>> {
        let items = self.0.get(key)?.as_array()?;
        Some(
            items
                .iter()
                .filter_map(Value::as_object)
                .map(|row| {
                    let row = Fields(row);
                    LabeledValue {
                        label: row.scalar_text("label"),
                        value: row.scalar_text("value"),
                    }
                })
                .collect(),
        )
    }

    /// String or number rendered as text; anything else is empty.
    fn scalar_text(&self, key: &str) -> String {
        match self.0.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        }
    }

    fn common(&self) -> BlockCommon {
        let id = self
            .string("id")
            .map(BlockId::from_normalized)
            .unwrap_or_else(BlockId::new_v4);
        BlockCommon::new(id).with_colors(StyleOverrides {
            background_color: self.string("backgroundColor"),
            text_color: self.string("textColor"),
            title_color: self.string("titleColor"),
        }
        .vetted())
    }
}

impl Block {
    /// Decode one block. Never fails.
    pub fn from_json(value: &Value) -> Block {
        let empty = Map::new();
        let obj = value.as_object().unwrap_or(&empty);
        let f = Fields(obj);
        let common = f.common();

        let tag = f.string("type");
        let Some(kind) = tag.as_deref().and_then(BlockKind::from_tag) else {
            let block_type = tag.unwrap_or_else(|| BlockKind::Unknown.as_str().to_string());
            log::debug!("Keeping block {} of unknown type '{}'", common.id, block_type);
            return Block::Unknown(UnknownBlock {
                common,
                block_type,
                title: f.string("title"),
                raw: value.clone(),
            });
        };

        match kind {
            BlockKind::Hero => Block::Hero(HeroBlock {
                common,
                image_url: f.string("imageUrl"),
                title: f.string("title"),
                subtitle: f.string("subtitle"),
            }),
            BlockKind::Stats => Block::Stats(StatsBlock {
                common,
                items: f.labeled_values("items"),
            }),
            BlockKind::Text => Block::Text(TextBlock {
                common,
                title: f.string("title"),
                content: f.string("content"),
                style: f.string("style").as_deref().and_then(TextStyle::parse),
            }),
            BlockKind::Features | BlockKind::Highlights => {
                let list = ListBlock {
                    common,
                    title: f.string("title"),
                    items: f.text_list("items"),
                };
                if kind == BlockKind::Features {
                    Block::Features(list)
                } else {
                    Block::Highlights(list)
                }
            }
            BlockKind::Location => Block::Location(LocationBlock {
                common,
                title: f.string("title"),
                address: f.string("address"),
                description: f.string("description"),
            }),
            BlockKind::Contact => Block::Contact(ContactBlock {
                common,
                title: f.string("title"),
                name: f.string("name"),
                email: f.string("email"),
                phone: f.string("phone"),
            }),
            BlockKind::LeadInfo => Block::LeadInfo(LeadInfoBlock {
                common,
                title: f.string("title"),
                lead_name: f.string("leadName"),
                lead_email: f.string("leadEmail"),
                lead_phone: f.string("leadPhone"),
                show_greeting: f.bool("showGreeting"),
            }),
            BlockKind::PriceTable => Block::PriceTable(PriceTableBlock {
                common,
                title: f.string("title"),
                items: f.labeled_values("items"),
            }),
            BlockKind::Cta => Block::Cta(CtaBlock {
                common,
                title: f.string("title"),
                button_text: f.string("buttonText"),
                button_url: f.string("buttonUrl"),
            }),
            BlockKind::Quote => Block::Quote(QuoteBlock {
                common,
                text: f.string("text"),
                author: f.string("author"),
            }),
            BlockKind::Gallery => Block::Gallery(GalleryBlock {
                common,
                images: f.text_list("images"),
                columns: f.small_int("columns"),
            }),
            BlockKind::Floorplan => Block::Floorplan(FloorplanBlock {
                common,
                title: f.string("title"),
                image_url: f.string("imageUrl"),
            }),
            BlockKind::TwoColumn => Block::TwoColumn(TwoColumnBlock {
                common,
                left_content: f.string("leftContent"),
                right_content: f.string("rightContent"),
            }),
            BlockKind::EnergyCertificate => Block::EnergyCertificate(EnergyCertificateBlock {
                common,
                energy_class: f.string("energyClass"),
                consumption: f.string("consumption"),
            }),
            BlockKind::Video => Block::Video(VideoBlock {
                common,
                title: f.string("title"),
                video_url: f.string("videoUrl"),
            }),
            BlockKind::VirtualTour => Block::VirtualTour(VirtualTourBlock {
                common,
                title: f.string("title"),
                tour_url: f.string("tourUrl"),
            }),
            BlockKind::PageBreak => Block::PageBreak(PageBreakBlock { common }),
            BlockKind::Unknown => Block::Unknown(UnknownBlock {
                common,
                block_type: kind.as_str().to_string(),
                title: f.string("title"),
                raw: value.clone(),
            }),
        }
    }

    /// Encode back to the wire shape (`type` tag plus camelCase fields).
    pub fn to_json(&self) -> Value {
        let fields = match self {
            Block::Unknown(b) => return b.raw.clone(),
            Block::Hero(b) => serde_json::to_value(b),
            Block::Stats(b) => serde_json::to_value(b),
            Block::Text(b) => serde_json::to_value(b),
            Block::Features(b) | Block::Highlights(b) => serde_json::to_value(b),
            Block::Location(b) => serde_json::to_value(b),
            Block::Contact(b) => serde_json::to_value(b),
            Block::LeadInfo(b) => serde_json::to_value(b),
            Block::PriceTable(b) => serde_json::to_value(b),
            Block::Cta(b) => serde_json::to_value(b),
            Block::Quote(b) => serde_json::to_value(b),
            Block::Gallery(b) => serde_json::to_value(b),
            Block::Floorplan(b) => serde_json::to_value(b),
            Block::TwoColumn(b) => serde_json::to_value(b),
            Block::EnergyCertificate(b) => serde_json::to_value(b),
            Block::Video(b) => serde_json::to_value(b),
            Block::VirtualTour(b) => serde_json::to_value(b),
            Block::PageBreak(b) => serde_json::to_value(b),
        };

        let mut obj = match fields {
            Ok(Value::Object(obj)) => obj,
            // Plain structs of strings always serialize to an object
            _ => Map::new(),
        };
        obj.insert("type".to_string(), Value::String(self.kind().as_str().to_string()));
        if !obj.contains_key("id") {
            obj.insert("id".to_string(), Value::String(self.id().to_string()));
        }
        Value::Object(obj)
    }
}

/// Decode a block list. A non-array value yields no blocks.
pub fn decode_blocks(value: &Value) -> Vec<Block> {
    match value {
        Value::Array(items) => items.iter().map(Block::from_json).collect(),
        Value::Null => Vec::new(),
        other => {
            log::warn!("Expected a block array, found {}", json_type_name(other));
            Vec::new()
        }
    }
}

pub fn encode_blocks(blocks: &[Block]) -> Value {
    Value::Array(blocks.iter().map(Block::to_json).collect())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Serialize for Block {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Block::from_json(&value))
    }
}

/// `deserialize_with` helpers that turn wrong-typed values into `None`
/// instead of failing the whole document.
pub(crate) mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) if !s.trim().is_empty() => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    }

    /// Numbers, or strings that parse as numbers
    pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        })
    }

    pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) if !s.is_empty() => Some(s),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        })
    }

    pub fn blocks<'de, D>(deserializer: D) -> Result<Vec<crate::model::Block>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(super::decode_blocks(&value))
    }
}

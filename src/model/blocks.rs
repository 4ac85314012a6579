use super::common::BlockCommon;
use serde::Serialize;
use serde_json::Value;

/// A `{label, value}` row used by stats and price tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct LabeledValue {
    pub label: String,
    pub value: String,
}

impl LabeledValue {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Visual treatment of a text block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextStyle {
    #[default]
    Normal,
    Highlight,
    Quote,
}

impl TextStyle {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "normal" => Some(TextStyle::Normal),
            "highlight" => Some(TextStyle::Highlight),
            "quote" => Some(TextStyle::Quote),
            _ => None,
        }
    }
}

/// Full-width cover image with overlay title
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct HeroBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

/// Key figures row. `None` items render the default three slots.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct StatsBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<LabeledValue>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct TextBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
}

impl TextBlock {
    pub fn text_style(&self) -> TextStyle {
        self.style.unwrap_or_default()
    }
}

/// Bullet list. Shared shape of the `features` and `highlights` kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ListBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct LocationBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Agent contact card
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ContactBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Recipient card for personalized exposés
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LeadInfoBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_greeting: Option<bool>,
}

impl LeadInfoBlock {
    /// The greeting line is shown unless explicitly switched off.
    pub fn shows_greeting(&self) -> bool {
        self.show_greeting != Some(false)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct PriceTableBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<LabeledValue>>,
}

/// Call-to-action with a single button
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CtaBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct QuoteBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct GalleryBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<u8>,
}

impl GalleryBlock {
    /// Galleries are laid out in two columns unless three are requested.
    pub fn column_count(&self) -> u8 {
        match self.columns {
            Some(3) => 3,
            _ => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FloorplanBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Two rich-text columns side by side
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TwoColumnBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EnergyCertificateBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VideoBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VirtualTourBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tour_url: Option<String>,
}

/// Forces a page break. Carries no content of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct PageBreakBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
}

/// A block whose type tag is outside the known set.
///
/// The raw JSON object is kept so the block survives a load/save cycle untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownBlock {
    pub common: BlockCommon,
    pub block_type: String,
    pub title: Option<String>,
    pub raw: Value,
}

use crate::render::safe_css_color;
use crate::types::BlockId;
use serde::{Deserialize, Serialize};

/// Per-block color overrides. Any value set here wins over the theme.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_color: Option<String>,
}

impl StyleOverrides {
    pub fn is_empty(&self) -> bool {
        self.background_color.is_none() && self.text_color.is_none() && self.title_color.is_none()
    }

    /// Copy keeping only values that parse as CSS colours.
    pub fn vetted(&self) -> StyleOverrides {
        let check = |value: &Option<String>| value.as_deref().and_then(safe_css_color);
        StyleOverrides {
            background_color: check(&self.background_color),
            text_color: check(&self.text_color),
            title_color: check(&self.title_color),
        }
    }
}

/// Common fields for all blocks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockCommon {
    pub id: BlockId,
    #[serde(flatten)]
    pub colors: StyleOverrides,
}

impl BlockCommon {
    pub fn new(id: BlockId) -> Self {
        Self {
            id,
            colors: StyleOverrides::default(),
        }
    }

    pub fn with_colors(mut self, colors: StyleOverrides) -> Self {
        self.colors = colors;
        self
    }
}

impl Default for BlockCommon {
    fn default() -> Self {
        Self::new(BlockId::new_v4())
    }
}

//! Toolbar configuration.
//!
//! Everything is optional: a config of `{}` yields the stock toolbar.
//!
//! ```json
//! {
//!   "dictionaryUrl": "https://www.merriam-webster.com/dictionary/",
//!   "buttons": [
//!     { "id": "ed_code", "label": "code", "open": "<code>", "close": "</code>" },
//!     { "id": "ed_br", "label": "br", "open": "<br />" }
//!   ],
//!   "quickLinks": [{ "display": "home", "url": "https://example.com/", "newWindow": true }]
//! }
//! ```

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::error::Result;
use crate::link::QuickLink;
use crate::registry::{TagDef, TagKind, TagRegistry};

/// Default dictionary search endpoint; the word is appended percent-encoded.
pub const DEFAULT_DICTIONARY_URL: &str = "http://dictionary.reference.com/search?q=";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToolbarConfig {
    pub dictionary_url: String,
    /// Pre-filled answer for the link URL prompt.
    pub link_prompt_default: String,
    /// Pre-filled answer for the image URL prompt.
    pub image_prompt_default: String,
    pub close_all_label: String,
    pub lookup_label: String,
    /// Replaces the stock button set when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buttons: Option<Vec<TagDefConfig>>,
    /// Replaces the stock quick links when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_links: Option<Vec<QuickLink>>,
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            dictionary_url: DEFAULT_DICTIONARY_URL.to_owned(),
            link_prompt_default: "http://".to_owned(),
            image_prompt_default: "http://".to_owned(),
            close_all_label: "Close Tags".to_owned(),
            lookup_label: "Dict".to_owned(),
            buttons: None,
            quick_links: None,
        }
    }
}

impl ToolbarConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Registry described by this config.
    pub fn registry(&self) -> TagRegistry {
        match &self.buttons {
            Some(buttons) => buttons.iter().cloned().map(TagDef::from).collect(),
            None => TagRegistry::default(),
        }
    }

    pub fn quick_links(&self) -> Vec<QuickLink> {
        self.quick_links.clone().unwrap_or_else(QuickLink::defaults)
    }
}

/// Serialized form of a `TagDef`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagDefConfig {
    pub id: SmolStr,
    pub label: SmolStr,
    #[serde(default)]
    pub open: SmolStr,
    #[serde(default)]
    pub close: SmolStr,
    /// Never tracked as open, even with close markup.
    #[serde(default)]
    pub self_closing: bool,
    #[serde(default)]
    pub kind: TagKind,
}

impl From<TagDefConfig> for TagDef {
    fn from(c: TagDefConfig) -> Self {
        let tag = if c.self_closing {
            TagDef::unpaired(c.id, c.label, c.open, c.close)
        } else {
            TagDef::paired(c.id, c.label, c.open, c.close)
        };
        tag.with_kind(c.kind)
    }
}

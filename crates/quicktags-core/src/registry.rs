//! Tag definitions and the ordered registry toolbar buttons are built from.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::error::{QuicktagError, Result};
use crate::types::TagIndex;

/// Which toolbar operation a tag's control dispatches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TagKind {
    /// Plain open/close toggle.
    #[default]
    Plain,
    /// Prompts for a URL before opening an anchor.
    Link,
    /// Prompts for an image URL and description, inserts a standalone element.
    Image,
}

/// A single toolbar tag.
///
/// Immutable once registered. Link URLs are supplied per call rather than
/// written into `open_markup`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagDef {
    /// Control id, e.g. `ed_bold`.
    pub id: SmolStr,
    /// Control label, e.g. `B`.
    pub label: SmolStr,
    pub open_markup: SmolStr,
    pub close_markup: SmolStr,
    /// Whether toggling tracks this tag on the open-tag stack.
    pub pairable: bool,
    pub kind: TagKind,
}

impl TagDef {
    /// A tag that toggles between open and close markup.
    ///
    /// Pairable iff `close` is non-empty.
    pub fn paired(
        id: impl Into<SmolStr>,
        label: impl Into<SmolStr>,
        open: impl Into<SmolStr>,
        close: impl Into<SmolStr>,
    ) -> Self {
        let close = close.into();
        Self {
            id: id.into(),
            label: label.into(),
            open_markup: open.into(),
            pairable: !close.is_empty(),
            close_markup: close,
            kind: TagKind::Plain,
        }
    }

    /// A self-closing tag: always inserts `open`, never tracked.
    ///
    /// `close` only matters when wrapping a selection.
    pub fn unpaired(
        id: impl Into<SmolStr>,
        label: impl Into<SmolStr>,
        open: impl Into<SmolStr>,
        close: impl Into<SmolStr>,
    ) -> Self {
        Self {
            pairable: false,
            ..Self::paired(id, label, open, close)
        }
    }

    pub fn with_kind(mut self, kind: TagKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Ordered list of tag definitions. Order only affects toolbar layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagRegistry {
    tags: Vec<TagDef>,
}

impl TagRegistry {
    /// An empty registry.
    pub fn empty() -> Self {
        Self { tags: Vec::new() }
    }

    /// Append a definition, returning its index.
    pub fn push(&mut self, tag: TagDef) -> TagIndex {
        self.tags.push(tag);
        TagIndex(self.tags.len() - 1)
    }

    pub fn lookup(&self, index: TagIndex) -> Result<&TagDef> {
        self.tags
            .get(index.get())
            .ok_or(QuicktagError::InvalidTagIndex {
                index,
                len: self.tags.len(),
            })
    }

    /// Index of the tag with control id `id`.
    pub fn position(&self, id: &str) -> Option<TagIndex> {
        self.tags.iter().position(|t| t.id == id).map(TagIndex)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TagIndex, &TagDef)> + '_ {
        self.tags.iter().enumerate().map(|(i, t)| (TagIndex(i), t))
    }
}

impl FromIterator<TagDef> for TagRegistry {
    fn from_iter<I: IntoIterator<Item = TagDef>>(iter: I) -> Self {
        Self {
            tags: iter.into_iter().collect(),
        }
    }
}

impl Default for TagRegistry {
    /// The stock HTML button set.
    fn default() -> Self {
        [
            TagDef::paired("ed_bold", "B", "<strong>", "</strong>"),
            TagDef::paired("ed_italic", "I", "<em>", "</em>"),
            TagDef::paired("ed_under", "U", "<u>", "</u>"),
            TagDef::paired("ed_strike", "S", "<s>", "</s>"),
            TagDef::unpaired("ed_lt", "&lt;", "&lt;", ""),
            TagDef::unpaired("ed_gt", "&gt;", "&gt;", ""),
            TagDef::unpaired("ed_quot", "&#34;", "&#34;", "&#34;"),
            TagDef::unpaired("ed_amp", "&#38;", "&#38;", ""),
            TagDef::unpaired("ed_nbsp", "nbsp", "&#160;", ""),
            TagDef::paired("ed_nobr", "nobr", "<nobr>", "</nobr>"),
            TagDef::paired("ed_link", "link", "", "</a>").with_kind(TagKind::Link),
            TagDef::unpaired("ed_img", "img", "", "").with_kind(TagKind::Image),
            TagDef::paired("ed_ul", "UL", "<ul>\n", "</ul>\n\n"),
            TagDef::paired("ed_ol", "OL", "<ol>\n", "</ol>\n\n"),
            TagDef::paired("ed_li", "LI", "\t<li>", "</li>\n"),
            TagDef::paired("ed_p", "P", "<p>", "</p>\n\n"),
            TagDef::paired("ed_block", "b-quote", "<blockquote>", "</blockquote>"),
            TagDef::paired("ed_pre", "pre", "<pre>", "</pre>"),
        ]
        .into_iter()
        .collect()
    }
}

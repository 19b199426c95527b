//! Link, image and quick-link insertion.
//!
//! Link tags get their open markup from a prompt at click time; the URL is
//! handed to the toggle as a transient parameter and never written back into
//! the registry, so one link's URL cannot leak into the next.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::editor::{Quicktags, ToggleOutcome};
use crate::error::{QuicktagError, Result};
use crate::platform::{Prompt, SelectionCapability};
use crate::types::TagIndex;

/// A preset link offered in the quick-links dropdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickLink {
    pub display: SmolStr,
    pub url: SmolStr,
    #[serde(default)]
    pub new_window: bool,
}

impl QuickLink {
    pub fn new(display: impl Into<SmolStr>, url: impl Into<SmolStr>) -> Self {
        Self {
            display: display.into(),
            url: url.into(),
            new_window: false,
        }
    }

    pub fn in_new_window(mut self) -> Self {
        self.new_window = true;
        self
    }

    /// Complete anchor element for this link.
    pub fn markup(&self) -> String {
        let target = if self.new_window {
            " target=\"_blank\""
        } else {
            ""
        };
        format!(
            "<a href=\"{}\"{}>{}</a>",
            self.url, target, self.display
        )
    }

    pub fn defaults() -> Vec<QuickLink> {
        vec![
            QuickLink::new("alexking.org", "http://www.alexking.org/"),
            QuickLink::new("tasks", "http://www.alexking.org/software/tasks/"),
            QuickLink::new("photos", "http://www.alexking.org/software/photos/"),
        ]
    }
}

/// Result of a prompted insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkOutcome {
    /// A link tag was toggled (opened, closed, or wrapped around a selection).
    Toggled(ToggleOutcome),
    /// A complete element was inserted.
    Inserted,
    /// The user cancelled a prompt; nothing changed.
    Cancelled,
}

/// Anchor open markup for `url`.
pub fn anchor_open(url: &str) -> String {
    format!("<a href=\"{}\">", url)
}

/// Standalone image element.
pub fn image_markup(src: &str, alt: &str) -> String {
    format!("<img src=\"{}\" alt=\"{}\" />", src, alt)
}

impl Quicktags {
    /// Open (after prompting for a URL) or close the link tag at `index`.
    ///
    /// `default_url` seeds the prompt; falls back to the configured default.
    pub fn insert_link<F, P>(
        &mut self,
        field: &mut F,
        prompt: &P,
        index: TagIndex,
        default_url: Option<&str>,
    ) -> Result<LinkOutcome>
    where
        F: SelectionCapability + ?Sized,
        P: Prompt + ?Sized,
    {
        self.registry().lookup(index)?;

        if self.open_tags().contains(index) {
            return self.toggle(field, index).map(LinkOutcome::Toggled);
        }

        let default_url = default_url.unwrap_or(&self.config().link_prompt_default);
        let Some(url) = prompt
            .ask("Enter the URL", default_url)
            .filter(|url| !url.is_empty())
        else {
            tracing::debug!(target: "quicktags::link", %index, "link prompt cancelled");
            return Ok(LinkOutcome::Cancelled);
        };

        let open = anchor_open(&url);
        self.toggle_with_open(field, index, &open)
            .map(LinkOutcome::Toggled)
    }

    /// Prompt for an image URL and description and insert an `<img>` element.
    pub fn insert_image<F, P>(&mut self, field: &mut F, prompt: &P) -> Result<LinkOutcome>
    where
        F: SelectionCapability + ?Sized,
        P: Prompt + ?Sized,
    {
        let Some(src) = prompt
            .ask("Enter the URL of the image", &self.config().image_prompt_default)
            .filter(|src| !src.is_empty())
        else {
            tracing::debug!(target: "quicktags::link", "image prompt cancelled");
            return Ok(LinkOutcome::Cancelled);
        };

        let alt = prompt
            .ask("Enter a description of the image", "")
            .unwrap_or_default();
        self.insert_raw(field, &image_markup(&src, &alt));
        Ok(LinkOutcome::Inserted)
    }

    /// Insert the complete anchor for quick link `index`.
    pub fn insert_quick_link<F>(&mut self, field: &mut F, index: usize) -> Result<LinkOutcome>
    where
        F: SelectionCapability + ?Sized,
    {
        let link = self
            .quick_links()
            .get(index)
            .ok_or(QuicktagError::InvalidQuickLink {
                index,
                len: self.quick_links().len(),
            })?;
        let markup = link.markup();
        self.insert_raw(field, &markup);
        Ok(LinkOutcome::Inserted)
    }
}

//! Dictionary lookup for the selected (or prompted) word.

use crate::editor::Quicktags;
use crate::error::Result;
use crate::platform::{Navigator, Prompt, SelectionCapability};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Opened the dictionary page at this URL.
    Opened(String),
    /// No word selected and the prompt was cancelled or left empty.
    Cancelled,
}

/// Dictionary URL for `word` under `base`.
pub fn lookup_url(base: &str, word: &str) -> String {
    format!("{}{}", base, urlencoding::encode(word))
}

impl Quicktags {
    /// Look up the selected word, prompting for one when nothing is selected.
    ///
    /// Never modifies the field or the open-tag stack.
    pub fn spell<F, P, N>(
        &self,
        field: &mut F,
        prompt: &P,
        navigator: &N,
    ) -> Result<LookupOutcome>
    where
        F: SelectionCapability + ?Sized,
        P: Prompt + ?Sized,
        N: Navigator + ?Sized,
    {
        field.focus();
        let word = match field.selected_text() {
            Some(selected) => selected.to_string(),
            None => prompt.ask("Enter a word to look up:", "").unwrap_or_default(),
        };

        if word.is_empty() {
            return Ok(LookupOutcome::Cancelled);
        }

        let url = lookup_url(&self.config().dictionary_url, &word);
        tracing::debug!(target: "quicktags::lookup", %url, "opening dictionary");
        navigator.open(&url)?;
        Ok(LookupOutcome::Opened(url))
    }
}

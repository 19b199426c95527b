//! Platform abstraction traits for toolbar operations.
//!
//! These traits define the interface between the toolbar logic and the host
//! (browser DOM, native UI, tests). The editing algorithm is written once
//! against `SelectionCapability`; each host supplies one implementation.

use smol_str::SmolStr;

use crate::types::Selection;

/// Error type for platform operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformError(pub String);

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for PlatformError {}

impl From<&str> for PlatformError {
    fn from(s: &str) -> Self {
        PlatformError(s.to_string())
    }
}

impl From<String> for PlatformError {
    fn from(s: String) -> Self {
        PlatformError(s)
    }
}

/// A text field whose value and selection the toolbar can edit.
///
/// Offsets are char offsets into `value()`. Implementations over hosts
/// that count in UTF-16 (the DOM) convert at the boundary.
pub trait SelectionCapability {
    /// Current selection, or `None` when the host has no addressable
    /// cursor. Edits then append to the end of the value.
    fn selection(&self) -> Option<Selection>;

    /// Move the selection. Implementations clamp to the value length.
    fn set_selection(&mut self, selection: Selection);

    /// Full field contents.
    fn value(&self) -> String;

    /// Replace the full field contents.
    fn set_value(&mut self, value: &str);

    /// Give the field input focus.
    fn focus(&mut self);

    /// Currently selected text, if the selection is non-empty.
    fn selected_text(&self) -> Option<SmolStr> {
        let sel = self.selection().filter(|s| !s.is_collapsed())?;
        let value = self.value();
        let text: SmolStr = value
            .chars()
            .skip(sel.start())
            .take(sel.len())
            .collect::<String>()
            .into();
        Some(text)
    }
}

/// Synchronous user prompt.
pub trait Prompt {
    /// Ask the user for a value. `None` means the prompt was cancelled.
    fn ask(&self, message: &str, default: &str) -> Option<String>;
}

/// Side-effecting navigation to an external page.
pub trait Navigator {
    /// Open `url` in a new viewport. No response is consumed.
    fn open(&self, url: &str) -> Result<(), PlatformError>;
}

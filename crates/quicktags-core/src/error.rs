//! Error types for quicktags operations.

use miette::Diagnostic;

use crate::platform::PlatformError;
use crate::types::TagIndex;

/// Main error type for quicktags operations.
///
/// Cancelled prompts are not errors; they surface as outcome variants.
#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum QuicktagError {
    /// No tag definition registered at this index.
    #[error("no tag registered at index {index} (registry has {len})")]
    #[diagnostic(
        code(quicktags::invalid_tag_index),
        help("toolbar controls must only pass indices from the registry they were built from")
    )]
    InvalidTagIndex { index: TagIndex, len: usize },

    /// No quick link registered at this index.
    #[error("no quick link at index {index} (have {len})")]
    #[diagnostic(code(quicktags::invalid_quick_link))]
    InvalidQuickLink { index: usize, len: usize },

    /// Host platform failure (DOM access, window.open, ...).
    #[error(transparent)]
    #[diagnostic(code(quicktags::platform))]
    Platform(#[from] PlatformError),

    /// Toolbar configuration could not be parsed.
    #[error("invalid toolbar config: {0}")]
    #[diagnostic(code(quicktags::config))]
    Config(#[from] serde_json::Error),
}

pub type Result<T, E = QuicktagError> = std::result::Result<T, E>;

//! quicktags-core: HTML quicktag toolbar logic without framework dependencies.
//!
//! This crate provides:
//! - `TagRegistry` / `TagDef` - the ordered button definitions
//! - `OpenTagStack` - which pairable tags are currently open
//! - `Quicktags` - one editing session: toggle, wrap, insert, close-all
//! - `SelectionCapability`, `Prompt`, `Navigator` - the host seams
//! - `PlainField` - in-memory field for native hosts and tests

pub mod actions;
pub mod config;
pub mod editor;
pub mod error;
pub mod field;
pub mod link;
pub mod lookup;
pub mod platform;
pub mod registry;
pub mod stack;
pub mod text;
pub mod types;

#[cfg(test)]
mod testing;

pub use actions::{ActionOutcome, CLOSE_ALL_ID, Host, LOOKUP_ID, ToolbarAction, ToolbarControl};
pub use config::{DEFAULT_DICTIONARY_URL, TagDefConfig, ToolbarConfig};
pub use editor::{Quicktags, ToggleOutcome};
pub use error::{QuicktagError, Result};
pub use field::PlainField;
pub use link::{LinkOutcome, QuickLink, anchor_open, image_markup};
pub use lookup::{LookupOutcome, lookup_url};
pub use platform::{Navigator, PlatformError, Prompt, SelectionCapability};
pub use registry::{TagDef, TagKind, TagRegistry};
pub use smol_str::SmolStr;
pub use stack::OpenTagStack;
pub use text::{FieldRope, TextBuffer, char_to_utf16, utf16_to_char};
pub use types::{Selection, TagIndex};

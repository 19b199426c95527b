//! Browser DOM layer for quicktags.
//!
//! This crate binds the core toolbar logic to a real page, and assumes a
//! `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `field`: `<textarea>`/`<input>` selection capability (UTF-16 aware)
//! - `window`: `window.prompt` / `window.open` collaborators
//! - `toolbar`: button creation, click dispatch, label sync
//!
//! # Re-exports
//!
//! This crate re-exports `quicktags-core` for convenience, so consumers
//! only need to depend on `quicktags-browser`.

// Re-export core crate
pub use quicktags_core;
pub use quicktags_core::*;

pub mod field;
pub mod toolbar;
pub mod window;

pub use field::{TextField, TextFieldCapability};
pub use toolbar::{BUTTON_CLASS, BrowserToolbar, MountedToolbar, TOOLBAR_ID};
pub use window::{BrowserNavigator, BrowserPrompt};

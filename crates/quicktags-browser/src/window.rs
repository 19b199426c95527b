//! `window.prompt` and `window.open` collaborators.

use quicktags_core::{Navigator, PlatformError, Prompt};

/// Prompts through `window.prompt`.
#[derive(Clone, Debug)]
pub struct BrowserPrompt {
    window: web_sys::Window,
}

impl BrowserPrompt {
    pub fn new(window: web_sys::Window) -> Self {
        Self { window }
    }
}

impl Prompt for BrowserPrompt {
    fn ask(&self, message: &str, default: &str) -> Option<String> {
        match self.window.prompt_with_message_and_default(message, default) {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!("window.prompt failed: {:?}", e);
                None
            }
        }
    }
}

/// Opens pages through `window.open`.
#[derive(Clone, Debug)]
pub struct BrowserNavigator {
    window: web_sys::Window,
}

impl BrowserNavigator {
    pub fn new(window: web_sys::Window) -> Self {
        Self { window }
    }
}

impl Navigator for BrowserNavigator {
    fn open(&self, url: &str) -> Result<(), PlatformError> {
        self.window
            .open_with_url(url)
            .map_err(|e| format!("window.open failed: {:?}", e))?;
        Ok(())
    }
}

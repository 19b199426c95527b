//! JsToolbar - the toolbar wrapper for JavaScript.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use quicktags_browser::{BrowserToolbar, MountedToolbar};
use quicktags_core::{
    ActionOutcome, LinkOutcome, LookupOutcome, Quicktags, TagIndex, ToolbarAction, ToolbarConfig,
};

/// Control description handed to JS renderers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsControl {
    id: String,
    label: String,
    action: ToolbarAction,
}

/// A quicktags session bound to one `<textarea>` or `<input>`.
#[wasm_bindgen]
pub struct JsToolbar {
    toolbar: BrowserToolbar,
    mounted: Option<MountedToolbar>,
}

#[wasm_bindgen]
impl JsToolbar {
    /// Create a toolbar with the stock buttons for the field with id `field_id`.
    #[wasm_bindgen(constructor)]
    pub fn new(field_id: &str) -> Result<JsToolbar, JsError> {
        Self::with_session(field_id, Quicktags::new())
    }

    /// Create a toolbar from a JSON `ToolbarConfig`.
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(field_id: &str, config_json: &str) -> Result<JsToolbar, JsError> {
        let config = ToolbarConfig::from_json(config_json)?;
        Self::with_session(field_id, Quicktags::from_config(config))
    }

    fn with_session(field_id: &str, session: Quicktags) -> Result<JsToolbar, JsError> {
        let toolbar = BrowserToolbar::for_element_id(session, field_id)?;
        Ok(Self {
            toolbar,
            mounted: None,
        })
    }

    /// Draw the buttons inside the element with id `container_id`.
    ///
    /// Mounting again replaces the previous toolbar.
    pub fn mount(&mut self, container_id: &str) -> Result<(), JsError> {
        if let Some(previous) = self.mounted.take() {
            previous.unmount();
        }
        self.mounted = Some(self.toolbar.mount_into(container_id)?);
        Ok(())
    }

    pub fn unmount(&mut self) {
        if let Some(mounted) = self.mounted.take() {
            mounted.unmount();
        }
    }

    /// Toggle the tag at `index`.
    pub fn toggle(&mut self, index: usize) -> Result<(), JsError> {
        self.run(ToolbarAction::Toggle(TagIndex(index)))?;
        Ok(())
    }

    /// Prompt for a URL and open, or close, the link tag at `index`.
    ///
    /// Returns false if the prompt was cancelled.
    #[wasm_bindgen(js_name = insertLink)]
    pub fn insert_link(&mut self, index: usize) -> Result<bool, JsError> {
        let outcome = self.run(ToolbarAction::InsertLink(TagIndex(index)))?;
        Ok(!matches!(outcome, ActionOutcome::Link(LinkOutcome::Cancelled)))
    }

    /// Returns false if the prompt was cancelled.
    #[wasm_bindgen(js_name = insertImage)]
    pub fn insert_image(&mut self) -> Result<bool, JsError> {
        let outcome = self.run(ToolbarAction::InsertImage)?;
        Ok(!matches!(outcome, ActionOutcome::Link(LinkOutcome::Cancelled)))
    }

    #[wasm_bindgen(js_name = quickLink)]
    pub fn quick_link(&mut self, index: usize) -> Result<(), JsError> {
        self.run(ToolbarAction::QuickLink(index))?;
        Ok(())
    }

    /// Close every open tag. Returns how many were closed.
    #[wasm_bindgen(js_name = closeAll)]
    pub fn close_all(&mut self) -> Result<usize, JsError> {
        match self.run(ToolbarAction::CloseAll)? {
            ActionOutcome::ClosedAll(n) => Ok(n),
            _ => Ok(0),
        }
    }

    /// Dictionary lookup. Returns the opened URL, or undefined if cancelled.
    pub fn lookup(&mut self) -> Result<Option<String>, JsError> {
        match self.run(ToolbarAction::Lookup)? {
            ActionOutcome::Lookup(LookupOutcome::Opened(url)) => Ok(Some(url)),
            _ => Ok(None),
        }
    }

    /// Execute a serialized `ToolbarAction`, e.g. `{ type: "toggle", index: 0 }`.
    pub fn execute(&mut self, action: JsValue) -> Result<(), JsError> {
        let action: ToolbarAction = serde_wasm_bindgen::from_value(action)?;
        self.run(action)?;
        Ok(())
    }

    /// Indices of currently open tags, oldest first.
    #[wasm_bindgen(js_name = openTags)]
    pub fn open_tags(&self) -> Vec<u32> {
        self.toolbar
            .session()
            .open_tags()
            .iter()
            .map(|i| i.get() as u32)
            .collect()
    }

    /// Current label for the tag control at `index`.
    #[wasm_bindgen(js_name = buttonLabel)]
    pub fn button_label(&self, index: usize) -> Result<String, JsError> {
        Ok(self.toolbar.session().button_label(TagIndex(index))?)
    }

    /// Control layout for custom renderers.
    pub fn controls(&self) -> Result<JsValue, JsError> {
        let session = self.toolbar.session();
        let controls: Vec<JsControl> = session
            .controls()
            .into_iter()
            .map(|c| JsControl {
                label: session
                    .control_label(&c)
                    .unwrap_or_else(|_| c.label.to_string()),
                id: c.id.to_string(),
                action: c.action,
            })
            .collect();
        Ok(serde_wasm_bindgen::to_value(&controls)?)
    }
}

impl JsToolbar {
    fn run(&mut self, action: ToolbarAction) -> Result<ActionOutcome, JsError> {
        let outcome = self.toolbar.run(action);
        if let Some(mounted) = &self.mounted {
            mounted.sync_labels(&self.toolbar);
        }
        Ok(outcome?)
    }
}

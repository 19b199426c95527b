//! `<textarea>` / `<input>` selection capability.
//!
//! The DOM reports `selectionStart`/`selectionEnd` in UTF-16 code units; the
//! core works in chars. Conversion happens here, against the current value.

use quicktags_core::{PlatformError, Selection, SelectionCapability, char_to_utf16, utf16_to_char};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

/// A DOM text control the toolbar can edit.
#[derive(Clone, Debug)]
pub enum TextField {
    TextArea(HtmlTextAreaElement),
    Input(HtmlInputElement),
}

impl TextField {
    fn value(&self) -> String {
        match self {
            Self::TextArea(el) => el.value(),
            Self::Input(el) => el.value(),
        }
    }

    fn set_value(&self, value: &str) {
        match self {
            Self::TextArea(el) => el.set_value(value),
            Self::Input(el) => el.set_value(value),
        }
    }

    fn selection_range(&self) -> Option<(u32, u32)> {
        let (start, end) = match self {
            Self::TextArea(el) => (el.selection_start(), el.selection_end()),
            Self::Input(el) => (el.selection_start(), el.selection_end()),
        };
        let start = start.ok().flatten()?;
        let end = end.ok().flatten()?;
        Some((start, end))
    }

    fn set_selection_range(&self, start: u32, end: u32) -> Result<(), wasm_bindgen::JsValue> {
        match self {
            Self::TextArea(el) => el.set_selection_range(start, end),
            Self::Input(el) => el.set_selection_range(start, end),
        }
    }

    fn focus(&self) -> Result<(), wasm_bindgen::JsValue> {
        match self {
            Self::TextArea(el) => el.focus(),
            Self::Input(el) => el.focus(),
        }
    }
}

/// Browser implementation of `SelectionCapability`.
///
/// Cloning shares the underlying element.
#[derive(Clone, Debug)]
pub struct TextFieldCapability {
    field: TextField,
}

impl TextFieldCapability {
    pub fn new(field: TextField) -> Self {
        Self { field }
    }

    /// Look up a `<textarea>` or `<input>` by element id.
    pub fn from_element_id(
        document: &web_sys::Document,
        id: &str,
    ) -> Result<Self, PlatformError> {
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| format!("element not found: {}", id))?;

        let field = match element.dyn_into::<HtmlTextAreaElement>() {
            Ok(textarea) => TextField::TextArea(textarea),
            Err(element) => element
                .dyn_into::<HtmlInputElement>()
                .map(TextField::Input)
                .map_err(|_| format!("element {} is not a textarea or input", id))?,
        };
        Ok(Self::new(field))
    }

    pub fn field(&self) -> &TextField {
        &self.field
    }
}

impl SelectionCapability for TextFieldCapability {
    fn selection(&self) -> Option<Selection> {
        let (start, end) = self.field.selection_range()?;
        let value = self.field.value();
        Some(Selection::new(
            utf16_to_char(&value, start as usize),
            utf16_to_char(&value, end as usize),
        ))
    }

    fn set_selection(&mut self, selection: Selection) {
        let value = self.field.value();
        let start = char_to_utf16(&value, selection.start()) as u32;
        let end = char_to_utf16(&value, selection.end()) as u32;
        if let Err(e) = self.field.set_selection_range(start, end) {
            tracing::warn!("setSelectionRange failed: {:?}", e);
        }
    }

    fn value(&self) -> String {
        self.field.value()
    }

    fn set_value(&mut self, value: &str) {
        self.field.set_value(value);
    }

    fn focus(&mut self) {
        if let Err(e) = self.field.focus() {
            tracing::warn!("focus failed: {:?}", e);
        }
    }
}

//! In-memory text field.
//!
//! `PlainField` stores its contents in a `TextBuffer` and its selection in a
//! plain field. Native hosts and tests use it wherever there is no DOM.

use crate::platform::SelectionCapability;
use crate::text::{FieldRope, TextBuffer};
use crate::types::Selection;

/// Field-based `SelectionCapability` implementation.
#[derive(Clone, Debug)]
pub struct PlainField<T: TextBuffer = FieldRope> {
    buffer: T,
    selection: Option<Selection>,
    cursor_addressable: bool,
    focus_count: usize,
}

impl PlainField<FieldRope> {
    /// Create a field with the caret at the end of `text`.
    pub fn new(text: &str) -> Self {
        Self::from_buffer(FieldRope::from_str(text))
    }

    /// Create a field with `text` and the given selection.
    pub fn with_selection(text: &str, selection: Selection) -> Self {
        let mut field = Self::new(text);
        field.set_selection(selection);
        field
    }

    /// Create a field with a collapsed caret at `offset`.
    pub fn caret(text: &str, offset: usize) -> Self {
        Self::with_selection(text, Selection::collapsed(offset))
    }

    /// Create a field that exposes no cursor; every edit appends.
    pub fn without_cursor(text: &str) -> Self {
        let mut field = Self::new(text);
        field.cursor_addressable = false;
        field.selection = None;
        field
    }
}

impl<T: TextBuffer> PlainField<T> {
    /// Wrap an existing buffer, caret at the end.
    pub fn from_buffer(buffer: T) -> Self {
        let end = buffer.len_chars();
        Self {
            buffer,
            selection: Some(Selection::collapsed(end)),
            cursor_addressable: true,
            focus_count: 0,
        }
    }

    /// The underlying buffer.
    pub fn buffer(&self) -> &T {
        &self.buffer
    }

    /// Field contents as a String.
    pub fn content(&self) -> String {
        self.buffer.to_string()
    }

    /// Number of times the field has been focused.
    pub fn focused(&self) -> usize {
        self.focus_count
    }
}

impl<T: TextBuffer> SelectionCapability for PlainField<T> {
    fn selection(&self) -> Option<Selection> {
        self.selection
    }

    fn set_selection(&mut self, selection: Selection) {
        if self.cursor_addressable {
            self.selection = Some(selection.clamp(self.buffer.len_chars()));
        }
    }

    fn value(&self) -> String {
        self.buffer.to_string()
    }

    fn set_value(&mut self, value: &str) {
        let len = self.buffer.len_chars();
        self.buffer.replace(0..len, value);
        let new_len = self.buffer.len_chars();
        if let Some(sel) = self.selection {
            self.selection = Some(sel.clamp(new_len));
        }
    }

    fn focus(&mut self) {
        self.focus_count += 1;
    }

    fn selected_text(&self) -> Option<smol_str::SmolStr> {
        let sel = self.selection.filter(|s| !s.is_collapsed())?;
        self.buffer.slice(sel.to_range())
    }
}

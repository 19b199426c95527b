//! The toolbar session and its selection editor.
//!
//! `Quicktags` owns the tag registry, the open-tag stack, the quick links and
//! the config for one editing session. Every operation takes the host field
//! by reference, so several sessions can drive several fields independently.

use std::ops::Range;

use smol_str::SmolStr;

use crate::config::ToolbarConfig;
use crate::error::Result;
use crate::link::QuickLink;
use crate::platform::SelectionCapability;
use crate::registry::TagRegistry;
use crate::stack::OpenTagStack;
use crate::text::char_to_byte;
use crate::types::{Selection, TagIndex};

/// What a toggle did to the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Selection wrapped in open + close markup. Stack untouched.
    Wrapped,
    /// Open markup inserted and the tag pushed onto the stack.
    Opened,
    /// Open markup of an unpaired tag inserted. Stack untouched.
    Inserted,
    /// Close markup inserted and the tag removed from the stack.
    Closed,
}

/// One toolbar editing session.
#[derive(Clone, Debug)]
pub struct Quicktags {
    registry: TagRegistry,
    open_tags: OpenTagStack,
    quick_links: Vec<QuickLink>,
    config: ToolbarConfig,
}

impl Default for Quicktags {
    fn default() -> Self {
        Self::new()
    }
}

impl Quicktags {
    /// Session with the stock buttons and quick links.
    pub fn new() -> Self {
        Self::from_config(ToolbarConfig::default())
    }

    /// Session built from a config. Buttons and quick links left unset in
    /// the config fall back to the stock sets.
    pub fn from_config(config: ToolbarConfig) -> Self {
        Self {
            registry: config.registry(),
            quick_links: config.quick_links(),
            open_tags: OpenTagStack::new(),
            config,
        }
    }

    /// Session over an explicit registry.
    pub fn with_registry(registry: TagRegistry) -> Self {
        Self {
            registry,
            ..Self::new()
        }
    }

    pub fn registry(&self) -> &TagRegistry {
        &self.registry
    }

    pub fn open_tags(&self) -> &OpenTagStack {
        &self.open_tags
    }

    pub fn quick_links(&self) -> &[QuickLink] {
        &self.quick_links
    }

    pub fn config(&self) -> &ToolbarConfig {
        &self.config
    }

    /// Label for the control bound to `index`: prefixed with `/` while open.
    pub fn button_label(&self, index: TagIndex) -> Result<String> {
        let tag = self.registry.lookup(index)?;
        if self.open_tags.contains(index) {
            Ok(format!("/{}", tag.label))
        } else {
            Ok(tag.label.to_string())
        }
    }

    /// Toggle the tag at `index` at the field's selection.
    ///
    /// - Non-empty selection: wrap it in open + close markup, caret after
    ///   the close markup. The stack is not touched.
    /// - Caret, tag not open (or unpaired): insert open markup, track it if
    ///   pairable.
    /// - Caret, tag open: insert close markup and drop every stack entry
    ///   for it.
    pub fn toggle<F>(&mut self, field: &mut F, index: TagIndex) -> Result<ToggleOutcome>
    where
        F: SelectionCapability + ?Sized,
    {
        let open = self.registry.lookup(index)?.open_markup.clone();
        self.toggle_inner(field, index, open)
    }

    /// Toggle with `open_markup` standing in for the registered open markup.
    ///
    /// The registry entry is left as is; only this call sees the override.
    pub fn toggle_with_open<F>(
        &mut self,
        field: &mut F,
        index: TagIndex,
        open_markup: &str,
    ) -> Result<ToggleOutcome>
    where
        F: SelectionCapability + ?Sized,
    {
        self.registry.lookup(index)?;
        self.toggle_inner(field, index, SmolStr::new(open_markup))
    }

    fn toggle_inner<F>(
        &mut self,
        field: &mut F,
        index: TagIndex,
        open: SmolStr,
    ) -> Result<ToggleOutcome>
    where
        F: SelectionCapability + ?Sized,
    {
        let tag = self.registry.lookup(index)?;
        let close = tag.close_markup.clone();
        let pairable = tag.pairable;

        let selection = field.selection();
        if let Some(sel) = selection.filter(|s| !s.is_collapsed()) {
            let value = field.value();
            let selected: String = value.chars().skip(sel.start()).take(sel.len()).collect();
            let wrapped = format!("{open}{selected}{close}");
            splice(field, Some(sel.to_range()), &wrapped);
            tracing::debug!(
                target: "quicktags::editor",
                %index,
                start = sel.start(),
                end = sel.end(),
                "wrapped selection"
            );
            return Ok(ToggleOutcome::Wrapped);
        }

        let caret = selection.map(|s| s.start()..s.start());
        if !pairable || !self.open_tags.contains(index) {
            splice(field, caret, &open);
            if pairable {
                self.open_tags.push(index);
                tracing::debug!(
                    target: "quicktags::editor",
                    %index,
                    depth = self.open_tags.len(),
                    "opened tag"
                );
                Ok(ToggleOutcome::Opened)
            } else {
                tracing::debug!(target: "quicktags::editor", %index, "inserted unpaired tag");
                Ok(ToggleOutcome::Inserted)
            }
        } else {
            splice(field, caret, &close);
            self.open_tags.remove(index);
            tracing::debug!(
                target: "quicktags::editor",
                %index,
                depth = self.open_tags.len(),
                "closed tag"
            );
            Ok(ToggleOutcome::Closed)
        }
    }

    /// Insert `value` at the selection, replacing it. No stack bookkeeping.
    pub fn insert_raw<F>(&mut self, field: &mut F, value: &str)
    where
        F: SelectionCapability + ?Sized,
    {
        let range = field.selection().map(|s| s.to_range());
        splice(field, range, value);
    }

    /// Close every open tag, most recently opened first.
    ///
    /// Runs at most as many toggles as there were open tags on entry, each
    /// against the live last entry. A selection is collapsed to its end
    /// first so each toggle closes rather than wraps. Returns how many tags
    /// were closed.
    pub fn close_all<F>(&mut self, field: &mut F) -> Result<usize>
    where
        F: SelectionCapability + ?Sized,
    {
        let count = self.open_tags.len();
        if count == 0 {
            return Ok(0);
        }

        if let Some(sel) = field.selection().filter(|s| !s.is_collapsed()) {
            field.set_selection(Selection::collapsed(sel.end()));
        }

        let mut closed = 0;
        for _ in 0..count {
            let Some(last) = self.open_tags.last() else {
                break;
            };
            self.toggle(field, last)?;
            closed += 1;
        }
        tracing::debug!(target: "quicktags::editor", closed, "closed all open tags");
        Ok(closed)
    }
}

/// Replace `range` (char offsets) with `text` and put the caret after it.
///
/// `None` means the host has no cursor: `text` is appended instead.
fn splice<F>(field: &mut F, range: Option<Range<usize>>, text: &str)
where
    F: SelectionCapability + ?Sized,
{
    let mut value = field.value();
    match range {
        Some(range) => {
            let start = char_to_byte(&value, range.start);
            let end = char_to_byte(&value, range.end);
            value.replace_range(start..end, text);
            field.set_value(&value);

            let caret = value[..start].chars().count() + text.chars().count();
            tracing::trace!(target: "quicktags::editor", ?range, caret, "spliced field");
            field.set_selection(Selection::collapsed(caret));
        }
        None => {
            value.push_str(text);
            field.set_value(&value);
        }
    }
    field.focus();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuicktagError;
    use crate::field::PlainField;
    use crate::registry::TagDef;

    fn tag(session: &Quicktags, id: &str) -> TagIndex {
        session.registry().position(id).unwrap()
    }

    #[test]
    fn test_toggle_open_then_close_at_caret() {
        let mut session = Quicktags::new();
        let bold = tag(&session, "ed_bold");
        let mut field = PlainField::caret("Hello world", 5);

        assert_eq!(session.toggle(&mut field, bold).unwrap(), ToggleOutcome::Opened);
        insta::assert_snapshot!(field.content(), @"Hello<strong> world");
        assert_eq!(session.open_tags().as_slice(), &[bold]);
        assert_eq!(field.selection(), Some(Selection::collapsed(13)));

        assert_eq!(session.toggle(&mut field, bold).unwrap(), ToggleOutcome::Closed);
        insta::assert_snapshot!(field.content(), @"Hello<strong></strong> world");
        assert!(session.open_tags().is_empty());
        assert_eq!(field.selection(), Some(Selection::collapsed(22)));
    }

    #[test]
    fn test_every_pairable_tag_round_trips() {
        let mut session = Quicktags::new();
        let pairable: Vec<_> = session
            .registry()
            .iter()
            .filter(|(_, t)| t.pairable)
            .map(|(i, t)| (i, t.clone()))
            .collect();

        for (index, def) in pairable {
            let mut field = PlainField::new("");
            session.toggle(&mut field, index).unwrap();
            session.toggle(&mut field, index).unwrap();
            assert_eq!(
                field.content(),
                format!("{}{}", def.open_markup, def.close_markup),
                "tag {}",
                def.id
            );
            assert!(session.open_tags().is_empty(), "tag {}", def.id);
        }
    }

    #[test]
    fn test_selection_wraps_every_tag_without_touching_stack() {
        let mut session = Quicktags::new();
        let tags: Vec<_> = session
            .registry()
            .iter()
            .map(|(i, t)| (i, t.clone()))
            .collect();

        for (index, def) in tags {
            let mut field = PlainField::with_selection("aXb", Selection::new(1, 2));
            assert_eq!(
                session.toggle(&mut field, index).unwrap(),
                ToggleOutcome::Wrapped
            );
            let expected = format!("a{}X{}b", def.open_markup, def.close_markup);
            assert_eq!(field.content(), expected, "tag {}", def.id);
            assert!(session.open_tags().is_empty(), "tag {}", def.id);
        }
    }

    #[test]
    fn test_wrap_places_caret_after_close_markup() {
        let mut session = Quicktags::new();
        let em = tag(&session, "ed_italic");
        // backwards selection over "big"
        let mut field = PlainField::with_selection("a big dog", Selection::new(5, 2));

        session.toggle(&mut field, em).unwrap();
        insta::assert_snapshot!(field.content(), @"a <em>big</em> dog");
        assert_eq!(field.selection(), Some(Selection::collapsed(14)));
    }

    #[test]
    fn test_unpaired_tag_never_tracked() {
        let mut session = Quicktags::new();
        let nbsp = tag(&session, "ed_nbsp");
        let quot = tag(&session, "ed_quot");
        let mut field = PlainField::new("");

        assert_eq!(session.toggle(&mut field, nbsp).unwrap(), ToggleOutcome::Inserted);
        assert_eq!(session.toggle(&mut field, nbsp).unwrap(), ToggleOutcome::Inserted);
        assert_eq!(session.toggle(&mut field, quot).unwrap(), ToggleOutcome::Inserted);
        assert_eq!(session.toggle(&mut field, quot).unwrap(), ToggleOutcome::Inserted);
        insta::assert_snapshot!(field.content(), @"&#160;&#160;&#34;&#34;");
        assert!(session.open_tags().is_empty());
    }

    #[test]
    fn test_unpaired_wrap_degrades_to_prefix() {
        let mut session = Quicktags::new();
        let lt = tag(&session, "ed_lt");
        let mut field = PlainField::with_selection("x y", Selection::new(2, 3));

        session.toggle(&mut field, lt).unwrap();
        insta::assert_snapshot!(field.content(), @"x &lt;y");
    }

    #[test]
    fn test_button_label_tracks_open_state() {
        let mut session = Quicktags::new();
        let bold = tag(&session, "ed_bold");
        let mut field = PlainField::new("");

        assert_eq!(session.button_label(bold).unwrap(), "B");
        session.toggle(&mut field, bold).unwrap();
        assert_eq!(session.button_label(bold).unwrap(), "/B");
        session.toggle(&mut field, bold).unwrap();
        assert_eq!(session.button_label(bold).unwrap(), "B");
    }

    #[test]
    fn test_close_all_closes_in_reverse_order() {
        let mut session = Quicktags::new();
        let bold = tag(&session, "ed_bold");
        let em = tag(&session, "ed_italic");
        let under = tag(&session, "ed_under");
        let mut field = PlainField::new("");

        session.toggle(&mut field, under).unwrap();
        session.toggle(&mut field, bold).unwrap();
        session.toggle(&mut field, em).unwrap();
        assert_eq!(session.open_tags().len(), 3);

        assert_eq!(session.close_all(&mut field).unwrap(), 3);
        insta::assert_snapshot!(field.content(), @"<u><strong><em></em></strong></u>");
        assert!(session.open_tags().is_empty());
    }

    #[test]
    fn test_close_all_collapses_selection_first() {
        let mut session = Quicktags::new();
        let bold = tag(&session, "ed_bold");
        let mut field = PlainField::new("go");
        session.toggle(&mut field, bold).unwrap();
        let len = field.content().chars().count();
        field.set_selection(Selection::new(0, len));

        assert_eq!(session.close_all(&mut field).unwrap(), 1);
        insta::assert_snapshot!(field.content(), @"go<strong></strong>");
        assert!(session.open_tags().is_empty());
    }

    #[test]
    fn test_close_all_on_empty_stack_is_noop() {
        let mut session = Quicktags::new();
        let mut field = PlainField::caret("same", 2);
        assert_eq!(session.close_all(&mut field).unwrap(), 0);
        assert_eq!(field.content(), "same");
        assert_eq!(field.focused(), 0);
    }

    #[test]
    fn test_insert_raw_replaces_selection() {
        let mut session = Quicktags::new();
        let mut field = PlainField::with_selection("one two three", Selection::new(4, 7));

        session.insert_raw(&mut field, "2");
        insta::assert_snapshot!(field.content(), @"one 2 three");
        assert_eq!(field.selection(), Some(Selection::collapsed(5)));
        assert!(session.open_tags().is_empty());
    }

    #[test]
    fn test_no_cursor_host_appends() {
        let mut session = Quicktags::new();
        let bold = tag(&session, "ed_bold");
        let mut field = PlainField::without_cursor("text ");

        assert_eq!(session.toggle(&mut field, bold).unwrap(), ToggleOutcome::Opened);
        session.insert_raw(&mut field, "more");
        assert_eq!(session.toggle(&mut field, bold).unwrap(), ToggleOutcome::Closed);
        insta::assert_snapshot!(field.content(), @"text <strong>more</strong>");
        assert_eq!(field.focused(), 3);
    }

    #[test]
    fn test_multibyte_offsets_are_chars() {
        let mut session = Quicktags::new();
        let bold = tag(&session, "ed_bold");
        let mut field = PlainField::with_selection("héllo wörld", Selection::new(6, 11));

        session.toggle(&mut field, bold).unwrap();
        insta::assert_snapshot!(field.content(), @"héllo <strong>wörld</strong>");
        assert_eq!(field.selection(), Some(Selection::collapsed(28)));
    }

    #[test]
    fn test_invalid_index_leaves_field_alone() {
        let mut session = Quicktags::new();
        let mut field = PlainField::caret("abc", 1);
        let err = session.toggle(&mut field, TagIndex(200)).unwrap_err();
        assert!(matches!(err, QuicktagError::InvalidTagIndex { .. }));
        assert_eq!(field.content(), "abc");
        assert_eq!(field.focused(), 0);
    }

    #[test]
    fn test_sessions_are_independent() {
        let registry: TagRegistry = [TagDef::paired("ed_code", "code", "<code>", "</code>")]
            .into_iter()
            .collect();
        let mut a = Quicktags::with_registry(registry.clone());
        let b = Quicktags::with_registry(registry);
        let mut field = PlainField::new("");

        a.toggle(&mut field, TagIndex(0)).unwrap();
        assert!(a.open_tags().contains(TagIndex(0)));
        assert!(b.open_tags().is_empty());
    }
}

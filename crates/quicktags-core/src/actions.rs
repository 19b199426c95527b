//! Toolbar actions and control layout.
//!
//! `ToolbarAction` is what a toolbar control does when activated, decoupled
//! from how it is rendered. `Quicktags::controls()` lays out one control per
//! registered tag plus the two fixed controls, and `Quicktags::execute()` is
//! the single dispatch point renderers call into.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::editor::{Quicktags, ToggleOutcome};
use crate::error::Result;
use crate::link::LinkOutcome;
use crate::lookup::LookupOutcome;
use crate::platform::{Navigator, Prompt, SelectionCapability};
use crate::registry::TagKind;
use crate::types::TagIndex;

/// Control id of the fixed "close all open tags" control.
pub const CLOSE_ALL_ID: &str = "ed_close";
/// Control id of the fixed dictionary lookup control.
pub const LOOKUP_ID: &str = "ed_spell";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "index", rename_all = "camelCase")]
pub enum ToolbarAction {
    /// Toggle a plain tag.
    Toggle(TagIndex),
    /// Prompt for a URL and open, or close, a link tag.
    InsertLink(TagIndex),
    /// Prompt for an image and insert it.
    InsertImage,
    /// Insert a preset link.
    QuickLink(usize),
    /// Close every open tag.
    CloseAll,
    /// Look up the selected word.
    Lookup,
}

/// Result of executing a `ToolbarAction`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Toggled(ToggleOutcome),
    Link(LinkOutcome),
    ClosedAll(usize),
    Lookup(LookupOutcome),
}

/// One control a renderer should draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarControl {
    pub id: SmolStr,
    pub label: SmolStr,
    pub action: ToolbarAction,
    /// Tag the control's label follows, for open-state label updates.
    pub tag: Option<TagIndex>,
}

/// The host collaborators an action may need.
pub struct Host<'a> {
    pub field: &'a mut dyn SelectionCapability,
    pub prompt: &'a dyn Prompt,
    pub navigator: &'a dyn Navigator,
}

impl<'a> Host<'a> {
    pub fn new(
        field: &'a mut dyn SelectionCapability,
        prompt: &'a dyn Prompt,
        navigator: &'a dyn Navigator,
    ) -> Self {
        Self {
            field,
            prompt,
            navigator,
        }
    }
}

impl Quicktags {
    /// Execute a toolbar action against the host.
    pub fn execute(
        &mut self,
        action: ToolbarAction,
        host: &mut Host<'_>,
    ) -> Result<ActionOutcome> {
        tracing::trace!(target: "quicktags::actions", ?action, "executing");
        match action {
            ToolbarAction::Toggle(index) => self
                .toggle(&mut *host.field, index)
                .map(ActionOutcome::Toggled),
            ToolbarAction::InsertLink(index) => self
                .insert_link(&mut *host.field, host.prompt, index, None)
                .map(ActionOutcome::Link),
            ToolbarAction::InsertImage => self
                .insert_image(&mut *host.field, host.prompt)
                .map(ActionOutcome::Link),
            ToolbarAction::QuickLink(index) => self
                .insert_quick_link(&mut *host.field, index)
                .map(ActionOutcome::Link),
            ToolbarAction::CloseAll => self
                .close_all(&mut *host.field)
                .map(ActionOutcome::ClosedAll),
            ToolbarAction::Lookup => self
                .spell(&mut *host.field, host.prompt, host.navigator)
                .map(ActionOutcome::Lookup),
        }
    }

    /// One control per registered tag, then close-all and lookup.
    pub fn controls(&self) -> Vec<ToolbarControl> {
        let mut controls: Vec<_> = self
            .registry()
            .iter()
            .map(|(index, tag)| {
                let action = match tag.kind {
                    TagKind::Plain => ToolbarAction::Toggle(index),
                    TagKind::Link => ToolbarAction::InsertLink(index),
                    TagKind::Image => ToolbarAction::InsertImage,
                };
                ToolbarControl {
                    id: tag.id.clone(),
                    label: tag.label.clone(),
                    action,
                    tag: Some(index),
                }
            })
            .collect();

        controls.push(ToolbarControl {
            id: SmolStr::new_static(CLOSE_ALL_ID),
            label: SmolStr::new(&self.config().close_all_label),
            action: ToolbarAction::CloseAll,
            tag: None,
        });
        controls.push(ToolbarControl {
            id: SmolStr::new_static(LOOKUP_ID),
            label: SmolStr::new(&self.config().lookup_label),
            action: ToolbarAction::Lookup,
            tag: None,
        });
        controls
    }

    /// Current label for a control, reflecting open state for tag controls.
    pub fn control_label(&self, control: &ToolbarControl) -> Result<String> {
        match control.tag {
            Some(index) => self.button_label(index),
            None => Ok(control.label.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::PlainField;
    use crate::testing::{RecordingNavigator, ScriptedPrompt};
    use crate::types::Selection;

    #[test]
    fn test_controls_layout() {
        let session = Quicktags::new();
        let controls = session.controls();
        assert_eq!(controls.len(), session.registry().len() + 2);

        assert_eq!(controls[0].id, "ed_bold");
        assert_eq!(controls[0].action, ToolbarAction::Toggle(TagIndex(0)));

        let link = controls.iter().find(|c| c.id == "ed_link").unwrap();
        assert_eq!(link.action, ToolbarAction::InsertLink(TagIndex(10)));
        let img = controls.iter().find(|c| c.id == "ed_img").unwrap();
        assert_eq!(img.action, ToolbarAction::InsertImage);

        let close = &controls[controls.len() - 2];
        assert_eq!((close.id.as_str(), close.label.as_str()), ("ed_close", "Close Tags"));
        assert_eq!(close.action, ToolbarAction::CloseAll);
        let spell = &controls[controls.len() - 1];
        assert_eq!((spell.id.as_str(), spell.label.as_str()), ("ed_spell", "Dict"));
        assert_eq!(spell.action, ToolbarAction::Lookup);
    }

    #[test]
    fn test_execute_dispatches() {
        let mut session = Quicktags::new();
        let mut field = PlainField::new("");
        let prompt = ScriptedPrompt::new([Some("http://x.com")]);
        let navigator = RecordingNavigator::default();
        let mut host = Host::new(&mut field, &prompt, &navigator);

        let bold = ToolbarAction::Toggle(TagIndex(0));
        assert_eq!(
            session.execute(bold, &mut host).unwrap(),
            ActionOutcome::Toggled(ToggleOutcome::Opened)
        );
        assert_eq!(
            session
                .execute(ToolbarAction::InsertLink(TagIndex(10)), &mut host)
                .unwrap(),
            ActionOutcome::Link(LinkOutcome::Toggled(ToggleOutcome::Opened))
        );
        assert_eq!(
            session.execute(ToolbarAction::CloseAll, &mut host).unwrap(),
            ActionOutcome::ClosedAll(2)
        );
        host.field.set_selection(Selection::new(0, 8));
        assert!(matches!(
            session.execute(ToolbarAction::Lookup, &mut host).unwrap(),
            ActionOutcome::Lookup(LookupOutcome::Opened(_))
        ));

        insta::assert_snapshot!(field.content(), @r#"<strong><a href="http://x.com"></a></strong>"#);
        assert_eq!(
            navigator.opened(),
            vec!["http://dictionary.reference.com/search?q=%3Cstrong%3E".to_string()]
        );
    }

    #[test]
    fn test_control_label_follows_open_state() {
        let mut session = Quicktags::new();
        let mut field = PlainField::new("");
        let controls = session.controls();
        let bold = &controls[0];
        let close = &controls[controls.len() - 2];

        session.toggle(&mut field, TagIndex(0)).unwrap();
        assert_eq!(session.control_label(bold).unwrap(), "/B");
        assert_eq!(session.control_label(close).unwrap(), "Close Tags");
    }

    #[test]
    fn test_action_serde_shape() {
        let json = serde_json::to_string(&ToolbarAction::Toggle(TagIndex(3))).unwrap();
        assert_eq!(json, r#"{"type":"toggle","index":3}"#);
        let back: ToolbarAction = serde_json::from_str(r#"{"type":"closeAll"}"#).unwrap();
        assert_eq!(back, ToolbarAction::CloseAll);
    }
}

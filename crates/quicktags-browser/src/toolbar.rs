//! Toolbar mounting and click dispatch.
//!
//! `BrowserToolbar` binds one `Quicktags` session to one text field. Mounting
//! it draws an `<input type="button">` per control inside `div#ed_toolbar`,
//! and every click runs the control's action and then re-syncs all button
//! labels from the session's open-tag state.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use gloo_events::EventListener;
use quicktags_core::{
    ActionOutcome, Host, PlatformError, Quicktags, ToolbarAction, ToolbarControl,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlDivElement, HtmlInputElement};

use crate::field::TextFieldCapability;
use crate::window::{BrowserNavigator, BrowserPrompt};

/// Id of the toolbar container element.
pub const TOOLBAR_ID: &str = "ed_toolbar";
/// Class set on every toolbar button.
pub const BUTTON_CLASS: &str = "ed_button";

/// A session bound to a DOM field. Cloning shares the session.
#[derive(Clone)]
pub struct BrowserToolbar {
    session: Rc<RefCell<Quicktags>>,
    field: TextFieldCapability,
    prompt: BrowserPrompt,
    navigator: BrowserNavigator,
}

impl BrowserToolbar {
    pub fn new(session: Quicktags, field: TextFieldCapability) -> Result<Self, PlatformError> {
        let window = web_sys::window().ok_or("no window")?;
        Ok(Self {
            session: Rc::new(RefCell::new(session)),
            field,
            prompt: BrowserPrompt::new(window.clone()),
            navigator: BrowserNavigator::new(window),
        })
    }

    /// Bind `session` to the `<textarea>`/`<input>` with id `field_id`.
    pub fn for_element_id(session: Quicktags, field_id: &str) -> Result<Self, PlatformError> {
        let document = document()?;
        let field = TextFieldCapability::from_element_id(&document, field_id)?;
        Self::new(session, field)
    }

    pub fn session(&self) -> Ref<'_, Quicktags> {
        self.session.borrow()
    }

    pub fn field(&self) -> &TextFieldCapability {
        &self.field
    }

    /// Run an action against the bound field.
    pub fn run(&self, action: ToolbarAction) -> quicktags_core::Result<ActionOutcome> {
        let mut field = self.field.clone();
        let mut host = Host::new(&mut field, &self.prompt, &self.navigator);
        let outcome = self.session.borrow_mut().execute(action, &mut host);
        match &outcome {
            Ok(outcome) => tracing::debug!(?action, ?outcome, "toolbar action"),
            Err(e) => tracing::warn!(?action, "toolbar action failed: {}", e),
        }
        outcome
    }

    /// Draw the toolbar as the last child of `container`.
    pub fn mount(&self, container: &Element) -> Result<MountedToolbar, PlatformError> {
        let document = document()?;
        let root = document
            .create_element("div")
            .map_err(|e| format!("create_element failed: {:?}", e))?
            .dyn_into::<HtmlDivElement>()
            .map_err(|_| "div is not HtmlDivElement")?;
        root.set_id(TOOLBAR_ID);

        let controls = self.session.borrow().controls();
        let mut buttons = Vec::with_capacity(controls.len());
        for control in controls {
            let button = create_button(&document, &control)?;
            root.append_child(&button)
                .map_err(|e| format!("append_child failed: {:?}", e))?;
            buttons.push((control, button));
        }
        let buttons = Rc::new(buttons);

        let listeners: Vec<EventListener> = buttons
            .iter()
            .map(|(control, button)| {
                let toolbar = self.clone();
                let buttons = Rc::clone(&buttons);
                let action = control.action;
                EventListener::new(button, "click", move |_| {
                    // Errors are already logged by `run`.
                    let _ = toolbar.run(action);
                    sync_labels(&toolbar.session(), &buttons);
                })
            })
            .collect();

        container
            .append_child(&root)
            .map_err(|e| format!("append_child failed: {:?}", e))?;

        tracing::debug!(buttons = buttons.len(), "mounted toolbar");
        let mounted = MountedToolbar {
            root,
            buttons,
            _listeners: listeners,
        };
        mounted.sync_labels(self);
        Ok(mounted)
    }

    /// Mount into the element with id `container_id`.
    pub fn mount_into(&self, container_id: &str) -> Result<MountedToolbar, PlatformError> {
        let container = document()?
            .get_element_by_id(container_id)
            .ok_or_else(|| format!("element not found: {}", container_id))?;
        self.mount(&container)
    }
}

/// A drawn toolbar. Dropping it detaches the click listeners; `unmount`
/// also removes the elements.
pub struct MountedToolbar {
    root: HtmlDivElement,
    buttons: Rc<Vec<(ToolbarControl, HtmlInputElement)>>,
    _listeners: Vec<EventListener>,
}

impl MountedToolbar {
    pub fn root(&self) -> &HtmlDivElement {
        &self.root
    }

    /// The button drawn for the control with id `id`.
    pub fn button(&self, id: &str) -> Option<&HtmlInputElement> {
        self.buttons
            .iter()
            .find(|(control, _)| control.id == id)
            .map(|(_, button)| button)
    }

    /// Refresh every button's label, e.g. after running actions from code.
    pub fn sync_labels(&self, toolbar: &BrowserToolbar) {
        sync_labels(&toolbar.session(), &self.buttons);
    }

    pub fn unmount(self) {
        self.root.remove();
    }
}

fn sync_labels(session: &Quicktags, buttons: &[(ToolbarControl, HtmlInputElement)]) {
    for (control, button) in buttons {
        match session.control_label(control) {
            Ok(label) => button.set_value(&label),
            Err(e) => tracing::warn!(id = %control.id, "label sync failed: {}", e),
        }
    }
}

fn create_button(
    document: &Document,
    control: &ToolbarControl,
) -> Result<HtmlInputElement, PlatformError> {
    let button = document
        .create_element("input")
        .map_err(|e| format!("create_element failed: {:?}", e))?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| "input is not HtmlInputElement")?;
    button.set_type("button");
    button.set_id(&control.id);
    button.set_class_name(BUTTON_CLASS);
    button.set_value(&control.label);
    Ok(button)
}

fn document() -> Result<Document, PlatformError> {
    let window = web_sys::window().ok_or("no window")?;
    Ok(window.document().ok_or("no document")?)
}

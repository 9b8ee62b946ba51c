//! A custom-styled single-select that mirrors a native select model.
//!
//! [`Dropdown`] keeps two things in sync:
//! - the [`NativeSelect`], which stays authoritative for the submitted value and validity
//! - a generated presentation (container, list, one [`MirrorItem`] per option) whose state is
//!   expressed entirely through class markers, see
//!   [`crate::options::ClassNames`]
//!
//! Open/closed and the hovered item are read back from those markers, so
//! [`Dropdown::to_markup`] always shows exactly what the widget believes.
//!
//! Input arrives either directly ([`Dropdown::handle_event`]) or through a shared
//! [`crate::router::InputRouter`] that fans one event out to every live dropdown.

mod mirror;
mod view;

pub use mirror::MirrorItem;

use crate::error::DropdownError;
use crate::error::Result;
use crate::input::InputEvent;
use crate::input::KeyEvent;
use crate::input::MouseEvent;
use crate::input::MouseEventKind;
use crate::keymap::DropdownKeyAction;
use crate::markup::ClassList;
use crate::markup::Element;
use crate::native::InvalidEvent;
use crate::native::NativeSelect;
use crate::native::RequiredValidator;
use crate::native::Validator;
use crate::options::DropdownOptions;
use crate::viewport::ViewportState;
use mirror::MirrorList;
use view::HitAreas;

/// Tag used for hosts built by [`Dropdown::from_parts`].
pub const DEFAULT_HOST_TAG: &str = "custom-dropdown";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropdownAction {
    None,
    Redraw,
    Opened,
    Closed,
    /// The native option at this index was committed and the list closed.
    Committed(usize),
    Invalid,
}

pub struct Dropdown {
    options: DropdownOptions,
    host: Element,
    label: Element,
    select: NativeSelect,
    container: ClassList,
    list: MirrorList,
    validator: Box<dyn Validator>,
    pub viewport: ViewportState,
    /// Set when the hover moved; the next render scrolls it into view.
    follow_hover: bool,
    hit: HitAreas,
}

impl std::fmt::Debug for Dropdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dropdown")
            .field("host", &self.host.tag())
            .field("value", &self.select.value())
            .field("open", &self.is_open())
            .field("hovered", &self.hovered())
            .finish_non_exhaustive()
    }
}

impl Dropdown {
    /// Attaches to a host element containing a `<label>` and a `<select>`.
    pub fn attach(host: Element) -> Result<Self> {
        Self::attach_with_options(host, DropdownOptions::default())
    }

    pub fn attach_with_options(host: Element, options: DropdownOptions) -> Result<Self> {
        let select = host
            .find("select")
            .map(NativeSelect::from_element)
            .ok_or_else(|| DropdownError::MissingSelect {
                host: host.tag().to_string(),
            })?;
        let label = host
            .find("label")
            .cloned()
            .ok_or_else(|| DropdownError::MissingLabel {
                host: host.tag().to_string(),
            })?;
        Ok(Self::build(host, label, select, options))
    }

    /// Builds the host markup from a label text and a select model. Cannot fail.
    pub fn from_parts(label: impl Into<String>, select: NativeSelect) -> Self {
        Self::from_parts_with_options(label, select, DropdownOptions::default())
    }

    pub fn from_parts_with_options(
        label: impl Into<String>,
        select: NativeSelect,
        options: DropdownOptions,
    ) -> Self {
        let label = Element::new("label").with_text(label);
        let host = Element::new(DEFAULT_HOST_TAG)
            .with_child(label.clone())
            .with_child(select.to_element());
        Self::build(host, label, select, options)
    }

    fn build(
        host: Element,
        mut label: Element,
        select: NativeSelect,
        options: DropdownOptions,
    ) -> Self {
        let names = &options.class_names;
        let mut container = ClassList::new();
        container.add(&names.container);
        let list = MirrorList::build(&select, names);
        if !select.value().is_empty() {
            label.classes_mut().add(&names.label_has_value);
        }
        log::debug!(
            "[dropdown] attached to <{}> with {} options (value={:?})",
            host.tag(),
            list.len(),
            select.value()
        );

        let mut viewport = ViewportState::default();
        viewport.set_content(list.len() as u32);
        Self {
            options,
            host,
            label,
            select,
            container,
            list,
            validator: Box::new(RequiredValidator),
            viewport,
            follow_hover: false,
            hit: HitAreas::default(),
        }
    }

    pub fn with_validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }

    pub fn set_validator(&mut self, validator: impl Validator + 'static) {
        self.validator = Box::new(validator);
    }

    pub fn options(&self) -> &DropdownOptions {
        &self.options
    }

    /// Replaces the options. Current state is carried over, including under renamed classes.
    pub fn set_options(&mut self, options: DropdownOptions) {
        let old = &self.options.class_names;
        let new = &options.class_names;
        self.host.classes_mut().rename(&old.focused, &new.focused);
        self.host.classes_mut().rename(&old.invalid, &new.invalid);
        self.label.classes_mut().rename(&old.label_has_value, &new.label_has_value);
        self.label.classes_mut().rename(&old.label_invalid, &new.label_invalid);
        self.container.rename(&old.container, &new.container);
        self.list.rename_classes(old, new);
        self.options = options;
    }

    pub fn native(&self) -> &NativeSelect {
        &self.select
    }

    /// Structural edits made here are not mirrored until [`Dropdown::resync`].
    pub fn native_mut(&mut self) -> &mut NativeSelect {
        &mut self.select
    }

    pub fn items(&self) -> &[MirrorItem] {
        self.list.items()
    }

    pub fn label(&self) -> &Element {
        &self.label
    }

    pub fn host_classes(&self) -> &ClassList {
        self.host.classes()
    }

    pub fn value(&self) -> &str {
        self.select.value()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.select.selected_index()
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.select.selected().map(|o| o.label())
    }

    pub fn is_open(&self) -> bool {
        self.list.is_visible(&self.options.class_names)
    }

    pub fn is_focused(&self) -> bool {
        self.host.classes().contains(&self.options.class_names.focused)
    }

    pub fn is_invalid(&self) -> bool {
        self.host.classes().contains(&self.options.class_names.invalid)
    }

    pub fn list_aria_hidden(&self) -> bool {
        self.list.aria_hidden()
    }

    pub fn hovered(&self) -> Option<usize> {
        self.list.hovered(&self.options.class_names)
    }

    /// Returns `false` if already open.
    pub fn open(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        let names = &self.options.class_names;
        self.host.classes_mut().add(&names.focused);
        self.reset_hovered();
        self.list.set_visible(true, &self.options.class_names);
        self.viewport.to_top();
        self.follow_hover = self.hovered().is_some();
        log::debug!("[dropdown] opened (hovered={:?})", self.hovered());
        true
    }

    /// Always applies the closed presentation; returns whether the list was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        let names = &self.options.class_names;
        self.list.set_visible(false, names);
        self.host.classes_mut().remove(&names.focused);
        self.reset_hovered();
        if was_open {
            log::debug!("[dropdown] closed");
        }
        was_open
    }

    /// Container click.
    pub fn toggle(&mut self) -> DropdownAction {
        if self.is_open() {
            self.close();
            DropdownAction::Closed
        } else {
            self.open();
            DropdownAction::Opened
        }
    }

    /// Highlights the mirror item matching the native selection, or nothing.
    fn reset_hovered(&mut self) {
        let names = &self.options.class_names;
        let idx = self
            .select
            .selected()
            .and_then(|o| self.list.position_of_value(o.value()));
        self.list.set_hover(idx, names);
    }

    /// Hover-enter on an item. Returns whether the highlight moved.
    pub fn hover(&mut self, index: usize) -> bool {
        if index >= self.list.len() || self.hovered() == Some(index) {
            return false;
        }
        self.list.set_hover(Some(index), &self.options.class_names);
        self.follow_hover = true;
        log::trace!("[dropdown] hover -> {index}");
        true
    }

    /// Moves the highlight down one item, stopping at the last.
    pub fn hover_next(&mut self) -> bool {
        let len = self.list.len();
        if len == 0 {
            return false;
        }
        let next = match self.hovered() {
            None => 0,
            Some(i) => (i + 1).min(len - 1),
        };
        self.hover(next)
    }

    /// Moves the highlight up one item, stopping at the first.
    pub fn hover_prev(&mut self) -> bool {
        if self.list.len() == 0 {
            return false;
        }
        let prev = self.hovered().map_or(0, |i| i.saturating_sub(1));
        self.hover(prev)
    }

    /// Commits the native option whose value matches the hovered item. No-op without a hover.
    pub fn commit_hovered(&mut self) -> DropdownAction {
        match self.hovered() {
            Some(idx) => self.commit_item(idx),
            None => DropdownAction::None,
        }
    }

    /// Item click: commits the native option matching mirror item `index`.
    pub fn commit_item(&mut self, index: usize) -> DropdownAction {
        let Some(item) = self.list.items().get(index) else {
            return DropdownAction::None;
        };
        match self.select.position_of_value(item.value()) {
            Some(native) => self.commit(native),
            None => DropdownAction::None,
        }
    }

    /// Exclusively selects native option `index`, reflects the label, then closes.
    pub fn commit(&mut self, index: usize) -> DropdownAction {
        if !self.select.select(index) {
            return DropdownAction::None;
        }
        log::debug!("[dropdown] committed {:?}", self.select.value());
        self.reflect_validity();
        self.close();
        DropdownAction::Committed(index)
    }

    /// Re-evaluates the label markers from the native value and validity.
    ///
    /// Invalid wins over has-value and marks both the label and the widget. A valid result
    /// clears any earlier invalid marker.
    pub fn reflect_validity(&mut self) {
        let names = &self.options.class_names;
        let validity = self.validator.validity(&self.select);
        if !validity.valid() {
            self.label.classes_mut().add(&names.label_invalid);
            self.host.classes_mut().add(&names.invalid);
        } else {
            self.label.classes_mut().remove(&names.label_invalid);
            self.host.classes_mut().remove(&names.invalid);
            let has_value = !self.select.value().is_empty();
            self.label.classes_mut().set(&names.label_has_value, has_value);
        }
    }

    /// The native invalid listener. Suppresses the host's default presentation and marks the
    /// widget and its label invalid regardless of the current selection.
    pub fn handle_invalid(&mut self, event: &mut InvalidEvent) -> DropdownAction {
        event.prevent_default();
        let names = &self.options.class_names;
        self.host.classes_mut().add(&names.invalid);
        self.label.classes_mut().add(&names.label_invalid);
        log::debug!("[dropdown] invalid: {:?}", event.validity());
        DropdownAction::Invalid
    }

    /// Runs the validator and dispatches an [`InvalidEvent`] on failure, as form submission
    /// would. Returns whether the select is valid.
    pub fn check_validity(&mut self) -> bool {
        let validity = self.validator.validity(&self.select);
        if validity.valid() {
            return true;
        }
        let mut event = InvalidEvent::new(validity);
        self.handle_invalid(&mut event);
        false
    }

    /// Rebuilds the mirror items from the current native options.
    ///
    /// Visibility is kept. A hovered item survives only if its value is still present.
    pub fn resync(&mut self) {
        let names = &self.options.class_names;
        let open = self.is_open();
        let hovered_value = self
            .hovered()
            .and_then(|i| self.list.items().get(i))
            .map(|i| i.value().to_string());

        self.list = MirrorList::build(&self.select, names);
        self.list.set_visible(open, names);
        let hover = hovered_value.and_then(|v| self.list.position_of_value(&v));
        self.list.set_hover(hover, names);
        self.viewport.set_content(self.list.len() as u32);
        self.hit = HitAreas::default();
        log::debug!("[dropdown] resynced {} options", self.list.len());
    }

    pub fn handle_event(&mut self, event: InputEvent) -> DropdownAction {
        match event {
            InputEvent::Key(key) => self.handle_key(&key),
            InputEvent::Mouse(m) => self.handle_mouse(&m),
        }
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> DropdownAction {
        if self.options.keys_require_open && !self.is_open() {
            return DropdownAction::None;
        }
        match self.options.bindings.action_for(key) {
            Some(DropdownKeyAction::HoverNext) => redraw_if(self.hover_next()),
            Some(DropdownKeyAction::HoverPrev) => redraw_if(self.hover_prev()),
            Some(DropdownKeyAction::Commit) => self.commit_hovered(),
            Some(DropdownKeyAction::Close) => {
                if self.close() {
                    DropdownAction::Closed
                } else {
                    DropdownAction::None
                }
            }
            None => DropdownAction::None,
        }
    }

    pub fn handle_mouse(&mut self, m: &MouseEvent) -> DropdownAction {
        match m.kind {
            _ if m.is_click() => self.handle_click(m.x, m.y),
            MouseEventKind::Moved => match self.item_at(m.x, m.y) {
                Some(idx) => redraw_if(self.hover(idx)),
                None => DropdownAction::None,
            },
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown
                if self.is_open() && self.hit.list_contains(m.x, m.y) =>
            {
                let before = self.viewport.y;
                let delta = if m.kind == MouseEventKind::ScrollUp { -1 } else { 1 };
                self.viewport.scroll_y_by(delta);
                redraw_if(before != self.viewport.y)
            }
            _ => DropdownAction::None,
        }
    }

    fn handle_click(&mut self, x: u16, y: u16) -> DropdownAction {
        if let Some(idx) = self.item_at(x, y) {
            return self.commit_item(idx);
        }
        if self.hit.container_contains(x, y) {
            return self.toggle();
        }
        if self.is_open() && self.hit.list_contains(x, y) {
            return DropdownAction::None;
        }
        self.handle_outside_click()
    }

    /// A click landed outside this widget's rendered bounds.
    pub fn handle_outside_click(&mut self) -> DropdownAction {
        if self.close() {
            DropdownAction::Closed
        } else {
            DropdownAction::None
        }
    }

    /// Whether `(x, y)` is within the trigger row or, while open, the list.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.hit.container_contains(x, y) || (self.is_open() && self.hit.list_contains(x, y))
    }

    /// Whether `(x, y)` is on the open list (items or scrollbar).
    pub fn list_contains(&self, x: u16, y: u16) -> bool {
        self.is_open() && self.hit.list_contains(x, y)
    }

    pub fn item_at(&self, x: u16, y: u16) -> Option<usize> {
        if !self.is_open() {
            return None;
        }
        self.hit.item_at(x, y).filter(|&i| i < self.list.len())
    }

    /// The host element augmented with the generated presentation subtree.
    pub fn to_markup(&self) -> Element {
        let mut host = self.host.clone();
        if let Some(label) = host.find_mut("label") {
            *label = self.label.clone();
        }
        if let Some(select) = host.find_mut("select") {
            *select = self.select.to_element();
        }
        let mut container = Element::new("div");
        *container.classes_mut() = self.container.clone();
        container.push_child(self.list.to_element());
        host.push_child(container);
        host
    }
}

fn redraw_if(changed: bool) -> DropdownAction {
    if changed {
        DropdownAction::Redraw
    } else {
        DropdownAction::None
    }
}

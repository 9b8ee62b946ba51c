//! One input entry point for every dropdown on screen.
//!
//! Instead of each dropdown listening to the whole event stream on its own, the app owns a single
//! [`InputRouter`], registers dropdowns when they are attached and unregisters them when they go
//! away. Each input event is delivered once to the router, which decides per instance whether it
//! is an inside click, an outside click, a hover or a key press.

use std::fmt;

use crate::dropdown::Dropdown;
use crate::dropdown::DropdownAction;
use crate::error::Result;
use crate::input::InputEvent;
use crate::input::MouseEvent;
use crate::input::MouseEventKind;
use crate::markup::Element;
use crate::options::DropdownOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DropdownId(u64);

impl fmt::Display for DropdownId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dropdown#{}", self.0)
    }
}

#[derive(Debug, Default)]
pub struct InputRouter {
    next_id: u64,
    entries: Vec<(DropdownId, Dropdown)>,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of `dropdown` and starts routing input to it.
    pub fn register(&mut self, dropdown: Dropdown) -> DropdownId {
        let id = DropdownId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, dropdown));
        log::debug!("[router] registered {id} ({} live)", self.entries.len());
        id
    }

    /// Attaches a dropdown to `host` and registers it.
    pub fn attach(&mut self, host: Element, options: DropdownOptions) -> Result<DropdownId> {
        let dropdown = Dropdown::attach_with_options(host, options)?;
        Ok(self.register(dropdown))
    }

    /// Stops routing to `id` and hands the dropdown back.
    pub fn unregister(&mut self, id: DropdownId) -> Option<Dropdown> {
        let pos = self.entries.iter().position(|(i, _)| *i == id)?;
        let (_, dropdown) = self.entries.remove(pos);
        log::debug!("[router] unregistered {id} ({} live)", self.entries.len());
        Some(dropdown)
    }

    pub fn get(&self, id: DropdownId) -> Option<&Dropdown> {
        self.entries.iter().find(|(i, _)| *i == id).map(|(_, d)| d)
    }

    pub fn get_mut(&mut self, id: DropdownId) -> Option<&mut Dropdown> {
        self.entries
            .iter_mut()
            .find(|(i, _)| *i == id)
            .map(|(_, d)| d)
    }

    /// Registered ids in registration order.
    pub fn ids(&self) -> Vec<DropdownId> {
        self.entries.iter().map(|(i, _)| *i).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DropdownId, &Dropdown)> {
        self.entries.iter().map(|(i, d)| (*i, d))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (DropdownId, &mut Dropdown)> {
        self.entries.iter_mut().map(|(i, d)| (*i, d))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recently registered dropdown that is currently open.
    pub fn open_id(&self) -> Option<DropdownId> {
        self.entries
            .iter()
            .rev()
            .find(|(_, d)| d.is_open())
            .map(|(i, _)| *i)
    }

    /// Delivers one event to every registered dropdown.
    ///
    /// Returns the instances whose state changed, with what happened to them.
    pub fn handle_event(&mut self, event: &InputEvent) -> Vec<(DropdownId, DropdownAction)> {
        let mut out = Vec::new();
        match event {
            InputEvent::Key(key) => {
                for (id, d) in self.entries.iter_mut() {
                    push_changed(&mut out, *id, d.handle_key(key));
                }
            }
            InputEvent::Mouse(m) => self.route_mouse(m, &mut out),
        }
        out
    }

    fn route_mouse(&mut self, m: &MouseEvent, out: &mut Vec<(DropdownId, DropdownAction)>) {
        // An open list drawn over other widgets owns the point; nobody underneath sees it.
        let owner = self
            .entries
            .iter()
            .rev()
            .find(|(_, d)| d.list_contains(m.x, m.y))
            .map(|(i, _)| *i);

        for (id, d) in self.entries.iter_mut() {
            let action = match owner {
                Some(owner) if owner == *id => d.handle_mouse(m),
                Some(_) if m.is_click() => d.handle_outside_click(),
                Some(_) => DropdownAction::None,
                None => d.handle_mouse(m),
            };
            push_changed(out, *id, action);
        }

        if m.kind != MouseEventKind::Moved {
            log::trace!("[router] mouse {:?} at ({}, {}) owner={owner:?}", m.kind, m.x, m.y);
        }
    }
}

fn push_changed(
    out: &mut Vec<(DropdownId, DropdownAction)>,
    id: DropdownId,
    action: DropdownAction,
) {
    if action != DropdownAction::None {
        out.push((id, action));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyCode;
    use crate::input::KeyEvent;
    use crate::native::NativeOption;
    use crate::native::NativeSelect;
    use crate::theme::Theme;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;

    fn dropdown(label: &str) -> Dropdown {
        let select = NativeSelect::new()
            .with_option(NativeOption::new("x", "X"))
            .with_option(NativeOption::new("y", "Y"))
            .with_option(NativeOption::new("z", "Z"));
        Dropdown::from_parts(label, select)
    }

    fn render_all(router: &mut InputRouter, buf: &mut Buffer) {
        // Side by side: first in columns 0..10, second in 12..22.
        for (n, (_, d)) in router.iter_mut().enumerate() {
            let area = Rect::new(n as u16 * 12, 0, 10, 5);
            d.render(area, buf, &Theme::default());
        }
    }

    fn click(x: u16, y: u16) -> InputEvent {
        InputEvent::Mouse(MouseEvent::click(x, y))
    }

    #[test]
    fn register_and_unregister() {
        let mut router = InputRouter::new();
        let a = router.register(dropdown("A"));
        let b = router.register(dropdown("B"));
        assert_ne!(a, b);
        assert_eq!(router.ids(), vec![a, b]);
        assert!(router.unregister(a).is_some());
        assert!(router.unregister(a).is_none());
        assert_eq!(router.len(), 1);
        assert!(router.get(b).is_some());
    }

    #[test]
    fn attach_surfaces_construction_errors() {
        let mut router = InputRouter::new();
        let err = router
            .attach(Element::new("div"), DropdownOptions::default())
            .unwrap_err();
        assert!(matches!(err, crate::error::DropdownError::MissingSelect { .. }));
        assert!(router.is_empty());
    }

    #[test]
    fn opening_one_closes_the_other() {
        let mut router = InputRouter::new();
        let a = router.register(dropdown("A"));
        let b = router.register(dropdown("B"));
        let mut buf = Buffer::empty(Rect::new(0, 0, 24, 5));
        render_all(&mut router, &mut buf);

        assert_eq!(
            router.handle_event(&click(1, 1)),
            vec![(a, DropdownAction::Opened)]
        );
        render_all(&mut router, &mut buf);
        assert_eq!(router.open_id(), Some(a));

        let changed = router.handle_event(&click(13, 1));
        assert_eq!(
            changed,
            vec![(a, DropdownAction::Closed), (b, DropdownAction::Opened)]
        );
        assert_eq!(router.open_id(), Some(b));
    }

    #[test]
    fn keys_reach_only_open_instances() {
        let mut router = InputRouter::new();
        let a = router.register(dropdown("A"));
        let b = router.register(dropdown("B"));
        if let Some(d) = router.get_mut(b) {
            d.open();
        }

        let down = InputEvent::Key(KeyEvent::new(KeyCode::Down));
        assert_eq!(router.handle_event(&down), vec![(b, DropdownAction::Redraw)]);
        assert_eq!(router.get(a).and_then(|d| d.hovered()), None);
        assert_eq!(router.get(b).and_then(|d| d.hovered()), Some(0));

        let enter = InputEvent::Key(KeyEvent::new(KeyCode::Enter));
        assert_eq!(
            router.handle_event(&enter),
            vec![(b, DropdownAction::Committed(0))]
        );
        assert_eq!(router.get(b).map(|d| d.value()), Some("x"));
    }

    #[test]
    fn open_list_shadows_widgets_underneath() {
        let mut router = InputRouter::new();
        let below = router.register(dropdown("Below"));
        let top = router.register(dropdown("Top"));
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 8));

        // "Below" sits on rows 3..5, "Top" on rows 0..2 with its list covering rows 2..5.
        let theme = Theme::default();
        if let Some(d) = router.get_mut(below) {
            d.render(Rect::new(0, 3, 10, 2), &mut buf, &theme);
        }
        if let Some(d) = router.get_mut(top) {
            d.open();
            d.render(Rect::new(0, 0, 10, 5), &mut buf, &theme);
        }

        let changed = router.handle_event(&click(2, 4));
        assert_eq!(changed, vec![(top, DropdownAction::Committed(2))]);
        assert_eq!(router.get(below).map(|d| d.is_open()), Some(false));
    }
}

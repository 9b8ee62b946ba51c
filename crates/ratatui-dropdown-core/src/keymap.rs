use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::input::KeyModifiers;

/// What a key press asks an open dropdown to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropdownKeyAction {
    HoverNext,
    HoverPrev,
    Commit,
    Close,
}

/// Key bindings for dropdown navigation.
///
/// Defaults follow a native select control:
/// - `Down` / `Up` move the hovered item
/// - `Enter` / `Space` commit the hovered item
/// - `Esc` closes without changing the selection
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropdownBindings {
    pub next: Vec<KeyEvent>,
    pub prev: Vec<KeyEvent>,
    pub commit: Vec<KeyEvent>,
    pub close: Vec<KeyEvent>,
}

impl Default for DropdownBindings {
    fn default() -> Self {
        Self {
            next: vec![KeyEvent::new(KeyCode::Down)],
            prev: vec![KeyEvent::new(KeyCode::Up)],
            commit: vec![KeyEvent::new(KeyCode::Enter), key_char(' ')],
            close: vec![KeyEvent::new(KeyCode::Esc)],
        }
    }
}

impl DropdownBindings {
    /// Vim-style additions on top of the defaults (`j` / `k`).
    pub fn with_vim_keys() -> Self {
        let mut b = Self::default();
        b.next.push(key_char('j'));
        b.prev.push(key_char('k'));
        b
    }

    pub fn action_for(&self, key: &KeyEvent) -> Option<DropdownKeyAction> {
        let hit = |patterns: &[KeyEvent]| patterns.iter().any(|p| key_event_matches(p, key));
        if hit(&self.next) {
            return Some(DropdownKeyAction::HoverNext);
        }
        if hit(&self.prev) {
            return Some(DropdownKeyAction::HoverPrev);
        }
        if hit(&self.commit) {
            return Some(DropdownKeyAction::Commit);
        }
        if hit(&self.close) {
            return Some(DropdownKeyAction::Close);
        }
        None
    }
}

pub fn key_event_matches(pattern: &KeyEvent, event: &KeyEvent) -> bool {
    pattern.code == event.code && modifiers_match(pattern.modifiers, event.modifiers)
}

fn modifiers_match(pattern: KeyModifiers, event: KeyModifiers) -> bool {
    pattern.shift == event.shift && pattern.ctrl == event.ctrl && pattern.alt == event.alt
}

pub fn key_char(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c))
}

/// Builds a [`KeyEvent`] from a legacy numeric key code (see [`KeyCode::from_legacy_code`]).
pub fn key_legacy(code: u32) -> Option<KeyEvent> {
    KeyCode::from_legacy_code(code).map(KeyEvent::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_cover_native_select_keys() {
        let b = DropdownBindings::default();
        let action = |code| key_legacy(code).and_then(|k| b.action_for(&k));
        assert_eq!(action(40), Some(DropdownKeyAction::HoverNext));
        assert_eq!(action(38), Some(DropdownKeyAction::HoverPrev));
        assert_eq!(action(13), Some(DropdownKeyAction::Commit));
        assert_eq!(action(32), Some(DropdownKeyAction::Commit));
        assert_eq!(action(27), Some(DropdownKeyAction::Close));
    }

    #[test]
    fn modifiers_must_match_exactly() {
        let b = DropdownBindings::default();
        let ctrl_space = key_char(' ').with_modifiers(KeyModifiers {
            ctrl: true,
            ..KeyModifiers::none()
        });
        assert_eq!(b.action_for(&ctrl_space), None);
        assert_eq!(b.action_for(&key_char('j')), None);
        assert_eq!(
            DropdownBindings::with_vim_keys().action_for(&key_char('j')),
            Some(DropdownKeyAction::HoverNext)
        );
    }
}

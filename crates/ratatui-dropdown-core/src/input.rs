#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl KeyModifiers {
    pub fn none() -> Self {
        Self::default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyCode {
    Char(char),
    Enter,
    Esc,
    Up,
    Down,
}

impl KeyCode {
    /// Maps a legacy numeric DOM key code onto a [`KeyCode`].
    ///
    /// Only the codes a select control reacts to are recognized:
    /// Down=40, Up=38, Enter=13, Space=32, Escape=27.
    pub fn from_legacy_code(code: u32) -> Option<Self> {
        match code {
            40 => Some(Self::Down),
            38 => Some(Self::Up),
            13 => Some(Self::Enter),
            32 => Some(Self::Char(' ')),
            27 => Some(Self::Esc),
            _ => None,
        }
    }

    /// Inverse of [`KeyCode::from_legacy_code`].
    pub fn legacy_code(&self) -> Option<u32> {
        match self {
            Self::Down => Some(40),
            Self::Up => Some(38),
            Self::Enter => Some(13),
            Self::Char(' ') => Some(32),
            Self::Esc => Some(27),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::none(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseEventKind {
    Down(MouseButton),
    Drag(MouseButton),
    Up(MouseButton),
    Moved,
    ScrollUp,
    ScrollDown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MouseEvent {
    pub x: u16,
    pub y: u16,
    pub kind: MouseEventKind,
    pub modifiers: KeyModifiers,
}

impl MouseEvent {
    pub fn new(x: u16, y: u16, kind: MouseEventKind) -> Self {
        Self {
            x,
            y,
            kind,
            modifiers: KeyModifiers::none(),
        }
    }

    /// A left-button press at `(x, y)`, the terminal equivalent of a click.
    pub fn click(x: u16, y: u16) -> Self {
        Self::new(x, y, MouseEventKind::Down(MouseButton::Left))
    }

    pub fn moved(x: u16, y: u16) -> Self {
        Self::new(x, y, MouseEventKind::Moved)
    }

    pub fn is_click(&self) -> bool {
        matches!(self.kind, MouseEventKind::Down(MouseButton::Left))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_codes_map_both_ways() {
        for code in [40, 38, 13, 32, 27] {
            let key = KeyCode::from_legacy_code(code).expect("known code");
            assert_eq!(key.legacy_code(), Some(code));
        }
        assert_eq!(KeyCode::from_legacy_code(9), None);
        assert_eq!(KeyCode::Char('a').legacy_code(), None);
    }

    #[test]
    fn space_is_a_char_key() {
        assert_eq!(KeyCode::from_legacy_code(32), Some(KeyCode::Char(' ')));
    }
}

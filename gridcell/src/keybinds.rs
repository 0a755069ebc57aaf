//! Key representation shared between renderers and the host grid.
//!
//! The host grid receives raw `crossterm` key events, converts them with
//! [`KeyCombo::from_crossterm`], and dispatches the combo to the focused
//! renderer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Modifier keys held during an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
    };

    /// Check if any modifier is held.
    pub fn any(&self) -> bool {
        self.ctrl || self.alt || self.shift
    }
}

/// Key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Character key
    Char(char),
    /// Enter/Return
    Enter,
    /// Escape
    Escape,
    /// Backspace
    Backspace,
    /// Tab
    Tab,
    /// Arrow up
    Up,
    /// Arrow down
    Down,
    /// Arrow left
    Left,
    /// Arrow right
    Right,
}

/// A key combination (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// The key code
    pub key: Key,
    /// Modifier keys
    pub modifiers: Modifiers,
}

impl KeyCombo {
    /// Create a new key combo.
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Create a key combo without modifiers.
    pub const fn key(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// Add ctrl modifier.
    pub const fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    /// Add shift modifier.
    pub const fn shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    /// Add alt modifier.
    pub const fn alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }

    /// Convert a crossterm key event.
    ///
    /// Returns `None` for keys with no mapping (function keys, media keys);
    /// the host handles those through its own keybind layer.
    pub fn from_crossterm(event: &KeyEvent) -> Option<Self> {
        let key = match event.code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Tab => Key::Tab,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            _ => return None,
        };
        Some(Self {
            key,
            modifiers: Modifiers {
                ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
                alt: event.modifiers.contains(KeyModifiers::ALT),
                shift: event.modifiers.contains(KeyModifiers::SHIFT),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_plain_char() {
        let event = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        let combo = KeyCombo::from_crossterm(&event).unwrap();
        assert_eq!(combo, KeyCombo::key(Key::Char(' ')));
        assert!(!combo.modifiers.any());
    }

    #[test]
    fn converts_modifiers() {
        let event = KeyEvent::new(KeyCode::Enter, KeyModifiers::CONTROL | KeyModifiers::SHIFT);
        let combo = KeyCombo::from_crossterm(&event).unwrap();
        assert_eq!(combo, KeyCombo::key(Key::Enter).ctrl().shift());
    }

    #[test]
    fn unmapped_keys_return_none() {
        let event = KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE);
        assert!(KeyCombo::from_crossterm(&event).is_none());
    }
}

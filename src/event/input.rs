//! Input event types wrapping crossterm for decoupling.
//!
//! Defines [`InputEvent`], [`KeyEvent`] and [`PointerAction`]. Crossterm events
//! are converted through `from_crossterm` constructors so the store and the
//! components never depend on crossterm directly. Keys the overlay has no use
//! for convert to `None` instead of being folded into another key.

use std::ops::{BitAnd, BitOr};

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// Keyboard key, decoupled from crossterm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

/// Modifier key bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(pub u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(1);
    pub const CTRL: Modifiers = Modifiers(2);
    pub const ALT: Modifiers = Modifiers(4);
    /// Command / super key. Treated as the platform "mod" key next to `CTRL`.
    pub const META: Modifiers = Modifiers(8);

    /// Check whether `self` contains all the bits in `other`.
    pub fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check whether no modifier bits are set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;
    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 | rhs.0)
    }
}

impl BitAnd for Modifiers {
    type Output = Modifiers;
    fn bitand(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 & rhs.0)
    }
}

// ---------------------------------------------------------------------------
// KeyEvent
// ---------------------------------------------------------------------------

/// A keyboard event with key and modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a new key event.
    pub fn new(code: Key, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    /// A key event without modifiers.
    pub fn plain(code: Key) -> Self {
        Self::new(code, Modifiers::NONE)
    }

    /// The character this event types into a search field, if any.
    ///
    /// Shift is allowed (it only changes the case); Ctrl, Alt and Meta chords
    /// are shortcuts, not text.
    pub fn typed_char(&self) -> Option<char> {
        match self.code {
            Key::Char(c) if (self.modifiers & !Modifiers::SHIFT).is_empty() => Some(c),
            _ => None,
        }
    }

    /// Convert a crossterm key event. Returns `None` for keys we don't handle.
    pub fn from_crossterm(ct: crossterm::event::KeyEvent) -> Option<Self> {
        use crossterm::event::KeyCode;

        let code = match ct.code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            _ => return None,
        };
        Some(KeyEvent {
            code,
            modifiers: convert_modifiers(ct.modifiers),
        })
    }
}

impl std::ops::Not for Modifiers {
    type Output = Modifiers;
    fn not(self) -> Self::Output {
        Modifiers(!self.0)
    }
}

/// Convert crossterm key modifiers to our `Modifiers`.
fn convert_modifiers(m: crossterm::event::KeyModifiers) -> Modifiers {
    use crossterm::event::KeyModifiers;

    let mut out = Modifiers::NONE;
    if m.contains(KeyModifiers::SHIFT) {
        out = out | Modifiers::SHIFT;
    }
    if m.contains(KeyModifiers::CONTROL) {
        out = out | Modifiers::CTRL;
    }
    if m.contains(KeyModifiers::ALT) {
        out = out | Modifiers::ALT;
    }
    if m.contains(KeyModifiers::SUPER) || m.contains(KeyModifiers::META) {
        out = out | Modifiers::META;
    }
    out
}

// ---------------------------------------------------------------------------
// PointerAction
// ---------------------------------------------------------------------------

/// What the pointer did over an option row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerAction {
    /// Primary button pressed. Options swallow this so the trigger keeps focus.
    Press,
    /// Primary button released over the same row: activates the option.
    Click,
    /// Pointer moved over the row.
    Hover,
}

impl PointerAction {
    /// Convert a crossterm mouse event kind. Only the left button and plain
    /// movement matter to an option list.
    pub fn from_crossterm(kind: crossterm::event::MouseEventKind) -> Option<Self> {
        use crossterm::event::{MouseButton, MouseEventKind};

        match kind {
            MouseEventKind::Down(MouseButton::Left) => Some(PointerAction::Press),
            MouseEventKind::Up(MouseButton::Left) => Some(PointerAction::Click),
            MouseEventKind::Moved => Some(PointerAction::Hover),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// InputEvent
// ---------------------------------------------------------------------------

/// Top-level input event delivered to an overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    /// A pointer action at a row inside the option list, in list coordinates
    /// (row 0 is the top of the viewport).
    Pointer { action: PointerAction, row: u16 },
    Paste(String),
}

impl InputEvent {
    /// Convert a crossterm event. `list_top` is the screen row where the
    /// option list viewport starts; pointer events above it are dropped.
    pub fn from_crossterm(event: crossterm::event::Event, list_top: u16) -> Option<Self> {
        match event {
            crossterm::event::Event::Key(ke) => KeyEvent::from_crossterm(ke).map(InputEvent::Key),
            crossterm::event::Event::Mouse(me) => {
                let action = PointerAction::from_crossterm(me.kind)?;
                let row = me.row.checked_sub(list_top)?;
                Some(InputEvent::Pointer { action, row })
            }
            crossterm::event::Event::Paste(s) => Some(InputEvent::Paste(s)),
            _ => None,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ── Modifiers ────────────────────────────────────────────────────

    #[test]
    fn modifiers_none_is_empty() {
        assert!(Modifiers::NONE.is_empty());
    }

    #[test]
    fn modifiers_combined() {
        let mods = Modifiers::CTRL | Modifiers::ALT;
        assert!(mods.contains(Modifiers::CTRL));
        assert!(mods.contains(Modifiers::ALT));
        assert!(!mods.contains(Modifiers::SHIFT));
        assert_eq!(mods & Modifiers::CTRL, Modifiers::CTRL);
    }

    // ── typed_char ───────────────────────────────────────────────────

    #[test]
    fn typed_char_plain_and_shifted() {
        assert_eq!(KeyEvent::plain(Key::Char('a')).typed_char(), Some('a'));
        assert_eq!(
            KeyEvent::new(Key::Char('A'), Modifiers::SHIFT).typed_char(),
            Some('A')
        );
    }

    #[test]
    fn typed_char_rejects_chords() {
        assert_eq!(KeyEvent::new(Key::Char('k'), Modifiers::CTRL).typed_char(), None);
        assert_eq!(KeyEvent::plain(Key::Enter).typed_char(), None);
    }

    // ── crossterm conversion ─────────────────────────────────────────

    #[test]
    fn from_crossterm_key_with_modifiers() {
        let ct = crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Char('k'),
            crossterm::event::KeyModifiers::CONTROL,
        );
        let ke = KeyEvent::from_crossterm(ct).unwrap();
        assert_eq!(ke.code, Key::Char('k'));
        assert!(ke.modifiers.contains(Modifiers::CTRL));
    }

    #[test]
    fn from_crossterm_unhandled_key_is_none() {
        let ct = crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::F(5),
            crossterm::event::KeyModifiers::NONE,
        );
        assert!(KeyEvent::from_crossterm(ct).is_none());
    }

    #[test]
    fn pointer_actions_from_mouse_kinds() {
        use crossterm::event::{MouseButton, MouseEventKind};

        assert_eq!(
            PointerAction::from_crossterm(MouseEventKind::Up(MouseButton::Left)),
            Some(PointerAction::Click)
        );
        assert_eq!(
            PointerAction::from_crossterm(MouseEventKind::Moved),
            Some(PointerAction::Hover)
        );
        assert_eq!(
            PointerAction::from_crossterm(MouseEventKind::Down(MouseButton::Right)),
            None
        );
    }

    #[test]
    fn pointer_event_translated_to_list_rows() {
        let me = crossterm::event::MouseEvent {
            kind: crossterm::event::MouseEventKind::Up(crossterm::event::MouseButton::Left),
            column: 4,
            row: 7,
            modifiers: crossterm::event::KeyModifiers::NONE,
        };
        let event = InputEvent::from_crossterm(crossterm::event::Event::Mouse(me), 5);
        assert_eq!(
            event,
            Some(InputEvent::Pointer {
                action: PointerAction::Click,
                row: 2
            })
        );

        let above = InputEvent::from_crossterm(crossterm::event::Event::Mouse(me), 9);
        assert_eq!(above, None);
    }
}

//! Key binding registry for overlay navigation.
//!
//! [`KeyBindingRegistry`] maps key+modifier combinations to
//! [`NavigationAction`]s. `with_defaults()` installs the list navigation keys
//! shared by comboboxes, menus and the spotlight palette.

use std::collections::HashMap;

use super::input::{Key, KeyEvent, Modifiers};

// ---------------------------------------------------------------------------
// NavigationAction
// ---------------------------------------------------------------------------

/// Store operation to run when a key binding is matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationAction {
    /// Open the overlay.
    Open,
    /// Close the overlay (clears query and selection).
    Close,
    /// Flip between open and closed.
    Toggle,
    /// Highlight the next eligible option.
    SelectNext,
    /// Highlight the previous eligible option.
    SelectPrevious,
    /// Highlight the first eligible option.
    SelectFirst,
    /// Highlight the last eligible option.
    SelectLast,
    /// Commit the highlighted option.
    Activate,
    /// A named host-defined action; the store ignores it and reports it back.
    Custom(String),
}

// ---------------------------------------------------------------------------
// KeyBindingRegistry
// ---------------------------------------------------------------------------

/// Registry of key bindings, mapping (Key, Modifiers) -> NavigationAction.
#[derive(Debug, Clone)]
pub struct KeyBindingRegistry {
    bindings: HashMap<(Key, Modifiers), NavigationAction>,
}

impl KeyBindingRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Create a registry with the standard list navigation bindings.
    ///
    /// Defaults:
    /// - `Down` -> SelectNext, `Up` -> SelectPrevious
    /// - `Home` -> SelectFirst, `End` -> SelectLast
    /// - `Enter` -> Activate
    /// - `Escape` -> Close
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.bind(Key::Down, Modifiers::NONE, NavigationAction::SelectNext);
        registry.bind(Key::Up, Modifiers::NONE, NavigationAction::SelectPrevious);
        registry.bind(Key::Home, Modifiers::NONE, NavigationAction::SelectFirst);
        registry.bind(Key::End, Modifiers::NONE, NavigationAction::SelectLast);
        registry.bind(Key::Enter, Modifiers::NONE, NavigationAction::Activate);
        registry.bind(Key::Escape, Modifiers::NONE, NavigationAction::Close);
        registry
    }

    /// Register a key binding, replacing any existing one for the same chord.
    pub fn bind(&mut self, key: Key, modifiers: Modifiers, action: NavigationAction) {
        self.bindings.insert((key, modifiers), action);
    }

    /// Remove a key binding, returning the removed action.
    pub fn unbind(&mut self, key: Key, modifiers: Modifiers) -> Option<NavigationAction> {
        self.bindings.remove(&(key, modifiers))
    }

    /// Look up the action for a given key event (exact key + modifiers).
    pub fn resolve(&self, event: &KeyEvent) -> Option<&NavigationAction> {
        self.bindings.get(&(event.code, event.modifiers))
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the registry has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for KeyBindingRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ── Construction ─────────────────────────────────────────────────

    #[test]
    fn new_registry_is_empty() {
        let reg = KeyBindingRegistry::new();
        assert!(reg.is_empty());
        assert_eq!(reg.len(), 0);
    }

    #[test]
    fn with_defaults_has_six_bindings() {
        let reg = KeyBindingRegistry::with_defaults();
        assert_eq!(reg.len(), 6);
    }

    // ── Bind / Unbind ────────────────────────────────────────────────

    #[test]
    fn resolve_requires_exact_modifiers() {
        let mut reg = KeyBindingRegistry::new();
        reg.bind(Key::Char('k'), Modifiers::CTRL, NavigationAction::Toggle);

        let plain = KeyEvent::plain(Key::Char('k'));
        assert!(reg.resolve(&plain).is_none());

        let chord = KeyEvent::new(Key::Char('k'), Modifiers::CTRL);
        assert_eq!(reg.resolve(&chord), Some(&NavigationAction::Toggle));
    }

    #[test]
    fn unbind_removes_binding() {
        let mut reg = KeyBindingRegistry::with_defaults();
        let removed = reg.unbind(Key::Escape, Modifiers::NONE);
        assert_eq!(removed, Some(NavigationAction::Close));
        assert!(reg.resolve(&KeyEvent::plain(Key::Escape)).is_none());
        assert!(reg.unbind(Key::Escape, Modifiers::NONE).is_none());
    }

    #[test]
    fn bind_overwrites_existing() {
        let mut reg = KeyBindingRegistry::with_defaults();
        reg.bind(
            Key::Enter,
            Modifiers::NONE,
            NavigationAction::Custom("submit".into()),
        );
        assert_eq!(reg.len(), 6);
        assert_eq!(
            reg.resolve(&KeyEvent::plain(Key::Enter)),
            Some(&NavigationAction::Custom("submit".into()))
        );
    }

    // ── Default bindings ─────────────────────────────────────────────

    #[test]
    fn defaults_cover_list_navigation() {
        let reg = KeyBindingRegistry::with_defaults();
        let cases = [
            (Key::Down, NavigationAction::SelectNext),
            (Key::Up, NavigationAction::SelectPrevious),
            (Key::Home, NavigationAction::SelectFirst),
            (Key::End, NavigationAction::SelectLast),
            (Key::Enter, NavigationAction::Activate),
            (Key::Escape, NavigationAction::Close),
        ];
        for (key, expected) in cases {
            assert_eq!(reg.resolve(&KeyEvent::plain(key)), Some(&expected), "{key:?}");
        }
    }
}

//! Pilot: programmatic interaction with an overlay.
//!
//! The `Pilot` wraps anything that accepts [`InputEvent`]s and exposes a
//! [`SharedStore`] (a bare store or a [`Spotlight`]), records every committed
//! value, and provides methods to simulate user input the way a terminal
//! would deliver it.

use std::cell::RefCell;
use std::rc::Rc;

use crate::components::Spotlight;
use crate::event::input::{InputEvent, Key, KeyEvent, Modifiers, PointerAction};
use crate::store::{InputOutcome, SharedStore};

/// Something a [`Pilot`] can drive.
pub trait InputTarget {
    fn handle_input(&self, event: &InputEvent) -> InputOutcome;

    fn store(&self) -> &SharedStore;

    /// Install the commit callback.
    fn on_commit(&self, callback: Box<dyn Fn(&str)>);
}

impl InputTarget for SharedStore {
    fn handle_input(&self, event: &InputEvent) -> InputOutcome {
        SharedStore::handle_input(self, event)
    }

    fn store(&self) -> &SharedStore {
        self
    }

    fn on_commit(&self, callback: Box<dyn Fn(&str)>) {
        SharedStore::on_commit(self, callback);
    }
}

impl InputTarget for Spotlight {
    fn handle_input(&self, event: &InputEvent) -> InputOutcome {
        Spotlight::handle_input(self, event)
    }

    fn store(&self) -> &SharedStore {
        Spotlight::store(self)
    }

    fn on_commit(&self, callback: Box<dyn Fn(&str)>) {
        self.on_action_trigger(callback);
    }
}

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless overlay driver for testing.
///
/// # Examples
///
/// ```ignore
/// use overlay_kit::testing::Pilot;
/// use overlay_kit::event::Key;
///
/// let mut pilot = Pilot::new(store);
/// pilot.type_text("re");
/// pilot.press_key(Key::Enter);
/// assert_eq!(pilot.committed(), ["react"]);
/// ```
pub struct Pilot<T: InputTarget> {
    target: T,
    committed: Rc<RefCell<Vec<String>>>,
    outcomes: Vec<InputOutcome>,
}

impl<T: InputTarget> Pilot<T> {
    /// Take over `target`'s commit callback and start recording.
    pub fn new(target: T) -> Self {
        let committed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&committed);
        target.on_commit(Box::new(move |value| sink.borrow_mut().push(value.to_owned())));
        Self {
            target,
            committed,
            outcomes: Vec::new(),
        }
    }

    // ── Input simulation ─────────────────────────────────────────────

    pub fn send(&mut self, event: InputEvent) -> InputOutcome {
        let outcome = self.target.handle_input(&event);
        self.outcomes.push(outcome.clone());
        outcome
    }

    /// Simulate a key press with no modifiers.
    pub fn press_key(&mut self, key: Key) -> InputOutcome {
        self.press_key_with(key, Modifiers::NONE)
    }

    /// Simulate a key press with the given modifiers.
    pub fn press_key_with(&mut self, key: Key, modifiers: Modifiers) -> InputOutcome {
        self.send(InputEvent::Key(KeyEvent::new(key, modifiers)))
    }

    /// Simulate typing each character of `text` as individual key presses.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.press_key(Key::Char(ch));
        }
    }

    /// Simulate a click on viewport row `row` of the option list.
    pub fn click(&mut self, row: u16) -> InputOutcome {
        self.send(InputEvent::Pointer {
            action: PointerAction::Click,
            row,
        })
    }

    /// Simulate the pointer moving over viewport row `row`.
    pub fn hover(&mut self, row: u16) -> InputOutcome {
        self.send(InputEvent::Pointer {
            action: PointerAction::Hover,
            row,
        })
    }

    pub fn paste(&mut self, text: &str) -> InputOutcome {
        self.send(InputEvent::Paste(text.to_owned()))
    }

    // ── Query ────────────────────────────────────────────────────────

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn store(&self) -> &SharedStore {
        self.target.store()
    }

    /// Every value committed so far, oldest first.
    pub fn committed(&self) -> Vec<String> {
        self.committed.borrow().clone()
    }

    /// Outcomes of every event sent so far, oldest first.
    pub fn outcomes(&self) -> &[InputOutcome] {
        &self.outcomes
    }

    /// Id of the selected option, if any.
    pub fn selected(&self) -> Option<String> {
        self.store()
            .read(|s| s.selected_option().map(|o| o.id.to_string()))
    }

    /// Render the option list as text for snapshot assertions.
    pub fn render_options(&self) -> String {
        self.store().read(super::snapshot::render_options)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

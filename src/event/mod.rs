//! Event system: input events and key bindings.

pub mod binding;
pub mod input;

pub use binding::{KeyBindingRegistry, NavigationAction};
pub use input::{InputEvent, Key, KeyEvent, Modifiers, PointerAction};

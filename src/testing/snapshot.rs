//! Snapshot rendering helpers.
//!
//! Plain-text views of store state and rendered elements, suitable for
//! `insta` snapshots and assertions.

use crate::components::Element;
use crate::store::OverlayStore;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render the option registry as one line per option.
///
/// The selected option is prefixed with `> `, others with two spaces.
/// Disabled options and options filtered out by the query are tagged. A
/// header line shows the open state and the query.
///
/// ```text
/// [open] query="re"
/// > react
///   preact
///   vue (filtered)
///   svelte (disabled)
/// ```
pub fn render_options(store: &OverlayStore) -> String {
    let state = if store.is_open() { "open" } else { "closed" };
    let mut lines = vec![format!("[{state}] query={:?}", store.query())];

    let selected = store.selected_option().map(|o| o.id.clone());
    for option in store.options() {
        let marker = if selected.as_ref() == Some(&option.id) { ">" } else { " " };
        let mut line = format!("{marker} {}", option.label);
        if option.disabled {
            line.push_str(" (disabled)");
        } else if !store.is_eligible(option.id.as_str()) {
            line.push_str(" (filtered)");
        }
        lines.push(line);
    }
    lines.join("\n")
}

/// Render an element to markup. Alias of [`Element::to_markup`] for
/// symmetry with [`render_options`].
pub fn render_to_string(element: &Element) -> String {
    element.to_markup()
}

// ===========================================================================
// Tests
// ===========================================================================

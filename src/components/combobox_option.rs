//! `Combobox.Option`: one selectable row of a combobox dropdown.

use super::element::Element;
use crate::store::{OptionHandle, SharedStore};
use crate::styles_api::StylesOverrides;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComboboxOption {
    /// Value committed when the option is selected.
    pub value: String,
    /// Option id; defaults to `value`.
    pub id: Option<String>,
    /// Rendered text; defaults to `value`.
    pub label: Option<String>,
    pub keywords: Vec<String>,
    /// Force the active look regardless of the store selection.
    pub active: bool,
    pub disabled: bool,
    /// Row extent inside the dropdown list.
    pub top: i32,
    pub height: i32,
    pub overrides: StylesOverrides,
}

impl ComboboxOption {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            height: 1,
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn at(mut self, top: i32, height: i32) -> Self {
        self.top = top;
        self.height = height;
        self
    }

    pub fn with_overrides(mut self, overrides: StylesOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.value)
    }

    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.value)
    }

    /// The handle this option registers with the store.
    pub fn handle(&self) -> OptionHandle {
        OptionHandle::new(self.id())
            .with_value(self.value.as_str())
            .with_label(self.label())
            .with_keywords(self.keywords.iter().map(String::as_str))
            .disabled(self.disabled)
            .at(self.top, self.height)
    }

    /// Mount hook: register with the store.
    pub fn mount(&self, store: &SharedStore) {
        store.register_option(self.handle());
    }

    /// Unmount hook: deregister from the store.
    pub fn unmount(&self, store: &SharedStore) {
        store.unregister_option(self.id());
    }

    /// Click handler. Clicks on a disabled option are swallowed; otherwise the
    /// option is committed through the store. Returns whether it committed.
    pub fn on_click(&self, store: &SharedStore) -> bool {
        if self.disabled {
            return false;
        }
        store.on_option_select(self.id())
    }

    /// Mouse-over handler: hovering drops the keyboard selection.
    pub fn on_mouse_over(&self, store: &SharedStore) {
        store.reset_selected_option();
    }

    pub fn render(&self, store: &SharedStore) -> Element {
        let id = self.id();
        let (attrs, selected, dom_id) = store.read(|s| {
            (
                s.option_attributes(id),
                s.selected_option().is_some_and(|o| o.id == id),
                s.option_dom_id(id),
            )
        });
        let active = self.active || selected;

        Element::new("div")
            .styles(store.get_styles("option", &self.overrides))
            .attrs(attrs)
            .attr("id", dom_id)
            .attr("role", "option")
            .attr("data-combobox-option", "true")
            .flag("data-combobox-active", active)
            .flag("data-combobox-disabled", self.disabled)
            .child(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn mounted(options: &[ComboboxOption]) -> SharedStore {
        let store = SharedStore::default();
        for option in options {
            option.mount(&store);
        }
        store
    }

    #[test]
    fn handle_defaults_to_value() {
        let option = ComboboxOption::new("react").with_label("React");
        let handle = option.handle();
        assert_eq!(handle.id, "react");
        assert_eq!(handle.value, "react");
        assert_eq!(handle.label, "React");
    }

    #[test]
    fn mount_and_unmount_register() {
        let option = ComboboxOption::new("a");
        let store = mounted(&[option.clone()]);
        assert_eq!(store.read(|s| s.options().len()), 1);
        option.unmount(&store);
        assert_eq!(store.read(|s| s.options().len()), 0);
    }

    #[test]
    fn renders_active_option() {
        let option = ComboboxOption::new("vue").with_label("Vue");
        let store = mounted(&[option.clone()]);
        store.select_first();

        insta::assert_snapshot!(option.render(&store).to_markup(), @r###"<div class="combobox-option mantine-Combobox-option" id="overlay-options-vue" role="option" aria-selected="true" data-combobox-active="true" data-combobox-option="true">Vue</div>"###);
    }

    #[test]
    fn renders_disabled_option() {
        let option = ComboboxOption::new("svelte").disabled(true);
        let store = mounted(&[option.clone()]);
        let el = option.render(&store);
        assert_eq!(el.get_attr("data-combobox-disabled"), Some("true"));
        assert_eq!(el.get_attr("aria-disabled"), Some("true"));
        assert!(!el.has_attr("data-combobox-active"));
    }

    #[test]
    fn active_prop_forces_active_look() {
        let option = ComboboxOption::new("a").active(true);
        let store = mounted(&[option.clone()]);
        assert_eq!(option.render(&store).get_attr("data-combobox-active"), Some("true"));
    }

    #[test]
    fn click_commits_unless_disabled() {
        let enabled = ComboboxOption::new("yes");
        let disabled = ComboboxOption::new("no").disabled(true);
        let store = mounted(&[enabled.clone(), disabled.clone()]);
        let committed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&committed);
        store.on_commit(move |v| sink.borrow_mut().push(v.to_owned()));
        store.open();

        assert!(!disabled.on_click(&store));
        assert!(store.is_open());
        assert!(enabled.on_click(&store));
        assert_eq!(*committed.borrow(), ["yes"]);
        assert!(!store.is_open());
    }

    #[test]
    fn mouse_over_resets_selection() {
        let option = ComboboxOption::new("a");
        let store = mounted(&[option.clone()]);
        store.select_first();
        option.on_mouse_over(&store);
        assert_eq!(store.selected_index(), None);
    }
}

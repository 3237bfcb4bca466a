//! Spotlight: a command palette over actions and action groups.
//!
//! The palette keeps its own [`SharedStore`] (component `Spotlight`). Every
//! query change re-filters the actions, ranks them, applies the limit and
//! re-syncs the store's options in display order, so keyboard navigation
//! follows exactly what is rendered.

use std::fmt;
use std::rc::Rc;

use log::debug;

use super::element::Element;
use crate::event::{InputEvent, Key, KeyEvent, Modifiers, PointerAction};
use crate::store::{InputOutcome, OptionHandle, SharedStore, StoreConfig};
use crate::styles_api::{ComponentKind, StylesOverrides};
use crate::theme::Theme;

// ---------------------------------------------------------------------------
// Data
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpotlightAction {
    pub id: String,
    pub label: String,
    pub description: Option<String>,
    pub keywords: Vec<String>,
    pub disabled: bool,
}

impl SpotlightAction {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
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

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    fn label_matches(&self, query: &str) -> bool {
        self.label.to_lowercase().contains(query)
    }

    fn secondary_matches(&self, query: &str) -> bool {
        self.description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(query))
            || self.keywords.iter().any(|k| k.to_lowercase().contains(query))
    }
}

/// A top-level entry of the palette.
#[derive(Debug, Clone, PartialEq)]
pub enum SpotlightItem {
    Action(SpotlightAction),
    Group {
        label: String,
        actions: Vec<SpotlightAction>,
    },
}

impl SpotlightItem {
    pub fn group(label: impl Into<String>, actions: impl IntoIterator<Item = SpotlightAction>) -> Self {
        SpotlightItem::Group {
            label: label.into(),
            actions: actions.into_iter().collect(),
        }
    }

    fn action_count(&self) -> usize {
        match self {
            SpotlightItem::Action(_) => 1,
            SpotlightItem::Group { actions, .. } => actions.len(),
        }
    }
}

impl From<SpotlightAction> for SpotlightItem {
    fn from(action: SpotlightAction) -> Self {
        SpotlightItem::Action(action)
    }
}

/// Filter over `(query, items)` returning the items to display, in order.
pub type SpotlightFilter = Rc<dyn Fn(&str, &[SpotlightItem]) -> Vec<SpotlightItem>>;

/// Default filter: actions whose label matches come first, then actions
/// matched only by description or keywords. Groups keep their label in both
/// tiers and are dropped when empty. An empty query returns everything.
pub fn default_spotlight_filter(query: &str, items: &[SpotlightItem]) -> Vec<SpotlightItem> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return items.to_vec();
    }

    let mut by_label = Vec::new();
    let mut by_secondary = Vec::new();
    for item in items {
        match item {
            SpotlightItem::Action(action) => {
                if action.label_matches(&query) {
                    by_label.push(item.clone());
                } else if action.secondary_matches(&query) {
                    by_secondary.push(item.clone());
                }
            }
            SpotlightItem::Group { label, actions } => {
                let (primary, secondary): (Vec<_>, Vec<_>) = actions
                    .iter()
                    .filter(|a| a.label_matches(&query) || a.secondary_matches(&query))
                    .cloned()
                    .partition(|a| a.label_matches(&query));
                by_label.push(SpotlightItem::Group {
                    label: label.clone(),
                    actions: primary,
                });
                by_secondary.push(SpotlightItem::Group {
                    label: label.clone(),
                    actions: secondary,
                });
            }
        }
    }

    by_label
        .into_iter()
        .chain(by_secondary)
        .filter(|item| item.action_count() > 0)
        .collect()
}

/// Keep at most `limit` actions, dropping groups emptied by the cut.
pub fn limit_items(items: Vec<SpotlightItem>, limit: usize) -> Vec<SpotlightItem> {
    let mut remaining = limit;
    let mut out = Vec::new();
    for item in items {
        if remaining == 0 {
            break;
        }
        match item {
            SpotlightItem::Action(_) => {
                remaining -= 1;
                out.push(item);
            }
            SpotlightItem::Group { label, mut actions } => {
                actions.truncate(remaining);
                remaining -= actions.len();
                if !actions.is_empty() {
                    out.push(SpotlightItem::Group { label, actions });
                }
            }
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Props
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct SpotlightProps {
    pub actions: Vec<SpotlightItem>,
    /// Maximum number of displayed actions.
    pub limit: Option<usize>,
    /// Message shown when nothing matches; nothing is shown when `None`.
    pub nothing_found: Option<String>,
    /// Chord toggling the palette; `None` disables it.
    pub shortcut: Option<KeyEvent>,
    /// Close after an action is triggered.
    pub close_on_action_trigger: bool,
    pub search_placeholder: Option<String>,
    pub filter: Option<SpotlightFilter>,
    pub overrides: StylesOverrides,
}

impl fmt::Debug for SpotlightProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpotlightProps")
            .field("actions", &self.actions)
            .field("limit", &self.limit)
            .field("nothing_found", &self.nothing_found)
            .field("shortcut", &self.shortcut)
            .field("close_on_action_trigger", &self.close_on_action_trigger)
            .field("search_placeholder", &self.search_placeholder)
            .field("custom_filter", &self.filter.is_some())
            .finish()
    }
}

impl Default for SpotlightProps {
    fn default() -> Self {
        Self {
            actions: Vec::new(),
            limit: None,
            nothing_found: None,
            shortcut: Some(KeyEvent::new(Key::Char('k'), Modifiers::CTRL)),
            close_on_action_trigger: true,
            search_placeholder: None,
            filter: None,
            overrides: StylesOverrides::default(),
        }
    }
}

impl SpotlightProps {
    pub fn new(actions: impl IntoIterator<Item = impl Into<SpotlightItem>>) -> Self {
        Self {
            actions: actions.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_nothing_found(mut self, message: impl Into<String>) -> Self {
        self.nothing_found = Some(message.into());
        self
    }

    pub fn with_shortcut(mut self, shortcut: Option<KeyEvent>) -> Self {
        self.shortcut = shortcut;
        self
    }

    pub fn with_close_on_action_trigger(mut self, close: bool) -> Self {
        self.close_on_action_trigger = close;
        self
    }

    pub fn with_search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = Some(placeholder.into());
        self
    }

    pub fn with_filter(
        mut self,
        filter: impl Fn(&str, &[SpotlightItem]) -> Vec<SpotlightItem> + 'static,
    ) -> Self {
        self.filter = Some(Rc::new(filter));
        self
    }

    pub fn with_overrides(mut self, overrides: StylesOverrides) -> Self {
        self.overrides = overrides;
        self
    }
}

// ---------------------------------------------------------------------------
// Spotlight
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Spotlight {
    props: SpotlightProps,
    store: SharedStore,
}

impl Spotlight {
    pub fn new(props: SpotlightProps) -> Self {
        Self::with_theme(props, Rc::new(Theme::default()))
    }

    pub fn with_theme(props: SpotlightProps, theme: Rc<Theme>) -> Self {
        let config = StoreConfig::new()
            .with_component(ComponentKind::Spotlight)
            .with_list_id("spotlight-actions")
            .with_close_on_select(props.close_on_action_trigger);
        let store = SharedStore::with_theme(config, theme);
        // Options are pre-filtered and ranked by the palette itself.
        store.update(|s| s.set_filter(|_, _| true));

        let spotlight = Self { props, store };
        spotlight.sync();
        spotlight
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    pub fn props(&self) -> &SpotlightProps {
        &self.props
    }

    /// Callback receiving the id of every triggered action.
    pub fn on_action_trigger(&self, callback: impl Fn(&str) + 'static) {
        self.store.on_commit(callback);
    }

    pub fn open(&self) {
        self.store.open();
    }

    pub fn close(&self) {
        self.store.close();
        self.sync();
    }

    pub fn toggle(&self) {
        if self.store.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn query(&self) -> String {
        self.store.read(|s| s.query().to_owned())
    }

    /// Search input change handler.
    pub fn set_query(&self, text: impl Into<String>) {
        let text = text.into();
        let handles = self.handles_for(&text);
        self.store.update(|s| {
            s.sync_options(handles);
            s.set_query(text);
        });
    }

    /// Items displayed for the current query, after filtering and the limit.
    pub fn displayed_items(&self) -> Vec<SpotlightItem> {
        self.items_for(&self.query())
    }

    fn items_for(&self, query: &str) -> Vec<SpotlightItem> {
        let filtered = match &self.props.filter {
            Some(filter) => filter(query, &self.props.actions),
            None => default_spotlight_filter(query, &self.props.actions),
        };
        match self.props.limit {
            Some(limit) => limit_items(filtered, limit),
            None => filtered,
        }
    }

    /// Option handles in display order. Group labels take a row of their own.
    fn handles_for(&self, query: &str) -> Vec<OptionHandle> {
        let mut row = 0;
        let mut handles = Vec::new();
        let mut push = |action: &SpotlightAction, row: &mut i32| {
            handles.push(
                OptionHandle::new(action.id.as_str())
                    .with_label(action.label.as_str())
                    .disabled(action.disabled)
                    .at(*row, 1),
            );
            *row += 1;
        };
        for item in self.items_for(query) {
            match &item {
                SpotlightItem::Action(action) => push(action, &mut row),
                SpotlightItem::Group { actions, .. } => {
                    row += 1;
                    for action in actions {
                        push(action, &mut row);
                    }
                }
            }
        }
        handles
    }

    fn sync(&self) {
        let query = self.query();
        let handles = self.handles_for(&query);
        self.store.sync_options(handles);
    }

    /// Key handler for the whole palette. The shortcut toggles it from
    /// anywhere; other keys only act while it is open. Query edits go through
    /// [`set_query`](Self::set_query) so the options are re-ranked first.
    pub fn handle_key(&self, event: &KeyEvent) -> InputOutcome {
        if self.props.shortcut.as_ref() == Some(event) {
            debug!("spotlight shortcut pressed");
            self.toggle();
            return InputOutcome::Handled;
        }
        if !self.store.is_open() {
            return InputOutcome::Ignored;
        }

        let bound = self.store.read(|s| s.bindings().resolve(event).is_some());
        if !bound {
            if let Some(ch) = event.typed_char() {
                let mut query = self.query();
                query.push(ch);
                self.set_query(query);
                return InputOutcome::Handled;
            }
            if event.code == Key::Backspace && event.modifiers == Modifiers::NONE {
                let mut query = self.query();
                if query.pop().is_none() {
                    return InputOutcome::Ignored;
                }
                self.set_query(query);
                return InputOutcome::Handled;
            }
        }

        let outcome = self.store.handle_key(event);
        if !self.store.is_open() {
            self.sync();
        }
        outcome
    }

    /// Route a full input event: keys through [`handle_key`](Self::handle_key),
    /// pastes into the search query, pointer rows onto the rendered actions.
    pub fn handle_input(&self, event: &InputEvent) -> InputOutcome {
        match event {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Paste(text) => {
                if !self.store.is_open() {
                    return InputOutcome::Ignored;
                }
                let query = format!("{}{}", self.query(), text.replace(['\n', '\r'], " "));
                self.set_query(query);
                InputOutcome::Handled
            }
            InputEvent::Pointer { .. } if !self.store.is_open() => InputOutcome::Ignored,
            InputEvent::Pointer { action, row } => {
                let id = self
                    .store
                    .read(|s| s.option_at(i32::from(*row)).map(|o| o.id.to_string()));
                let Some(id) = id else {
                    return InputOutcome::Ignored;
                };
                match action {
                    PointerAction::Click if self.click(&id) => InputOutcome::Activate(id.into()),
                    PointerAction::Click => InputOutcome::Ignored,
                    _ => self.store.handle_pointer(&id, *action),
                }
            }
        }
    }

    /// Click on a rendered action.
    pub fn click(&self, id: &str) -> bool {
        let committed = self.store.on_option_select(id);
        if committed && !self.store.is_open() {
            self.sync();
        }
        committed
    }

    /// Render the palette, or `None` while it is closed.
    pub fn render(&self) -> Option<Element> {
        if !self.store.is_open() {
            return None;
        }
        let o = &self.props.overrides;
        let styles = |part: &str| self.store.get_styles(part, o);

        let (query, trigger_attrs) = self.store.read(|s| (s.query().to_owned(), s.trigger_attributes()));
        let search = Element::new("input")
            .styles(styles("search"))
            .attr("value", query.as_str())
            .attr_opt("placeholder", self.props.search_placeholder.as_deref())
            .attrs(trigger_attrs);

        let items = self.items_for(&query);
        let mut list = Element::new("div")
            .styles(styles("actionsList"))
            .attr("id", "spotlight-actions")
            .attr("role", "listbox");
        for item in &items {
            list = match item {
                SpotlightItem::Action(action) => list.child(self.render_action(action)),
                SpotlightItem::Group { label, actions } => list.child(
                    Element::new("div")
                        .styles(styles("actionsGroup"))
                        .attr("data-label", label.as_str())
                        .children(actions.iter().map(|a| self.render_action(a))),
                ),
            };
        }

        let mut body = Element::new("div").styles(styles("body")).child(search).child(list);
        if items.is_empty() {
            if let Some(message) = &self.props.nothing_found {
                body = body.child(Element::new("div").styles(styles("empty")).child(message.as_str()));
            }
        }

        Some(
            Element::new("div")
                .styles(styles("root"))
                .child(Element::new("div").styles(styles("overlay")))
                .child(Element::new("div").styles(styles("content")).child(body)),
        )
    }

    fn render_action(&self, action: &SpotlightAction) -> Element {
        let o = &self.props.overrides;
        let attrs = self.store.read(|s| s.option_attributes(&action.id));
        let selected = attrs.iter().any(|(n, _)| *n == "data-combobox-active");

        let mut body = Element::new("span")
            .styles(self.store.get_styles("actionBody", o))
            .child(
                Element::new("span")
                    .styles(self.store.get_styles("actionLabel", o))
                    .child(action.label.as_str()),
            );
        if let Some(description) = &action.description {
            body = body.child(
                Element::new("span")
                    .styles(self.store.get_styles("actionDescription", o))
                    .child(description.as_str()),
            );
        }

        Element::new("button")
            .styles(self.store.get_styles("action", o))
            .attrs(attrs)
            .flag("data-selected", selected)
            .flag("disabled", action.disabled)
            .child(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    fn actions() -> Vec<SpotlightItem> {
        vec![
            SpotlightAction::new("home", "Home").with_description("Get to home page").into(),
            SpotlightAction::new("docs", "Documentation")
                .with_description("Visit documentation to lean more about all features")
                .into(),
            SpotlightItem::group(
                "Settings",
                [
                    SpotlightAction::new("profile", "Profile").with_keywords(["account"]),
                    SpotlightAction::new("billing", "Billing").with_description("Manage home subscription"),
                ],
            ),
        ]
    }

    fn ids(items: &[SpotlightItem]) -> Vec<&str> {
        let mut out = Vec::new();
        for item in items {
            match item {
                SpotlightItem::Action(a) => out.push(a.id.as_str()),
                SpotlightItem::Group { actions, .. } => out.extend(actions.iter().map(|a| a.id.as_str())),
            }
        }
        out
    }

    // -----------------------------------------------------------------------
    // Filtering
    // -----------------------------------------------------------------------

    #[test]
    fn empty_query_shows_everything() {
        let items = default_spotlight_filter("  ", &actions());
        assert_eq!(ids(&items), ["home", "docs", "profile", "billing"]);
    }

    #[test]
    fn label_matches_rank_first() {
        let items = default_spotlight_filter("home", &actions());
        assert_eq!(ids(&items), ["home", "billing"]);
        assert!(matches!(&items[1], SpotlightItem::Group { label, .. } if label == "Settings"));
    }

    #[test]
    fn keywords_match() {
        let items = default_spotlight_filter("ACCOUNT", &actions());
        assert_eq!(ids(&items), ["profile"]);
    }

    #[test]
    fn limit_truncates_groups() {
        let limited = limit_items(actions(), 3);
        assert_eq!(ids(&limited), ["home", "docs", "profile"]);
        assert!(limit_items(actions(), 0).is_empty());
    }

    // -----------------------------------------------------------------------
    // Store integration
    // -----------------------------------------------------------------------

    #[test]
    fn store_options_follow_display_order() {
        let spotlight = Spotlight::new(SpotlightProps::new(actions()));
        spotlight.open();
        spotlight.set_query("home");

        let (ids, rows): (Vec<String>, Vec<i32>) = spotlight.store().read(|s| {
            s.options().iter().map(|o| (o.id.to_string(), o.top)).unzip()
        });
        assert_eq!(ids, ["home", "billing"]);
        // The group label occupies row 1.
        assert_eq!(rows, [0, 2]);
        assert_eq!(spotlight.store().selected_index(), Some(0));
    }

    #[test]
    fn shortcut_toggles() {
        let spotlight = Spotlight::new(SpotlightProps::new(actions()));
        let ctrl_k = KeyEvent::new(Key::Char('k'), Modifiers::CTRL);

        assert_eq!(spotlight.handle_key(&ctrl_k), InputOutcome::Handled);
        assert!(spotlight.store().is_open());
        spotlight.handle_key(&ctrl_k);
        assert!(!spotlight.store().is_open());

        assert_eq!(spotlight.handle_key(&KeyEvent::plain(Key::Down)), InputOutcome::Ignored);
    }

    #[test]
    fn typing_filters_and_enter_triggers() {
        let spotlight = Spotlight::new(SpotlightProps::new(actions()));
        let triggered = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&triggered);
        spotlight.on_action_trigger(move |id| sink.borrow_mut().push(id.to_owned()));

        spotlight.open();
        for ch in "bill".chars() {
            spotlight.handle_key(&KeyEvent::plain(Key::Char(ch)));
        }
        assert_eq!(ids(&spotlight.displayed_items()), ["billing"]);

        let outcome = spotlight.handle_key(&KeyEvent::plain(Key::Enter));
        assert_eq!(outcome, InputOutcome::Activate("billing".into()));
        assert_eq!(*triggered.borrow(), ["billing"]);
        assert!(!spotlight.store().is_open());
        assert_eq!(spotlight.query(), "");
        assert_eq!(spotlight.store().read(|s| s.options().len()), 4);
    }

    #[test]
    fn keep_open_after_trigger() {
        let props = SpotlightProps::new(actions()).with_close_on_action_trigger(false);
        let spotlight = Spotlight::new(props);
        spotlight.open();
        assert!(spotlight.click("docs"));
        assert!(spotlight.store().is_open());
    }

    #[test]
    fn disabled_actions_are_not_triggered() {
        let props = SpotlightProps::new([SpotlightAction::new("a", "Alpha").disabled(true)]);
        let spotlight = Spotlight::new(props);
        spotlight.open();
        assert!(!spotlight.click("a"));
    }

    #[test]
    fn custom_filter() {
        let props = SpotlightProps::new(actions())
            .with_filter(|query, items| {
                items
                    .iter()
                    .filter(|item| matches!(item, SpotlightItem::Action(a) if a.id.starts_with(query)))
                    .cloned()
                    .collect()
            });
        let spotlight = Spotlight::new(props);
        spotlight.set_query("d");
        assert_eq!(ids(&spotlight.displayed_items()), ["docs"]);
    }

    #[test]
    fn pointer_rows_skip_group_labels() {
        let spotlight = Spotlight::new(SpotlightProps::new(actions()));
        let triggered = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&triggered);
        spotlight.on_action_trigger(move |id| sink.borrow_mut().push(id.to_owned()));
        spotlight.open();

        let label_row = InputEvent::Pointer { action: PointerAction::Click, row: 2 };
        assert_eq!(spotlight.handle_input(&label_row), InputOutcome::Ignored);

        let profile_row = InputEvent::Pointer { action: PointerAction::Click, row: 3 };
        assert_eq!(spotlight.handle_input(&profile_row), InputOutcome::Activate("profile".into()));
        assert_eq!(*triggered.borrow(), ["profile"]);
        assert!(!spotlight.store().is_open());
    }

    #[test]
    fn paste_extends_query() {
        let spotlight = Spotlight::new(SpotlightProps::new(actions()));
        assert_eq!(spotlight.handle_input(&InputEvent::Paste("doc".into())), InputOutcome::Ignored);

        spotlight.open();
        spotlight.handle_input(&InputEvent::Paste("doc\n".into()));
        assert_eq!(spotlight.query(), "doc ");
        assert_eq!(ids(&spotlight.displayed_items()), ["docs"]);
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    #[test]
    fn closed_renders_nothing() {
        assert!(Spotlight::new(SpotlightProps::new(actions())).render().is_none());
    }

    #[test]
    fn nothing_found_message() {
        let props = SpotlightProps::new(actions()).with_nothing_found("Nothing found...");
        let spotlight = Spotlight::new(props);
        spotlight.open();
        spotlight.set_query("zzz");

        let root = spotlight.render().unwrap();
        let empty = root.find_by_class("mantine-Spotlight-empty");
        assert_eq!(empty.len(), 1);
        assert_eq!(empty[0].text_content(), "Nothing found...");
    }

    #[test]
    fn renders_selected_action() {
        let props = SpotlightProps::new([
            SpotlightAction::new("home", "Home"),
            SpotlightAction::new("docs", "Docs").with_description("Read the docs"),
        ])
        .with_search_placeholder("Search...");
        let spotlight = Spotlight::new(props);
        spotlight.open();
        spotlight.store().select_last();

        insta::assert_snapshot!(spotlight.render().unwrap().to_markup(), @r###"
        <div class="spotlight-root mantine-Spotlight-root">
          <div class="spotlight-overlay mantine-Spotlight-overlay"></div>
          <div class="spotlight-content mantine-Spotlight-content">
            <div class="spotlight-body mantine-Spotlight-body">
              <input class="spotlight-search mantine-Spotlight-search" value="" placeholder="Search..." aria-haspopup="listbox" aria-expanded="true" aria-controls="spotlight-actions" aria-activedescendant="spotlight-actions-docs"></input>
              <div class="spotlight-actions-list mantine-Spotlight-actionsList" id="spotlight-actions" role="listbox">
                <button class="spotlight-action mantine-Spotlight-action" id="spotlight-actions-home" role="option" aria-selected="false">
                  <span class="spotlight-action-body mantine-Spotlight-actionBody">
                    <span class="spotlight-action-label mantine-Spotlight-actionLabel">Home</span>
                  </span>
                </button>
                <button class="spotlight-action mantine-Spotlight-action" id="spotlight-actions-docs" role="option" aria-selected="true" data-combobox-active="true" data-selected="true">
                  <span class="spotlight-action-body mantine-Spotlight-actionBody">
                    <span class="spotlight-action-label mantine-Spotlight-actionLabel">Docs</span>
                    <span class="spotlight-action-description mantine-Spotlight-actionDescription">Read the docs</span>
                  </span>
                </button>
              </div>
            </div>
          </div>
        </div>
        "###);
    }
}

//! The overlay selection store.
//!
//! [`OverlayStore`] owns the open state, the query text, the registry of
//! option handles and the active option of one overlay instance. The active
//! option is tracked by id and exposed as an index into the *eligible*
//! subset (registered, enabled, matching the query), so it survives
//! re-ordering and is dropped as soon as the option stops being eligible.

use std::fmt;
use std::rc::Rc;

use log::{debug, trace, warn};

use super::config::StoreConfig;
use super::filter::{default_option_filter, OptionFilter};
use super::option::{OptionHandle, OptionId};
use super::scroll::ScrollState;
use crate::event::{InputEvent, Key, KeyBindingRegistry, KeyEvent, Modifiers, NavigationAction, PointerAction};
use crate::styles_api::{ComponentKind, ResolvedStyles, StylesOverrides, StylesResolver};
use crate::theme::Theme;

/// Attribute list returned for triggers and options, in render order.
pub type Attributes = Vec<(&'static str, String)>;

// ---------------------------------------------------------------------------
// StoreSnapshot
// ---------------------------------------------------------------------------

/// Immutable copy of the observable store state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoreSnapshot {
    pub is_open: bool,
    pub query: String,
    pub selected_index: Option<usize>,
    pub selected_id: Option<OptionId>,
    /// Registered ids in registration order.
    pub options: Vec<OptionId>,
    /// Bumped whenever a registered option or the filter changes.
    pub revision: u64,
    pub scroll_offset: i32,
}

// ---------------------------------------------------------------------------
// InputOutcome
// ---------------------------------------------------------------------------

/// What the store did with an input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    /// The event is not for the store.
    Ignored,
    /// The event changed (or deliberately swallowed) store state.
    Handled,
    /// The host should commit this option (see [`OverlayStore::on_option_select`]).
    Activate(OptionId),
    /// A host-defined binding fired.
    Custom(String),
}

// ---------------------------------------------------------------------------
// OverlayStore
// ---------------------------------------------------------------------------

pub struct OverlayStore {
    config: StoreConfig,
    theme: Rc<Theme>,
    is_open: bool,
    query: String,
    options: Vec<OptionHandle>,
    selected: Option<OptionId>,
    filter: Option<OptionFilter>,
    bindings: KeyBindingRegistry,
    scroll: ScrollState,
    revision: u64,
}

impl fmt::Debug for OverlayStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayStore")
            .field("config", &self.config)
            .field("is_open", &self.is_open)
            .field("query", &self.query)
            .field("options", &self.options)
            .field("selected", &self.selected)
            .field("custom_filter", &self.filter.is_some())
            .field("scroll", &self.scroll)
            .field("revision", &self.revision)
            .finish()
    }
}

impl Default for OverlayStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl OverlayStore {
    /// Create a closed store with the default theme.
    pub fn new(config: StoreConfig) -> Self {
        Self::with_theme(config, Rc::new(Theme::default()))
    }

    pub fn with_theme(config: StoreConfig, theme: Rc<Theme>) -> Self {
        Self {
            config,
            theme,
            is_open: false,
            query: String::new(),
            options: Vec::new(),
            selected: None,
            filter: None,
            bindings: KeyBindingRegistry::with_defaults(),
            scroll: ScrollState::default(),
            revision: 0,
        }
    }

    /// Install a custom filter in place of [`default_option_filter`].
    pub fn set_filter(&mut self, filter: impl Fn(&str, &OptionHandle) -> bool + 'static) {
        self.filter = Some(Rc::new(filter));
        self.revision = self.revision.wrapping_add(1);
        self.drop_ineligible_selection();
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn theme(&self) -> &Rc<Theme> {
        &self.theme
    }

    pub fn bindings(&self) -> &KeyBindingRegistry {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut KeyBindingRegistry {
        &mut self.bindings
    }

    // -----------------------------------------------------------------------
    // Observable state
    // -----------------------------------------------------------------------

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// All registered options in registration order.
    pub fn options(&self) -> &[OptionHandle] {
        &self.options
    }

    pub fn option(&self, id: &str) -> Option<&OptionHandle> {
        self.options.iter().find(|o| o.id == id)
    }

    /// Options that are enabled and match the current query, in order.
    pub fn eligible_options(&self) -> impl Iterator<Item = &OptionHandle> + '_ {
        self.options.iter().filter(move |o| self.matches(o))
    }

    pub fn is_eligible(&self, id: &str) -> bool {
        self.option(id).is_some_and(|o| self.matches(o))
    }

    /// Index of the active option within [`eligible_options`](Self::eligible_options).
    pub fn selected_index(&self) -> Option<usize> {
        let selected = self.selected.as_ref()?;
        self.eligible_options().position(|o| &o.id == selected)
    }

    pub fn selected_option(&self) -> Option<&OptionHandle> {
        let selected = self.selected.as_ref()?;
        self.option(selected.as_str())
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            is_open: self.is_open,
            query: self.query.clone(),
            selected_index: self.selected_index(),
            selected_id: self.selected.clone(),
            options: self.options.iter().map(|o| o.id.clone()).collect(),
            revision: self.revision,
            scroll_offset: self.scroll.offset,
        }
    }

    fn matches(&self, option: &OptionHandle) -> bool {
        if option.disabled {
            return false;
        }
        match &self.filter {
            Some(filter) => filter(&self.query, option),
            None => default_option_filter(&self.query, option),
        }
    }

    // -----------------------------------------------------------------------
    // Visibility
    // -----------------------------------------------------------------------

    pub fn open(&mut self) {
        if !self.is_open {
            debug!("overlay `{}` opened", self.config.list_id);
            self.is_open = true;
        }
    }

    /// Close the overlay, clearing the query and the active option.
    pub fn close(&mut self) {
        if self.is_open {
            debug!("overlay `{}` closed", self.config.list_id);
        }
        self.is_open = false;
        self.query.clear();
        self.selected = None;
        self.scroll.scroll_to(0);
    }

    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    // -----------------------------------------------------------------------
    // Query
    // -----------------------------------------------------------------------

    /// Update the query. The active option is kept while it still matches;
    /// otherwise the first eligible option becomes active. Re-applying the
    /// current text still runs that fallback.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();

        let keep = self
            .selected
            .as_ref()
            .is_some_and(|id| self.is_eligible(id.as_str()));
        if !keep {
            let first = self.eligible_options().next().map(|o| o.id.clone());
            self.selected = first;
        }
        trace!(
            "query `{}` -> {} eligible, selected {:?}",
            self.query,
            self.eligible_options().count(),
            self.selected
        );
        self.sync_scroll();
    }

    // -----------------------------------------------------------------------
    // Navigation
    // -----------------------------------------------------------------------

    pub fn select_next(&mut self) {
        self.step(1);
    }

    pub fn select_previous(&mut self) {
        self.step(-1);
    }

    fn step(&mut self, delta: isize) {
        let count = self.eligible_options().count();
        if count == 0 {
            return;
        }
        let last = count - 1;
        let target = match self.selected_index() {
            None if delta > 0 => 0,
            None => last,
            Some(i) if delta > 0 && i == last => {
                if self.config.loop_navigation {
                    0
                } else {
                    last
                }
            }
            Some(0) if delta < 0 => {
                if self.config.loop_navigation {
                    last
                } else {
                    0
                }
            }
            Some(i) => i.saturating_add_signed(delta),
        };
        self.select_eligible(target);
    }

    pub fn select_first(&mut self) {
        self.select_eligible(0);
    }

    pub fn select_last(&mut self) {
        if let Some(last) = self.eligible_options().count().checked_sub(1) {
            self.select_eligible(last);
        }
    }

    fn select_eligible(&mut self, index: usize) {
        let id = self.eligible_options().nth(index).map(|o| o.id.clone());
        if let Some(id) = id {
            if self.selected.as_ref() != Some(&id) {
                trace!("selected `{id}` ({index})");
            }
            self.selected = Some(id);
            self.sync_scroll();
        }
    }

    /// Make `id` the active option. Returns `false` (and changes nothing)
    /// when it is not eligible.
    pub fn select_option(&mut self, id: &str) -> bool {
        if !self.is_eligible(id) {
            return false;
        }
        self.selected = Some(OptionId::from(id));
        self.sync_scroll();
        true
    }

    pub fn reset_selected_option(&mut self) {
        self.selected = None;
    }

    // -----------------------------------------------------------------------
    // Registration
    // -----------------------------------------------------------------------

    /// Register an option at the end of the navigation order. A handle with
    /// an id that is already registered replaces it in place.
    pub fn register_option(&mut self, handle: OptionHandle) {
        match self.options.iter_mut().find(|o| o.id == handle.id) {
            Some(existing) if *existing == handle => return,
            Some(existing) => {
                warn!(
                    "option `{}` registered twice in `{}`; replacing the earlier handle",
                    handle.id, self.config.list_id
                );
                *existing = handle;
            }
            None => self.options.push(handle),
        }
        self.after_registry_change();
    }

    /// Remove an option. Unknown ids are ignored.
    pub fn unregister_option(&mut self, id: &str) {
        let before = self.options.len();
        self.options.retain(|o| o.id != id);
        if self.options.len() != before {
            self.after_registry_change();
        }
    }

    /// Replace the whole registry, keeping the active option if it is still
    /// eligible.
    pub fn sync_options(&mut self, handles: impl IntoIterator<Item = OptionHandle>) {
        let mut options: Vec<OptionHandle> = Vec::new();
        for handle in handles {
            match options.iter_mut().find(|o| o.id == handle.id) {
                Some(existing) => {
                    warn!("duplicate option `{}` in sync; keeping the last", handle.id);
                    *existing = handle;
                }
                None => options.push(handle),
            }
        }
        if options == self.options {
            return;
        }
        self.options = options;
        self.after_registry_change();
    }

    fn after_registry_change(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        let content = self.options.iter().map(OptionHandle::bottom).max().unwrap_or(0);
        self.scroll.set_content_height(content);
        self.drop_ineligible_selection();
    }

    fn drop_ineligible_selection(&mut self) {
        let stale = self
            .selected
            .as_ref()
            .is_some_and(|id| !self.is_eligible(id.as_str()));
        if stale {
            trace!("selection {:?} no longer eligible", self.selected);
            self.selected = None;
        }
    }

    // -----------------------------------------------------------------------
    // Commit
    // -----------------------------------------------------------------------

    /// The value `on_option_select` would commit for `id`, if any.
    pub fn committable_value(&self, id: &str) -> Option<&str> {
        self.option(id)
            .filter(|o| self.matches(o))
            .map(|o| o.value.as_str())
    }

    /// Commit option `id`: call `commit` with its value, then close (unless
    /// `close_on_select` is off). Options that are not registered, disabled
    /// or filtered out are ignored and `false` is returned.
    pub fn on_option_select(&mut self, id: &str, commit: impl FnOnce(&str)) -> bool {
        let Some(value) = self.committable_value(id).map(str::to_owned) else {
            debug!("ignoring select of ineligible option `{id}`");
            return false;
        };
        commit(&value);
        self.finish_commit(id);
        true
    }

    /// State change that follows a commit.
    pub(crate) fn finish_commit(&mut self, id: &str) {
        if self.config.close_on_select {
            self.close();
        } else {
            self.select_option(id);
        }
    }

    // -----------------------------------------------------------------------
    // Scrolling
    // -----------------------------------------------------------------------

    /// Scroll so the active option is visible in a viewport of the given
    /// height, returning the new offset.
    pub fn scroll_selected_into_view(&mut self, viewport_height: i32) -> i32 {
        self.scroll.set_viewport_height(viewport_height);
        self.sync_scroll();
        self.scroll.offset
    }

    fn sync_scroll(&mut self) {
        let extent = self.selected_option().map(|o| (o.top, o.height));
        if let Some((top, height)) = extent {
            if self.scroll.viewport_height > 0 {
                self.scroll.ensure_visible(top, height);
            }
        }
    }

    /// The eligible option under viewport `row`.
    pub fn option_at(&self, row: i32) -> Option<&OptionHandle> {
        let content_row = row + self.scroll.offset;
        self.eligible_options().find(|o| o.contains_row(content_row))
    }

    // -----------------------------------------------------------------------
    // Attributes
    // -----------------------------------------------------------------------

    /// DOM id of an option: `{list_id}-{id}`.
    pub fn option_dom_id(&self, id: &str) -> String {
        format!("{}-{id}", self.config.list_id)
    }

    /// ARIA and data attributes for a rendered option. Empty for unknown ids.
    pub fn option_attributes(&self, id: &str) -> Attributes {
        let Some(option) = self.option(id) else {
            return Attributes::new();
        };
        let active = self.selected.as_ref().is_some_and(|s| s == &option.id);

        let mut attrs: Attributes = vec![
            ("id", self.option_dom_id(id)),
            ("role", "option".to_owned()),
            ("aria-selected", active.to_string()),
        ];
        if option.disabled {
            attrs.push(("aria-disabled", "true".to_owned()));
            attrs.push(("data-combobox-disabled", "true".to_owned()));
        }
        if active {
            attrs.push(("data-combobox-active", "true".to_owned()));
        }
        attrs
    }

    /// ARIA attributes for the trigger (input or button).
    pub fn trigger_attributes(&self) -> Attributes {
        let mut attrs: Attributes = vec![
            ("aria-haspopup", "listbox".to_owned()),
            ("aria-expanded", self.is_open.to_string()),
        ];
        if self.is_open {
            attrs.push(("aria-controls", self.config.list_id.clone()));
            if let Some(selected) = &self.selected {
                attrs.push(("aria-activedescendant", self.option_dom_id(selected.as_str())));
            }
        }
        attrs
    }

    // -----------------------------------------------------------------------
    // Styles
    // -----------------------------------------------------------------------

    /// Resolver for the store's component against the store's theme.
    pub fn resolver(&self) -> StylesResolver<'_> {
        let resolver = StylesResolver::new(self.config.component, &self.theme);
        match self.config.component {
            ComponentKind::Menu => resolver.with_alias(ComponentKind::Popover.name()),
            _ => resolver,
        }
    }

    pub fn get_styles(&self, part: &str, overrides: &StylesOverrides) -> ResolvedStyles {
        self.resolver().get_styles(part, overrides)
    }

    // -----------------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------------

    /// Apply a key event. Bound keys run their navigation action; `Down` and
    /// `Up` open a closed overlay instead of moving. Printable characters and
    /// `Backspace` edit the query.
    pub fn handle_key(&mut self, event: &KeyEvent) -> InputOutcome {
        if let Some(action) = self.bindings.resolve(event).cloned() {
            return self.apply_action(action);
        }

        if let Some(ch) = event.typed_char() {
            let mut query = self.query.clone();
            query.push(ch);
            self.open();
            self.set_query(query);
            return InputOutcome::Handled;
        }

        if event.code == Key::Backspace && event.modifiers == Modifiers::NONE {
            if self.query.is_empty() {
                return InputOutcome::Ignored;
            }
            let mut query = self.query.clone();
            query.pop();
            self.set_query(query);
            return InputOutcome::Handled;
        }

        InputOutcome::Ignored
    }

    fn apply_action(&mut self, action: NavigationAction) -> InputOutcome {
        match action {
            NavigationAction::Open => self.open(),
            NavigationAction::Close => {
                if !self.is_open {
                    return InputOutcome::Ignored;
                }
                self.close();
            }
            NavigationAction::Toggle => self.toggle(),
            NavigationAction::SelectNext | NavigationAction::SelectPrevious if !self.is_open => {
                self.open();
            }
            NavigationAction::SelectNext => self.select_next(),
            NavigationAction::SelectPrevious => self.select_previous(),
            NavigationAction::SelectFirst => self.select_first(),
            NavigationAction::SelectLast => self.select_last(),
            NavigationAction::Activate => {
                return match (&self.selected, self.is_open) {
                    (Some(id), true) => InputOutcome::Activate(id.clone()),
                    _ => InputOutcome::Ignored,
                };
            }
            NavigationAction::Custom(name) => return InputOutcome::Custom(name),
        }
        InputOutcome::Handled
    }

    /// Apply a pointer action on option `id`. A click asks for a commit,
    /// hovering drops the keyboard selection, a press is swallowed.
    pub fn handle_pointer(&mut self, id: &str, action: PointerAction) -> InputOutcome {
        if self.option(id).is_none() {
            return InputOutcome::Ignored;
        }
        match action {
            PointerAction::Press => InputOutcome::Handled,
            PointerAction::Click => {
                if self.is_eligible(id) {
                    InputOutcome::Activate(OptionId::from(id))
                } else {
                    InputOutcome::Handled
                }
            }
            PointerAction::Hover => {
                self.reset_selected_option();
                InputOutcome::Handled
            }
        }
    }

    /// Route a full input event. Pointer rows are mapped through
    /// [`option_at`](Self::option_at); pointer events on a closed overlay are
    /// ignored.
    pub fn handle_input(&mut self, event: &InputEvent) -> InputOutcome {
        match event {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Pointer { .. } if !self.is_open => InputOutcome::Ignored,
            InputEvent::Pointer { action, row } => {
                let id = self.option_at(i32::from(*row)).map(|o| o.id.clone());
                match id {
                    Some(id) => self.handle_pointer(id.as_str(), *action),
                    None => InputOutcome::Ignored,
                }
            }
            InputEvent::Paste(text) => {
                let query = format!("{}{}", self.query, text.replace(['\n', '\r'], " "));
                self.open();
                self.set_query(query);
                InputOutcome::Handled
            }
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

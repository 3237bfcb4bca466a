//! Reference-counted store handle shared by a trigger and its panel.
//!
//! Host callbacks and listeners are always invoked after the internal
//! `RefCell` borrow is released, so they may call back into the handle.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use log::debug;

use super::config::StoreConfig;
use super::debounce::QueryDebouncer;
use super::option::OptionHandle;
use super::state::{InputOutcome, OverlayStore, StoreSnapshot};
use crate::event::{InputEvent, KeyEvent, PointerAction};
use crate::styles_api::{ResolvedStyles, StylesOverrides};
use crate::theme::Theme;

/// Identifier returned by [`SharedStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Rc<dyn Fn(&StoreSnapshot)>;
type CommitCallback = Rc<dyn Fn(&str)>;

struct Inner {
    store: RefCell<OverlayStore>,
    on_commit: RefCell<Option<CommitCallback>>,
    listeners: RefCell<Vec<(ListenerId, Listener)>>,
    next_listener: Cell<u64>,
    mounted: Cell<bool>,
}

/// Cloneable handle to one overlay's store.
#[derive(Clone)]
pub struct SharedStore {
    inner: Rc<Inner>,
}

impl fmt::Debug for SharedStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedStore")
            .field("store", &self.inner.store)
            .field("listeners", &self.inner.listeners.borrow().len())
            .field("mounted", &self.inner.mounted.get())
            .finish()
    }
}

impl Default for SharedStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl SharedStore {
    /// Create and mount a store.
    pub fn new(config: StoreConfig) -> Self {
        Self::from_store(OverlayStore::new(config))
    }

    pub fn with_theme(config: StoreConfig, theme: Rc<Theme>) -> Self {
        Self::from_store(OverlayStore::with_theme(config, theme))
    }

    pub fn from_store(store: OverlayStore) -> Self {
        Self {
            inner: Rc::new(Inner {
                store: RefCell::new(store),
                on_commit: RefCell::new(None),
                listeners: RefCell::new(Vec::new()),
                next_listener: Cell::new(0),
                mounted: Cell::new(true),
            }),
        }
    }

    /// Set the callback receiving committed option values.
    pub fn on_commit(&self, callback: impl Fn(&str) + 'static) {
        *self.inner.on_commit.borrow_mut() = Some(Rc::new(callback));
    }

    /// Register a listener called with a snapshot after every state change.
    pub fn subscribe(&self, listener: impl Fn(&StoreSnapshot) + 'static) -> ListenerId {
        let id = ListenerId(self.inner.next_listener.get());
        self.inner.next_listener.set(id.0 + 1);
        self.inner.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.inner.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(lid, _)| *lid != id);
        listeners.len() != before
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.mounted.get()
    }

    /// Destroy hook of the owning element: drops listeners and the commit
    /// callback. The handle must not be mutated afterwards.
    pub fn unmount(&self) {
        if self.inner.mounted.replace(false) {
            debug!("overlay `{}` unmounted", self.inner.store.borrow().config().list_id);
            self.inner.listeners.borrow_mut().clear();
            *self.inner.on_commit.borrow_mut() = None;
        }
    }

    /// Whether two handles point at the same store.
    pub fn ptr_eq(&self, other: &SharedStore) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    // -----------------------------------------------------------------------
    // Reading
    // -----------------------------------------------------------------------

    pub fn snapshot(&self) -> StoreSnapshot {
        self.inner.store.borrow().snapshot()
    }

    /// Run `f` against the store without mutating it.
    pub fn read<R>(&self, f: impl FnOnce(&OverlayStore) -> R) -> R {
        let store = self.inner.store.borrow();
        f(&*store)
    }

    pub fn is_open(&self) -> bool {
        self.inner.store.borrow().is_open()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.inner.store.borrow().selected_index()
    }

    pub fn get_styles(&self, part: &str, overrides: &StylesOverrides) -> ResolvedStyles {
        self.inner.store.borrow().get_styles(part, overrides)
    }

    /// A debouncer configured from `query_debounce`, if one is set.
    pub fn debouncer(&self) -> Option<QueryDebouncer> {
        self.inner
            .store
            .borrow()
            .config()
            .query_debounce
            .map(QueryDebouncer::new)
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Mutate the store and notify listeners if the observable state changed.
    pub fn update<R>(&self, f: impl FnOnce(&mut OverlayStore) -> R) -> R {
        debug_assert!(self.is_mounted(), "overlay store mutated after unmount");
        let (result, changed) = {
            let mut store = self.inner.store.borrow_mut();
            let before = store.snapshot();
            let result = f(&mut *store);
            let after = store.snapshot();
            (result, (before != after).then_some(after))
        };
        if let Some(snapshot) = changed {
            self.notify(&snapshot);
        }
        result
    }

    fn notify(&self, snapshot: &StoreSnapshot) {
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in listeners {
            listener(snapshot);
        }
    }

    pub fn open(&self) {
        self.update(OverlayStore::open);
    }

    pub fn close(&self) {
        self.update(OverlayStore::close);
    }

    pub fn toggle(&self) {
        self.update(OverlayStore::toggle);
    }

    pub fn set_query(&self, text: impl Into<String>) {
        let text = text.into();
        self.update(|s| s.set_query(text));
    }

    pub fn select_next(&self) {
        self.update(OverlayStore::select_next);
    }

    pub fn select_previous(&self) {
        self.update(OverlayStore::select_previous);
    }

    pub fn select_first(&self) {
        self.update(OverlayStore::select_first);
    }

    pub fn select_last(&self) {
        self.update(OverlayStore::select_last);
    }

    pub fn select_option(&self, id: &str) -> bool {
        self.update(|s| s.select_option(id))
    }

    pub fn reset_selected_option(&self) {
        self.update(OverlayStore::reset_selected_option);
    }

    pub fn register_option(&self, handle: OptionHandle) {
        self.update(|s| s.register_option(handle));
    }

    pub fn unregister_option(&self, id: &str) {
        self.update(|s| s.unregister_option(id));
    }

    pub fn sync_options(&self, handles: impl IntoIterator<Item = OptionHandle>) {
        self.update(|s| s.sync_options(handles));
    }

    pub fn scroll_selected_into_view(&self, viewport_height: i32) -> i32 {
        self.update(|s| s.scroll_selected_into_view(viewport_height))
    }

    /// Commit option `id` through the stored callback, then apply the
    /// post-commit state change. Returns whether a commit happened.
    pub fn on_option_select(&self, id: &str) -> bool {
        debug_assert!(self.is_mounted(), "overlay store mutated after unmount");
        let value = self
            .inner
            .store
            .borrow()
            .committable_value(id)
            .map(str::to_owned);
        let Some(value) = value else {
            debug!("ignoring select of ineligible option `{id}`");
            return false;
        };

        let callback = self.inner.on_commit.borrow().clone();
        if let Some(callback) = callback {
            callback(&value);
        }
        self.update(|s| s.finish_commit(id));
        true
    }

    /// Route a key event; an activation commits the selected option.
    pub fn handle_key(&self, event: &KeyEvent) -> InputOutcome {
        let outcome = self.update(|s| s.handle_key(event));
        self.commit_activation(outcome)
    }

    /// Route a pointer action on option `id`; a click commits it.
    pub fn handle_pointer(&self, id: &str, action: PointerAction) -> InputOutcome {
        let outcome = self.update(|s| s.handle_pointer(id, action));
        self.commit_activation(outcome)
    }

    pub fn handle_input(&self, event: &InputEvent) -> InputOutcome {
        let outcome = self.update(|s| s.handle_input(event));
        self.commit_activation(outcome)
    }

    fn commit_activation(&self, outcome: InputOutcome) -> InputOutcome {
        if let InputOutcome::Activate(id) = &outcome {
            self.on_option_select(id.as_str());
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Key;
    use pretty_assertions::assert_eq;

    fn fruit_store() -> SharedStore {
        let store = SharedStore::default();
        store.sync_options(["apple", "banana", "cherry"].map(OptionHandle::new));
        store
    }

    #[test]
    fn clones_share_state() {
        let trigger = fruit_store();
        let panel = trigger.clone();
        trigger.open();
        trigger.select_next();
        assert!(panel.is_open());
        assert_eq!(panel.selected_index(), Some(0));
        assert!(trigger.ptr_eq(&panel));
    }

    #[test]
    fn listeners_receive_changes_only() {
        let store = fruit_store();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = store.subscribe(move |snap| sink.borrow_mut().push(snap.is_open));

        store.open();
        store.open();
        store.close();
        assert_eq!(*seen.borrow(), [true, false]);

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.open();
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn listener_may_read_store() {
        let store = fruit_store();
        let handle = store.clone();
        let seen = Rc::new(Cell::new(None));
        let sink = Rc::clone(&seen);
        store.subscribe(move |_| sink.set(handle.read(|s| s.selected_index())));

        store.select_last();
        assert_eq!(seen.get(), Some(2));
    }

    #[test]
    fn commit_callback_can_reenter() {
        let store = fruit_store();
        let handle = store.clone();
        let committed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&committed);
        store.on_commit(move |value| {
            sink.borrow_mut().push(value.to_owned());
            // Re-entrant read while the commit is in flight.
            assert!(handle.is_open());
        });

        store.open();
        assert!(store.on_option_select("banana"));
        assert_eq!(*committed.borrow(), ["banana"]);
        assert!(!store.is_open());
    }

    #[test]
    fn enter_commits_selected_option() {
        let store = fruit_store();
        let committed = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&committed);
        store.on_commit(move |value| *sink.borrow_mut() = Some(value.to_owned()));

        store.handle_key(&KeyEvent::plain(Key::Down));
        store.handle_key(&KeyEvent::plain(Key::Down));
        store.handle_key(&KeyEvent::plain(Key::Down));
        let outcome = store.handle_key(&KeyEvent::plain(Key::Enter));

        assert_eq!(outcome, InputOutcome::Activate("banana".into()));
        assert_eq!(committed.borrow().as_deref(), Some("banana"));
        assert_eq!(store.snapshot().query, "");
        assert!(!store.is_open());
    }

    #[test]
    fn click_commits_and_disabled_click_does_not() {
        let store = fruit_store();
        store.register_option(OptionHandle::new("durian").disabled(true));
        let count = Rc::new(Cell::new(0));
        let sink = Rc::clone(&count);
        store.on_commit(move |_| sink.set(sink.get() + 1));

        store.open();
        store.handle_pointer("durian", PointerAction::Click);
        assert_eq!(count.get(), 0);
        assert!(store.is_open());

        store.handle_pointer("cherry", PointerAction::Click);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn relabeling_unselected_option_notifies() {
        let store = fruit_store();
        let calls = Rc::new(Cell::new(0));
        let sink = Rc::clone(&calls);
        store.subscribe(move |_| sink.set(sink.get() + 1));

        store.register_option(OptionHandle::new("banana").disabled(true));
        assert_eq!(calls.get(), 1);
        store.register_option(OptionHandle::new("banana").disabled(true));
        store.sync_options(store.read(|s| s.options().to_vec()));
        assert_eq!(calls.get(), 1);

        store.register_option(OptionHandle::new("cherry").with_label("Cherry"));
        assert_eq!(calls.get(), 2);
        assert_eq!(store.snapshot().options.len(), 3);
    }

    #[test]
    fn unmount_drops_listeners() {
        let store = fruit_store();
        let calls = Rc::new(Cell::new(0));
        let sink = Rc::clone(&calls);
        store.subscribe(move |_| sink.set(sink.get() + 1));

        store.unmount();
        assert!(!store.is_mounted());
        assert_eq!(store.read(|s| s.options().len()), 3);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "mutated after unmount")]
    fn mutation_after_unmount_panics_in_debug() {
        let store = fruit_store();
        store.unmount();
        store.open();
    }

    #[test]
    fn debouncer_follows_config() {
        assert!(SharedStore::default().debouncer().is_none());
        let config = StoreConfig::new().with_query_debounce(std::time::Duration::from_millis(50));
        assert!(SharedStore::new(config).debouncer().is_some());
    }
}

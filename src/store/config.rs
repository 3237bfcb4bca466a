//! Store configuration.

use std::time::Duration;

use crate::styles_api::ComponentKind;

/// Configuration for an [`OverlayStore`](super::OverlayStore).
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Wrap around when navigating past the first/last option.
    pub loop_navigation: bool,
    /// Close the overlay after an option is committed.
    pub close_on_select: bool,
    /// Delay applied to query updates by a [`QueryDebouncer`](super::QueryDebouncer).
    pub query_debounce: Option<Duration>,
    /// DOM id of the option list; option ids are derived from it.
    pub list_id: String,
    /// Component whose styles API the store resolves parts against.
    pub component: ComponentKind,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            loop_navigation: true,
            close_on_select: true,
            query_debounce: None,
            list_id: "overlay-options".to_owned(),
            component: ComponentKind::Combobox,
        }
    }
}

impl StoreConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set wrap-around navigation (builder).
    pub fn with_loop_navigation(mut self, enabled: bool) -> Self {
        self.loop_navigation = enabled;
        self
    }

    /// Set whether committing an option closes the overlay (builder).
    pub fn with_close_on_select(mut self, enabled: bool) -> Self {
        self.close_on_select = enabled;
        self
    }

    /// Set the query debounce delay (builder).
    pub fn with_query_debounce(mut self, delay: Duration) -> Self {
        self.query_debounce = Some(delay);
        self
    }

    /// Set the option list id (builder).
    pub fn with_list_id(mut self, id: impl Into<String>) -> Self {
        self.list_id = id.into();
        self
    }

    /// Set the component kind (builder).
    pub fn with_component(mut self, component: ComponentKind) -> Self {
        self.component = component;
        self
    }
}

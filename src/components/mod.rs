//! Presentational components.
//!
//! Each component is a pure function from props (and, for store-backed
//! components, a [`SharedStore`](crate::store::SharedStore)) to an
//! [`Element`]. Store-backed components register their options on mount
//! and forward pointer and keyboard events; the store never renders.

pub mod combobox_option;
pub mod element;
pub mod group;
pub mod spotlight;
pub mod years_list;

pub use combobox_option::ComboboxOption;
pub use element::{Element, Node};
pub use group::{group, GroupProps};
pub use spotlight::{
    default_spotlight_filter, limit_items, Spotlight, SpotlightAction, SpotlightFilter, SpotlightItem,
    SpotlightProps,
};
pub use years_list::{
    format_year, get_year_in_tab_order, get_years_data, is_year_disabled, years_list, years_list_vars,
    YearControlProps, YearControlPropsFn, YearsListProps,
};

//! # overlay-kit
//!
//! Building blocks for declarative, tree-based UI components: a shared
//! selection store for overlays (combobox dropdowns, spotlight palettes),
//! styles API metadata with a `get_styles` resolver, theme plumbing, and a
//! few presentational components rendered to plain [`Element`] values.
//!
//! Nothing is painted. Components produce class names, inline styles,
//! attributes and markup; hosts map those onto their own tree.
//!
//! ## Core Systems
//!
//! - **[`store`]**: Overlay selection store: open state, query, active option, option registry
//! - **[`event`]**: Key and pointer input, crossterm conversions, navigation bindings
//! - **[`styles_api`]**: Per-component parts and CSS variables, `get_styles` resolution
//! - **[`theme`]**: Size tokens, `rem`, color parsing, variant colors
//! - **[`css`]**: Inline style tokenizer and parser, class-name joining
//! - **[`components`]**: `ComboboxOption`, `Spotlight`, `Group`, `YearsList`
//! - **[`demo`]**: Configurator controls and prop injection for documentation
//! - **[`testing`]**: Headless pilot and snapshot helpers

// Lets `style!` expand to `::overlay_kit::...` inside this crate too.
extern crate self as overlay_kit;

// Foundation
pub mod css;
pub mod theme;

// Core systems
pub mod event;
pub mod store;
pub mod styles_api;

// Components
pub mod components;
pub mod demo;

// Testing
pub mod testing;

pub use components::Element;
pub use store::{InputOutcome, OptionHandle, OverlayStore, SharedStore, StoreConfig};
pub use styles_api::{ComponentKind, StylesOverrides};
pub use theme::Theme;

// Proc macros (feature-gated)
#[cfg(feature = "macros")]
pub use overlay_kit_macros::style;

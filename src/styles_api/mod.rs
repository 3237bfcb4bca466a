//! Styles API: component part metadata and the `get_styles` resolver.

pub mod data;
pub mod resolver;

pub use data::{ComponentKind, CssVariable, Selector, StylesApiData, UnknownComponent};
pub use resolver::{ResolvedStyles, StylesOverrides, StylesResolver};

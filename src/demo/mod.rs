//! Configurator demo harness for documentation pages.
//!
//! A [`Configurator`] pairs a code sample with a list of [`Control`]s. Each
//! control edits one prop; the sample is regenerated with every prop that
//! differs from the component's own default.

pub mod configurator;
pub mod control;

pub use configurator::{clear_props, inject_props, Configurator, DemoError, PROPS_PLACEHOLDER};
pub use control::{Control, ControlKind, ControlValue, UnknownControl};

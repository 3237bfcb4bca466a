//! Headless testing helpers: Pilot, snapshot helpers.
//!
//! Use the [`Pilot`] to drive a [`SharedStore`](crate::store::SharedStore) or
//! a [`Spotlight`](crate::components::Spotlight) with simulated input. Use
//! [`render_options`] and [`render_to_string`] to capture state and markup
//! as plain text for snapshot-style assertions.

pub mod pilot;
pub mod snapshot;

pub use pilot::{InputTarget, Pilot};
pub use snapshot::{render_options, render_to_string};

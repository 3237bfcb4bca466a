//! Overlay selection store.
//!
//! - [`state`]: [`OverlayStore`]: open state, query, option registry, active option.
//! - [`shared`]: [`SharedStore`]: `Rc` handle with listeners and a commit callback.
//! - [`option`]: option handles registered by rendered options.
//! - [`filter`]: query filters.
//! - [`scroll`]: list scroll state.
//! - [`debounce`]: tokio-timed query debouncing.
//! - [`config`]: store configuration.

pub mod config;
pub mod debounce;
pub mod filter;
pub mod option;
pub mod scroll;
pub mod shared;
pub mod state;

pub use config::StoreConfig;
pub use debounce::QueryDebouncer;
pub use filter::{default_option_filter, OptionFilter};
pub use option::{OptionHandle, OptionId};
pub use scroll::ScrollState;
pub use shared::{ListenerId, SharedStore};
pub use state::{Attributes, InputOutcome, OverlayStore, StoreSnapshot};

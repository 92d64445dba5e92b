//! Persisted client stores
//!
//! Explicit stores with a read-at-init / write-on-mutation lifecycle,
//! injected into consumers through `AppState` rather than accessed as
//! ambient singletons.

mod preferences;
mod watchlist;

pub use preferences::{PreferencesStore, Theme};
pub use watchlist::WatchlistStore;

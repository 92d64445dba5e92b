//! Watchlist store
//!
//! Ordered set of ticker symbols, unique case-insensitively, persisted as a
//! JSON array under one key in the local database. Hydrated once at startup;
//! absent or corrupt state falls back to empty. Every mutation writes back;
//! a failed write is logged and never surfaced to the caller.

use crate::db::SqliteDb;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::warn;

const WATCHLIST_KEY: &str = "watchlist";

/// Persisted, insertion-ordered set of uppercase ticker symbols
pub struct WatchlistStore {
    db: Arc<SqliteDb>,
    symbols: RwLock<Vec<String>>,
}

impl WatchlistStore {
    /// Hydrate the store from persisted state
    pub fn load(db: Arc<SqliteDb>) -> Self {
        let symbols = match db.get_value(WATCHLIST_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(list) => sanitize(list),
                Err(e) => {
                    warn!("Corrupt persisted watchlist, starting empty: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read persisted watchlist, starting empty: {}", e);
                Vec::new()
            }
        };

        Self {
            db,
            symbols: RwLock::new(symbols),
        }
    }

    /// Add a symbol; no-op when already present. Returns whether it was added.
    pub fn add(&self, symbol: &str) -> bool {
        let symbol = normalize(symbol);
        if symbol.is_empty() {
            return false;
        }

        let mut symbols = self.symbols.write();
        if symbols.iter().any(|s| *s == symbol) {
            return false;
        }
        symbols.push(symbol);
        self.persist(&symbols);
        true
    }

    /// Remove a symbol; no-op when absent. Returns whether it was removed.
    pub fn remove(&self, symbol: &str) -> bool {
        let symbol = normalize(symbol);
        let mut symbols = self.symbols.write();
        let before = symbols.len();
        symbols.retain(|s| *s != symbol);
        if symbols.len() == before {
            return false;
        }
        self.persist(&symbols);
        true
    }

    /// Add the symbol when absent, remove it otherwise. Returns the new
    /// membership state.
    pub fn toggle(&self, symbol: &str) -> bool {
        if self.has(symbol) {
            self.remove(symbol);
            false
        } else {
            self.add(symbol)
        }
    }

    /// Empty the watchlist
    pub fn clear(&self) {
        let mut symbols = self.symbols.write();
        if symbols.is_empty() {
            return;
        }
        symbols.clear();
        self.persist(&symbols);
    }

    /// Membership test, case-insensitive
    pub fn has(&self, symbol: &str) -> bool {
        let symbol = normalize(symbol);
        self.symbols.read().iter().any(|s| *s == symbol)
    }

    /// Symbols in insertion order
    pub fn symbols(&self) -> Vec<String> {
        self.symbols.read().clone()
    }

    pub fn len(&self) -> usize {
        self.symbols.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.read().is_empty()
    }

    fn persist(&self, symbols: &[String]) {
        let raw = match serde_json::to_string(symbols) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to serialize watchlist: {}", e);
                return;
            }
        };
        if let Err(e) = self.db.set_value(WATCHLIST_KEY, &raw) {
            warn!("Failed to persist watchlist: {}", e);
        }
    }
}

fn normalize(symbol: &str) -> String {
    symbol.trim().to_ascii_uppercase()
}

/// Uppercase and de-duplicate persisted symbols, keeping first occurrences
fn sanitize(list: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(list.len());
    for symbol in list {
        let symbol = normalize(&symbol);
        if !symbol.is_empty() && !out.contains(&symbol) {
            out.push(symbol);
        }
    }
    out
}

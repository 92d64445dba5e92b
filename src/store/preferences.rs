//! Preference store
//!
//! Currently one preference: the UI theme. Same lifecycle as the watchlist:
//! read once at startup, written on every mutation, corrupt values recovered
//! to the default.

use crate::db::SqliteDb;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

const THEME_KEY: &str = "theme";

/// UI theme preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            "system" => Some(Theme::System),
            _ => None,
        }
    }
}

/// Persisted user preferences
pub struct PreferencesStore {
    db: Arc<SqliteDb>,
    theme: RwLock<Theme>,
}

impl PreferencesStore {
    /// Hydrate preferences from persisted state
    pub fn load(db: Arc<SqliteDb>) -> Self {
        let theme = match db.get_value(THEME_KEY) {
            Ok(Some(raw)) => Theme::parse(&raw).unwrap_or_else(|| {
                warn!("Unknown persisted theme {:?}, using default", raw);
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!("Failed to read persisted theme, using default: {}", e);
                Theme::default()
            }
        };

        Self {
            db,
            theme: RwLock::new(theme),
        }
    }

    pub fn theme(&self) -> Theme {
        *self.theme.read()
    }

    pub fn set_theme(&self, theme: Theme) {
        *self.theme.write() = theme;
        if let Err(e) = self.db.set_value(THEME_KEY, theme.as_str()) {
            warn!("Failed to persist theme: {}", e);
        }
    }
}

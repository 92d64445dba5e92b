//! Application configuration
//!
//! Read once at startup from environment variables. The presence of
//! `MARKETDECK_API_URL` decides whether the engine runs against the remote
//! market-data API or the built-in mock source.

use crate::error::{AppError, Result};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Default ceiling for any single HTTP request
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the remote market-data API; `None` selects the mock source
    pub api_base_url: Option<Url>,

    /// Directory holding the local database
    pub data_dir: PathBuf,

    /// Hard timeout applied to every outbound HTTP request
    pub http_timeout: Duration,
}

impl AppConfig {
    /// Build configuration from the process environment
    pub fn from_env() -> Result<Self> {
        let api_base_url = parse_base_url(std::env::var("MARKETDECK_API_URL").ok())?;

        let data_dir = match std::env::var("MARKETDECK_DATA_DIR") {
            Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => default_data_dir(),
        };

        let http_timeout = match std::env::var("MARKETDECK_HTTP_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    AppError::Config(format!("invalid MARKETDECK_HTTP_TIMEOUT_SECS: {}", raw))
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        };

        Ok(Self {
            api_base_url,
            data_dir,
            http_timeout,
        })
    }

    /// Whether the engine talks to a remote API
    pub fn is_remote(&self) -> bool {
        self.api_base_url.is_some()
    }
}

/// Parse the base URL variable. Unset or blank means "no backend configured"
/// and is not an error; a present but malformed value is.
fn parse_base_url(raw: Option<String>) -> Result<Option<Url>> {
    match raw {
        None => Ok(None),
        Some(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            let url = Url::parse(trimmed)
                .map_err(|e| AppError::Config(format!("invalid MARKETDECK_API_URL: {}", e)))?;
            Ok(Some(url))
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("marketdeck")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_base_url_is_not_an_error() {
        assert!(parse_base_url(None).unwrap().is_none());
        assert!(parse_base_url(Some(String::new())).unwrap().is_none());
        assert!(parse_base_url(Some("   ".to_string())).unwrap().is_none());
    }

    #[test]
    fn test_valid_base_url() {
        let url = parse_base_url(Some("https://api.example.com".to_string()))
            .unwrap()
            .unwrap();
        assert_eq!(url.scheme(), "https");
    }

    #[test]
    fn test_malformed_base_url_is_rejected() {
        assert!(parse_base_url(Some("not a url".to_string())).is_err());
    }
}

//! Application configuration.
//!
//! The server loads `Config` from environment variables with `Config::from_env()`
//! after calling `dotenvy::dotenv()`. The waitlist endpoint is rendered into the
//! page shell as a `<meta>` tag, and the browser reads it back into a
//! `WaitlistConfig`.

use std::time::Duration;

/// Endpoint used when `WAITLIST_ENDPOINT` is not set
pub const DEFAULT_WAITLIST_ENDPOINT: &str = "/api/waitlist";

/// Name of the `<meta>` tag carrying the endpoint to the browser
pub const ENDPOINT_META_NAME: &str = "waitlist-endpoint";

/// How long the email input keeps its error outline
pub const EMAIL_FLAG_DURATION: Duration = Duration::from_millis(2000);

/// Submit button label while a request is in flight
pub const PENDING_LABEL: &str = "Joining...";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Waitlist API endpoint
    /// Example: https://api.st4ck.io/waitlist
    pub waitlist_endpoint: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    #[cfg(feature = "ssr")]
    pub fn from_env() -> Self {
        Self {
            waitlist_endpoint: std::env::var("WAITLIST_ENDPOINT").ok(),
        }
    }

    /// Check if a waitlist endpoint is configured
    pub fn has_waitlist_endpoint(&self) -> bool {
        self.waitlist_endpoint.is_some()
    }

    /// Configured endpoint, or the same-origin default
    pub fn waitlist_endpoint_or_default(&self) -> &str {
        self.waitlist_endpoint
            .as_deref()
            .filter(|endpoint| !endpoint.trim().is_empty())
            .unwrap_or(DEFAULT_WAITLIST_ENDPOINT)
    }
}

#[cfg(feature = "ssr")]
impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Settings the waitlist form needs in the browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistConfig {
    pub endpoint: String,
    pub email_flag_duration: Duration,
    pub pending_label: String,
}

impl WaitlistConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            email_flag_duration: EMAIL_FLAG_DURATION,
            pending_label: PENDING_LABEL.to_string(),
        }
    }

    /// Read the endpoint from the page's `<meta name="waitlist-endpoint">`,
    /// falling back to the default
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Self {
        let endpoint = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| {
                document
                    .query_selector(&format!("meta[name=\"{ENDPOINT_META_NAME}\"]"))
                    .ok()
                    .flatten()
            })
            .and_then(|meta| meta.get_attribute("content"))
            .filter(|endpoint| !endpoint.trim().is_empty());

        match endpoint {
            Some(endpoint) => Self::new(endpoint),
            None => Self::default(),
        }
    }
}

impl Default for WaitlistConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WAITLIST_ENDPOINT)
    }
}

impl From<&Config> for WaitlistConfig {
    fn from(config: &Config) -> Self {
        Self::new(config.waitlist_endpoint_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_with_endpoint() {
        let config = Config {
            waitlist_endpoint: Some("https://api.st4ck.io/waitlist".to_string()),
        };

        assert!(config.has_waitlist_endpoint());
        assert_eq!(
            config.waitlist_endpoint_or_default(),
            "https://api.st4ck.io/waitlist"
        );
    }

    #[test]
    fn test_config_without_endpoint() {
        let config = Config {
            waitlist_endpoint: None,
        };

        assert!(!config.has_waitlist_endpoint());
        assert_eq!(config.waitlist_endpoint_or_default(), "/api/waitlist");
    }

    #[test]
    fn test_blank_endpoint_falls_back() {
        // A blank value still counts as "set" but is never used
        let config = Config {
            waitlist_endpoint: Some("   ".to_string()),
        };

        assert!(config.has_waitlist_endpoint());
        assert_eq!(config.waitlist_endpoint_or_default(), DEFAULT_WAITLIST_ENDPOINT);
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on environment, so we don't assert specific values
        let config = Config::from_env();
        let _ = config.has_waitlist_endpoint();
        let _ = config.waitlist_endpoint_or_default();
    }

    #[test]
    fn test_waitlist_config_defaults() {
        let config = WaitlistConfig::default();

        assert_eq!(config.endpoint, "/api/waitlist");
        assert_eq!(config.email_flag_duration, Duration::from_millis(2000));
        assert_eq!(config.pending_label, "Joining...");
    }

    #[test]
    fn test_waitlist_config_from_server_config() {
        let config = Config {
            waitlist_endpoint: Some("https://example.com/join".to_string()),
        };

        let waitlist = WaitlistConfig::from(&config);

        assert_eq!(waitlist.endpoint, "https://example.com/join");
        assert_eq!(waitlist.pending_label, PENDING_LABEL);
    }
}

//! Configuration for the content lookup client.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default timeout for content lookups: 30 seconds.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`ContentClient`].
///
/// [`ContentClient`]: crate::ContentClient
#[derive(Debug, Clone, Serialize, Deserialize)]
#[must_use = "config does nothing unless you use it"]
pub struct ContentClientConfig {
    /// Origin of the lectern server, e.g. `https://lectern.dev`.
    pub base_url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// User-Agent header sent with lookups.
    pub user_agent: String,
}

fn default_user_agent() -> String {
    format!("lectern/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ContentClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_owned(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ContentClientConfig {
    /// Creates a configuration pointing at `base_url` with default settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs();
        self
    }

    /// Sets the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Returns the effective timeout, using default if zero.
    pub fn effective_timeout(&self) -> Duration {
        if self.timeout_secs == 0 {
            DEFAULT_TIMEOUT
        } else {
            Duration::from_secs(self.timeout_secs)
        }
    }

    /// Returns the effective user agent, using default if empty.
    pub fn effective_user_agent(&self) -> String {
        if self.user_agent.is_empty() {
            default_user_agent()
        } else {
            self.user_agent.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ContentClientConfig::default();
        assert_eq!(config.effective_timeout(), Duration::from_secs(30));
        assert!(config.user_agent.starts_with("lectern/"));
    }

    #[test]
    fn zero_timeout_uses_default() {
        let config = ContentClientConfig::default().with_timeout(Duration::ZERO);
        assert_eq!(config.effective_timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn empty_user_agent_uses_default() {
        let config = ContentClientConfig::default().with_user_agent("");
        assert!(config.effective_user_agent().starts_with("lectern/"));
    }
}

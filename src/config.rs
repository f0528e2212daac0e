// Copyright (c) 2025 - Cowboy AI, Inc.
//! Record store connection configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

fn default_connect_timeout() -> u64 {
    10
}

fn default_request_timeout() -> u64 {
    30
}

/// Configuration for the remote record store connection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store base URL (e.g. "https://cityverse-default-rtdb.firebaseio.com")
    pub base_url: String,

    /// Collection name addressed under the base URL
    pub collection: String,

    /// Credential attached as the `auth` query parameter
    ///
    /// Acquired and refreshed by an external auth collaborator; the client
    /// only forwards it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,

    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl StoreConfig {
    /// Create a configuration for the given base URL and the default
    /// `cities` collection
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Set the collection name
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Set the auth credential
    pub fn with_auth(mut self, token: impl Into<String>) -> Self {
        self.auth = Some(token.into());
        self
    }

    /// Set the per-request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout_secs = timeout.as_secs();
        self
    }

    /// Connection timeout as a `Duration`
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Request timeout as a `Duration`
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9000".to_string(),
            collection: "cities".to_string(),
            auth: None,
            connect_timeout_secs: default_connect_timeout(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = StoreConfig::default();
        assert_eq!(config.collection, "cities");
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.auth.is_none());
    }

    #[test]
    fn test_config_builders() {
        let config = StoreConfig::new("https://example.test")
            .with_collection("places")
            .with_auth("tok")
            .with_request_timeout(Duration::from_secs(5));

        assert_eq!(config.base_url, "https://example.test");
        assert_eq!(config.collection, "places");
        assert_eq!(config.auth.as_deref(), Some("tok"));
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
    }
}

//! Session configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Session namespace/prefix
    pub namespace: String,
    /// Default session TTL
    pub default_ttl: Duration,
    /// Maximum session TTL
    pub max_ttl: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            namespace: "session".to_string(),
            default_ttl: Duration::from_secs(3600),  // 1 hour
            max_ttl: Duration::from_secs(86400 * 7), // 7 days
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the session namespace/prefix.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Set the default session TTL.
    pub fn with_default_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = ttl;
        self
    }

    /// Set the maximum session TTL.
    pub fn with_max_ttl(mut self, ttl: Duration) -> Self {
        self.max_ttl = ttl;
        self
    }

    /// The requested TTL, or the default, never above `max_ttl`.
    pub fn effective_ttl(&self, requested: Option<Duration>) -> Duration {
        requested.unwrap_or(self.default_ttl).min(self.max_ttl)
    }

    /// Build the session key with namespace.
    pub fn session_key(&self, session_id: &str) -> String {
        format!("{}:{}", self.namespace, session_id)
    }
}

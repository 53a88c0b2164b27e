//! Transport configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const ORIGIN_ENV: &str = "ADMIN_API_ORIGIN";
pub const TIMEOUT_ENV: &str = "ADMIN_API_TIMEOUT_SECS";

/// Where requests go and how long the transport may wait for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Scheme, host and port. Request paths are appended verbatim.
    pub origin: String,
    /// Global timeout per request. `None` waits indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            origin: "http://127.0.0.1:3000".to_string(),
            timeout_secs: None,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the origin. A trailing `/` is dropped so `origin + "/admin..."`
    /// does not double up.
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into().trim_end_matches('/').to_string();
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Defaults overridden by `ADMIN_API_ORIGIN` and `ADMIN_API_TIMEOUT_SECS`.
    /// An unparsable timeout is ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(origin) = lookup(ORIGIN_ENV) {
            config = config.origin(origin);
        }
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            match raw.parse() {
                Ok(secs) => config = config.timeout_secs(secs),
                Err(_) => tracing::warn!(value = %raw, "ignoring invalid {TIMEOUT_ENV}"),
            }
        }
        config
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

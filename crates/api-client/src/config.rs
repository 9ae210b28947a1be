//! Configuration for the animation client
//!
//! Supports environment-based configuration with sensible defaults.

use crate::error::{GenerationError, GenerationResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Production LivePortrait endpoint
const DEFAULT_API_URL: &str = "https://api.segmind.com/v1/live-portrait";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// LivePortrait endpoint URL
    pub api_url: String,
    /// API key; absence is a generation-time failure, not a startup one
    pub api_key: Option<String>,
    /// Request timeout
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `SEGMIND_API_KEY` or `LIVELOOP_API_KEY`: API key for the service
    /// - `LIVELOOP_API_URL`: endpoint override (optional)
    /// - `LIVELOOP_TIMEOUT_SECS`: request timeout in seconds (default 60)
    pub fn from_env() -> Self {
        let api_url = env::var("LIVELOOP_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let api_key = env::var("SEGMIND_API_KEY")
            .or_else(|_| env::var("LIVELOOP_API_KEY"))
            .ok();

        let timeout = env::var("LIVELOOP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        Self {
            api_url,
            api_key,
            timeout,
        }
    }

    /// Builder-style method to set the endpoint URL
    #[must_use]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Builder-style method to set the API key
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Builder-style method to set the timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> GenerationResult<()> {
        if self.api_url.is_empty() {
            return Err(GenerationError::config("api_url cannot be empty"));
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(GenerationError::config(
                "api_url must start with http:// or https://",
            ));
        }

        if self.timeout.is_zero() {
            return Err(GenerationError::config("timeout cannot be zero"));
        }

        Ok(())
    }
}

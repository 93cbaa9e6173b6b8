//! Configuration types for the Coolify SDK.

use crate::error::{CoolifyError, CoolifyResult};
use std::fmt;
use std::time::Duration;
use url::Url;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the Coolify client.
///
/// Immutable once validated: the client only ever reads it.
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL of the Coolify instance, without trailing slash.
    pub base_url: String,
    /// API access token, sent as a bearer token.
    pub access_token: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a new configuration with the default timeout.
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: access_token.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Check required fields and normalize the base URL.
    pub fn validate(mut self) -> CoolifyResult<Self> {
        let base_url = self.base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(CoolifyError::Config(
                "Coolify base URL is required".to_string(),
            ));
        }
        if self.access_token.trim().is_empty() {
            return Err(CoolifyError::Config(
                "Coolify access token is required".to_string(),
            ));
        }

        Url::parse(base_url).map_err(|e| {
            CoolifyError::Config(format!("Invalid Coolify base URL '{}': {}", base_url, e))
        })?;

        self.base_url = base_url.to_string();
        Ok(self)
    }

    /// Full URL for an API path such as `/servers`.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url, path)
    }
}

// Keeps the token out of logs.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("access_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

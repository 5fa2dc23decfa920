//! Client configuration: credential, API root and request timeout.

use std::fmt;
use std::time::Duration;

use crate::gateway::DEFAULT_TIMEOUT;
use crate::url_builder::API_ROOT;
use crate::Error;

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "FOOTBALL_API_KEY";

/// Environment variable overriding the API root, e.g. for a local mock.
pub const BASE_URL_VAR: &str = "FOOTBALL_DATA_BASE_URL";

/// Settings used to build a [`crate::Client`].
#[derive(Clone)]
pub struct Config {
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    /// Creates a config for the production API. Fails on an empty key.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        let api_key = api_key.into().trim().to_string();
        if api_key.is_empty() {
            return Err(Error::MissingApiKey);
        }
        Ok(Self {
            api_key,
            base_url: API_ROOT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Reads the key from `FOOTBALL_API_KEY` and the optional root from
    /// `FOOTBALL_DATA_BASE_URL`.
    pub fn from_env() -> Result<Self, Error> {
        Self::resolve(None)
    }

    /// Uses `explicit` when it is a non-empty key, otherwise the environment.
    pub fn resolve(explicit: Option<&str>) -> Result<Self, Error> {
        Self::resolve_with(explicit, |key| std::env::var(key).ok())
    }

    fn resolve_with<F>(explicit: Option<&str>, lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = explicit
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_string)
            .or_else(|| lookup(API_KEY_VAR))
            .ok_or(Error::MissingApiKey)?;
        let config = Self::new(api_key)?;
        Ok(match lookup(BASE_URL_VAR).filter(|url| !url.trim().is_empty()) {
            Some(base_url) => config.with_base_url(&base_url),
            None => config,
        })
    }

    /// Points the client at another root. Used for testing with wiremock.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim().to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

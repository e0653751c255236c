use std::env;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000/api";
pub const DEFAULT_ADVANCE_DELAY: Duration = Duration::from_millis(1000);

/// Connection and pacing settings for the rating client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    identity_token: String,
    advance_delay: Duration,
    timeout: Option<Duration>,
}

impl ClientConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBaseUrl` if `base_url` does not parse.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        let trimmed = base_url.trim();
        if Url::parse(trimmed).is_err() {
            return Err(ConfigError::InvalidBaseUrl { raw: base_url });
        }
        Ok(Self {
            base_url: trimmed.trim_end_matches('/').to_string(),
            identity_token: String::new(),
            advance_delay: DEFAULT_ADVANCE_DELAY,
            timeout: None,
        })
    }

    /// Read settings from `RATER_API_BASE_URL`, `RATER_INIT_DATA`,
    /// `RATER_ADVANCE_DELAY_MS` and `RATER_TIMEOUT_MS`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] with a custom variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is set but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup("RATER_API_BASE_URL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let mut config = Self::new(base_url)?;

        if let Some(token) = lookup("RATER_INIT_DATA") {
            config = config.with_identity_token(token);
        }
        if let Some(raw) = lookup("RATER_ADVANCE_DELAY_MS") {
            config = config.with_advance_delay(parse_millis("RATER_ADVANCE_DELAY_MS", &raw)?);
        }
        if let Some(raw) = lookup("RATER_TIMEOUT_MS") {
            config = config.with_timeout(Some(parse_millis("RATER_TIMEOUT_MS", &raw)?));
        }
        Ok(config)
    }

    #[must_use]
    pub fn with_identity_token(mut self, token: impl Into<String>) -> Self {
        self.identity_token = token.into();
        self
    }

    #[must_use]
    pub fn with_advance_delay(mut self, delay: Duration) -> Self {
        self.advance_delay = delay;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn identity_token(&self) -> &str {
        &self.identity_token
    }

    #[must_use]
    pub fn advance_delay(&self) -> Duration {
        self.advance_delay
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// No identity token: requests go out unauthenticated.
    #[must_use]
    pub fn is_dev_mode(&self) -> bool {
        self.identity_token.is_empty()
    }
}

fn parse_millis(name: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::InvalidNumber {
            name,
            raw: raw.to_string(),
        })
}

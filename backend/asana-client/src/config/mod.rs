//! Client configuration.
//!
//! Built in code with [`ClientConfig::new`] or read from the environment
//! (optionally seeded from a `.env` file) with [`ClientConfig::from_env`].

use crate::ASANA_API_BASE_URL;
use crate::error::asana_client::AsanaClientError;

use common::RedactedApiKey;

use std::env;
use std::time::Duration;

use log::{debug, info};
use url::Url;

pub const API_KEY_ENV: &str = "ASANA_API_KEY";
pub const BASE_URL_ENV: &str = "ASANA_BASE_URL";
pub const TIMEOUT_SECS_ENV: &str = "ASANA_TIMEOUT_SECS";
pub const DEBUG_ENV: &str = "ASANA_DEBUG";

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: RedactedApiKey,
    pub base_url: String,
    pub timeout: Duration,
    /// Trace every request URL and response body through `log`.
    pub debug: bool,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: RedactedApiKey::new(api_key),
            base_url: ASANA_API_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_DURATION,
            debug: false,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Read configuration from `ASANA_*` environment variables.
    ///
    /// A `.env` in the working directory is loaded first if present; values
    /// already in the environment win.
    ///
    /// # Errors
    ///
    /// Returns [`AsanaClientError::Configuration`] if `ASANA_API_KEY` is
    /// missing or any value fails to parse or validate.
    pub fn from_env() -> Result<Self, AsanaClientError> {
        match dotenvy::dotenv() {
            Ok(path) => info!("Loaded .env from: {}", path.display()),
            Err(_) => debug!("No .env file found - using process environment only"),
        }

        let api_key = env::var(API_KEY_ENV).map_err(|_| {
            AsanaClientError::configuration(format!("{API_KEY_ENV} is not set"))
        })?;

        let mut config = Self::new(api_key);

        if let Ok(base_url) = env::var(BASE_URL_ENV) {
            config.base_url = base_url;
        }

        if let Ok(raw) = env::var(TIMEOUT_SECS_ENV) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                AsanaClientError::configuration(format!(
                    "{TIMEOUT_SECS_ENV} must be a whole number of seconds, got '{raw}'"
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Ok(raw) = env::var(DEBUG_ENV) {
            config.debug = parse_flag(&raw).ok_or_else(|| {
                AsanaClientError::configuration(format!(
                    "{DEBUG_ENV} must be true/false, got '{raw}'"
                ))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`AsanaClientError::Configuration`] if any value is invalid.
    #[track_caller]
    pub fn validate(&self) -> Result<(), AsanaClientError> {
        if self.api_key.is_blank() {
            return Err(AsanaClientError::configuration("API key cannot be empty"));
        }

        if self.timeout.is_zero() {
            return Err(AsanaClientError::configuration("Timeout must be non-zero"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(AsanaClientError::configuration(format!(
                "Invalid base URL format: {}",
                self.base_url
            )));
        }

        Ok(())
    }

    /// Base URL with a guaranteed trailing slash, so relative joins append
    /// to the version segment instead of replacing it.
    pub fn parsed_base_url(&self) -> Result<Url, AsanaClientError> {
        let mut raw = self.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        Url::parse(&raw).map_err(|e| {
            AsanaClientError::configuration(format!("Invalid base URL '{}': {e}", self.base_url))
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

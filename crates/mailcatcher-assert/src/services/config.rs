/// Configuration for the MailCatcher client
use crate::constants::{BASE_URL_ENV_VAR, DEFAULT_BASE_URL};
use crate::error::{MailCatcherError, Result};
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailCatcherConfig {
    /// Base URL of the service, always ending in `/`
    pub base_url: Url,
    /// Request timeout; `None` keeps the HTTP client's default
    pub timeout: Option<Duration>,
}

impl MailCatcherConfig {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = normalize_base_url(Url::parse(base_url)?)?;

        Ok(Self {
            base_url,
            timeout: None,
        })
    }

    /// Reads the base URL from `MAILCATCHER_URL`, falling back to the default
    pub fn from_env() -> Result<Self> {
        match std::env::var(BASE_URL_ENV_VAR) {
            Ok(url) if !url.trim().is_empty() => {
                let config = Self::new(url.trim())?;
                tracing::debug!("Using MailCatcher at {} from environment", config.base_url);
                Ok(config)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Resolves a path relative to the base URL
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }
}

impl Default for MailCatcherConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("valid default URL"),
            timeout: None,
        }
    }
}

fn normalize_base_url(mut url: Url) -> Result<Url> {
    if !matches!(url.scheme(), "http" | "https") {
        return Err(MailCatcherError::Config(format!(
            "Unsupported scheme for MailCatcher URL: {}",
            url.scheme()
        )));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}

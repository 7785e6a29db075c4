/// MailCatcher HTTP service
use crate::constants::{MESSAGES_PATH, detail_path, message_path};
use crate::error::{MailCatcherError, Result};
use crate::models::{CapturedMessage, Email};
use crate::services::config::MailCatcherConfig;
use crate::utils::logging::redact_body;
use reqwest::Method;
use reqwest::blocking::{Client, Response};
use std::sync::OnceLock;

/// Blocking client for the MailCatcher REST API
///
/// The underlying HTTP client is built on first use and reused for as long
/// as this value lives.
#[derive(Debug, Default)]
pub struct MailCatcher {
    config: MailCatcherConfig,
    client: OnceLock<Client>,
}

impl MailCatcher {
    /// Client for the default `http://127.0.0.1:1080` endpoint
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MailCatcherConfig) -> Self {
        Self {
            config,
            client: OnceLock::new(),
        }
    }

    pub fn from_url(base_url: &str) -> Result<Self> {
        Ok(Self::with_config(MailCatcherConfig::new(base_url)?))
    }

    pub fn config(&self) -> &MailCatcherConfig {
        &self.config
    }

    /// Whether the HTTP client has been created yet
    pub fn is_connected(&self) -> bool {
        self.client.get().is_some()
    }

    /// `GET /messages`, in service order
    pub fn list_messages(&self) -> Result<Vec<CapturedMessage>> {
        let body = self.send(Method::GET, MESSAGES_PATH)?.text()?;
        let messages: Vec<CapturedMessage> = serde_json::from_str(&body)?;

        tracing::debug!("Listed {} captured messages", messages.len());
        Ok(messages)
    }

    /// `GET /messages/{id}.json`
    pub fn fetch_email(&self, id: u64) -> Result<Email> {
        let body = self.send(Method::GET, &detail_path(id))?.text()?;

        tracing::debug!("Fetched message {} ({})", id, redact_body(&body));
        Ok(Email::new(id, body))
    }

    /// `DELETE /messages`
    pub fn clear_messages(&self) -> Result<()> {
        self.send(Method::DELETE, MESSAGES_PATH)?;
        tracing::info!("Cleared all captured messages");
        Ok(())
    }

    /// `DELETE /messages/{id}`
    pub fn remove_message(&self, id: u64) -> Result<()> {
        self.send(Method::DELETE, &message_path(id))?;
        tracing::info!("Deleted captured message {}", id);
        Ok(())
    }

    fn client(&self) -> Result<&Client> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }

        let mut builder = Client::builder();
        if let Some(timeout) = self.config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        tracing::debug!("Created HTTP client for {}", self.config.base_url);
        Ok(self.client.get_or_init(|| client))
    }

    fn send(&self, method: Method, path: &str) -> Result<Response> {
        let url = self.config.endpoint(path)?;
        let response = self
            .client()?
            .request(method.clone(), url.clone())
            .send()?;
        let status = response.status();

        tracing::debug!(%method, %url, %status, "MailCatcher request");

        if !status.is_success() {
            return Err(MailCatcherError::Status {
                status,
                url: url.to_string(),
            });
        }

        Ok(response)
    }
}

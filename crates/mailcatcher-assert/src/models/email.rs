/// Fetched email detail
use crate::constants::REPLY_TO_HEADER;
use crate::error::{MailCatcherError, Result};
use crate::models::EmailDetail;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

// Line break followed by whitespace continues the previous header line
static FOLDED_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r?\n[ \t]+").unwrap());

// Value of every `Reply-To:` header line in a raw message
static REPLY_TO_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mi)^Reply-To:[ \t]*([^\r\n]*)").unwrap());

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

/// Detail document of one captured message, as returned by the service
///
/// The raw JSON body is kept as-is and every accessor parses it again, so
/// an `Email` behaves like the HTTP response it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    id: u64,
    body: String,
}

impl Email {
    pub fn new(id: u64, body: impl Into<String>) -> Self {
        Self {
            id,
            body: body.into(),
        }
    }

    /// Id of the captured message this detail was fetched for
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Raw JSON body of the detail response
    pub fn raw(&self) -> &str {
        &self.body
    }

    pub fn detail(&self) -> Result<EmailDetail> {
        Ok(serde_json::from_str(&self.body)?)
    }

    pub fn subject(&self) -> Result<String> {
        Ok(self.detail()?.subject)
    }

    /// Full message source, headers included
    pub fn body(&self) -> Result<String> {
        Ok(self.detail()?.source)
    }

    pub fn recipients(&self) -> Result<Vec<String>> {
        Ok(self.detail()?.recipients)
    }

    pub fn sender(&self) -> Result<String> {
        Ok(self.detail()?.sender)
    }

    /// Addresses listed on `Reply-To:` lines of the message source
    pub fn reply_to(&self) -> Result<Vec<String>> {
        Ok(reply_to_addresses(&self.body()?))
    }
}

/// Joins folded header continuation lines onto the line they continue
pub fn unfold_headers(source: &str) -> Cow<'_, str> {
    FOLDED_LINE.replace_all(source, " ")
}

/// Extracts the addresses found on `Reply-To:` header lines
pub fn reply_to_addresses(source: &str) -> Vec<String> {
    let source = unfold_headers(source);
    REPLY_TO_LINE
        .captures_iter(&source)
        .filter_map(|caps| caps.get(1))
        .flat_map(|value| EMAIL_PATTERN.find_iter(value.as_str()))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Pattern matching a `Reply-To:` line that carries `address`
///
/// Match it against [`unfold_headers`] output so folded headers count.
pub fn reply_to_pattern(address: &str) -> Result<Regex> {
    let pattern = format!(
        r"(?mi)^{}:(?:[^\r\n]*?[ \t<,])?{}(?:[ \t\r>,]|$)",
        REPLY_TO_HEADER,
        regex::escape(address)
    );
    Regex::new(&pattern).map_err(|e| MailCatcherError::Config(e.to_string()))
}

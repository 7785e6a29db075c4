/// Records returned by the MailCatcher HTTP API
use serde::{Deserialize, Deserializer, Serialize};

/// Summary entry of `GET /messages`
///
/// Only `id` is relied upon; the remaining summary fields are kept for
/// diagnostics. Fields the service adds beyond these are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CapturedMessage {
    pub id: u64,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recipients: Vec<String>,
    #[serde(default)]
    pub subject: Option<String>,
    /// Size in bytes; MailCatcher reports it as a string
    #[serde(default, deserialize_with = "size_as_string")]
    pub size: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Detail document of `GET /messages/{id}.json`
///
/// MailCatcher sends `null` for headers the message lacks; those read as
/// empty so the remaining fields stay usable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailDetail {
    #[serde(default, deserialize_with = "null_as_default")]
    pub subject: String,
    /// Raw message including headers
    pub source: String,
    /// Each entry formatted as `<address>`
    #[serde(default, deserialize_with = "null_as_default")]
    pub recipients: Vec<String>,
    /// Formatted as `<address>`
    #[serde(default, deserialize_with = "null_as_default")]
    pub sender: String,
}

impl EmailDetail {
    /// Whether any recipient entry contains `needle`
    pub fn recipients_contain(&self, needle: &str) -> bool {
        self.recipients.iter().any(|r| r.contains(needle))
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn size_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Size {
        Text(String),
        Bytes(u64),
    }

    Ok(Option::<Size>::deserialize(deserializer)?.map(|size| match size {
        Size::Text(text) => text,
        Size::Bytes(bytes) => bytes.to_string(),
    }))
}

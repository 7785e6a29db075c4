/// Error types for the MailCatcher assertion helper
use crate::constants::NO_MESSAGES_RETURNED;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailCatcherError {
    #[error("{}", NO_MESSAGES_RETURNED)]
    EmptyInbox,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl MailCatcherError {
    /// Whether the error came from talking to the service rather than from
    /// the helper's own checks
    pub fn is_transport(&self) -> bool {
        match self {
            Self::Http(_) => true,
            Self::Status { .. } => true,
            Self::Json(_) => true,
            Self::Url(_) => true,
            Self::EmptyInbox => false,
            Self::Config(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, MailCatcherError>;

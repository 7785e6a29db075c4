/// Application constants
///
/// Fixed values of the MailCatcher HTTP API and of the assertion layer.
// ============================================================================
// Service Endpoint Constants
// ============================================================================
/// Base URL MailCatcher listens on by default
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:1080";

/// Environment variable consulted by `MailCatcherConfig::from_env`
pub const BASE_URL_ENV_VAR: &str = "MAILCATCHER_URL";

/// Collection path for captured messages (relative to the base URL)
pub const MESSAGES_PATH: &str = "messages";

/// Suffix of the per-message detail document
pub const DETAIL_SUFFIX: &str = ".json";

// ============================================================================
// Assertion Constants
// ============================================================================

/// Failure message raised when the inbox is empty
pub const NO_MESSAGES_RETURNED: &str = "No messages returned";

/// Header name scanned by the Reply-To assertions
pub const REPLY_TO_HEADER: &str = "Reply-To";

/// Builds the detail path for a captured message id
pub fn detail_path(id: u64) -> String {
    format!("{}/{}{}", MESSAGES_PATH, id, DETAIL_SUFFIX)
}

/// Builds the path used to delete a single captured message
pub fn message_path(id: u64) -> String {
    format!("{}/{}", MESSAGES_PATH, id)
}

/// Wraps an address in angle brackets the way MailCatcher stores it
pub fn bracketed(address: &str) -> String {
    format!("<{}>", address)
}

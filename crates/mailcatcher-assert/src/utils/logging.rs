/// Logging utilities: PII redaction for log lines and a test subscriber
///
/// Captured messages routinely carry real-looking addresses and subjects, so
/// log lines emitted by this crate go through these helpers first.
use regex::Regex;
use std::sync::LazyLock;
use tracing_subscriber::EnvFilter;

// Email redaction regex
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b").unwrap());

/// Redacts email addresses from text, preserving domain for debugging
///
/// # Examples
/// ```
/// use mailcatcher_assert::utils::logging::redact_email;
///
/// assert_eq!(redact_email("<user@example.com>"), "<***@example.com>");
/// ```
pub fn redact_email(text: &str) -> String {
    EMAIL_PATTERN
        .replace_all(text, |caps: &regex::Captures| {
            let email = &caps[0];
            if let Some(at_pos) = email.find('@') {
                format!("***{}", &email[at_pos..])
            } else {
                "***@***".to_string()
            }
        })
        .to_string()
}

/// Redacts subject line for logging (truncates and masks)
///
/// # Examples
/// ```
/// use mailcatcher_assert::utils::logging::redact_subject;
///
/// assert_eq!(redact_subject("Confidential Document"), "Con...[21 chars]");
/// assert_eq!(redact_subject("Hi"), "Hi");
/// ```
pub fn redact_subject(subject: &str) -> String {
    const MAX_VISIBLE_CHARS: usize = 3;
    const MIN_LENGTH_TO_REDACT: usize = 6;

    let length = subject.chars().count();
    if length < MIN_LENGTH_TO_REDACT {
        subject.to_string()
    } else {
        let visible: String = subject.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}...[{} chars]", visible, length)
    }
}

/// Redacts message body for logging (shows length only)
pub fn redact_body(body: &str) -> String {
    format!("[{} bytes]", body.len())
}

/// Installs a `RUST_LOG`-driven subscriber that writes through the test
/// harness. Safe to call from every test; only the first call wins.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

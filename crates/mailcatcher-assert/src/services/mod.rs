/// Service layer: configuration and the MailCatcher HTTP client
pub mod config;
pub mod mailcatcher;

// Re-export commonly used types
pub use config::MailCatcherConfig;
pub use mailcatcher::MailCatcher;

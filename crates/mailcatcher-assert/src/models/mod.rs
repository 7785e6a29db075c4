/// Data models for the MailCatcher API
pub mod email;
pub mod message;

// Re-export commonly used types
pub use email::*;
pub use message::*;

//! MailCatcher Assert - email assertions for test suites
//!
//! Queries a local MailCatcher service over HTTP and checks subjects, bodies,
//! senders, recipients and Reply-To headers of captured messages.

pub mod assertions;
pub mod constants;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use assertions::AssertEmail;
pub use error::{MailCatcherError, Result};
pub use models::{CapturedMessage, Email, EmailDetail};
pub use services::{MailCatcher, MailCatcherConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

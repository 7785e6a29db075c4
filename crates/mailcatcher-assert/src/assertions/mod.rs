//! Email assertions for test suites
//!
//! `AssertEmail` is meant to be implemented by test fixtures: provide access
//! to a [`MailCatcher`] and every fetch and assertion helper comes for free.
//!
//! ```no_run
//! use mailcatcher_assert::{AssertEmail, MailCatcher};
//!
//! struct SignupTest {
//!     mailcatcher: MailCatcher,
//! }
//!
//! impl AssertEmail for SignupTest {
//!     fn mailcatcher(&self) -> &MailCatcher {
//!         &self.mailcatcher
//!     }
//! }
//!
//! # fn main() -> mailcatcher_assert::Result<()> {
//! let test = SignupTest { mailcatcher: MailCatcher::new() };
//! let email = test.get_last_email()?;
//! test.assert_email_subject_contains("Welcome", &email)?;
//! test.assert_email_was_sent_to("new@user.com", &email)?;
//! test.delete_all_emails()?;
//! # Ok(())
//! # }
//! ```
//!
//! Failed predicates panic through [`primitives`]; `Err` is reserved for
//! transport problems and for an empty inbox.

pub mod primitives;

use crate::constants::{NO_MESSAGES_RETURNED, bracketed};
use crate::error::{MailCatcherError, Result};
use crate::models::{CapturedMessage, Email, reply_to_pattern, unfold_headers};
use crate::services::MailCatcher;
use crate::utils::logging::{redact_email, redact_subject};
use primitives::{assert_contains, assert_matches, assert_not_contains, assert_not_matches};

pub trait AssertEmail {
    /// The MailCatcher client owned by the implementor
    fn mailcatcher(&self) -> &MailCatcher;

    // ------------------------------------------------------------------
    // Fetching
    // ------------------------------------------------------------------

    /// All captured messages in the order the service lists them
    ///
    /// An empty inbox is an error: `No messages returned`.
    fn get_all_emails(&self) -> Result<Vec<CapturedMessage>> {
        let messages = self.mailcatcher().list_messages()?;

        if messages.is_empty() {
            tracing::warn!("{}", NO_MESSAGES_RETURNED);
            return Err(MailCatcherError::EmptyInbox);
        }

        Ok(messages)
    }

    fn delete_all_emails(&self) -> Result<()> {
        self.mailcatcher().clear_messages()
    }

    fn delete_email(&self, id: u64) -> Result<()> {
        self.mailcatcher().remove_message(id)
    }

    fn get_email(&self, id: u64) -> Result<Email> {
        self.mailcatcher().fetch_email(id)
    }

    /// Detail of the last listed message
    fn get_last_email(&self) -> Result<Email> {
        let messages = self.get_all_emails()?;
        let last = messages.last().ok_or(MailCatcherError::EmptyInbox)?;

        self.get_email(last.id)
    }

    /// Detail of the first listed message
    fn get_first_email(&self) -> Result<Email> {
        let messages = self.get_all_emails()?;
        let first = messages.first().ok_or(MailCatcherError::EmptyInbox)?;

        self.get_email(first.id)
    }

    /// Fetches every listed message in order and hands its detail to
    /// `callback`. The first failed fetch or callback error stops the
    /// iteration.
    fn each_email<F>(&self, mut callback: F) -> Result<()>
    where
        F: FnMut(&Email) -> Result<()>,
    {
        for message in self.get_all_emails()? {
            let email = self.get_email(message.id)?;
            callback(&email)?;
        }

        Ok(())
    }

    // ------------------------------------------------------------------
    // Subject
    // ------------------------------------------------------------------

    #[track_caller]
    fn assert_email_subject_contains(&self, subject: &str, email: &Email) -> Result<()> {
        let actual = email.subject()?;
        tracing::debug!(
            "Checking subject of message {} ({})",
            email.id(),
            redact_subject(&actual)
        );
        assert_contains(subject, &actual, "email subject");
        Ok(())
    }

    #[track_caller]
    fn assert_not_email_subject_contains(&self, subject: &str, email: &Email) -> Result<()> {
        assert_not_contains(subject, &email.subject()?, "email subject");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Body
    // ------------------------------------------------------------------

    #[track_caller]
    fn assert_email_body_contains(&self, body: &str, email: &Email) -> Result<()> {
        assert_contains(body, &email.body()?, "email body");
        Ok(())
    }

    #[track_caller]
    fn assert_not_email_body_contains(&self, body: &str, email: &Email) -> Result<()> {
        assert_not_contains(body, &email.body()?, "email body");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Recipients
    // ------------------------------------------------------------------

    #[track_caller]
    fn assert_email_was_sent_to(&self, recipient: &str, email: &Email) -> Result<()> {
        let recipients = email.recipients()?.join(", ");
        tracing::debug!(
            "Checking recipients of message {} ({})",
            email.id(),
            redact_email(&recipients)
        );
        assert_contains(&bracketed(recipient), &recipients, "email recipients");
        Ok(())
    }

    #[track_caller]
    fn assert_not_email_was_sent_to(&self, recipient: &str, email: &Email) -> Result<()> {
        let recipients = email.recipients()?.join(", ");
        assert_not_contains(&bracketed(recipient), &recipients, "email recipients");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Sender
    // ------------------------------------------------------------------

    #[track_caller]
    fn assert_email_was_sent_from(&self, sender: &str, email: &Email) -> Result<()> {
        assert_contains(&bracketed(sender), &email.sender()?, "email sender");
        Ok(())
    }

    /// Negation of `assert_email_was_sent_from`: passes only when the
    /// sender does not contain `<sender>`
    #[track_caller]
    fn assert_not_email_was_sent_from(&self, sender: &str, email: &Email) -> Result<()> {
        assert_not_contains(&bracketed(sender), &email.sender()?, "email sender");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Reply-To
    // ------------------------------------------------------------------

    /// Passes when a `Reply-To:` header of the source carries this exact
    /// `reply_to` address; folded headers are joined first
    #[track_caller]
    fn assert_email_reply_to_contains(&self, reply_to: &str, email: &Email) -> Result<()> {
        let pattern = reply_to_pattern(reply_to)?;
        assert_matches(&pattern, &unfold_headers(&email.body()?), "email source");
        Ok(())
    }

    /// Passes when no `Reply-To:` header of the source carries `reply_to`
    #[track_caller]
    fn assert_not_email_reply_to_contains(&self, reply_to: &str, email: &Email) -> Result<()> {
        let pattern = reply_to_pattern(reply_to)?;
        assert_not_matches(&pattern, &unfold_headers(&email.body()?), "email source");
        Ok(())
    }
}

impl AssertEmail for MailCatcher {
    fn mailcatcher(&self) -> &MailCatcher {
        self
    }
}

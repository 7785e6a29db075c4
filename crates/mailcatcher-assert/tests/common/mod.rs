//! Common test utilities and helpers for integration tests
#![allow(dead_code)]

use mailcatcher_assert::utils::logging::init_test_tracing;
use mailcatcher_assert::{AssertEmail, MailCatcher};
use serde_json::{Value, json};
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test fixture backed by a mock MailCatcher
///
/// The mock server lives on a runtime owned by the fixture while the blocking
/// client runs on the test thread. Fields drop in declaration order, so the
/// server goes away before its runtime.
pub struct MailCatcherFixture {
    pub mailcatcher: MailCatcher,
    pub server: MockServer,
    runtime: Runtime,
}

impl AssertEmail for MailCatcherFixture {
    fn mailcatcher(&self) -> &MailCatcher {
        &self.mailcatcher
    }
}

impl MailCatcherFixture {
    pub fn start() -> Self {
        init_test_tracing();

        let runtime = Runtime::new().expect("Failed to build tokio runtime");
        let server = runtime.block_on(MockServer::start());
        let mailcatcher =
            MailCatcher::from_url(&server.uri()).expect("Mock server URI should be valid");

        Self {
            mailcatcher,
            server,
            runtime,
        }
    }

    pub fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    /// Stubs `GET /messages` with summaries for `ids`, in that order
    pub fn stub_messages(&self, ids: &[u64]) {
        let list: Vec<Value> = ids.iter().map(|id| summary(*id)).collect();
        self.mount(
            Mock::given(method("GET"))
                .and(path("/messages"))
                .respond_with(ResponseTemplate::new(200).set_body_json(list)),
        );
    }

    /// Stubs `GET /messages/{id}.json`
    pub fn stub_detail(&self, id: u64, detail: Value) {
        self.mount(
            Mock::given(method("GET"))
                .and(path(format!("/messages/{}.json", id)))
                .respond_with(ResponseTemplate::new(200).set_body_json(detail)),
        );
    }

    pub fn stub_delete_all(&self) {
        self.mount(
            Mock::given(method("DELETE"))
                .and(path("/messages"))
                .respond_with(ResponseTemplate::new(204)),
        );
    }

    /// `METHOD /path` of every request the mock server received, in order
    pub fn received(&self) -> Vec<String> {
        self.runtime
            .block_on(self.server.received_requests())
            .unwrap_or_default()
            .iter()
            .map(|request| format!("{} {}", request.method.as_str(), request.url.path()))
            .collect()
    }

    pub fn verify(&self) {
        self.runtime.block_on(self.server.verify());
    }
}

/// Summary entry as listed by `GET /messages`
pub fn summary(id: u64) -> Value {
    json!({
        "id": id,
        "sender": "<noreply@acme.com>",
        "recipients": ["<new@user.com>"],
        "subject": format!("Message {}", id),
        "size": "420",
        "created_at": "2025-11-03T10:00:00+00:00",
    })
}

/// Detail document as returned by `GET /messages/{id}.json`
pub fn detail(subject: &str, sender: &str, recipients: &[&str], source: &str) -> Value {
    json!({
        "subject": subject,
        "source": source,
        "recipients": recipients.iter().map(|r| format!("<{}>", r)).collect::<Vec<_>>(),
        "sender": format!("<{}>", sender),
        "type": "text/plain",
        "formats": ["source", "plain"],
        "attachments": [],
    })
}

/// Raw welcome message with a Reply-To header
pub fn welcome_source() -> String {
    [
        "From: Acme <noreply@acme.com>",
        "Reply-To: Support <support@acme.com>",
        "To: <new@user.com>",
        "Subject: Welcome to Acme",
        "",
        "Hi there, please confirm your account.",
        "",
    ]
    .join("\r\n")
}

pub fn welcome_detail() -> Value {
    detail(
        "Welcome to Acme",
        "noreply@acme.com",
        &["new@user.com", "audit@acme.com"],
        &welcome_source(),
    )
}

/// Detail shaped like MailCatcher's for a message without a Subject header
/// and with a folded Reply-To header
pub fn subjectless_detail() -> Value {
    json!({
        "subject": null,
        "source": ([
            "From: Acme <noreply@acme.com>",
            "Reply-To: Alice <alice@x.com>,",
            " Support <support@acme.com>",
            "To: <new@user.com>",
            "",
            "Your export is ready.",
            "",
        ])
        .join("\r\n"),
        "recipients": ["<new@user.com>"],
        "sender": "<noreply@acme.com>",
        "type": "text/plain",
        "formats": ["source", "plain"],
        "attachments": [],
    })
}

//! SMTP email delivery for the sqlwarden API.
//!
//! [`Mailer`] wraps an async lettre SMTP transport configured once at
//! startup. [`Mailer::mock`] builds a transport-free instance that records
//! formatted messages in memory, used by tests and local development.
//! Delivery is only ever invoked from background tasks, so a failure here
//! never blocks or fails a request.

pub mod error;
pub mod prelude;

use std::sync::{Arc, Mutex};

use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

use crate::prelude::*;

enum Transport {
    Smtp(AsyncSmtpTransport<Tokio1Executor>),
    Mock(Mutex<Vec<String>>),
}

/// Email sender with a fixed `From` address.
#[derive(Clone)]
pub struct Mailer {
    transport: Arc<Transport>,
    from: Mailbox,
}

impl Mailer {
    /// Creates a mailer that delivers through the given SMTP relay.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use sw_mailer::Mailer;
    ///
    /// let mailer = Mailer::new(
    ///     "smtp.example.com",
    ///     587,
    ///     "user@example.com",
    ///     "password",
    ///     "Example Name <no_reply@example.org>",
    /// )
    /// .unwrap();
    /// ```
    pub fn new(host: &str, port: u16, username: &str, password: &str, from: &str) -> Result<Self> {
        let from: Mailbox = from.parse()?;
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .credentials(Credentials::new(
                String::from(username),
                String::from(password),
            ))
            .build();

        Ok(Self {
            transport: Arc::new(Transport::Smtp(transport)),
            from,
        })
    }

    /// Creates a mailer that records messages in memory instead of sending
    /// them.
    pub fn mock(from: &str) -> Result<Self> {
        Ok(Self {
            transport: Arc::new(Transport::Mock(Mutex::new(Vec::new()))),
            from: from.parse()?,
        })
    }

    /// Builds and sends a plain-text message.
    pub async fn send(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(to.parse()?)
            .subject(subject)
            .body(String::from(body))?;

        match self.transport.as_ref() {
            Transport::Smtp(transport) => {
                transport.send(message).await?;
            }
            Transport::Mock(sent) => {
                debug!("Mock mailer capturing message to {to}");
                let formatted = String::from_utf8_lossy(&message.formatted()).into_owned();
                if let Ok(mut sent) = sent.lock() {
                    sent.push(formatted);
                }
            }
        }
        Ok(())
    }

    /// Messages captured by a mock mailer. Always empty for SMTP-backed
    /// mailers.
    pub fn sent_messages(&self) -> Vec<String> {
        match self.transport.as_ref() {
            Transport::Smtp(_) => Vec::new(),
            Transport::Mock(sent) => sent.lock().map(|sent| sent.clone()).unwrap_or_default(),
        }
    }
}

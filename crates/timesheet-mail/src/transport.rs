//! Outbound delivery.

use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use timesheet_config::MailConfig;

use crate::error::MailError;

/// Delivery seam; the SMTP relay in production, in-memory fakes in tests.
#[allow(async_fn_in_trait)]
pub trait Mailer {
    /// Open and authenticate a connection without sending anything.
    async fn test_connection(&self) -> Result<bool, MailError>;

    async fn send(&self, message: Message) -> Result<(), MailError>;
}

/// Authenticated SMTP submission over implicit TLS.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    host: String,
    port: u16,
}

impl SmtpMailer {
    /// Configure the relay; no connection is made here.
    ///
    /// # Errors
    ///
    /// Fails when TLS parameters for `config.host` cannot be built.
    pub fn new(config: &MailConfig, username: &str, password: &str) -> Result<Self, MailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
            .port(config.port)
            .credentials(Credentials::new(username.to_string(), password.to_string()))
            .build();

        Ok(Self {
            transport,
            host: config.host.clone(),
            port: config.port,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub const fn port(&self) -> u16 {
        self.port
    }
}

impl Mailer for SmtpMailer {
    async fn test_connection(&self) -> Result<bool, MailError> {
        Ok(self.transport.test_connection().await?)
    }

    async fn send(&self, message: Message) -> Result<(), MailError> {
        let response = self.transport.send(message).await?;
        tracing::debug!(
            host = %self.host,
            code = %response.code(),
            "mail server accepted message"
        );
        Ok(())
    }
}

impl<M: Mailer> Mailer for &M {
    async fn test_connection(&self) -> Result<bool, MailError> {
        (**self).test_connection().await
    }

    async fn send(&self, message: Message) -> Result<(), MailError> {
        (**self).send(message).await
    }
}

//! SMTP email provider using lettre.
//!
//! Works against any SMTP relay; in local development this is typically
//! Mailpit on port 1025 with no credentials and no TLS.

use super::{EmailContent, EmailProvider, SentEmail};
use crate::error::{NotificationError, NotificationResult};
use async_trait::async_trait;
use lettre::{
    message::Mailbox,
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::{debug, error};

/// SMTP transport configuration. Pure data; the application builds this
/// from its environment-derived config and passes it in.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub from_email: String,
    pub from_name: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub use_tls: bool,
}

impl SmtpConfig {
    pub fn new(host: String, port: u16, from_email: String, from_name: String) -> Self {
        Self {
            host,
            port,
            from_email,
            from_name,
            username: None,
            password: None,
            use_tls: false,
        }
    }

    pub fn with_credentials(mut self, username: String, password: String) -> Self {
        self.username = Some(username);
        self.password = Some(password);
        self
    }

    pub fn with_tls(mut self, use_tls: bool) -> Self {
        self.use_tls = use_tls;
        self
    }
}

/// SMTP email provider.
pub struct SmtpProvider {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    config: SmtpConfig,
}

impl SmtpProvider {
    pub fn new(config: SmtpConfig) -> NotificationResult<Self> {
        let transport = Self::build_transport(&config)?;
        Ok(Self { transport, config })
    }

    fn build_transport(
        config: &SmtpConfig,
    ) -> NotificationResult<AsyncSmtpTransport<Tokio1Executor>> {
        let mut builder = if config.use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
                .map_err(|e| NotificationError::Transport(e.to_string()))?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
        };

        builder = builder.port(config.port);

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(builder.build())
    }

    fn from_mailbox(&self) -> NotificationResult<Mailbox> {
        format!("{} <{}>", self.config.from_name, self.config.from_email)
            .parse()
            .map_err(|e| NotificationError::InvalidAddress(format!("{e}")))
    }
}

#[async_trait]
impl EmailProvider for SmtpProvider {
    async fn send(&self, email: &EmailContent) -> NotificationResult<SentEmail> {
        let to: Mailbox = if email.to_name.is_empty() {
            email
                .to_email
                .parse()
                .map_err(|e| NotificationError::InvalidAddress(format!("{e}")))?
        } else {
            format!("{} <{}>", email.to_name, email.to_email)
                .parse()
                .map_err(|e| NotificationError::InvalidAddress(format!("{e}")))?
        };

        let message = Message::builder()
            .from(self.from_mailbox()?)
            .to(to)
            .subject(&email.subject)
            .body(email.text_body.clone())
            .map_err(|e| NotificationError::MessageBuild(e.to_string()))?;

        match self.transport.send(message).await {
            Ok(response) => {
                debug!(to = %email.to_email, "SMTP message accepted");
                Ok(SentEmail {
                    message_id: response.message().next().map(|s| s.to_string()),
                    accepted: response.is_positive(),
                })
            }
            Err(e) => {
                error!(to = %email.to_email, "SMTP send failed: {}", e);
                Err(NotificationError::Transport(e.to_string()))
            }
        }
    }

    fn name(&self) -> &'static str {
        "smtp"
    }
}

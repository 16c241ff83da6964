//! Outbound delivery: SMTP via lettre behind a transport trait.

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::ExposeSecret;

use crate::config::Config;
use crate::error::{ConfigError, DeliveryError};
use crate::message::{MessageBody, MessageEnvelope};

/// Delivery channel abstraction.
///
/// The production implementation talks SMTP; tests substitute stubs.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Attempt delivery of one envelope. Exactly one attempt, no retry.
    async fn send(&self, envelope: &MessageEnvelope) -> Result<(), DeliveryError>;
}

/// SMTP mailer over a shared `lettre` async transport.
///
/// Built once at startup and reused by every in-flight request; lettre
/// pools connections internally, so concurrent sends are safe.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Build the relay transport from configuration.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| ConfigError::InvalidValue {
                key: "EMAIL_SMTP_HOST".into(),
                message: e.to_string(),
            })?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.expose_secret().to_string(),
            ))
            .timeout(Some(config.send_timeout))
            .build();

        Ok(Self { transport })
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send(&self, envelope: &MessageEnvelope) -> Result<(), DeliveryError> {
        let message = build_message(envelope)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        tracing::info!("Email sent to {}", envelope.to);
        Ok(())
    }
}

/// Translate an envelope into a lettre `Message`.
fn build_message(envelope: &MessageEnvelope) -> Result<Message, DeliveryError> {
    let from: Mailbox = envelope
        .from
        .parse()
        .map_err(|e: lettre::address::AddressError| DeliveryError::InvalidAddress {
            field: "from",
            reason: e.to_string(),
        })?;

    let to: Mailbox = envelope
        .to
        .parse()
        .map_err(|e: lettre::address::AddressError| DeliveryError::InvalidAddress {
            field: "to",
            reason: e.to_string(),
        })?;

    let content_type = match &envelope.body {
        MessageBody::Text(_) => ContentType::TEXT_PLAIN,
        MessageBody::Html(_) => ContentType::TEXT_HTML,
    };

    Message::builder()
        .from(from)
        .to(to)
        .subject(envelope.subject.clone())
        .header(content_type)
        .body(envelope.body.content().to_string())
        .map_err(|e| DeliveryError::BuildMessage(e.to_string()))
}

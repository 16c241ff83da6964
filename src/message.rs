//! Message envelope types shared by the renderer and the mailer.

/// A fully-rendered message, ready for delivery.
///
/// Built by the notification renderer (or directly by the raw
/// pass-through handler) and consumed exactly once by the mailer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEnvelope {
    /// Sender mailbox, e.g. `relay@example.com` or `"RentR" <relay@example.com>`.
    pub from: String,
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub body: MessageBody,
}

/// Body content with its MIME flavor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBody {
    Text(String),
    Html(String),
}

impl MessageBody {
    /// The body text regardless of flavor.
    pub fn content(&self) -> &str {
        match self {
            MessageBody::Text(s) | MessageBody::Html(s) => s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_content_ignores_flavor() {
        assert_eq!(MessageBody::Text("hi".into()).content(), "hi");
        assert_eq!(MessageBody::Html("<p>hi</p>".into()).content(), "<p>hi</p>");
    }
}

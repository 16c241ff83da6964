//! The `render -> deliver` pipeline shared by both entry surfaces.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::mailer::MailTransport;
use crate::notify::{Notification, render::render};

/// Uniform outcome returned to typed-dispatch callers.
///
/// `success` is true exactly when the delivery channel accepted the
/// message. Classification and delivery failures both land here; this
/// type never crosses the boundary as an error.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DispatchResult {
    pub success: bool,
    pub message: String,
}

impl DispatchResult {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Typed dispatch: classify, render, deliver.
pub struct Dispatcher {
    from_address: String,
    transport: Arc<dyn MailTransport>,
}

impl Dispatcher {
    pub fn new(from_address: String, transport: Arc<dyn MailTransport>) -> Self {
        Self {
            from_address,
            transport,
        }
    }

    /// Handle one dispatch request.
    ///
    /// Unrecognized kinds fail without touching the delivery channel;
    /// delivery errors are captured into the result, never propagated.
    pub async fn dispatch(&self, request: &Value) -> DispatchResult {
        let Some(notification) = Notification::classify(request) else {
            return DispatchResult::failed("Unknown email type");
        };

        let envelope = render(&notification, &self.from_address);

        match self.transport.send(&envelope).await {
            Ok(()) => DispatchResult::ok("Email sent successfully"),
            Err(e) => {
                tracing::error!("Error sending email: {e}");
                DispatchResult::failed(format!("Error sending email: {e}"))
            }
        }
    }
}

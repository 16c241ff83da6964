//! HTTP surfaces: liveness, raw pass-through send, typed dispatch.
//!
//! Both POST surfaces are thin adapters over the same mailer; the typed
//! surface additionally runs the classifier and renderer.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::cors::CorsLayer;

use crate::dispatch::Dispatcher;
use crate::mailer::MailTransport;
use crate::message::{MessageBody, MessageEnvelope};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
    pub mailer: Arc<dyn MailTransport>,
    /// Plain outbound address; raw sends wrap it in the product display name.
    pub from_address: String,
}

/// Build the relay router.
pub fn mail_routes(
    dispatcher: Arc<Dispatcher>,
    mailer: Arc<dyn MailTransport>,
    from_address: String,
) -> Router {
    let state = AppState {
        dispatcher,
        mailer,
        from_address,
    };

    Router::new()
        .route("/", get(liveness))
        .route("/send-mail", post(send_mail))
        .route("/api/send-email", post(send_email))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ── Liveness ────────────────────────────────────────────────────────

async fn liveness() -> &'static str {
    "RentR Mail Backend is running"
}

// ── Raw pass-through ────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct SendMailRequest {
    to: String,
    subject: String,
    text: String,
}

/// POST /send-mail
///
/// Caller supplies the full recipient/subject/body; no rendering step.
/// Delivery failures surface as 500 with the error's own description.
async fn send_mail(
    State(state): State<AppState>,
    Json(body): Json<SendMailRequest>,
) -> impl IntoResponse {
    let envelope = MessageEnvelope {
        from: format!("\"RentR\" <{}>", state.from_address),
        to: body.to,
        subject: body.subject,
        body: MessageBody::Text(body.text),
    };

    match state.mailer.send(&envelope).await {
        Ok(()) => (StatusCode::OK, Json(serde_json::json!({"success": true}))),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"error": e.to_string()})),
        ),
    }
}

// ── Typed dispatch ──────────────────────────────────────────────────

/// POST /api/send-email
///
/// Always responds 200; every outcome, including classification and
/// delivery failures, is carried in the `DispatchResult` body.
async fn send_email(
    State(state): State<AppState>,
    Json(request): Json<serde_json::Value>,
) -> impl IntoResponse {
    Json(state.dispatcher.dispatch(&request).await)
}

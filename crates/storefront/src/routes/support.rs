//! Support section route handlers: agent chat, diagnostics, technician booking.

use axum::{
    Json,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use black_cable_core::support::{ChatMessage, SUPPORT_PHONE};
use black_cable_core::{
    AgentKind, BookingConfirmation, BookingForm, BookingReference, DiagnosticReport,
};

use crate::error::{Result, add_breadcrumb};
use crate::extract::JsonBody;

/// An open chat window.
#[derive(Debug, Serialize)]
pub struct ChatWindow {
    pub title: String,
    pub messages: Vec<ChatMessage>,
}

/// Chat message request body.
#[derive(Debug, Deserialize)]
pub struct ChatSend {
    pub message: String,
}

/// Open a chat with a support desk.
///
/// GET /support/chat/{kind}
#[instrument]
pub async fn open_chat(Path(kind): Path<String>) -> Json<ChatWindow> {
    let kind = AgentKind::parse(&kind);
    Json(ChatWindow {
        title: kind.title(),
        messages: vec![ChatMessage::agent(kind.greeting())],
    })
}

/// Send a chat message and get the agent's reply.
///
/// POST /support/chat/{kind}
///
/// Blank messages are ignored with 204.
#[instrument(skip(body))]
pub async fn send_chat(
    Path(kind): Path<String>,
    JsonBody(body): JsonBody<ChatSend>,
) -> Result<Response> {
    let Some(message) = ChatMessage::visitor(&body.message) else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    let kind = AgentKind::parse(&kind);
    tracing::debug!(desk = %kind, "Chat message received");

    Ok(Json(ChatWindow {
        title: kind.title(),
        messages: vec![message, ChatMessage::agent(kind.auto_reply())],
    })
    .into_response())
}

/// Run connection diagnostics.
///
/// GET /support/diagnostics
#[instrument]
pub async fn diagnostics() -> Json<DiagnosticReport> {
    Json(DiagnosticReport::run())
}

/// Booking response.
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub success: bool,
    pub confirmation: BookingConfirmation,
    pub support_phone: &'static str,
}

/// Book a technician visit.
///
/// POST /support/bookings
#[instrument(skip(form))]
pub async fn book_technician(
    JsonBody(form): JsonBody<BookingForm>,
) -> Result<(StatusCode, Json<BookingResponse>)> {
    let today = chrono::Local::now().date_naive();
    let request = form.validate(today)?;

    let reference = BookingReference::generate(&mut rand::rng());
    let confirmation = BookingConfirmation::new(&request, reference);

    let reference = reference.to_string();
    add_breadcrumb(
        "support",
        "Technician booked",
        Some(&[("reference", reference.as_str())]),
    );
    tracing::info!(
        reference = %reference,
        date = %request.preferred_date,
        slot = request.time_slot.label(),
        "Technician visit booked"
    );

    Ok((
        StatusCode::CREATED,
        Json(BookingResponse {
            success: true,
            confirmation,
            support_phone: SUPPORT_PHONE,
        }),
    ))
}

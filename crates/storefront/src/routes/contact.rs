//! Contact form route handlers.
//!
//! Submissions are validated and logged; nothing is sent anywhere yet. A
//! successful submission consumes any bundle handed over at checkout.

use axum::{Json, http::StatusCode};
use serde::Serialize;
use tower_sessions::Session;
use tracing::instrument;

use black_cable_core::{BundleSelection, ContactForm, ContactSummary};

use crate::error::{Result, add_breadcrumb};
use crate::extract::JsonBody;
use crate::models::session::{clear_handoff, load_handoff};

/// Shown after a successful submission.
pub const CONTACT_SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";

/// Bundle hand-off as seen by the contact page.
#[derive(Debug, Serialize)]
pub struct ContactBundleResponse {
    /// Summary and pre-filled message, or null without a prior selection.
    pub bundle: Option<ContactSummary>,
}

/// Response for form submission.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: &'static str,
}

/// Read the bundle handed over at checkout.
///
/// GET /contact/bundle
#[instrument(skip(session))]
pub async fn bundle(session: Session) -> Json<ContactBundleResponse> {
    let bundle = load_handoff(&session)
        .await
        .and_then(|selection| ContactSummary::from_selection(&selection));
    Json(ContactBundleResponse { bundle })
}

/// Submit the contact form.
///
/// POST /contact
#[instrument(skip(session, form))]
pub async fn submit(
    session: Session,
    JsonBody(form): JsonBody<ContactForm>,
) -> Result<(StatusCode, Json<ContactResponse>)> {
    let request = form.validate()?;
    let bundle = load_handoff(&session).await;

    add_breadcrumb("contact", "Contact form submitted", None);
    tracing::info!(
        email_domain = request.email.domain(),
        has_phone = request.phone.is_some(),
        bundle_services = bundle.as_ref().map_or(0, BundleSelection::len),
        "Contact form received"
    );

    if bundle.is_some() {
        clear_handoff(&session).await?;
    }

    Ok((
        StatusCode::ACCEPTED,
        Json(ContactResponse {
            success: true,
            message: CONTACT_SUCCESS_MESSAGE,
        }),
    ))
}

//! Bundle configurator route handlers.
//!
//! The visitor's selection lives in their session. Every handler loads it,
//! applies one operation, stores it back, and answers with the fresh quote.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use black_cable_core::{BundleSelection, ContactSummary, HandoffPayload, Quote, Service};

use crate::error::{AppError, Result, add_breadcrumb};
use crate::extract::JsonBody;
use crate::models::session::{load_selection, save_selection, store_handoff};
use crate::state::AppState;

/// Where the site sends the visitor after checkout.
pub const CHECKOUT_REDIRECT: &str = "/contact?bundle=true";

/// Current selection with its price breakdown.
#[derive(Debug, Serialize)]
pub struct BundleView {
    pub services: Vec<Service>,
    pub quote: Quote,
    /// Discount badge, e.g. `Double Play`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<&'static str>,
    pub subtotal: String,
    pub discount: String,
    pub total: String,
    /// Whether the checkout button should show.
    pub can_checkout: bool,
}

impl From<&BundleSelection> for BundleView {
    fn from(selection: &BundleSelection) -> Self {
        let quote = selection.quote();
        Self {
            services: selection.services().to_vec(),
            badge: quote.tier.label(),
            subtotal: quote.display_subtotal(),
            discount: quote.display_discount(),
            total: quote.display_total(),
            can_checkout: !selection.is_empty(),
            quote,
        }
    }
}

/// Bundle view plus a status line for the visitor.
#[derive(Debug, Serialize)]
pub struct BundleUpdate {
    pub message: String,
    pub bundle: BundleView,
}

/// Add-service request body.
#[derive(Debug, Deserialize)]
pub struct AddServiceRequest {
    pub id: String,
}

/// Checkout response.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub success: bool,
    pub redirect: &'static str,
    pub summary: ContactSummary,
}

/// List the services on offer.
///
/// GET /bundle/services
#[instrument(skip(state))]
pub async fn catalog(State(state): State<AppState>) -> Json<Vec<Service>> {
    Json(state.catalog().iter().cloned().collect())
}

/// Show the current selection.
///
/// GET /bundle
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Json<BundleView>> {
    let selection = load_selection(&session).await?;
    Ok(Json(BundleView::from(&selection)))
}

/// Add a service to the selection.
///
/// POST /bundle/services
///
/// Unknown IDs are 404; a service already in the bundle is 409 and leaves
/// the selection untouched.
#[instrument(skip(state, session), fields(service_id = %body.id))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    JsonBody(body): JsonBody<AddServiceRequest>,
) -> Result<(StatusCode, Json<BundleUpdate>)> {
    let service = state
        .catalog()
        .get(body.id.trim())
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Unknown service: {}", body.id.trim())))?;

    let mut selection = load_selection(&session).await?;
    let name = service.name.clone();
    if !selection.add(service) {
        return Err(AppError::Conflict(
            "Service already added to your bundle!".to_string(),
        ));
    }
    save_selection(&session, &selection).await?;

    add_breadcrumb("bundle", "Added service", Some(&[("service_id", body.id.trim())]));
    tracing::debug!(size = selection.len(), "Service added to bundle");

    Ok((
        StatusCode::CREATED,
        Json(BundleUpdate {
            message: format!("{name} added to your bundle!"),
            bundle: BundleView::from(&selection),
        }),
    ))
}

/// Remove a service from the selection.
///
/// DELETE /bundle/services/{id}
#[instrument(skip(session))]
pub async fn remove(session: Session, Path(id): Path<String>) -> Result<Json<BundleUpdate>> {
    let mut selection = load_selection(&session).await?;
    let name = selection.get(&id).map(|service| service.name.clone());
    if !selection.remove(&id) {
        return Err(AppError::NotFound(format!("Service not in bundle: {id}")));
    }
    save_selection(&session, &selection).await?;

    add_breadcrumb("bundle", "Removed service", Some(&[("service_id", id.as_str())]));

    Ok(Json(BundleUpdate {
        message: format!("{} removed from your bundle", name.unwrap_or(id)),
        bundle: BundleView::from(&selection),
    }))
}

/// Empty the selection.
///
/// DELETE /bundle
#[instrument(skip(session))]
pub async fn clear(session: Session) -> Result<Json<BundleView>> {
    let mut selection = load_selection(&session).await?;
    selection.clear();
    save_selection(&session, &selection).await?;
    Ok(Json(BundleView::from(&selection)))
}

/// Hand the selection over to the contact flow.
///
/// POST /bundle/checkout
///
/// Writes the hand-off payload and returns where to send the visitor. The
/// selection itself stays in the session.
#[instrument(skip(session))]
pub async fn checkout(session: Session) -> Result<Json<CheckoutResponse>> {
    let selection = load_selection(&session).await?;
    let Some(summary) = ContactSummary::from_selection(&selection) else {
        return Err(AppError::BadRequest(
            "Add at least one service before checking out".to_string(),
        ));
    };

    let payload = HandoffPayload::encode(&selection)
        .map_err(|e| AppError::Internal(format!("Failed to encode bundle: {e}")))?;
    store_handoff(&session, payload).await?;

    add_breadcrumb("bundle", "Checked out", None);
    tracing::info!(
        services = selection.len(),
        total = %summary.total,
        "Bundle handed off to contact flow"
    );

    Ok(Json(CheckoutResponse {
        success: true,
        redirect: CHECKOUT_REDIRECT,
        summary,
    }))
}

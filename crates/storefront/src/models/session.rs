//! Session-stored visitor state.
//!
//! Each visitor session holds its own [`BundleSelection`]; there is no
//! selection shared between visitors. Concurrent requests on one session are
//! last-writer-wins.

use tower_sessions::Session;

use black_cable_core::{BundleSelection, HandoffPayload};

/// Session keys for visitor data.
pub mod keys {
    /// Key for the configurator's current selection.
    pub const BUNDLE_SELECTION: &str = "bundle_selection";

    /// Key for the checkout hand-off payload read by the contact flow.
    pub const SELECTED_BUNDLE: &str = black_cable_core::HANDOFF_SLOT;
}

/// Load the visitor's selection, empty if none is stored yet.
///
/// # Errors
///
/// Returns an error if the session store fails or the stored value is corrupt.
pub async fn load_selection(
    session: &Session,
) -> Result<BundleSelection, tower_sessions::session::Error> {
    Ok(session
        .get::<BundleSelection>(keys::BUNDLE_SELECTION)
        .await?
        .unwrap_or_default())
}

/// Store the visitor's selection.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn save_selection(
    session: &Session,
    selection: &BundleSelection,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::BUNDLE_SELECTION, selection).await
}

/// Write the checkout hand-off payload.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn store_handoff(
    session: &Session,
    payload: String,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::SELECTED_BUNDLE, payload).await
}

/// Drop the hand-off payload and the selection it came from.
///
/// Called once the contact flow has consumed the bundle, so a second
/// submission does not carry it again.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn clear_handoff(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.remove_value(keys::SELECTED_BUNDLE).await?;
    session.remove_value(keys::BUNDLE_SELECTION).await?;
    Ok(())
}

/// Read the checkout hand-off payload.
///
/// Missing, unreadable, or malformed payloads all mean "no prior selection".
pub async fn load_handoff(session: &Session) -> Option<BundleSelection> {
    let raw = session
        .get::<String>(keys::SELECTED_BUNDLE)
        .await
        .ok()
        .flatten()?;
    HandoffPayload::decode(&raw)
}

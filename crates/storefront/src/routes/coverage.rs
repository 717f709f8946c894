//! Coverage check route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use black_cable_core::coverage::{TABLE_SIGNAL_STRENGTH, strength_percent};
use black_cable_core::{CoverageMap, CoverageResult, ValidationErrors, ZipCode};

use crate::error::{AppError, Result};
use crate::extract::QueryParams;
use crate::state::AppState;

/// ZIP lookup response.
#[derive(Debug, Serialize)]
pub struct ZipCoverageResponse {
    pub zip: String,
    #[serde(flatten)]
    pub result: CoverageResult,
    /// Signal strength percentage, present when covered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal_strength: Option<u8>,
}

/// Map click coordinates, in map pixels.
#[derive(Debug, Deserialize)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
}

/// A map zone that was hit.
#[derive(Debug, Serialize)]
pub struct ZoneHit {
    pub zip: String,
    pub signal_strength: u8,
    /// Coverage for the zone's ZIP, when it is a valid ZIP code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<CoverageResult>,
}

/// Map click response; `zone` is null outside every zone.
#[derive(Debug, Serialize)]
pub struct MapHitResponse {
    pub zone: Option<ZoneHit>,
}

/// Look up availability for a ZIP code.
///
/// GET /coverage/{zip}
#[instrument(skip(state))]
pub async fn zip_lookup(
    State(state): State<AppState>,
    Path(zip): Path<String>,
) -> Result<Json<ZipCoverageResponse>> {
    let zip = ZipCode::parse(&zip).map_err(|e| {
        let mut errors = ValidationErrors::default();
        errors.push("zip", e.to_string());
        AppError::Validation(errors)
    })?;

    let result = state.coverage().lookup_coverage(&zip);
    tracing::debug!(zip = %zip, available = result.available, "Coverage lookup");

    Ok(Json(ZipCoverageResponse {
        zip: zip.to_string(),
        signal_strength: result
            .available
            .then(|| strength_percent(TABLE_SIGNAL_STRENGTH)),
        result,
    }))
}

/// All zones on the coverage map.
///
/// GET /coverage/zones
pub async fn zones(State(state): State<AppState>) -> Json<CoverageMap> {
    Json(state.coverage_map().clone())
}

/// Hit-test a click on the coverage map.
///
/// GET /coverage/map?x=&y=
#[instrument(skip(state))]
pub async fn map_hit(
    State(state): State<AppState>,
    QueryParams(point): QueryParams<MapPoint>,
) -> Result<Json<MapHitResponse>> {
    let zone = state
        .coverage_map()
        .find_zone(point.x, point.y)
        .map(|zone| ZoneHit {
            zip: zone.zip.clone(),
            signal_strength: zone.strength_percent(),
            coverage: ZipCode::parse(&zone.zip)
                .ok()
                .map(|zip| state.coverage().lookup_coverage(&zip)),
        });

    Ok(Json(MapHitResponse { zone }))
}

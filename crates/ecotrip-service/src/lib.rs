//! HTTP service exposing the ecotrip emission estimator.
//!
//! Thin-handler pattern: all business logic lives in `ecotrip-lib`; this
//! crate only parses requests, validates parameters, calls the library, and
//! formats responses.
//!
//! # Endpoints
//!
//! - `GET /health/live` - liveness probe
//! - `GET /health/ready` - readiness probe
//! - `GET /api/v1/locations` - collated list of known locations
//! - `POST /api/v1/estimate` - emission, savings, ranking, and offset price
//!   for one trip
//! - `POST /api/v1/credits` - carbon credits and price band for an emission

#![deny(warnings)]

mod problem;
mod state;

pub use problem::{
    from_lib_error, ProblemDetails, PROBLEM_INTERNAL_ERROR, PROBLEM_INVALID_REQUEST,
    PROBLEM_ROUTE_NOT_FOUND, PROBLEM_UNKNOWN_LOCATION,
};
pub use state::AppState;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use ecotrip_lib::{
    calculate_all_modes, calculate_carbon_credits, calculate_emission, calculate_saving,
    estimate_credit_price, CreditEstimate, ModeEmission, Savings, BASELINE_MODE,
};

/// Build the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .route("/api/v1/locations", get(locations_handler))
        .route("/api/v1/estimate", post(estimate_handler))
        .route("/api/v1/credits", post(credits_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthStatus {
    status: &'static str,
}

async fn health_live() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}

async fn health_ready(State(_state): State<AppState>) -> Json<HealthStatus> {
    // State is loaded before the router starts serving, so readiness follows
    // liveness.
    Json(HealthStatus { status: "ok" })
}

#[derive(Debug, Serialize)]
struct LocationsResponse {
    locations: Vec<String>,
}

async fn locations_handler(State(state): State<AppState>) -> Json<LocationsResponse> {
    Json(LocationsResponse {
        locations: state.catalog().all_locations(),
    })
}

/// Trip estimate request: either `from`/`to` for a catalog lookup or a
/// manual `distanceKm`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRequest {
    pub mode: String,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub distance_km: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EstimateResponse {
    mode: String,
    distance_km: f64,
    emission_kg: f64,
    saving: Savings,
    comparison: Vec<ModeEmission>,
    offset: CreditEstimate,
}

async fn estimate_handler(
    State(state): State<AppState>,
    Json(request): Json<EstimateRequest>,
) -> Result<Json<EstimateResponse>, ProblemDetails> {
    apply_response_delay(&state).await;

    if request.mode.trim().is_empty() {
        return Err(ProblemDetails::invalid_request("mode must not be empty"));
    }

    let distance_km = match (request.distance_km, &request.from, &request.to) {
        (Some(distance), _, _) => distance,
        (None, Some(from), Some(to)) => state
            .catalog()
            .resolve_distance(from, to)
            .map_err(|e| from_lib_error(&e))?,
        _ => {
            return Err(ProblemDetails::invalid_request(
                "provide either from/to or distanceKm",
            ))
        }
    };

    let factors = state.factors();
    let emission_kg = calculate_emission(factors, distance_km, &request.mode);
    let baseline = calculate_emission(factors, distance_km, BASELINE_MODE);
    let saving = calculate_saving(emission_kg, baseline);
    let comparison = calculate_all_modes(factors, distance_km);

    let credits = calculate_carbon_credits(state.credits(), emission_kg)
        .map_err(|e| from_lib_error(&e))?;
    let offset =
        estimate_credit_price(state.credits(), credits).map_err(|e| from_lib_error(&e))?;

    info!(
        mode = %request.mode,
        distance_km,
        emission_kg,
        "estimate computed"
    );

    Ok(Json(EstimateResponse {
        mode: request.mode,
        distance_km,
        emission_kg,
        saving,
        comparison,
        offset,
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditsRequest {
    pub emission_kg: f64,
}

async fn credits_handler(
    State(state): State<AppState>,
    Json(request): Json<CreditsRequest>,
) -> Result<Json<CreditEstimate>, ProblemDetails> {
    apply_response_delay(&state).await;

    let credits = calculate_carbon_credits(state.credits(), request.emission_kg)
        .map_err(|e| from_lib_error(&e))?;
    let estimate =
        estimate_credit_price(state.credits(), credits).map_err(|e| from_lib_error(&e))?;
    Ok(Json(estimate))
}

/// Apply the configured artificial response delay.
///
/// The sleep future is dropped with the request, so a disconnecting client
/// cancels the delay; the computation itself never depends on it.
async fn apply_response_delay(state: &AppState) {
    let delay = state.response_delay();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

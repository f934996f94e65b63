//! HTTP transport: axum router and handlers
//!
//! The transport stays thin: handlers parse the wire shape leniently, hand
//! off to the orchestrator and serialize whatever comes back. Model and
//! adapter failures are the only error responses.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::orchestrator::{ForecastQuery, ForecastResponse, MetaResponse, Orchestrator};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<Orchestrator>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Build the service router with permissive CORS and request tracing.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health))
        .route("/predict", post(predict))
        .route("/meta", get(meta))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Liveness probe and a quick view of how many models resolved at startup.
async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(serde_json::json!({
        "status": "ok",
        "models": state.orchestrator.loaded_models(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// `POST /predict`. All body fields are optional; a missing or malformed
/// body is treated as an empty request rather than rejected.
async fn predict(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ForecastResponse>, ApiError> {
    let parsed: Option<Value> = serde_json::from_slice(&body).ok();
    let query = ForecastQuery::from_body(parsed.as_ref());

    state.orchestrator.forecast(&query).map(Json).map_err(|err| {
        tracing::error!(commodity = %query.commodity, error = %err, "forecast request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: err.to_string(),
            }),
        )
    })
}

#[derive(Debug, Deserialize)]
struct MetaParams {
    commodity: Option<String>,
    scope: Option<String>,
    state: Option<String>,
    district: Option<String>,
}

/// `GET /meta`. Facet listing; always answers, possibly with an empty list.
async fn meta(State(state): State<AppState>, Query(params): Query<MetaParams>) -> Json<MetaResponse> {
    Json(state.orchestrator.facets(
        params.commodity.as_deref(),
        params.scope.as_deref(),
        params.state.as_deref(),
        params.district.as_deref(),
    ))
}

//! System API endpoints: status summary and health probes.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, SystemStatus};

#[derive(Debug, Serialize)]
pub struct HealthLiveResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthReadinessChecks {
    pub database: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthReadyResponse {
    pub ready: bool,
    pub checks: HealthReadinessChecks,
}

/// `GET /api/system/status`
///
/// Version, uptime and record counts.
pub async fn get_status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<SystemStatus>>, ApiError> {
    let store = state.store();
    let database = store.ping().await.is_ok();

    let (films, actors, categories) = tokio::try_join!(
        store.count_films(),
        store.count_actors(),
        store.count_categories()
    )?;

    Ok(Json(ApiResponse::new(
        "System status",
        SystemStatus {
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime: state.start_time.elapsed().as_secs(),
            database,
            films,
            actors,
            categories,
        },
    )))
}

/// `GET /api/health/live`
pub async fn health_live() -> impl IntoResponse {
    Json(ApiResponse::new(
        "alive",
        HealthLiveResponse { status: "alive" },
    ))
}

/// `GET /api/health/ready`
///
/// 503 when the database does not answer a ping.
pub async fn health_ready(State(state): State<Arc<AppState>>) -> Response {
    let db_ready = state.store().ping().await.is_ok();

    let status = if db_ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(ApiResponse::new(
            if db_ready { "ready" } else { "not ready" },
            HealthReadyResponse {
                ready: db_ready,
                checks: HealthReadinessChecks { database: db_ready },
            },
        )),
    )
        .into_response()
}

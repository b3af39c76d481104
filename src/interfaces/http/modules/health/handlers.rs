//! Liveness endpoints

use axum::{extract::State, http::StatusCode, Json};
use chrono::{SecondsFormat, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

/// Health check state
#[derive(Clone)]
pub struct HealthState {
    pub db: DatabaseConnection,
}

/// Service health response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database is unreachable
    #[schema(example = "ok")]
    pub status: String,
    /// Current server time, ISO-8601 with milliseconds
    #[schema(example = "2024-01-01T12:00:00.000Z")]
    pub timestamp: String,
}

#[utoipa::path(
    get,
    path = "/v1",
    tag = "Health",
    responses(
        (status = 200, description = "Greeting", body = String)
    )
)]
pub async fn hello() -> &'static str {
    "Hello World!"
}

#[utoipa::path(
    get,
    path = "/v1/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service is degraded", body = HealthResponse)
    )
)]
pub async fn health_check(
    State(state): State<HealthState>,
) -> (StatusCode, Json<HealthResponse>) {
    let ping = state
        .db
        .execute(Statement::from_string(
            state.db.get_database_backend(),
            "SELECT 1".to_string(),
        ))
        .await;

    let (http_status, status) = match ping {
        Ok(_) => (StatusCode::OK, "ok"),
        Err(e) => {
            warn!(error = %e, "Database ping failed");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded")
        }
    };

    (
        http_status,
        Json(HealthResponse {
            status: status.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }),
    )
}

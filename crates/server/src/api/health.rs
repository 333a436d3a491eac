//! Health check endpoint.

use crate::AppResources;
use crate::probe::check_liveness;
use axum::{Extension, Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Tag for OpenAPI documentation.
pub const MISC_TAG: &str = "Miscellaneous";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Body of `/health`. Exactly one of `database` and `error` is present.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: HealthStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: HealthStatus::Healthy,
            database: Some("connected".to_string()),
            error: None,
        }
    }

    pub fn unhealthy(error: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Unhealthy,
            database: None,
            error: Some(error.into()),
        }
    }
}

/// Database health check endpoint.
#[tracing::instrument(skip(resources))]
#[utoipa::path(
    get,
    path = "/health",
    tag = MISC_TAG,
    operation_id = "Health Check",
    summary = "Database health check",
    description = "Borrows a pooled database connection, runs `SELECT 1` on it and returns it to the pool.\n\n\
                   Waits for a free connection while the pool is exhausted, up to the configured acquire timeout. \
                   Any failure is reported with the underlying error text. Opening a new connection shares that timeout \
                   and refused connections are retried until it expires, so an unreachable server is reported as \
                   `pool timed out while waiting for an open connection` rather than the driver's refusal.",
    responses(
        (status = 200, description = "Database is reachable", body = HealthResponse, content_type = "application/json",
            example = json!({"status": "healthy", "database": "connected"})),
        (status = 500, description = "Database is unreachable or the query failed", body = HealthResponse, content_type = "application/json",
            example = json!({"status": "unhealthy", "error": "Connection Error: pool timed out while waiting for an open connection"}))
    )
)]
pub async fn health(
    Extension(resources): Extension<AppResources>,
) -> (StatusCode, Json<HealthResponse>) {
    match check_liveness(&resources.db).await {
        Ok(info) => {
            tracing::debug!(backend = ?info.backend, round_trip = ?info.round_trip, "database liveness probe succeeded");
            (StatusCode::OK, Json(HealthResponse::healthy()))
        }
        Err(e) => {
            tracing::warn!(error = %e, "database liveness probe failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthResponse::unhealthy(e.to_string())),
            )
        }
    }
}

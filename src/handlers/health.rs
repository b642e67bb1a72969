// src/handlers/health.rs

use axum::http::StatusCode;

/// Liveness probe. Does not touch the database.
pub async fn health_check() -> StatusCode {
    tracing::debug!("Health check endpoint accessed");
    StatusCode::OK
}

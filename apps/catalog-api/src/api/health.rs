//! Health check endpoints

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use axum_helpers::server::run_health_checks;
use serde_json::Value;

use crate::state::AppState;

/// Create a health check router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Readiness check - verifies MongoDB connection
async fn readiness_check(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let checks = vec![(
        "mongodb",
        Box::pin(async {
            let status = database::mongodb::check_health(&state.mongo_client).await;
            if status.healthy {
                Ok(())
            } else {
                Err(status
                    .message
                    .unwrap_or_else(|| "connection check failed".to_string()))
            }
        }) as axum_helpers::HealthCheckFuture,
    )];

    run_health_checks(checks).await
}

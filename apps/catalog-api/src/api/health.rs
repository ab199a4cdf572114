//! Readiness endpoint

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use serde_json::Value;

use crate::state::AppState;

/// Create the readiness router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Readiness check - verifies MongoDB connection
///
/// Reports not ready (503) when no database was configured or the ping fails.
async fn readiness_check(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "mongodb",
        Box::pin(async {
            match &state.mongo_client {
                Some(client) => {
                    if database::mongodb::check_health(client).await {
                        Ok(())
                    } else {
                        Err("ping failed".to_string())
                    }
                }
                None => Err("not configured".to_string()),
            }
        }),
    )];

    run_health_checks(checks).await
}

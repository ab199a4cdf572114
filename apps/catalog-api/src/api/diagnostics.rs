//! Connectivity diagnostics endpoint

use axum::{Json, Router, extract::State, routing::get};
use serde_json::{Value, json};

use crate::state::AppState;

/// Create the diagnostics router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/test", get(connectivity_report))
        .with_state(state)
}

/// Human-readable backend/database connectivity report.
///
/// Always returns 200; the body tells the story. When a database is attached
/// the collection names are included, and a listing failure is reported
/// without failing the request.
async fn connectivity_report(State(state): State<AppState>) -> Json<Value> {
    let mut report = json!({ "backend": "✅ Running" });

    match &state.db {
        None => {
            report["database"] = json!("❌ Not Available");
        }
        Some(db) => {
            report["database"] = json!("✅ Connected");
            match db.list_collection_names().await {
                Ok(collections) => {
                    report["collections"] = json!(collections);
                }
                Err(e) => {
                    report["collections_error"] = json!(e.to_string());
                }
            }
        }
    }

    Json(report)
}

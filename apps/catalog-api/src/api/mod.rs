//! API routes module
//!
//! This module defines all HTTP API routes for the Catalog API.

pub mod catalog;
pub mod diagnostics;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(catalog::router(state))
        .merge(diagnostics::router(state.clone()))
        .merge(health::router(state.clone()))
}

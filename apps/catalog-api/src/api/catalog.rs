//! Catalog API routes

use axum::Router;
use domain_catalog::{CatalogService, MongoCatalogRepository, handlers};
use std::sync::Arc;

use crate::state::AppState;

/// Create the catalog router
///
/// The repository accepts a missing database; the domain layer decides which
/// operations degrade and which fail.
pub fn router(state: &AppState) -> Router {
    let repository = MongoCatalogRepository::new(state.db.clone());
    let service = CatalogService::new(Arc::new(repository));
    handlers::router(service)
}

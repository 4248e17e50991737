//! Products API routes
//!
//! This module wires up the catalog domain to HTTP routes.

use axum::Router;
use domain_catalog::{CatalogService, MongoCatalogRepository, handlers};

use crate::state::AppState;

/// Create products router
pub fn router(state: &AppState) -> Router {
    // Create the MongoDB repository
    let repository = MongoCatalogRepository::new(state.mongo_client.clone());

    // Create the service
    let service = CatalogService::new(repository);

    // Return the domain's router
    handlers::router(service)
}

//! Products API routes

use axum::Router;
use domain_products::{handlers, seed_products, MongoProductRepository, ProductService};
use tracing::{info, warn};

use crate::state::AppState;

fn service(state: &AppState) -> ProductService<MongoProductRepository> {
    ProductService::new(MongoProductRepository::new(state.store.clone()))
}

/// Create products router
pub fn router(state: &AppState) -> Router {
    handlers::router(service(state))
}

/// Seed sample products. Failures are logged; startup always continues.
pub async fn seed(state: &AppState) {
    match seed_products(&service(state)).await {
        Ok(outcome) => info!(%outcome, "Product seeding finished"),
        Err(e) => warn!(error = %e, "Product seeding skipped"),
    }
}

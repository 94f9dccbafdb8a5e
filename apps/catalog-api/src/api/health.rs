//! Readiness endpoint

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use axum_helpers::{run_health_checks, HealthCheckFuture};
use database::mongodb::check_health;
use serde_json::Value;

use crate::state::AppState;

async fn ready(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let client = state.mongo_client.clone();
    let database: HealthCheckFuture = Box::pin(async move {
        match client {
            Some(client) if check_health(&client).await => Ok(()),
            Some(_) => Err("ping failed".to_string()),
            None => Err("not configured".to_string()),
        }
    });

    run_health_checks(vec![("database", database)]).await
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(ready))
        .with_state(state)
}

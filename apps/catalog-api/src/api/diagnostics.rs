//! Liveness and diagnostic endpoints outside the product API

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use serde_json::{json, Value};

use crate::state::AppState;

/// Collections listed by `/test`
const MAX_LISTED_COLLECTIONS: usize = 10;

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "E‑commerce Backend Ready" }))
}

pub async fn hello() -> Json<Value> {
    Json(json!({ "message": "Hello from the backend API!" }))
}

/// Store connectivity and configuration presence.
///
/// Values are human-readable status strings. Configuration values themselves
/// are never included.
#[derive(Debug, Serialize)]
pub struct Diagnostics {
    pub backend: &'static str,
    pub database: String,
    pub database_url: &'static str,
    pub database_name: &'static str,
    pub connection_status: &'static str,
    pub collections: Vec<String>,
}

fn presence(set: bool) -> &'static str {
    if set { "set" } else { "not set" }
}

async fn diagnostics(State(state): State<AppState>) -> Json<Diagnostics> {
    let mut report = Diagnostics {
        backend: "running",
        database: "not available".to_string(),
        database_url: presence(state.config.database_url_set),
        database_name: presence(state.config.database_name_set),
        connection_status: "not connected",
        collections: Vec::new(),
    };

    if state.store.is_available() {
        report.connection_status = "connected";
        match state.store.list_collection_names().await {
            Ok(mut names) => {
                names.truncate(MAX_LISTED_COLLECTIONS);
                report.collections = names;
                report.database = "connected and working".to_string();
            }
            Err(e) => {
                let reason: String = e.to_string().chars().take(50).collect();
                report.database = format!("connected but failing: {reason}");
            }
        }
    }

    Json(report)
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/test", get(diagnostics))
        .with_state(state)
}

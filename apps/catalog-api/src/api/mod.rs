//! API routes module

pub mod diagnostics;
pub mod health;
pub mod products;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Routes nested under `/api`
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/products", products::router(state))
        .route("/hello", get(diagnostics::hello))
}

/// Routes served from the root: `/`, `/test`, `/ready`
pub fn root_routes(state: &AppState) -> Router {
    Router::new()
        .merge(diagnostics::router(state.clone()))
        .merge(health::router(state.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openapi::ApiDoc;
    use crate::state::test_support::disconnected_state;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    async fn status(uri: &str) -> StatusCode {
        let state = disconnected_state();
        let app = axum_helpers::create_router::<ApiDoc>(routes(&state))
            .await
            .unwrap()
            .merge(root_routes(&state));

        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_full_router() {
        assert_eq!(status("/").await, StatusCode::OK);
        assert_eq!(status("/api/hello").await, StatusCode::OK);
        assert_eq!(status("/test").await, StatusCode::OK);
        assert_eq!(status("/ready").await, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(status("/api/products").await, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(status("/api/products/featured").await, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(status("/api-docs/openapi.json").await, StatusCode::OK);
        assert_eq!(status("/missing").await, StatusCode::NOT_FOUND);
    }
}

//! # Axum Helpers
//!
//! Shared HTTP plumbing for the catalog service.
//!
//! - **[`server`]**: router assembly with OpenAPI docs, `/health`, graceful shutdown
//! - **[`http`]**: CORS and security header middleware
//! - **[`errors`]**: [`AppError`] and the JSON error body
//! - **[`extractors`]**: [`ValidatedJson`] and [`ValidatedQuery`]
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::{create_production_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig};
//!
//! let api_routes = Router::new();
//! let app = create_router::<ApiDoc>(api_routes).await?.merge(health_router(app_info!()));
//! create_production_app(app, &ServerConfig::default(), Duration::from_secs(30), async {}).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks, shutdown_signal,
};

pub use http::{cors_layer_from_env, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{ValidatedJson, ValidatedQuery};

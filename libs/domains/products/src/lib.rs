//! Products Domain
//!
//! The product catalog: schema and validation, typed decoding of stored
//! documents, persistence over MongoDB and the HTTP handlers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐     ┌──────────┐
//! │   Service   │ ◄── │  Seeder  │  ← startup sample data
//! └──────┬──────┘     └──────────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, stored document shape
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use database::mongodb::{Client, DocumentStore};
//! use domain_products::{handlers, seed_products, MongoProductRepository, ProductService};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let store = DocumentStore::new(client.database("shop"));
//!
//! let service = ProductService::new(MongoProductRepository::new(store));
//! let outcome = seed_products(&service).await?;
//! println!("{outcome}");
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod seed;
pub mod service;

pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{CreateProduct, FeaturedQuery, NewProduct, Product, ProductFilter};
pub use mongodb::MongoProductRepository;
pub use repository::ProductRepository;
pub use seed::{seed_products, SeedOutcome, SAMPLE_PRODUCTS};
pub use service::ProductService;

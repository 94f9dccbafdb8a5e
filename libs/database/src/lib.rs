//! Database library providing MongoDB connectors and a document store adapter
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB connector, health checks and [`mongodb::DocumentStore`]
//! - `config` - Configuration support with `core_config::FromEnv`
//! - `all` - All features
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{self, DocumentStore, MongoConfig};
//!
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "shop");
//! let client = mongodb::connect_from_config_with_retry(&config, None).await?;
//! let store = DocumentStore::new(client.database(config.database()));
//!
//! let id = store.create_document("product", &record).await?;
//! let doc = store.get_document_by_id("product", &id).await?;
//! ```

// Always available modules
pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{RetryConfig, retry, retry_with_backoff};

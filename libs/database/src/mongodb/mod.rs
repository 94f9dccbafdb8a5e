//! MongoDB connection management and the document store adapter

mod config;
mod connector;
mod health;
mod store;

pub use config::MongoConfig;
pub use connector::{MongoError, client_options, connect_from_config, connect_from_config_with_retry};
pub use health::check_health;
pub use store::{DocumentStore, StoreError, StoreResult, parse_object_id};

pub use mongodb::{Client, Collection, Database};

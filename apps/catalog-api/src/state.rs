//! Application state management

use database::mongodb::DocumentStore;
use mongodb::Client;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// `None` when the service started without a database
    pub mongo_client: Option<Client>,
    pub store: DocumentStore,
}

impl AppState {
    pub fn new(config: crate::config::Config, mongo_client: Option<Client>) -> Self {
        let store = match (&mongo_client, &config.mongodb) {
            (Some(client), Some(mongodb)) => DocumentStore::new(client.database(mongodb.database())),
            _ => DocumentStore::disconnected(),
        };

        Self {
            config,
            mongo_client,
            store,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::config::{Config, Environment};
    use core_config::{app_info, server::ServerConfig};

    /// State as it looks after starting with no database configured
    pub fn disconnected_state() -> AppState {
        let config = Config {
            app: app_info!(),
            mongodb: None,
            database_url_set: false,
            database_name_set: true,
            server: ServerConfig::default(),
            environment: Environment::Development,
        };
        AppState::new(config, None)
    }
}

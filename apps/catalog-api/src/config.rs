//! Configuration for Catalog API

use core_config::{app_info, env_first_of, server::ServerConfig, AppInfo, ConfigError, FromEnv};
use database::mongodb::MongoConfig;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    /// `None` when `DATABASE_URL` or `DATABASE_NAME` is missing
    pub mongodb: Option<MongoConfig>,
    pub database_url_set: bool,
    pub database_name_set: bool,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    /// A missing database variable is not an error; the service then runs
    /// without a store. Malformed values (`PORT=abc`) are.
    pub fn from_env() -> eyre::Result<Self> {
        let app = app_info!();
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;

        let mongodb = match MongoConfig::from_env() {
            Ok(config) => Some(config.with_app_name(app.name)),
            Err(ConfigError::MissingEnvVar(_)) => None,
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            app,
            mongodb,
            database_url_set: env_first_of(&["DATABASE_URL"]).is_some(),
            database_name_set: env_first_of(&["DATABASE_NAME"]).is_some(),
            server,
            environment,
        })
    }
}

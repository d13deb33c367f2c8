//! Configuration for the marketing-site API

use core_config::admin::AdminConfig;
use core_config::email::EmailConfig;
use core_config::server::ServerConfig;
use core_config::storage::StorageConfig;
use core_config::FromEnv;
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application configuration, assembled from the environment once at
/// startup. Everything downstream receives plain config values.
#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub postgres: PostgresConfig,
    pub admin: AdminConfig,
    pub email: EmailConfig,
    pub storage: StorageConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            postgres: PostgresConfig::from_env()?,
            admin: AdminConfig::from_env()?,
            email: EmailConfig::from_env()?,
            storage: StorageConfig::from_env()?,
            environment: Environment::from_env(),
        })
    }
}

pub mod app;

use actix_web::dev::ServerHandle;
use thiserror::Error;

use crate::database::ConnectionPair;

pub use app::{AppConfig, AppMetadata, DatabaseConfig, ServerConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

pub trait Validate {
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Runtime settings owned by a single server instance.
///
/// Instances clone it from a base snapshot, so flags and the listener handle
/// are never shared. The connection pair is the exception: its handles point
/// at the same pools for every clone.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub is_testing: bool,
    pub is_production: bool,
    /// Handle of the active listener, set by the lifecycle operations.
    pub server: Option<ServerHandle>,
    pub connection: Option<ConnectionPair>,
}

impl Config {
    pub fn from_app(config: &AppConfig) -> Self {
        Self {
            port: config.server.port,
            is_testing: config.app.is_testing(),
            is_production: config.app.is_production(),
            server: None,
            connection: None,
        }
    }

    /// Snapshot built from files and environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        load().map(|config| Self::from_app(&config))
    }

    pub fn with_connection(mut self, connection: Option<ConnectionPair>) -> Self {
        self.connection = connection;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_app(&AppConfig::default())
    }
}

/// Load the application configuration from files and environment variables
pub fn load() -> Result<AppConfig, ConfigError> {
    app::load_config()
}

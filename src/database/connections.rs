use std::fmt;
use std::sync::{PoisonError, RwLock};

use lighter_campus_migration::{FastMigrator, MigratorTrait, SlowMigrator};
use once_cell::sync::Lazy;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use thiserror::Error;

use crate::config::{ConfigError, DatabaseConfig};

static GLOBAL: Lazy<Connections> = Lazy::new(Connections::new);

#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error("Failed to load database configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Database operation failed: {0}")]
    Database(#[from] DbErr),
}

/// Live handles onto both datastore tiers
///
/// Cloning a pair clones the handles, not the pools behind them.
#[derive(Clone)]
pub struct ConnectionPair {
    /// Session tier
    pub fast: DatabaseConnection,
    /// Record tier
    pub slow: DatabaseConnection,
}

impl fmt::Debug for ConnectionPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionPair")
            .field("fast", &self.fast.get_database_backend())
            .field("slow", &self.slow.get_database_backend())
            .finish()
    }
}

impl ConnectionPair {
    /// Open both tiers and bring their schemas up to date.
    #[tracing::instrument(skip(config), fields(max_connections = config.max_connections))]
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let fast = connect(&config.fast_url, config.max_connections).await?;
        FastMigrator::up(&fast, None).await?;

        let slow = connect(&config.slow_url, config.max_connections).await?;
        SlowMigrator::up(&slow, None).await?;

        tracing::info!("Fast and slow connections opened");

        Ok(Self { fast, slow })
    }

    /// Close both tiers independently, reporting the first failure.
    pub async fn close(self) -> Result<(), DbErr> {
        let fast = self.fast.close().await;
        let slow = self.slow.close().await;

        if let Err(e) = &fast {
            tracing::error!(error = %e, "Failed to close fast connection");
        }
        if let Err(e) = &slow {
            tracing::error!(error = %e, "Failed to close slow connection");
        }

        fast.and(slow)
    }
}

async fn connect(url: &str, max_connections: u32) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(url.to_string());
    options.max_connections(max_connections).sqlx_logging(false);

    // every pooled connection to an in-memory sqlite url would get its own database
    if url.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    }

    Database::connect(options).await
}

/// Lifecycle owner of one [`ConnectionPair`]
///
/// Opening an already open manager is a no-op, and so is closing a manager
/// that is not open.
#[derive(Default)]
pub struct Connections {
    pair: RwLock<Option<ConnectionPair>>,
}

impl Connections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide manager used by [`crate::testing::start_connection`].
    pub fn global() -> &'static Connections {
        &GLOBAL
    }

    pub fn is_open(&self) -> bool {
        self.pair
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Clone of the open pair, if any.
    pub fn pair(&self) -> Option<ConnectionPair> {
        self.pair
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[tracing::instrument(skip(self, config))]
    pub async fn start(&self, config: &DatabaseConfig) -> Result<(), DbErr> {
        if self.is_open() {
            tracing::warn!("Connections already open, ignoring start");
            return Ok(());
        }

        let opened = ConnectionPair::open(config).await?;

        let rejected = {
            let mut pair = self.pair.write().unwrap_or_else(PoisonError::into_inner);
            match pair.as_ref() {
                Some(_) => Some(opened),
                None => {
                    *pair = Some(opened);
                    None
                }
            }
        };

        // lost a race against a concurrent start
        if let Some(rejected) = rejected {
            tracing::warn!("Connections opened concurrently, closing the duplicate pair");
            rejected.close().await?;
        }

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn stop(&self) -> Result<(), DbErr> {
        let pair = self
            .pair
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        match pair {
            Some(pair) => {
                pair.close().await?;
                tracing::info!("Fast and slow connections closed");
                Ok(())
            }
            None => {
                tracing::debug!("Connections not open, nothing to close");
                Ok(())
            }
        }
    }
}

pub mod entities;
pub mod migrator;
pub mod repositories;

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database URL (e.g., "sqlite://./database.sqlite?mode=rwc")
    pub url: String,
    /// Upper bound for the connection pool (driver default when unset)
    pub max_connections: Option<u32>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://./database.sqlite?mode=rwc".to_string(),
            max_connections: None,
        }
    }
}

impl DatabaseConfig {
    /// Create config for SQLite
    pub fn sqlite(path: &str) -> Self {
        Self {
            url: format!("sqlite://{}?mode=rwc", path),
            max_connections: None,
        }
    }

    /// Private in-memory SQLite database. Pinned to one connection so every
    /// query sees the same database.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: Some(1),
        }
    }
}

/// Initialize database connection
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, sea_orm::DbErr> {
    info!("Connecting to database: {}", config.url);

    let mut options = ConnectOptions::new(config.url.clone());
    options
        .connect_timeout(Duration::from_secs(5))
        .sqlx_logging(false);
    if let Some(max) = config.max_connections {
        options.max_connections(max).min_connections(1);
    }

    let db = Database::connect(options).await?;
    info!("Database connected successfully");
    Ok(db)
}

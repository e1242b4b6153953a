//! `SQLite` connection pool setup and schema bootstrap.

use std::fs;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::{AppError, Result};

use super::schema;

/// Alias for the shared `SQLite` pool.
pub type Database = SqlitePool;

/// Open the on-disk database described by `config` and apply the schema.
///
/// The tool is strictly sequential, so the pool holds a single connection
/// that lives for the whole process.
///
/// # Errors
///
/// Returns `AppError::Db` if the directory cannot be created, the
/// connection fails, or schema application fails.
pub async fn connect(config: &DatabaseConfig) -> Result<Database> {
    if config.create_if_missing {
        if let Some(parent) = config.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|err| AppError::Db(format!("failed to create db dir: {err}")))?;
        }
    }

    let options = SqliteConnectOptions::new()
        .filename(&config.path)
        .create_if_missing(config.create_if_missing)
        .foreign_keys(true);

    let pool = single_connection_pool(options).await?;
    schema::bootstrap_schema(&pool).await?;
    info!(path = %config.path.display(), "database connected");
    Ok(pool)
}

/// Open a private in-memory database with the schema applied.
///
/// # Errors
///
/// Returns `AppError::Db` if the connection or schema application fails.
pub async fn connect_memory() -> Result<Database> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
    let pool = single_connection_pool(options).await?;
    schema::bootstrap_schema(&pool).await?;
    Ok(pool)
}

// An in-memory database lives exactly as long as its connection, so the
// connection is never recycled.
async fn single_connection_pool(options: SqliteConnectOptions) -> Result<Database> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect_with(options)
        .await?;
    Ok(pool)
}

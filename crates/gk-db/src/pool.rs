//! Pool construction and schema migration.

use crate::{DbError, Result as DbErrorResult};

use gk_core::ErrorLocation;

use std::panic::Location;
use std::path::Path;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Open (or create) the SQLite database at `path` and run pending migrations.
pub async fn connect(path: &Path) -> DbErrorResult<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new().connect_with(options).await?;

    migrate(&pool).await?;

    Ok(pool)
}

/// Run pending migrations on an existing pool.
pub async fn migrate(pool: &SqlitePool) -> DbErrorResult<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DbError::Migration {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

/*
[INPUT]:  Database URL from environment
[OUTPUT]: Connected SQLite pool with schema applied
[POS]:    Storage layer - pool setup and schema bootstrap
[UPDATE]: When the schema or connection options change
*/

use crate::env_or;
use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use tracing::info;

/// Environment variable overriding the database location
pub const DB_URL_ENV: &str = "TASKBOARD_DB";

const DEFAULT_DB_URL: &str = "sqlite:taskboard.db";

/// Database URL from `TASKBOARD_DB`, or the default on-disk file
pub fn database_url() -> String {
    env_or(DB_URL_ENV, DEFAULT_DB_URL)
}

/// Open the database and apply the schema
pub async fn init_db(url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(url)
        .context("parse database url")?
        .create_if_missing(true);

    // One connection: SQLite has a single writer anyway, and it keeps
    // in-memory databases visible to every handler.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .context("open database")?;

    migrate(&pool).await?;
    info!(url, "database connected and migrated");
    Ok(pool)
}

async fn migrate(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tasks (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            title      TEXT NOT NULL,
            completed  INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .context("create tasks table")?;

    Ok(())
}

//! Database module
//!
//! SQLite connection bootstrap plus one query module per entity. Query
//! modules are plain `async fn`s over the pool returning [`RepoResult`].

pub mod branches;
pub mod categories;
pub mod contact_info;
pub mod contact_requests;
pub mod menus;
pub mod page_sections;
pub mod products;
pub mod users;

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
};
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Embedded sqlx migrations (`cafe-server/migrations/`)
pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored column failed to decode (bad JSON document or decimal)
    #[error("corrupt record: {0}")]
    Corrupt(String),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

impl RepoError {
    /// True when the underlying failure is a unique-constraint violation;
    /// the storage-level constraint is the authoritative duplicate guard
    pub fn is_unique_violation(&self) -> bool {
        match self {
            RepoError::Database(sqlx::Error::Database(db_err)) => db_err.is_unique_violation(),
            _ => false,
        }
    }
}

/// Open the SQLite pool (WAL mode, foreign keys on) and run migrations
pub async fn connect(database_url: &str) -> Result<SqlitePool, BoxError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .pragma("foreign_keys", "ON");

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    // busy_timeout: wait 5s on write contention instead of failing
    sqlx::query("PRAGMA busy_timeout = 5000;").execute(&pool).await?;

    MIGRATOR.run(&pool).await?;
    tracing::info!("Database ready (SQLite WAL, migrations applied)");

    Ok(pool)
}

/// Fresh opaque identifier for a new record
pub fn new_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Decode an owned JSON document column; NULL means absent
pub(crate) fn decode_json<T: serde::de::DeserializeOwned>(
    column: Option<String>,
    what: &str,
) -> RepoResult<Option<T>> {
    match column {
        None => Ok(None),
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| RepoError::Corrupt(format!("{what}: {e}"))),
    }
}

/// Encode an owned JSON document column
pub(crate) fn encode_json<T: serde::Serialize>(
    value: &Option<T>,
    what: &str,
) -> RepoResult<Option<String>> {
    match value {
        None => Ok(None),
        Some(v) => serde_json::to_string(v)
            .map(Some)
            .map_err(|e| RepoError::Corrupt(format!("{what}: {e}"))),
    }
}

/// Decode a decimal stored as TEXT
pub(crate) fn decode_decimal(raw: &str, what: &str) -> RepoResult<rust_decimal::Decimal> {
    raw.parse()
        .map_err(|e| RepoError::Corrupt(format!("{what}: {e}")))
}

//! Database module
//!
//! SQLite storage for the site:
//! - Schema and versioned migrations
//! - Row models and request shapes
//! - Repository layer for row-level CRUD over pages, profiles,
//!   applications and contact submissions

pub mod models;
pub mod repository;
pub mod schema;

pub use models::*;
pub use repository::Repository;
pub use schema::initialize_database;

use crate::error::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

const MAX_CONNECTIONS: u32 = 5;
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Where the site database lives
#[derive(Debug, Clone, Copy)]
pub enum Store<'a> {
    File(&'a Path),
    /// Private in-memory database, gone when the pool closes
    Memory,
}

impl Store<'_> {
    fn options(&self) -> std::result::Result<SqliteConnectOptions, sqlx::Error> {
        let options = match self {
            Store::File(path) => SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal),
            Store::Memory => SqliteConnectOptions::from_str("sqlite::memory:")?,
        };
        Ok(options.busy_timeout(BUSY_TIMEOUT).foreign_keys(true))
    }

    /// Every memory connection is a separate database, so a memory store
    /// is held on one connection that is never recycled.
    fn pool_options(&self) -> SqlitePoolOptions {
        match self {
            Store::File(_) => SqlitePoolOptions::new().max_connections(MAX_CONNECTIONS),
            Store::Memory => SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None),
        }
    }
}

/// Open a migrated pool over `store`.
///
/// A file store is migrated on its own connection, closed before serving
/// connections open, so none of them caches a pre-migration schema.
pub async fn open(store: Store<'_>) -> Result<SqlitePool> {
    if let Store::File(path) = store {
        tracing::info!("Opening site database at: {:?}", path);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let migrator = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(store.options()?)
            .await?;
        initialize_database(&migrator).await?;
        migrator.close().await;
    }

    let pool = store.pool_options().connect_with(store.options()?).await?;

    if let Store::Memory = store {
        initialize_database(&pool).await?;
    }

    tracing::info!("Database pool ready");
    Ok(pool)
}

/// Open the site database file, creating and migrating it as needed.
pub async fn create_pool(db_path: &Path) -> Result<SqlitePool> {
    open(Store::File(db_path)).await
}

/// Migrated in-memory database
pub async fn create_memory_pool() -> Result<SqlitePool> {
    open(Store::Memory).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_file_store_creates_parent_and_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("site.db");

        let pool = create_pool(&path).await.unwrap();
        Repository::new(pool.clone())
            .create_page(CreatePageRequest {
                title: "Renewals".into(),
                path: "renewal".into(),
                ..Default::default()
            })
            .await
            .unwrap();
        pool.close().await;

        let reopened = Repository::new(create_pool(&path).await.unwrap());
        assert_eq!(reopened.list_pages(None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_memory_stores_are_isolated() {
        let first = Repository::new(create_memory_pool().await.unwrap());
        let second = Repository::new(create_memory_pool().await.unwrap());

        first
            .create_page(CreatePageRequest {
                title: "Only here".into(),
                path: "only-here".into(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(first.list_pages(None).await.unwrap().len(), 1);
        assert!(second.list_pages(None).await.unwrap().is_empty());
    }
}

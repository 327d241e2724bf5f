//! Database schema and migrations
//!
//! Migrations are embedded SQL files applied in version order. Each applied
//! version is recorded in the `migrations` table so startup is idempotent.

use crate::error::Result;
use sqlx::{sqlite::SqlitePool, Row};

/// Embedded migrations, oldest first
const MIGRATIONS: &[(i32, &str)] = &[(1, include_str!("migrations/001_initial_schema.sql"))];

/// Bring the schema up to the latest version.
pub async fn initialize_database(pool: &SqlitePool) -> Result<()> {
    tracing::info!("Initializing database schema");

    sqlx::query("PRAGMA journal_mode = WAL").execute(pool).await?;
    sqlx::query("PRAGMA foreign_keys = ON").execute(pool).await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS migrations (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    let current_version: i32 = sqlx::query("SELECT COALESCE(MAX(version), 0) FROM migrations")
        .fetch_one(pool)
        .await?
        .get(0);

    tracing::info!("Current schema version: {}", current_version);

    for (version, sql) in MIGRATIONS.iter().filter(|(v, _)| *v > current_version) {
        apply_migration(pool, *version, sql).await?;
    }

    tracing::info!("Database initialization complete");
    Ok(())
}

async fn apply_migration(pool: &SqlitePool, version: i32, sql: &str) -> Result<()> {
    tracing::info!("Applying migration version {}", version);

    let mut tx = pool.begin().await?;

    for statement in statements(sql) {
        sqlx::query(statement).execute(&mut *tx).await?;
    }

    sqlx::query("INSERT INTO migrations (version) VALUES (?)")
        .bind(version)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::info!("Migration version {} applied", version);
    Ok(())
}

/// Split a migration file into executable statements, dropping comment-only
/// fragments.
fn statements(sql: &str) -> impl Iterator<Item = &str> {
    sql.split(';').map(str::trim).filter(|statement| {
        statement
            .lines()
            .any(|line| !line.trim().is_empty() && !line.trim().starts_with("--"))
    })
}

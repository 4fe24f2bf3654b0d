//! Connection pool setup and schema bootstrap.

use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use tracing::info;

/// A type alias for the database connection pool (`Pool<Postgres>`).
pub type DbPool = Pool<Postgres>;

const SCHEMA: [&str; 3] = [
    r#"CREATE TABLE IF NOT EXISTS cards (
        id BIGSERIAL PRIMARY KEY,
        card_id VARCHAR(50) NOT NULL UNIQUE,
        name VARCHAR(100) NOT NULL,
        numbers INTEGER[] NOT NULL,
        is_winner BOOLEAN NOT NULL DEFAULT FALSE
    )"#,
    r#"CREATE TABLE IF NOT EXISTS settings (
        id INTEGER PRIMARY KEY CHECK (id = 1),
        countdown_time TIMESTAMPTZ,
        sponsor_images TEXT[] NOT NULL DEFAULT '{}',
        prize_image TEXT,
        drawn_numbers INTEGER[] NOT NULL DEFAULT '{}',
        is_drawing BOOLEAN NOT NULL DEFAULT FALSE,
        has_winner BOOLEAN NOT NULL DEFAULT FALSE
    )"#,
    // Older databases were created with a bounded prize name.
    "ALTER TABLE settings ALTER COLUMN prize_image TYPE TEXT",
];

pub async fn connect(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Creates the tables if they are missing. Safe to run on every startup.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    info!(target: "database", "schema ready");
    Ok(())
}

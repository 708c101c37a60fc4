use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

use super::env::parse_or;

/// Initialize the catalog connection pool from environment variables
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
/// - DATABASE_MIGRATIONS_PATH: Apply migrations from this directory at boot (optional)
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let config = DatabaseConfig::new(db_url)
        .with_max_connections(parse_or("DATABASE_MAX_CONNECTIONS", 5));

    let pool = create_postgres_pool(&config).await?;

    if let Ok(path) = env::var("DATABASE_MIGRATIONS_PATH") {
        run_migrations(&pool, &path).await?;
    }

    Ok(pool)
}

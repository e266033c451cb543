//! Schema migrations
//!
//! Idempotent CREATE TABLE statements run at startup. The `seq` columns
//! exist only to give `find_all` a stable insertion order; they are not part
//! of the entity model.

use sqlx::PgPool;

use crate::error::{Error, Result};

/// Run all schema migrations.
pub async fn run(pool: &PgPool) -> Result<()> {
    tracing::info!("running schema migrations");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS accounts (
            id UUID PRIMARY KEY,
            username TEXT NOT NULL UNIQUE,
            email TEXT NOT NULL UNIQUE,
            display_name TEXT,
            seq BIGSERIAL
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|source| Error::Storage {
        context: "failed to create accounts table",
        source,
    })?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS messages (
            id UUID PRIMARY KEY,
            content TEXT NOT NULL,
            author_id UUID NOT NULL REFERENCES accounts(id),
            seq BIGSERIAL
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|source| Error::Storage {
        context: "failed to create messages table",
        source,
    })?;

    Ok(())
}

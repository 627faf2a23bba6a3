//! Schema migrations for the user service

use sqlx::PgPool;

use super::repos::DbError;

/// Create the `users` table if it does not exist. Safe to run on every start.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running user migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            age INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("User migrations complete");
    Ok(())
}

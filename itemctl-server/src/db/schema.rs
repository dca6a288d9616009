//! Schema bootstrap for the items table
//!
//! There is no migration system: the table is created if absent at startup
//! and left alone otherwise.

use sqlx::PgPool;

const CREATE_ITEMS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS items (
        name VARCHAR(255) PRIMARY KEY,
        number INTEGER NOT NULL
    )
"#;

/// Create the `items` table if it doesn't exist
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_ITEMS_TABLE).execute(pool).await?;
    tracing::info!("Database table \"items\" initialized or already exists");
    Ok(())
}

//! Item repository backed by Postgres
//!
//! - insert: INSERT ... ON CONFLICT DO NOTHING (atomic, no check-then-insert)
//! - delete/update: RETURNING tells us whether a row matched

use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::store::{ItemStore, StoreError};
use crate::models::{Item, ItemNumber, NewItem};

/// Item repository
#[derive(Debug, Clone)]
pub struct PgItemStore {
    pool: PgPool,
}

impl PgItemStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        let items = sqlx::query_as::<_, Item>("SELECT name, number FROM items")
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    async fn insert(&self, item: &NewItem) -> Result<Option<Item>, StoreError> {
        sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items (name, number) VALUES ($1, $2)
            ON CONFLICT (name) DO NOTHING
            RETURNING name, number
            "#,
        )
        .bind(item.name.as_str())
        .bind(item.number.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::from_insert(e, item.name.as_str()))
    }

    async fn delete(&self, name: &str) -> Result<bool, StoreError> {
        let deleted = sqlx::query_scalar::<_, String>(
            "DELETE FROM items WHERE name = $1 RETURNING name",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(deleted.is_some())
    }

    async fn update_number(
        &self,
        name: &str,
        number: ItemNumber,
    ) -> Result<Option<Item>, StoreError> {
        let item = sqlx::query_as::<_, Item>(
            "UPDATE items SET number = $1 WHERE name = $2 RETURNING name, number",
        )
        .bind(number.get())
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

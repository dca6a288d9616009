//! Item store seam
//!
//! The service talks to storage only through [`ItemStore`], so the same
//! request handling runs against Postgres in production and an in-memory map
//! in development and tests.

use async_trait::async_trait;

use crate::models::{Item, ItemNumber, NewItem};

/// Postgres SQLSTATE for unique constraint violations
const UNIQUE_VIOLATION: &str = "23505";

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Insert hit the primary key after all (concurrent create race)
    #[error("duplicate item '{name}'")]
    Duplicate { name: String },
}

impl StoreError {
    /// Map a sqlx error for an insert of `name`, turning unique violations
    /// into [`StoreError::Duplicate`].
    pub fn from_insert(err: sqlx::Error, name: &str) -> Self {
        let is_unique_violation = err
            .as_database_error()
            .and_then(|db| db.code())
            .is_some_and(|code| code == UNIQUE_VIOLATION);

        if is_unique_violation {
            Self::Duplicate {
                name: name.to_owned(),
            }
        } else {
            Self::Sqlx(err)
        }
    }
}

/// Persistence for items keyed by name
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// All items, in store-defined order.
    async fn list(&self) -> Result<Vec<Item>, StoreError>;

    /// Insert unless the name is taken. Returns `None` on conflict, leaving
    /// the existing item untouched.
    async fn insert(&self, item: &NewItem) -> Result<Option<Item>, StoreError>;

    /// Delete by name. Returns `false` when nothing matched.
    async fn delete(&self, name: &str) -> Result<bool, StoreError>;

    /// Set `number` for an existing item. Returns `None` when absent.
    async fn update_number(&self, name: &str, number: ItemNumber)
        -> Result<Option<Item>, StoreError>;

    /// Trivial round-trip to check the store answers.
    async fn ping(&self) -> Result<(), StoreError>;
}

//! Database layer - connection pool, schema bootstrap and item stores
//!
//! # Design Principles
//!
//! - Connection pool passed explicitly, no globals
//! - Rely on DB constraints, handle conflicts - no check-then-insert
//! - One statement per operation

pub mod memory;
pub mod pool;
pub mod repos;
pub mod schema;
pub mod store;

pub use memory::MemoryItemStore;
pub use pool::create_pool;
pub use repos::PgItemStore;
pub use schema::ensure_schema;
pub use store::{ItemStore, StoreError};

//! Repository implementations for database access
//!
//! Repositories follow these patterns:
//! - Parameterized queries only
//! - Handles conflicts via ON CONFLICT (no check-then-insert)
//! - RETURNING to read back the affected row in the same statement

pub mod items;

pub use items::PgItemStore;

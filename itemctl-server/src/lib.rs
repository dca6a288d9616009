//! itemctl-server: REST service over a table of named numbers
//!
//! Items are `(name, number)` pairs keyed by `name`. The crate provides the
//! store seam and its Postgres and in-memory backends, the item service that
//! validates requests and maps store outcomes, and the axum HTTP layer.

pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod models;
pub mod service;

pub use config::DbConfig;
pub use error::{Operation, ServiceError, ServiceResult};
pub use http::{build_router, run_server, ServerConfig};
pub use service::ItemService;

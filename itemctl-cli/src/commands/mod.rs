//! Command implementations for itemctl CLI

pub mod items;
pub mod serve;

pub use items::run_items;
pub use serve::run_serve;

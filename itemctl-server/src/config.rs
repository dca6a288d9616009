//! Database configuration
//!
//! Loaded from the standard libpq environment variables:
//! - `PGHOST` (default: localhost)
//! - `PGPORT` (default: 5432)
//! - `PGUSER` (default: postgres)
//! - `PGPASSWORD` (optional)
//! - `PGDATABASE` (default: postgres)
//!
//! `DATABASE_URL`, when set, takes precedence over the individual fields.

use std::str::FromStr;

use sqlx::postgres::PgConnectOptions;

pub const DEFAULT_PG_PORT: u16 = 5432;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Connection settings for the item store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Option<String>,
    pub database: String,
    /// Full connection string; overrides the fields above when present
    pub url: Option<String>,
    pub max_connections: u32,
}

impl DbConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup (for testing)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Self {
            host: non_empty("PGHOST").unwrap_or_else(|| "localhost".to_string()),
            port: non_empty("PGPORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PG_PORT),
            user: non_empty("PGUSER").unwrap_or_else(|| "postgres".to_string()),
            password: non_empty("PGPASSWORD"),
            database: non_empty("PGDATABASE").unwrap_or_else(|| "postgres".to_string()),
            url: non_empty("DATABASE_URL"),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    /// Translate into sqlx connect options.
    ///
    /// # Errors
    ///
    /// Returns an error if `url` is set and is not a valid Postgres URL.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url);
        }

        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.database);

        Ok(match &self.password {
            Some(password) => options.password(password),
            None => options,
        })
    }

    /// Connection target for log lines, never includes the password
    pub fn display_target(&self) -> String {
        match &self.url {
            Some(_) => "DATABASE_URL".to_string(),
            None => format!("{}@{}:{}/{}", self.user, self.host, self.port, self.database),
        }
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

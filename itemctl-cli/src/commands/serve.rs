//! HTTP server command
//!
//! Connects to Postgres (or an in-memory store with `--memory`), makes sure
//! the items table exists, then serves the API until Ctrl+C/SIGTERM.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use itemctl_server::config::{DEFAULT_MAX_CONNECTIONS, DEFAULT_PG_PORT};
use itemctl_server::db::{create_pool, ensure_schema, ItemStore, MemoryItemStore, PgItemStore};
use itemctl_server::{run_server, DbConfig, ItemService, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "ITEMCTL_BIND", default_value = "127.0.0.1:3001")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Keep items in memory instead of Postgres (lost on exit); database
    /// settings are ignored
    #[arg(long)]
    pub memory: bool,

    /// Postgres host
    #[arg(long, env = "PGHOST", default_value = "localhost")]
    pub pg_host: String,

    /// Postgres port
    #[arg(long, env = "PGPORT", default_value_t = DEFAULT_PG_PORT)]
    pub pg_port: u16,

    /// Postgres user
    #[arg(long, env = "PGUSER", default_value = "postgres")]
    pub pg_user: String,

    /// Postgres password
    #[arg(long, env = "PGPASSWORD", hide_env_values = true)]
    pub pg_password: Option<String>,

    /// Postgres database name
    #[arg(long, env = "PGDATABASE", default_value = "postgres")]
    pub pg_database: String,

    /// Full database URL (overrides the --pg-* options)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled connections
    #[arg(long, env = "ITEMCTL_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl ServeArgs {
    fn db_config(&self) -> DbConfig {
        DbConfig {
            host: self.pg_host.clone(),
            port: self.pg_port,
            user: self.pg_user.clone(),
            password: self.pg_password.clone().filter(|p| !p.is_empty()),
            database: self.pg_database.clone(),
            url: self.database_url.clone().filter(|u| !u.is_empty()),
            max_connections: self.max_connections,
        }
    }
}

async fn open_store(args: &ServeArgs) -> Result<Arc<dyn ItemStore>> {
    if args.memory {
        tracing::warn!("Using in-memory item store - items are lost on exit");
        return Ok(Arc::new(MemoryItemStore::new()));
    }

    let db_config = args.db_config();
    let pool = create_pool(&db_config)
        .await
        .with_context(|| format!("Failed to connect to {}", db_config.display_target()))?;
    tracing::info!(target_db = %db_config.display_target(), "Connected to PostgreSQL database");

    ensure_schema(&pool)
        .await
        .context("Failed to initialize items table")?;

    Ok(Arc::new(PgItemStore::new(pool)))
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting itemctl server on {}", args.bind);

    let store = open_store(&args).await?;
    let service = ItemService::new(store);

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(service, config).await.context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ServeArgs {
        let mut argv = vec!["serve"];
        argv.extend_from_slice(args);
        ServeArgs::try_parse_from(argv).expect("valid args")
    }

    #[test]
    fn explicit_flags_build_db_config() {
        let args = parse(&[
            "--pg-host",
            "db",
            "--pg-port",
            "6000",
            "--pg-user",
            "items",
            "--pg-password",
            "pw",
            "--pg-database",
            "inventory",
            "--max-connections",
            "3",
        ]);
        let config = args.db_config();

        assert_eq!(config.host, "db");
        assert_eq!(config.port, 6000);
        assert_eq!(config.user, "items");
        assert_eq!(config.password.as_deref(), Some("pw"));
        assert_eq!(config.database, "inventory");
        assert_eq!(config.max_connections, 3);
    }

    #[test]
    fn bind_accepts_socket_address() {
        let args = ServeArgs::try_parse_from(["serve", "--bind", "0.0.0.0:8080"]).unwrap();
        assert_eq!(args.bind.port(), 8080);
    }

    #[tokio::test]
    async fn memory_store_opens_without_database() {
        let args = parse(&["--memory", "--database-url", "postgres://unreachable:1/none"]);
        let store = open_store(&args).await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }
}

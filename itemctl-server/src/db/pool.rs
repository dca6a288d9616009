//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. The pool is created once
//! at startup and handed to the store; connections are returned to the pool
//! when each query completes, on success and on error.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DbConfig;

/// How long a request waits for a free connection before failing.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the options are invalid or the first connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DbConfig::from_env()).await?;
/// ```
pub async fn create_pool(config: &DbConfig) -> Result<PgPool, sqlx::Error> {
    let options = config.connect_options()?;

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_with(options)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p itemctl-server -- --ignored

    fn test_config() -> DbConfig {
        let mut config = DbConfig::from_env();
        config.url = Some(std::env::var("DATABASE_URL").expect("DATABASE_URL required"));
        config
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let pool = create_pool(&test_config()).await.expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn concurrent_pool_access() {
        let mut config = test_config();
        config.max_connections = 2;
        let pool = create_pool(&config).await.expect("pool creation failed");

        // More tasks than connections: each must get one back from the pool
        let handles: Vec<_> = (0..10)
            .map(|i| {
                let pool = pool.clone();
                tokio::spawn(async move {
                    let result: (i32,) = sqlx::query_as("SELECT $1::int")
                        .bind(i)
                        .fetch_one(&pool)
                        .await
                        .expect("concurrent query failed");
                    result.0
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.await.expect("task panicked");
            assert_eq!(result, i as i32);
        }
    }

    #[tokio::test]
    async fn unreachable_database_fails() {
        let config = DbConfig {
            host: "127.0.0.1".into(),
            port: 1,
            ..DbConfig::default()
        };

        assert!(create_pool(&config).await.is_err());
    }
}

//! Redis-backed URL store implementation.

use super::service::{StoreError, StoreResult, UrlStore};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

/// Redis store for short-code to long-URL mappings.
///
/// Uses connection pooling via `ConnectionManager` for efficient connection
/// reuse. Errors propagate to the caller; the store is primary data and
/// must not silently degrade.
pub struct RedisUrlStore {
    client: ConnectionManager,
}

impl RedisUrlStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, the
    /// connection cannot be established, or the PING health check fails.
    pub async fn connect(redis_url: &str) -> StoreResult<Self> {
        info!("Connecting to Redis at {}", redis_url);

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| StoreError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self { client: manager })
    }
}

#[async_trait]
impl UrlStore for RedisUrlStore {
    async fn get(&self, short_code: &str) -> StoreResult<Option<String>> {
        let mut conn = self.client.clone();

        let value: Option<String> = conn
            .get(short_code)
            .await
            .map_err(|e| StoreError::Operation(format!("GET {}: {}", short_code, e)))?;

        debug!(
            "Store GET: {} -> {}",
            short_code,
            value.as_deref().unwrap_or("(absent)")
        );
        Ok(value)
    }

    async fn set(&self, short_code: &str, long_url: &str) -> StoreResult<()> {
        let mut conn = self.client.clone();

        conn.set::<_, _, ()>(short_code, long_url)
            .await
            .map_err(|e| StoreError::Operation(format!("SET {}: {}", short_code, e)))?;

        debug!("Store SET: {} -> {}", short_code, long_url);
        Ok(())
    }

    // KEYS is a full scan; fine for the small stores this serves, a known
    // limit otherwise.
    async fn keys(&self, pattern: &str) -> StoreResult<Vec<String>> {
        let mut conn = self.client.clone();

        let keys: Vec<String> = conn
            .keys(pattern)
            .await
            .map_err(|e| StoreError::Operation(format!("KEYS {}: {}", pattern, e)))?;

        debug!("Store KEYS {}: {} keys", pattern, keys.len());
        Ok(keys)
    }
}

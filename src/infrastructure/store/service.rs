//! URL store trait and error types.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store connection error: {0}")]
    Connection(String),
    #[error("store operation error: {0}")]
    Operation(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Trait for the key-value store holding URL mappings.
///
/// The store is the system's primary data, not a cache: unlike a fail-open
/// cache layer, every error propagates to the caller, where it surfaces as
/// a 500 response. Implementations must be thread-safe.
///
/// Keys are short codes used verbatim; values are the long URLs. Writing an
/// existing key overwrites it (last-write-wins).
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisUrlStore`] - Redis-backed store
/// - [`crate::infrastructure::store::MemoryStore`] - In-process store for
///   local development and tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlStore: Send + Sync {
    /// Retrieves the long URL for a short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` if the mapping exists
    /// - `Ok(None)` if it does not
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot be reached or the
    /// operation fails.
    async fn get(&self, short_code: &str) -> StoreResult<Option<String>>;

    /// Stores a mapping, overwriting any prior value for the code.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the write fails.
    async fn set(&self, short_code: &str, long_url: &str) -> StoreResult<()>;

    /// Enumerates keys matching a glob pattern (`"*"` for all).
    ///
    /// Enumeration order is store-defined and not guaranteed stable.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the scan fails.
    async fn keys(&self, pattern: &str) -> StoreResult<Vec<String>>;
}

//! In-process URL store for local development and tests.

use super::service::{StoreResult, UrlStore};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::RwLock;
use tracing::debug;

/// A URL store held in process memory.
///
/// Used when Redis is not configured. Mappings are lost on restart, which
/// is acceptable for local development and required for hermetic tests.
///
/// Keys enumerate in sorted order, giving callers a stable ordering the
/// trait itself does not promise.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using MemoryStore (mappings are not persisted)");
        Self::default()
    }
}

#[async_trait]
impl UrlStore for MemoryStore {
    async fn get(&self, short_code: &str) -> StoreResult<Option<String>> {
        let entries = self.entries.read().expect("store lock poisoned");
        Ok(entries.get(short_code).cloned())
    }

    async fn set(&self, short_code: &str, long_url: &str) -> StoreResult<()> {
        let mut entries = self.entries.write().expect("store lock poisoned");
        entries.insert(short_code.to_string(), long_url.to_string());
        Ok(())
    }

    async fn keys(&self, pattern: &str) -> StoreResult<Vec<String>> {
        let entries = self.entries.read().expect("store lock poisoned");
        Ok(entries
            .keys()
            .filter(|key| glob_match(pattern, key))
            .cloned()
            .collect())
    }
}

/// Matches a key against a Redis-style glob pattern supporting `*` only.
fn glob_match(pattern: &str, key: &str) -> bool {
    if pattern == "*" {
        return true;
    }

    let mut remainder = key;
    let mut segments = pattern.split('*');

    // First segment is anchored at the start.
    if let Some(first) = segments.next() {
        if !remainder.starts_with(first) {
            return false;
        }
        remainder = &remainder[first.len()..];
    }

    let mut last: Option<&str> = None;
    for segment in segments {
        if let Some(prev) = last.take() {
            match remainder.find(prev) {
                Some(pos) => remainder = &remainder[pos + prev.len()..],
                None => return false,
            }
        }
        last = Some(segment);
    }

    match last {
        // Last segment is anchored at the end.
        Some(segment) => remainder.ends_with(segment),
        // No '*' in the pattern at all: exact match required.
        None => remainder.is_empty(),
    }
}

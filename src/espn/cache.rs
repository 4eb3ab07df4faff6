use ahash::RandomState;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Cache lifetimes per data class, in seconds.
pub mod ttl {
    pub const LIVE_SCORES: i64 = 60;
    pub const TOURNAMENTS: i64 = 120;
    pub const SCOREBOARD_LOOKUP: i64 = 1800;
    pub const FULL_SCHEDULE: i64 = 21_600;
}

#[derive(Clone, Debug)]
pub struct CacheEntry {
    pub body: String,
    pub cached_time: DateTime<Utc>,
}

pub type CacheMap = Arc<RwLock<HashMap<String, CacheEntry, RandomState>>>;

#[must_use]
pub fn new_cache_map() -> CacheMap {
    Arc::new(RwLock::new(HashMap::default()))
}

/// Returns the cached body for `key` when it is younger than `ttl_seconds`.
/// `force_refresh` bypasses the cache without evicting it.
pub async fn cache_lookup(
    cache: &CacheMap,
    key: &str,
    ttl_seconds: i64,
    force_refresh: bool,
) -> Option<String> {
    if force_refresh {
        return None;
    }
    let map = cache.read().await;
    let entry = map.get(key)?;
    let elapsed = Utc::now() - entry.cached_time;
    if elapsed < chrono::Duration::seconds(ttl_seconds) {
        Some(entry.body.clone())
    } else {
        None
    }
}

pub async fn cache_store(cache: &CacheMap, key: &str, body: String) {
    let mut map = cache.write().await;
    map.insert(
        key.to_string(),
        CacheEntry {
            body,
            cached_time: Utc::now(),
        },
    );
}

pub async fn cache_clear(cache: &CacheMap) {
    cache.write().await.clear();
}

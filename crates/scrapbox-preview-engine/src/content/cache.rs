use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use super::tree::PreviewTree;
use crate::models::ContentKey;

#[derive(Debug, Clone)]
struct CacheEntry {
    tree: PreviewTree,
    inserted_at: Instant,
}

/// Rendered pages keyed by [`ContentKey`], valid for a fixed time-to-live.
///
/// Expiry is checked on read only: a stale entry is reported as absent but
/// stays in the map until the next `put` for that key replaces it. Reads do
/// not extend an entry's lifetime. Both `put` and `get` copy the tree, so a
/// caller mutating its copy can never affect the cached one.
#[derive(Debug)]
pub struct ContentCache {
    ttl: Duration,
    entries: HashMap<ContentKey, CacheEntry>,
}

impl ContentCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, key: &ContentKey) -> Option<PreviewTree> {
        self.get_at(key, Instant::now())
    }

    /// Returns the entry for `key` if it is younger than the TTL at `now`.
    pub fn get_at(&self, key: &ContentKey, now: Instant) -> Option<PreviewTree> {
        self.entries
            .get(key)
            .filter(|entry| now.saturating_duration_since(entry.inserted_at) < self.ttl)
            .map(|entry| entry.tree.clone())
    }

    pub fn put(&mut self, key: ContentKey, tree: &PreviewTree) {
        self.put_at(key, tree, Instant::now());
    }

    pub fn put_at(&mut self, key: ContentKey, tree: &PreviewTree, now: Instant) {
        self.entries.insert(
            key,
            CacheEntry {
                tree: tree.clone(),
                inserted_at: now,
            },
        );
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

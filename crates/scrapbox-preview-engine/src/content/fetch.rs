use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};

use super::cache::ContentCache;
use super::tree::PreviewTree;
use crate::io::{FetchError, PageTransport};
use crate::models::ContentKey;
use crate::sync::lock;

type PendingFetch = Shared<BoxFuture<'static, Result<PreviewTree, FetchError>>>;

/// Resolves pages to preview trees, cache first.
///
/// A miss issues exactly one transport request and parses the result. While
/// that request is in flight, further `resolve` calls for the same key wait
/// on it instead of issuing their own.
pub struct ContentFetcher {
    transport: Arc<dyn PageTransport>,
    cache: Mutex<ContentCache>,
    in_flight: Mutex<HashMap<ContentKey, PendingFetch>>,
}

impl ContentFetcher {
    pub fn new(transport: Arc<dyn PageTransport>, cache_duration: Duration) -> Self {
        Self {
            transport,
            cache: Mutex::new(ContentCache::new(cache_duration)),
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    /// Resolves `title` in `namespace`. Spaces in the title are normalized
    /// before the cache and transport see it.
    pub async fn resolve(&self, namespace: &str, title: &str) -> Result<PreviewTree, FetchError> {
        self.resolve_key(&ContentKey::new(namespace, title)).await
    }

    pub async fn resolve_key(&self, key: &ContentKey) -> Result<PreviewTree, FetchError> {
        let cached = lock(&self.cache).get(key);
        if let Some(tree) = cached {
            log::debug!("cache hit for {key}");
            return Ok(tree);
        }

        let pending = self.pending_fetch(key);
        let result = pending.await;

        lock(&self.in_flight).remove(key);
        if let Ok(tree) = &result {
            lock(&self.cache).put(key.clone(), tree);
        }
        result
    }

    /// Number of cached pages, expired ones included.
    pub fn cached_pages(&self) -> usize {
        lock(&self.cache).len()
    }

    fn pending_fetch(&self, key: &ContentKey) -> PendingFetch {
        let mut in_flight = lock(&self.in_flight);
        if let Some(pending) = in_flight.get(key) {
            log::debug!("joining in-flight fetch for {key}");
            return pending.clone();
        }

        log::debug!("cache miss for {key}, fetching");
        let transport = Arc::clone(&self.transport);
        let owned_key = key.clone();
        let pending = async move {
            transport
                .fetch_page(&owned_key)
                .await
                .map(|page| PreviewTree::from_page(&page, owned_key.namespace()))
        }
        .boxed()
        .shared();
        in_flight.insert(key.clone(), pending.clone());
        pending
    }
}

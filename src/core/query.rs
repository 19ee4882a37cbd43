//! Key-addressed cache of async query results.
//!
//! A [`QueryOptions`] describes one query: its key, how to fetch it, and how
//! long a result stays fresh. [`QueryClient::fetch_query`] returns a fresh
//! cached value when there is one, joins an in-flight fetch for the same key
//! when there is one, and only otherwise runs the fetcher.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use futures_util::future::{FutureExt, LocalBoxFuture, Shared};

use crate::core::error::FetchError;
use crate::utils::format::now_ms;

/// Hierarchical cache key, e.g. `["files", "gdrive", "docs"]`.
pub type QueryKey = Vec<String>;

type AnyData = Rc<dyn Any>;
type SharedFetch = Shared<LocalBoxFuture<'static, Result<AnyData, FetchError>>>;
type Fetcher<T> = Rc<dyn Fn() -> LocalBoxFuture<'static, Result<T, FetchError>>>;

/// Query descriptor: cache key plus fetcher.
pub struct QueryOptions<T> {
    key: QueryKey,
    fetcher: Fetcher<T>,
    stale_time_ms: f64,
}

impl<T: 'static> QueryOptions<T> {
    pub fn new<F, Fut>(key: QueryKey, fetcher: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<T, FetchError>> + 'static,
    {
        Self {
            key,
            fetcher: Rc::new(move || fetcher().boxed_local()),
            stale_time_ms: 0.0,
        }
    }

    /// How long a fetched value is served from cache without refetching.
    pub fn stale_time(mut self, ms: f64) -> Self {
        self.stale_time_ms = ms;
        self
    }

    pub fn key(&self) -> &QueryKey {
        &self.key
    }
}

impl<T> Clone for QueryOptions<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            fetcher: Rc::clone(&self.fetcher),
            stale_time_ms: self.stale_time_ms,
        }
    }
}

struct CacheEntry {
    data: AnyData,
    updated_at: f64,
}

#[derive(Default)]
struct QueryCache {
    entries: HashMap<QueryKey, CacheEntry>,
    in_flight: HashMap<QueryKey, SharedFetch>,
}

fn downcast<T: Clone + 'static>(data: &AnyData) -> Result<T, FetchError> {
    data.downcast_ref::<T>()
        .cloned()
        .ok_or(FetchError::CacheTypeMismatch)
}

/// Shared handle to the query cache. Clones point at the same cache.
#[derive(Clone, Default)]
pub struct QueryClient {
    cache: Rc<RefCell<QueryCache>>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a query, or return its cached value while it is fresh.
    ///
    /// Concurrent calls for the same key share a single fetch. Failed
    /// fetches are not cached.
    pub async fn fetch_query<T: Clone + 'static>(
        &self,
        options: &QueryOptions<T>,
    ) -> Result<T, FetchError> {
        let existing = {
            let cache = self.cache.borrow();

            if let Some(entry) = cache.entries.get(&options.key)
                && now_ms() - entry.updated_at < options.stale_time_ms
            {
                return downcast(&entry.data);
            }

            cache.in_flight.get(&options.key).cloned()
        };

        // The fetcher runs with the cache unborrowed; it may read the client.
        let pending = match existing {
            Some(pending) => pending,
            None => {
                let fetch = (options.fetcher)();
                let pending = async move { fetch.await.map(|data| Rc::new(data) as AnyData) }
                    .boxed_local()
                    .shared();
                self.cache
                    .borrow_mut()
                    .in_flight
                    .insert(options.key.clone(), pending.clone());
                pending
            }
        };

        let result = pending.clone().await;

        // First caller to observe completion settles the cache.
        {
            let mut cache = self.cache.borrow_mut();
            let settled_here = cache
                .in_flight
                .get(&options.key)
                .is_some_and(|current| current.ptr_eq(&pending));
            if settled_here {
                cache.in_flight.remove(&options.key);
                if let Ok(data) = &result {
                    cache.entries.insert(
                        options.key.clone(),
                        CacheEntry {
                            data: Rc::clone(data),
                            updated_at: now_ms(),
                        },
                    );
                }
            }
        }

        downcast(&result?)
    }

    /// Cached value for a key, fresh or not.
    pub fn get_query_data<T: Clone + 'static>(&self, key: &[String]) -> Option<T> {
        let cache = self.cache.borrow();
        cache
            .entries
            .get(key)
            .and_then(|entry| entry.data.downcast_ref::<T>().cloned())
    }

    /// Mark every entry whose key starts with `prefix` as stale.
    pub fn invalidate(&self, prefix: &[String]) {
        let mut cache = self.cache.borrow_mut();
        for (key, entry) in cache.entries.iter_mut() {
            if key.starts_with(prefix) {
                entry.updated_at = f64::NEG_INFINITY;
            }
        }
    }

    /// Drop all cached data and forget fetches still in flight.
    ///
    /// A forgotten fetch still resolves for its own callers but is never
    /// joined or written back.
    pub fn clear(&self) {
        let mut cache = self.cache.borrow_mut();
        cache.entries.clear();
        cache.in_flight.clear();
    }
}

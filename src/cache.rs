//! Memoizing decorator over any [`BreedFetcher`].
//!
//! [`CachingFetcher`] caches successful lookups to lessen the load on the
//! underlying data source and records how many calls actually reached it.
//! Failed lookups are *not* cached: a breed that could not be resolved is
//! retried on every call, so transient upstream trouble never poisons the
//! cache.
//!
//! # Architecture
//!
//! - Moka-backed future cache, keyed on the normalized breed name
//!   (trimmed, lowercased). Unbounded, no expiry: once a breed is cached it
//!   stays cached for the lifetime of the instance.
//! - The miss path goes through moka's `try_get_with`, so concurrent misses
//!   for the same key coalesce into a single delegate call and `Err` results
//!   leave no entry behind.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use moka::future::Cache;
use tracing::{debug, warn};

use crate::traits::{BreedFetcher, SubBreeds, normalize_breed};
use crate::{GarmrError, Result};

/// A [`BreedFetcher`] that caches the results of another [`BreedFetcher`].
///
/// The cache maps the normalized name of a breed to its list of sub-breed
/// names. Entries are added only by successful lookups and are never evicted
/// or overwritten. [`calls_made()`](CachingFetcher::calls_made) reports how
/// many lookups reached the delegate, counting failures as well as
/// successes; cache hits are not counted.
pub struct CachingFetcher<F> {
    delegate: F,
    entries: Cache<String, SubBreeds>,
    calls_made: AtomicU64,
}

impl<F> CachingFetcher<F> {
    /// Wrap a delegate fetcher with an empty cache and a zeroed call counter.
    pub fn new(delegate: F) -> Self {
        Self {
            delegate,
            entries: Cache::builder().build(),
            calls_made: AtomicU64::new(0),
        }
    }

    /// Number of calls that reached the delegate fetcher.
    ///
    /// Incremented exactly once per delegate invocation, whether it
    /// succeeded or failed. Cache hits leave it unchanged.
    pub fn calls_made(&self) -> u64 {
        self.calls_made.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl<F: BreedFetcher> BreedFetcher for CachingFetcher<F> {
    async fn sub_breeds(&self, breed: &str) -> Result<SubBreeds> {
        let key = normalize_breed(breed);

        // try_get_with runs the future only if the key is absent; concurrent
        // lookups for the same key share one delegate call, and an Err is
        // never stored.
        let lookup = async {
            self.calls_made.fetch_add(1, Ordering::Relaxed);
            debug!(breed = %key, "cache miss, querying delegate");
            self.delegate.sub_breeds(&key).await
        };

        self.entries
            .try_get_with(key.clone(), lookup)
            .await
            .map_err(|e: Arc<GarmrError>| {
                warn!(breed = %key, error = %e, "delegate lookup failed");
                Arc::try_unwrap(e).unwrap_or_else(|shared| (*shared).clone())
            })
    }
}

//! Single-lock LFU cache.
//!
//! One `parking_lot::Mutex` guards one cache, so every operation is serialized
//! and eviction picks the globally least frequent entry, exactly as
//! [`LfuCache`](crate::LfuCache) would.

extern crate alloc;

use crate::config::LfuCacheConfig;
use crate::error::ConfigError;
use crate::lfu::LfuSegment;
use crate::metrics::{CacheMetrics, LfuCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use parking_lot::Mutex;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;

/// A thread-safe LFU cache behind a single lock.
///
/// # Examples
///
/// ```
/// use freq_cache::concurrent::SharedLfuCache;
///
/// let cache = SharedLfuCache::new(2);
/// cache.put(1, "one");
/// cache.put(2, "two");
/// cache.get(&1);
///
/// assert_eq!(cache.put(3, "three"), Some((2, "two")));
/// assert_eq!(cache.frequency(&1), Some(2));
/// ```
pub struct SharedLfuCache<K, V, S = DefaultHashBuilder> {
    inner: Mutex<LfuSegment<K, V, S>>,
}

impl<K: Hash + Eq, V> SharedLfuCache<K, V> {
    /// Creates a cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self::init(LfuCacheConfig::new(capacity))
    }

    /// Creates a cache from a configuration.
    pub fn init(config: LfuCacheConfig) -> Self {
        Self::init_with_hasher(config, DefaultHashBuilder::default())
    }

    /// Creates a cache from a signed capacity, rejecting negative values.
    pub fn try_new(capacity: i64) -> Result<Self, ConfigError> {
        LfuCacheConfig::try_from(capacity).map(Self::init)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> SharedLfuCache<K, V, S> {
    /// Creates a cache from a configuration and a hash builder.
    pub fn init_with_hasher(config: LfuCacheConfig, hash_builder: S) -> Self {
        Self {
            inner: Mutex::new(LfuSegment::init(config, hash_builder)),
        }
    }

    /// Returns the maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.inner.lock().cap()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if the cache holds nothing.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Gets a clone of the value and counts the access.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    /// Applies `f` to the value while holding the lock. Counts the access.
    pub fn get_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&V) -> R,
    {
        self.inner.lock().get(key).map(f)
    }

    /// Inserts or updates a key. See [`LfuCache::put`](crate::LfuCache::put).
    pub fn put(&self, key: K, value: V) -> Option<(K, V)>
    where
        K: Clone,
    {
        self.inner.lock().put(key, value)
    }

    /// Removes a key, returning its value.
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().remove(key)
    }

    /// Returns `true` if the key is cached. Does not count an access.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().contains_key(key)
    }

    /// Returns the access frequency of `key` without counting an access.
    pub fn frequency<Q>(&self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().frequency(key)
    }

    /// Removes and returns the eviction candidate.
    pub fn pop(&self) -> Option<(K, V)> {
        self.inner.lock().pop()
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.inner.lock().clear()
    }

    /// Returns a snapshot of the counters.
    pub fn stats(&self) -> LfuCacheMetrics {
        self.inner.lock().metrics().clone()
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for SharedLfuCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.inner.lock().metrics().to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "SharedLFU"
    }
}

impl<K, V, S> fmt::Debug for SharedLfuCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedLfuCache")
            .field("inner", &*self.inner.lock())
            .finish()
    }
}

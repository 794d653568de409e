//! Concurrent LFU Cache Implementation
//!
//! A thread-safe LFU cache using lock striping (segmented storage). This is the
//! multi-threaded counterpart to [`LfuCache`](crate::LfuCache) for workloads
//! where a single lock would be the bottleneck.
//!
//! # How It Works
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                      ConcurrentLfuCache                              │
//! │                                                                      │
//! │  hash(key) % N  ──▶  Segment Selection                               │
//! │                                                                      │
//! │  ┌──────────────┐ ┌──────────────┐     ┌──────────────┐              │
//! │  │  Segment 0   │ │  Segment 1   │ ... │  Segment N-1 │              │
//! │  │  ┌────────┐  │ │  ┌────────┐  │     │  ┌────────┐  │              │
//! │  │  │ Mutex  │  │ │  │ Mutex  │  │     │  │ Mutex  │  │              │
//! │  │  └────┬───┘  │ │  └────┬───┘  │     │  └────┬───┘  │              │
//! │  │  ┌────▼───┐  │ │  ┌────▼───┐  │     │  ┌────▼───┐  │              │
//! │  │  │  LFU   │  │ │  │  LFU   │  │     │  │  LFU   │  │              │
//! │  │  └────────┘  │ │  └────────┘  │     │  └────────┘  │              │
//! │  └──────────────┘ └──────────────┘     └──────────────┘              │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The total capacity is split exactly: the first `capacity % N` segments hold
//! one extra entry, so the segment capacities always sum to the configured
//! total.
//!
//! ## Trade-offs
//!
//! Frequency tracking is per segment. A put into a full segment evicts the
//! least frequent entry *of that segment*, which may be more popular than an
//! entry living in another segment. Use
//! [`SharedLfuCache`](super::SharedLfuCache) when exact global LFU order
//! matters more than throughput.

extern crate alloc;

use crate::config::ConcurrentLfuCacheConfig;
use crate::config::LfuCacheConfig;
use crate::error::ConfigError;
use crate::lfu::LfuSegment;
use crate::metrics::{CacheMetrics, LfuCacheMetrics};
use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use parking_lot::Mutex;
use tracing::debug;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;

/// A thread-safe LFU cache with segmented storage for high concurrency.
///
/// # Examples
///
/// ```
/// use freq_cache::concurrent::ConcurrentLfuCache;
/// use freq_cache::config::ConcurrentLfuCacheConfig;
///
/// let config = ConcurrentLfuCacheConfig::new(10).with_segments(4).unwrap();
/// let cache: ConcurrentLfuCache<String, u32> = ConcurrentLfuCache::init(config);
///
/// assert_eq!(cache.capacity(), 10);
/// assert_eq!(cache.segment_count(), 4);
/// ```
pub struct ConcurrentLfuCache<K, V, S = DefaultHashBuilder> {
    segments: Box<[Mutex<LfuSegment<K, V, S>>]>,
    hash_builder: S,
}

impl<K: Hash + Eq, V> ConcurrentLfuCache<K, V, DefaultHashBuilder> {
    /// Creates a new concurrent LFU cache with the specified total capacity
    /// and the default segment count.
    pub fn new(capacity: usize) -> Self {
        Self::init(ConcurrentLfuCacheConfig::new(capacity))
    }

    /// Creates a cache from a signed capacity, rejecting negative values.
    pub fn try_new(capacity: i64) -> Result<Self, ConfigError> {
        ConcurrentLfuCacheConfig::try_new(capacity).map(Self::init)
    }

    /// Creates a new concurrent LFU cache with a custom segment count.
    pub fn with_segments(capacity: usize, segment_count: usize) -> Result<Self, ConfigError> {
        ConcurrentLfuCacheConfig::new(capacity)
            .with_segments(segment_count)
            .map(Self::init)
    }

    /// Creates a cache from a configuration.
    pub fn init(config: ConcurrentLfuCacheConfig) -> Self {
        Self::init_with_hasher(config, DefaultHashBuilder::default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher + Clone> ConcurrentLfuCache<K, V, S> {
    /// Creates a cache from a configuration and a hash builder.
    ///
    /// The hash builder selects the segment and is cloned into every segment's
    /// lookup table.
    pub fn init_with_hasher(config: ConcurrentLfuCacheConfig, hash_builder: S) -> Self {
        let segments: Vec<_> = config
            .segment_capacities()
            .into_iter()
            .map(|capacity| {
                Mutex::new(LfuSegment::init(
                    LfuCacheConfig::new(capacity),
                    hash_builder.clone(),
                ))
            })
            .collect();

        debug!(
            capacity = config.capacity(),
            segments = segments.len(),
            "created concurrent LFU cache"
        );

        Self {
            segments: segments.into_boxed_slice(),
            hash_builder,
        }
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> ConcurrentLfuCache<K, V, S> {
    #[inline]
    fn segment_index<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash,
    {
        (self.hash_builder.hash_one(key) as usize) % self.segments.len()
    }

    #[inline]
    fn segment_for<Q>(&self, key: &Q) -> &Mutex<LfuSegment<K, V, S>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash,
    {
        &self.segments[self.segment_index(key)]
    }

    /// Returns the total capacity across all segments.
    pub fn capacity(&self) -> usize {
        self.segments.iter().map(|s| s.lock().cap()).sum()
    }

    /// Returns the number of segments in the cache.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Returns the total number of entries across all segments.
    ///
    /// Segments are locked one at a time, so under concurrent writes the
    /// result is a point-in-time estimate.
    pub fn len(&self) -> usize {
        self.segments.iter().map(|s| s.lock().len()).sum()
    }

    /// Returns `true` if the cache contains no entries.
    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(|s| s.lock().is_empty())
    }

    /// Gets a value from the cache and counts the access.
    ///
    /// This clones the value to avoid holding the lock. For zero-copy access,
    /// use `get_with()` instead.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone,
    {
        self.segment_for(key).lock().get(key).cloned()
    }

    /// Gets a value and applies a function to it while holding the lock.
    ///
    /// This is more efficient than `get()` when you only need to read from the value,
    /// as it avoids cloning.
    pub fn get_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&V) -> R,
    {
        self.segment_for(key).lock().get(key).map(f)
    }

    /// Inserts a key-value pair into the cache.
    ///
    /// If the key's segment is at capacity, the least frequently used entry of
    /// that segment is evicted and returned.
    pub fn put(&self, key: K, value: V) -> Option<(K, V)>
    where
        K: Clone,
    {
        self.segment_for(&key).lock().put(key, value)
    }

    /// Removes a key from the cache, returning the value if it existed.
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment_for(key).lock().remove(key)
    }

    /// Returns `true` if the cache contains the specified key. Does not count an access.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment_for(key).lock().contains_key(key)
    }

    /// Returns the access frequency of `key` without counting an access.
    pub fn frequency<Q>(&self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment_for(key).lock().frequency(key)
    }

    /// Clears all entries from the cache.
    pub fn clear(&self) {
        for segment in self.segments.iter() {
            segment.lock().clear();
        }
    }

    /// Returns the counters of all segments merged into one.
    pub fn stats(&self) -> LfuCacheMetrics {
        let mut total = LfuCacheMetrics::new(0);
        for segment in self.segments.iter() {
            total.merge(segment.lock().metrics());
        }
        total
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for ConcurrentLfuCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.stats().to_btreemap();
        metrics.insert("segments".into(), self.segments.len() as f64);
        metrics
    }

    fn algorithm_name(&self) -> &'static str {
        "ConcurrentLFU"
    }
}

impl<K, V, S> fmt::Debug for ConcurrentLfuCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len: usize = self.segments.iter().map(|s| s.lock().stored()).sum();
        f.debug_struct("ConcurrentLfuCache")
            .field("segment_count", &self.segments.len())
            .field("total_len", &len)
            .finish()
    }
}

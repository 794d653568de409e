//! Cache Metrics System
//!
//! Counters collected by the cache as it runs, reported through the
//! [`CacheMetrics`] trait as a `BTreeMap<String, f64>`.
//!
//! # Why BTreeMap over HashMap?
//!
//! - **Deterministic ordering**: Metrics always appear in consistent order
//! - **Reproducible output**: Test and benchmark comparisons diff cleanly
//!
//! The performance difference is negligible with ~20 metric keys.
//!
//! Recording a metric is a handful of integer additions and never walks the
//! cache, so metrics stay on permanently.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

pub mod lfu;

pub use lfu::LfuCacheMetrics;

/// Counters common to any bounded cache.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CoreCacheMetrics {
    /// Total number of lookups (`get` and `get_mut`)
    pub requests: u64,

    /// Lookups that found the key
    pub cache_hits: u64,

    /// `put` calls that introduced a new key
    pub insertions: u64,

    /// `put` calls that overwrote an existing key
    pub updates: u64,

    /// Entries dropped to make room for a new key, including explicit `pop`
    pub evictions: u64,

    /// Entries dropped through `remove`
    pub removals: u64,

    /// Entries currently stored
    pub entries: u64,

    /// Maximum number of entries
    pub capacity: u64,
}

impl CoreCacheMetrics {
    /// Creates an empty set of counters for a cache of `capacity` entries.
    pub fn new(capacity: u64) -> Self {
        Self {
            capacity,
            ..Default::default()
        }
    }

    /// Records a lookup that found its key.
    pub fn record_hit(&mut self) {
        self.requests += 1;
        self.cache_hits += 1;
    }

    /// Records a lookup that found nothing.
    pub fn record_miss(&mut self) {
        self.requests += 1;
    }

    /// Records a new key entering the cache.
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
        self.entries += 1;
    }

    /// Records an existing key being overwritten.
    pub fn record_update(&mut self) {
        self.updates += 1;
    }

    /// Records a capacity-driven eviction.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
        self.entries = self.entries.saturating_sub(1);
    }

    /// Records an explicit removal.
    pub fn record_removal(&mut self) {
        self.removals += 1;
        self.entries = self.entries.saturating_sub(1);
    }

    /// Records the cache being emptied.
    pub fn record_clear(&mut self) {
        self.entries = 0;
    }

    /// Number of lookups that missed.
    pub fn cache_misses(&self) -> u64 {
        self.requests - self.cache_hits
    }

    /// Hit ratio between 0.0 and 1.0, or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Miss ratio between 0.0 and 1.0, or 0.0 if no lookups have been made.
    pub fn miss_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_misses() as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Fraction of capacity in use, or 0.0 for a zero-capacity cache.
    pub fn cache_utilization(&self) -> f64 {
        if self.capacity > 0 {
            self.entries as f64 / self.capacity as f64
        } else {
            0.0
        }
    }

    /// Adds another set of counters into this one (used to aggregate shards).
    pub fn merge(&mut self, other: &CoreCacheMetrics) {
        self.requests += other.requests;
        self.cache_hits += other.cache_hits;
        self.insertions += other.insertions;
        self.updates += other.updates;
        self.evictions += other.evictions;
        self.removals += other.removals;
        self.entries += other.entries;
        self.capacity += other.capacity;
    }

    /// Converts the counters and derived rates to a BTreeMap for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        metrics.insert("cache_hits".to_string(), self.cache_hits as f64);
        metrics.insert("cache_misses".to_string(), self.cache_misses() as f64);
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("insertions".to_string(), self.insertions as f64);
        metrics.insert("removals".to_string(), self.removals as f64);
        metrics.insert("requests".to_string(), self.requests as f64);
        metrics.insert("updates".to_string(), self.updates as f64);

        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());

        metrics.insert("entries".to_string(), self.entries as f64);
        metrics.insert("capacity".to_string(), self.capacity as f64);
        metrics.insert("cache_utilization".to_string(), self.cache_utilization());

        let writes = self.insertions + self.updates;
        if writes > 0 {
            metrics.insert(
                "eviction_rate".to_string(),
                self.evictions as f64 / writes as f64,
            );
        }

        metrics
    }
}

/// Uniform metrics reporting for every cache type in the crate.
pub trait CacheMetrics {
    /// Returns all metrics as key-value pairs in deterministic order.
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Short identifier of the cache algorithm (e.g. "LFU").
    fn algorithm_name(&self) -> &'static str;
}

//! LFU Cache Metrics
//!
//! Frequency-distribution counters on top of [`CoreCacheMetrics`].

extern crate alloc;

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// LFU-specific metrics (extends CoreCacheMetrics)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LfuCacheMetrics {
    /// Core metrics common to all caches
    pub core: CoreCacheMetrics,

    /// Current eviction tier, 0 when the cache is empty
    pub min_frequency: u64,

    /// Highest frequency any entry has reached
    pub max_frequency: u64,

    /// Total number of promotions (every hit and every update is one)
    pub frequency_increments: u64,

    /// Number of populated frequency tiers
    pub active_frequency_levels: u64,
}

impl LfuCacheMetrics {
    /// Creates zeroed metrics for a cache of `capacity` entries.
    pub fn new(capacity: u64) -> Self {
        Self {
            core: CoreCacheMetrics::new(capacity),
            min_frequency: 0,
            max_frequency: 0,
            frequency_increments: 0,
            active_frequency_levels: 0,
        }
    }

    /// Records a promotion to `new_frequency`.
    pub fn record_frequency_increment(&mut self, new_frequency: u64) {
        self.frequency_increments += 1;
        self.max_frequency = self.max_frequency.max(new_frequency);
    }

    /// Refreshes the tier gauges after a mutation.
    ///
    /// `min_frequency` is `None` for an empty cache and is reported as 0.
    pub fn observe_levels(&mut self, min_frequency: Option<u64>, levels: usize) {
        self.min_frequency = min_frequency.unwrap_or(0);
        self.active_frequency_levels = levels as u64;
        if self.max_frequency == 0 && min_frequency.is_some() {
            self.max_frequency = self.min_frequency;
        }
    }

    /// Average number of promotions per hit, or 0.0 with no hits.
    ///
    /// Updates also promote, so this exceeds 1.0 on write-heavy workloads.
    pub fn average_frequency(&self) -> f64 {
        if self.core.cache_hits > 0 {
            self.frequency_increments as f64 / self.core.cache_hits as f64
        } else {
            0.0
        }
    }

    /// Spread between the hottest frequency seen and the current eviction tier.
    pub fn frequency_range(&self) -> u64 {
        self.max_frequency.saturating_sub(self.min_frequency)
    }

    /// Folds a shard's metrics into this aggregate.
    ///
    /// Counters add up; `min_frequency` keeps the lowest non-zero tier and
    /// `max_frequency` the highest.
    pub fn merge(&mut self, other: &LfuCacheMetrics) {
        self.core.merge(&other.core);
        self.min_frequency = match (self.min_frequency, other.min_frequency) {
            (0, m) | (m, 0) => m,
            (a, b) => a.min(b),
        };
        self.max_frequency = self.max_frequency.max(other.max_frequency);
        self.frequency_increments += other.frequency_increments;
        self.active_frequency_levels += other.active_frequency_levels;
    }

    /// Converts LFU metrics to a BTreeMap for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.core.to_btreemap();

        metrics.insert("min_frequency".to_string(), self.min_frequency as f64);
        metrics.insert("max_frequency".to_string(), self.max_frequency as f64);
        metrics.insert("frequency_range".to_string(), self.frequency_range() as f64);
        metrics.insert(
            "frequency_increments".to_string(),
            self.frequency_increments as f64,
        );
        metrics.insert(
            "active_frequency_levels".to_string(),
            self.active_frequency_levels as f64,
        );
        metrics.insert("average_frequency".to_string(), self.average_frequency());

        metrics
    }
}

impl CacheMetrics for LfuCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LFU"
    }
}

#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## How Eviction Picks a Victim
//!
//! ```text
//!   frequency index (sparse)           evict from here
//!  ┌──────┬───────────────────────┐          │
//!  │  f=1 │ [d] ⇄ [b]             │ ◀── min ─┘ back of the tier = least recent
//!  │  f=2 │ [a]                   │
//!  │  f=7 │ [c] ⇄ [e]             │
//!  └──────┴───────────────────────┘
//! ```
//!
//! The minimum frequency is tracked incrementally: inserting a new key resets
//! it to 1, and promoting the last member out of the minimum tier moves it up
//! by one. Neither `get` nor `put` ever scans.
//!
//! ## Performance Characteristics
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `get` / `get_mut` | O(1) |
//! | `put` (insert, update, evict) | O(1) |
//! | `peek` / `contains_key` / `frequency` | O(1) |
//! | `remove` / `pop` | O(1), plus O(tiers) when the minimum tier empties |
//!
//! ## Configuration
//!
//! ```rust
//! use freq_cache::LfuCache;
//! use freq_cache::config::LfuCacheConfig;
//!
//! let mut cache: LfuCache<&str, u32> = LfuCache::init(LfuCacheConfig { capacity: 2 });
//! cache.put("rare", 1);
//! cache.put("popular", 2);
//!
//! for _ in 0..10 { cache.get(&"popular"); }
//!
//! cache.put("new", 3);  // "rare" evicted (lowest frequency)
//! assert!(cache.get(&"popular").is_some());
//! assert!(cache.get(&"rare").is_none());
//! ```
//!
//! ## Metrics
//!
//! ```rust
//! use freq_cache::LfuCache;
//! use freq_cache::metrics::CacheMetrics;
//!
//! let mut cache = LfuCache::new(8);
//! cache.put("a", 1);
//! cache.get(&"a");
//! cache.get(&"b");
//!
//! let metrics = cache.metrics();
//! assert_eq!(metrics["hit_rate"], 0.5);
//! assert_eq!(cache.algorithm_name(), "LFU");
//! ```
//!
//! ## Modules
//!
//! - [`lfu`]: the cache itself
//! - [`entry`]: the stored entry and its frequency counter
//! - [`config`]: configuration structures
//! - [`error`]: configuration errors
//! - [`metrics`]: metrics collection for cache performance monitoring
//! - `concurrent`: thread-safe wrappers (requires the `concurrent` feature)

#![no_std]

#[cfg(not(feature = "hashbrown"))]
extern crate std;

/// Cache entry type.
///
/// A `CacheEntry<K, V>` holds the key, the value and the entry's access
/// frequency.
pub mod entry;

/// Slot arena that owns every entry.
pub(crate) mod slab;

/// Recency-ordered buckets linked through slab handles.
///
/// **Note**: This module is internal infrastructure. Bucket membership must be
/// kept consistent with each entry's frequency by the caller.
pub(crate) mod list;

/// Frequency to bucket index with incremental minimum tracking.
pub(crate) mod frequency;

/// Cache configuration structures.
pub mod config;

/// Error types.
pub mod error;

/// Least Frequently Used (LFU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least frequently used items
/// when capacity is reached, breaking ties by least recent use.
pub mod lfu;

/// Cache metrics system.
///
/// Counters for hits, misses, insertions and evictions, plus LFU-specific
/// frequency gauges, reported through a common trait.
pub mod metrics;

/// Thread-safe cache implementations.
///
/// Available when the `concurrent` feature is enabled.
#[cfg(feature = "concurrent")]
pub mod concurrent;

pub use entry::CacheEntry;
pub use error::ConfigError;
pub use lfu::LfuCache;

#[cfg(feature = "concurrent")]
pub use concurrent::{ConcurrentLfuCache, SharedLfuCache};

//! Cache Configuration Module
//!
//! Configuration structures for the LFU cache and its concurrent wrappers.
//!
//! # Design Philosophy
//!
//! The single-threaded config has a public field for simple instantiation:
//!
//! - **Simple**: Just create the struct with the capacity set
//! - **Checked conversions**: Signed capacities go through `TryFrom` and are
//!   rejected when negative instead of being clamped
//!
//! # Sizing Guidelines
//!
//! `capacity` is the maximum number of entries. Each entry costs roughly the
//! key twice (lookup table and entry), the value once, and about 48 bytes of
//! links, frequency, and table overhead.
//!
//! ```text
//! Total Memory ≈ capacity × (2 × size_of::<K>() + size_of::<V>() + 48)
//! ```
//!
//! A capacity of zero is legal and yields a cache that never stores anything.
//!
//! | Config | Cache | Description |
//! |--------|-------|-------------|
//! | `LfuCacheConfig` | [`LfuCache`](crate::LfuCache) | Least Frequently Used |
//! | `ConcurrentLfuCacheConfig` | `ConcurrentLfuCache` | Sharded, thread-safe LFU (requires `concurrent`) |
//!
//! # Examples
//!
//! ```
//! use freq_cache::config::LfuCacheConfig;
//! use freq_cache::LfuCache;
//!
//! let config = LfuCacheConfig { capacity: 1000 };
//! let cache: LfuCache<String, i32> = LfuCache::init(config);
//! assert_eq!(cache.cap(), 1000);
//!
//! // Capacities from signed sources (CLI flags, config files) are checked.
//! assert!(LfuCacheConfig::try_from(-3i64).is_err());
//! ```

pub mod lfu;

#[cfg(feature = "concurrent")]
pub mod concurrent_lfu;

pub use lfu::LfuCacheConfig;

#[cfg(feature = "concurrent")]
pub use concurrent_lfu::ConcurrentLfuCacheConfig;

//! Thread-safe LFU caches.
//!
//! Two wrappers over the same single-threaded algorithm, both built on
//! `parking_lot::Mutex`:
//!
//! | Type | Locking | Eviction semantics |
//! |------|---------|--------------------|
//! | [`SharedLfuCache`] | one lock around one cache | exact global LFU |
//! | [`ConcurrentLfuCache`] | one lock per shard, `hash(key) % N` | LFU within the key's shard |
//!
//! ## Why Mutex Instead of RwLock?
//!
//! Every `get()` moves the entry to the next frequency bucket, so a read is a
//! write and a `RwLock` would hand out exclusive guards anyway. `Mutex` has
//! less bookkeeping and states the contract plainly. Parallelism comes from
//! sharding instead: different keys proceed in parallel as long as they hash to
//! different shards.
//!
//! # Thread Safety
//!
//! Both types are `Send + Sync` whenever their keys, values and hasher are
//! `Send`, and are meant to be shared through `Arc`.
//!
//! # Example
//!
//! ```rust
//! use freq_cache::concurrent::ConcurrentLfuCache;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let cache = Arc::new(ConcurrentLfuCache::new(1000));
//!
//! let handles: Vec<_> = (0..4).map(|t| {
//!     let cache = Arc::clone(&cache);
//!     thread::spawn(move || {
//!         for i in 0..100 {
//!             let key = format!("key_{}_{}", t, i);
//!             cache.put(key.clone(), i);
//!             let _ = cache.get(&key);
//!         }
//!     })
//! }).collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(cache.len(), 400);
//! ```
//!
//! # Zero-Copy Access
//!
//! `get` clones the value so that no lock outlives the call. `get_with` runs a
//! closure on the value while the lock is held instead:
//!
//! ```rust
//! use freq_cache::concurrent::SharedLfuCache;
//!
//! let cache = SharedLfuCache::new(4);
//! cache.put("greeting", String::from("hello world"));
//! assert_eq!(cache.get_with(&"greeting", |v| v.len()), Some(11));
//! ```

mod lfu;
mod shared;

pub use self::lfu::ConcurrentLfuCache;
pub use self::shared::SharedLfuCache;

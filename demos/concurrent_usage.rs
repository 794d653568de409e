//! Concurrent Cache Usage Examples
//!
//! Shares a single-lock cache and a sharded cache between threads and compares
//! how long the same workload takes on each.
//!
//! Run with: cargo run --example concurrent_usage --features concurrent

use freq_cache::config::ConcurrentLfuCacheConfig;
use freq_cache::metrics::CacheMetrics;
use freq_cache::{ConcurrentLfuCache, SharedLfuCache};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

const THREADS: usize = 8;
const OPS_PER_THREAD: usize = 20_000;
const CAPACITY: usize = 4_096;

fn main() {
    println!("Concurrent LFU caches: {THREADS} threads x {OPS_PER_THREAD} ops\n");

    let shared = Arc::new(SharedLfuCache::new(CAPACITY));
    let elapsed = {
        let cache = Arc::clone(&shared);
        run(move |key, i| {
            if i % 4 == 0 {
                cache.put(key, i);
            } else {
                let _ = cache.get(&key);
            }
        })
    };
    report(shared.algorithm_name(), elapsed, &shared.metrics());

    let config = match ConcurrentLfuCacheConfig::new(CAPACITY).with_segments(16) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            return;
        }
    };
    let sharded = Arc::new(ConcurrentLfuCache::init(config));
    let elapsed = {
        let cache = Arc::clone(&sharded);
        run(move |key, i| {
            if i % 4 == 0 {
                cache.put(key, i);
            } else {
                let _ = cache.get_with(&key, |v| *v);
            }
        })
    };
    report(sharded.algorithm_name(), elapsed, &sharded.metrics());
}

/// Runs `op` from every thread over a skewed key range and returns the wall time.
fn run<F>(op: F) -> std::time::Duration
where
    F: Fn(usize, usize) + Send + Sync + 'static,
{
    let op = Arc::new(op);
    let start = Instant::now();
    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let op = Arc::clone(&op);
            thread::spawn(move || {
                for i in 0..OPS_PER_THREAD {
                    // Low keys come up far more often than high ones
                    let key = (i * (t + 1)) % (CAPACITY * 2) / (1 + i % 7);
                    op(key, i);
                }
            })
        })
        .collect();
    for handle in handles {
        if handle.join().is_err() {
            eprintln!("worker thread panicked");
        }
    }
    start.elapsed()
}

fn report(name: &str, elapsed: std::time::Duration, metrics: &std::collections::BTreeMap<String, f64>) {
    println!("{name}");
    println!("  elapsed    {elapsed:?}");
    for key in ["entries", "hit_rate", "evictions", "max_frequency"] {
        if let Some(value) = metrics.get(key) {
            println!("  {key:<10} {value:.2}");
        }
    }
    println!();
}

//! Cache Metrics Demonstration
//!
//! Runs a skewed workload against a small LFU cache and prints the metrics it
//! collected, in the deterministic order `BTreeMap` gives them.
//!
//! Run with: cargo run --example metrics_demo

use freq_cache::metrics::CacheMetrics;
use freq_cache::LfuCache;
use std::collections::BTreeMap;

fn main() {
    println!("Cache Metrics Demonstration");
    println!("===========================\n");

    let mut cache: LfuCache<&'static str, u32> = LfuCache::new(3);

    // Standard workload
    cache.put("apple", 1);
    cache.put("banana", 2);
    cache.put("cherry", 3);

    // apple is hot, banana is warm, cherry is cold
    for _ in 0..5 {
        cache.get(&"apple");
    }
    cache.get(&"banana");

    // Misses
    cache.get(&"durian");
    cache.get(&"elderberry");

    // These evict the coldest entry each time
    cache.put("fig", 6);
    cache.put("grape", 7);

    // Update in place
    cache.put("apple", 10);

    println!("Workload:");
    println!("  • 3 inserts, 6 hits, 2 misses, 2 evicting inserts, 1 update\n");

    print_metrics(cache.algorithm_name(), &cache.metrics());

    let stats = cache.stats();
    println!();
    println!("Derived:");
    println!("  hit rate           {:.2}", stats.core.hit_rate());
    println!("  utilization        {:.2}", stats.core.cache_utilization());
    println!("  frequency range    {}", stats.frequency_range());
}

fn print_metrics(name: &str, metrics: &BTreeMap<String, f64>) {
    println!("{name} metrics:");
    for (key, value) in metrics {
        println!("  {key:<24} {value:>8.2}");
    }
}

//! Basic LFU Cache Usage
//!
//! Fills a three-entry cache, touches one key, and shows which key the next
//! insertion evicts.
//!
//! Run with: cargo run --example basic_usage

use freq_cache::LfuCache;

fn show(cache: &mut LfuCache<i32, i32>, key: i32) {
    match cache.get(&key) {
        Some(value) => println!("get({key}) = {value}"),
        None => println!("get({key}) = miss"),
    }
}

fn main() {
    let mut cache = LfuCache::new(3);

    cache.put(1, 1);
    cache.put(2, 2);
    cache.put(3, 3);

    show(&mut cache, 1);

    // 2 and 3 share frequency 1; 2 was touched longest ago
    if let Some((key, value)) = cache.put(4, 4) {
        println!("put(4) evicted {key} -> {value}");
    }

    show(&mut cache, 2);
    show(&mut cache, 3);
    show(&mut cache, 4);

    println!();
    for key in 1..=4 {
        match cache.frequency(&key) {
            Some(f) => println!("key {key}: frequency {f}"),
            None => println!("key {key}: not cached"),
        }
    }
    println!("eviction tier: {:?}", cache.min_frequency());
    println!("next victim:   {:?}", cache.peek_lfu());
}

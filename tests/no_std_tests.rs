#![no_std]
extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use freq_cache::config::LfuCacheConfig;
use freq_cache::LfuCache;

fn make_lfu<K: core::hash::Hash + Eq + Clone, V>(cap: usize) -> LfuCache<K, V> {
    LfuCache::init(LfuCacheConfig { capacity: cap })
}

#[test]
fn test_lfu_in_no_std() {
    let mut cache = make_lfu(2);

    let key1 = String::from("key1");
    let key2 = String::from("key2");

    cache.put(key1.clone(), 1);
    cache.put(key2.clone(), 2);

    // Access key1 multiple times to increase its frequency
    cache.get(&key1);
    cache.get(&key1);

    // Add a new item, which should evict key2 (lower frequency)
    let key3 = String::from("key3");
    assert_eq!(cache.put(key3.clone(), 3), Some((key2.clone(), 2)));

    assert_eq!(*cache.get(&key1).unwrap(), 1);
    assert!(cache.get(&key2).is_none());
    assert_eq!(*cache.get(&key3).unwrap(), 3);
}

#[test]
fn test_lfu_borrowed_str_lookup_in_no_std() {
    let mut cache = make_lfu(4);
    let keys: Vec<String> = (0..4).map(|i| format!("key{i}")).collect();

    for (i, key) in keys.iter().enumerate() {
        cache.put(key.clone(), i);
    }

    assert_eq!(cache.get("key2"), Some(&2));
    assert_eq!(cache.frequency("key2"), Some(2));
    assert_eq!(cache.peek("key0"), Some(&0));
    assert_eq!(cache.remove("key3"), Some(3));
    assert_eq!(cache.len(), 3);
}

#[test]
fn test_lfu_values_with_heap_data_in_no_std() {
    let mut cache: LfuCache<u32, Vec<u8>> = make_lfu(3);

    for i in 0..6u32 {
        cache.put(i, alloc::vec![i as u8; i as usize]);
    }

    assert_eq!(cache.len(), 3);
    if let Some(buf) = cache.get_mut(&5) {
        buf.push(0xFF);
    }
    assert_eq!(cache.get(&5).map(Vec::len), Some(6));

    cache.clear();
    assert!(cache.is_empty());
}

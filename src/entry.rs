//! Cache Entry Type
//!
//! A `CacheEntry<K, V>` is one cached record: the key, the value, and the
//! access frequency that decides which frequency bucket the entry lives in.
//!
//! # Lifecycle
//!
//! ```text
//!   put (new key)        get hit / updating put        eviction, remove, clear
//! ────────────────▶ f=1 ──────────────────────▶ f=2 ──▶ ... ──────────────────▶ dropped
//! ```
//!
//! The frequency never decreases and grows by exactly one per access. Entries
//! are owned by the cache's slab; buckets only refer to them by handle.
//!
//! # Examples
//!
//! ```
//! use freq_cache::entry::CacheEntry;
//!
//! let mut entry = CacheEntry::new("key", 42);
//! assert_eq!(entry.frequency(), 1);
//! assert_eq!(entry.touch(), 2);
//! assert_eq!(entry.value, 42);
//! ```

use core::fmt;

/// The frequency every newly inserted entry starts at.
pub const INITIAL_FREQUENCY: u64 = 1;

/// One cached key/value pair together with its access frequency.
///
/// The key and value are public for direct access; the frequency is only
/// changed through [`touch`](CacheEntry::touch) so it can never move backwards.
pub struct CacheEntry<K, V> {
    /// The cached key
    pub key: K,

    /// The cached value
    pub value: V,

    /// Number of accesses, including the insertion itself.
    frequency: u64,
}

impl<K, V> CacheEntry<K, V> {
    /// Creates an entry at [`INITIAL_FREQUENCY`].
    #[inline]
    pub fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            frequency: INITIAL_FREQUENCY,
        }
    }

    /// Returns the current access frequency.
    #[inline]
    pub fn frequency(&self) -> u64 {
        self.frequency
    }

    /// Records one access and returns the new frequency.
    ///
    /// Saturates at `u64::MAX` rather than wrapping back to the lowest tier.
    #[inline]
    pub fn touch(&mut self) -> u64 {
        self.frequency = self.frequency.saturating_add(1);
        self.frequency
    }

    /// Replaces the value, returning the previous one. Does not touch the entry.
    #[inline]
    pub fn replace_value(&mut self, value: V) -> V {
        core::mem::replace(&mut self.value, value)
    }

    /// Consumes the entry and returns its key and value.
    #[inline]
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: Clone, V: Clone> Clone for CacheEntry<K, V> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            value: self.value.clone(),
            frequency: self.frequency,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for CacheEntry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheEntry")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("frequency", &self.frequency)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_starts_at_one() {
        let entry = CacheEntry::new("a", 1);
        assert_eq!(entry.frequency(), INITIAL_FREQUENCY);
        assert_eq!(entry.key, "a");
        assert_eq!(entry.value, 1);
    }

    #[test]
    fn test_touch_increments_by_one() {
        let mut entry = CacheEntry::new("a", 1);
        for expected in 2..10 {
            assert_eq!(entry.touch(), expected);
            assert_eq!(entry.frequency(), expected);
        }
    }

    #[test]
    fn test_touch_saturates() {
        let mut entry = CacheEntry::new("a", 1);
        entry.frequency = u64::MAX;
        assert_eq!(entry.touch(), u64::MAX);
    }

    #[test]
    fn test_replace_value_keeps_frequency() {
        let mut entry = CacheEntry::new("a", 1);
        entry.touch();
        assert_eq!(entry.replace_value(10), 1);
        assert_eq!(entry.value, 10);
        assert_eq!(entry.frequency(), 2);
        assert_eq!(entry.into_pair(), ("a", 10));
    }
}

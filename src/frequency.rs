//! Frequency index: sparse map from frequency to its recency bucket.
//!
//! Buckets are created lazily the first time an entry reaches a frequency and
//! dropped as soon as they become empty, so every bucket in the index has at
//! least one member. The index also carries `min_frequency`, the eviction tier.
//!
//! # Keeping the minimum in O(1)
//!
//! `min_frequency` is never found by scanning on the `get`/`put` paths:
//!
//! - a brand-new entry always lands in frequency 1, the lowest possible tier,
//!   so insertion resets the minimum to 1;
//! - the only way the minimum bucket empties during an access is that its last
//!   member was promoted to `min + 1`, which therefore becomes the new minimum.
//!
//! Explicit removal breaks the second rule (the emptied tier's member left the
//! cache instead of moving up), so [`FrequencyIndex::recompute_min`] exists for
//! that path and costs O(number of populated tiers).

use crate::entry::INITIAL_FREQUENCY;
use crate::list::Bucket;

#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

#[derive(Debug)]
pub(crate) struct FrequencyIndex {
    buckets: HashMap<u64, Bucket>,
    min_frequency: u64,
}

impl FrequencyIndex {
    pub(crate) fn new() -> Self {
        FrequencyIndex {
            buckets: HashMap::new(),
            min_frequency: INITIAL_FREQUENCY,
        }
    }

    /// Returns the bucket for `frequency`, creating an empty one if absent.
    ///
    /// The caller must push into the returned bucket before it next calls
    /// [`drop_if_empty`](Self::drop_if_empty) for another tier, otherwise the
    /// empty bucket would outlive the operation.
    #[inline]
    pub(crate) fn bucket_for(&mut self, frequency: u64) -> &mut Bucket {
        self.buckets.entry(frequency).or_insert_with(Bucket::new)
    }

    #[inline]
    pub(crate) fn bucket(&self, frequency: u64) -> Option<&Bucket> {
        self.buckets.get(&frequency)
    }

    #[inline]
    pub(crate) fn bucket_mut(&mut self, frequency: u64) -> Option<&mut Bucket> {
        self.buckets.get_mut(&frequency)
    }

    /// Removes the bucket for `frequency` if it has no members.
    ///
    /// Returns `true` if a bucket was dropped.
    pub(crate) fn drop_if_empty(&mut self, frequency: u64) -> bool {
        if self.buckets.get(&frequency).is_some_and(Bucket::is_empty) {
            self.buckets.remove(&frequency);
            true
        } else {
            false
        }
    }

    /// Moves the minimum up one tier if `frequency` was the minimum and its
    /// bucket has just been emptied by a promotion.
    pub(crate) fn advance_min_if_needed(&mut self, frequency: u64) {
        let emptied = self.buckets.get(&frequency).map_or(true, Bucket::is_empty);
        if frequency == self.min_frequency && emptied {
            self.min_frequency = self.min_frequency.saturating_add(1);
        }
    }

    /// Called on every insertion of a new entry.
    #[inline]
    pub(crate) fn reset_min_to_one(&mut self) {
        self.min_frequency = INITIAL_FREQUENCY;
    }

    /// Finds the minimum by looking at every populated tier.
    pub(crate) fn recompute_min(&mut self) {
        self.min_frequency = self
            .buckets
            .keys()
            .copied()
            .min()
            .unwrap_or(INITIAL_FREQUENCY);
    }

    /// The eviction tier, or `None` when no entries are indexed.
    #[inline]
    pub(crate) fn min_frequency(&self) -> Option<u64> {
        if self.buckets.is_empty() {
            None
        } else {
            Some(self.min_frequency)
        }
    }

    /// Number of populated frequency tiers.
    #[inline]
    pub(crate) fn levels(&self) -> usize {
        self.buckets.len()
    }

    #[cfg(test)]
    pub(crate) fn iter(&self) -> impl Iterator<Item = (u64, &Bucket)> + '_ {
        self.buckets.iter().map(|(&f, b)| (f, b))
    }

    pub(crate) fn clear(&mut self) {
        self.buckets.clear();
        self.min_frequency = INITIAL_FREQUENCY;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::Node;
    use crate::slab::{Handle, Slab};

    fn add(index: &mut FrequencyIndex, slab: &mut Slab<Node<u32>>, f: u64, v: u32) -> Handle {
        let h = slab.insert(Node::new(v));
        index.bucket_for(f).push_front(slab, h);
        h
    }

    #[test]
    fn test_buckets_are_created_lazily() {
        let mut index = FrequencyIndex::new();
        assert_eq!(index.levels(), 0);
        assert_eq!(index.min_frequency(), None);
        assert!(index.bucket(3).is_none());

        index.bucket_for(3);
        assert_eq!(index.levels(), 1);
        assert!(index.bucket(3).is_some_and(Bucket::is_empty));
    }

    #[test]
    fn test_drop_if_empty_only_drops_empty() {
        let mut slab = Slab::with_capacity(2);
        let mut index = FrequencyIndex::new();
        let h = add(&mut index, &mut slab, 1, 10);

        assert!(!index.drop_if_empty(1));
        assert!(!index.drop_if_empty(7));

        if let Some(bucket) = index.bucket_mut(1) {
            bucket.remove(&mut slab, h);
        }
        assert!(index.drop_if_empty(1));
        assert_eq!(index.levels(), 0);
    }

    #[test]
    fn test_promotion_advances_min() {
        let mut slab = Slab::with_capacity(2);
        let mut index = FrequencyIndex::new();
        index.reset_min_to_one();
        let h = add(&mut index, &mut slab, 1, 10);

        if let Some(bucket) = index.bucket_mut(1) {
            bucket.remove(&mut slab, h);
        }
        index.advance_min_if_needed(1);
        index.drop_if_empty(1);
        index.bucket_for(2).push_front(&mut slab, h);

        assert_eq!(index.min_frequency(), Some(2));
    }

    #[test]
    fn test_min_stays_when_bucket_still_populated() {
        let mut slab = Slab::with_capacity(2);
        let mut index = FrequencyIndex::new();
        let h = add(&mut index, &mut slab, 1, 10);
        add(&mut index, &mut slab, 1, 20);

        if let Some(bucket) = index.bucket_mut(1) {
            bucket.remove(&mut slab, h);
        }
        index.advance_min_if_needed(1);
        assert_eq!(index.min_frequency(), Some(1));
    }

    #[test]
    fn test_non_min_tier_does_not_move_min() {
        let mut slab = Slab::with_capacity(2);
        let mut index = FrequencyIndex::new();
        add(&mut index, &mut slab, 1, 10);
        let h = add(&mut index, &mut slab, 4, 20);

        if let Some(bucket) = index.bucket_mut(4) {
            bucket.remove(&mut slab, h);
        }
        index.advance_min_if_needed(4);
        assert_eq!(index.min_frequency(), Some(1));
    }

    #[test]
    fn test_recompute_min_after_removal() {
        let mut slab = Slab::with_capacity(3);
        let mut index = FrequencyIndex::new();
        let h = add(&mut index, &mut slab, 1, 10);
        add(&mut index, &mut slab, 5, 20);
        add(&mut index, &mut slab, 9, 30);

        if let Some(bucket) = index.bucket_mut(1) {
            bucket.remove(&mut slab, h);
        }
        index.drop_if_empty(1);
        index.recompute_min();
        assert_eq!(index.min_frequency(), Some(5));

        index.clear();
        assert_eq!(index.min_frequency(), None);
        assert_eq!(index.levels(), 0);
    }
}

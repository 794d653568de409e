//! Recency-ordered bucket of slab handles.
//!
//! A [`Bucket`] is a doubly linked list whose links live inside the slab nodes
//! themselves (`Node::prev` / `Node::next`). The bucket only stores the two
//! ends and a length, so moving an entry from one bucket to another is a pair
//! of O(1) unlink/link operations on indices and never touches the entry's
//! key or value.
//!
//! ```text
//!   head (most recent)                          tail (least recent)
//!        │                                            │
//!        ▼                                            ▼
//!    ┌────────┐  next  ┌────────┐  next  ┌────────┐
//!    │ Node h3│ ─────▶ │ Node h2│ ─────▶ │ Node h1│
//!    │        │ ◀───── │        │ ◀───── │        │
//!    └────────┘  prev  └────────┘  prev  └────────┘
//! ```
//!
//! A handle must be linked into at most one bucket at a time. The bucket
//! methods rely on that: `remove` trusts that the handle belongs to `self`.

use crate::slab::{Handle, Slab};

/// A slab node: the stored value plus its position in the owning bucket.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    prev: Option<Handle>,
    next: Option<Handle>,
}

impl<T> Node<T> {
    /// Creates an unlinked node.
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Node {
            value,
            prev: None,
            next: None,
        }
    }
}

/// All entries that currently share one frequency, most recently touched first.
#[derive(Debug, Default)]
pub(crate) struct Bucket {
    head: Option<Handle>,
    tail: Option<Handle>,
    len: usize,
}

impl Bucket {
    pub(crate) fn new() -> Self {
        Bucket::default()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The most recently touched member.
    #[cfg(test)]
    pub(crate) fn front(&self) -> Option<Handle> {
        self.head
    }

    /// The least recently touched member; the eviction victim of this tier.
    #[inline]
    pub(crate) fn back(&self) -> Option<Handle> {
        self.tail
    }

    /// Links an unlinked node in as the most recent member.
    pub(crate) fn push_front<T>(&mut self, slab: &mut Slab<Node<T>>, handle: Handle) {
        let old_head = self.head;
        let Some(node) = slab.get_mut(handle) else {
            return;
        };
        node.prev = None;
        node.next = old_head;

        match old_head {
            Some(old) => {
                if let Some(old_node) = slab.get_mut(old) {
                    old_node.prev = Some(handle);
                }
            }
            None => self.tail = Some(handle),
        }

        self.head = Some(handle);
        self.len += 1;
    }

    /// Unlinks `handle` from this bucket. The node stays in the slab.
    ///
    /// Returns `false` if the handle does not refer to a live node.
    pub(crate) fn remove<T>(&mut self, slab: &mut Slab<Node<T>>, handle: Handle) -> bool {
        let Some(node) = slab.get_mut(handle) else {
            return false;
        };
        let prev = node.prev.take();
        let next = node.next.take();

        debug_assert!(prev.is_some() || self.head == Some(handle));
        debug_assert!(next.is_some() || self.tail == Some(handle));

        match prev {
            Some(p) => {
                if let Some(prev_node) = slab.get_mut(p) {
                    prev_node.next = next;
                }
            }
            None => self.head = next,
        }
        match next {
            Some(n) => {
                if let Some(next_node) = slab.get_mut(n) {
                    next_node.prev = prev;
                }
            }
            None => self.tail = prev,
        }

        self.len -= 1;
        true
    }

    /// Unlinks and returns the least recently touched member.
    pub(crate) fn pop_back<T>(&mut self, slab: &mut Slab<Node<T>>) -> Option<Handle> {
        let tail = self.tail?;
        self.remove(slab, tail);
        Some(tail)
    }

    /// Walks the bucket from most to least recent.
    #[cfg(test)]
    pub(crate) fn iter<'a, T>(&self, slab: &'a Slab<Node<T>>) -> BucketIter<'a, T> {
        BucketIter {
            slab,
            cursor: self.head,
            remaining: self.len,
        }
    }
}

/// Iterator over the handles of a [`Bucket`], front to back.
#[cfg(test)]
#[derive(Debug)]
pub(crate) struct BucketIter<'a, T> {
    slab: &'a Slab<Node<T>>,
    cursor: Option<Handle>,
    remaining: usize,
}

#[cfg(test)]
impl<'a, T> Iterator for BucketIter<'a, T> {
    type Item = (Handle, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.cursor?;
        let node = self.slab.get(handle)?;
        self.cursor = node.next;
        self.remaining -= 1;
        Some((handle, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

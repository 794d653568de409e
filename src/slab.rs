//! Slot arena owning every cached entry.
//!
//! All entries live in one `Vec` and are addressed by a [`Handle`] that stays
//! valid until the entry is removed. Vacated slots go on a free list and are
//! reused by later insertions, so a full cache never grows its allocation.
//!
//! The frequency buckets link entries together through handles instead of
//! pointers, which keeps a single ownership root and makes relocating an entry
//! between buckets an index update.

extern crate alloc;

use alloc::vec::Vec;

/// Stable index of an occupied slot in a [`Slab`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Handle(usize);

impl Handle {
    /// Returns the raw slot index.
    #[cfg(test)]
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
pub(crate) struct Slab<T> {
    slots: Vec<Option<T>>,
    free_list: Vec<usize>,
    len: usize,
}

impl<T> Slab<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            len: 0,
        }
    }

    pub(crate) fn insert(&mut self, value: T) -> Handle {
        let idx = if let Some(idx) = self.free_list.pop() {
            self.slots[idx] = Some(value);
            idx
        } else {
            self.slots.push(Some(value));
            self.slots.len() - 1
        };
        self.len += 1;
        Handle(idx)
    }

    pub(crate) fn remove(&mut self, handle: Handle) -> Option<T> {
        let value = self.slots.get_mut(handle.0)?.take()?;
        self.free_list.push(handle.0);
        self.len -= 1;
        Some(value)
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> Option<&T> {
        self.slots.get(handle.0).and_then(Option::as_ref)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        self.slots.get_mut(handle.0).and_then(Option::as_mut)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
        self.len = 0;
    }
}

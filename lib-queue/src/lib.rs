#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

/// Fixed capacity ring of the most recent items. The backing storage is allocated once when the
/// ring is created, after that pushing never allocates: once the ring is full every push
/// overwrites the oldest item.
///
pub struct RingQueue<T: Copy> {
    pub(crate) data: Vec<T>,

    /// Maximum amount of items the ring holds.
    pub(crate) capacity: usize,

    /// Index of the oldest item in the ring (i.e. the next item to be overwritten once full).
    pub(crate) bottom: usize,
}

impl<T: Copy> RingQueue<T>
{
    /// Creates an empty ring holding at most `capacity` items, or `None` when `capacity` is zero.
    ///
    pub fn new(capacity: usize) -> Option<RingQueue<T>> {
        if capacity == 0 {
            return None;
        }
        Some(RingQueue {
            data: Vec::with_capacity(capacity),
            capacity,
            bottom: 0,
        })
    }

    /// Pushes an item as the newest element of the ring. If the ring is full the oldest item is
    /// overwritten and returned.
    ///
    pub fn push(&mut self, item: T) -> Option<T> {
        if self.data.len() < self.capacity {
            self.data.push(item);
            return None;
        }
        let evicted = core::mem::replace(&mut self.data[self.bottom], item);
        self.bottom = (self.bottom + 1) % self.capacity;
        Some(evicted)
    }

    /// Iterates the items from oldest to newest.
    ///
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { ring: self, index: 0 }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Has the ring been filled up completely at least once?
    ///
    #[inline]
    pub fn is_full(&self) -> bool {
        self.data.len() == self.capacity
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops all items but keeps the allocation around.
    ///
    pub fn clear(&mut self) {
        self.data.clear();
        self.bottom = 0;
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for RingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Oldest to newest iterator over a [`RingQueue`].
///
pub struct Iter<'a, T: Copy> {
    ring: &'a RingQueue<T>,
    index: usize,
}

impl<'a, T: Copy> Iterator for Iter<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let len = self.ring.data.len();
        if self.index >= len {
            return None;
        }
        let item = self.ring.data[(self.ring.bottom + self.index) % len];
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.ring.data.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl<'a, T: Copy> ExactSizeIterator for Iter<'a, T> {}

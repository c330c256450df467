//! Bounded min-heap that keeps the `k` greatest items of a stream.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Keeps the `capacity` greatest items pushed into it.
///
/// The smallest retained item sits at the top of an internal min-heap, so
/// each push costs `O(log k)` and a stream of `n` items costs `O(n log k)`.
///
/// # Example
/// ```
/// use fuzzyrank::BoundedHeap;
///
/// let mut heap = BoundedHeap::new(2);
/// for n in [5, 1, 9, 3] {
///     heap.push(n);
/// }
/// assert_eq!(heap.into_sorted_desc(), vec![9, 5]);
/// ```
#[derive(Debug, Clone)]
pub struct BoundedHeap<T: Ord> {
    capacity: usize,
    items: BinaryHeap<Reverse<T>>,
}

impl<T: Ord> BoundedHeap<T> {
    /// Create a heap that retains at most `capacity` items.
    ///
    /// Nothing is allocated up front, so `capacity` may be arbitrarily large.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            items: BinaryHeap::new(),
        }
    }

    /// Like [`BoundedHeap::new`], reserving room for at most `expected` items.
    pub fn with_expected(capacity: usize, expected: usize) -> Self {
        Self {
            capacity,
            items: BinaryHeap::with_capacity(capacity.min(expected)),
        }
    }

    /// Offer an item. Returns `true` if it was retained.
    ///
    /// When full, the item replaces the current minimum only if strictly
    /// greater than it.
    pub fn push(&mut self, item: T) -> bool {
        if self.capacity == 0 {
            return false;
        }
        if self.items.len() < self.capacity {
            self.items.push(Reverse(item));
            return true;
        }
        let replaces_min = matches!(self.items.peek(), Some(Reverse(min)) if item > *min);
        if replaces_min {
            self.items.pop();
            self.items.push(Reverse(item));
        }
        replaces_min
    }

    /// Smallest retained item.
    pub fn min(&self) -> Option<&T> {
        self.items.peek().map(|Reverse(item)| item)
    }

    /// Number of retained items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is retained.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maximum number of retained items.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Consume the heap, greatest item first.
    pub fn into_sorted_desc(self) -> Vec<T> {
        // Ascending order of Reverse<T> is descending order of T
        self.items
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(item)| item)
            .collect()
    }
}

impl<T: Ord> Extend<T> for BoundedHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

//! FIFO view over a bounded list.

use std::marker::PhantomData;

use packsched_core::error::AppError;
use packsched_core::result::AppResult;

use crate::array::ArrayList;
use crate::linked::LinkedList;
use crate::list::BoundedList;

/// Bounded first-in, first-out queue.
///
/// Elements are enqueued at the tail of the backing list and dequeued from
/// its head. Duplicate and capacity checks are delegated to the list.
#[derive(Debug, Clone)]
pub struct BoundedQueue<T, L = LinkedList<T>> {
    list: L,
    _element: PhantomData<T>,
}

/// Queue backed by an [`ArrayList`].
pub type ArrayQueue<T> = BoundedQueue<T, ArrayList<T>>;

/// Queue backed by a [`LinkedList`].
pub type LinkedQueue<T> = BoundedQueue<T, LinkedList<T>>;

impl<T: PartialEq, L: BoundedList<T>> BoundedQueue<T, L> {
    /// Creates an empty queue holding at most `capacity` elements.
    pub fn new(capacity: usize) -> Self {
        Self {
            list: L::bounded(capacity),
            _element: PhantomData,
        }
    }

    /// Add `value` to the back of the queue.
    pub fn enqueue(&mut self, value: T) -> AppResult<()> {
        self.list.push_back(value)
    }

    /// Remove and return the element at the front of the queue.
    pub fn dequeue(&mut self) -> AppResult<T> {
        if self.list.is_empty() {
            return Err(AppError::empty_collection("Cannot dequeue from an empty queue"));
        }
        self.list.remove_at(0)
    }

    /// Borrow the element at the front of the queue.
    pub fn peek(&self) -> Option<&T> {
        self.list.iter().next()
    }

    /// Number of queued elements.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Whether nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Whether the next [`enqueue`](Self::enqueue) would fail for lack of room.
    pub fn is_full(&self) -> bool {
        self.list.is_full()
    }

    /// Maximum number of elements.
    pub fn capacity(&self) -> usize {
        self.list.capacity()
    }

    /// Change the capacity; fails with `InvalidCapacity` below the current size.
    pub fn set_capacity(&mut self, capacity: usize) -> AppResult<()> {
        self.list.set_capacity(capacity)
    }

    /// Whether an equal element is queued.
    pub fn contains(&self, value: &T) -> bool {
        self.list.contains(value)
    }

    /// Iterate front to back, i.e. in the order elements would be dequeued.
    pub fn iter(&self) -> L::Iter<'_> {
        self.list.iter()
    }

    /// Keep only the elements for which `keep` returns `true`.
    ///
    /// Rotates the whole queue once, dequeuing every element and enqueuing
    /// the survivors again, so their relative order is unchanged. Returns
    /// the number of elements removed.
    pub fn retain<F>(&mut self, mut keep: F) -> AppResult<usize>
    where
        F: FnMut(&T) -> bool,
    {
        let size = self.list.len();
        let mut removed = 0;
        for _ in 0..size {
            let value = self.dequeue()?;
            if keep(&value) {
                self.enqueue(value)?;
            } else {
                removed += 1;
            }
        }
        Ok(removed)
    }
}

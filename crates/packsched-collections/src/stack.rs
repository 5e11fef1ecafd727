//! LIFO view over a bounded list.

use std::marker::PhantomData;

use packsched_core::error::AppError;
use packsched_core::result::AppResult;

use crate::array::ArrayList;
use crate::linked::LinkedList;
use crate::list::BoundedList;

/// Bounded last-in, first-out stack.
///
/// The top of the stack is position 0 of the backing list, which is the
/// cheap end of a [`LinkedList`].
#[derive(Debug, Clone)]
pub struct BoundedStack<T, L = LinkedList<T>> {
    list: L,
    _element: PhantomData<T>,
}

/// Stack backed by an [`ArrayList`].
pub type ArrayStack<T> = BoundedStack<T, ArrayList<T>>;

/// Stack backed by a [`LinkedList`].
pub type LinkedStack<T> = BoundedStack<T, LinkedList<T>>;

impl<T: PartialEq, L: BoundedList<T>> BoundedStack<T, L> {
    /// Creates an empty stack holding at most `capacity` elements.
    pub fn new(capacity: usize) -> Self {
        Self {
            list: L::bounded(capacity),
            _element: PhantomData,
        }
    }

    /// Push `value` onto the top of the stack.
    pub fn push(&mut self, value: T) -> AppResult<()> {
        self.list.insert(0, value)
    }

    /// Remove and return the top of the stack.
    pub fn pop(&mut self) -> AppResult<T> {
        if self.list.is_empty() {
            return Err(AppError::empty_collection("Cannot pop from an empty stack"));
        }
        self.list.remove_at(0)
    }

    /// Borrow the top of the stack.
    pub fn peek(&self) -> Option<&T> {
        self.list.iter().next()
    }

    /// Number of stacked elements.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Whether the stack holds nothing.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Whether the next [`push`](Self::push) would fail for lack of room.
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

    /// Whether an equal element is anywhere on the stack.
    pub fn contains(&self, value: &T) -> bool {
        self.list.contains(value)
    }

    /// Iterate top to bottom.
    pub fn iter(&self) -> L::Iter<'_> {
        self.list.iter()
    }
}

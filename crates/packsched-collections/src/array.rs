//! Contiguous list strategy with explicit backing-storage doubling.

use tracing::trace;

use packsched_core::result::AppResult;

use crate::list::{
    BoundedList, capacity_exceeded, duplicate_value, index_out_of_range, invalid_capacity,
};

/// Backing size reserved for a freshly created list.
pub const DEFAULT_BACKING_SIZE: usize = 10;

/// Array-backed [`BoundedList`].
///
/// The logical `capacity` and the physical `backing_size` are separate:
/// capacity caps the number of elements, while the backing storage starts
/// at [`DEFAULT_BACKING_SIZE`] and doubles whenever an insert would not fit.
#[derive(Debug, Clone)]
pub struct ArrayList<T> {
    items: Vec<T>,
    backing_size: usize,
    capacity: usize,
}

impl<T: PartialEq> ArrayList<T> {
    /// Creates an empty list with the given logical capacity.
    pub fn new(capacity: usize) -> Self {
        Self::with_backing_size(capacity, DEFAULT_BACKING_SIZE)
    }

    /// Creates an empty list with no practical capacity ceiling.
    pub fn unbounded() -> Self {
        Self::new(usize::MAX)
    }

    /// Creates an empty list with an explicit initial backing size.
    pub fn with_backing_size(capacity: usize, backing_size: usize) -> Self {
        let backing_size = backing_size.max(1);
        Self {
            items: Vec::with_capacity(backing_size),
            backing_size,
            capacity,
        }
    }

    /// Current size of the backing storage.
    pub fn backing_size(&self) -> usize {
        self.backing_size
    }

    fn grow(&mut self) {
        self.backing_size = self.backing_size.saturating_mul(2);
        let additional = self.backing_size - self.items.len();
        self.items.reserve_exact(additional);
        trace!(backing_size = self.backing_size, "Array list storage doubled");
    }
}

impl<T: PartialEq> Default for ArrayList<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T: PartialEq> BoundedList<T> for ArrayList<T> {
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        T: 'a;

    fn bounded(capacity: usize) -> Self {
        Self::new(capacity)
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn set_capacity(&mut self, capacity: usize) -> AppResult<()> {
        if capacity < self.items.len() {
            return Err(invalid_capacity(capacity, self.items.len()));
        }
        self.capacity = capacity;
        Ok(())
    }

    fn insert(&mut self, index: usize, value: T) -> AppResult<()> {
        if self.items.len() >= self.capacity {
            return Err(capacity_exceeded(self.capacity));
        }
        if self.items.contains(&value) {
            return Err(duplicate_value());
        }
        if index > self.items.len() {
            return Err(index_out_of_range("add", index, self.items.len()));
        }
        if self.items.len() + 1 > self.backing_size {
            self.grow();
        }
        self.items.insert(index, value);
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> AppResult<T> {
        if index >= self.items.len() {
            return Err(index_out_of_range("remove", index, self.items.len()));
        }
        Ok(self.items.remove(index))
    }

    fn set_at(&mut self, index: usize, value: T) -> AppResult<T> {
        let duplicate = self
            .items
            .iter()
            .enumerate()
            .any(|(i, item)| i != index && *item == value);
        if duplicate {
            return Err(duplicate_value());
        }
        match self.items.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, value)),
            None => Err(index_out_of_range("set", index, self.items.len())),
        }
    }

    fn get_at(&self, index: usize) -> AppResult<&T> {
        self.items
            .get(index)
            .ok_or_else(|| index_out_of_range("get", index, self.items.len()))
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a>
    where
        T: 'a,
    {
        self.items.iter()
    }
}

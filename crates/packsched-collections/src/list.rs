//! The bounded list contract shared by every list strategy.

use packsched_core::error::AppError;
use packsched_core::result::AppResult;

/// A capacity-limited, duplicate-rejecting, positionally indexed list.
///
/// Implementations must check every precondition before touching their
/// storage, so a failed call never leaves a partial mutation behind.
/// Failure kinds:
///
/// - `CapacityExceeded` when inserting into a full list,
/// - `DuplicateValue` when the value equals an element already present,
/// - `IndexOutOfRange` for positions outside the valid range,
/// - `InvalidCapacity` when shrinking below the current length,
/// - `NullValue` when an absent value is offered via [`insert_checked`].
///
/// [`insert_checked`]: BoundedList::insert_checked
pub trait BoundedList<T: PartialEq> {
    /// Borrowing iterator over the elements in list order.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Create an empty list with the given logical capacity.
    fn bounded(capacity: usize) -> Self
    where
        Self: Sized;

    /// Number of elements currently stored.
    fn len(&self) -> usize;

    /// Logical ceiling on the number of elements.
    fn capacity(&self) -> usize;

    /// Change the logical capacity.
    ///
    /// Fails with `InvalidCapacity` if `capacity` is below the current length.
    fn set_capacity(&mut self, capacity: usize) -> AppResult<()>;

    /// Insert `value` at `index`, shifting later elements back by one.
    ///
    /// `index` may equal `len()` to append.
    fn insert(&mut self, index: usize, value: T) -> AppResult<()>;

    /// Remove and return the element at `index`.
    fn remove_at(&mut self, index: usize) -> AppResult<T>;

    /// Replace the element at `index`, returning the previous element.
    ///
    /// The element being replaced is excluded from the duplicate check.
    fn set_at(&mut self, index: usize, value: T) -> AppResult<T>;

    /// Borrow the element at `index`.
    fn get_at(&self, index: usize) -> AppResult<&T>;

    /// Iterate over the elements in list order.
    fn iter<'a>(&'a self) -> Self::Iter<'a>
    where
        T: 'a;

    /// Returns `true` when the list holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` when no further element can be inserted.
    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }

    /// Position of the first element equal to `value`.
    fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }

    /// Returns `true` when an element equal to `value` is present.
    fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Append `value` at the end of the list.
    fn push_back(&mut self, value: T) -> AppResult<()> {
        let len = self.len();
        self.insert(len, value)
    }

    /// Insert a value that may be absent, as produced by optional input.
    ///
    /// `None` fails with `NullValue` after the capacity check, matching the
    /// order in which [`insert`](BoundedList::insert) reports failures.
    fn insert_checked(&mut self, index: usize, value: Option<T>) -> AppResult<()> {
        if self.is_full() {
            return Err(capacity_exceeded(self.capacity()));
        }
        match value {
            Some(value) => self.insert(index, value),
            None => Err(AppError::null_value("Cannot add an absent value to the list")),
        }
    }

    /// Remove the element equal to `value`, returning it if it was present.
    fn remove_value(&mut self, value: &T) -> AppResult<Option<T>> {
        match self.index_of(value) {
            Some(index) => self.remove_at(index).map(Some),
            None => Ok(None),
        }
    }
}

pub(crate) fn capacity_exceeded(capacity: usize) -> AppError {
    AppError::capacity_exceeded(format!("List is full (capacity {capacity})"))
}

pub(crate) fn duplicate_value() -> AppError {
    AppError::duplicate_value("This element already exists in the list")
}

pub(crate) fn index_out_of_range(op: &str, index: usize, len: usize) -> AppError {
    AppError::index_out_of_range(format!("Cannot {op} element at index {index} (length {len})"))
}

pub(crate) fn invalid_capacity(capacity: usize, len: usize) -> AppError {
    AppError::invalid_capacity(format!(
        "Capacity {capacity} is smaller than the current length {len}"
    ))
}

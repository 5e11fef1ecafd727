//! # packsched-collections
//!
//! Bounded linear containers that back every roster and schedule in
//! PackScheduler. All of them share three invariants:
//!
//! - `len() <= capacity()` at all times,
//! - no two elements compare equal,
//! - every failed operation leaves the container untouched.
//!
//! Two list strategies implement [`BoundedList`]: the contiguous
//! [`ArrayList`] and the arena-backed doubly linked [`LinkedList`]. Queues
//! and stacks are thin FIFO/LIFO views generic over either strategy.

pub mod array;
pub mod linked;
pub mod list;
pub mod queue;
pub mod stack;

pub use array::ArrayList;
pub use linked::LinkedList;
pub use list::BoundedList;
pub use queue::{ArrayQueue, BoundedQueue, LinkedQueue};
pub use stack::{ArrayStack, BoundedStack, LinkedStack};

//! Doubly linked list strategy over an index arena.
//!
//! Nodes live in a `Vec` of slots and refer to each other by slot index, so
//! ownership stays with the arena and every traversal is a plain loop.
//! Vacated slots are chained into a free list and reused by later inserts.

use packsched_core::error::AppError;
use packsched_core::result::AppResult;

use crate::list::{
    BoundedList, capacity_exceeded, duplicate_value, index_out_of_range, invalid_capacity,
};

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<usize> },
}

/// Linked [`BoundedList`] with O(1) insertion and removal at both ends.
///
/// Positional access walks from whichever end is nearer.
#[derive(Debug, Clone)]
pub struct LinkedList<T> {
    slots: Vec<Slot<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    free: Option<usize>,
    len: usize,
    capacity: usize,
}

impl<T: PartialEq> LinkedList<T> {
    /// Creates an empty list with the given logical capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            tail: None,
            free: None,
            len: 0,
            capacity,
        }
    }

    fn node(&self, slot: usize) -> Option<&Node<T>> {
        match self.slots.get(slot) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    fn node_mut(&mut self, slot: usize) -> Option<&mut Node<T>> {
        match self.slots.get_mut(slot) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    /// Slot index of the node at list position `index`.
    fn slot_at(&self, index: usize) -> AppResult<usize> {
        let mut current;
        if index < self.len / 2 {
            current = self.head;
            for _ in 0..index {
                current = current.and_then(|slot| self.node(slot)).and_then(|n| n.next);
            }
        } else {
            current = self.tail;
            for _ in index + 1..self.len {
                current = current.and_then(|slot| self.node(slot)).and_then(|n| n.prev);
            }
        }
        current.ok_or_else(broken_link)
    }

    /// Point `slot`'s neighbours at each other, or at `slot` itself.
    fn link(&mut self, slot: usize, prev: Option<usize>, next: Option<usize>) {
        match prev.and_then(|p| self.node_mut(p)) {
            Some(node) => node.next = Some(slot),
            None => self.head = Some(slot),
        }
        match next.and_then(|n| self.node_mut(n)) {
            Some(node) => node.prev = Some(slot),
            None => self.tail = Some(slot),
        }
    }

    /// Detach `slot` from its neighbours and release it.
    fn unlink(&mut self, slot: usize) -> AppResult<T> {
        let (prev, next) = self
            .node(slot)
            .map(|n| (n.prev, n.next))
            .ok_or_else(broken_link)?;
        match prev.and_then(|p| self.node_mut(p)) {
            Some(node) => node.next = next,
            None => self.head = next,
        }
        match next.and_then(|n| self.node_mut(n)) {
            Some(node) => node.prev = prev,
            None => self.tail = prev,
        }
        self.release(slot)
    }

    fn allocate(&mut self, node: Node<T>) -> usize {
        match self.free {
            Some(slot) => {
                if let Some(Slot::Vacant { next_free }) = self.slots.get(slot) {
                    self.free = *next_free;
                }
                self.slots[slot] = Slot::Occupied(node);
                slot
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, slot: usize) -> AppResult<T> {
        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        match std::mem::replace(&mut self.slots[slot], vacant) {
            Slot::Occupied(node) => {
                self.free = Some(slot);
                Ok(node.value)
            }
            previous => {
                self.slots[slot] = previous;
                Err(broken_link())
            }
        }
    }
}

impl<T: PartialEq> BoundedList<T> for LinkedList<T> {
    type Iter<'a>
        = Iter<'a, T>
    where
        T: 'a;

    fn bounded(capacity: usize) -> Self {
        Self::new(capacity)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn set_capacity(&mut self, capacity: usize) -> AppResult<()> {
        if capacity < self.len {
            return Err(invalid_capacity(capacity, self.len));
        }
        self.capacity = capacity;
        Ok(())
    }

    fn insert(&mut self, index: usize, value: T) -> AppResult<()> {
        if self.len >= self.capacity {
            return Err(capacity_exceeded(self.capacity));
        }
        if self.contains(&value) {
            return Err(duplicate_value());
        }
        if index > self.len {
            return Err(index_out_of_range("add", index, self.len));
        }

        let (prev, next) = if index == self.len {
            (self.tail, None)
        } else {
            let next = self.slot_at(index)?;
            (self.node(next).and_then(|n| n.prev), Some(next))
        };
        let slot = self.allocate(Node { value, prev, next });
        self.link(slot, prev, next);

        self.len += 1;
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> AppResult<T> {
        if index >= self.len {
            return Err(index_out_of_range("remove", index, self.len));
        }

        let slot = self.slot_at(index)?;
        let value = self.unlink(slot)?;
        self.len -= 1;
        Ok(value)
    }

    fn set_at(&mut self, index: usize, value: T) -> AppResult<T> {
        let duplicate = self
            .iter()
            .enumerate()
            .any(|(i, item)| i != index && *item == value);
        if duplicate {
            return Err(duplicate_value());
        }
        if index >= self.len {
            return Err(index_out_of_range("set", index, self.len));
        }
        let slot = self.slot_at(index)?;
        let node = self.node_mut(slot).ok_or_else(broken_link)?;
        Ok(std::mem::replace(&mut node.value, value))
    }

    fn get_at(&self, index: usize) -> AppResult<&T> {
        if index >= self.len {
            return Err(index_out_of_range("get", index, self.len));
        }
        let slot = self.slot_at(index)?;
        self.node(slot).map(|n| &n.value).ok_or_else(broken_link)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a>
    where
        T: 'a,
    {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }
}

/// Borrowing iterator over a [`LinkedList`], head to tail or in reverse.
#[derive(Debug)]
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T: PartialEq> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: PartialEq> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back?)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T: PartialEq> ExactSizeIterator for Iter<'_, T> {}

fn broken_link() -> AppError {
    AppError::internal("Linked list node chain is inconsistent with its length")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vacated_slots_are_reused() {
        let mut list = LinkedList::new(10);
        for value in 0..4 {
            list.push_back(value).unwrap();
        }
        list.remove_at(1).unwrap();
        list.remove_at(0).unwrap();
        list.push_back(7).unwrap();
        list.insert(0, 8).unwrap();
        assert_eq!(list.slots.len(), 4);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![8, 2, 3, 7]);
    }

    #[test]
    fn test_tail_tracks_removal_of_last_element() {
        let mut list = LinkedList::new(5);
        for value in ["a", "b", "c"] {
            list.push_back(value).unwrap();
        }
        assert_eq!(list.remove_at(2).unwrap(), "c");
        list.push_back("d").unwrap();
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["a", "b", "d"]);

        while !list.is_empty() {
            list.remove_at(0).unwrap();
        }
        assert!(list.head.is_none());
        assert!(list.tail.is_none());
        list.push_back("e").unwrap();
        assert_eq!(list.get_at(0).unwrap(), &"e");
    }

    #[test]
    fn test_iterates_from_both_ends() {
        let mut list = LinkedList::new(6);
        for value in 1..=5 {
            list.push_back(value).unwrap();
        }
        assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);

        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&5));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_prev_links_survive_middle_edits() {
        let mut list = LinkedList::new(8);
        for value in ["a", "b", "c", "d", "e", "f"] {
            list.push_back(value).unwrap();
        }
        list.insert(4, "x").unwrap();
        assert_eq!(list.remove_at(1).unwrap(), "b");
        assert_eq!(list.remove_at(4).unwrap(), "e");
        assert_eq!(list.get_at(3).unwrap(), &"x");
        assert_eq!(list.get_at(4).unwrap(), &"f");

        let forward: Vec<_> = list.iter().copied().collect();
        let mut backward: Vec<_> = list.iter().rev().copied().collect();
        backward.reverse();
        assert_eq!(forward, vec!["a", "c", "d", "x", "f"]);
        assert_eq!(forward, backward);
    }
}

//! Doubly-linked FIFO list backed by a slab of node slots.
//!
//! Nodes never own each other: `head`, `tail`, `prev` and `next` are slot
//! indices into `slots`, and the list owns every slot. Popped slots go on a
//! free list and are reused by later pushes, so both ends stay O(1).

use std::fmt;
use std::iter::FusedIterator;

struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// FIFO list. Allows duplicates; membership is a linear scan.
pub struct List<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    length: usize,
}

impl<T> List<T> {
    /// Create a new, empty list
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty list with room for `capacity` nodes before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            length: 0,
        }
    }

    /// Append `value` after the current tail. O(1) amortized.
    pub fn push_back(&mut self, value: T) {
        let len_before = self.length;
        let node = Node {
            value,
            prev: self.tail,
            next: None,
        };
        let index = match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(node);
                index
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };

        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.length += 1;

        // -- post op assertion: exactly one node was linked in
        debug_assert_eq!(self.length, len_before + 1, "List length must grow by 1");
        debug_assert!(self.head.is_some() && self.tail == Some(index));
    }

    /// Detach the head node and return its value, or `None` when empty. O(1).
    pub fn pop_head(&mut self) -> Option<T> {
        let index = self.head?;
        let node = self.take_node(index);

        self.head = node.next;
        match node.next {
            Some(next) => self.node_mut(next).prev = None,
            None => self.tail = None,
        }
        self.length -= 1;

        if self.length == 0 {
            // every slot is vacant now; start over instead of growing the free list
            self.slots.clear();
            self.free.clear();
        } else {
            self.free.push(index);
        }

        // -- post op assertion: head, tail and length agree on emptiness
        debug_assert_eq!(self.head.is_none(), self.length == 0);
        debug_assert_eq!(self.tail.is_none(), self.length == 0);
        Some(node.value)
    }

    /// Number of nodes in the list
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether the list holds no nodes
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Borrowing iterator from head to tail
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            next: self.head,
            remaining: self.length,
        }
    }

    fn node_mut(&mut self, index: usize) -> &mut Node<T> {
        match self.slots[index].as_mut() {
            Some(node) => node,
            None => unreachable!("link points at vacant slot {index}"),
        }
    }

    fn take_node(&mut self, index: usize) -> Node<T> {
        match self.slots[index].take() {
            Some(node) => node,
            None => unreachable!("link points at vacant slot {index}"),
        }
    }

    /// Walk the chain both ways and check it against `length`, `head` and `tail`.
    #[cfg(test)]
    pub(crate) fn assert_links(&self) {
        let mut forward = Vec::new();
        let mut cursor = self.head;
        let mut prev = None;
        while let Some(index) = cursor {
            let node = self.slots[index].as_ref().expect("occupied slot");
            assert_eq!(node.prev, prev, "back-link of slot {index}");
            forward.push(index);
            prev = Some(index);
            cursor = node.next;
        }
        assert_eq!(forward.len(), self.length);
        assert_eq!(forward.last().copied(), self.tail);

        let mut backward = Vec::new();
        let mut cursor = self.tail;
        while let Some(index) = cursor {
            backward.push(index);
            cursor = self.slots[index].as_ref().expect("occupied slot").prev;
        }
        backward.reverse();
        assert_eq!(forward, backward);
        assert_eq!(self.head.is_none(), self.length == 0);
        assert_eq!(self.tail.is_none(), self.length == 0);
    }
}

impl<T: PartialEq> List<T> {
    /// Linear scan from head to tail. O(n).
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|item| item == value)
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`List`], head first.
pub struct Iter<'a, T> {
    slots: &'a [Option<Node<T>>],
    next: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.slots[self.next?].as_ref()?;
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_list_is_empty() {
        let list: List<i32> = List::new();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        list.assert_links();
    }

    #[test]
    fn pop_on_empty_leaves_state_unchanged() {
        let mut list: List<i32> = List::new();
        assert_eq!(list.pop_head(), None);
        assert_eq!(list.len(), 0);
        list.assert_links();
    }

    #[test]
    fn pops_in_push_order() {
        let mut list = List::new();
        for i in 1..=5 {
            list.push_back(i);
            list.assert_links();
        }
        assert_eq!(list.len(), 5);
        for expected in 1..=5 {
            assert_eq!(list.pop_head(), Some(expected));
            list.assert_links();
        }
        assert_eq!(list.pop_head(), None);
    }

    #[test]
    fn allows_duplicates() {
        let mut list = List::new();
        list.push_back("a");
        list.push_back("a");
        assert_eq!(list.len(), 2);
        assert_eq!(list.pop_head(), Some("a"));
        assert!(list.contains(&"a"));
        assert_eq!(list.pop_head(), Some("a"));
        assert!(!list.contains(&"a"));
    }

    #[test]
    fn contains_scans_whole_chain() {
        let mut list = List::new();
        assert!(!list.contains(&1));
        list.extend([1, 2, 3]);
        assert!(list.contains(&1));
        assert!(list.contains(&3));
        assert!(!list.contains(&4));

        list.pop_head();
        assert!(!list.contains(&1));
        assert!(list.contains(&2));
    }

    #[test]
    fn reuses_freed_slots_after_interleaved_ops() {
        let mut list = List::new();
        list.extend([1, 2, 3]);
        assert_eq!(list.pop_head(), Some(1));
        list.push_back(4);
        assert_eq!(list.slots.len(), 3, "freed head slot should be reused");
        list.assert_links();

        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
        assert_eq!(list.iter().len(), 3);
    }

    #[test]
    fn draining_resets_the_slab() {
        let mut list = List::with_capacity(4);
        list.extend(["x", "y"]);
        list.pop_head();
        list.pop_head();
        assert!(list.slots.is_empty());
        assert!(list.free.is_empty());

        list.push_back("z");
        list.assert_links();
        assert_eq!(list.pop_head(), Some("z"));
    }

    #[test]
    fn debug_lists_values_in_order() {
        let mut list = List::new();
        list.extend([3, 1, 2]);
        assert_eq!(format!("{list:?}"), "[3, 1, 2]");
    }
}

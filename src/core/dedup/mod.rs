//! Single-threaded FIFO queue that holds at most one pending copy of a value.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::core::config::QueueConfig;
use crate::core::list::{self, List};
use crate::core::stats::QueueStats;

/// FIFO list coupled with a membership index.
///
/// A value is in `index` exactly when it is reachable in `list`, so a value
/// can be pushed again as soon as it has been popped. Both sides share one
/// `Arc` per value; the list's handle is the only one left once the index
/// entry is gone. No internal locking; see [`ConcurrentDedupQueue`] for
/// shared use.
///
/// [`ConcurrentDedupQueue`]: crate::core::concurrent::ConcurrentDedupQueue
pub struct DedupQueue<T> {
    name: String,
    list: List<Arc<T>>,
    index: HashSet<Arc<T>>,
    stats: QueueStats,
}

impl<T: Eq + Hash> DedupQueue<T> {
    /// Create a new, empty queue with the default config
    pub fn new() -> Self {
        Self::with_config(&QueueConfig::default())
    }

    /// Create an empty queue named and pre-sized by `config`
    pub fn with_config(config: &QueueConfig) -> Self {
        Self {
            name: config.name.clone(),
            list: List::with_capacity(config.capacity_hint),
            index: HashSet::with_capacity(config.capacity_hint),
            stats: QueueStats::default(),
        }
    }

    /// Append `value` unless an equal value is already pending.
    ///
    /// Returns `true` if the value was admitted. A rejected duplicate leaves
    /// the existing entry where it is.
    pub fn push_back(&mut self, value: T) -> bool {
        if self.index.contains(&value) {
            self.stats.duplicates += 1;
            debug!(queue = %self.name, len = self.list.len(), "duplicate rejected");
            return false;
        }

        let entry = Arc::new(value);
        self.index.insert(Arc::clone(&entry));
        self.list.push_back(entry);
        self.stats.enqueued += 1;
        trace!(queue = %self.name, len = self.list.len(), "enqueued");

        // -- post op assertion: index and list grow in lockstep
        debug_assert_eq!(
            self.index.len(),
            self.list.len(),
            "Membership index must match list length after push"
        );
        true
    }

    /// Remove and return the oldest pending value, or `None` when empty.
    ///
    /// The value leaves the membership index in the same step.
    pub fn pop_head(&mut self) -> Option<T> {
        let Some(entry) = self.list.pop_head() else {
            self.stats.empty_pops += 1;
            debug!(queue = %self.name, "pop on empty queue");
            return None;
        };

        let removed = self.index.remove(&entry);
        self.stats.popped += 1;
        trace!(queue = %self.name, len = self.list.len(), "popped");

        // -- post op assertion: popped value was indexed, sizes still agree
        debug_assert!(removed, "Popped value must have been in the membership index");
        debug_assert_eq!(self.index.len(), self.list.len());

        match Arc::try_unwrap(entry) {
            Ok(value) => Some(value),
            Err(_) => unreachable!("popped value is still shared with the membership index"),
        }
    }

    /// `(value, found)` form of [`pop_head`](Self::pop_head): an empty
    /// queue yields `(T::default(), false)`.
    pub fn pop_head_or_default(&mut self) -> (T, bool)
    where
        T: Default,
    {
        match self.pop_head() {
            Some(value) => (value, true),
            None => (T::default(), false),
        }
    }

    /// Whether an equal value is pending. O(1) via the membership index.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        Arc<T>: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains(value)
    }
}

impl<T> DedupQueue<T> {
    /// Number of distinct pending values
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Whether no value is pending
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pending values, oldest first
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.list.iter(),
        }
    }

    /// Copy of the operation counters
    pub fn stats(&self) -> QueueStats {
        self.stats
    }

    /// Label used in this queue's log events
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T: Eq + Hash> Default for DedupQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> Extend<T> for DedupQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T: Eq + Hash> FromIterator<T> for DedupQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<'a, T> IntoIterator for &'a DedupQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for DedupQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DedupQueue")
            .field("name", &self.name)
            .field("pending", &self.list)
            .finish()
    }
}

/// Iterator over a [`DedupQueue`], oldest first.
pub struct Iter<'a, T> {
    inner: list::Iter<'a, Arc<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| &**entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

//! Thread-safe facade over [`DedupQueue`].
//!
//! One `RwLock` guards the whole queue. Mutations take it exclusively, pure
//! observations take it shared. No call waits for content: popping an empty
//! queue returns immediately.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::core::config::QueueConfig;
use crate::core::dedup::DedupQueue;
use crate::core::stats::QueueStats;

/// [`DedupQueue`] behind a reader-writer lock.
pub struct ConcurrentDedupQueue<T> {
    inner: RwLock<DedupQueue<T>>,
}

impl<T: Eq + Hash> ConcurrentDedupQueue<T> {
    /// Create a new, empty queue with the default config
    pub fn new() -> Self {
        Self::from(DedupQueue::new())
    }

    /// Create an empty queue named and pre-sized by `config`
    pub fn with_config(config: &QueueConfig) -> Self {
        Self::from(DedupQueue::with_config(config))
    }

    /// Append `value` unless it is already pending. Takes the write lock.
    pub fn push_back(&self, value: T) -> bool {
        self.write().push_back(value)
    }

    /// Remove the oldest pending value. Takes the write lock.
    pub fn pop_head(&self) -> Option<T> {
        self.write().pop_head()
    }

    /// `(value, found)` form of [`pop_head`](Self::pop_head).
    pub fn pop_head_or_default(&self) -> (T, bool)
    where
        T: Default,
    {
        self.write().pop_head_or_default()
    }

    /// O(1) membership check under the read lock
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        Arc<T>: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.read().contains(value)
    }
}

impl<T> ConcurrentDedupQueue<T> {
    /// Clone of the pending values, oldest first, taken under one read lock
    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.read().iter().cloned().collect()
    }

    /// Number of distinct pending values, under the read lock
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether no value is pending.
    ///
    /// Takes the read lock like [`len`](Self::len), so the answer is never
    /// stale or torn while writers are active; there is no lock-free path.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Copy of the operation counters, under the read lock
    pub fn stats(&self) -> QueueStats {
        self.read().stats()
    }

    /// Label used in this queue's log events
    pub fn name(&self) -> String {
        self.read().name().to_string()
    }

    /// Unwrap into the single-threaded queue
    pub fn into_inner(self) -> DedupQueue<T> {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    // A panic inside a critical section can only come from T's Hash or Eq;
    // the queue stays usable rather than poisoning every later caller.
    fn read(&self) -> RwLockReadGuard<'_, DedupQueue<T>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, DedupQueue<T>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> From<DedupQueue<T>> for ConcurrentDedupQueue<T> {
    fn from(queue: DedupQueue<T>) -> Self {
        Self {
            inner: RwLock::new(queue),
        }
    }
}

impl<T: Eq + Hash> Default for ConcurrentDedupQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ConcurrentDedupQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcurrentDedupQueue")
            .field("inner", &*self.read())
            .finish()
    }
}

/// Shared handle passed to producer and consumer threads
pub type SharedDedupQueue<T> = Arc<ConcurrentDedupQueue<T>>;

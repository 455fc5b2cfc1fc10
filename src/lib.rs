//! # uniqueue
//!
//! FIFO queues that refuse a value while an equal value is still pending.
//!
//! Three layers, each wrapping the previous one:
//! - [`List`]: slab-backed doubly-linked FIFO list (duplicates allowed)
//! - [`DedupQueue`]: list + membership index, single-threaded
//! - [`ConcurrentDedupQueue`]: `RwLock`-guarded facade for shared use

pub mod core;

pub use crate::core::{
    concurrent::{ConcurrentDedupQueue, SharedDedupQueue},
    config::QueueConfig,
    dedup::DedupQueue,
    error::{Error, Result},
    list::List,
    stats::QueueStats,
};

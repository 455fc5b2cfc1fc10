pub mod concurrent;
pub mod config;
pub mod dedup;
pub mod error;
pub mod list;
pub mod stats;

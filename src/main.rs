use std::sync::Arc;
use std::thread;

use tracing::info;
use tracing_subscriber::EnvFilter;
use uniqueue::{ConcurrentDedupQueue, QueueConfig, Result, SharedDedupQueue};

const PRODUCERS: usize = 4;
const CONSUMERS: usize = 3;
const ITEMS_PER_PRODUCER: usize = 50;

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Optional JSON config path as the first argument
    let config = match std::env::args().nth(1) {
        Some(path) => QueueConfig::from_path(path)?,
        None => QueueConfig::new("work-items").with_capacity_hint(PRODUCERS * ITEMS_PER_PRODUCER),
    };
    let queue: SharedDedupQueue<String> = Arc::new(ConcurrentDedupQueue::with_config(&config));

    // Producers submit overlapping ranges, so half of each range collides with a neighbour
    let producers: Vec<_> = (0..PRODUCERS)
        .map(|producer| {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                let start = producer * ITEMS_PER_PRODUCER / 2;
                (start..start + ITEMS_PER_PRODUCER)
                    .filter(|i| queue.push_back(format!("job-{i}")))
                    .count()
            })
        })
        .collect();
    let admitted: usize = producers
        .into_iter()
        .map(|handle| handle.join().expect("producer thread panicked"))
        .sum();
    info!(queue = %config.name, admitted, pending = queue.len(), "producers finished");

    let consumers: Vec<_> = (0..CONSUMERS)
        .map(|_| {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                let mut handled = 0usize;
                while queue.pop_head().is_some() {
                    handled += 1;
                }
                handled
            })
        })
        .collect();
    let handled: usize = consumers
        .into_iter()
        .map(|handle| handle.join().expect("consumer thread panicked"))
        .sum();
    info!(queue = %config.name, handled, empty = queue.is_empty(), "consumers drained queue");

    println!("{}", queue.stats().to_json()?);
    Ok(())
}

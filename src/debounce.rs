//! Delayed propagation for rapidly-changing input values.
//!
//! A `Debouncer` hands out a generation number and a timer future each time
//! the input changes. When a timer completes, `settle` tells the caller
//! whether that generation is still the latest; completions for superseded
//! generations are stale and must be dropped. Only the final value of a
//! burst of changes is ever propagated downstream.

use std::future::Future;
use std::time::Duration;

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    generation: u64,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            generation: 0,
        }
    }

    /// Start a new delay window.
    ///
    /// Returns the generation number for this change together with a future
    /// that resolves to it after the configured delay. Calling `schedule`
    /// again before the delay elapses supersedes the earlier generation.
    pub fn schedule(&mut self) -> (u64, impl Future<Output = u64> + Send + 'static) {
        self.generation += 1;
        let generation = self.generation;
        let delay = self.delay;

        (generation, async move {
            tokio::time::sleep(delay).await;
            generation
        })
    }

    /// Whether a completed timer still speaks for the latest change.
    pub fn settle(&self, generation: u64) -> bool {
        generation == self.generation
    }
}

//! Keystroke debouncing for the search box.
//!
//! Each keystroke takes a ticket from [`Debounce::schedule`] and sleeps for
//! the delay; only the holder of the newest ticket may issue the request.
//! Earlier timers wake up, see a stale ticket, and do nothing.

use std::time::Duration;

/// Delay used when `flux.toml` does not set `search.debounce_ms`.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debounce {
    delay: Duration,
    generation: u64,
}

impl Default for Debounce {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Invalidate every earlier ticket and return a new one.
    pub fn schedule(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Invalidate every outstanding ticket without issuing one.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.generation
    }
}

/// Whether `query` is worth sending at all.
pub fn is_searchable(query: &str) -> bool {
    !query.trim().is_empty()
}

/// Sleep on whichever timer the platform has.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

//! Clock abstraction for deterministic scheduling.
//!
//! The core is fed [`Tick`]s and never reads time itself; the runtime owns
//! the mapping from real (or virtual) time to ticks through this trait.

use std::sync::atomic::{AtomicU64, Ordering};

use rove_core::Tick;

/// Monotonic time source polled by the runtime each frame.
///
/// One tick is one millisecond under [`MonotonicClock`]; tests substitute
/// [`ManualClock`] to step time explicitly.
pub trait Clock: Send + Sync {
    fn now(&self) -> Tick;
}

/// Clock backed by tokio's time driver, so paused-time tests observe
/// virtual time instead of the wall clock.
#[derive(Debug)]
pub struct MonotonicClock {
    origin: tokio::time::Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: tokio::time::Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Tick {
        Tick(self.origin.elapsed().as_millis() as u64)
    }
}

/// Manually stepped clock for deterministic tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicU64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, ticks: u64) {
        self.now.fetch_add(ticks, Ordering::SeqCst);
    }

    pub fn set(&self, tick: Tick) {
        self.now.store(tick.0, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Tick {
        Tick(self.now.load(Ordering::SeqCst))
    }
}

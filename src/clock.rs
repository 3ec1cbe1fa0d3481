use std::cell::Cell;
use std::time::{Duration, Instant};

/// Timer surface the search consults between iterations.
pub trait Clock {
    /// Milliseconds spent on the current decision.
    fn elapsed_ms(&self) -> u64;
    /// Milliseconds left on the game clock when the decision started.
    fn remaining_ms(&self) -> u64;
}

/// Wall clock started at construction.
#[derive(Debug, Clone, Copy)]
pub struct GameClock {
    start: Instant,
    remaining: Duration,
}

impl GameClock {
    pub fn start(remaining: Duration) -> Self { Self { start: Instant::now(), remaining } }
}

impl Clock for GameClock {
    fn elapsed_ms(&self) -> u64 { self.start.elapsed().as_millis() as u64 }
    fn remaining_ms(&self) -> u64 { self.remaining.as_millis() as u64 }
}

/// Clock under caller control. Time only moves when `advance` is called, so a
/// search bounded by `max_iterations` against it is fully reproducible.
#[derive(Debug, Default)]
pub struct ManualClock {
    elapsed: Cell<u64>,
    remaining: u64,
}

impl ManualClock {
    pub fn new(remaining_ms: u64) -> Self { Self { elapsed: Cell::new(0), remaining: remaining_ms } }

    /// A clock that never runs out.
    pub fn frozen() -> Self { Self::new(u64::MAX) }

    pub fn advance(&self, ms: u64) { self.elapsed.set(self.elapsed.get().saturating_add(ms)); }
}

impl Clock for ManualClock {
    fn elapsed_ms(&self) -> u64 { self.elapsed.get() }
    fn remaining_ms(&self) -> u64 { self.remaining }
}

//! Monotonic tick sources used for all marquee timing.

use std::cell::Cell;
use std::time::Instant;

/// Monotonic counter plus its frequency.
///
/// A frequency of 0 means timing is unavailable; consumers must treat it as
/// "do not animate" rather than divide by it.
pub trait TickSource {
    fn now(&self) -> u64;
    /// Ticks per second.
    fn frequency(&self) -> u64;
}

/// Convert a millisecond duration to ticks at `freq`.
pub fn ms_to_ticks(freq: u64, ms: u64) -> u64 {
    freq.saturating_mul(ms) / 1000
}

/// Wall-clock independent ticks from `Instant`, one tick per nanosecond.
#[derive(Debug, Clone, Copy)]
pub struct SystemTicks {
    origin: Instant,
}

impl SystemTicks {
    pub const FREQUENCY: u64 = 1_000_000_000;

    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemTicks {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for SystemTicks {
    fn now(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }

    fn frequency(&self) -> u64 {
        Self::FREQUENCY
    }
}

/// Tick source advanced explicitly by the host.
///
/// Drives simulations and tests where frame timing must be exact.
#[derive(Debug)]
pub struct ManualTicks {
    now: Cell<u64>,
    frequency: Cell<u64>,
}

impl ManualTicks {
    pub fn new(frequency: u64) -> Self {
        Self { now: Cell::new(0), frequency: Cell::new(frequency) }
    }

    pub fn set(&self, now: u64) {
        self.now.set(now);
    }

    pub fn advance(&self, ticks: u64) {
        self.now.set(self.now.get().saturating_add(ticks));
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(ms_to_ticks(self.frequency.get(), ms));
    }

    pub fn set_frequency(&self, frequency: u64) {
        self.frequency.set(frequency);
    }
}

impl TickSource for ManualTicks {
    fn now(&self) -> u64 {
        self.now.get()
    }

    fn frequency(&self) -> u64 {
        self.frequency.get()
    }
}

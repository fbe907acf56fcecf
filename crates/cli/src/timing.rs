//! Wall-clock timing around whole engine calls
//!
//! Measurements wrap the public encrypt/decrypt/block calls from the outside;
//! nothing here reaches into the engines.

use std::fmt;
use std::time::{Duration, Instant};

/// Run `f` once and return its result with the elapsed time
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

/// Min/avg/max over a series of timed runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingStats {
    /// Number of recorded runs
    pub runs: u32,
    /// Fastest run
    pub min: Duration,
    /// Slowest run
    pub max: Duration,
    /// Sum of all runs
    pub total: Duration,
}

impl Default for TimingStats {
    fn default() -> Self {
        Self {
            runs: 0,
            min: Duration::MAX,
            max: Duration::ZERO,
            total: Duration::ZERO,
        }
    }
}

impl TimingStats {
    /// Add one run
    pub fn record(&mut self, elapsed: Duration) {
        self.runs += 1;
        self.min = self.min.min(elapsed);
        self.max = self.max.max(elapsed);
        self.total += elapsed;
    }

    /// Time `f` once and record it
    pub fn time<T>(&mut self, f: impl FnOnce() -> T) -> T {
        let (result, elapsed) = measure(f);
        self.record(elapsed);
        result
    }

    /// Mean run time, zero when nothing was recorded
    pub fn average(&self) -> Duration {
        if self.runs == 0 {
            return Duration::ZERO;
        }
        self.total / self.runs
    }

    /// Fastest run, zero when nothing was recorded
    pub fn min(&self) -> Duration {
        if self.runs == 0 {
            Duration::ZERO
        } else {
            self.min
        }
    }
}

impl fmt::Display for TimingStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "runs: {}, min: {:?}, avg: {:?}, max: {:?}",
            self.runs,
            self.min(),
            self.average(),
            self.max
        )
    }
}

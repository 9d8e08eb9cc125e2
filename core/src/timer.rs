//! Monotonic timing primitives.
//!
//! Everything here reads `std::time::Instant`, never the wall clock, so a
//! clock adjustment in the middle of a run cannot skew a measurement.

use std::time::{Duration, Instant};

/// Opaque point on the monotonic clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(Instant);

pub struct Timer;

impl Timer {
    #[inline]
    pub fn start() -> Timestamp {
        Self::now()
    }

    #[inline]
    pub fn now() -> Timestamp {
        Timestamp(Instant::now())
    }

    /// Seconds between two timestamps. Saturates to zero if `end` precedes `start`.
    #[inline]
    pub fn elapsed(start: Timestamp, end: Timestamp) -> f64 {
        Self::between(start, end).as_secs_f64()
    }

    #[inline]
    pub fn between(start: Timestamp, end: Timestamp) -> Duration {
        end.0.saturating_duration_since(start.0)
    }

    /// Runs `f` between two clock reads and returns its result with the elapsed time.
    pub fn time<F, R>(f: F) -> (R, Duration)
    where
        F: FnOnce() -> R,
    {
        let start = Self::start();
        let result = f();
        let end = Self::now();
        (result, Self::between(start, end))
    }
}

use serde::{Serialize, Serializer};
use std::time::Duration;

/// One timed run of a benchmark case. Built once by the runner, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    case: String,
    items: usize,
    repetitions: u64,
    #[serde(rename = "elapsed_ns", serialize_with = "serialize_nanos")]
    elapsed: Duration,
}

impl Measurement {
    pub fn new(case: impl Into<String>, items: usize, repetitions: u64, elapsed: Duration) -> Self {
        Self {
            case: case.into(),
            items,
            repetitions,
            elapsed,
        }
    }

    pub fn case(&self) -> &str {
        &self.case
    }

    pub fn items(&self) -> usize {
        self.items
    }

    pub fn repetitions(&self) -> u64 {
        self.repetitions
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub fn millis(&self) -> f64 {
        self.secs() * 1_000.0
    }

    pub fn micros(&self) -> f64 {
        self.secs() * 1_000_000.0
    }

    pub fn nanos(&self) -> f64 {
        self.secs() * 1_000_000_000.0
    }

    /// Repetitions per second; zero when nothing measurable elapsed.
    pub fn throughput(&self) -> f64 {
        per_second(self.repetitions as f64, self.secs())
    }

    pub fn items_per_sec(&self) -> f64 {
        per_second(self.repetitions as f64 * self.items as f64, self.secs())
    }

    pub fn mean_ns(&self) -> f64 {
        if self.repetitions == 0 {
            0.0
        } else {
            self.nanos() / self.repetitions as f64
        }
    }
}

fn per_second(count: f64, secs: f64) -> f64 {
    if secs > 0.0 { count / secs } else { 0.0 }
}

fn serialize_nanos<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX))
}

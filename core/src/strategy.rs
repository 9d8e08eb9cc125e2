//! The data-passing strategies being compared and the loop that times them.

use crate::{
    measurement::Measurement,
    timer::Timer,
    workload::{Item, Producer},
};
use anyhow::{Result, bail};
use serde::Serialize;
use std::hint::black_box;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Build and return a new container; the caller drops it right away.
    ConstructAndReturn,
    /// Build a new container and move it over one the loop already owns.
    MoveAssign,
    /// Create an empty container per repetition and fill it by reference.
    ReferenceCreate,
    /// One container for the whole loop; the unit of work clears it before filling.
    ReferenceClear,
    /// One container for the whole loop; the loop clears it and the unit of work only appends.
    ReferenceCallerClear,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::ConstructAndReturn,
        Strategy::MoveAssign,
        Strategy::ReferenceCreate,
        Strategy::ReferenceClear,
        Strategy::ReferenceCallerClear,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Strategy::ConstructAndReturn => "construct-and-return",
            Strategy::MoveAssign => "move-assign",
            Strategy::ReferenceCreate => "reference-create",
            Strategy::ReferenceClear => "reference-clear",
            Strategy::ReferenceCallerClear => "reference-caller-clear",
        }
    }

    /// One unit of work. `reused` is the container the loop owns across repetitions;
    /// strategies that allocate per call leave it untouched.
    #[inline]
    pub fn step<P: Producer + ?Sized>(self, producer: &P, reused: &mut Vec<Item>) {
        match self {
            Strategy::ConstructAndReturn => {
                let out = producer.produce();
                black_box(&out);
            }
            Strategy::MoveAssign => {
                *reused = producer.produce();
                black_box(&*reused);
            }
            Strategy::ReferenceCreate => {
                let mut out = Vec::new();
                producer.produce_into(&mut out);
                black_box(&out);
            }
            Strategy::ReferenceClear => {
                producer.refill(reused);
                black_box(&*reused);
            }
            Strategy::ReferenceCallerClear => {
                reused.clear();
                producer.produce_into(reused);
                black_box(&*reused);
            }
        }
    }

    /// Runs one unit of work and hands back what it produced.
    pub fn observe<P: Producer + ?Sized>(self, producer: &P, reused: &mut Vec<Item>) -> Vec<Item> {
        match self {
            Strategy::ConstructAndReturn => producer.produce(),
            Strategy::ReferenceCreate => {
                let mut out = Vec::new();
                producer.produce_into(&mut out);
                out
            }
            Strategy::MoveAssign | Strategy::ReferenceClear | Strategy::ReferenceCallerClear => {
                self.step(producer, reused);
                reused.clone()
            }
        }
    }
}

/// A labelled strategy as it appears in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchmarkCase {
    pub label: String,
    pub strategy: Strategy,
}

impl BenchmarkCase {
    pub fn new(label: impl Into<String>, strategy: Strategy) -> Self {
        Self {
            label: label.into(),
            strategy,
        }
    }

    /// Checks that two consecutive units of work both yield the producer's expected output.
    /// The second call catches strategies that leak the previous contents.
    pub fn verify<P: Producer + ?Sized>(&self, producer: &P) -> Result<()> {
        let expected = producer.expected();
        let mut reused = Vec::new();
        for attempt in 1..=2 {
            let actual = self.strategy.observe(producer, &mut reused);
            if actual != expected {
                bail!(
                    "case '{}' ({}) produced {:?} on call {} but {} expects {:?}",
                    self.label,
                    self.strategy.key(),
                    actual,
                    attempt,
                    producer.describe(),
                    expected
                );
            }
        }
        Ok(())
    }

    /// Times `repetitions` units of work. The reused container lives for the whole loop.
    pub fn run<P: Producer + ?Sized>(&self, producer: &P, repetitions: u64) -> Measurement {
        let strategy = self.strategy;
        let mut reused: Vec<Item> = Vec::new();

        let ((), elapsed) = Timer::time(|| {
            for _ in 0..repetitions {
                strategy.step(producer, &mut reused);
            }
            // Releasing the reused container is part of its cost.
            drop(reused);
        });

        let measurement = Measurement::new(&self.label, producer.len(), repetitions, elapsed);
        debug!(
            case = %self.label,
            strategy = strategy.key(),
            items = measurement.items(),
            repetitions,
            elapsed_ms = measurement.millis(),
            "case finished"
        );
        measurement
    }

    pub fn verify_and_run<P: Producer + ?Sized>(&self, producer: &P, repetitions: u64) -> Result<Measurement> {
        self.verify(producer)?;
        Ok(self.run(producer, repetitions))
    }
}

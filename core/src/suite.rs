//! The four benchmark programs, expressed as data over one runner.

use crate::{
    config::{BenchConfig, MultiplierSweepConfig},
    measurement::Measurement,
    report::Comparison,
    strategy::{BenchmarkCase, Strategy},
    workload::{EvenValues, Sequence},
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Suite {
    /// Filter the sample table by value vs. into a reused vector, then compare.
    Compare,
    /// Fixed repetitions over growing item counts.
    Items,
    /// One item, repetitions scaled by a multiplier.
    Multiplier,
    /// Like `Multiplier`, but the loop clears the reused vector instead of the callee.
    Runtime,
}

impl Suite {
    pub const ALL: [Suite; 4] = [Suite::Compare, Suite::Items, Suite::Multiplier, Suite::Runtime];

    pub fn key(self) -> &'static str {
        match self {
            Suite::Compare => "compare",
            Suite::Items => "items",
            Suite::Multiplier => "multiplier",
            Suite::Runtime => "runtime",
        }
    }

    pub fn cases(self) -> Vec<BenchmarkCase> {
        match self {
            Suite::Compare => vec![
                BenchmarkCase::new("map2vec_ce()", Strategy::ConstructAndReturn),
                BenchmarkCase::new("map2vec_ref()", Strategy::ReferenceClear),
            ],
            Suite::Items => vec![
                BenchmarkCase::new("NRVO", Strategy::ConstructAndReturn),
                BenchmarkCase::new("move-semantic", Strategy::MoveAssign),
                BenchmarkCase::new("reference + clear", Strategy::ReferenceClear),
            ],
            Suite::Multiplier => vec![
                BenchmarkCase::new("copy-elision", Strategy::ConstructAndReturn),
                BenchmarkCase::new("move-semantic", Strategy::MoveAssign),
                BenchmarkCase::new("reference + create", Strategy::ReferenceCreate),
                BenchmarkCase::new("reference + clear", Strategy::ReferenceClear),
            ],
            Suite::Runtime => vec![
                BenchmarkCase::new("copy-elision", Strategy::ConstructAndReturn),
                BenchmarkCase::new("move-semantic", Strategy::MoveAssign),
                BenchmarkCase::new("reference + create", Strategy::ReferenceCreate),
                BenchmarkCase::new("reference + clear", Strategy::ReferenceCallerClear),
            ],
        }
    }

    /// Which measurement field a sweep line is keyed by.
    pub fn axis(self) -> Axis {
        match self {
            Suite::Compare | Suite::Multiplier | Suite::Runtime => Axis::Repetitions,
            Suite::Items => Axis::Items,
        }
    }
}

impl fmt::Display for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Axis {
    Items,
    Repetitions,
}

impl Axis {
    pub fn value(self, measurement: &Measurement) -> u64 {
        match self {
            Axis::Items => measurement.items() as u64,
            Axis::Repetitions => measurement.repetitions(),
        }
    }
}

/// Every measurement taken for one case, in sweep order.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub case: BenchmarkCase,
    pub measurements: Vec<Measurement>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    pub suite: Suite,
    pub axis: Axis,
    pub sections: Vec<Section>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Comparison>,
}

impl SuiteReport {
    /// Repetitions of the first measurement; the comparison suite uses one count throughout.
    pub fn repetitions(&self) -> Option<u64> {
        self.sections
            .first()
            .and_then(|section| section.measurements.first())
            .map(Measurement::repetitions)
    }
}

pub fn run_suite(suite: Suite, config: &BenchConfig) -> Result<SuiteReport> {
    info!(suite = suite.key(), "running benchmark suite");
    let sections = match suite {
        Suite::Compare => run_compare(suite, config.compare.repetitions)?,
        Suite::Items => run_items(suite, config)?,
        Suite::Multiplier => run_multiplier(suite, &config.multiplier)?,
        Suite::Runtime => run_multiplier(suite, &config.runtime)?,
    };

    let comparison = match (suite, sections.as_slice()) {
        (Suite::Compare, [by_value, by_reference]) => match (by_value.measurements.first(), by_reference.measurements.first()) {
            (Some(a), Some(b)) => Some(Comparison::between(a, b)),
            _ => None,
        },
        _ => None,
    };

    Ok(SuiteReport {
        suite,
        axis: suite.axis(),
        sections,
        comparison,
    })
}

fn run_compare(suite: Suite, repetitions: u64) -> Result<Vec<Section>> {
    let producer = EvenValues::sample();
    suite
        .cases()
        .into_iter()
        .map(|case| {
            let measurement = case
                .verify_and_run(&producer, repetitions)
                .with_context(|| format!("{} suite", suite))?;
            Ok(Section {
                case,
                measurements: vec![measurement],
            })
        })
        .collect()
}

fn run_items(suite: Suite, config: &BenchConfig) -> Result<Vec<Section>> {
    let sweep = &config.items;
    suite
        .cases()
        .into_iter()
        .map(|case| {
            let measurements = sweep
                .item_counts()
                .map(|items| {
                    case.verify_and_run(&Sequence::new(items), sweep.repetitions)
                        .with_context(|| format!("{} suite at {} items", suite, items))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(Section { case, measurements })
        })
        .collect()
}

fn run_multiplier(suite: Suite, sweep: &MultiplierSweepConfig) -> Result<Vec<Section>> {
    let producer = Sequence::new(sweep.items);
    suite
        .cases()
        .into_iter()
        .map(|case| {
            case.verify(&producer).with_context(|| format!("{} suite", suite))?;
            let measurements = sweep
                .repetitions()
                .map(|repetitions| case.run(&producer, repetitions))
                .collect();
            Ok(Section { case, measurements })
        })
        .collect()
}

//! Harness for timing by-value container construction against by-reference reuse.
//!
//! A [`workload::Producer`] describes what one unit of work builds, a
//! [`strategy::Strategy`] decides who owns the container, and
//! [`suite::run_suite`] strings them together into the stock benchmark
//! programs. [`report`] turns the resulting measurements into text or JSON.

pub mod config;
pub mod measurement;
pub mod report;
pub mod strategy;
pub mod suite;
pub mod timer;
pub mod workload;

#[cfg(test)]
mod report_test;
#[cfg(test)]
mod workload_test;

pub use config::BenchConfig;
pub use measurement::Measurement;
pub use strategy::{BenchmarkCase, Strategy};
pub use suite::{Suite, SuiteReport, run_suite};

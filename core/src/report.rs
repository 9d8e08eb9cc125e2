//! Human-readable and JSON renderings of suite results.

use crate::{
    measurement::Measurement,
    suite::{Suite, SuiteReport},
};
use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::io::Write;

/// Significant digits used for duration blocks.
pub const DURATION_PRECISION: usize = 9;
/// Significant digits used for sweep lines.
pub const SWEEP_PRECISION: usize = 6;

const BANNER_RULE: &str = "**************************************************************";

/// Relative gap between two timings, in percent of the slower one.
/// Symmetric in its arguments; zero when both are zero.
pub fn percent_slower(a: f64, b: f64) -> f64 {
    let (min, max) = if a <= b { (a, b) } else { (b, a) };
    if max <= 0.0 {
        return 0.0;
    }
    (1.0 - min / max) * 100.0
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub slower: String,
    pub faster: String,
    pub percent: f64,
    pub tie: bool,
}

impl Comparison {
    /// On a tie the labels keep argument order: `a` is reported as the slower one.
    pub fn between(a: &Measurement, b: &Measurement) -> Self {
        let (a_ms, b_ms) = (a.millis(), b.millis());
        let (slower, faster) = if b_ms > a_ms { (b, a) } else { (a, b) };
        Self {
            slower: slower.case().to_string(),
            faster: faster.case().to_string(),
            percent: percent_slower(a_ms, b_ms),
            tie: a_ms == b_ms,
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "{} is slower than {} by {}%",
            self.slower,
            self.faster,
            format_general(self.percent, SWEEP_PRECISION)
        )
    }

    pub fn recommendation(&self) -> String {
        format!("USE {} IMPLEMENTATION FOR BEST PERFORMANCES", self.faster)
    }
}

/// Formats `value` with `precision` significant digits, switching to exponent
/// notation for very small or very large magnitudes. Trailing zeros are dropped.
pub fn format_general(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let precision = precision.max(1);
    // Rounding to `precision` digits can bump the exponent (9.9999 -> 1.0e1),
    // so take it from the rounded scientific form.
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        return format!("{}e{}", trim_fraction(mantissa), exponent);
    }
    let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
    trim_fraction(&format!("{:.*}", decimals, value)).to_string()
}

fn trim_fraction(raw: &str) -> &str {
    if raw.contains('.') {
        raw.trim_end_matches('0').trim_end_matches('.')
    } else {
        raw
    }
}

pub fn duration_line(measurement: &Measurement) -> String {
    format!(
        "Duration = {}s ≈ {}ms ≈ {}µs ≈ {}ns",
        format_general(measurement.secs(), DURATION_PRECISION),
        format_general(measurement.millis(), DURATION_PRECISION),
        format_general(measurement.micros(), DURATION_PRECISION),
        format_general(measurement.nanos(), DURATION_PRECISION),
    )
}

pub fn throughput_line(measurement: &Measurement) -> String {
    format!(
        "Throughput ≈ {} calls/s ≈ {} items/s",
        format_general(measurement.throughput(), SWEEP_PRECISION),
        format_general(measurement.items_per_sec(), SWEEP_PRECISION),
    )
}

/// `<axis value>,<duration in ms>`
pub fn sweep_line(axis_value: u64, measurement: &Measurement) -> String {
    format!("{},{}", axis_value, format_general(measurement.millis(), SWEEP_PRECISION))
}

pub fn write_text<W: Write>(out: &mut W, report: &SuiteReport) -> Result<()> {
    let written = match report.suite {
        Suite::Compare => write_compare(out, report),
        Suite::Items | Suite::Multiplier | Suite::Runtime => write_sweep(out, report),
    };
    written.with_context(|| format!("write {} report", report.suite))
}

fn write_compare<W: Write>(out: &mut W, report: &SuiteReport) -> std::io::Result<()> {
    writeln!(out, "{}", BANNER_RULE)?;
    writeln!(out, "          copy_elision    VS    reference + clear()")?;
    writeln!(out, "{}", BANNER_RULE)?;
    writeln!(out)?;
    if let Some(repetitions) = report.repetitions() {
        writeln!(out, " ITERATIONS: {}", repetitions)?;
        writeln!(out)?;
    }

    for section in &report.sections {
        for measurement in &section.measurements {
            // Headings name the function; the verdict lines keep the call parentheses.
            writeln!(out, "Benchmark with {}", section.case.label.trim_end_matches("()"))?;
            writeln!(out, "{}", duration_line(measurement))?;
            writeln!(out, "{}", throughput_line(measurement))?;
            writeln!(out)?;
        }
    }

    if let Some(comparison) = &report.comparison {
        writeln!(out, " {}", comparison.summary())?;
        writeln!(out, " {}", comparison.recommendation())?;
    }
    Ok(())
}

fn write_sweep<W: Write>(out: &mut W, report: &SuiteReport) -> std::io::Result<()> {
    for (idx, section) in report.sections.iter().enumerate() {
        if idx > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", section.case.label)?;
        for measurement in &section.measurements {
            writeln!(out, "{}", sweep_line(report.axis.value(measurement), measurement))?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonRun<'a> {
    generated_at: String,
    suites: Vec<JsonSuite<'a>>,
}

#[derive(Serialize)]
struct JsonSuite<'a> {
    #[serde(flatten)]
    report: &'a SuiteReport,
    derived: Vec<JsonDerived<'a>>,
}

#[derive(Serialize)]
struct JsonDerived<'a> {
    case: &'a str,
    items: usize,
    repetitions: u64,
    millis: f64,
    mean_ns: f64,
    throughput_per_sec: f64,
    items_per_sec: f64,
}

impl<'a> From<&'a Measurement> for JsonDerived<'a> {
    fn from(m: &'a Measurement) -> Self {
        Self {
            case: m.case(),
            items: m.items(),
            repetitions: m.repetitions(),
            millis: m.millis(),
            mean_ns: m.mean_ns(),
            throughput_per_sec: m.throughput(),
            items_per_sec: m.items_per_sec(),
        }
    }
}

/// Serializes a batch of suite reports as one pretty-printed JSON document.
pub fn write_json<W: Write>(out: &mut W, reports: &[SuiteReport]) -> Result<()> {
    let run = JsonRun {
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        suites: reports
            .iter()
            .map(|report| JsonSuite {
                report,
                derived: report
                    .sections
                    .iter()
                    .flat_map(|section| section.measurements.iter().map(JsonDerived::from))
                    .collect(),
            })
            .collect(),
    };
    serde_json::to_writer_pretty(&mut *out, &run).context("serialize benchmark report")?;
    writeln!(out).context("write benchmark report")?;
    Ok(())
}

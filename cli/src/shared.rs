//! Pieces shared by the `elision` driver and the single-variant executables.

use anyhow::{Context, Result};
use elision_core::{SuiteReport, report};
use std::io::Write;
use std::sync::Once;

static TRACE_INIT: Once = Once::new();
const TRACE_ENV: &str = "ELISION_TRACE";
const DEFAULT_TRACE_FILTER: &str = "elision_core=debug,elision=info";

pub(crate) fn env_toggle_enabled(raw: &str) -> bool {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return false;
    }
    !(trimmed.eq_ignore_ascii_case("0") || trimmed.eq_ignore_ascii_case("false") || trimmed.eq_ignore_ascii_case("off"))
}

pub(crate) fn filter_expr_from(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("1")
        || trimmed.eq_ignore_ascii_case("true")
        || trimmed.eq_ignore_ascii_case("on")
    {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Installs a stderr subscriber when `ELISION_TRACE` is set. Stdout stays benchmark-only.
pub fn maybe_init_tracing() {
    let raw = match std::env::var(TRACE_ENV) {
        Ok(value) => value,
        Err(_) => return,
    };

    if !env_toggle_enabled(&raw) {
        return;
    }

    TRACE_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        use tracing_subscriber::fmt;

        let builder = fmt().with_writer(std::io::stderr);
        let builder = match filter_expr_from(&raw).and_then(|expr| EnvFilter::try_new(expr).ok()) {
            Some(filter) => builder.with_env_filter(filter),
            None => builder.with_env_filter(DEFAULT_TRACE_FILTER),
        };

        let _ = builder.try_init();
    });
}

/// Prints reports in the plain-text layout, one blank line between suites.
pub fn print_text(reports: &[SuiteReport]) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for (idx, suite_report) in reports.iter().enumerate() {
        if idx > 0 {
            writeln!(out).context("write suite separator")?;
        }
        report::write_text(&mut out, suite_report)?;
    }
    out.flush().context("flush stdout")?;
    Ok(())
}

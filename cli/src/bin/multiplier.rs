#[path = "../shared.rs"]
mod shared;

use elision_core::{BenchConfig, Suite, run_suite};

fn main() -> anyhow::Result<()> {
    shared::maybe_init_tracing();
    let report = run_suite(Suite::Multiplier, &BenchConfig::default())?;
    shared::print_text(&[report])
}

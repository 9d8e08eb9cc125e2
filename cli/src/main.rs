use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use elision_core::{BenchConfig, Suite, SuiteReport, report, run_suite};
use tracing::info;

mod shared;

#[derive(Debug, Parser)]
#[command(
    name = "elision",
    author,
    version,
    about = "Time by-value construction against by-reference container reuse",
    long_about = None,
    after_help = "Set ELISION_TRACE=1 (or an EnvFilter expression) to log progress to stderr."
)]
struct CliArgs {
    #[command(subcommand)]
    command: Commands,

    /// TOML file overriding the default benchmark parameters
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Replace the comparison repetitions and every sweep's base repetitions
    #[arg(long, global = true, value_name = "N")]
    repetitions: Option<u64>,

    /// Output layout
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Filter a 20-entry table by value and by reference, then compare the two.
    Compare,
    /// Fixed repetitions over growing item counts.
    Items,
    /// One item per call, repetitions scaled by a multiplier.
    Multiplier,
    /// Multiplier sweep with the caller clearing the reused vector.
    Runtime,
    /// Every suite in order.
    All,
    /// Print the effective configuration as TOML and exit.
    Config,
}

impl Commands {
    fn suites(&self) -> &'static [Suite] {
        match self {
            Commands::Compare => &[Suite::Compare],
            Commands::Items => &[Suite::Items],
            Commands::Multiplier => &[Suite::Multiplier],
            Commands::Runtime => &[Suite::Runtime],
            Commands::All => &Suite::ALL,
            Commands::Config => &[],
        }
    }
}

fn resolve_config(args: &CliArgs) -> anyhow::Result<BenchConfig> {
    let config = match &args.config {
        Some(path) => BenchConfig::load(path)?,
        None => BenchConfig::default(),
    };
    match args.repetitions {
        Some(repetitions) => config
            .with_repetitions(repetitions)
            .context("apply --repetitions override"),
        None => Ok(config),
    }
}

fn print_config(config: &BenchConfig) -> anyhow::Result<()> {
    let rendered = toml::to_string_pretty(config).context("render configuration as TOML")?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(rendered.as_bytes()).context("write configuration")?;
    out.flush().context("flush stdout")?;
    Ok(())
}

fn print_json(reports: &[SuiteReport]) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::write_json(&mut out, reports)?;
    out.flush().context("flush stdout")?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    shared::maybe_init_tracing();
    let args = CliArgs::parse();
    let config = resolve_config(&args)?;

    if matches!(args.command, Commands::Config) {
        return print_config(&config);
    }

    let suites = args.command.suites();
    info!(suites = suites.len(), format = ?args.format, "starting benchmarks");
    let reports = suites
        .iter()
        .map(|suite| run_suite(*suite, &config))
        .collect::<anyhow::Result<Vec<_>>>()?;

    match args.format {
        OutputFormat::Text => shared::print_text(&reports),
        OutputFormat::Json => print_json(&reports),
    }
}

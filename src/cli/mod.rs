//! The arraykit command-line entry point.
//!
//! Builds the utility registry and the built-in fixture groups, runs every
//! group in order and prints the reports. Takes no arguments.

use std::io;
use std::process;

use termcolor::{ColorChoice, StandardStream, WriteColor};
use tracing_subscriber::EnvFilter;

use crate::harness::{fixtures::builtin_groups, run_group, RunSummary, TestGroup};
use crate::utilities::{build_default_registry, UtilityRegistry};

pub mod output;

use output::Reporter;

/// Console settings for a run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub use_colors: bool,
    /// Print a line diff under mismatching compound values.
    pub show_diff: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stdout),
            show_diff: true,
        }
    }
}

impl RunConfig {
    pub fn color_choice(&self) -> ColorChoice {
        if self.use_colors {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        }
    }
}

/// The main entry point for the CLI.
pub fn run() {
    init_tracing();
    let config = RunConfig::default();
    let stdout = StandardStream::stdout(config.color_choice());

    if let Err(e) = run_groups(&build_default_registry(), &builtin_groups(), stdout, config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Runs and reports each group as it completes, then prints the summary.
///
/// Assertion failures are reported, not returned; only write errors are.
pub fn run_groups<W: WriteColor>(
    registry: &UtilityRegistry,
    groups: &[TestGroup],
    out: W,
    config: RunConfig,
) -> io::Result<RunSummary> {
    let mut reporter = Reporter::new(out, config);
    let mut reports = Vec::with_capacity(groups.len());
    for group in groups {
        let report = run_group(registry, group);
        reporter.report_group(&report)?;
        reports.push(report);
    }
    let summary = RunSummary::from_reports(&reports);
    reporter.report_summary(&summary)?;
    Ok(summary)
}

// RUST_LOG selects harness events; the default keeps stderr quiet.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

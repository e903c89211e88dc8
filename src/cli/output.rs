//! Handles all user-facing output for the harness.
//!
//! Reports are written to any [`WriteColor`], so tests capture them in a
//! `termcolor::Buffer` and the binary writes to a `StandardStream`.

use std::io;

use difference::{Changeset, Difference};
use termcolor::{Color, ColorSpec, WriteColor};

use crate::cli::RunConfig;
use crate::errors::{ArraykitError, CHECK_MARK};
use crate::harness::{GroupOutcome, GroupReport, RunSummary};
use crate::value::Value;

pub struct Reporter<W: WriteColor> {
    out: W,
    config: RunConfig,
}

impl<W: WriteColor> Reporter<W> {
    pub fn new(out: W, config: RunConfig) -> Self {
        Self { out, config }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Prints the header and outcome of one group.
    pub fn report_group(&mut self, report: &GroupReport) -> io::Result<()> {
        self.out
            .set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true))?;
        writeln!(
            self.out,
            "-------------------  {}  -----------------------",
            report.function_name
        )?;
        self.out.reset()?;

        match &report.outcome {
            GroupOutcome::Passed => {
                writeln!(self.out)?;
                self.out
                    .set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
                writeln!(self.out, "All {} tests passed {}", report.total, CHECK_MARK)?;
                self.out.reset()?;
                writeln!(self.out)
            }
            GroupOutcome::Failed(err) => {
                self.out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
                writeln!(self.out, "{} / {} tests passed", report.passed, report.total)?;
                self.out.reset()?;
                writeln!(self.out, "{}", err)?;
                if self.config.show_diff {
                    if let ArraykitError::AssertionMismatch {
                        expected_value,
                        actual_value,
                        ..
                    } = err
                    {
                        self.print_value_diff(expected_value, actual_value)?;
                    }
                }
                Ok(())
            }
            GroupOutcome::Missing(err) => writeln!(self.out, "{}", err),
        }
    }

    pub fn report_summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        let spec = |color| {
            let mut spec = ColorSpec::new();
            spec.set_fg(Some(color));
            spec
        };
        write!(self.out, "Test summary: total {}, ", summary.total())?;
        self.out.set_color(&spec(Color::Green))?;
        write!(self.out, "passed {}", summary.passed)?;
        self.out.reset()?;
        write!(self.out, ", ")?;
        self.out.set_color(&spec(Color::Red))?;
        write!(self.out, "failed {}", summary.failed)?;
        self.out.reset()?;
        write!(self.out, ", ")?;
        self.out.set_color(&spec(Color::Yellow))?;
        write!(self.out, "missing {}", summary.missing)?;
        self.out.reset()?;
        writeln!(self.out)
    }

    // Only compound values span several lines; a scalar diff adds nothing.
    fn print_value_diff(&mut self, expected: &Value, actual: &Value) -> io::Result<()> {
        let expected = pretty_json(expected);
        let actual = pretty_json(actual);
        if !expected.contains('\n') && !actual.contains('\n') {
            return Ok(());
        }
        writeln!(self.out, "  Diff:")?;
        let changeset = Changeset::new(&expected, &actual, "\n");
        for diff in &changeset.diffs {
            let (prefix, color, text) = match diff {
                Difference::Same(x) => (' ', None, x),
                Difference::Add(x) => ('+', Some(Color::Green), x),
                Difference::Rem(x) => ('-', Some(Color::Red), x),
            };
            for line in text.lines() {
                self.out.set_color(ColorSpec::new().set_fg(color))?;
                writeln!(self.out, "  {}{}", prefix, line)?;
            }
        }
        self.out.reset()
    }
}

fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(&serde_json::Value::from(value))
        .unwrap_or_else(|_| value.to_string())
}

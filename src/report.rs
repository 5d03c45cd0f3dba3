//! Run reporting
//!
//! ## RunReporter Trait
//!
//! The engine never writes output itself. It calls a [`RunReporter`] for each
//! failing test and once when the run is over, so the text format lives in one
//! place and tests can capture it in memory.
//!
//! ## Streams
//!
//! [`ConsoleReporter`] writes two streams:
//! - the diagnostic stream (stderr in a test binary) gets one `[FAIL]` line per
//!   failing test;
//! - the primary stream (stdout) gets a single summary line, only when every test
//!   passed.

use std::fmt;
use std::io::{self, Write};

use crate::engine::RunSummary;
use crate::outcome::TestOutcome;
use crate::registry::TestDescriptor;
use crate::verdict::Verdict;

/// Receives engine events in registry order.
pub trait RunReporter {
    /// Called once before the first test is invoked.
    fn on_run_start(&mut self, _test_count: usize) -> io::Result<()> {
        Ok(())
    }

    /// Called after a test returned a non-zero code.
    fn on_test_failed(&mut self, test: &TestDescriptor<'_>, outcome: TestOutcome) -> io::Result<()>;

    /// Called once after the loop has finished or stopped early.
    fn on_run_complete(&mut self, summary: &RunSummary) -> io::Result<()>;
}

/// One `[FAIL]` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostic<'a> {
    pub name: &'a str,
    pub source: &'a str,
    /// Present only for failures that carry a specific code.
    pub code: Option<i32>,
}

impl<'a> Diagnostic<'a> {
    pub fn for_failure(test: &TestDescriptor<'a>, outcome: TestOutcome) -> Self {
        Self {
            name: test.name(),
            source: test.source(),
            code: outcome.detail_code(),
        }
    }
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[FAIL] {} in {}", self.name, self.source)?;
        if let Some(code) = self.code {
            write!(f, " code: {}", code)?;
        }
        Ok(())
    }
}

/// Wording of the success line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryStyle {
    /// `<n> succeeded`
    #[default]
    Count,
    /// `all succeeded`
    AllSucceeded,
}

impl SummaryStyle {
    pub fn success_line(self, total: usize) -> String {
        match self {
            SummaryStyle::Count => format!("{} succeeded", total),
            SummaryStyle::AllSucceeded => "all succeeded".to_string(),
        }
    }
}

/// Plain-text reporter over a primary and a diagnostic stream.
pub struct ConsoleReporter<O, E> {
    out: O,
    err: E,
    style: SummaryStyle,
}

impl ConsoleReporter<io::Stdout, io::Stderr> {
    /// Reporter over the process's stdout and stderr.
    pub fn stdio(style: SummaryStyle) -> Self {
        Self::new(io::stdout(), io::stderr(), style)
    }
}

impl<O: Write, E: Write> ConsoleReporter<O, E> {
    pub fn new(out: O, err: E, style: SummaryStyle) -> Self {
        Self { out, err, style }
    }

    /// Give back the streams, e.g. to inspect captured output.
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> RunReporter for ConsoleReporter<O, E> {
    fn on_test_failed(&mut self, test: &TestDescriptor<'_>, outcome: TestOutcome) -> io::Result<()> {
        writeln!(self.err, "{}", Diagnostic::for_failure(test, outcome))?;
        self.err.flush()
    }

    fn on_run_complete(&mut self, summary: &RunSummary) -> io::Result<()> {
        if Verdict::from_summary(summary).is_success() {
            writeln!(self.out, "{}", self.style.success_line(summary.total))?;
        }
        self.out.flush()?;
        self.err.flush()
    }
}

// ============================================================================
// Tests
// ============================================================================

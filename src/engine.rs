//! Sequential execution loop
//!
//! The engine walks the registry in order, invokes each test exactly once and
//! counts failures. When a failure budget is set, the run stops as soon as the
//! count reaches it; tests after that point are never invoked.
//!
//! ```text
//! NotStarted -> Running -> Completed
//!                       -> Aborted     (error_count == max_errors, max_errors > 0)
//! ```
//!
//! A test returning non-zero is data, not an engine error. The only error the
//! engine surfaces is a reporter failing to write its output.

use std::io::{self, Write};

use thiserror::Error;

use crate::config::RunConfig;
use crate::registry::Registry;
use crate::report::{ConsoleReporter, RunReporter, SummaryStyle};
use crate::verdict::Verdict;

/// Errors that stop the engine itself.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to write test report: {0}")]
    Io(#[from] io::Error),
}

/// Lifecycle of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    NotStarted,
    Running,
    /// Every test was invoked.
    Completed,
    /// The failure budget was reached before the end of the registry.
    Aborted,
}

/// Terminal result of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Registry length.
    pub total: usize,
    /// Tests actually invoked.
    pub executed: usize,
    /// Tests that did not pass.
    pub error_count: usize,
    pub state: RunState,
}

impl RunSummary {
    pub fn aborted(&self) -> bool {
        self.state == RunState::Aborted
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from_summary(self)
    }
}

/// Runs a registry under a fixed configuration.
#[derive(Debug, Clone, Copy)]
pub struct RunEngine {
    config: RunConfig,
}

impl RunEngine {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> RunConfig {
        self.config
    }

    /// Execute every test in order, reporting failures as they happen.
    pub fn run<R: RunReporter + ?Sized>(&self, registry: &Registry<'_>, reporter: &mut R) -> Result<RunSummary, RunError> {
        let total = registry.len();
        let mut state = RunState::NotStarted;
        let mut executed = 0usize;
        let mut error_count = 0usize;

        tracing::debug!(total, max_errors = self.config.max_errors, ?state, "starting test run");
        reporter.on_run_start(total)?;
        state = RunState::Running;

        for test in registry {
            tracing::trace!(test = test.name(), source = test.source(), "invoking test");
            let outcome = test.run();
            executed += 1;

            if outcome.is_pass() {
                continue;
            }

            error_count += 1;
            tracing::debug!(
                test = test.name(),
                source = test.source(),
                code = outcome.code(),
                error_count,
                "test failed"
            );
            reporter.on_test_failed(test, outcome)?;

            if self.budget_exhausted(error_count) {
                tracing::info!(
                    error_count,
                    skipped = total - executed,
                    "failure budget reached, stopping run"
                );
                state = RunState::Aborted;
                break;
            }
        }

        if state == RunState::Running {
            state = RunState::Completed;
        }

        let summary = RunSummary {
            total,
            executed,
            error_count,
            state,
        };
        tracing::debug!(?summary, "test run finished");
        reporter.on_run_complete(&summary)?;

        Ok(summary)
    }

    /// Run with a [`ConsoleReporter`] over the given streams.
    pub fn run_to<O: Write, E: Write>(
        &self,
        registry: &Registry<'_>,
        out: O,
        err: E,
        style: SummaryStyle,
    ) -> Result<RunSummary, RunError> {
        let mut reporter = ConsoleReporter::new(out, err, style);
        self.run(registry, &mut reporter)
    }

    fn budget_exhausted(&self, error_count: usize) -> bool {
        self.config.is_bounded() && error_count == self.config.max_errors
    }
}

// ============================================================================
// Tests
// ============================================================================

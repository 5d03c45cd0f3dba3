//! Entry point of a generated test binary
//!
//! A test binary accepts exactly one optional argument, in the first slot:
//!
//! - `-max_errors=<n>` - stop after `n` failing tests (`0` = never stop early)
//!
//! Anything after it is ignored. Without the argument the budget comes from an
//! environment variable (`UNITTEST_MAX_ERRORS` unless the harness picks another).
//!
//! ## Design
//!
//! The argument surface is declared with clap. Help and version flags are
//! disabled so that no argument a harness is started with gets intercepted.
//! clap only describes and logs the arguments; the budget itself is always read
//! from `argv[1]` by [`config::cli_candidate`], so an escape such as `--` never
//! moves it to a later slot.
//!
//! [`execute`] returns `CliResult<ExitCode>` instead of calling `process::exit`;
//! only [`run_harness`] exits the process.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::env;
use std::fmt;
use std::io::{self, Write};
use std::process;

use clap::Parser;

use crate::config::{self, DEFAULT_MAX_ERRORS_ENV, RunConfig};
use crate::engine::{RunEngine, RunError};
use crate::registry::Registry;
use crate::report::SummaryStyle;

pub use crate::verdict::ExitCode;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. [`run_harness`] prints the
/// message and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<RunError> for CliError {
    fn from(err: RunError) -> Self {
        CliError::failure(err.to_string())
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Argument surface of a test binary
#[derive(Parser, Debug)]
#[command(name = "unitrun", disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Failure budget as `-max_errors=<n>`; only honoured in the first slot
    #[arg(value_name = "OPTION", allow_hyphen_values = true)]
    pub option: Option<String>,

    /// Ignored
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

/// Compile-time settings a generator picks for its harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarnessOptions {
    /// Environment variable holding the default failure budget.
    pub env_var: &'static str,
    pub summary: SummaryStyle,
}

impl HarnessOptions {
    pub const fn new() -> Self {
        Self {
            env_var: DEFAULT_MAX_ERRORS_ENV,
            summary: SummaryStyle::Count,
        }
    }

    pub const fn with_env_var(mut self, env_var: &'static str) -> Self {
        self.env_var = env_var;
        self
    }

    pub const fn with_summary(mut self, summary: SummaryStyle) -> Self {
        self.summary = summary;
        self
    }
}

impl Default for HarnessOptions {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Install the `tracing` subscriber used by test binaries.
///
/// Events go to stderr and default to `warn`, so an ordinary run prints nothing
/// besides its report. `RUST_LOG` overrides the filter.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .try_init();
}

/// Run `registry` as the whole program and exit with its verdict.
///
/// This is the only place where `process::exit` is called.
pub fn run_harness(registry: &Registry<'_>, options: HarnessOptions) {
    init_logging();

    let args: Vec<String> = env::args_os().map(|a| a.to_string_lossy().into_owned()).collect();
    let lookup = |key: &str| env::var_os(key).map(|v| v.to_string_lossy().into_owned());

    // Unlocked handles: test bodies and their threads may print while the run is going.
    match execute(registry, options, &args, lookup, io::stdout(), io::stderr()) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            report_error(io::stderr(), &e);
            process::exit(e.exit_code.0);
        }
    }
}

/// Print a [`CliError`] message. A closed stream must not turn into a panic on
/// the way to the exit status.
fn report_error<W: Write>(mut err: W, error: &CliError) {
    if !error.message.is_empty() {
        let _ = writeln!(err, "{}", error.message);
    }
}

/// Resolve the configuration, run the registry and map the verdict.
///
/// `args` includes the program name. `lookup` reads environment variables.
pub fn execute<F, O, E>(
    registry: &Registry<'_>,
    options: HarnessOptions,
    args: &[String],
    lookup: F,
    out: O,
    err: E,
) -> CliResult<ExitCode>
where
    F: Fn(&str) -> Option<String>,
    O: Write,
    E: Write,
{
    let config = resolve_config(options, args, lookup);
    let summary = RunEngine::new(config).run_to(registry, out, err, options.summary)?;
    Ok(summary.verdict().exit_code())
}

/// Resolve the failure budget for `args` the way [`execute`] does.
pub fn resolve_config<F>(options: HarnessOptions, args: &[String], lookup: F) -> RunConfig
where
    F: Fn(&str) -> Option<String>,
{
    RunConfig::from_sources(options.env_var, budget_argument(args), lookup)
}

fn budget_argument(args: &[String]) -> Option<&str> {
    match Cli::try_parse_from(args) {
        Ok(cli) => tracing::debug!(option = ?cli.option, ignored = cli.rest.len(), "parsed test binary arguments"),
        Err(e) => tracing::warn!(error = %e, "unrecognised test binary arguments"),
    }
    config::cli_candidate(args)
}

// ============================================================================
// Tests
// ============================================================================

#![forbid(unsafe_code)]
//! unitrun: sequential test-execution engine
//!
//! unitrun runs a fixed, generated table of zero-argument test functions in
//! order. Each function returns an `i32`: `0` passes, `-1` is a generic failure
//! and any other value is a failure carrying that code. Failures are reported as
//! they happen, an optional failure budget stops the run early, and the process
//! exits with a single pass/fail status.
//!
//! ## Layout
//!
//! - [`registry`] - the test table (`TestDescriptor`, `Registry`)
//! - [`config`] - failure budget resolution from argv and environment
//! - [`engine`] - the execution loop
//! - [`report`] - diagnostic and summary output
//! - [`verdict`] - verdict and exit code mapping
//! - [`cli`] - entry point for generated test binaries
//! - [`assert`] - result codes and `check!` / `check_code!`
//!
//! Discovering tests is left to an external generator, which emits a
//! [`harness!`] (or [`registry!`]) invocation.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Test bodies**: a panicking test body is not caught; it ends the whole run.

pub mod assert;
pub mod cli;
pub mod config;
pub mod engine;
mod macros;
pub mod outcome;
pub mod registry;
pub mod report;
pub mod verdict;

pub use config::RunConfig;
pub use engine::{RunEngine, RunError, RunState, RunSummary};
pub use outcome::TestOutcome;
pub use registry::{Registry, TestDescriptor};
pub use report::{ConsoleReporter, Diagnostic, RunReporter, SummaryStyle};
pub use verdict::{ExitCode, Verdict};

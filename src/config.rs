//! Run configuration resolution
//!
//! The failure budget comes from two places: an environment variable (the
//! harness-wide default) and the first command-line argument. The argument
//! `-max_errors=<n>` always wins when present, even if `<n>` is garbage.
//!
//! ## Parsing
//!
//! Values are read leniently as "leading unsigned decimal integer, else 0":
//!
//! | input      | value |
//! |------------|-------|
//! | `"3"`      | 3     |
//! | `" +12ms"` | 12    |
//! | `"abc"`    | 0     |
//! | `""`       | 0     |
//! | `"-4"`     | 0     |
//!
//! `0` means no budget: the run never stops early.

use std::env;
use std::ffi::OsString;

/// Command-line prefix that carries the failure budget.
pub const MAX_ERRORS_FLAG: &str = "-max_errors=";

/// Environment variable read by default harnesses.
pub const DEFAULT_MAX_ERRORS_ENV: &str = "UNITTEST_MAX_ERRORS";

/// Environment variable used by test-driver style harnesses.
pub const TESTDRIVER_MAX_ERRORS_ENV: &str = "TESTING_MAX_ERRORS";

/// Which input decided the failure budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetSource {
    CommandLine,
    Environment,
    Default,
}

/// Resolved settings for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunConfig {
    /// Failing tests tolerated before the run stops; `0` is unlimited.
    pub max_errors: usize,
}

impl RunConfig {
    pub const fn unlimited() -> Self {
        Self { max_errors: 0 }
    }

    pub const fn with_max_errors(max_errors: usize) -> Self {
        Self { max_errors }
    }

    /// Whether a failure budget is in force.
    pub const fn is_bounded(&self) -> bool {
        self.max_errors > 0
    }

    /// Resolve from the current process environment and the given argument list.
    ///
    /// `args` includes the program name, as returned by [`std::env::args_os`].
    pub fn from_env_and_args<I, T>(env_var: &str, args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<String> = args
            .into_iter()
            .map(|a| a.into().to_string_lossy().into_owned())
            .collect();
        Self::from_lookup(env_var, &args, |key| {
            env::var_os(key).map(|v| v.to_string_lossy().into_owned())
        })
    }

    /// Resolve with an injected environment lookup.
    pub fn from_lookup<F>(env_var: &str, args: &[String], lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_sources(env_var, cli_candidate(args), lookup)
    }

    /// Resolve from an already extracted command-line value and an environment lookup.
    pub fn from_sources<F>(env_var: &str, cli_value: Option<&str>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_value = lookup(env_var);
        let (config, source) = resolve_with_source(env_value.as_deref(), cli_value);
        tracing::debug!(
            max_errors = config.max_errors,
            ?source,
            env_var,
            "resolved failure budget"
        );
        config
    }
}

/// Parse a leading unsigned decimal integer, ignoring anything after it.
///
/// Leading ASCII whitespace and a single `+` are skipped. Input without digits
/// yields `0`; values too large for `usize` saturate.
pub fn parse_leading_unsigned(text: &str) -> usize {
    let trimmed = text.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);

    digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0usize, |acc, b| {
            acc.saturating_mul(10).saturating_add(usize::from(b - b'0'))
        })
}

/// Extract the budget text from the first argument after the program name.
///
/// Only that single slot is inspected; later arguments are never considered.
pub fn cli_candidate(args: &[String]) -> Option<&str> {
    args.get(1).and_then(|arg| arg.strip_prefix(MAX_ERRORS_FLAG))
}

/// Merge the two candidates: the command line wins whenever it is present.
pub fn resolve(env_candidate: Option<&str>, cli_candidate: Option<&str>) -> RunConfig {
    resolve_with_source(env_candidate, cli_candidate).0
}

/// Like [`resolve`], also reporting which input was used.
pub fn resolve_with_source(env_candidate: Option<&str>, cli_candidate: Option<&str>) -> (RunConfig, BudgetSource) {
    let (text, source) = match (cli_candidate, env_candidate) {
        (Some(cli), _) => (cli, BudgetSource::CommandLine),
        (None, Some(env)) => (env, BudgetSource::Environment),
        (None, None) => ("", BudgetSource::Default),
    };

    (RunConfig::with_max_errors(parse_leading_unsigned(text)), source)
}

// ============================================================================
// Tests
// ============================================================================

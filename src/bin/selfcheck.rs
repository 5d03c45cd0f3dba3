//! Self-check test binary
//!
//! Runs unitrun's own building blocks through a real harness. Setting
//! `UNITRUN_SELFCHECK_FAIL=1` makes two of the checks fail on purpose (one with
//! the generic code, one with code 3) so the failure paths of the binary can be
//! observed from outside.

use unitrun::assert::{GENERIC_FAILURE, PASS};
use unitrun::config::{self, parse_leading_unsigned};
use unitrun::outcome::TestOutcome;
use unitrun::report::{Diagnostic, SummaryStyle};
use unitrun::{check, check_code};

const FORCE_FAIL_ENV: &str = "UNITRUN_SELFCHECK_FAIL";

fn forced_failure() -> bool {
    std::env::var_os(FORCE_FAIL_ENV).is_some_and(|v| v == "1")
}

mod parsing {
    use super::*;

    pub fn test_leading_digits() -> i32 {
        check!(parse_leading_unsigned("12abc") == 12);
        check!(parse_leading_unsigned("abc") == 0);
        check!(!forced_failure());
        PASS
    }

    pub fn test_cli_beats_env() -> i32 {
        check_code!(config::resolve(Some("5"), Some("2")).max_errors == 2, 1);
        check_code!(config::resolve(Some("5"), None).max_errors == 5, 2);
        PASS
    }
}

mod outcomes {
    use super::*;

    pub fn test_sentinel_classification() -> i32 {
        check!(TestOutcome::from_code(PASS).is_pass());
        check!(TestOutcome::from_code(GENERIC_FAILURE) == TestOutcome::FailedGeneric);
        PASS
    }

    pub fn test_diagnostic_format() -> i32 {
        let line = Diagnostic {
            name: "t",
            source: "f.c",
            code: Some(7),
        }
        .to_string();
        check!(line == "[FAIL] t in f.c code: 7");
        check_code!(!forced_failure(), 3);
        PASS
    }

    pub fn test_summary_line() -> i32 {
        check!(SummaryStyle::Count.success_line(2) == "2 succeeded");
        PASS
    }
}

mod threads {
    use super::*;

    /// The harness must not hold the standard streams while a test runs.
    pub fn test_printing_thread() -> i32 {
        let worker = std::thread::spawn(|| {
            print!("");
            eprint!("");
            std::io::Write::flush(&mut std::io::stdout()).is_ok()
        });
        check!(matches!(worker.join(), Ok(true)));
        PASS
    }
}

unitrun::harness! {
    env: "UNITTEST_MAX_ERRORS",
    summary: Count,
    tests: [
        parsing::test_leading_digits => "src/config.rs",
        parsing::test_cli_beats_env => "src/config.rs",
        outcomes::test_sentinel_classification => "src/outcome.rs",
        outcomes::test_diagnostic_format => "src/report.rs",
        outcomes::test_summary_line => "src/report.rs",
        threads::test_printing_thread => "src/cli/mod.rs",
    ],
}

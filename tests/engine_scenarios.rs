//! End-to-end scenarios for the execution loop
//!
//! Each scenario builds a registry of test doubles that record their
//! invocations, runs it through a `ConsoleReporter` over in-memory streams and
//! checks the streams, the invocation log and the verdict.
//!
//! Review snapshot changes: `cargo insta review`

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use unitrun::{ExitCode, Registry, RunConfig, RunEngine, RunState, RunSummary, SummaryStyle, TestDescriptor, Verdict};

/// Captured output of one run
struct Captured {
    out: String,
    err: String,
    summary: RunSummary,
}

fn run(registry: &Registry<'_>, config: RunConfig) -> Captured {
    run_styled(registry, config, SummaryStyle::Count)
}

fn run_styled(registry: &Registry<'_>, config: RunConfig, style: SummaryStyle) -> Captured {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let summary = RunEngine::new(config)
        .run_to(registry, &mut out, &mut err, style)
        .expect("in-memory streams never fail");
    Captured {
        out: String::from_utf8(out).expect("utf-8 stdout"),
        err: String::from_utf8(err).expect("utf-8 stderr"),
        summary,
    }
}

/// Invocation log shared by the test doubles of one scenario
#[derive(Default)]
struct CallLog(Mutex<Vec<&'static str>>);

impl CallLog {
    fn record(&self, name: &'static str) {
        self.0.lock().expect("call log poisoned").push(name);
    }

    fn calls(&self) -> Vec<&'static str> {
        self.0.lock().expect("call log poisoned").clone()
    }
}

#[test]
fn test_mixed_registry_reports_failures_in_order() {
    let log = CallLog::default();
    let a = || {
        log.record("A");
        0
    };
    let b = || {
        log.record("B");
        -1
    };
    let c = || {
        log.record("C");
        0
    };
    let d = || {
        log.record("D");
        5
    };
    let tests = [
        TestDescriptor::new("A", "scenario.c", &a),
        TestDescriptor::new("B", "scenario.c", &b),
        TestDescriptor::new("C", "scenario.c", &c),
        TestDescriptor::new("D", "scenario.c", &d),
    ];

    let captured = run(&Registry::new(&tests), RunConfig::unlimited());

    insta::assert_snapshot!(captured.err, @r"
    [FAIL] B in scenario.c
    [FAIL] D in scenario.c code: 5
    ");
    assert_eq!(captured.out, "");
    assert_eq!(log.calls(), ["A", "B", "C", "D"]);
    assert_eq!(captured.summary.verdict(), Verdict::Failure);
    assert_eq!(captured.summary.verdict().exit_code(), ExitCode::FAILURE);
}

#[test]
fn test_all_passing_prints_count() {
    let a = || 0;
    let b = || 0;
    let tests = [
        TestDescriptor::new("A", "ok.c", &a),
        TestDescriptor::new("B", "ok.c", &b),
    ];

    for config in [RunConfig::unlimited(), RunConfig::with_max_errors(1)] {
        let captured = run(&Registry::new(&tests), config);
        assert_eq!(captured.out, "2 succeeded\n");
        assert_eq!(captured.err, "");
        assert_eq!(captured.summary.verdict().exit_code(), ExitCode::SUCCESS);
    }
}

#[test]
fn test_all_succeeded_style() {
    let a = || 0;
    let tests = [TestDescriptor::new("A", "ok.c", &a)];

    let captured = run_styled(&Registry::new(&tests), RunConfig::unlimited(), SummaryStyle::AllSucceeded);
    insta::assert_snapshot!(captured.out, @"all succeeded");
}

#[test]
fn test_budget_stops_before_later_tests() {
    let invoked = AtomicUsize::new(0);
    let fail = || {
        invoked.fetch_add(1, Ordering::SeqCst);
        -1
    };
    let pass = || {
        invoked.fetch_add(1, Ordering::SeqCst);
        0
    };
    let tests = [
        TestDescriptor::new("p1", "budget.c", &pass),
        TestDescriptor::new("f1", "budget.c", &fail),
        TestDescriptor::new("p2", "budget.c", &pass),
        TestDescriptor::new("f2", "budget.c", &fail),
        TestDescriptor::new("f3", "budget.c", &fail),
        TestDescriptor::new("p3", "budget.c", &pass),
    ];

    let captured = run(&Registry::new(&tests), RunConfig::with_max_errors(2));

    assert_eq!(invoked.load(Ordering::SeqCst), 4);
    assert_eq!(captured.err.lines().count(), 2);
    assert_eq!(captured.err.lines().last(), Some("[FAIL] f2 in budget.c"));
    assert_eq!(captured.out, "");
    assert_eq!(captured.summary.state, RunState::Aborted);
    assert_eq!(captured.summary.executed, 4);
    assert_eq!(captured.summary.total, 6);
}

#[test]
fn test_abort_has_no_marker_and_same_exit_code() {
    let fail = || 9;
    let tests = [
        TestDescriptor::new("x", "abort.c", &fail),
        TestDescriptor::new("y", "abort.c", &fail),
    ];
    let registry = Registry::new(&tests);

    let aborted = run(&registry, RunConfig::with_max_errors(1));
    let exhausted = run(&registry, RunConfig::unlimited());

    assert_eq!(aborted.err, "[FAIL] x in abort.c code: 9\n");
    assert!(aborted.summary.aborted());
    assert!(!exhausted.summary.aborted());
    assert_eq!(
        aborted.summary.verdict().exit_code(),
        exhausted.summary.verdict().exit_code()
    );
}

#[test]
fn test_budget_larger_than_failures_runs_everything() {
    let log = CallLog::default();
    let fail = || {
        log.record("fail");
        -1
    };
    let tests = [
        TestDescriptor::new("one", "wide.c", &fail),
        TestDescriptor::new("two", "wide.c", &fail),
    ];

    let captured = run(&Registry::new(&tests), RunConfig::with_max_errors(10));

    assert_eq!(log.calls().len(), 2);
    assert_eq!(captured.summary.state, RunState::Completed);
    assert_eq!(captured.summary.error_count, 2);
}

#[test]
fn test_rerun_is_identical() {
    let pass = || 0;
    let fail = || 4;
    let tests = [
        TestDescriptor::new("p", "again.c", &pass),
        TestDescriptor::new("f", "again.c", &fail),
    ];
    let registry = Registry::new(&tests);

    let first = run(&registry, RunConfig::unlimited());
    let second = run(&registry, RunConfig::unlimited());

    assert_eq!(first.out, second.out);
    assert_eq!(first.err, second.err);
    assert_eq!(first.summary, second.summary);
}

fn static_pass() -> i32 {
    0
}

fn static_fail() -> i32 {
    unitrun::check!(1 + 1 == 3);
    0
}

#[test]
fn test_generated_registry() {
    let registry = unitrun::registry![
        static_pass => "src/math_tests.c",
        static_fail => "src/math_tests.c",
    ];

    let captured = run(&registry, RunConfig::unlimited());

    assert_eq!(captured.err, "[FAIL] static_fail in src/math_tests.c\n");
    assert_eq!(captured.summary.total, 2);
}

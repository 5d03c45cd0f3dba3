//! Classification of a single test invocation

use crate::assert::{GENERIC_FAILURE, PASS};

/// Outcome of invoking one test body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestOutcome {
    /// The body returned `0`.
    Passed,
    /// The body returned the generic sentinel `-1` (assertion failed, no detail).
    FailedGeneric,
    /// The body returned some other non-zero code.
    FailedWithCode(i32),
}

impl TestOutcome {
    pub const fn from_code(code: i32) -> Self {
        match code {
            PASS => TestOutcome::Passed,
            GENERIC_FAILURE => TestOutcome::FailedGeneric,
            other => TestOutcome::FailedWithCode(other),
        }
    }

    pub const fn is_pass(self) -> bool {
        matches!(self, TestOutcome::Passed)
    }

    pub const fn is_failure(self) -> bool {
        !self.is_pass()
    }

    /// The code worth showing in a diagnostic, if any.
    pub const fn detail_code(self) -> Option<i32> {
        match self {
            TestOutcome::FailedWithCode(code) => Some(code),
            TestOutcome::Passed | TestOutcome::FailedGeneric => None,
        }
    }

    /// The raw code this outcome was classified from.
    pub const fn code(self) -> i32 {
        match self {
            TestOutcome::Passed => PASS,
            TestOutcome::FailedGeneric => GENERIC_FAILURE,
            TestOutcome::FailedWithCode(code) => code,
        }
    }
}

impl From<i32> for TestOutcome {
    fn from(code: i32) -> Self {
        TestOutcome::from_code(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_pass() {
        assert_eq!(TestOutcome::from_code(0), TestOutcome::Passed);
        assert!(TestOutcome::Passed.is_pass());
        assert_eq!(TestOutcome::Passed.detail_code(), None);
    }

    #[test]
    fn test_sentinel_is_generic_failure() {
        let outcome = TestOutcome::from(-1);
        assert_eq!(outcome, TestOutcome::FailedGeneric);
        assert!(outcome.is_failure());
        assert_eq!(outcome.detail_code(), None);
    }

    #[test]
    fn test_other_codes_keep_detail() {
        for code in [1, 7, -2, i32::MIN, i32::MAX] {
            let outcome = TestOutcome::from_code(code);
            assert_eq!(outcome, TestOutcome::FailedWithCode(code));
            assert_eq!(outcome.detail_code(), Some(code));
            assert_eq!(outcome.code(), code);
        }
    }
}

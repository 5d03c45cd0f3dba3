//! Final verdict of a run and its process exit code

use crate::engine::{RunState, RunSummary};

/// Process exit code of a test binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Success or failure of a whole run.
///
/// A run that stopped on its failure budget and a run that finished with
/// failures map to the same verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Success,
    Failure,
}

impl Verdict {
    pub fn from_summary(summary: &RunSummary) -> Self {
        match summary.state {
            RunState::Aborted => Verdict::Failure,
            _ if summary.error_count > 0 => Verdict::Failure,
            _ => Verdict::Success,
        }
    }

    pub const fn is_success(self) -> bool {
        matches!(self, Verdict::Success)
    }

    pub const fn exit_code(self) -> ExitCode {
        match self {
            Verdict::Success => ExitCode::SUCCESS,
            Verdict::Failure => ExitCode::FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(state: RunState, error_count: usize) -> RunSummary {
        RunSummary {
            total: 3,
            executed: 3,
            error_count,
            state,
        }
    }

    #[test]
    fn test_clean_run_succeeds() {
        let verdict = Verdict::from_summary(&summary(RunState::Completed, 0));
        assert_eq!(verdict, Verdict::Success);
        assert_eq!(verdict.exit_code(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_failures_fail() {
        let verdict = Verdict::from_summary(&summary(RunState::Completed, 2));
        assert_eq!(verdict.exit_code(), ExitCode::FAILURE);
    }

    #[test]
    fn test_abort_and_exhaustion_share_exit_code() {
        let aborted = Verdict::from_summary(&summary(RunState::Aborted, 1));
        let exhausted = Verdict::from_summary(&summary(RunState::Completed, 1));
        assert_eq!(aborted.exit_code(), exhausted.exit_code());
    }
}

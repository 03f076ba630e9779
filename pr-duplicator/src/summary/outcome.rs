//! Run outcome types.

use crate::duplicator::Duplicate;
use crate::guards::SkipReason;

/// Non-failing end state of a run.
///
/// Failures are reported through [`RunnerError`](crate::RunnerError).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The PR was duplicated.
    Succeeded(Duplicate),

    /// A guard decided the event should be ignored.
    Skipped(SkipReason),
}

impl RunOutcome {
    /// Returns the terminal status of the run.
    #[must_use]
    pub fn status(&self) -> RunStatus {
        match self {
            Self::Succeeded(_) => RunStatus::Succeeded,
            Self::Skipped(_) => RunStatus::Skipped,
        }
    }

    /// Returns the duplicated PR's URL, if one was created.
    #[must_use]
    pub fn pull_request_url(&self) -> Option<&str> {
        match self {
            Self::Succeeded(duplicate) => Some(&duplicate.pull_request.html_url),
            Self::Skipped(_) => None,
        }
    }
}

/// Terminal status reported to the CI system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Duplicate PR created.
    Succeeded,

    /// Nothing to do; not a failure.
    Skipped,

    /// The duplication failed.
    Failed,
}

impl RunStatus {
    /// Returns the status as a string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Succeeded => "succeeded",
            Self::Skipped => "skipped",
            Self::Failed => "failed",
        }
    }

    /// Returns true if the CI step should be marked as failed.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed)
    }
}

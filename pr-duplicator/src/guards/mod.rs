//! Preconditions deciding whether a merged PR gets duplicated.
//!
//! The checks run in a fixed order and the first one that fails decides the
//! skip reason:
//!
//! 1. head/base branches match the configured `from`/`base`
//! 2. the PR author matches `pr-author` (when configured)
//! 3. the PR was merged, not just closed

mod skip;

pub use skip::SkipReason;

use crate::config::DuplicatorConfig;
use crate::event::PullRequest;

/// Result of evaluating a guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// All preconditions hold.
    Proceed,

    /// A precondition failed; nothing should be done.
    Skip(SkipReason),
}

type Guard = fn(&DuplicatorConfig, &PullRequest) -> GuardOutcome;

const GUARDS: [Guard; 3] = [branches_match, author_matches, was_merged];

/// Evaluates all guards in order, stopping at the first skip.
#[must_use]
pub fn evaluate_guards(config: &DuplicatorConfig, pull_request: &PullRequest) -> GuardOutcome {
    GUARDS
        .iter()
        .map(|guard| guard(config, pull_request))
        .find(|outcome| matches!(outcome, GuardOutcome::Skip(_)))
        .unwrap_or(GuardOutcome::Proceed)
}

fn branches_match(config: &DuplicatorConfig, pull_request: &PullRequest) -> GuardOutcome {
    if pull_request.head.ref_name == config.from() && pull_request.base.ref_name == config.base()
    {
        return GuardOutcome::Proceed;
    }

    GuardOutcome::Skip(SkipReason::BranchMismatch {
        from: config.from().to_string(),
        base: config.base().to_string(),
        head_ref: pull_request.head.ref_name.clone(),
        base_ref: pull_request.base.ref_name.clone(),
    })
}

fn author_matches(config: &DuplicatorConfig, pull_request: &PullRequest) -> GuardOutcome {
    match config.pr_author() {
        Some(expected) if expected != pull_request.user.login => {
            GuardOutcome::Skip(SkipReason::AuthorMismatch {
                expected: expected.to_string(),
                actual: pull_request.user.login.clone(),
            })
        }
        _ => GuardOutcome::Proceed,
    }
}

fn was_merged(_config: &DuplicatorConfig, pull_request: &PullRequest) -> GuardOutcome {
    if pull_request.merged {
        return GuardOutcome::Proceed;
    }

    GuardOutcome::Skip(SkipReason::NotMerged {
        url: pull_request.url.clone(),
    })
}

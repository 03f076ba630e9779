//! Result of a successful duplication.

use crate::github::{BranchHead, CreatedPullRequest, CreatedRef};

/// Everything created while duplicating a pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duplicate {
    /// Tip of the source branch the new branch was cut from.
    pub source: BranchHead,

    /// Short name of the created branch.
    pub branch_name: String,

    /// The created ref.
    pub created_ref: CreatedRef,

    /// The opened pull request.
    pub pull_request: CreatedPullRequest,
}

//! Skip reasons.

use std::fmt;

/// Why a run ended without duplicating anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The PR's head/base do not match the configured `from`/`base`.
    BranchMismatch {
        /// Configured head branch.
        from: String,
        /// Configured base branch.
        base: String,
        /// Head branch from the payload.
        head_ref: String,
        /// Base branch from the payload.
        base_ref: String,
    },

    /// The PR was opened by someone other than the configured author.
    AuthorMismatch {
        /// Configured author.
        expected: String,
        /// Author from the payload.
        actual: String,
    },

    /// The PR was closed without being merged.
    NotMerged {
        /// API URL of the PR.
        url: String,
    },
}

impl SkipReason {
    /// Returns true if the skip should be surfaced as a warning rather than
    /// an informational message.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::NotMerged { .. })
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BranchMismatch {
                from,
                base,
                head_ref,
                base_ref,
            } => write!(
                f,
                "SKIP! Skipping Action as the configured \"from\" and \"base\" (\"{from}\",\"{base}\") don't match the event payload (\"{head_ref}\",\"{base_ref}\")"
            ),
            Self::AuthorMismatch { expected, actual } => write!(
                f,
                "SKIP! Skipping Action as the configured \"pr-author\" (\"{expected}\") does not match the PR author in the payload (\"{actual}\")"
            ),
            Self::NotMerged { url } => write!(
                f,
                "SKIP! Skipping Action as the closed PR has not been merged! PR url {url}"
            ),
        }
    }
}

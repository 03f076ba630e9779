//! Request and response values of the hosting API.

use serde::{Deserialize, Serialize};

/// Current tip of a branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchHead {
    /// Branch name.
    pub name: String,

    /// Commit the branch points at.
    pub sha: String,
}

/// A reference created in the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedRef {
    /// Fully qualified ref name (e.g., "refs/heads/pr_duplicator_l10n_master_5").
    pub ref_name: String,

    /// Commit the ref points at.
    pub sha: String,
}

/// Parameters for opening a pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPullRequest {
    /// PR title.
    pub title: String,

    /// PR body.
    pub body: String,

    /// Branch containing the changes.
    pub head: String,

    /// Branch the changes should be pulled into.
    pub base: String,
}

/// A pull request opened by the duplicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedPullRequest {
    /// PR number.
    pub number: u64,

    /// Web URL of the PR.
    pub html_url: String,

    /// PR title.
    pub title: String,
}

/// Response of `GET /repos/{owner}/{repo}/branches/{branch}`.
#[derive(Debug, Deserialize)]
pub(crate) struct BranchResponse {
    pub name: String,
    pub commit: CommitResponse,
}

/// Commit object embedded in branch and ref responses.
#[derive(Debug, Deserialize)]
pub(crate) struct CommitResponse {
    pub sha: String,
}

/// Body of `POST /repos/{owner}/{repo}/git/refs`.
#[derive(Debug, Serialize)]
pub(crate) struct CreateRefRequest<'a> {
    #[serde(rename = "ref")]
    pub ref_name: &'a str,
    pub sha: &'a str,
}

/// Response of `POST /repos/{owner}/{repo}/git/refs`.
#[derive(Debug, Deserialize)]
pub(crate) struct RefResponse {
    #[serde(rename = "ref")]
    pub ref_name: String,
    pub object: CommitResponse,
}

impl From<BranchResponse> for BranchHead {
    fn from(response: BranchResponse) -> Self {
        Self {
            name: response.name,
            sha: response.commit.sha,
        }
    }
}

impl From<RefResponse> for CreatedRef {
    fn from(response: RefResponse) -> Self {
        Self {
            ref_name: response.ref_name,
            sha: response.object.sha,
        }
    }
}

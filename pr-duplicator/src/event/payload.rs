//! Pull request event payload types.
//!
//! Only the fields the duplicator reads are modelled; everything else in the
//! webhook payload is ignored.

use serde::Deserialize;

/// The top level of a `pull_request` event payload.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestEvent {
    /// Event action (e.g., "closed").
    #[serde(default)]
    pub action: Option<String>,

    /// The pull request the event is about. Absent for other event types.
    #[serde(default)]
    pub pull_request: Option<PullRequest>,
}

/// A pull request as carried in the event payload.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    /// PR number (e.g., 5).
    pub number: u64,

    /// PR title.
    pub title: String,

    /// Whether the PR was merged (as opposed to just closed).
    #[serde(default)]
    pub merged: bool,

    /// Author of the PR.
    pub user: User,

    /// Branch the PR was created from.
    pub head: BranchRef,

    /// Branch the PR was requested into.
    pub base: BranchRef,

    /// Web URL of the PR.
    pub html_url: String,

    /// API URL of the PR.
    pub url: String,
}

/// A GitHub account.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    /// Login name (e.g., "tiblu").
    pub login: String,
}

/// A head or base branch of a pull request.
#[derive(Debug, Clone, Deserialize)]
pub struct BranchRef {
    /// Branch name without the `refs/heads/` prefix.
    #[serde(rename = "ref")]
    pub ref_name: String,
}


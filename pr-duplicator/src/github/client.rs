//! Hosting API trait.

use super::{BranchHead, CreatedPullRequest, CreatedRef, HostError, NewPullRequest};
use async_trait::async_trait;

/// The three hosting API operations the duplicator needs.
///
/// Implementations are scoped to a single repository.
#[async_trait]
pub trait HostingApi: Send + Sync {
    /// Resolves a branch name to its current tip.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::BranchNotFound`] if the branch does not exist.
    async fn get_branch(&self, branch: &str) -> Result<BranchHead, HostError>;

    /// Creates a fully qualified ref pointing at `sha`.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::RefAlreadyExists`] if the ref is taken.
    async fn create_ref(&self, ref_name: &str, sha: &str) -> Result<CreatedRef, HostError>;

    /// Opens a pull request.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Validation`] if GitHub rejects the request, e.g.
    /// the base branch is missing or there is nothing to merge.
    async fn create_pull_request(
        &self,
        request: &NewPullRequest,
    ) -> Result<CreatedPullRequest, HostError>;
}

//! Duplication of a merged pull request onto another base branch.

mod duplicate;
mod error;

pub use duplicate::Duplicate;
pub use error::DuplicationError;

use crate::config::DuplicatorConfig;
use crate::event::PullRequest;
use crate::github::{HostingApi, NewPullRequest};
use crate::templates::{
    generate_branch_name, generate_pr_title, generate_ref_name, validate_ref_name,
    TemplateRenderer,
};
use tracing::{info, info_span, Instrument};

/// Duplicates `pull_request` onto the configured `to` branch.
///
/// This function:
/// 1. Resolves the PR's head branch to its current commit
/// 2. Creates `pr_duplicator_<branch>_<number>` at that commit
/// 3. Opens a PR from the new branch into `to`
///
/// Steps run strictly in order and the first failure aborts the rest. A
/// branch created in step 2 is left in place if step 3 fails.
///
/// # Arguments
///
/// * `host` - Hosting API scoped to the repository
/// * `renderer` - Template renderer for the PR body
/// * `config` - Action inputs
/// * `pull_request` - The merged PR from the event payload
///
/// # Errors
///
/// Returns [`DuplicationError`] if any step fails.
pub async fn duplicate_pull_request(
    host: &dyn HostingApi,
    renderer: &TemplateRenderer,
    config: &DuplicatorConfig,
    pull_request: &PullRequest,
) -> Result<Duplicate, DuplicationError> {
    let span = info_span!(
        "duplicate",
        pr_number = pull_request.number,
        from = %pull_request.head.ref_name,
        to = %config.to()
    );

    async {
        info!("Duplicating pull request");

        let source = host.get_branch(&pull_request.head.ref_name).await?;

        // Named after the resolved branch, so the ref always matches what GitHub reports.
        let branch_name = generate_branch_name(&source.name, pull_request.number);
        let ref_name = generate_ref_name(&branch_name);
        validate_ref_name(&ref_name)?;

        let created_ref = host.create_ref(&ref_name, &source.sha).await?;
        info!(branch = %branch_name, sha = %created_ref.sha, "Branch created");

        let request = NewPullRequest {
            title: generate_pr_title(&pull_request.title),
            body: renderer.render_pr_body(&pull_request.html_url)?,
            head: created_ref.ref_name.clone(),
            base: config.to().to_string(),
        };
        let created = host.create_pull_request(&request).await?;

        Ok(Duplicate {
            source,
            branch_name,
            created_ref,
            pull_request: created,
        })
    }
    .instrument(span)
    .await
}

//! Naming and text rendering for duplicated pull requests.
//!
//! Branch names and titles are plain formats; the PR body and the Slack
//! notification texts are rendered with Handlebars.

mod error;
mod renderer;

pub use error::TemplateError;
pub use renderer::{create_handlebars_registry, TemplateRenderer};

use crate::config::ConfigError;
use bstr::ByteSlice;

/// Prefix of every branch created by the duplicator.
pub const BRANCH_PREFIX: &str = "pr_duplicator";

/// Generates the branch name for a duplicated PR.
///
/// Format: "pr_duplicator_{source_branch}_{pr_number}"
#[must_use]
pub fn generate_branch_name(source_branch: &str, pr_number: u64) -> String {
    format!("{BRANCH_PREFIX}_{source_branch}_{pr_number}")
}

/// Generates the fully qualified ref for a branch name.
///
/// Format: "refs/heads/{branch_name}"
#[must_use]
pub fn generate_ref_name(branch_name: &str) -> String {
    format!("refs/heads/{branch_name}")
}

/// Generates the title of a duplicated PR.
///
/// Format: `AUTO: PR-Duplicator - "{original_title}".`
#[must_use]
pub fn generate_pr_title(original_title: &str) -> String {
    format!("AUTO: PR-Duplicator - \"{original_title}\".")
}

/// Checks that `ref_name` is a well-formed git reference.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidRefName`] if git would reject the name.
pub fn validate_ref_name(ref_name: &str) -> Result<(), ConfigError> {
    gix_validate::reference::name(ref_name.as_bytes().as_bstr())
        .map(|_| ())
        .map_err(|e| ConfigError::InvalidRefName {
            name: ref_name.to_string(),
            message: e.to_string(),
        })
}

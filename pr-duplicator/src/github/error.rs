//! Hosting API error types.

use thiserror::Error;

/// Errors returned by hosting API operations.
///
/// The common failure classes of the duplication flow get their own
/// variants; any other GitHub response keeps its status and message.
#[derive(Debug, Error)]
pub enum HostError {
    /// The source branch does not exist (anymore).
    #[error("Branch not found: {branch}")]
    BranchNotFound { branch: String },

    /// The branch to be created already exists, usually because the same PR
    /// was processed before.
    #[error("Reference already exists: {ref_name}")]
    RefAlreadyExists { ref_name: String },

    /// The request was rejected, e.g. a missing base branch or no commits
    /// between the branches.
    #[error("{message}")]
    Validation { message: String },

    /// Any other error response from GitHub.
    #[error("GitHub API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// The request never produced a GitHub response (network, TLS, decoding).
    #[error("GitHub request failed: {message}")]
    Transport {
        message: String,
        #[source]
        source: octocrab::Error,
    },
}

impl From<octocrab::Error> for HostError {
    fn from(error: octocrab::Error) -> Self {
        match &error {
            octocrab::Error::GitHub { source, .. } => Self::Api {
                status: source.status_code.as_u16(),
                message: describe(&source.message, source.errors.as_deref()),
            },
            _ => Self::Transport {
                message: error_chain(&error),
                source: error,
            },
        }
    }
}

/// Joins GitHub's top-level message with the per-field messages it attaches
/// to 422 responses.
pub(crate) fn describe(message: &str, errors: Option<&[serde_json::Value]>) -> String {
    let details: Vec<&str> = errors
        .unwrap_or_default()
        .iter()
        .filter_map(|e| e.get("message").and_then(serde_json::Value::as_str))
        .collect();

    if details.is_empty() {
        message.to_string()
    } else {
        format!("{message} ({})", details.join("; "))
    }
}

/// Renders an error with all of its sources, outermost first.
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}

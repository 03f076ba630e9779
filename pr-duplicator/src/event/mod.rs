//! Triggering event loading.
//!
//! The Actions runner writes the webhook payload that triggered the workflow
//! to the file named by `GITHUB_EVENT_PATH`.

mod error;
mod payload;

pub use error::EventError;
pub use payload::{BranchRef, PullRequest, PullRequestEvent, User};

use std::path::Path;
use tracing::debug;

impl PullRequestEvent {
    /// Parses an event from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::Json`] if the payload is malformed.
    pub fn from_json(json: &str) -> Result<Self, EventError> {
        serde_json::from_str(json).map_err(|source| EventError::Json {
            path: "<inline>".to_string(),
            source,
        })
    }

    /// Returns the pull request, failing for non pull request events.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::MissingPullRequest`] if the payload has no
    /// `pull_request` property.
    pub fn pull_request(&self) -> Result<&PullRequest, EventError> {
        self.pull_request
            .as_ref()
            .ok_or(EventError::MissingPullRequest)
    }
}

/// Loads the event payload from `path`.
///
/// # Errors
///
/// Returns [`EventError`] if the file cannot be read or parsed.
pub fn load_event(path: &Path) -> Result<PullRequestEvent, EventError> {
    debug!(path = %path.display(), "Loading event payload");

    let contents = std::fs::read_to_string(path).map_err(|source| EventError::Io {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| EventError::Json {
        path: path.display().to_string(),
        source,
    })
}

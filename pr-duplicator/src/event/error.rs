//! Event payload error types.

use thiserror::Error;

/// Errors that can occur while loading the triggering event.
#[derive(Debug, Error)]
pub enum EventError {
    /// Failed to read the payload file.
    #[error("Failed to read event payload '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The payload was not valid JSON or had an unexpected shape.
    #[error("Failed to parse event payload '{path}': {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The event is not a pull request event.
    #[error("INVALID CONFIGURATION: Invalid event type configuration, event payload must contain \"pull_request\" property. See: https://docs.github.com/en/actions/writing-workflows/choosing-when-your-workflow-runs/events-that-trigger-workflows#pull_request")]
    MissingPullRequest,
}

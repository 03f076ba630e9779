//! Runner error types.

/// Errors that end a run as failed.
///
/// Every variant is transparent so the failure signal carries the
/// underlying message.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Invalid inputs or runner environment.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Unreadable or non pull request event payload.
    #[error(transparent)]
    Event(#[from] crate::event::EventError),

    /// A duplication step failed.
    #[error(transparent)]
    Duplication(#[from] crate::duplicator::DuplicationError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),
}

//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while assembling the run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required action input was empty or missing.
    #[error("INVALID CONFIGURATION: required input '{name}' is missing")]
    MissingInput { name: &'static str },

    /// A required runner environment variable was not set.
    #[error("INVALID CONFIGURATION: environment variable '{name}' is not set")]
    MissingEnv { name: &'static str },

    /// The repository slug was not in `owner/name` form.
    #[error("INVALID CONFIGURATION: repository '{value}' is not in 'owner/name' form")]
    InvalidRepository { value: String },

    /// A URL input could not be parsed.
    #[error("INVALID CONFIGURATION: '{name}' is not a valid URL ('{value}'): {source}")]
    InvalidUrl {
        name: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },

    /// The derived branch name is not a valid git reference.
    #[error("INVALID CONFIGURATION: '{name}' is not a valid git reference: {message}")]
    InvalidRefName { name: String, message: String },
}

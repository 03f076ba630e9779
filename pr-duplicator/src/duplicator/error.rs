//! Duplication error types.

use crate::config::ConfigError;
use crate::github::HostError;
use crate::templates::TemplateError;
use thiserror::Error;

/// Errors that abort a duplication.
///
/// Remote errors are passed through unchanged so their message reaches the
/// failure signal as-is.
#[derive(Debug, Error)]
pub enum DuplicationError {
    /// A hosting API call failed.
    #[error(transparent)]
    Host(#[from] HostError),

    /// The derived branch name is not a valid ref.
    #[error(transparent)]
    InvalidRef(#[from] ConfigError),

    /// The PR body could not be rendered.
    #[error(transparent)]
    Template(#[from] TemplateError),
}

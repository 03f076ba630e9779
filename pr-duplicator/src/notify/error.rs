//! Notification error types.

use crate::templates::TemplateError;
use thiserror::Error;

/// Errors that can occur while sending a notification.
///
/// These never fail a run; the runner logs them as warnings.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The webhook request failed or returned an error status.
    #[error("Webhook request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The webhook answered with a non-success status.
    #[error("Webhook rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },

    /// The message text could not be rendered.
    #[error(transparent)]
    Template(#[from] TemplateError),
}

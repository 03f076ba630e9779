//! Chat notifications about duplication results.
//!
//! Delivery is best effort: callers log failures and carry on.

mod error;
mod message;

pub use error::NotifyError;
pub use message::{Block, SlackMessage, Text};

use crate::templates::TemplateRenderer;
use async_trait::async_trait;
use tracing::{debug, info_span, Instrument};

/// Delivers messages to a chat channel.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends a single message.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError`] if delivery fails.
    async fn notify(&self, message: &SlackMessage) -> Result<(), NotifyError>;
}

/// Posts messages to a Slack incoming webhook.
#[derive(Debug, Clone)]
pub struct SlackNotifier {
    client: reqwest::Client,
    webhook_url: String,
}

impl SlackNotifier {
    /// Creates a notifier for the given webhook URL.
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            webhook_url: webhook_url.into(),
        }
    }
}

#[async_trait]
impl Notifier for SlackNotifier {
    async fn notify(&self, message: &SlackMessage) -> Result<(), NotifyError> {
        let span = info_span!("slack_notify", blocks = message.blocks.len());

        async {
            debug!("Posting Slack message");
            let response = self
                .client
                .post(&self.webhook_url)
                .json(message)
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                // Slack explains rejections in a plain text body, e.g. "invalid_payload"
                let body = response.text().await.unwrap_or_default();
                return Err(NotifyError::Rejected {
                    status: status.as_u16(),
                    body,
                });
            }

            Ok(())
        }
        .instrument(span)
        .await
    }
}

/// Builds the message announcing a duplicated PR.
///
/// # Errors
///
/// Returns [`NotifyError::Template`] if rendering fails.
pub fn success_message(
    renderer: &TemplateRenderer,
    original_url: &str,
    new_url: &str,
) -> Result<SlackMessage, NotifyError> {
    let lines = renderer.render_success_lines(original_url, new_url)?;
    Ok(SlackMessage::from_lines(lines))
}

/// Builds the message announcing a failed duplication.
///
/// # Errors
///
/// Returns [`NotifyError::Template`] if rendering fails.
pub fn failure_message(
    renderer: &TemplateRenderer,
    checks_url: &str,
) -> Result<SlackMessage, NotifyError> {
    let lines = renderer.render_failure_lines(checks_url)?;
    Ok(SlackMessage::from_lines(lines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockResponse, MockServer};

    #[test]
    fn success_message_has_three_sections() {
        let renderer = TemplateRenderer::new();
        let message = success_message(
            &renderer,
            "https://github.com/o/r/pull/5",
            "https://github.com/o/r/pull/6",
        )
        .unwrap();

        assert_eq!(message.blocks.len(), 3);
        assert_eq!(
            message.blocks[2],
            Block::Section {
                text: Text::Mrkdwn {
                    text: "NEW PR: https://github.com/o/r/pull/6".to_string()
                }
            }
        );
    }

    #[test]
    fn failure_message_links_checks() {
        let renderer = TemplateRenderer::new();
        let message = failure_message(&renderer, "https://github.com/o/r/actions").unwrap();

        assert_eq!(
            message.blocks[0],
            Block::Section {
                text: Text::Mrkdwn {
                    text: "*PR-Duplicator*: A pull request duplication *FAILED*!".to_string()
                }
            }
        );
        assert_eq!(message.blocks.len(), 2);
    }

    #[tokio::test]
    async fn slack_notifier_posts_blocks() {
        let server = MockServer::start(vec![MockResponse::text(200, "ok")]).await;
        let notifier = SlackNotifier::new(format!("{}/services/T000/B000/XXXX", server.url));
        let message = SlackMessage::from_lines(vec!["PR-Duplicator".to_string()]);

        notifier.notify(&message).await.unwrap();

        assert_eq!(
            server.requests().await,
            vec!["POST /services/T000/B000/XXXX".to_string()]
        );
        assert_eq!(
            server.bodies().await[0]["blocks"][0]["text"]["text"],
            "PR-Duplicator"
        );
    }

    #[tokio::test]
    async fn slack_notifier_reports_rejection_body() {
        let server = MockServer::start(vec![MockResponse::text(404, "no_service")]).await;
        let notifier = SlackNotifier::new(format!("{}/services/T000/B000/XXXX", server.url));
        let message = SlackMessage::from_lines(vec!["PR-Duplicator".to_string()]);

        let error = notifier.notify(&message).await.unwrap_err();

        assert!(matches!(
            error,
            NotifyError::Rejected { status: 404, ref body } if body == "no_service"
        ));
    }
}

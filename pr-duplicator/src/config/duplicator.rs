//! Action inputs.

use super::ConfigError;
use url::Url;

/// Inputs controlling which pull requests get duplicated and where.
///
/// Built once at start-up and handed to the [`Runner`](crate::Runner); never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct DuplicatorConfig {
    /// Branch the merged PR must come from (head).
    from: String,
    /// Branch the merged PR must have targeted (base).
    base: String,
    /// Base branch of the duplicated PR.
    to: String,
    /// Required author of the merged PR, if any.
    pr_author: Option<String>,
    /// Token for the hosting API.
    token: String,
    /// Slack incoming webhook for notifications, if any.
    slack_webhook_url: Option<String>,
}

impl DuplicatorConfig {
    /// Creates a configuration from the required inputs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingInput`] if any input is blank.
    pub fn new(
        from: impl Into<String>,
        base: impl Into<String>,
        to: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            from: required("from", from.into())?,
            base: required("base", base.into())?,
            to: required("to", to.into())?,
            pr_author: None,
            token: required("github-token", token.into())?,
            slack_webhook_url: None,
        })
    }

    /// Restricts duplication to pull requests opened by `author`.
    ///
    /// Blank values leave the filter disabled.
    pub fn with_pr_author(mut self, author: Option<String>) -> Self {
        self.pr_author = optional(author);
        self
    }

    /// Enables Slack notifications through the given incoming webhook.
    ///
    /// Blank values leave notifications disabled.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the webhook is not a valid URL.
    pub fn with_slack_webhook_url(mut self, url: Option<String>) -> Result<Self, ConfigError> {
        self.slack_webhook_url = match optional(url) {
            Some(value) => {
                Url::parse(&value).map_err(|source| ConfigError::InvalidUrl {
                    name: "slack-incoming-webhook-url",
                    value: value.clone(),
                    source,
                })?;
                Some(value)
            }
            None => None,
        };
        Ok(self)
    }

    /// Returns the expected head branch.
    pub fn from(&self) -> &str {
        &self.from
    }

    /// Returns the expected base branch.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Returns the base branch for the duplicated PR.
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Returns the author filter, if configured.
    pub fn pr_author(&self) -> Option<&str> {
        self.pr_author.as_deref()
    }

    /// Returns the hosting API token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the Slack webhook URL, if configured.
    pub fn slack_webhook_url(&self) -> Option<&str> {
        self.slack_webhook_url.as_deref()
    }
}

fn required(name: &'static str, value: String) -> Result<String, ConfigError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ConfigError::MissingInput { name });
    }
    Ok(value.to_string())
}

// Actions passes unset inputs as empty strings.
fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

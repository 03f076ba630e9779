//! Template renderer.

use handlebars::{no_escape, Handlebars};
use serde_json::{json, Value};

/// Body of the duplicated pull request.
const PR_BODY_TEMPLATE: &str = "This pull request is automatically created by GitHub Action PR Duplicator. Created from: {{original_url}}";

/// Slack lines posted after a successful duplication, one section each.
const SUCCESS_TEMPLATES: [&str; 3] = [
    "*PR-Duplicator*: A pull request has been duplicated!",
    "Duplicated PR: {{original_url}}",
    "NEW PR: {{new_url}}",
];

/// Slack lines posted after a failed duplication, one section each.
const FAILURE_TEMPLATES: [&str; 2] = [
    "*PR-Duplicator*: A pull request duplication *FAILED*!",
    "View checks: {{checks_url}}",
];

/// Creates a configured Handlebars registry.
///
/// The registry is configured with:
/// - No HTML escaping (PR bodies are markdown, Slack uses mrkdwn)
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);
    hbs
}

/// Renders the PR body and notification texts.
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Creates a new template renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders the body of the duplicated PR, linking back to the original.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_pr_body(&self, original_url: &str) -> Result<String, super::TemplateError> {
        self.render_template(PR_BODY_TEMPLATE, &json!({ "original_url": original_url }))
    }

    /// Renders the lines of the success notification.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_success_lines(
        &self,
        original_url: &str,
        new_url: &str,
    ) -> Result<Vec<String>, super::TemplateError> {
        let data = json!({
            "original_url": original_url,
            "new_url": new_url
        });
        self.render_all(&SUCCESS_TEMPLATES, &data)
    }

    /// Renders the lines of the failure notification.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_failure_lines(
        &self,
        checks_url: &str,
    ) -> Result<Vec<String>, super::TemplateError> {
        self.render_all(&FAILURE_TEMPLATES, &json!({ "checks_url": checks_url }))
    }

    fn render_all(
        &self,
        templates: &[&str],
        data: &Value,
    ) -> Result<Vec<String>, super::TemplateError> {
        templates
            .iter()
            .map(|template| self.render_template(template, data))
            .collect()
    }

    /// Renders a template with the given data.
    fn render_template(
        &self,
        template: &str,
        data: &Value,
    ) -> Result<String, super::TemplateError> {
        Ok(self.handlebars.render_template(template, data)?)
    }
}

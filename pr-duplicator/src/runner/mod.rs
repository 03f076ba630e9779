//! Orchestrates a single duplication run.

mod error;

pub use error::RunnerError;

use crate::config::{ActionContext, DuplicatorConfig};
use crate::duplicator::{duplicate_pull_request, Duplicate};
use crate::event::{load_event, PullRequestEvent};
use crate::github::{HostingApi, OctocrabHost};
use crate::guards::{evaluate_guards, GuardOutcome};
use crate::notify::{
    failure_message, success_message, Notifier, NotifyError, SlackMessage, SlackNotifier,
};
use crate::summary::RunOutcome;
use crate::templates::TemplateRenderer;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Runs the duplicator for one event: guards, duplication, notifications.
pub struct Runner {
    config: DuplicatorConfig,
    context: ActionContext,
    host: Arc<dyn HostingApi>,
    notifier: Option<Arc<dyn Notifier>>,
    renderer: TemplateRenderer,
}

impl Runner {
    /// Builds a runner talking to GitHub and, if configured, Slack.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Octocrab`] if the GitHub client cannot be built.
    pub fn new(config: DuplicatorConfig, context: ActionContext) -> Result<Self, RunnerError> {
        let host = OctocrabHost::new(
            config.token(),
            context.repository.clone(),
            context.api_url.as_deref(),
        )?;
        let notifier = config
            .slack_webhook_url()
            .map(|url| Arc::new(SlackNotifier::new(url)) as Arc<dyn Notifier>);

        Ok(Self::with_clients(config, context, Arc::new(host), notifier))
    }

    /// Builds a runner from explicit API clients.
    pub fn with_clients(
        config: DuplicatorConfig,
        context: ActionContext,
        host: Arc<dyn HostingApi>,
        notifier: Option<Arc<dyn Notifier>>,
    ) -> Self {
        Self {
            config,
            context,
            host,
            notifier,
            renderer: TemplateRenderer::new(),
        }
    }

    /// Returns the runner environment.
    pub fn context(&self) -> &ActionContext {
        &self.context
    }

    /// Loads the event from the context's event path and processes it.
    ///
    /// # Errors
    ///
    /// See [`Runner::run_event`].
    pub async fn run(&self) -> Result<RunOutcome, RunnerError> {
        let event = load_event(self.context.event_path())?;
        self.run_event(&event).await
    }

    /// Processes a single event.
    ///
    /// A guard skip is a successful outcome. Duplication failures trigger a
    /// best-effort failure notification before being returned.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Event`] if the event has no pull request, and
    /// [`RunnerError::Duplication`] if any remote step fails.
    pub async fn run_event(&self, event: &PullRequestEvent) -> Result<RunOutcome, RunnerError> {
        let pull_request = event.pull_request()?;
        debug!(
            repo = %self.context.repository,
            action = ?event.action,
            pr_number = pull_request.number,
            author = %pull_request.user.login,
            head = %pull_request.head.ref_name,
            base = %pull_request.base.ref_name,
            merged = pull_request.merged,
            "Evaluating guards"
        );

        if let GuardOutcome::Skip(reason) = evaluate_guards(&self.config, pull_request) {
            if reason.is_warning() {
                warn!("{reason}");
            } else {
                info!("{reason}");
            }
            return Ok(RunOutcome::Skipped(reason));
        }

        match duplicate_pull_request(
            self.host.as_ref(),
            &self.renderer,
            &self.config,
            pull_request,
        )
        .await
        {
            Ok(duplicate) => {
                self.notify_success(&pull_request.html_url, &duplicate).await;
                info!(
                    source_branch = %duplicate.source.name,
                    source_sha = %duplicate.source.sha,
                    branch = %duplicate.branch_name,
                    "Pull request has been created - {}",
                    duplicate.pull_request.html_url
                );
                Ok(RunOutcome::Succeeded(duplicate))
            }
            Err(e) => {
                error!(error = %e, pr_number = pull_request.number, "Duplication failed");
                self.notify_failure().await;
                Err(e.into())
            }
        }
    }

    async fn notify_success(&self, original_url: &str, duplicate: &Duplicate) {
        let message = success_message(
            &self.renderer,
            original_url,
            &duplicate.pull_request.html_url,
        );
        self.send(message).await;
    }

    async fn notify_failure(&self) {
        let message = failure_message(&self.renderer, &self.context.checks_url());
        self.send(message).await;
    }

    /// Sends a notification, downgrading any failure to a warning.
    async fn send(&self, message: Result<SlackMessage, NotifyError>) {
        let Some(notifier) = &self.notifier else {
            return;
        };

        let result = match message {
            Ok(message) => notifier.notify(&message).await,
            Err(e) => Err(e),
        };

        if let Err(e) = result {
            warn!(error = %e, "SLACK NOTIFICATION FAILED!");
        }
    }
}

//! CLI for the PR Duplicator.
//!
//! Runs as a GitHub Action step: inputs come from `INPUT_*` environment
//! variables, the event from `GITHUB_EVENT_PATH` or `--event-path`.

use clap::Parser;
use pr_duplicator::{
    workflow, ActionContext, DuplicatorConfig, RunOutcome, RunStatus, Runner, RunnerError,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// PR Duplicator - Duplicate a merged pull request onto another base branch.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Branch from which the merged PR was created (head).
    #[arg(long, env = "INPUT_FROM")]
    from: String,

    /// Branch the merged PR was requested into.
    #[arg(long, env = "INPUT_BASE")]
    base: String,

    /// Branch the duplicated PR is opened against.
    #[arg(long, env = "INPUT_TO")]
    to: String,

    /// Only duplicate PRs opened by this user.
    #[arg(long, env = "INPUT_PR-AUTHOR")]
    pr_author: Option<String>,

    /// GitHub token.
    #[arg(long, env = "INPUT_GITHUB-TOKEN")]
    github_token: Option<String>,

    /// Slack incoming webhook for notifications.
    #[arg(long, env = "INPUT_SLACK-INCOMING-WEBHOOK-URL")]
    slack_incoming_webhook_url: Option<String>,

    /// Path to the event payload, overriding GITHUB_EVENT_PATH.
    #[arg(long)]
    event_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Octocrab and reqwest both go through rustls
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    let status = match run(args).await {
        Ok((outcome, context)) => {
            report_outcome(&outcome, &context);
            outcome.status()
        }
        Err(e) => {
            error!(error = %e, "ERROR");
            workflow::set_failed(&e.to_string());
            RunStatus::Failed
        }
    };

    info!(status = status.as_str(), "Run finished");
    if status.is_failure() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<(RunOutcome, ActionContext), RunnerError> {
    // Fall back to the token the runner exposes when the input is unset
    let token = args
        .github_token
        .filter(|t| !t.trim().is_empty())
        .or_else(|| std::env::var("GITHUB_TOKEN").ok())
        .unwrap_or_default();

    let config = DuplicatorConfig::new(args.from, args.base, args.to, token)?
        .with_pr_author(args.pr_author)
        .with_slack_webhook_url(args.slack_incoming_webhook_url)?;

    let context = ActionContext::from_env(args.event_path)?;

    let runner = Runner::new(config, context)?;
    let outcome = runner.run().await?;
    Ok((outcome, runner.context().clone()))
}

/// Writes the step outputs of a successful run.
///
/// Skips were already logged by the runner.
fn report_outcome(outcome: &RunOutcome, context: &ActionContext) {
    let RunOutcome::Succeeded(duplicate) = outcome else {
        return;
    };

    if let Some(path) = &context.output_path {
        let outputs = [
            ("pr-url", duplicate.pull_request.html_url.clone()),
            ("pr-number", duplicate.pull_request.number.to_string()),
            ("branch", duplicate.branch_name.clone()),
        ];
        if let Err(e) = workflow::write_outputs(path, &outputs) {
            warn!(error = %e, "Failed to write step outputs");
        }
    }
    info!(pr_url = outcome.pull_request_url().unwrap_or_default(), "OK!");
}

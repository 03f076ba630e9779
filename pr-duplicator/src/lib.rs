#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod duplicator;
pub mod event;
pub mod github;
pub mod guards;
pub mod notify;
pub mod runner;
pub mod summary;
pub mod templates;
pub mod workflow;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::{ActionContext, ConfigError, DuplicatorConfig, Repository};
pub use duplicator::{duplicate_pull_request, Duplicate, DuplicationError};
pub use event::{load_event, EventError, PullRequest, PullRequestEvent};
pub use github::{
    BranchHead, CreatedPullRequest, CreatedRef, HostError, HostingApi, NewPullRequest,
    OctocrabHost,
};
pub use guards::{evaluate_guards, GuardOutcome, SkipReason};
pub use notify::{failure_message, success_message, Notifier, NotifyError, SlackMessage, SlackNotifier};
pub use runner::{Runner, RunnerError};
pub use summary::{RunOutcome, RunStatus};
pub use templates::{
    create_handlebars_registry, generate_branch_name, generate_pr_title, generate_ref_name,
    TemplateError, TemplateRenderer,
};
pub use workflow::WorkflowError;

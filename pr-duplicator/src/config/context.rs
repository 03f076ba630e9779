//! GitHub Actions runner environment.

use super::{ConfigError, Repository};
use std::path::{Path, PathBuf};

const REPOSITORY_ENV: &str = "GITHUB_REPOSITORY";
const EVENT_PATH_ENV: &str = "GITHUB_EVENT_PATH";
const SERVER_URL_ENV: &str = "GITHUB_SERVER_URL";
const API_URL_ENV: &str = "GITHUB_API_URL";
const RUN_ID_ENV: &str = "GITHUB_RUN_ID";
const OUTPUT_ENV: &str = "GITHUB_OUTPUT";

const DEFAULT_SERVER_URL: &str = "https://github.com";

/// Information about the workflow run the action is executing in.
#[derive(Debug, Clone)]
pub struct ActionContext {
    /// Repository the event belongs to.
    pub repository: Repository,

    /// Path to the JSON event payload.
    pub event_path: PathBuf,

    /// Web URL of the GitHub server (e.g., "https://github.com").
    pub server_url: String,

    /// REST API base URL override, for GitHub Enterprise Server.
    pub api_url: Option<String>,

    /// Identifier of the current workflow run.
    pub run_id: Option<String>,

    /// File that step outputs are appended to.
    pub output_path: Option<PathBuf>,
}

impl ActionContext {
    /// Creates a context for `repository` with the event payload at `event_path`.
    pub fn new(repository: Repository, event_path: impl Into<PathBuf>) -> Self {
        Self {
            repository,
            event_path: event_path.into(),
            server_url: DEFAULT_SERVER_URL.to_string(),
            api_url: None,
            run_id: None,
            output_path: None,
        }
    }

    /// Reads the context from the standard `GITHUB_*` environment variables.
    ///
    /// `event_path` takes precedence over `GITHUB_EVENT_PATH`, which is only
    /// required when no path is given.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `GITHUB_REPOSITORY` or the event path are
    /// missing, or the repository slug is malformed.
    pub fn from_env(event_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let repository = env_var(REPOSITORY_ENV)
            .ok_or(ConfigError::MissingEnv {
                name: REPOSITORY_ENV,
            })?
            .parse::<Repository>()?;
        let event_path = match event_path {
            Some(path) => path,
            None => env_var(EVENT_PATH_ENV)
                .map(PathBuf::from)
                .ok_or(ConfigError::MissingEnv {
                    name: EVENT_PATH_ENV,
                })?,
        };

        Ok(Self {
            repository,
            event_path,
            server_url: env_var(SERVER_URL_ENV).unwrap_or_else(|| DEFAULT_SERVER_URL.to_string()),
            api_url: env_var(API_URL_ENV),
            run_id: env_var(RUN_ID_ENV),
            output_path: env_var(OUTPUT_ENV).map(PathBuf::from),
        })
    }

    /// Sets the workflow run identifier.
    pub fn with_run_id(mut self, run_id: Option<String>) -> Self {
        self.run_id = run_id;
        self
    }

    /// Returns the event payload path.
    pub fn event_path(&self) -> &Path {
        &self.event_path
    }

    /// Returns the link to the checks of the current run.
    ///
    /// Falls back to the repository's Actions tab when the run id is unknown.
    #[must_use]
    pub fn checks_url(&self) -> String {
        let actions = format!(
            "{}/{}/actions",
            self.server_url.trim_end_matches('/'),
            self.repository.full_name()
        );
        match &self.run_id {
            Some(run_id) => format!("{actions}/runs/{run_id}"),
            None => actions,
        }
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

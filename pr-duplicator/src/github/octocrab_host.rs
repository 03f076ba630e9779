//! Octocrab-backed hosting API.

use super::types::{BranchResponse, CreateRefRequest, RefResponse};
use super::{BranchHead, CreatedPullRequest, CreatedRef, HostError, HostingApi, NewPullRequest};
use crate::config::Repository;
use async_trait::async_trait;
use octocrab::Octocrab;
use tracing::{debug, info, info_span, Instrument};

const STATUS_NOT_FOUND: u16 = 404;
const STATUS_UNPROCESSABLE: u16 = 422;

/// [`HostingApi`] implementation talking to the GitHub REST API.
#[derive(Debug, Clone)]
pub struct OctocrabHost {
    octocrab: Octocrab,
    repository: Repository,
}

impl OctocrabHost {
    /// Builds an authenticated client for `repository`.
    ///
    /// `api_url` overrides the REST base URL for GitHub Enterprise Server.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be constructed.
    pub fn new(
        token: &str,
        repository: Repository,
        api_url: Option<&str>,
    ) -> Result<Self, octocrab::Error> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());
        if let Some(api_url) = api_url {
            builder = builder.base_uri(api_url)?;
        }

        Ok(Self {
            octocrab: builder.build()?,
            repository,
        })
    }

    fn route(&self, path: &str) -> String {
        format!(
            "/repos/{}/{}/{path}",
            self.repository.owner, self.repository.name
        )
    }
}

#[async_trait]
impl HostingApi for OctocrabHost {
    async fn get_branch(&self, branch: &str) -> Result<BranchHead, HostError> {
        let span = info_span!("get_branch", repo = %self.repository, branch);

        async {
            debug!("Fetching branch");

            // Branch names may contain '/', '#' or '%', e.g. "feature/foo" -> "feature%2Ffoo"
            let route = self.route(&format!("branches/{}", urlencoding::encode(branch)));
            let response: BranchResponse = self
                .octocrab
                .get(route, None::<&()>)
                .await
                .map_err(|e| match HostError::from(e) {
                    HostError::Api {
                        status: STATUS_NOT_FOUND,
                        ..
                    } => HostError::BranchNotFound {
                        branch: branch.to_string(),
                    },
                    other => other,
                })?;

            let head = BranchHead::from(response);
            debug!(sha = %head.sha, "Branch resolved");
            Ok(head)
        }
        .instrument(span)
        .await
    }

    async fn create_ref(&self, ref_name: &str, sha: &str) -> Result<CreatedRef, HostError> {
        let span = info_span!("create_ref", repo = %self.repository, ref_name, sha);

        async {
            debug!("Creating reference");

            let body = CreateRefRequest { ref_name, sha };
            let response: RefResponse = self
                .octocrab
                .post(self.route("git/refs"), Some(&body))
                .await
                .map_err(|e| match HostError::from(e) {
                    HostError::Api {
                        status: STATUS_UNPROCESSABLE,
                        message,
                    } if is_ref_conflict(&message) => HostError::RefAlreadyExists {
                        ref_name: ref_name.to_string(),
                    },
                    other => other,
                })?;

            info!("Reference created");
            Ok(CreatedRef::from(response))
        }
        .instrument(span)
        .await
    }

    async fn create_pull_request(
        &self,
        request: &NewPullRequest,
    ) -> Result<CreatedPullRequest, HostError> {
        let span = info_span!(
            "create_pull_request",
            repo = %self.repository,
            head = %request.head,
            base = %request.base
        );

        async {
            debug!(title = %request.title, "Opening pull request");

            let pr = self
                .octocrab
                .pulls(&self.repository.owner, &self.repository.name)
                .create(&request.title, &request.head, &request.base)
                .body(&request.body)
                .send()
                .await
                .map_err(|e| match HostError::from(e) {
                    HostError::Api {
                        status: STATUS_UNPROCESSABLE,
                        message,
                    } => HostError::Validation { message },
                    other => other,
                })?;

            let html_url = pr
                .html_url
                .as_ref()
                .map(|u| u.to_string())
                .unwrap_or_else(|| {
                    format!(
                        "https://github.com/{}/pull/{}",
                        self.repository.full_name(),
                        pr.number
                    )
                });

            info!(pr_number = pr.number, "Pull request opened");
            Ok(CreatedPullRequest {
                number: pr.number,
                html_url,
                title: pr.title.clone().unwrap_or_else(|| request.title.clone()),
            })
        }
        .instrument(span)
        .await
    }
}

fn is_ref_conflict(message: &str) -> bool {
    message.to_lowercase().contains("reference already exists")
}

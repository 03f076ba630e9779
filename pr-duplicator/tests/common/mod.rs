//! In-memory hosting API and notifier that record every call.

#![allow(dead_code)]

use async_trait::async_trait;
use pr_duplicator::{
    BranchHead, CreatedPullRequest, CreatedRef, HostError, HostingApi, NewPullRequest, Notifier,
    NotifyError, PullRequestEvent, SlackMessage,
};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Mutex;

pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/events")
}

pub fn load_fixture(name: &str) -> PullRequestEvent {
    pr_duplicator::load_event(&fixtures_root().join(name)).unwrap()
}

/// A hosting API call, in the order it was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    GetBranch(String),
    CreateRef { ref_name: String, sha: String },
    CreatePullRequest(NewPullRequest),
}

/// Hosting API backed by a branch map.
#[derive(Default)]
pub struct RecordingHost {
    branches: HashMap<String, String>,
    refs: Mutex<HashSet<String>>,
    missing_bases: HashSet<String>,
    calls: Mutex<Vec<HostCall>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_branch(mut self, name: &str, sha: &str) -> Self {
        self.branches.insert(name.to_string(), sha.to_string());
        self
    }

    /// Makes PR creation against `base` fail validation.
    pub fn with_missing_base(mut self, base: &str) -> Self {
        self.missing_bases.insert(base.to_string());
        self
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HostingApi for RecordingHost {
    async fn get_branch(&self, branch: &str) -> Result<BranchHead, HostError> {
        self.calls
            .lock()
            .unwrap()
            .push(HostCall::GetBranch(branch.to_string()));

        let sha = self
            .branches
            .get(branch)
            .ok_or_else(|| HostError::BranchNotFound {
                branch: branch.to_string(),
            })?;

        Ok(BranchHead {
            name: branch.to_string(),
            sha: sha.clone(),
        })
    }

    async fn create_ref(&self, ref_name: &str, sha: &str) -> Result<CreatedRef, HostError> {
        self.calls.lock().unwrap().push(HostCall::CreateRef {
            ref_name: ref_name.to_string(),
            sha: sha.to_string(),
        });

        if !self.refs.lock().unwrap().insert(ref_name.to_string()) {
            return Err(HostError::RefAlreadyExists {
                ref_name: ref_name.to_string(),
            });
        }

        Ok(CreatedRef {
            ref_name: ref_name.to_string(),
            sha: sha.to_string(),
        })
    }

    async fn create_pull_request(
        &self,
        request: &NewPullRequest,
    ) -> Result<CreatedPullRequest, HostError> {
        let number = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(HostCall::CreatePullRequest(request.clone()));
            100 + calls.len() as u64
        };

        if self.missing_bases.contains(&request.base) {
            return Err(HostError::Validation {
                message: format!("Validation Failed (base: {} does not exist)", request.base),
            });
        }

        Ok(CreatedPullRequest {
            number,
            html_url: format!("https://github.com/citizenos/citizenos-fe/pull/{number}"),
            title: request.title.clone(),
        })
    }
}

/// Notifier that keeps every message it is asked to send.
#[derive(Default)]
pub struct RecordingNotifier {
    fail: bool,
    messages: Mutex<Vec<SlackMessage>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose deliveries are all rejected.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn messages(&self) -> Vec<SlackMessage> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, message: &SlackMessage) -> Result<(), NotifyError> {
        self.messages.lock().unwrap().push(message.clone());
        if self.fail {
            return Err(NotifyError::Rejected {
                status: 404,
                body: "no_service".to_string(),
            });
        }
        Ok(())
    }
}

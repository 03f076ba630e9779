//! GitHub hosting API access.
//!
//! The duplicator only talks to GitHub through the [`HostingApi`] trait so
//! the flow can run against in-memory implementations in tests.

mod client;
mod error;
mod octocrab_host;
mod types;

pub use client::HostingApi;
pub use error::HostError;
pub use octocrab_host::OctocrabHost;
pub use types::{BranchHead, CreatedPullRequest, CreatedRef, NewPullRequest};

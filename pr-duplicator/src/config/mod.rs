//! Run configuration.
//!
//! Splits into the action inputs ([`DuplicatorConfig`]) and the runner
//! environment the action executes in ([`ActionContext`]).

mod context;
mod duplicator;
mod error;
mod repository;

pub use context::ActionContext;
pub use duplicator::DuplicatorConfig;
pub use error::ConfigError;
pub use repository::Repository;

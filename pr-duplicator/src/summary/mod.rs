//! Run outcome types.

mod outcome;

pub use outcome::{RunOutcome, RunStatus};

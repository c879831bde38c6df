//! Reminds a Slack channel about GitLab merge requests waiting for review.
//!
//! One run fetches the open merge requests, drops the ones that are too new
//! or still drafts, tints the rest by age and posts them as Slack
//! attachments.

pub mod cli;
pub mod config;
pub mod error;
pub mod forge;
pub mod notifier;
pub mod slack;

pub use error::{NudgeError, Result};

#[cfg(test)]
pub mod test_helpers;

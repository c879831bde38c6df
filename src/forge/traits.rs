//! Traits related to remote git forges
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::{error::Result, forge::request::MergeRequest};

/// A review platform that can list merge requests awaiting review.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Forge: Send + Sync {
    /// Open merge requests, oldest first.
    async fn get_open_merge_requests(&self) -> Result<Vec<MergeRequest>>;
}

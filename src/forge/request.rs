use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
/// A user referenced by a merge request.
pub struct User {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents a normalized open merge request returned from the forge
pub struct MergeRequest {
    pub title: String,
    pub created_at: DateTime<Utc>,
    /// Draft or work-in-progress: not ready for review yet
    pub draft: bool,
    pub labels: Vec<String>,
    pub web_url: String,
    pub assignee: Option<User>,
    pub author: Option<User>,
}

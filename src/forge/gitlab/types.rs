use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{
    error::NudgeError,
    forge::request::{MergeRequest, User},
};

/// User record embedded in a merge request (author, assignee).
#[derive(Debug, Deserialize)]
pub struct GitlabUser {
    pub name: String,
}

/// Merge request as returned by `GET /merge_requests`.
///
/// GitLab reports draft status as `draft` since 13.2 and as the deprecated
/// `work_in_progress` before that; newer instances send both. At least one
/// of the two must be present.
#[derive(Debug, Deserialize)]
pub struct GitlabMergeRequest {
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub draft: Option<bool>,
    pub work_in_progress: Option<bool>,
    pub labels: Vec<String>,
    pub web_url: String,
    pub assignee: Option<GitlabUser>,
    pub author: Option<GitlabUser>,
}

impl From<GitlabUser> for User {
    fn from(user: GitlabUser) -> Self {
        User { name: user.name }
    }
}

impl TryFrom<GitlabMergeRequest> for MergeRequest {
    type Error = NudgeError;

    fn try_from(mr: GitlabMergeRequest) -> Result<Self, Self::Error> {
        let draft = match (mr.draft, mr.work_in_progress) {
            (None, None) => {
                return Err(NudgeError::fetch(format!(
                    "merge request \"{}\" is missing draft status",
                    mr.title
                )));
            }
            (draft, wip) => draft.unwrap_or(false) || wip.unwrap_or(false),
        };

        Ok(MergeRequest {
            title: mr.title,
            created_at: mr.created_at,
            draft,
            labels: mr.labels,
            web_url: mr.web_url,
            assignee: mr.assignee.map(User::from),
            author: mr.author.map(User::from),
        })
    }
}

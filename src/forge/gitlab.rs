//! Implements the Forge trait for Gitlab
use async_trait::async_trait;
use log::*;
use reqwest::{
    Client, Url,
    header::{HeaderMap, HeaderValue},
};
use secrecy::ExposeSecret;

use crate::{
    config::{ClientConfig, DEFAULT_PAGE_SIZE},
    error::{NudgeError, Result},
    forge::{
        gitlab::types::GitlabMergeRequest, request::MergeRequest,
        traits::Forge,
    },
};

mod types;

const NEXT_PAGE_HEADER: &str = "x-next-page";

/// GitLab forge implementation using the v4 REST API.
pub struct Gitlab {
    client: Client,
    merge_requests_url: Url,
}

impl Gitlab {
    /// Create GitLab client with `Private-Token` authentication, scoped to
    /// a project when one is configured.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let token = config.gitlab_token.expose_secret();

        let mut headers = HeaderMap::new();

        let mut token_value = HeaderValue::from_str(token)?;
        token_value.set_sensitive(true);

        headers.append("Private-Token", token_value);

        if config.accept_invalid_certs {
            warn!("TLS certificate verification is disabled for gitlab");
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(NudgeError::from_fetch)?;

        let merge_requests_url =
            merge_requests_url(&config.gitlab_host, config.project_id)?;

        Ok(Self {
            client,
            merge_requests_url,
        })
    }
}

/// Build the merge request listing endpoint, including the fixed query.
fn merge_requests_url(host: &Url, project_id: Option<u64>) -> Result<Url> {
    let mut path = "api/v4".to_string();

    if let Some(id) = project_id {
        path = format!("{path}/projects/{id}");
    }

    path = format!("{path}/merge_requests");

    let mut base = host.clone();

    // Url::join drops the last path segment unless it ends with "/", which
    // would lose sub-path installs such as https://example.com/gitlab
    if !base.path().ends_with('/') {
        base.set_path(&format!("{}/", base.path()));
    }

    let mut url = base.join(&path)?;

    url.query_pairs_mut()
        .append_pair("state", "opened")
        .append_pair("scope", "all")
        .append_pair("order_by", "created_at")
        .append_pair("sort", "asc")
        .append_pair("per_page", &DEFAULT_PAGE_SIZE.to_string());

    Ok(url)
}

/// GitLab names the next page when the listing did not fit in one page.
fn is_truncated(headers: &HeaderMap) -> bool {
    headers
        .get(NEXT_PAGE_HEADER)
        .is_some_and(|next_page| !next_page.is_empty())
}

#[async_trait]
impl Forge for Gitlab {
    async fn get_open_merge_requests(&self) -> Result<Vec<MergeRequest>> {
        debug!("requesting open merge requests: {}", self.merge_requests_url);

        let request = self
            .client
            .get(self.merge_requests_url.clone())
            .build()
            .map_err(NudgeError::from_fetch)?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(NudgeError::from_fetch)?;

        let result = response
            .error_for_status()
            .map_err(NudgeError::from_fetch)?;

        if is_truncated(result.headers()) {
            warn!(
                "more than {DEFAULT_PAGE_SIZE} open merge requests: only the first page is reported"
            );
        }

        let merge_requests: Vec<GitlabMergeRequest> =
            result.json().await.map_err(|err| {
                if err.is_decode() {
                    NudgeError::fetch(format!("malformed response body: {err}"))
                } else {
                    NudgeError::from_fetch(err)
                }
            })?;

        let merge_requests = merge_requests
            .into_iter()
            .map(MergeRequest::try_from)
            .collect::<Result<Vec<MergeRequest>>>()?;

        info!("found {} open merge requests", merge_requests.len());

        Ok(merge_requests)
    }
}

//! Fetches open merge requests and posts a reminder about them.
use chrono::Utc;
use log::*;

use crate::{
    config::ClientConfig,
    error::Result,
    forge::{gitlab::Gitlab, request::MergeRequest, traits::Forge},
    slack::{Slack, Webhook, types::NotificationPayload},
};

pub mod format;


/// Runs the fetch, format, post pipeline once.
pub struct NotifierClient {
    forge: Box<dyn Forge>,
    webhook: Box<dyn Webhook>,
}

impl NotifierClient {
    pub fn new(forge: Box<dyn Forge>, webhook: Box<dyn Webhook>) -> Self {
        Self { forge, webhook }
    }

    /// Create a client talking to GitLab and Slack.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let forge = Gitlab::new(&config)?;
        let webhook = Slack::new(&config)?;
        Ok(Self::new(Box::new(forge), Box::new(webhook)))
    }

    pub async fn fetch_open_requests(&self) -> Result<Vec<MergeRequest>> {
        self.forge.get_open_merge_requests().await
    }

    pub fn format_message(
        &self,
        requests: &[MergeRequest],
    ) -> NotificationPayload {
        format::format_message(requests, Utc::now())
    }

    pub async fn post_message(
        &self,
        payload: &NotificationPayload,
    ) -> Result<()> {
        self.webhook.post_message(payload).await
    }

    pub async fn run(&self) -> Result<()> {
        let requests = self.fetch_open_requests().await?;

        let payload = self.format_message(&requests);

        info!(
            "reporting {} of {} open merge requests",
            payload.attachments.len(),
            requests.len()
        );

        self.post_message(&payload).await
    }
}

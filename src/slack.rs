//! Delivery of notification payloads to a Slack incoming webhook.
use async_trait::async_trait;
use log::*;
#[cfg(test)]
use mockall::automock;
use reqwest::{Client, Url};

use crate::{
    config::ClientConfig,
    error::{NudgeError, Result},
};

/// Payload types for Slack attachments.
pub mod types;

use types::NotificationPayload;

/// A chat endpoint that accepts a rendered notification.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Webhook: Send + Sync {
    async fn post_message(&self, payload: &NotificationPayload) -> Result<()>;
}

/// Slack incoming webhook client.
pub struct Slack {
    client: Client,
    uri: Url,
    dry_run: bool,
}

impl Slack {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(NudgeError::from_post)?;

        Ok(Self {
            client,
            uri: config.slack_uri.clone(),
            dry_run: config.dry_run,
        })
    }
}

#[async_trait]
impl Webhook for Slack {
    async fn post_message(&self, payload: &NotificationPayload) -> Result<()> {
        if self.dry_run {
            warn!(
                "dry_run: would post {} attachments: {}",
                payload.attachments.len(),
                serde_json::to_string_pretty(payload)?
            );
            return Ok(());
        }

        let request = self
            .client
            .post(self.uri.clone())
            .json(payload)
            .build()
            .map_err(NudgeError::from_post)?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(NudgeError::from_post)?;

        response.error_for_status().map_err(NudgeError::from_post)?;

        info!("posted {} attachments to slack", payload.attachments.len());

        Ok(())
    }
}

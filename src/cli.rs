//! CLI argument parsing and client configuration.
use clap::Parser;
use secrecy::SecretString;
use std::env;
use url::Url;

use crate::{
    config::{ClientConfig, GITLAB_TOKEN_ENV, SLACK_URI_ENV},
    error::{NudgeError, Result},
};

/// Notify a Slack channel about open GitLab merge requests.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, alias = "gitlab_host")]
    /// GitLab instance URL (https://gitlab.com or self-hosted).
    pub gitlab_host: String,

    #[arg(long, default_value = "", alias = "gitlab_token")]
    /// GitLab access token. Falls back to GITLAB_TOKEN env var.
    pub gitlab_token: String,

    #[arg(long, default_value = "", alias = "slack_uri")]
    /// Slack incoming webhook URI. Falls back to SLACK_WEBHOOK_URI env var.
    pub slack_uri: String,

    #[arg(long, alias = "project_id")]
    /// Only report merge requests from this project.
    pub project_id: Option<u64>,

    #[arg(long, default_value_t = false)]
    /// Skip TLS certificate verification when talking to GitLab.
    pub insecure: bool,

    #[arg(long, default_value_t = false)]
    /// Log the Slack payload instead of posting it.
    pub dry_run: bool,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}

impl Args {
    /// Resolve the client configuration from CLI arguments and environment.
    pub fn get_config(&self) -> Result<ClientConfig> {
        self.get_config_with_env(|name| env::var(name).ok())
    }

    /// Resolve the client configuration, reading fallbacks through `lookup`.
    fn get_config_with_env(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<ClientConfig> {
        let gitlab_host = parse_http_url("gitlab host", &self.gitlab_host)?;

        let token = resolve(&self.gitlab_token, lookup(GITLAB_TOKEN_ENV));

        if token.is_empty() {
            return Err(NudgeError::invalid_args(format!(
                "must set gitlab token with --gitlab-token or {GITLAB_TOKEN_ENV}"
            )));
        }

        let slack_uri = resolve(&self.slack_uri, lookup(SLACK_URI_ENV));

        if slack_uri.is_empty() {
            return Err(NudgeError::invalid_args(format!(
                "must set slack webhook with --slack-uri or {SLACK_URI_ENV}"
            )));
        }

        let slack_uri = parse_http_url("slack uri", &slack_uri)?;

        Ok(ClientConfig {
            gitlab_host,
            gitlab_token: SecretString::from(token),
            slack_uri,
            project_id: self.project_id,
            accept_invalid_certs: self.insecure,
            dry_run: self.dry_run,
        })
    }
}

/// Use the CLI value when given, else the environment fallback.
fn resolve(value: &str, fallback: Option<String>) -> String {
    let mut resolved = value.to_string();

    if resolved.is_empty()
        && let Some(env_value) = fallback
    {
        resolved = env_value;
    }

    resolved
}

/// Validate URL uses HTTP or HTTPS scheme.
fn parse_http_url(name: &str, value: &str) -> Result<Url> {
    let url = Url::parse(value)?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(NudgeError::invalid_args(format!(
            "{name} must use http or https, got {scheme}"
        ))),
    }
}

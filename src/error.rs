//! Error types for nudge.

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for nudge operations.
#[derive(Error, Debug)]
pub enum NudgeError {
    // Cli args errors
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    // GitLab errors
    #[error("Failed to fetch merge requests: {0}")]
    FetchFailed(String),

    // Slack errors
    #[error("Failed to post message to webhook: {0}")]
    PostFailed(String),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),
}

/// Result type alias using NudgeError
pub type Result<T> = std::result::Result<T, NudgeError>;

impl NudgeError {
    /// Create an invalid arguments error
    pub fn invalid_args(msg: impl Into<String>) -> Self {
        Self::InvalidArgs(msg.into())
    }

    /// Create a fetch error with context
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::FetchFailed(msg.into())
    }

    /// Create a post error with context
    pub fn post(msg: impl Into<String>) -> Self {
        Self::PostFailed(msg.into())
    }

    /// Wrap a reqwest failure from the GitLab side.
    pub fn from_fetch(err: reqwest::Error) -> Self {
        Self::FetchFailed(describe_request_error(&err))
    }

    /// Wrap a reqwest failure from the webhook side.
    pub fn from_post(err: reqwest::Error) -> Self {
        Self::PostFailed(describe_request_error(&err))
    }
}

fn describe_request_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        format!("request timed out: {err}")
    } else if err.is_connect() {
        format!("connection failed: {err}")
    } else if let Some(status) = err.status() {
        describe_status(status, &err.to_string())
    } else {
        err.to_string()
    }
}

fn describe_status(status: StatusCode, detail: &str) -> String {
    match status.as_u16() {
        401 | 403 => {
            format!("authentication failed (status {status}): {detail}")
        }
        404 => format!("not found (status {status}): {detail}"),
        429 => format!("rate limit exceeded (status {status})"),
        _ => format!("unexpected status {status}: {detail}"),
    }
}

//! Configuration for a single notifier run.
use secrecy::SecretString;
use url::Url;

/// Number of merge requests requested from GitLab. Only the first page is
/// fetched.
pub const DEFAULT_PAGE_SIZE: u8 = 100;
/// Merge requests younger than this many whole days are not reported.
pub const MIN_AGE_DAYS: i64 = 1;
/// Merge requests open longer than this many days are tinted "warning".
pub const WARNING_AGE_DAYS: i64 = 3;
/// Merge requests open longer than this many days are tinted "danger".
pub const DANGER_AGE_DAYS: i64 = 7;
/// Title marker that always escalates a merge request to "danger".
pub const HOTFIX_MARKER: &str = "hotfix";
/// Default attachment tint in hex format.
pub const INFO_COLOR: &str = "#439FE0";
/// Environment variable consulted when no token is passed on the command
/// line.
pub const GITLAB_TOKEN_ENV: &str = "GITLAB_TOKEN";
/// Environment variable consulted when no webhook is passed on the command
/// line.
pub const SLACK_URI_ENV: &str = "SLACK_WEBHOOK_URI";

/// Everything the notifier needs to perform one run. Built once at startup
/// and handed to the clients by value.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the GitLab instance (e.g. "https://gitlab.com").
    pub gitlab_host: Url,
    /// Personal or project access token sent as `Private-Token`.
    pub gitlab_token: SecretString,
    /// Slack incoming webhook URI.
    pub slack_uri: Url,
    /// Restrict the query to a single project.
    pub project_id: Option<u64>,
    /// Skip TLS certificate verification for GitLab requests.
    pub accept_invalid_certs: bool,
    /// Log the payload instead of posting it.
    pub dry_run: bool,
}

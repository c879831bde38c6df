//! Renders open merge requests as a Slack notification.
use chrono::{DateTime, Utc};
use log::*;

use crate::{
    config::{DANGER_AGE_DAYS, HOTFIX_MARKER, MIN_AGE_DAYS, WARNING_AGE_DAYS},
    forge::request::{MergeRequest, User},
    slack::types::{
        Attachment, Color, Field, FieldValue, NotificationPayload,
    },
};

/// Build the payload for `requests` as seen at `now`.
///
/// Merge requests opened less than a day ago and drafts are left out. The
/// remaining ones keep their input order.
pub fn format_message(
    requests: &[MergeRequest],
    now: DateTime<Utc>,
) -> NotificationPayload {
    let mut attachments = vec![];

    for mr in requests.iter() {
        let days = days_open(mr.created_at, now);

        if days < MIN_AGE_DAYS {
            debug!("skipping new merge request: {}", mr.title);
            continue;
        }

        if mr.draft {
            debug!("skipping draft merge request: {}", mr.title);
            continue;
        }

        attachments.push(attachment(mr, days));
    }

    NotificationPayload { attachments }
}

/// Whole days elapsed since `created_at`, rounded down.
pub fn days_open(created_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    now.signed_duration_since(created_at).num_days()
}

/// Tint by age, with hotfixes always at the top severity.
pub fn color_for(title: &str, days_open: i64) -> Color {
    if title.to_lowercase().contains(HOTFIX_MARKER) {
        return Color::Danger;
    }

    if days_open > DANGER_AGE_DAYS {
        Color::Danger
    } else if days_open > WARNING_AGE_DAYS {
        Color::Warning
    } else {
        Color::Info
    }
}

/// Narrow an optional user record to its display name.
pub fn display_name(user: Option<&User>) -> Option<String> {
    user.map(|u| u.name.clone())
}

fn attachment(mr: &MergeRequest, days_open: i64) -> Attachment {
    let labels = mr.labels.join(", ");

    Attachment {
        fallback: mr.title.clone(),
        title: mr.title.clone(),
        title_link: mr.web_url.clone(),
        color: color_for(&mr.title, days_open),
        fields: vec![
            Field::short("Days Open", Some(FieldValue::Number(days_open))),
            Field::short("Labels", Some(FieldValue::Text(labels))),
            Field::short(
                "Author",
                display_name(mr.author.as_ref()).map(FieldValue::Text),
            ),
            Field::short(
                "Assignee",
                display_name(mr.assignee.as_ref()).map(FieldValue::Text),
            ),
        ],
    }
}

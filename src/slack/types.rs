use serde::{Serialize, Serializer};

use crate::config::INFO_COLOR;

/// Attachment tint. Slack accepts either a named severity or a hex color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Info,
    Warning,
    Danger,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Info => INFO_COLOR,
            Color::Warning => "warning",
            Color::Danger => "danger",
        }
    }
}

impl Serialize for Color {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Value of an attachment field. Absent values serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(i64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub title: String,
    pub value: Option<FieldValue>,
    pub short: bool,
}

impl Field {
    /// Fields are always rendered side by side.
    pub fn short(title: &str, value: Option<FieldValue>) -> Self {
        Self {
            title: title.to_string(),
            value,
            short: true,
        }
    }
}

/// One merge request rendered as a Slack attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attachment {
    pub fallback: String,
    pub title: String,
    pub title_link: String,
    pub color: Color,
    pub fields: Vec<Field>,
}

/// Body posted to the incoming webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NotificationPayload {
    pub attachments: Vec<Attachment>,
}

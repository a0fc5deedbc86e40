//! Outbound email (`/emails`): sending, replies and scheduling.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

use super::{AttachmentData, EmailTag, Pagination, Recipients};
use crate::query::{QueryBuilder, QueryParams};

/// Email to send, immediately or at `scheduled_at`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostEmailsRequest {
    pub from: String,
    pub to: Recipients,
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bcc: Option<Recipients>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cc: Option<Recipients>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<Recipients>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<AttachmentData>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<EmailTag>,
    /// ISO 8601 timestamp or natural language ("in 1 hour").
    #[serde(
        default,
        rename = "scheduled_at",
        skip_serializing_if = "Option::is_none"
    )]
    pub scheduled_at: Option<String>,
    /// Timezone used to interpret natural-language schedules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostEmailsResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(rename = "scheduled_at", skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<String>,
    /// `sent` or `scheduled`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// Delivery state of a sent email.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LastEvent {
    Pending,
    Delivered,
    Failed,
    #[default]
    #[serde(other)]
    Unknown,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetEmailByIdResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub object: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub from: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub to: Vec<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub cc: Vec<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub bcc: Vec<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub reply_to: Vec<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub subject: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub text: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub html: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub created_at: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub last_event: LastEvent,
}

/// Reply to a received email.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostEmailReplyRequest {
    pub from: String,
    #[serde(
        default,
        rename = "from_name",
        skip_serializing_if = "Option::is_none"
    )]
    pub from_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<Recipients>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cc: Option<Recipients>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bcc: Option<Recipients>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<Recipients>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<AttachmentData>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<EmailTag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_original: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_all: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simple: Option<bool>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostEmailReplyResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub message_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_message_id: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub replied_to_email_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replied_to_thread_id: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub is_thread_reply: bool,
}

/// Email to deliver later.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostScheduleEmailRequest {
    pub from: String,
    pub to: Recipients,
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bcc: Option<Recipients>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cc: Option<Recipients>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<Recipients>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<AttachmentData>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<EmailTag>,
    /// ISO 8601 timestamp or natural language ("tomorrow at 9am").
    #[serde(rename = "scheduled_at")]
    pub scheduled_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostScheduleEmailResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    /// Normalized ISO 8601 timestamp.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub scheduled_at: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub status: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub timezone: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetScheduledEmailsRequest {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub status: Option<String>,
}

impl QueryParams for GetScheduledEmailsRequest {
    fn write_query(&self, query: &mut QueryBuilder) {
        query
            .optional("limit", self.limit.as_ref())
            .optional("offset", self.offset.as_ref())
            .optional("status", self.status.as_ref());
    }
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduledEmailItem {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub from: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub to: Vec<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub subject: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub scheduled_at: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub status: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub timezone: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub created_at: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub attempts: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetScheduledEmailsResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub data: Vec<ScheduledEmailItem>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub pagination: Pagination,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetScheduledEmailResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub from: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub to: Vec<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub cc: Vec<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub bcc: Vec<String>,
    #[serde(rename = "replyTo")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub reply_to: Vec<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub subject: String,
    pub text: Option<String>,
    pub html: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub headers: HashMap<String, String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub attachments: Vec<AttachmentData>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub tags: Vec<EmailTag>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub scheduled_at: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub timezone: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub status: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub attempts: u32,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub max_attempts: u32,
    pub next_retry_at: Option<String>,
    pub last_error: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub created_at: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub updated_at: String,
    pub sent_at: Option<String>,
    pub sent_email_id: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteScheduledEmailResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    /// `cancelled` on success.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub status: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub cancelled_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn send_request_omits_unset_fields() {
        let request = PostEmailsRequest {
            from: "sender@example.com".into(),
            to: vec!["a@example.com", "b@example.com"].into(),
            subject: "Hello".into(),
            text: Some("Hi there".into()),
            cc: Some("c@example.com".into()),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "from": "sender@example.com",
                "to": ["a@example.com", "b@example.com"],
                "subject": "Hello",
                "cc": "c@example.com",
                "text": "Hi there"
            })
        );
    }

    #[test]
    fn schedule_request_uses_snake_case_timestamp() {
        let request = PostScheduleEmailRequest {
            from: "a@example.com".into(),
            to: "b@example.com".into(),
            subject: "Later".into(),
            scheduled_at: "tomorrow at 9am".into(),
            timezone: Some("America/New_York".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["scheduled_at"], "tomorrow at 9am");
        assert_eq!(value["timezone"], "America/New_York");
        assert!(value.get("scheduledAt").is_none());
    }

    #[test]
    fn unknown_last_event_is_tolerated() {
        let email: GetEmailByIdResponse =
            serde_json::from_value(json!({"id": "e1", "last_event": "bounced"})).unwrap();
        assert_eq!(email.last_event, LastEvent::Unknown);
        assert_eq!(email.id, "e1");
    }

    #[test]
    fn null_fields_decode_as_empty() {
        let email: GetEmailByIdResponse = serde_json::from_value(json!({
            "object": "email",
            "id": "e1",
            "cc": null,
            "bcc": null,
            "reply_to": null,
            "html": null,
            "last_event": null
        }))
        .unwrap();

        assert_eq!(email.id, "e1");
        assert!(email.cc.is_empty() && email.bcc.is_empty() && email.reply_to.is_empty());
        assert_eq!(email.html, "");
        assert_eq!(email.last_event, LastEvent::Unknown);
    }
}

//! Inbound mail (`/mail`).

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

use super::Pagination;
use crate::query::{QueryBuilder, QueryParams};

/// A received email as listed in the mailbox.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmailItem {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub email_id: String,
    pub message_id: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub subject: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub from: String,
    pub from_name: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub recipient: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub preview: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub received_at: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub is_read: bool,
    pub read_at: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub is_archived: bool,
    pub archived_at: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub has_attachments: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub attachment_count: u32,
    pub parse_success: Option<bool>,
    pub parse_error: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub created_at: String,
}

/// Mailbox status filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MailStatus {
    All,
    Processed,
    Failed,
}

impl MailStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MailStatus::All => "all",
            MailStatus::Processed => "processed",
            MailStatus::Failed => "failed",
        }
    }
}

/// Received-at window filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "24h")]
    Day,
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
}

impl TimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Day => "24h",
            TimeRange::Week => "7d",
            TimeRange::Month => "30d",
            TimeRange::Quarter => "90d",
        }
    }
}

/// Filters for listing received mail.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetMailRequest {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub search: Option<String>,
    pub status: Option<MailStatus>,
    pub domain: Option<String>,
    pub time_range: Option<TimeRange>,
    pub include_archived: Option<bool>,
    pub email_address: Option<String>,
    pub email_id: Option<String>,
}

impl QueryParams for GetMailRequest {
    fn write_query(&self, query: &mut QueryBuilder) {
        query
            .optional("limit", self.limit.as_ref())
            .optional("offset", self.offset.as_ref())
            .optional("search", self.search.as_ref())
            .omit_empty("status", self.status.map_or("", |s| s.as_str()))
            .optional("domain", self.domain.as_ref())
            .omit_empty("timeRange", self.time_range.map_or("", |t| t.as_str()))
            .optional("includeArchived", self.include_archived.as_ref())
            .optional("emailAddress", self.email_address.as_ref())
            .optional("emailId", self.email_id.as_ref());
    }
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetMailResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub emails: Vec<EmailItem>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub pagination: Pagination,
}

/// Reply sent through the mailbox endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMailRequest {
    pub email_id: String,
    pub to: String,
    pub subject: String,
    pub text_body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_body: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostMailResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub message: String,
}

/// A single received email with its bodies.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetMailByIdResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub email_id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub subject: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub from: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub to: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub text_body: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub html_body: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub received_at: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub attachments: Vec<serde_json::Value>,
}

/// Changes applied by a bulk mail update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MailUpdates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_read: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_archived: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BulkMailRequest<'a> {
    pub email_ids: &'a [String],
    pub updates: &'a MailUpdates,
}

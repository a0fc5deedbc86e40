//! Conversation threads (`/threads`).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

use super::{EmailTag, Pagination};
use crate::query::{QueryBuilder, QueryParams};

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThreadLatestMessage {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    /// `inbound` or `outbound`.
    #[serde(rename = "type")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub kind: String,
    pub subject: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub from_text: String,
    pub text_preview: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub is_read: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub has_attachments: bool,
    pub date: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThreadSummary {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub root_message_id: String,
    pub normalized_subject: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub participant_emails: Vec<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub message_count: u32,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub last_message_at: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub created_at: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub has_unread: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub is_archived: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_message: Option<ThreadLatestMessage>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetThreadsRequest {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub search: Option<String>,
    pub unread: Option<bool>,
    pub archived: Option<bool>,
    pub domain: Option<String>,
    pub address: Option<String>,
}

impl QueryParams for GetThreadsRequest {
    fn write_query(&self, query: &mut QueryBuilder) {
        query
            .optional("limit", self.limit.as_ref())
            .optional("offset", self.offset.as_ref())
            .optional("search", self.search.as_ref())
            .optional("unread", self.unread.as_ref())
            .optional("archived", self.archived.as_ref())
            .optional("domain", self.domain.as_ref())
            .optional("address", self.address.as_ref());
    }
}

/// Filters echoed back by the thread listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetThreadsFilters {
    pub search: Option<String>,
    pub unread_only: Option<bool>,
    pub archived_only: Option<bool>,
    pub domain: Option<String>,
    pub address: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetThreadsResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub threads: Vec<ThreadSummary>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub pagination: Pagination,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub filters: GetThreadsFilters,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThreadAttachment {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub filename: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub content_type: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub size: u64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub content_id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub content_disposition: String,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThreadMessage {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    pub message_id: Option<String>,
    /// `inbound` or `outbound`.
    #[serde(rename = "type")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub kind: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub thread_position: u32,
    pub subject: Option<String>,
    pub text_body: Option<String>,
    pub html_body: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub from: String,
    pub from_name: Option<String>,
    pub from_address: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub to: Vec<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub cc: Vec<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub bcc: Vec<String>,
    pub date: Option<String>,
    pub received_at: Option<String>,
    pub sent_at: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub is_read: bool,
    pub read_at: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub has_attachments: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub attachments: Vec<ThreadAttachment>,
    pub in_reply_to: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub references: Vec<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub headers: HashMap<String, serde_json::Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub tags: Vec<EmailTag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThreadMetadata {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub root_message_id: String,
    pub normalized_subject: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub participant_emails: Vec<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub message_count: u32,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub last_message_at: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub created_at: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub updated_at: String,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetThreadByIdResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub thread: ThreadMetadata,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub messages: Vec<ThreadMessage>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total_count: u32,
}

/// Action applied to every message of a thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadAction {
    MarkAsRead,
    MarkAsUnread,
    Archive,
    Unarchive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostThreadActionsRequest {
    pub action: ThreadAction,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostThreadActionsResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub success: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub action: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub thread_id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub affected_messages: u32,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub message: String,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThreadDistribution {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub single_message_threads: u32,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub short_threads: u32,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub medium_threads: u32,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub long_threads: u32,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThreadRecentActivity {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub threads_today: u32,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub messages_today: u32,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub threads_this_week: u32,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub messages_this_week: u32,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThreadUnreadStats {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub unread_threads: u32,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub unread_messages: u32,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MostActiveThread {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub thread_id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub message_count: u32,
    pub subject: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub last_message_at: String,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetThreadStatsResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total_threads: u32,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total_messages: u32,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub average_messages_per_thread: f64,
    pub most_active_thread: Option<MostActiveThread>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub recent_activity: ThreadRecentActivity,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub distribution: ThreadDistribution,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub unread_stats: ThreadUnreadStats,
}

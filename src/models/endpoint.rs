//! Delivery endpoints (`/endpoints`).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

use super::Pagination;
use crate::query::{QueryBuilder, QueryParams};

/// Kind of delivery target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointType {
    #[default]
    Webhook,
    Email,
    EmailGroup,
}

impl EndpointType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndpointType::Webhook => "webhook",
            EndpointType::Email => "email",
            EndpointType::EmailGroup => "email_group",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookConfig {
    pub url: String,
    /// Milliseconds.
    pub timeout: u32,
    pub retry_attempts: u32,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailConfig {
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailGroupConfig {
    pub emails: Vec<String>,
}

/// Endpoint configuration; the variant matches [`EndpointType`].
///
/// Shapes the client does not know are kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EndpointConfig {
    Webhook(WebhookConfig),
    Email(EmailConfig),
    EmailGroup(EmailGroupConfig),
    Other(serde_json::Value),
}

impl Default for EndpointConfig {
    fn default() -> Self {
        EndpointConfig::Other(serde_json::Value::Null)
    }
}

impl From<WebhookConfig> for EndpointConfig {
    fn from(config: WebhookConfig) -> Self {
        EndpointConfig::Webhook(config)
    }
}

impl From<EmailConfig> for EndpointConfig {
    fn from(config: EmailConfig) -> Self {
        EndpointConfig::Email(config)
    }
}

impl From<EmailGroupConfig> for EndpointConfig {
    fn from(config: EmailGroupConfig) -> Self {
        EndpointConfig::EmailGroup(config)
    }
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeliveryStats {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total: u64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub successful: u64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub failed: u64,
    pub last_delivery: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EndpointWithStats {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub name: String,
    #[serde(rename = "type")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub kind: EndpointType,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub config: EndpointConfig,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub is_active: bool,
    pub description: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub user_id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub created_at: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub updated_at: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub group_emails: Vec<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub delivery_stats: DeliveryStats,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetEndpointsRequest {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub kind: Option<EndpointType>,
    pub active: Option<bool>,
}

impl QueryParams for GetEndpointsRequest {
    fn write_query(&self, query: &mut QueryBuilder) {
        query
            .optional("limit", self.limit.as_ref())
            .optional("offset", self.offset.as_ref())
            .omit_empty("type", self.kind.map_or("", |k| k.as_str()))
            .optional("active", self.active.as_ref());
    }
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetEndpointsResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub data: Vec<EndpointWithStats>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostEndpointsRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EndpointType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub config: EndpointConfig,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostEndpointsResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub name: String,
    #[serde(rename = "type")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub kind: EndpointType,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub config: EndpointConfig,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub is_active: bool,
    pub description: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub created_at: String,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetEndpointByIdResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub name: String,
    #[serde(rename = "type")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub kind: EndpointType,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub config: EndpointConfig,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub is_active: bool,
    pub description: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub delivery_stats: DeliveryStats,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub recent_deliveries: Vec<serde_json::Value>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub associated_emails: Vec<serde_json::Value>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub catch_all_domains: Vec<serde_json::Value>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub created_at: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutEndpointByIdRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<EndpointConfig>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PutEndpointByIdResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub name: String,
    pub description: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub is_active: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub config: EndpointConfig,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub updated_at: String,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EndpointCleanup {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub email_addresses_updated: u32,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub domains_updated: u32,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub group_emails_deleted: u32,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub deliveries_deleted: u32,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub email_addresses: Vec<serde_json::Value>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub domains: Vec<serde_json::Value>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteEndpointByIdResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub message: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub cleanup: EndpointCleanup,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn config_variants_are_recognized() {
        let webhook: EndpointConfig = serde_json::from_value(json!({
            "url": "https://hooks.example.com/in",
            "timeout": 30000,
            "retryAttempts": 3
        }))
        .unwrap();
        assert!(matches!(webhook, EndpointConfig::Webhook(ref c) if c.retry_attempts == 3));

        let email: EndpointConfig =
            serde_json::from_value(json!({"email": "ops@example.com"})).unwrap();
        assert_eq!(
            email,
            EndpointConfig::Email(EmailConfig {
                email: "ops@example.com".into()
            })
        );

        let group: EndpointConfig =
            serde_json::from_value(json!({"emails": ["a@example.com", "b@example.com"]}))
                .unwrap();
        assert!(matches!(group, EndpointConfig::EmailGroup(ref g) if g.emails.len() == 2));

        let other: EndpointConfig = serde_json::from_value(json!({"slack": "#ops"})).unwrap();
        assert!(matches!(other, EndpointConfig::Other(_)));
    }

    #[test]
    fn endpoint_type_uses_wire_names() {
        assert_eq!(
            serde_json::to_value(EndpointType::EmailGroup).unwrap(),
            json!("email_group")
        );
        let request = PostEndpointsRequest {
            name: "Ops".into(),
            kind: EndpointType::Email,
            description: None,
            config: EmailConfig {
                email: "ops@example.com".into(),
            }
            .into(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"name": "Ops", "type": "email", "config": {"email": "ops@example.com"}})
        );
    }
}

//! Receiving addresses (`/email-addresses`).

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

use super::Pagination;
use crate::query::{QueryBuilder, QueryParams};

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainInfo {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub status: String,
}

/// Where mail for an address is delivered.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoutingInfo {
    /// `webhook`, `endpoint` or `none`.
    #[serde(rename = "type")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub kind: String,
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<serde_json::Value>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub is_active: bool,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmailAddressWithDomain {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub address: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub domain_id: String,
    pub webhook_id: Option<String>,
    pub endpoint_id: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub is_active: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub is_receipt_rule_configured: bool,
    pub receipt_rule_name: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub created_at: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub updated_at: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub user_id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub domain: DomainInfo,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub routing: RoutingInfo,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetEmailAddressesRequest {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub domain_id: Option<String>,
    pub is_active: Option<bool>,
    pub is_receipt_rule_configured: Option<bool>,
}

impl QueryParams for GetEmailAddressesRequest {
    fn write_query(&self, query: &mut QueryBuilder) {
        query
            .optional("limit", self.limit.as_ref())
            .optional("offset", self.offset.as_ref())
            .optional("domainId", self.domain_id.as_ref())
            .optional("isActive", self.is_active.as_ref())
            .optional(
                "isReceiptRuleConfigured",
                self.is_receipt_rule_configured.as_ref(),
            );
    }
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetEmailAddressesResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub data: Vec<EmailAddressWithDomain>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostEmailAddressesRequest {
    pub address: String,
    pub domain_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostEmailAddressesResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub address: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub domain_id: String,
    pub endpoint_id: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub is_active: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub domain: DomainInfo,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub routing: RoutingInfo,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub created_at: String,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetEmailAddressByIdResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub address: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub domain_id: String,
    pub endpoint_id: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub is_active: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub is_receipt_rule_configured: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub domain: DomainInfo,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub routing: RoutingInfo,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub created_at: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutEmailAddressByIdRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_id: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PutEmailAddressByIdResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub address: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub is_active: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub domain: DomainInfo,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub routing: RoutingInfo,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub updated_at: String,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmailAddressCleanup {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub email_address: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub domain: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub ses_rule_updated: bool,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteEmailAddressByIdResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub message: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub cleanup: EmailAddressCleanup,
}

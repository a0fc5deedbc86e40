//! Domains (`/domains`).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

use super::Pagination;
use crate::query::{QueryBuilder, QueryParams};

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatchAllEndpoint {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub name: String,
    #[serde(rename = "type")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub kind: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub is_active: bool,
}

/// DNS record the domain owner must publish.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DnsRecord {
    #[serde(rename = "type")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub kind: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub value: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub is_verified: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VerificationCheck {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub dns_records: Vec<DnsRecord>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub ses_status: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub is_fully_verified: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub last_checked: String,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DomainStats {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total_email_addresses: u32,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub active_email_addresses: u32,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub has_catch_all: bool,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DomainWithStats {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub domain: String,
    /// `pending`, `verified` or `failed`.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub status: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub can_receive_emails: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub has_mx_records: bool,
    pub domain_provider: Option<String>,
    pub provider_confidence: Option<String>,
    pub last_dns_check: Option<String>,
    pub last_ses_check: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub is_catch_all_enabled: bool,
    pub catch_all_endpoint_id: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub receive_dmarc_emails: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub created_at: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub updated_at: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub user_id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub stats: DomainStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catch_all_endpoint: Option<CatchAllEndpoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_check: Option<VerificationCheck>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetDomainsRequest {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub status: Option<String>,
    pub can_receive: Option<bool>,
    /// Run a live DNS check for each domain.
    pub check: Option<bool>,
}

impl QueryParams for GetDomainsRequest {
    fn write_query(&self, query: &mut QueryBuilder) {
        query
            .optional("limit", self.limit.as_ref())
            .optional("offset", self.offset.as_ref())
            .optional("status", self.status.as_ref())
            .optional("canReceive", self.can_receive.as_ref())
            .optional("check", self.check.as_ref());
    }
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DomainsMeta {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total_count: u64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub verified_count: u64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub with_catch_all_count: u64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub status_breakdown: HashMap<String, u64>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetDomainsResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub data: Vec<DomainWithStats>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub pagination: Pagination,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub meta: DomainsMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDomainsRequest {
    pub domain: String,
}

impl PostDomainsRequest {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
        }
    }
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostDomainsResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub domain: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub status: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub dns_records: Vec<DnsRecord>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub created_at: String,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetDomainByIdResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub domain: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub status: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub can_receive_emails: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub is_catch_all_enabled: bool,
    pub catch_all_endpoint_id: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub stats: DomainStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catch_all_endpoint: Option<CatchAllEndpoint>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub created_at: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub updated_at: String,
}

/// Catch-all configuration for a domain. `catch_all_endpoint_id` is always
/// sent, as `null` when cleared.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutDomainByIdRequest {
    pub is_catch_all_enabled: bool,
    pub catch_all_endpoint_id: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PutDomainByIdResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub domain: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub is_catch_all_enabled: bool,
    pub catch_all_endpoint_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catch_all_endpoint: Option<CatchAllEndpoint>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub updated_at: String,
}

use reqwest::Method;

use crate::client::segment;
use crate::models::{
    GetDomainByIdResponse, GetDomainsRequest, GetDomainsResponse, PostDomainsRequest,
    PostDomainsResponse, PutDomainByIdRequest, PutDomainByIdResponse,
};
use crate::query::build_query_string;
use crate::{ApiResponse, Client, Result};

/// Sending and receiving domains (`/domains`).
#[derive(Debug, Clone, Copy)]
pub struct DomainService<'a> {
    client: &'a Client,
}

impl<'a> DomainService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Register a domain. The response lists the DNS records to publish.
    pub async fn create(
        &self,
        params: &PostDomainsRequest,
    ) -> Result<ApiResponse<PostDomainsResponse>> {
        self.client
            .send_json(Method::POST, "/domains", params, None)
            .await
    }

    pub async fn list(
        &self,
        params: Option<&GetDomainsRequest>,
    ) -> Result<ApiResponse<GetDomainsResponse>> {
        let path = format!("/domains{}", build_query_string(params));
        self.client.get(&path).await
    }

    pub async fn get(&self, id: &str) -> Result<ApiResponse<GetDomainByIdResponse>> {
        self.client.get(&format!("/domains/{}", segment(id))).await
    }

    /// Update catch-all settings.
    pub async fn update(
        &self,
        id: &str,
        params: &PutDomainByIdRequest,
    ) -> Result<ApiResponse<PutDomainByIdResponse>> {
        let path = format!("/domains/{}", segment(id));
        self.client
            .send_json(Method::PUT, &path, params, None)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<ApiResponse<serde_json::Value>> {
        self.client
            .send_empty(Method::DELETE, &format!("/domains/{}", segment(id)))
            .await
    }

    /// Start verification of a domain.
    pub async fn verify(&self, id: &str) -> Result<ApiResponse<serde_json::Value>> {
        self.client
            .send_empty(Method::POST, &format!("/domains/{}/auth", segment(id)))
            .await
    }

    /// DNS records required for verification.
    pub async fn dns_records(&self, id: &str) -> Result<ApiResponse<serde_json::Value>> {
        self.client
            .get(&format!("/domains/{}/dns-records", segment(id)))
            .await
    }

    /// Re-check verification status.
    pub async fn check_status(&self, id: &str) -> Result<ApiResponse<serde_json::Value>> {
        self.client
            .send_empty(Method::PATCH, &format!("/domains/{}/auth", segment(id)))
            .await
    }
}
